//! Mobile navigation toggle and the CV download notice.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, MouseEvent};

use super::i18n::{Lang, cv_notice};
use super::{elements, on_click};

const NAV_OPEN_CLASS: &str = "nav-active";
const HAMBURGER_OPEN_CLASS: &str = "toggle";

/// Toggle the nav from `.hamburger`; close it again when a nav link is chosen.
pub fn wire_mobile_menu(document: &Document) -> Result<(), JsValue> {
	let (Some(hamburger), Some(nav_links)) = (
		document.query_selector(".hamburger")?,
		document.query_selector(".nav-links")?,
	) else {
		warn!("page: .hamburger or .nav-links not found, mobile menu disabled");
		return Ok(());
	};

	let (hamburger_click, nav_click) = (hamburger.clone(), nav_links.clone());
	on_click(&hamburger, move |_| {
		let _ = nav_click.class_list().toggle(NAV_OPEN_CLASS);
		let _ = hamburger_click.class_list().toggle(HAMBURGER_OPEN_CLASS);
	})?;

	for link in elements(document, ".nav-links li")? {
		let (hamburger, nav_links) = (hamburger.clone(), nav_links.clone());
		on_click(&link, move |_| close_menu(&hamburger, &nav_links))?;
	}
	Ok(())
}

fn close_menu(hamburger: &Element, nav_links: &Element) {
	let _ = nav_links.class_list().remove_1(NAV_OPEN_CLASS);
	let _ = hamburger.class_list().remove_1(HAMBURGER_OPEN_CLASS);
}

/// Replace the CV download with a notice in the current language.
pub fn wire_cv_notice(document: &Document, current: Rc<Cell<Lang>>) -> Result<(), JsValue> {
	let Some(button) = document.get_element_by_id("cv-btn") else {
		warn!("page: #cv-btn not found, cv notice disabled");
		return Ok(());
	};

	on_click(&button, move |ev: MouseEvent| {
		ev.prevent_default();
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(cv_notice(current.get()));
		}
	})
}
