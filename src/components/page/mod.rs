//! Page behaviours around the background: language switching, smooth anchor
//! scrolling, the mobile menu and the CV notice.
//!
//! Each feature looks up its elements once at startup and is skipped with a
//! warning when they are missing.

mod i18n;
mod menu;
mod scroll;

use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, MouseEvent};

pub use i18n::{Lang, apply_language, cv_notice, translate};
pub use scroll::{ScrollAnimation, ease_in_out_cubic};

/// Wire every page behaviour to the current document.
pub fn init() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("page: no document, skipping page behaviours");
		return;
	};

	let lang = Rc::new(Cell::new(Lang::default()));
	let results = [
		("language toggle", i18n::wire_language_toggle(&document, lang.clone())),
		("smooth scroll", scroll::wire_smooth_scroll(&document)),
		("mobile menu", menu::wire_mobile_menu(&document)),
		("cv notice", menu::wire_cv_notice(&document, lang)),
	];
	for (feature, result) in results {
		if let Err(e) = result {
			warn!("page: failed to wire {}: {:?}", feature, e);
		}
	}
	info!("page: behaviours initialized");
}

/// All elements matching `selector`, in document order.
fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
	let list = document.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// Attach a click listener that lives as long as the page.
fn on_click(
	target: &EventTarget,
	handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
	let cb = Closure::<dyn FnMut(MouseEvent)>::new(handler);
	target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
	cb.forget();
	Ok(())
}
