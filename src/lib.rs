//! antigravity-field: pointer-reactive particle background for a portfolio page.
//!
//! This crate provides a WASM canvas component that fills the viewport with
//! drifting particles pushed away by the pointer, plus the small page
//! behaviours (language switch, smooth scrolling, mobile menu) around it.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod frame_loop;

pub use components::particle_field::{ParticleFieldCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("antigravity-field: logging initialized");
}

/// Wire the page behaviours that live outside the canvas.
pub fn init_page() {
	components::page::init();
}

/// Load theme overrides from a script element with id="particle-config".
/// Expected format: partial JSON matching [`Theme`].
fn load_theme() -> Option<Theme> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Theme::from_json(&json_text) {
		Ok(theme) => {
			info!(
				"antigravity-field: loaded theme overrides (radius {}, links {})",
				theme.particles.pointer_radius, theme.links.enabled
			);
			Some(theme)
		}
		Err(e) => {
			warn!("antigravity-field: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads optional theme overrides from the DOM and mounts the background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = load_theme().unwrap_or_default();

	view! {
		<Meta name="color-scheme" content="dark" />
		<ParticleFieldCanvas theme=theme />
	}
}
