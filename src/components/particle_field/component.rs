//! Leptos component wrapping the particle field canvas.
//!
//! The canvas is fixed behind the page and ignores pointer events, so pointer
//! movement is tracked on the window instead. A [`FrameLoop`] steps the field
//! every animation frame for the rest of the session.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::ParticleField;
use super::pointer::PointerState;
use super::theme::Theme;
use crate::frame_loop::{FrameControl, FrameLoop};

/// Simulation state shared between the frame loop and the event listeners.
struct FieldContext {
	field: ParticleField,
	pointer: PointerState,
	rng: StdRng,
}

/// Viewport size in whole canvas pixels.
fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w.floor(), h.floor()))
}

/// Renders the pointer-reactive particle field as a full-viewport background.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] theme: Theme) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let mousemove_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("particle-field: no window, not starting");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("particle-field: could not read viewport size");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("particle-field: 2d canvas context unavailable");
				return;
			}
		};

		let mut rng = StdRng::from_entropy();
		let mut field = ParticleField::new(theme.clone());
		let pointer = PointerState::new(field.theme().particles.pointer_radius);
		field.seed(&mut rng, w, h);
		*context.borrow_mut() = Some(FieldContext {
			field,
			pointer,
			rng,
		});

		let context_mm = context.clone();
		*mousemove_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_mm.borrow_mut() {
				c.pointer.move_to(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *mousemove_cb.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.seed(&mut c.rng, nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_anim = context.clone();
		let frames = FrameLoop::new(move |_| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.step(&c.pointer, &ctx);
			}
			FrameControl::Continue
		});
		if let Err(e) = frames.start() {
			warn!("particle-field: could not start animation: {:?}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="antigravity-bg"
			class="particle-field-canvas"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}
