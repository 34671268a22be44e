//! Display-synced callback scheduling over `requestAnimationFrame`.
//!
//! A [`FrameLoop`] owns one closure for its whole life and reschedules it for
//! as long as the frame callback asks to continue. Once stopped it can be
//! started again without allocating a new closure.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// What a frame callback wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
	/// Schedule another frame.
	Continue,
	/// Let the loop go idle until the next `start`.
	Stop,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling animation frame callback.
#[derive(Clone)]
pub struct FrameLoop {
	callback: FrameCallback,
	running: Rc<Cell<bool>>,
}

impl FrameLoop {
	/// Wrap `on_frame`, which receives the frame timestamp in milliseconds.
	pub fn new(mut on_frame: impl FnMut(f64) -> FrameControl + 'static) -> Self {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let running = Rc::new(Cell::new(false));
		let (callback_inner, running_inner) = (callback.clone(), running.clone());

		*callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			after_frame(on_frame(timestamp), &running_inner, || {
				request_frame(&callback_inner)
			});
		}));

		Self { callback, running }
	}

	/// Schedule the first frame unless the loop is already running.
	pub fn start(&self) -> Result<(), JsValue> {
		start_once(&self.running, || request_frame(&self.callback))
	}

	/// Whether a frame is currently scheduled.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}
}

fn start_once<E>(running: &Cell<bool>, request: impl FnOnce() -> Result<i32, E>) -> Result<(), E> {
	if running.get() {
		return Ok(());
	}
	request()?;
	running.set(true);
	Ok(())
}

fn after_frame<E: std::fmt::Debug>(
	control: FrameControl,
	running: &Cell<bool>,
	request: impl FnOnce() -> Result<i32, E>,
) {
	match control {
		FrameControl::Continue => {
			if let Err(e) = request() {
				log::warn!("frame loop: failed to schedule frame: {:?}", e);
				running.set(false);
			}
		}
		FrameControl::Stop => running.set(false),
	}
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let callback = callback.borrow();
	let callback = callback
		.as_ref()
		.ok_or_else(|| JsValue::from_str("frame callback missing"))?;
	window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn start_is_idempotent_in_browser() {
		let frames = FrameLoop::new(|_| FrameControl::Stop);
		assert!(!frames.is_running());
		frames.start().unwrap();
		frames.start().unwrap();
		assert!(frames.is_running());
	}
}
