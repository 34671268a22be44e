//! Eased smooth scrolling for in-page anchor links.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, MouseEvent};

use super::{elements, on_click};
use crate::frame_loop::{FrameControl, FrameLoop};

/// Space left above the target for the fixed header, in pixels.
const HEADER_OFFSET: f64 = 100.0;
const DURATION_MS: f64 = 1500.0;

/// Cubic ease-in-out: `t` elapsed, `b` start, `c` change, `d` duration.
pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
	let mut t = t / (d / 2.0);
	if t < 1.0 {
		return c / 2.0 * t * t * t + b;
	}
	t -= 2.0;
	c / 2.0 * (t * t * t + 2.0) + b
}

/// One scroll from `start_y` by `distance`, timed from its first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
	start_y: f64,
	distance: f64,
	started_at: Option<f64>,
}

impl ScrollAnimation {
	/// Scroll from `start_y` to `target_y`.
	pub fn new(start_y: f64, target_y: f64) -> Self {
		Self {
			start_y,
			distance: target_y - start_y,
			started_at: None,
		}
	}

	/// Scroll position for a frame timestamp and whether to keep going.
	pub fn frame(&mut self, timestamp: f64) -> (f64, FrameControl) {
		let started_at = *self.started_at.get_or_insert(timestamp);
		let progress = (timestamp - started_at).min(DURATION_MS);
		let y = ease_in_out_cubic(progress, self.start_y, self.distance, DURATION_MS);

		if progress < DURATION_MS {
			(y, FrameControl::Continue)
		} else {
			(y, FrameControl::Stop)
		}
	}
}

/// Animate clicks on `a[href^="#"]` toward their target element.
pub fn wire_smooth_scroll(document: &Document) -> Result<(), JsValue> {
	let animation: Rc<RefCell<Option<ScrollAnimation>>> = Rc::new(RefCell::new(None));

	let animation_frame = animation.clone();
	let frames = FrameLoop::new(move |timestamp| {
		let mut slot = animation_frame.borrow_mut();
		let Some(anim) = slot.as_mut() else {
			return FrameControl::Stop;
		};
		let (y, control) = anim.frame(timestamp);
		if let Some(window) = web_sys::window() {
			window.scroll_to_with_x_and_y(0.0, y);
		}
		control
	});

	let anchors = elements(document, r##"a[href^="#"]"##)?;
	if anchors.is_empty() {
		warn!("page: no in-page anchors found, smooth scroll disabled");
		return Ok(());
	}

	for anchor in anchors {
		let (document, animation, frames) = (document.clone(), animation.clone(), frames.clone());
		let href = anchor.get_attribute("href").unwrap_or_default();
		on_click(&anchor, move |ev: MouseEvent| {
			ev.prevent_default();
			// "#" alone is not a valid selector; treat it like a missing target
			let Some(target) = document.query_selector(&href).ok().flatten() else {
				return;
			};
			let Some(start_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
				return;
			};
			*animation.borrow_mut() = Some(ScrollAnimation::new(
				start_y,
				target_offset(&target, start_y),
			));
			if let Err(e) = frames.start() {
				warn!("page: could not start scroll animation: {:?}", e);
			}
		})?;
	}
	Ok(())
}

fn target_offset(target: &Element, scroll_y: f64) -> f64 {
	target.get_bounding_client_rect().top() + scroll_y - HEADER_OFFSET
}
