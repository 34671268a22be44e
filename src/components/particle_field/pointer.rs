//! Last known pointer position and its interaction radius.

/// Pointer context shared read-only by every particle during a tick.
///
/// Coordinates stay `None` until the first pointer movement of the session,
/// which disables repulsion entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
	/// Horizontal client coordinate.
	pub x: Option<f64>,
	/// Vertical client coordinate.
	pub y: Option<f64>,
	radius: f64,
}

impl PointerState {
	/// Create a pointer with no position yet. `radius` must be positive.
	pub fn new(radius: f64) -> Self {
		debug_assert!(radius > 0.0, "pointer radius must be positive");
		Self {
			x: None,
			y: None,
			radius,
		}
	}

	/// Interaction radius in pixels.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Record a pointer movement. Last write wins.
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.x = Some(x);
		self.y = Some(y);
	}

	/// Both coordinates, if the pointer has been seen.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.x.zip(self.y)
	}
}
