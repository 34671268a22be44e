//! Drawing primitives and the passes that use them.
//!
//! The simulation only talks to a [`DrawSurface`], so tests can record draw
//! calls instead of needing a browser canvas.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particle::Particle;
use super::theme::LinkStyle;

/// Minimal 2D drawing surface.
pub trait DrawSurface {
	/// Clear the region `(0, 0)..(width, height)`.
	fn clear(&self, width: f64, height: f64);
	/// Fill a circle centred on `(x, y)` with a CSS color.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str);
	/// Stroke a straight line with a CSS color.
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.set_fill_style_str(color);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.close_path();
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Fill one particle as a circle of its own size.
pub fn draw_particle(surface: &impl DrawSurface, p: &Particle, color: &str) {
	surface.fill_circle(p.x, p.y, p.size, color);
}

/// Join every pair of nearby particles with a faint line whose opacity falls
/// off with squared distance.
pub fn draw_links(
	surface: &impl DrawSurface,
	particles: &[Particle],
	style: &LinkStyle,
	width: f64,
	height: f64,
) {
	let reach = (width / style.cell_divisor) * (height / style.cell_divisor);

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let d2 = (a.x - b.x).powi(2) + (a.y - b.y).powi(2);
			if d2 >= reach {
				continue;
			}
			if let Some(alpha) = link_alpha(d2, style) {
				let color = style.color.with_alpha(alpha).to_css();
				surface.stroke_line((a.x, a.y), (b.x, b.y), style.line_width, &color);
			}
		}
	}
}

fn link_alpha(d2: f64, style: &LinkStyle) -> Option<f64> {
	let opacity = 1.0 - d2 / style.falloff;
	(opacity > 0.0).then(|| opacity * style.alpha_scale)
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use super::*;

	/// A recorded draw call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear(f64, f64),
		Circle(f64, f64, f64, String),
		Line((f64, f64), (f64, f64), String),
	}

	/// Surface that remembers every call instead of drawing.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: RefCell<Vec<DrawOp>>,
	}

	impl DrawSurface for RecordingSurface {
		fn clear(&self, width: f64, height: f64) {
			self.ops.borrow_mut().push(DrawOp::Clear(width, height));
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
			self.ops
				.borrow_mut()
				.push(DrawOp::Circle(x, y, radius, color.to_string()));
		}

		fn stroke_line(&self, from: (f64, f64), to: (f64, f64), _width: f64, color: &str) {
			self.ops
				.borrow_mut()
				.push(DrawOp::Line(from, to, color.to_string()));
		}
	}

	fn dot(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			base_x: x,
			base_y: y,
			size: 1.0,
			density: 1.0,
			vx: 0.0,
			vy: 0.0,
		}
	}

	#[test]
	fn links_only_close_pairs() {
		let surface = RecordingSurface::default();
		let particles = [dot(0.0, 0.0), dot(100.0, 0.0), dot(700.0, 700.0)];
		draw_links(&surface, &particles, &LinkStyle::default(), 1400.0, 1400.0);

		let ops = surface.ops.borrow();
		assert_eq!(ops.len(), 1);
		let DrawOp::Line(from, to, color) = &ops[0] else {
			panic!("expected a line, got {:?}", ops[0]);
		};
		assert_eq!((*from, *to), ((0.0, 0.0), (100.0, 0.0)));
		// d2 = 10000 -> opacity 0.5 -> alpha 0.025
		assert_eq!(color, "rgba(255, 255, 255, 0.025)");
	}

	#[test]
	fn links_fade_out_past_falloff() {
		let style = LinkStyle::default();
		assert_eq!(link_alpha(20000.0, &style), None);
		assert_eq!(link_alpha(0.0, &style), Some(0.05));
	}
}
