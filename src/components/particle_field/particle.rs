//! A single floating particle and its per-frame motion.

use rand::Rng;

use super::pointer::PointerState;
use super::random::random_range;
use super::theme::ParticleStyle;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current horizontal position.
	pub x: f64,
	/// Current vertical position.
	pub y: f64,
	/// Spawn position. Not read by any force.
	pub base_x: f64,
	/// Spawn position, vertical.
	pub base_y: f64,
	/// Render radius.
	pub size: f64,
	/// How strongly the particle reacts to the pointer.
	pub density: f64,
	/// Horizontal drift per frame.
	pub vx: f64,
	/// Vertical drift per frame.
	pub vy: f64,
}

/// Spawn a particle uniformly inside a `width` x `height` viewport.
pub fn seed_particle<R: Rng + ?Sized>(
	rng: &mut R,
	style: &ParticleStyle,
	width: f64,
	height: f64,
) -> Particle {
	let x = random_range(rng, 0.0, width);
	let y = random_range(rng, 0.0, height);

	Particle {
		x,
		y,
		base_x: x,
		base_y: y,
		size: random_range(rng, style.size_min, style.size_max),
		density: random_range(rng, style.density_min, style.density_max),
		vx: random_range(rng, -style.drift_speed, style.drift_speed),
		vy: random_range(rng, -style.drift_speed, style.drift_speed),
	}
}

/// Advance a particle by one frame: drift, wrap, pointer repulsion, wrap.
pub fn update_particle(p: &mut Particle, pointer: &PointerState, width: f64, height: f64) {
	p.x += p.vx;
	p.y += p.vy;
	wrap(p, width, height);

	if let Some((dx, dy)) = repulsion(p, pointer) {
		p.x -= dx;
		p.y -= dy;
		wrap(p, width, height);
	}
}

/// Displacement toward the pointer scaled by falloff and density, or `None`
/// when the pointer is unknown, out of range, or exactly on the particle.
fn repulsion(p: &Particle, pointer: &PointerState) -> Option<(f64, f64)> {
	let (px, py) = pointer.position()?;
	let (dx, dy) = (px - p.x, py - p.y);
	let dist = (dx * dx + dy * dy).sqrt();
	let radius = pointer.radius();

	if !(dist > 0.0 && dist < radius) {
		return None;
	}

	let force = (radius - dist) / radius;
	let scale = force * p.density / dist;
	Some((dx * scale, dy * scale))
}

fn wrap(p: &mut Particle, width: f64, height: f64) {
	p.x = wrap_axis(p.x, width);
	p.y = wrap_axis(p.y, height);
}

/// Wrap a coordinate into `[0, extent)`.
fn wrap_axis(v: f64, extent: f64) -> f64 {
	if extent <= 0.0 || !v.is_finite() {
		return 0.0;
	}
	if (0.0..extent).contains(&v) {
		return v;
	}
	let wrapped = v.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}
