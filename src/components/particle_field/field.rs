//! The particle collection and its per-frame step.

use log::debug;
use rand::Rng;

use super::particle::{Particle, seed_particle, update_particle};
use super::pointer::PointerState;
use super::render::{self, DrawSurface};
use super::theme::Theme;

/// Number of particles for a viewport, proportional to its area.
pub fn particle_count(width: f64, height: f64, area_per_particle: f64) -> usize {
	let count = (width * height / area_per_particle).floor();
	if count.is_finite() && count > 0.0 {
		count as usize
	} else {
		0
	}
}

/// Owns every particle and the viewport they live in.
///
/// Seeded once on mount and again, from scratch, on every resize. `step` is
/// called once per animation frame.
pub struct ParticleField {
	particles: Vec<Particle>,
	theme: Theme,
	particle_color: String,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Create an empty field. Invalid theme values are replaced with defaults.
	pub fn new(theme: Theme) -> Self {
		let theme = theme.normalized();
		let particle_color = theme.particles.color.to_css();
		Self {
			particles: Vec::new(),
			theme,
			particle_color,
			width: 0.0,
			height: 0.0,
		}
	}

	/// Particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// The normalized theme the field was built with.
	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	/// Viewport width from the last `seed`.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height from the last `seed`.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Discard all particles and spawn a fresh set sized to the viewport.
	pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
		let style = &self.theme.particles;
		let count = particle_count(width, height, style.area_per_particle);

		self.width = width;
		self.height = height;
		self.particles = (0..count)
			.map(|_| seed_particle(rng, style, width, height))
			.collect();

		debug!(
			"particle-field: seeded {} particles for {}x{}",
			count, width, height
		);
	}

	/// Clear the surface, then move and draw every particle in order.
	pub fn step(&mut self, pointer: &PointerState, surface: &impl DrawSurface) {
		surface.clear(self.width, self.height);

		for p in &mut self.particles {
			update_particle(p, pointer, self.width, self.height);
			render::draw_particle(surface, p, &self.particle_color);
		}

		if self.theme.links.enabled {
			render::draw_links(
				surface,
				&self.particles,
				&self.theme.links,
				self.width,
				self.height,
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::render::tests::{DrawOp, RecordingSurface};

	fn seeded(width: f64, height: f64) -> ParticleField {
		let mut rng = StdRng::seed_from_u64(11);
		let mut field = ParticleField::new(Theme::default());
		field.seed(&mut rng, width, height);
		field
	}

	#[test]
	fn count_follows_area() {
		assert_eq!(particle_count(800.0, 600.0, 9000.0), 53);
		assert_eq!(particle_count(1920.0, 1080.0, 9000.0), 230);
		assert_eq!(particle_count(90.0, 99.0, 9000.0), 0);
		assert_eq!(particle_count(0.0, 600.0, 9000.0), 0);
		assert_eq!(particle_count(-10.0, 600.0, 9000.0), 0);
	}

	#[test]
	fn seed_produces_floor_area_count_in_range() {
		let field = seeded(800.0, 600.0);
		assert_eq!(field.particles().len(), 53);
		for p in field.particles() {
			assert!((1.0..4.0).contains(&p.size));
			assert!((1.0..31.0).contains(&p.density));
			assert!((-0.5..0.5).contains(&p.vx));
			assert!((-0.5..0.5).contains(&p.vy));
		}
	}

	#[test]
	fn reseed_replaces_collection() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut field = ParticleField::new(Theme::default());

		field.seed(&mut rng, 800.0, 600.0);
		let first = field.particles().to_vec();
		field.seed(&mut rng, 800.0, 600.0);

		assert_eq!(first.len(), 53);
		assert_eq!(field.particles().len(), 53);
		assert_ne!(first, field.particles());
	}

	#[test]
	fn reseed_on_resize_uses_new_bounds() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut field = ParticleField::new(Theme::default());
		field.seed(&mut rng, 1920.0, 1080.0);
		field.seed(&mut rng, 300.0, 300.0);

		assert_eq!(field.particles().len(), 10);
		assert_eq!((field.width(), field.height()), (300.0, 300.0));
		assert!(field.particles().iter().all(|p| p.x < 300.0 && p.y < 300.0));
	}

	#[test]
	fn step_clears_then_draws_each_particle() {
		let mut field = seeded(300.0, 300.0);
		let surface = RecordingSurface::default();
		field.step(&PointerState::new(150.0), &surface);

		let ops = surface.ops.borrow();
		assert_eq!(ops[0], DrawOp::Clear(300.0, 300.0));
		assert_eq!(ops.len(), 1 + field.particles().len());
		for (op, p) in ops[1..].iter().zip(field.particles()) {
			assert_eq!(
				*op,
				DrawOp::Circle(p.x, p.y, p.size, "rgba(255, 255, 255, 0.2)".to_string())
			);
		}
	}

	#[test]
	fn positions_stay_in_bounds_over_many_frames() {
		let mut field = seeded(640.0, 480.0);
		let mut pointer = PointerState::new(150.0);
		let surface = RecordingSurface::default();

		for frame in 0..600 {
			let t = frame as f64 * 0.05;
			pointer.move_to(320.0 + 300.0 * t.cos(), 240.0 + 220.0 * t.sin());
			field.step(&pointer, &surface);
			for p in field.particles() {
				assert!((0.0..640.0).contains(&p.x), "x = {}", p.x);
				assert!((0.0..480.0).contains(&p.y), "y = {}", p.y);
			}
		}
	}

	#[test]
	fn no_pointer_means_pure_drift() {
		let mut field = seeded(900.0, 900.0);
		let before = field.particles().to_vec();
		field.step(&PointerState::new(150.0), &RecordingSurface::default());

		for (old, new) in before.iter().zip(field.particles()) {
			let moved = ((new.x - old.x).powi(2) + (new.y - old.y).powi(2)).sqrt();
			// a wrap jumps by nearly the full extent; anything else is drift
			assert!(moved <= 0.5_f64.hypot(0.5) + 1e-9 || moved > 800.0);
		}
	}

	#[test]
	fn invalid_theme_is_normalized_before_seeding() {
		let mut theme = Theme::default();
		theme.particles.density_min = -10.0;
		theme.particles.density_max = -1.0;
		theme.particles.pointer_radius = -5.0;
		theme.particles.area_per_particle = 0.0;

		let mut rng = StdRng::seed_from_u64(4);
		let mut field = ParticleField::new(theme);
		field.seed(&mut rng, 800.0, 600.0);

		assert_eq!(field.theme().particles.pointer_radius, 150.0);
		assert_eq!(field.particles().len(), 53);
		assert!(field.particles().iter().all(|p| (1.0..31.0).contains(&p.density)));
	}

	#[test]
	fn links_drawn_after_particles_when_enabled() {
		let mut theme = Theme::default();
		theme.links.enabled = true;
		let mut rng = StdRng::seed_from_u64(2);
		let mut field = ParticleField::new(theme);
		field.seed(&mut rng, 300.0, 300.0);

		let surface = RecordingSurface::default();
		field.step(&PointerState::new(150.0), &surface);

		let ops = surface.ops.borrow();
		let circles = field.particles().len();
		assert!(ops[1..=circles].iter().all(|op| matches!(op, DrawOp::Circle(..))));
		assert!(ops[circles + 1..].iter().all(|op| matches!(op, DrawOp::Line(..))));
	}
}
