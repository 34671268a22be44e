//! Visual theming and tunable constants for the particle field.
//!
//! Every field has a default matching the stock look, so a host page may
//! override any subset of them with JSON:
//!
//! ```json
//! { "particles": { "pointer_radius": 200 }, "links": { "enabled": true } }
//! ```

use log::warn;
use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`, opaque when omitted from JSON.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Build a color from channels and alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS text: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle seeding ranges, pointer interaction and fill color.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Fill color for every particle.
	pub color: Color,
	/// Radius around the pointer inside which particles are pushed away.
	pub pointer_radius: f64,
	/// Viewport area (px²) per particle. Larger is sparser.
	pub area_per_particle: f64,
	/// Drift velocity is sampled from `[-drift_speed, drift_speed)` per axis.
	pub drift_speed: f64,
	/// Smallest render radius.
	pub size_min: f64,
	/// Render radius upper bound (exclusive).
	pub size_max: f64,
	/// Smallest density. Denser particles are displaced further by the pointer.
	pub density_min: f64,
	/// Density upper bound (exclusive).
	pub density_max: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			color: Color::rgba(255, 255, 255, 0.2),
			pointer_radius: 150.0,
			area_per_particle: 9000.0,
			drift_speed: 0.5,
			size_min: 1.0,
			size_max: 4.0,
			density_min: 1.0,
			density_max: 31.0,
		}
	}
}

/// Faint "constellation" lines joining nearby particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Off by default.
	pub enabled: bool,
	/// Base line color; its alpha is replaced per link.
	pub color: Color,
	/// Alpha multiplier applied to the distance-based opacity.
	pub alpha_scale: f64,
	/// Squared distance at which a link fades out completely.
	pub falloff: f64,
	/// Links are only considered below `(W / divisor) * (H / divisor)` squared distance.
	pub cell_divisor: f64,
	/// Stroke width in pixels.
	pub line_width: f64,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			enabled: false,
			color: Color::rgba(255, 255, 255, 1.0),
			alpha_scale: 0.05,
			falloff: 20000.0,
			cell_divisor: 7.0,
			line_width: 1.0,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
	/// Particle seeding, pointer radius and fill.
	pub particles: ParticleStyle,
	/// Constellation links.
	pub links: LinkStyle,
}

impl Theme {
	/// Parse a theme from (possibly partial) JSON.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Theme>(json).map(Theme::normalized)
	}

	/// Replace values that would break the simulation with their defaults.
	pub fn normalized(mut self) -> Self {
		let defaults = ParticleStyle::default();
		let p = &mut self.particles;

		if !(p.pointer_radius.is_finite() && p.pointer_radius > 0.0) {
			warn!(
				"particle-field: pointer_radius {} must be positive, using {}",
				p.pointer_radius, defaults.pointer_radius
			);
			p.pointer_radius = defaults.pointer_radius;
		}
		if !(p.area_per_particle.is_finite() && p.area_per_particle > 0.0) {
			warn!(
				"particle-field: area_per_particle {} must be positive, using {}",
				p.area_per_particle, defaults.area_per_particle
			);
			p.area_per_particle = defaults.area_per_particle;
		}
		if !(p.size_min > 0.0 && p.size_min <= p.size_max) {
			warn!(
				"particle-field: size range {}..{} is invalid, using defaults",
				p.size_min, p.size_max
			);
			(p.size_min, p.size_max) = (defaults.size_min, defaults.size_max);
		}
		if !(p.density_min > 0.0 && p.density_min <= p.density_max) {
			warn!(
				"particle-field: density range {}..{} is invalid, using defaults",
				p.density_min, p.density_max
			);
			(p.density_min, p.density_max) = (defaults.density_min, defaults.density_max);
		}
		p.drift_speed = p.drift_speed.abs();

		if self.links.cell_divisor <= 0.0 {
			self.links.cell_divisor = LinkStyle::default().cell_divisor;
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_stock_constants() {
		let theme = Theme::default();
		assert_eq!(theme.particles.pointer_radius, 150.0);
		assert_eq!(theme.particles.area_per_particle, 9000.0);
		assert_eq!(theme.particles.drift_speed, 0.5);
		assert_eq!(theme.particles.color.to_css(), "rgba(255, 255, 255, 0.2)");
		assert!(!theme.links.enabled);
	}

	#[test]
	fn partial_json_keeps_other_defaults() {
		let theme = Theme::from_json(r#"{ "particles": { "pointer_radius": 200 } }"#).unwrap();
		assert_eq!(theme.particles.pointer_radius, 200.0);
		assert_eq!(theme.particles.area_per_particle, 9000.0);
		assert_eq!(theme.links, LinkStyle::default());
	}

	#[test]
	fn color_alpha_defaults_to_opaque() {
		let theme = Theme::from_json(r#"{ "links": { "color": { "r": 1, "g": 2, "b": 3 } } }"#)
			.unwrap();
		assert_eq!(theme.links.color.to_css(), "#010203");
	}

	#[test]
	fn invalid_values_fall_back() {
		let theme = Theme::from_json(
			r#"{ "particles": { "pointer_radius": -5, "area_per_particle": 0, "size_min": 4, "size_max": 1 } }"#,
		)
		.unwrap();
		let defaults = ParticleStyle::default();
		assert_eq!(theme.particles.pointer_radius, defaults.pointer_radius);
		assert_eq!(theme.particles.area_per_particle, defaults.area_per_particle);
		assert_eq!(theme.particles.size_min, defaults.size_min);
		assert_eq!(theme.particles.size_max, defaults.size_max);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(Theme::from_json("{ particles: ").is_err());
	}
}
