//! Uniform sampling helper used when seeding particles.

use rand::Rng;
use rand::distributions::Standard;

/// Sample uniformly from `[min, max)`.
///
/// Unlike `Rng::gen_range`, an empty or inverted range does not panic: the
/// result is simply `min` scaled toward `max` by a unit sample.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	let unit: f64 = rng.sample(Standard);
	unit * (max - min) + min
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn samples_stay_in_half_open_range() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..10_000 {
			let v = random_range(&mut rng, -0.5, 0.5);
			assert!((-0.5..0.5).contains(&v), "{v} out of range");
		}
	}

	#[test]
	fn degenerate_range_returns_min() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(random_range(&mut rng, 3.0, 3.0), 3.0);
	}

	#[test]
	fn covers_both_halves_of_range() {
		let mut rng = StdRng::seed_from_u64(42);
		let samples: Vec<f64> = (0..1000).map(|_| random_range(&mut rng, 1.0, 31.0)).collect();
		assert!(samples.iter().any(|&v| v < 16.0));
		assert!(samples.iter().any(|&v| v >= 16.0));
	}
}
