//! Injectable source of uniform samples for the spawner.

/// Produces uniform samples in `[0, 1)`.
///
/// The browser build uses a seeded [`fastrand::Rng`]; tests substitute a
/// scripted source to force specific draws.
pub trait RandomSource {
	fn next_unit(&mut self) -> f64;

	/// Bernoulli trial that succeeds with probability `p`.
	fn chance(&mut self, p: f64) -> bool {
		self.next_unit() < p
	}
}

impl RandomSource for fastrand::Rng {
	fn next_unit(&mut self) -> f64 {
		self.f64()
	}
}

/// Seeds a generator from the browser's `Math.random` and the clock, so the
/// wasm build never needs an OS entropy source.
#[cfg(target_arch = "wasm32")]
pub fn browser_rng() -> fastrand::Rng {
	let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let lo = js_sys::Date::now() as u64;
	fastrand::Rng::with_seed((hi << 32) ^ lo)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_rng() -> fastrand::Rng {
	fastrand::Rng::new()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seeded_rng_is_reproducible_and_in_range() {
		let (mut a, mut b) = (fastrand::Rng::with_seed(7), fastrand::Rng::with_seed(7));
		for _ in 0..1000 {
			let u = a.next_unit();
			assert_eq!(u, b.next_unit());
			assert!((0.0..1.0).contains(&u));
		}
	}

	#[test]
	fn chance_extremes() {
		let mut rng = fastrand::Rng::with_seed(1);
		assert!((0..100).all(|_| !rng.chance(0.0)));
		assert!((0..100).all(|_| rng.chance(1.0)));
	}
}
