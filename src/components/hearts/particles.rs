//! Heart particles and the bounded store that spawns and culls them.

use super::config::HeartsConfig;
use super::random::RandomSource;

/// A single falling heart.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed: f64,
	pub sway: f64,
	pub sway_phase: f64,
	pub rot: f64,
	pub rot_speed: f64,
	pub alpha: f64,
}

impl Heart {
	/// Moves the heart one frame down and spins it.
	pub fn advance(&mut self) {
		self.y += self.speed;
		self.rot += self.rot_speed;
	}

	/// Horizontal displacement at time `t_ms`.
	pub fn sway_offset(&self, t_ms: f64, config: &HeartsConfig) -> f64 {
		let phase = t_ms / 1000.0 * self.sway + self.sway_phase;
		phase.sin() * config.sway_damping * config.sway_amplitude
	}
}

/// Ordered, capacity-bounded collection of hearts.
#[derive(Clone, Debug, Default)]
pub struct HeartStore {
	pub hearts: Vec<Heart>,
}

impl HeartStore {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			hearts: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.hearts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hearts.is_empty()
	}

	/// Appends one randomized heart. Does nothing once the store is full.
	///
	/// `initial` hearts are spread over the whole viewport height; later ones
	/// start in the band above the top edge.
	pub fn spawn(
		&mut self,
		initial: bool,
		width: f64,
		height: f64,
		config: &HeartsConfig,
		rng: &mut impl RandomSource,
	) -> bool {
		if self.hearts.len() >= config.max_hearts {
			return false;
		}

		let r = &config.ranges;
		let size = r.size.lerp(rng.next_unit());
		let x = width * rng.next_unit();
		let y = if initial {
			height * rng.next_unit()
		} else {
			let top = -height * config.spawn_band;
			top + rng.next_unit() * (config.spawn_ceiling - top)
		};

		self.hearts.push(Heart {
			x,
			y,
			size,
			speed: r.speed.lerp(rng.next_unit()),
			sway: r.sway.lerp(rng.next_unit()),
			sway_phase: r.sway_phase.lerp(rng.next_unit()),
			rot: r.rotation.lerp(rng.next_unit()),
			rot_speed: r.rot_speed.lerp(rng.next_unit()),
			alpha: r.alpha.lerp(rng.next_unit()),
		});
		true
	}

	/// Runs every spawn gate once. Each gate is an independent trial and sees
	/// the population left by the previous one, so a frame may add 0, 1 or 2
	/// hearts with the default gates.
	pub fn spawn_gated(
		&mut self,
		width: f64,
		height: f64,
		config: &HeartsConfig,
		rng: &mut impl RandomSource,
	) -> usize {
		let mut spawned = 0;
		for gate in &config.gates {
			if self.hearts.len() < gate.below
				&& rng.chance(gate.probability)
				&& self.spawn(false, width, height, config, rng)
			{
				spawned += 1;
			}
		}
		spawned
	}
}
