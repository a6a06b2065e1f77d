//! Tunable constants and visual style for the falling hearts.
//!
//! Everything the spawner, driver and renderer read lives here, grouped the way
//! a theme is: one struct for behavior ([`HeartsConfig`]) and one for looks
//! ([`HeartStyle`]). Both deserialize from partial JSON, with every missing
//! field falling back to its default.

use std::f64::consts::TAU;

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// A closed interval that attributes are sampled from.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Maps a unit sample `u` in `[0, 1]` onto the interval.
	pub fn lerp(&self, u: f64) -> f64 {
		self.min + u * (self.max - self.min)
	}

	pub fn contains(&self, v: f64) -> bool {
		v >= self.min && v <= self.max
	}
}

/// One per-frame spawn trial: spawn with `probability` while the store holds
/// fewer than `below` hearts.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SpawnGate {
	pub below: usize,
	pub probability: f64,
}

/// Ranges each heart attribute is drawn from.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeartRanges {
	pub size: Span,
	pub speed: Span,
	pub sway: Span,
	pub sway_phase: Span,
	/// Initial rotation, radians.
	pub rotation: Span,
	pub rot_speed: Span,
	pub alpha: Span,
}

impl Default for HeartRanges {
	fn default() -> Self {
		Self {
			size: Span::new(10.0, 26.0),
			speed: Span::new(0.7, 2.4),
			sway: Span::new(0.8, 2.2),
			sway_phase: Span::new(0.0, TAU),
			rotation: Span::new(-0.6, 0.6),
			rot_speed: Span::new(-0.01, 0.01),
			alpha: Span::new(0.35, 0.85),
		}
	}
}

/// Behavioral configuration of the animation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeartsConfig {
	/// Hard cap on live hearts.
	pub max_hearts: usize,
	/// Hearts spread over the screen at start.
	pub initial_hearts: usize,
	/// Independent trials run every frame, in order.
	pub gates: Vec<SpawnGate>,
	pub ranges: HeartRanges,
	/// Fraction of the viewport height above the top edge where new hearts
	/// may appear.
	pub spawn_band: f64,
	/// Lowest spawn position, negative so hearts enter from off-screen.
	pub spawn_ceiling: f64,
	/// Distance below the viewport after which a heart is culled.
	pub cull_margin: f64,
	/// Horizontal sway amplitude in logical pixels.
	pub sway_amplitude: f64,
	pub sway_damping: f64,
	/// Upper bound on the device pixel ratio used for the backing buffer.
	pub max_pixel_ratio: f64,
}

impl Default for HeartsConfig {
	fn default() -> Self {
		Self {
			max_hearts: 120,
			initial_hearts: 70,
			gates: vec![
				SpawnGate {
					below: 90,
					probability: 0.35,
				},
				SpawnGate {
					below: 120,
					probability: 0.15,
				},
			],
			ranges: HeartRanges::default(),
			spawn_band: 0.2,
			spawn_ceiling: -40.0,
			cull_margin: 60.0,
			sway_amplitude: 12.0,
			sway_damping: 0.9,
			max_pixel_ratio: 2.0,
		}
	}
}

/// Visual style of a single heart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeartStyle {
	/// Gradient color at the top-left corner of the bounding box.
	pub fill_start: Color,
	/// Gradient color at the bottom-right corner.
	pub fill_end: Color,
	pub shadow_color: Color,
	pub shadow_blur: f64,
}

impl Default for HeartStyle {
	fn default() -> Self {
		Self {
			fill_start: Color::rgba(255, 59, 106, 0.95),
			fill_end: Color::rgba(255, 107, 107, 0.85),
			shadow_color: Color::rgba(255, 59, 106, 0.35),
			shadow_blur: 18.0,
		}
	}
}
