//! Per-frame driver for the falling hearts.
//!
//! [`HeartsAnimation`] owns everything one running animation needs: the
//! surface it draws on, its random source, the viewport and the heart store.
//! It knows nothing about frame scheduling; [`super::lifecycle::Lifecycle`]
//! calls [`HeartsAnimation::tick`] once per display frame.

use super::config::{HeartStyle, HeartsConfig};
use super::particles::HeartStore;
use super::random::RandomSource;
use super::render;
use super::surface::Surface;
use super::viewport::{Viewport, ViewportMetrics};
use crate::error::Result;

pub struct HeartsAnimation<S, R> {
	surface: S,
	rng: R,
	config: HeartsConfig,
	style: HeartStyle,
	viewport: Viewport,
	store: HeartStore,
}

impl<S: Surface, R: RandomSource> HeartsAnimation<S, R> {
	pub fn new(surface: S, rng: R, config: HeartsConfig, style: HeartStyle) -> Self {
		let store = HeartStore::with_capacity(config.max_hearts);
		Self {
			surface,
			rng,
			config,
			style,
			viewport: Viewport::default(),
			store,
		}
	}

	/// Re-measures the viewport and rescales the surface to match.
	pub fn resize(&mut self, metrics: ViewportMetrics) -> Result<()> {
		self.viewport = Viewport::measure(metrics, self.config.max_pixel_ratio);
		self.viewport.apply(&mut self.surface)
	}

	/// Pre-fills the screen so the first frame isn't empty.
	pub fn seed(&mut self) {
		for _ in 0..self.config.initial_hearts {
			self.spawn(true);
		}
	}

	pub fn spawn(&mut self, initial: bool) -> bool {
		let Viewport { width, height, .. } = self.viewport;
		self.store
			.spawn(initial, width, height, &self.config, &mut self.rng)
	}

	/// Advances, draws and culls every heart for the frame at `t_ms`.
	pub fn tick(&mut self, t_ms: f64) -> Result<()> {
		let Viewport { width, height, .. } = self.viewport;
		self.surface.clear_rect(0.0, 0.0, width, height);

		self.store
			.spawn_gated(width, height, &self.config, &mut self.rng);

		let cull_line = height + self.config.cull_margin;
		// Reverse so removing index i leaves the unvisited 0..i untouched.
		for i in (0..self.store.hearts.len()).rev() {
			let heart = &mut self.store.hearts[i];
			heart.advance();
			let x = heart.x + heart.sway_offset(t_ms, &self.config);
			render::draw_heart(
				&mut self.surface,
				&self.style,
				x,
				heart.y,
				heart.size,
				heart.rot,
				heart.alpha,
			)?;
			if heart.y > cull_line {
				self.store.hearts.remove(i);
			}
		}
		Ok(())
	}

	pub fn store(&self) -> &HeartStore {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut HeartStore {
		&mut self.store
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn config(&self) -> &HeartsConfig {
		&self.config
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}
