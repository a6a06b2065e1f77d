//! Start/stop state machine binding an animation to a frame scheduler.

use std::fmt::Debug;

use log::{debug, info};

use super::animation::HeartsAnimation;
use super::random::RandomSource;
use super::surface::Surface;
use super::viewport::ViewportMetrics;
use crate::error::Result;

/// The host's frame scheduler and resize notifications.
///
/// In the browser this is `requestAnimationFrame` plus the window `resize`
/// event; tests use a fake that just counts calls.
pub trait FrameHost {
	/// Handle returned by [`FrameHost::request_frame`].
	type Frame: Copy + Debug;

	fn metrics(&self) -> ViewportMetrics;
	fn request_frame(&mut self) -> Result<Self::Frame>;
	fn cancel_frame(&mut self, frame: Self::Frame);
	fn listen_resize(&mut self) -> Result<()>;
	fn unlisten_resize(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
	Running,
	Stopped,
}

/// A running (or stopped) animation together with its host bindings.
pub struct Lifecycle<H: FrameHost, S, R> {
	host: H,
	animation: HeartsAnimation<S, R>,
	state: AnimationState,
	pending: Option<H::Frame>,
}

impl<H: FrameHost, S: Surface, R: RandomSource> Lifecycle<H, S, R> {
	/// Sizes the surface, subscribes to resizes, seeds the initial hearts and
	/// schedules the first frame.
	pub fn start(mut host: H, mut animation: HeartsAnimation<S, R>) -> Result<Self> {
		animation.resize(host.metrics())?;
		host.listen_resize()?;
		animation.seed();
		let first = match host.request_frame() {
			Ok(frame) => frame,
			Err(e) => {
				host.unlisten_resize();
				return Err(e);
			}
		};

		let vp = animation.viewport();
		info!(
			"valentine-hearts: started at {}x{} (ratio {}), {} hearts",
			vp.width,
			vp.height,
			vp.pixel_ratio,
			animation.store().len()
		);

		Ok(Self {
			host,
			animation,
			state: AnimationState::Running,
			pending: Some(first),
		})
	}

	/// Frame callback. Draws one frame and schedules the next; does nothing
	/// once stopped.
	pub fn on_frame(&mut self, t_ms: f64) -> Result<()> {
		if self.state == AnimationState::Stopped {
			return Ok(());
		}
		self.pending = None;
		self.animation.tick(t_ms)?;
		self.pending = Some(self.host.request_frame()?);
		Ok(())
	}

	/// Resize callback.
	pub fn on_resize(&mut self) -> Result<()> {
		if self.state == AnimationState::Stopped {
			return Ok(());
		}
		self.animation.resize(self.host.metrics())?;
		let vp = self.animation.viewport();
		debug!("valentine-hearts: resized to {}x{}", vp.width, vp.height);
		Ok(())
	}

	/// Cancels the pending frame and drops the resize subscription. Only the
	/// first call has any effect.
	pub fn stop(&mut self) {
		if self.state == AnimationState::Stopped {
			return;
		}
		if let Some(frame) = self.pending.take() {
			self.host.cancel_frame(frame);
		}
		self.host.unlisten_resize();
		self.state = AnimationState::Stopped;
		info!("valentine-hearts: stopped");
	}

	pub fn state(&self) -> AnimationState {
		self.state
	}

	pub fn animation(&self) -> &HeartsAnimation<S, R> {
		&self.animation
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}
}
