//! In-memory stand-ins for the canvas, the frame scheduler and the RNG.

use std::collections::VecDeque;

use super::config::Color;
use super::lifecycle::FrameHost;
use super::random::RandomSource;
use super::surface::Surface;
use super::viewport::ViewportMetrics;
use crate::error::{HeartsError, Result};

/// Always returns the same sample.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub f64);

impl RandomSource for Constant {
	fn next_unit(&mut self) -> f64 {
		self.0
	}
}

/// Replays a fixed script of samples, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct Scripted {
	queue: VecDeque<f64>,
}

impl Scripted {
	pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
		Self {
			queue: samples.into_iter().collect(),
		}
	}
}

impl RandomSource for Scripted {
	fn next_unit(&mut self) -> f64 {
		let v = self.queue.pop_front().unwrap_or(0.0);
		self.queue.push_back(v);
		v
	}
}

/// The parts of canvas state that `save`/`restore` cover.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawState {
	/// Affine matrix `[a, b, c, d, e, f]`, as in `setTransform`.
	pub transform: [f64; 6],
	pub alpha: f64,
	pub shadow_color: Option<Color>,
	pub shadow_blur: f64,
}

impl Default for DrawState {
	fn default() -> Self {
		Self {
			transform: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
			alpha: 1.0,
			shadow_color: None,
			shadow_blur: 0.0,
		}
	}
}

/// Snapshot of the state a `fill` was issued under.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
	pub transform: [f64; 6],
	pub alpha: f64,
	pub shadow_blur: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
	Clear(f64, f64, f64, f64),
	Gradient([f64; 4]),
	BeginPath,
	MoveTo(f64, f64),
	BezierTo([f64; 6]),
	ClosePath,
	Fill(Fill),
}

/// Records drawing calls and tracks transform, alpha and shadow the way a
/// 2D context does.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub state: DrawState,
	stack: Vec<DrawState>,
	pub ops: Vec<Op>,
	pub backing: Option<(u32, u32, f64, f64)>,
	pub fail_rotate: bool,
}

impl RecordingSurface {
	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	pub fn fills(&self) -> impl Iterator<Item = &Fill> {
		self.ops.iter().filter_map(|op| match op {
			Op::Fill(fill) => Some(fill),
			_ => None,
		})
	}
}

impl Surface for RecordingSurface {
	fn set_backing_size(
		&mut self,
		width: u32,
		height: u32,
		css_width: f64,
		css_height: f64,
	) -> Result<()> {
		self.backing = Some((width, height, css_width, css_height));
		Ok(())
	}

	fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<()> {
		self.state.transform = [a, b, c, d, e, f];
		Ok(())
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ops.push(Op::Clear(x, y, width, height));
	}

	fn save(&mut self) {
		self.stack.push(self.state.clone());
	}

	fn restore(&mut self) {
		if let Some(state) = self.stack.pop() {
			self.state = state;
		}
	}

	fn translate(&mut self, x: f64, y: f64) -> Result<()> {
		let [a, b, c, d, e, f] = self.state.transform;
		self.state.transform = [a, b, c, d, e + a * x + c * y, f + b * x + d * y];
		Ok(())
	}

	fn rotate(&mut self, angle: f64) -> Result<()> {
		if self.fail_rotate {
			return Err(HeartsError::Surface("rotate rejected".into()));
		}
		let (sin, cos) = angle.sin_cos();
		let [a, b, c, d, e, f] = self.state.transform;
		self.state.transform = [
			a * cos + c * sin,
			b * cos + d * sin,
			c * cos - a * sin,
			d * cos - b * sin,
			e,
			f,
		];
		Ok(())
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.state.alpha = alpha;
	}

	fn set_fill_linear_gradient(
		&mut self,
		x0: f64,
		y0: f64,
		x1: f64,
		y1: f64,
		_stops: &[(f64, Color)],
	) -> Result<()> {
		self.ops.push(Op::Gradient([x0, y0, x1, y1]));
		Ok(())
	}

	fn set_shadow(&mut self, color: Color, blur: f64) {
		self.state.shadow_color = Some(color);
		self.state.shadow_blur = blur;
	}

	fn begin_path(&mut self) {
		self.ops.push(Op::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(Op::MoveTo(x, y));
	}

	fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
		self.ops.push(Op::BezierTo([cp1x, cp1y, cp2x, cp2y, x, y]));
	}

	fn close_path(&mut self) {
		self.ops.push(Op::ClosePath);
	}

	fn fill(&mut self) {
		self.ops.push(Op::Fill(Fill {
			transform: self.state.transform,
			alpha: self.state.alpha,
			shadow_blur: self.state.shadow_blur,
		}));
	}
}

/// Frame scheduler that hands out sequential ids and records every call.
#[derive(Debug)]
pub struct FakeHost {
	pub metrics: ViewportMetrics,
	pub requested: Vec<u32>,
	pub cancelled: Vec<u32>,
	pub listening: bool,
	pub unlisten_calls: usize,
	pub fail_request: bool,
	next: u32,
}

impl FakeHost {
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		Self {
			metrics: ViewportMetrics {
				width,
				height,
				pixel_ratio,
			},
			requested: Vec::new(),
			cancelled: Vec::new(),
			listening: false,
			unlisten_calls: 0,
			fail_request: false,
			next: 0,
		}
	}
}

impl FrameHost for FakeHost {
	type Frame = u32;

	fn metrics(&self) -> ViewportMetrics {
		self.metrics
	}

	fn request_frame(&mut self) -> Result<u32> {
		if self.fail_request {
			return Err(HeartsError::Surface("no scheduler".into()));
		}
		self.next += 1;
		self.requested.push(self.next);
		Ok(self.next)
	}

	fn cancel_frame(&mut self, frame: u32) {
		self.cancelled.push(frame);
	}

	fn listen_resize(&mut self) -> Result<()> {
		self.listening = true;
		Ok(())
	}

	fn unlisten_resize(&mut self) {
		self.listening = false;
		self.unlisten_calls += 1;
	}
}
