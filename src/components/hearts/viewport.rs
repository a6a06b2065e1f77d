//! Logical viewport size and device pixel ratio handling.

use super::surface::Surface;
use crate::error::Result;

/// Raw measurements read from the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

/// Floored logical size plus the capped pixel ratio used for the backing buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

impl Viewport {
	pub fn measure(metrics: ViewportMetrics, max_pixel_ratio: f64) -> Self {
		// Non-finite or non-positive ratios come from hosts that don't report one.
		let ratio = if metrics.pixel_ratio.is_finite() && metrics.pixel_ratio > 0.0 {
			metrics.pixel_ratio.min(max_pixel_ratio)
		} else {
			1.0
		};
		Self {
			width: metrics.width.max(0.0).floor(),
			height: metrics.height.max(0.0).floor(),
			pixel_ratio: ratio,
		}
	}

	/// Backing buffer size in physical pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio).floor() as u32,
			(self.height * self.pixel_ratio).floor() as u32,
		)
	}

	/// Resizes the surface and installs a uniform scale so drawing code works
	/// in logical units.
	pub fn apply(&self, surface: &mut impl Surface) -> Result<()> {
		let (bw, bh) = self.backing_size();
		surface.set_backing_size(bw, bh, self.width, self.height)?;
		let r = self.pixel_ratio;
		surface.set_transform(r, 0.0, 0.0, r, 0.0, 0.0)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::hearts::testing::RecordingSurface;

	fn metrics(width: f64, height: f64, pixel_ratio: f64) -> ViewportMetrics {
		ViewportMetrics {
			width,
			height,
			pixel_ratio,
		}
	}

	#[test]
	fn floors_size_and_caps_ratio() {
		let vp = Viewport::measure(metrics(800.7, 600.2, 3.0), 2.0);
		assert_eq!(
			vp,
			Viewport {
				width: 800.0,
				height: 600.0,
				pixel_ratio: 2.0
			}
		);
		assert_eq!(vp.backing_size(), (1600, 1200));
	}

	#[test]
	fn missing_ratio_defaults_to_one() {
		assert_eq!(Viewport::measure(metrics(10.0, 10.0, 0.0), 2.0).pixel_ratio, 1.0);
		assert_eq!(Viewport::measure(metrics(10.0, 10.0, f64::NAN), 2.0).pixel_ratio, 1.0);
		assert_eq!(Viewport::measure(metrics(10.0, 10.0, 1.5), 2.0).pixel_ratio, 1.5);
	}

	#[test]
	fn apply_scales_backing_buffer() {
		let mut surface = RecordingSurface::default();
		let vp = Viewport::measure(metrics(333.0, 200.0, 1.5), 2.0);
		vp.apply(&mut surface).unwrap();
		assert_eq!(surface.backing, Some((499, 300, 333.0, 200.0)));
		assert_eq!(surface.state.transform, [1.5, 0.0, 0.0, 1.5, 0.0, 0.0]);
	}
}
