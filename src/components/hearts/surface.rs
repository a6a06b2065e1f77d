//! Drawing surface abstraction and its `<canvas>` implementation.
//!
//! The animation only ever talks to [`Surface`], so it runs unchanged against
//! the browser's 2D context and against the recording surface used in tests.

use std::ops::{Deref, DerefMut};

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::Color;
use crate::error::Result;

/// The subset of the 2D canvas API the hearts need.
pub trait Surface {
	/// Resizes the backing pixel buffer and the element's CSS box.
	fn set_backing_size(
		&mut self,
		width: u32,
		height: u32,
		css_width: f64,
		css_height: f64,
	) -> Result<()>;
	fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<()>;
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

	fn save(&mut self);
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64) -> Result<()>;
	fn rotate(&mut self, angle: f64) -> Result<()>;
	fn set_global_alpha(&mut self, alpha: f64);
	/// Sets the fill style to a linear gradient from `(x0, y0)` to `(x1, y1)`.
	fn set_fill_linear_gradient(
		&mut self,
		x0: f64,
		y0: f64,
		x1: f64,
		y1: f64,
		stops: &[(f64, Color)],
	) -> Result<()>;
	fn set_shadow(&mut self, color: Color, blur: f64);

	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
	fn close_path(&mut self);
	fn fill(&mut self);

	/// Saves the drawing state and returns a guard that restores it on drop.
	fn scoped(&mut self) -> Scoped<'_, Self>
	where
		Self: Sized,
	{
		self.save();
		Scoped { surface: self }
	}
}

/// A saved drawing state. Dropping it restores the surface, including on
/// early return through `?`.
pub struct Scoped<'a, S: Surface> {
	surface: &'a mut S,
}

impl<S: Surface> Deref for Scoped<'_, S> {
	type Target = S;

	fn deref(&self) -> &S {
		self.surface
	}
}

impl<S: Surface> DerefMut for Scoped<'_, S> {
	fn deref_mut(&mut self) -> &mut S {
		self.surface
	}
}

impl<S: Surface> Drop for Scoped<'_, S> {
	fn drop(&mut self) {
		self.surface.restore();
	}
}

/// A `<canvas>` element together with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn set_backing_size(
		&mut self,
		width: u32,
		height: u32,
		css_width: f64,
		css_height: f64,
	) -> Result<()> {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
		let style = self.canvas.style();
		style.set_property("width", &format!("{}px", css_width))?;
		style.set_property("height", &format!("{}px", css_height))?;
		Ok(())
	}

	fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<()> {
		Ok(self.ctx.set_transform(a, b, c, d, e, f)?)
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn translate(&mut self, x: f64, y: f64) -> Result<()> {
		Ok(self.ctx.translate(x, y)?)
	}

	fn rotate(&mut self, angle: f64) -> Result<()> {
		Ok(self.ctx.rotate(angle)?)
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}

	fn set_fill_linear_gradient(
		&mut self,
		x0: f64,
		y0: f64,
		x1: f64,
		y1: f64,
		stops: &[(f64, Color)],
	) -> Result<()> {
		let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
		for (offset, color) in stops {
			gradient.add_color_stop(*offset as f32, &color.to_css())?;
		}
		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		Ok(())
	}

	fn set_shadow(&mut self, color: Color, blur: f64) {
		self.ctx.set_shadow_color(&color.to_css());
		self.ctx.set_shadow_blur(blur);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
		self.ctx.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
	}

	fn close_path(&mut self) {
		self.ctx.close_path();
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}
}
