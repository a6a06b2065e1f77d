//! Heart shape rendering.

use super::config::HeartStyle;
use super::surface::Surface;
use crate::error::Result;

/// Draws one heart centered on `(x, y)`.
///
/// The shape is two mirrored cubic lobes meeting at the bottom point
/// `(0, 1.2 * size)`, filled with a diagonal gradient and then filled again
/// with a soft shadow underneath. All state changes are scoped to this call.
pub fn draw_heart<S: Surface>(
	surface: &mut S,
	style: &HeartStyle,
	x: f64,
	y: f64,
	size: f64,
	rotation: f64,
	alpha: f64,
) -> Result<()> {
	let mut ctx = surface.scoped();
	ctx.translate(x, y)?;
	ctx.rotate(rotation)?;
	ctx.set_global_alpha(alpha);

	let s = size;
	ctx.set_fill_linear_gradient(-s, -s, s, s, &[(0.0, style.fill_start), (1.0, style.fill_end)])?;

	ctx.begin_path();
	ctx.move_to(0.0, s * 0.35);
	ctx.bezier_curve_to(s * 0.9, -s * 0.25, s * 0.95, s * 0.9, 0.0, s * 1.2);
	ctx.bezier_curve_to(-s * 0.95, s * 0.9, -s * 0.9, -s * 0.25, 0.0, s * 0.35);
	ctx.close_path();
	ctx.fill();

	ctx.set_shadow(style.shadow_color, style.shadow_blur);
	ctx.fill();

	Ok(())
}
