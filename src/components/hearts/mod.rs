//! Falling-hearts canvas animation.
//!
//! A bounded store of heart particles is spawned, advanced, drawn and culled
//! once per display frame:
//! - Hearts spawn above the viewport through two independent per-frame gates,
//!   never exceeding the configured capacity
//! - Each heart falls at its own speed, spins, and sways horizontally
//! - Hearts are drawn as gradient-filled bezier shapes with a soft shadow
//! - Drawing and scheduling go through the [`Surface`] and [`FrameHost`]
//!   traits, so the loop can be driven synchronously in tests
//!
//! # Example
//!
//! ```ignore
//! use valentine_hearts::components::hearts::HeartsCanvas;
//!
//! view! { <HeartsCanvas /> }
//! ```

mod animation;
mod component;
mod config;
mod lifecycle;
mod particles;
mod random;
mod render;
mod surface;
#[cfg(test)]
mod testing;
mod viewport;

pub use animation::HeartsAnimation;
pub use component::{HeartsCanvas, HeartsHandle, WindowHost, start_hearts, start_hearts_in};
pub use config::{Color, HeartRanges, HeartStyle, HeartsConfig, Span, SpawnGate};
pub use lifecycle::{AnimationState, FrameHost, Lifecycle};
pub use particles::{Heart, HeartStore};
pub use random::{RandomSource, browser_rng};
pub use render::draw_heart;
pub use surface::{CanvasSurface, Scoped, Surface};
pub use viewport::{Viewport, ViewportMetrics};
