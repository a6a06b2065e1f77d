//! Browser bindings: `requestAnimationFrame`, the window `resize` event, and a
//! Leptos component that owns the hearts canvas.
//!
//! The frame and resize callbacks are `wasm_bindgen` closures that share the
//! [`Lifecycle`] through `Rc<RefCell<..>>`. [`HeartsHandle::stop`] tears the
//! loop down and releases the closures.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::animation::HeartsAnimation;
use super::config::{HeartStyle, HeartsConfig};
use super::lifecycle::{FrameHost, Lifecycle};
use super::random::browser_rng;
use super::surface::CanvasSurface;
use super::viewport::ViewportMetrics;
use crate::error::{HeartsError, Result};

/// Inline style for the canvas: pinned to the viewport, below the in-flow page
/// content and transparent to pointer events.
const CANVAS_STYLE: &str = "position: fixed; inset: 0; pointer-events: none; z-index: -1;";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64) -> Result<(), JsValue>>>>>;
type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut() -> Result<(), JsValue>>>>>;
type SharedLifecycle = Rc<RefCell<Option<Lifecycle<WindowHost, CanvasSurface, fastrand::Rng>>>>;

/// [`FrameHost`] backed by the browser window.
pub struct WindowHost {
	window: Window,
	frame_cb: FrameCallback,
	resize_cb: ResizeCallback,
}

impl FrameHost for WindowHost {
	type Frame = i32;

	fn metrics(&self) -> ViewportMetrics {
		let read = |v: std::result::Result<JsValue, JsValue>| {
			v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
		};
		ViewportMetrics {
			width: read(self.window.inner_width()),
			height: read(self.window.inner_height()),
			pixel_ratio: self.window.device_pixel_ratio(),
		}
	}

	fn request_frame(&mut self) -> Result<i32> {
		let cb = self.frame_cb.borrow();
		let cb = cb
			.as_ref()
			.ok_or_else(|| HeartsError::configuration("frame callback not installed"))?;
		Ok(self.window.request_animation_frame(cb.as_ref().unchecked_ref())?)
	}

	fn cancel_frame(&mut self, frame: i32) {
		let _ = self.window.cancel_animation_frame(frame);
	}

	fn listen_resize(&mut self) -> Result<()> {
		if let Some(ref cb) = *self.resize_cb.borrow() {
			self.window
				.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
		}
		Ok(())
	}

	fn unlisten_resize(&mut self) {
		if let Some(ref cb) = *self.resize_cb.borrow() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

/// Keeps a started animation alive and stops it on request.
///
/// Dropping the handle does not stop the animation; call [`HeartsHandle::stop`].
pub struct HeartsHandle {
	lifecycle: SharedLifecycle,
	frame_cb: FrameCallback,
	resize_cb: ResizeCallback,
}

impl HeartsHandle {
	/// Cancels the pending frame, removes the resize listener and frees the
	/// callbacks. Safe to call more than once.
	pub fn stop(&self) {
		if let Some(mut lifecycle) = self.lifecycle.borrow_mut().take() {
			lifecycle.stop();
		}
		self.frame_cb.borrow_mut().take();
		self.resize_cb.borrow_mut().take();
	}

	pub fn is_running(&self) -> bool {
		self.lifecycle.borrow().is_some()
	}
}

/// Starts the falling hearts on `canvas`.
pub fn start_hearts(
	canvas: HtmlCanvasElement,
	config: HeartsConfig,
	style: HeartStyle,
) -> Result<HeartsHandle> {
	let window: Window =
		web_sys::window().ok_or_else(|| HeartsError::configuration("no global window"))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|e| HeartsError::configuration(format!("2d context unavailable: {:?}", e)))?
		.ok_or_else(|| HeartsError::configuration("2d context unavailable"))?
		.dyn_into()
		.map_err(|_| HeartsError::configuration("context is not a CanvasRenderingContext2d"))?;

	let lifecycle: SharedLifecycle = Rc::new(RefCell::new(None));
	let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: ResizeCallback = Rc::new(RefCell::new(None));

	let lifecycle_frame = lifecycle.clone();
	*frame_cb.borrow_mut() = Some(Closure::new(move |t: f64| -> Result<(), JsValue> {
		if let Some(ref mut lc) = *lifecycle_frame.borrow_mut() {
			lc.on_frame(t)?;
		}
		Ok(())
	}));

	let lifecycle_resize = lifecycle.clone();
	*resize_cb.borrow_mut() = Some(Closure::new(move || -> Result<(), JsValue> {
		if let Some(ref mut lc) = *lifecycle_resize.borrow_mut() {
			lc.on_resize()?;
		}
		Ok(())
	}));

	let host = WindowHost {
		window,
		frame_cb: frame_cb.clone(),
		resize_cb: resize_cb.clone(),
	};
	let animation = HeartsAnimation::new(
		CanvasSurface::new(canvas, ctx),
		browser_rng(),
		config,
		style,
	);
	*lifecycle.borrow_mut() = Some(Lifecycle::start(host, animation)?);

	Ok(HeartsHandle {
		lifecycle,
		frame_cb,
		resize_cb,
	})
}

/// Starts the falling hearts on the `<canvas>` with the given element id.
pub fn start_hearts_in(
	document: &Document,
	canvas_id: &str,
	config: HeartsConfig,
	style: HeartStyle,
) -> Result<HeartsHandle> {
	let canvas: HtmlCanvasElement = document
		.get_element_by_id(canvas_id)
		.ok_or_else(|| HeartsError::configuration(format!("no element #{}", canvas_id)))?
		.dyn_into()
		.map_err(|_| HeartsError::configuration(format!("#{} is not a canvas", canvas_id)))?;
	start_hearts(canvas, config, style)
}

/// Full-screen canvas of falling hearts, drawn behind the page content.
///
/// The animation starts once the canvas is mounted and stops when the
/// component is cleaned up.
#[component]
pub fn HeartsCanvas(
	#[prop(optional)] config: Option<HeartsConfig>,
	#[prop(optional)] heart_style: Option<HeartStyle>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle = StoredValue::new_local(None::<HeartsHandle>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handle.with_value(|h| h.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match start_hearts(
			canvas,
			config.clone().unwrap_or_default(),
			heart_style.clone().unwrap_or_default(),
		) {
			Ok(h) => handle.set_value(Some(h)),
			Err(e) => error!("valentine-hearts: {}", e),
		}
	});

	on_cleanup(move || {
		handle.try_update_value(|h| {
			if let Some(h) = h.take() {
				h.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="hearts-canvas"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}
