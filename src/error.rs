//! Error type shared by the hearts animation and its browser bindings.

use wasm_bindgen::JsValue;

/// Errors raised while starting or driving the hearts animation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeartsError {
	/// A required collaborator (window, canvas, 2D context) is missing.
	#[error("configuration error: {0}")]
	Configuration(String),
	/// The drawing surface or frame scheduler rejected a call.
	#[error("surface error: {0}")]
	Surface(String),
}

impl HeartsError {
	pub fn configuration(msg: impl Into<String>) -> Self {
		Self::Configuration(msg.into())
	}
}

impl From<JsValue> for HeartsError {
	fn from(value: JsValue) -> Self {
		let msg = value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value));
		Self::Surface(msg)
	}
}

impl From<HeartsError> for JsValue {
	fn from(err: HeartsError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}

pub type Result<T, E = HeartsError> = std::result::Result<T, E>;
