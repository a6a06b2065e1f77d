//! valentine-hearts: a Valentine's Day page with falling hearts.
//!
//! This crate provides a WASM page built with Leptos: a hero banner, a
//! timeline of chapters with photos, a closing message, and a full-screen
//! canvas of falling hearts drawn behind everything.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod elapsed;
pub mod error;

pub use components::hearts::{HeartStyle, HeartsCanvas, HeartsConfig, HeartsHandle, start_hearts};
pub use content::{Chapter, PageContent};
pub use error::HeartsError;

use components::page::{ClosingMessage, Hero, Timeline, TogetherCounter, together_since_ms};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("valentine-hearts: logging initialized");
}

/// Load JSON from a script element with the given id.
/// Returns `None` when the element is absent; logs and returns `None` when the
/// JSON doesn't parse.
fn load_json_script<T: DeserializeOwned>(id: &str) -> Option<T> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<T>(&json_text) {
		Ok(data) => {
			info!("valentine-hearts: loaded #{}", id);
			Some(data)
		}
		Err(e) => {
			warn!("valentine-hearts: failed to parse #{}: {}", id, e);
			None
		}
	}
}

/// Main application component.
/// Loads content and animation settings from the DOM, falling back to the
/// built-in defaults, and renders the page over the hearts canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content: PageContent = load_json_script("page-content").unwrap_or_default();
	let config: HeartsConfig = load_json_script("hearts-config").unwrap_or_default();
	let style: HeartStyle = load_json_script("hearts-style").unwrap_or_default();
	let since = together_since_ms(&content);
	let PageContent {
		title,
		subtitle,
		hero_left_image,
		hero_right_image,
		badges,
		chapters,
		final_title,
		final_message,
		..
	} = content;
	let page_title = title.clone();

	view! {
		<Html attr:lang="fr" attr:dir="ltr" />
		<Title text=page_title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<HeartsCanvas config heart_style=style />

		<div class="container">
			<Hero
				title
				subtitle
				left_image=hero_left_image
				right_image=hero_right_image
				badges
			/>

			<div class="section">
				{since.map(|start_ms| view! { <TogetherCounter start_ms /> })}
				<Timeline chapters />
				<ClosingMessage title=final_title message=final_message />
			</div>
		</div>
	}
}
