//! Page sections: hero banner, chapter timeline, closing message and the
//! optional "together since" counter.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use crate::content::{Chapter, PageContent};
use crate::elapsed::Elapsed;

/// Hero banner with the two round photos, title, subtitle and badges.
#[component]
pub fn Hero(
	title: String,
	subtitle: String,
	left_image: String,
	right_image: String,
	badges: Vec<String>,
) -> impl IntoView {
	view! {
		<div class="hero">
			<div class="hero-top">
				<div class="avatar">
					<img src=left_image alt="Nous (gauche)" />
				</div>

				<div class="hero-center">
					<h1>{title}" " <span class="heart">"❤️"</span></h1>
					<p>{subtitle}</p>
					<div class="badges">
						{badges
							.into_iter()
							.map(|b| view! { <span class="badge">{b}</span> })
							.collect_view()}
					</div>
				</div>

				<div class="avatar">
					<img src=right_image alt="Nous (droite)" />
				</div>
			</div>
		</div>
	}
}

/// One timeline entry with its photo grid.
#[component]
pub fn ChapterCard(chapter: Chapter) -> impl IntoView {
	let grid = format!("photos-grid {}", chapter.grid_class());
	let photos = chapter
		.images
		.iter()
		.enumerate()
		.map(|(i, src)| {
			let alt = chapter.photo_alt(i);
			view! {
				<div class="chapter-photo">
					<img src=src.clone() alt=alt />
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="chapter">
			<h3>{chapter.title}</h3>
			<p>{chapter.text}</p>
			<div class=grid>{photos}</div>
		</div>
	}
}

#[component]
pub fn Timeline(chapters: Vec<Chapter>) -> impl IntoView {
	view! {
		<div class="timeline">
			{chapters
				.into_iter()
				.map(|chapter| view! { <ChapterCard chapter /> })
				.collect_view()}
		</div>
	}
}

#[component]
pub fn ClosingMessage(title: String, message: String) -> impl IntoView {
	view! {
		<div class="footer-love">
			<strong>{title}</strong>
			<div style="height: 8px" />
			{message}
		</div>
	}
}

/// Live counter of the time since `start_ms` (milliseconds since the epoch),
/// refreshed every second.
#[component]
pub fn TogetherCounter(start_ms: f64) -> impl IntoView {
	let (now, set_now) = signal(js_sys::Date::now());

	match set_interval_with_handle(move || set_now.set(js_sys::Date::now()), Duration::from_secs(1)) {
		Ok(interval) => on_cleanup(move || interval.clear()),
		Err(e) => warn!("valentine-hearts: counter timer unavailable: {:?}", e),
	}

	view! {
		<p class="together">
			"Ensemble depuis " {move || Elapsed::between(start_ms, now.get()).to_string()}
		</p>
	}
}

/// Parses the content's start date, if any. Unparseable dates are logged and
/// hide the counter.
pub fn together_since_ms(content: &PageContent) -> Option<f64> {
	let since = content.together_since.as_deref()?;
	let ms = js_sys::Date::parse(since);
	if ms.is_nan() {
		warn!("valentine-hearts: ignoring unparseable date {:?}", since);
		None
	} else {
		Some(ms)
	}
}

#[cfg(test)]
mod tests {
	const STYLESHEET: &str = include_str!("../../style.css");

	#[test]
	fn stylesheet_covers_page_classes() {
		for selector in [
			".hero",
			".avatar",
			".badge",
			".photos-grid.two",
			".photos-grid.four",
			".chapter-photo",
			".footer-love",
			".together",
		] {
			assert!(STYLESHEET.contains(selector), "missing {selector}");
		}
	}

	#[test]
	fn content_layer_sits_above_canvas() {
		let container = STYLESHEET
			.split(".container {")
			.nth(1)
			.and_then(|rest| rest.split('}').next())
			.unwrap();
		assert!(container.contains("position: relative"));
		assert!(container.contains("z-index: 1"));
	}
}
