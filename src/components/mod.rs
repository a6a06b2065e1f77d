//! Leptos components for the page and its background animation.

pub mod hearts;
pub mod page;
