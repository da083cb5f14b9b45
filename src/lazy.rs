//! Deferred image loading.
//!
//! Images carrying a `data-src` attribute swap it into `src` when they first
//! approach the viewport, then gain the `loaded` class.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// Selector for images with a deferred source.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Class added after the real source is swapped in.
pub const LOADED_CLASS: &str = "loaded";

/// Source an image should display once visible.
///
/// Prefers the deferred source; an empty or missing one keeps the current
/// source.
#[must_use]
pub fn resolve_source<'a>(deferred: Option<&'a str>, current: &'a str) -> &'a str {
    match deferred {
        Some(src) if !src.is_empty() => src,
        _ => current,
    }
}

/// What loading one image changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoad {
    pub src: String,
    pub class: &'static str,
}

impl ImageLoad {
    #[must_use]
    pub fn for_image(deferred: Option<&str>, current: &str) -> Self {
        Self { src: resolve_source(deferred, current).to_owned(), class: LOADED_CLASS }
    }
}
