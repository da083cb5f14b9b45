//! Scroll-driven effects: progress bar, navbar style, and the frame gate.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::style::{StylePatch, percent};

/// Scroll position and extents read from the document at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// `window.scrollY`.
    pub offset: f64,
    /// `document.documentElement.scrollHeight`.
    pub scroll_height: f64,
    /// `window.innerHeight`.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self { offset, scroll_height, viewport_height }
    }

    /// Distance the page can scroll; zero or less when it fits the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }
}

/// Progress through the page, in percent, clamped to `0..=100`.
///
/// A page that cannot scroll reports `0`.
#[must_use]
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let max = metrics.max_scroll();
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    (metrics.offset / max * 100.0).clamp(0.0, 100.0)
}

/// Width patch for the progress bar.
#[must_use]
pub fn progress_style(metrics: ScrollMetrics) -> StylePatch {
    StylePatch::new().set("width", percent(progress_percent(metrics)))
}

/// Navbar appearance, a pure function of the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At (or near) the top: light blur, no shadow.
    Top,
    /// Scrolled past the threshold: stronger blur and a drop shadow.
    Scrolled,
}

impl NavbarStyle {
    #[must_use]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold { Self::Scrolled } else { Self::Top }
    }

    #[must_use]
    pub fn patch(self) -> StylePatch {
        match self {
            Self::Top => StylePatch::new()
                .set("backdrop-filter", "blur(10px)")
                .set("box-shadow", "none"),
            Self::Scrolled => StylePatch::new()
                .set("backdrop-filter", "blur(15px)")
                .set("box-shadow", "0 5px 20px rgba(0, 0, 0, 0.1)"),
        }
    }
}

/// Single-slot animation-frame gate.
///
/// The first scroll event after a frame requests a new frame; further
/// events are dropped until [`FrameGate::complete`] runs in that frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// The scheduled frame ran (or could not be scheduled).
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }
}
