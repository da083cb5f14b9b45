//! Reveal-on-scroll and staggered entrance animations.
//!
//! Tagged elements start transparent and shifted down, then ease into
//! place the first time they become visible. Entrance groups (skill pills,
//! project cards, hero text) instead get a CSS keyframe animation whose
//! delay grows with each element's position in its group.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{ENTRANCE_KEYFRAMES, REVEAL_OFFSET_PX, REVEAL_TRANSITION_S};
use crate::style::StylePatch;

/// Selector for elements that reveal on scroll.
pub const REVEAL_SELECTOR: &str = ".fade-in-section, .reveal-text";

/// Style applied when an element is registered for reveal.
#[must_use]
pub fn hidden_style() -> StylePatch {
    StylePatch::new()
        .set("opacity", "0")
        .set("transform", format!("translateY({REVEAL_OFFSET_PX}px)"))
        .set(
            "transition",
            format!("opacity {REVEAL_TRANSITION_S}s ease-out, transform {REVEAL_TRANSITION_S}s ease-out"),
        )
}

/// Style applied once an element has been seen.
#[must_use]
pub fn revealed_style() -> StylePatch {
    StylePatch::new().set("opacity", "1").set("transform", "translateY(0)")
}

/// A group of elements sharing a staggered entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub selector: &'static str,
    pub duration_ms: u32,
    pub step_ms: u32,
}

/// Skill pills, animated as soon as the page is wired.
pub const SKILL_PILLS: Entrance = Entrance { selector: ".skill-pill", duration_ms: 600, step_ms: 100 };

/// Project cards, animated as soon as the page is wired.
pub const PROJECT_CARDS: Entrance = Entrance { selector: ".project-card", duration_ms: 600, step_ms: 150 };

/// Hero text, animated when the window finishes loading.
pub const HERO_TEXT: Entrance = Entrance {
    selector: ".hero-title, .hero-subtitle, .hero-description, .hero-buttons",
    duration_ms: 800,
    step_ms: 150,
};

impl Entrance {
    /// Delay before element `index` of the group starts animating.
    #[must_use]
    pub fn delay_ms(&self, index: usize) -> u64 {
        u64::from(self.step_ms).saturating_mul(u64::try_from(index).unwrap_or(u64::MAX))
    }

    /// Animation patch for element `index` of the group.
    #[must_use]
    pub fn style(&self, index: usize) -> StylePatch {
        StylePatch::new().set(
            "animation",
            format!(
                "{ENTRANCE_KEYFRAMES} {}ms ease-out {}ms both",
                self.duration_ms,
                self.delay_ms(index)
            ),
        )
    }
}
