//! Navigation: hamburger menu flag, active-section tracking, link helpers.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::style::StylePatch;

/// Class toggled on both the hamburger control and the menu panel.
pub const MENU_OPEN_CLASS: &str = "active";

/// Class markup may ship on a pre-highlighted link. Scroll tracking clears it
/// and drives the link color inline instead.
pub const LINK_ACTIVE_CLASS: &str = "active";

/// A navigable section: its id and the document offset of its top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: &str, top: f64) -> Self {
        Self { id: id.to_owned(), top }
    }
}

/// Resolve the current section for a scroll offset.
///
/// A section qualifies once `scroll_y >= top - lookahead`. The current
/// section is the last qualifying one in document order, so when several
/// qualify the one furthest down the document wins. A winning section
/// without an id still wins, and leaves no section current.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - lookahead)
        .map(|s| s.id.as_str())
        .filter(|id| !id.is_empty())
}

/// Section id a nav link points at: its `href` without the leading `#`.
#[must_use]
pub fn link_target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Whether a link is a `#` placeholder whose click must not navigate.
#[must_use]
pub fn is_placeholder_href(href: &str) -> bool {
    href == "#"
}

/// Style for a nav link given the current section.
#[must_use]
pub fn link_style(href: &str, current: Option<&str>) -> StylePatch {
    let active = current.is_some_and(|id| link_target(href) == id);
    let color = if active { "var(--accent)" } else { "var(--text-dark)" };
    StylePatch::new().set("color", color)
}

/// Open/closed flag of the hamburger menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger clicked: flip the flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was clicked.
    pub fn link_clicked(&mut self) -> bool {
        self.open = false;
        self.open
    }

    /// A click landed somewhere in the document.
    ///
    /// `inside_controls` is true when the target is within the hamburger or
    /// the menu panel; those clicks are handled by their own listeners.
    pub fn document_clicked(&mut self, inside_controls: bool) -> bool {
        if !inside_controls {
            self.open = false;
        }
        self.open
    }
}
