//! Inline style effects.
//!
//! Every visual behavior in the crate produces a [`StylePatch`] (or a
//! [`Transform`], which renders into one) instead of touching the DOM. The
//! browser bindings apply patches verbatim with `style.setProperty`.

use std::fmt;

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// A 2D translate-then-scale CSS transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self { translate_x: 0.0, translate_y: 0.0, scale: 1.0 };

    #[must_use]
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self { translate_x, translate_y, scale }
    }

    #[cfg(test)]
    pub(crate) fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    /// Renders as `translate(Xpx, Ypx) scale(S)`; the identity renders as
    /// `translate(0, 0) scale(1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.translate_x == 0.0 && self.translate_y == 0.0 {
            write!(f, "translate(0, 0) scale({})", self.scale)
        } else {
            write!(f, "translate({}px, {}px) scale({})", self.translate_x, self.translate_y, self.scale)
        }
    }
}

/// An ordered list of inline CSS declarations to apply to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    declarations: Vec<(&'static str, String)>,
}

impl StylePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration, replacing an earlier one for the same property.
    #[must_use]
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.declarations.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value;
        } else {
            self.declarations.push((property, value));
        }
        self
    }

    /// Look up the value queued for `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.declarations.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Format a pixel length, e.g. `12.5px`.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Format a percentage, e.g. `42%`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}
