//! Pointer-driven effects: magnetic controls, parallax shapes, the custom
//! cursor, and form-field focus styling.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::consts::{CURSOR_HOVER_OPACITY, CURSOR_HOVER_SCALE, CURSOR_SIZE_PX};
use crate::style::{StylePatch, Transform, px};

/// Controls that follow the pointer.
pub const MAGNETIC_SELECTOR: &str = ".btn, .social-link, .view-btn";

/// Elements over which the custom cursor changes shape.
pub const INTERACTIVE_SELECTOR: &str = "button, a, input, textarea";

/// Fields that get a focus glow.
pub const FIELD_SELECTOR: &str = "input, textarea";

/// Class of the synthetic cursor element.
pub const CURSOR_CLASS: &str = "custom-cursor";

/// A pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Transform that pulls a control toward the pointer.
#[must_use]
pub fn magnetic_transform(pointer: Point, rect: Rect, strength: f64, scale: f64) -> Transform {
    let center = rect.center();
    Transform::new((pointer.x - center.x) * strength, (pointer.y - center.y) * strength, scale)
}

/// Parallax tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Units spanned by moving the pointer across the whole window.
    pub range: f64,
    /// Speed increment per shape index.
    pub speed_step: f64,
    /// Overall damping factor.
    pub damping: f64,
}

impl Parallax {
    /// Transforms for `count` shapes given the pointer and window size.
    ///
    /// Shape `i` moves at speed `(i + 1) * speed_step`. A zero-sized window
    /// leaves every shape at rest.
    #[must_use]
    pub fn transforms(&self, pointer: Point, viewport_width: f64, viewport_height: f64, count: usize) -> Vec<Transform> {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return vec![Transform::IDENTITY; count];
        }
        let x_pos = pointer.x / viewport_width * self.range;
        let y_pos = pointer.y / viewport_height * self.range;
        (1..=count)
            .map(|n| {
                let speed = shape_speed(n, self.speed_step);
                Transform::new(x_pos * speed * self.damping, y_pos * speed * self.damping, 1.0)
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn shape_speed(n: usize, step: f64) -> f64 {
    n as f64 * step
}

/// Cursor placement for a pointer position: centered on it and shown.
#[must_use]
pub fn cursor_follow_style(pointer: Point) -> StylePatch {
    let half = CURSOR_SIZE_PX / 2.0;
    StylePatch::new()
        .set("left", px(pointer.x - half))
        .set("top", px(pointer.y - half))
        .set("display", "block")
}

/// Shown while the pointer is in the document, hidden once it leaves.
#[must_use]
pub fn cursor_visibility_style(visible: bool) -> StylePatch {
    StylePatch::new().set("display", if visible { "block" } else { "none" })
}

/// Dimmed and enlarged over interactive elements.
#[must_use]
pub fn cursor_hover_style(over_interactive: bool) -> StylePatch {
    let (opacity, scale) =
        if over_interactive { (CURSOR_HOVER_OPACITY, CURSOR_HOVER_SCALE) } else { (1.0, 1.0) };
    StylePatch::new()
        .set("opacity", opacity.to_string())
        .set("transform", format!("scale({scale})"))
}

/// Inline style of the cursor element at creation: hidden, decorative, and
/// transparent to pointer events.
#[must_use]
pub fn cursor_base_style() -> StylePatch {
    StylePatch::new()
        .set("position", "fixed")
        .set("width", px(CURSOR_SIZE_PX))
        .set("height", px(CURSOR_SIZE_PX))
        .set("background", "var(--accent)")
        .set("border-radius", "50%")
        .set("pointer-events", "none")
        .set("z-index", "1000")
        .set("display", "none")
        .set("box-shadow", "0 0 15px rgba(59, 130, 246, 0.6)")
        .set("transition", "opacity 0.3s ease")
}

/// Border and glow for a form field.
#[must_use]
pub fn field_focus_style(focused: bool) -> StylePatch {
    if focused {
        StylePatch::new()
            .set("border-color", "var(--accent)")
            .set("box-shadow", "0 0 0 3px rgba(59, 130, 246, 0.1)")
    } else {
        StylePatch::new()
            .set("border-color", "var(--border-light)")
            .set("box-shadow", "none")
    }
}
