//! Shared constants for the page behaviors.

// ── Navigation ──────────────────────────────────────────────────

/// How far below the viewport top a section may start and still count as
/// current, in CSS pixels.
pub const SECTION_LOOKAHEAD_PX: f64 = 150.0;

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset beyond which the navbar switches to its scrolled style.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Downward offset of an unrevealed element, in CSS pixels.
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer margin for reveals; the negative bottom margin fires slightly early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Reveal transition length in seconds.
pub const REVEAL_TRANSITION_S: f64 = 0.8;

// ── Lazy images ─────────────────────────────────────────────────

/// Observer margin for deferred images.
pub const LAZY_ROOT_MARGIN: &str = "50px";

// ── Pointer ─────────────────────────────────────────────────────

/// Share of the pointer's offset from a control's center that the control follows.
pub const MAGNETIC_STRENGTH: f64 = 0.1;

/// Scale applied to a control while the pointer is over it.
pub const MAGNETIC_SCALE: f64 = 1.02;

/// Pointer travel across the full window maps to this many parallax units.
pub const PARALLAX_RANGE: f64 = 30.0;

/// Per-shape speed step; shape `i` moves at `(i + 1) * PARALLAX_SPEED_STEP`.
pub const PARALLAX_SPEED_STEP: f64 = 8.0;

/// Damping applied to every parallax translation.
pub const PARALLAX_DAMPING: f64 = 0.5;

/// Edge length of the custom cursor dot, in CSS pixels.
pub const CURSOR_SIZE_PX: f64 = 10.0;

/// Cursor opacity while over an interactive element.
pub const CURSOR_HOVER_OPACITY: f64 = 0.5;

/// Cursor scale while over an interactive element.
pub const CURSOR_HOVER_SCALE: f64 = 1.5;

// ── Entrance animations ─────────────────────────────────────────

/// Keyframes shared by every staggered entrance.
pub const ENTRANCE_KEYFRAMES: &str = "fade-in-up";

// ── Storage ─────────────────────────────────────────────────────

/// Storage key of the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";
