//! Page state owner.
//!
//! [`PageCore`] holds every piece of mutable page state behind one value:
//! the theme controller, the menu flag, the scroll frame gate,
//! and the one-shot watch lists for reveals and lazy images. Each method
//! takes the inputs of one DOM event and returns the effect to apply.
//!
//! Separated from the `page` bindings so it can be tested without a browser.
//! `E` is the element handle; the bindings use `web_sys::Element`, tests use
//! plain strings.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::lazy::ImageLoad;
use crate::nav::{MenuState, Section, active_section};
use crate::observe::OneShotWatch;
use crate::pointer::{Parallax, Point, Rect, magnetic_transform};
use crate::reveal::{hidden_style, revealed_style};
use crate::scroll::{FrameGate, NavbarStyle, ScrollMetrics, progress_style};
use crate::storage::PreferenceStore;
use crate::style::{StylePatch, Transform};
use crate::theme::{Theme, ThemeController};

/// Everything one scroll frame changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub progress: StylePatch,
    pub navbar: NavbarStyle,
    pub current_section: Option<String>,
}

/// Single owner of mutable page state.
pub struct PageCore<S, E> {
    config: PageConfig,
    theme: ThemeController<S>,
    menu: MenuState,
    scroll_gate: FrameGate,
    reveals: OneShotWatch<E>,
    images: OneShotWatch<E>,
}

impl<S: PreferenceStore, E: PartialEq> PageCore<S, E> {
    /// Build the core, restoring the theme from `store`.
    pub fn new(config: PageConfig, store: S) -> Self {
        Self {
            config,
            theme: ThemeController::load(store),
            menu: MenuState::default(),
            scroll_gate: FrameGate::default(),
            reveals: OneShotWatch::new(),
            images: OneShotWatch::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // --- Theme ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Flip the theme. A failed save is logged; the new theme still applies.
    pub fn toggle_theme(&mut self) -> Theme {
        match self.theme.toggle() {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("theme not persisted: {e}");
                self.theme.theme()
            }
        }
    }

    #[must_use]
    pub fn theme_store(&self) -> &S {
        self.theme.store()
    }

    // --- Menu ---

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn hamburger_clicked(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn nav_link_clicked(&mut self) -> bool {
        self.menu.link_clicked()
    }

    pub fn document_clicked(&mut self, inside_controls: bool) -> bool {
        self.menu.document_clicked(inside_controls)
    }

    // --- Scroll ---

    /// A scroll event arrived. Returns `true` if a frame should be scheduled.
    pub fn scroll_requested(&mut self) -> bool {
        self.scroll_gate.request()
    }

    /// Effects of one scroll frame.
    #[must_use]
    pub fn scroll_frame(&self, metrics: ScrollMetrics, sections: &[Section]) -> ScrollFrame {
        ScrollFrame {
            progress: progress_style(metrics),
            navbar: NavbarStyle::for_offset(metrics.offset, self.config.navbar_scrolled_px),
            current_section: active_section(sections, metrics.offset, self.config.section_lookahead_px)
                .map(str::to_owned),
        }
    }

    /// A scheduled frame began, or could not be scheduled: reopen the gate.
    ///
    /// Called before the frame reads the DOM, so a failed read never leaves
    /// later scrolls without a frame.
    pub fn scroll_frame_started(&mut self) {
        self.scroll_gate.complete();
    }

    // --- Reveal ---

    /// Register an element for reveal; returns its initial hidden style.
    pub fn watch_reveal(&mut self, element: E) -> Option<StylePatch> {
        self.reveals.watch(element).then(hidden_style)
    }

    /// An observed element became visible. Returns the reveal style the first
    /// time only.
    pub fn reveal_visible(&mut self, element: &E) -> Option<StylePatch> {
        self.reveals.fire(element).then(revealed_style)
    }

    #[cfg(test)]
    pub(crate) fn pending_reveals(&self) -> usize {
        self.reveals.pending()
    }

    // --- Lazy images ---

    pub fn watch_image(&mut self, image: E) -> bool {
        self.images.watch(image)
    }

    /// A watched image became visible. Returns the load to perform the first
    /// time only.
    pub fn image_visible(&mut self, image: &E, deferred: Option<&str>, current: &str) -> Option<ImageLoad> {
        self.images
            .fire(image)
            .then(|| ImageLoad::for_image(deferred, current))
    }

    #[cfg(test)]
    pub(crate) fn pending_images(&self) -> usize {
        self.images.pending()
    }

    // --- Pointer ---

    #[must_use]
    pub fn magnetic(&self, pointer: Point, rect: Rect) -> Transform {
        magnetic_transform(pointer, rect, self.config.magnetic_strength, self.config.magnetic_scale)
    }

    #[must_use]
    pub fn parallax(&self, pointer: Point, viewport_width: f64, viewport_height: f64, shapes: usize) -> Vec<Transform> {
        let parallax = Parallax {
            range: self.config.parallax_range,
            speed_step: self.config.parallax_speed_step,
            damping: self.config.parallax_damping,
        };
        parallax.transforms(pointer, viewport_width, viewport_height, shapes)
    }
}
