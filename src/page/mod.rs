//! Browser bindings: wires DOM events to [`PageCore`] and applies its effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The module runs once per page load. [`start`] runs when the WASM module is
//! instantiated and mounts every behavior as soon as the document is parsed.
//! Each behavior binds independently; one that cannot find its elements or
//! fails a DOM call is logged and skipped, and the rest still mount.
//!
//! All listeners share one `Rc<RefCell<PageCore>>`. Callbacks run to
//! completion on the single browser thread and only borrow the core for
//! their own duration.

mod dom;
mod lazy;
mod navigation;
mod pointer;
mod reveal;
mod scrolling;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, Window};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::PageCore;
use crate::error::PageError;
use crate::storage::LocalStorage;

/// The page state shared by every listener.
pub(crate) type SharedCore = Rc<RefCell<PageCore<LocalStorage, Element>>>;

/// Handles every binding needs.
#[derive(Clone)]
pub(crate) struct Page {
    pub window: Window,
    pub document: Document,
    pub core: SharedCore,
}

impl Page {
    fn new() -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = PageConfig::from_json_or_default(read_config(&document).as_deref());
        let core = PageCore::new(config, LocalStorage::open());
        Ok(Self { window, document, core: Rc::new(RefCell::new(core)) })
    }

    /// Bind every behavior.
    fn mount(&self) {
        dom::report("smooth scroll", navigation::enable_smooth_scroll(self));
        dom::report("theme", theme::bind(self));
        dom::report("hamburger menu", navigation::bind_menu(self));
        dom::report("placeholder links", navigation::bind_placeholder_links(self));
        dom::report("scroll effects", scrolling::bind(self));
        dom::report("reveal", reveal::bind_reveal(self));
        dom::report("entrance", reveal::bind_entrances(self));
        dom::report("lazy images", lazy::bind(self));
        dom::report("magnetic buttons", pointer::bind_magnetic(self));
        dom::report("parallax", pointer::bind_parallax(self));
        dom::report("cursor", pointer::bind_cursor(self));
        dom::report("field focus", pointer::bind_field_focus(self));
        log::info!("Portfolio website loaded successfully");
    }
}

fn read_config(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

fn mount_page() {
    match Page::new() {
        Ok(page) => page.mount(),
        Err(e) => log::warn!("page behaviors not mounted: {e}"),
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {e}");
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("page behaviors not mounted: {e}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        dom::report(
            "startup",
            dom::on(&document, "DOMContentLoaded", move |_| mount_page()),
        );
    } else {
        mount_page();
    }
}

/// Smoothly scroll the section with `id` to the top of the viewport.
///
/// Exposed to page markup as `scrollToSection`. Missing sections are ignored.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    match dom::document() {
        Ok(document) => navigation::scroll_to_section(&document, id),
        Err(e) => log::debug!("scrollToSection({id}): {e}"),
    }
}
