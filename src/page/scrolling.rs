//! Frame-gated scroll effects: progress bar, navbar, active nav link.
//!
//! Scroll events only ask the core for a frame. The first request after a
//! frame schedules `requestAnimationFrame`; the frame reads fresh scroll
//! metrics and applies all three effects at once.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};

use super::navigation::NAV_LINK_SELECTOR;
use super::{Page, dom};
use crate::error::PageError;
use crate::nav::{LINK_ACTIVE_CLASS, Section, link_style};
use crate::scroll::ScrollMetrics;

const PROGRESS_SELECTOR: &str = ".scroll-progress";
const NAVBAR_SELECTOR: &str = ".navbar";
const SECTION_SELECTOR: &str = "section";

/// Elements touched by every scroll frame, looked up once at mount.
struct Targets {
    progress: Option<Element>,
    navbar: Option<Element>,
    links: Vec<Element>,
}

fn metrics(page: &Page) -> ScrollMetrics {
    let offset = page.window.scroll_y().unwrap_or(0.0);
    let scroll_height = page
        .document
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    let (_, viewport_height) = dom::viewport_size(&page.window);
    ScrollMetrics::new(offset, scroll_height, viewport_height)
}

/// Sections are re-read each frame; their offsets move as images load.
fn sections(page: &Page) -> Result<Vec<Section>, PageError> {
    Ok(dom::query_all(&page.document, SECTION_SELECTOR)?
        .into_iter()
        .filter_map(|el| {
            let html = el.dyn_ref::<HtmlElement>()?;
            Some(Section::new(&el.id(), f64::from(html.offset_top())))
        })
        .collect())
}

fn run_frame(page: &Page, targets: &Targets) -> Result<(), PageError> {
    let sections = sections(page)?;
    let frame = page.core.borrow().scroll_frame(metrics(page), &sections);

    if let Some(progress) = &targets.progress {
        dom::apply_style(progress, &frame.progress)?;
    }
    if let Some(navbar) = &targets.navbar {
        dom::apply_style(navbar, &frame.navbar.patch())?;
    }
    let current = frame.current_section.as_deref();
    for link in &targets.links {
        dom::set_class(link, LINK_ACTIVE_CLASS, false)?;
        let href = link.get_attribute("href").unwrap_or_default();
        dom::apply_style(link, &link_style(&href, current))?;
    }
    Ok(())
}

fn request_frame(page: &Page, targets: &Rc<Targets>) {
    if !page.core.borrow_mut().scroll_requested() {
        return;
    }

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let page_for_cb = page.clone();
    let targets_for_cb = Rc::clone(targets);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        page_for_cb.core.borrow_mut().scroll_frame_started();
        dom::report("scroll frame", run_frame(&page_for_cb, &targets_for_cb));
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if page
        .window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        page.core.borrow_mut().scroll_frame_started();
        dom::report("scroll frame", run_frame(page, targets));
    }
}

pub(crate) fn bind(page: &Page) -> Result<(), PageError> {
    let targets = Rc::new(Targets {
        progress: dom::query(&page.document, PROGRESS_SELECTOR)?,
        navbar: dom::query(&page.document, NAVBAR_SELECTOR)?,
        links: dom::query_all(&page.document, NAV_LINK_SELECTOR)?,
    });

    // Paint the initial state before the first scroll.
    run_frame(page, &targets)?;

    let page_for_cb = page.clone();
    dom::on_passive(&page.window, "scroll", move |_| request_frame(&page_for_cb, &targets))
}
