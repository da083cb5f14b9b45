//! Section scrolling, hamburger menu, and placeholder links.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::Page;
use super::dom;
use crate::error::PageError;
use crate::nav::{MENU_OPEN_CLASS, is_placeholder_href};
use crate::style::StylePatch;

const HAMBURGER_ID: &str = "hamburger";
const MENU_ID: &str = "navMenu";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link";

pub(crate) fn scroll_to_section(document: &Document, id: &str) {
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn enable_smooth_scroll(page: &Page) -> Result<(), PageError> {
    if let Some(root) = page.document.document_element() {
        dom::apply_style(&root, &StylePatch::new().set("scroll-behavior", "smooth"))?;
    }
    Ok(())
}

/// Hamburger toggle, close on link click, close on outside click.
///
/// Skipped unless both the hamburger and the menu panel exist.
pub(crate) fn bind_menu(page: &Page) -> Result<(), PageError> {
    let (Some(hamburger), Some(menu)) = (
        page.document.get_element_by_id(HAMBURGER_ID),
        page.document.get_element_by_id(MENU_ID),
    ) else {
        log::debug!("no hamburger menu on this page");
        return Ok(());
    };

    let render = {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        move |open: bool| {
            dom::report(
                "hamburger menu",
                dom::set_class(&hamburger, MENU_OPEN_CLASS, open)
                    .and_then(|()| dom::set_class(&menu, MENU_OPEN_CLASS, open)),
            );
        }
    };

    {
        let core = page.core.clone();
        let render = render.clone();
        dom::on(&hamburger, "click", move |_| {
            let open = core.borrow_mut().hamburger_clicked();
            render(open);
        })?;
    }

    for link in dom::query_all(&page.document, NAV_LINK_SELECTOR)? {
        let core = page.core.clone();
        let render = render.clone();
        dom::on(&link, "click", move |_| {
            let open = core.borrow_mut().nav_link_clicked();
            render(open);
        })?;
    }

    let core = page.core.clone();
    dom::on(&page.document, "click", move |event| {
        let inside = dom::event_within(&event, &hamburger) || dom::event_within(&event, &menu);
        let was_open = core.borrow().menu_open();
        let open = core.borrow_mut().document_clicked(inside);
        if was_open != open {
            render(open);
        }
    })
}

/// Suppress navigation on `href="#"` anchors.
pub(crate) fn bind_placeholder_links(page: &Page) -> Result<(), PageError> {
    for link in dom::query_all(&page.document, "a[href]")? {
        let is_placeholder = link.get_attribute("href").is_some_and(|href| is_placeholder_href(&href));
        if is_placeholder {
            dom::on(&link, "click", |event| event.prevent_default())?;
        }
    }
    Ok(())
}
