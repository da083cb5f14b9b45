//! Reveal-on-scroll observer and staggered entrance animations.

use super::{Page, dom};
use crate::error::PageError;
use crate::reveal::{Entrance, HERO_TEXT, PROJECT_CARDS, REVEAL_SELECTOR, SKILL_PILLS};

/// The observer is built before anything is hidden: if the browser rejects
/// it, sections stay visible.
pub(crate) fn bind_reveal(page: &Page) -> Result<(), PageError> {
    let elements = dom::query_all(&page.document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let options = page.core.borrow().config().reveal.clone();
    let core = page.core.clone();
    let observer = dom::one_shot_observer(&options, move |element| {
        let shown = core.borrow_mut().reveal_visible(element);
        if let Some(patch) = shown {
            dom::report("reveal", dom::apply_style(element, &patch));
        }
    })?;

    for element in &elements {
        let hidden = page.core.borrow_mut().watch_reveal(element.clone());
        if let Some(patch) = hidden {
            dom::apply_style(element, &patch)?;
            observer.observe(element);
        }
    }
    Ok(())
}

fn animate(page: &Page, entrance: &Entrance) -> Result<(), PageError> {
    for (index, element) in dom::query_all(&page.document, entrance.selector)?.iter().enumerate() {
        dom::apply_style(element, &entrance.style(index))?;
    }
    Ok(())
}

/// Skill pills and project cards animate now; hero text waits for `load`.
pub(crate) fn bind_entrances(page: &Page) -> Result<(), PageError> {
    animate(page, &SKILL_PILLS)?;
    animate(page, &PROJECT_CARDS)?;

    if page.document.ready_state() == "complete" {
        return animate(page, &HERO_TEXT);
    }
    let page_for_cb = page.clone();
    dom::on(&page.window, "load", move |_| {
        dom::report("entrance", animate(&page_for_cb, &HERO_TEXT));
    })
}
