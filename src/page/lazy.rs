//! Lazy image binding.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use super::{Page, dom};
use crate::error::PageError;
use crate::lazy::{ImageLoad, LAZY_IMAGE_SELECTOR};

fn load(image: &Element, load: &ImageLoad) -> Result<(), PageError> {
    if let Some(img) = image.dyn_ref::<HtmlImageElement>() {
        img.set_src(&load.src);
    }
    dom::set_class(image, load.class, true)
}

/// Skipped when the runtime has no `IntersectionObserver`; images then show
/// whatever their `src` already holds.
pub(crate) fn bind(page: &Page) -> Result<(), PageError> {
    if !dom::supports_intersection_observer(&page.window) {
        log::debug!("IntersectionObserver unsupported; lazy images disabled");
        return Ok(());
    }

    let images = dom::query_all(&page.document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }

    let options = page.core.borrow().config().lazy.clone();
    let core = page.core.clone();
    let observer = dom::one_shot_observer(&options, move |image| {
        let deferred = image.get_attribute("data-src");
        let current = image.get_attribute("src").unwrap_or_default();
        let pending = core.borrow_mut().image_visible(image, deferred.as_deref(), &current);
        if let Some(pending) = pending {
            dom::report("lazy images", load(image, &pending));
        }
    })?;

    for image in &images {
        if page.core.borrow_mut().watch_image(image.clone()) {
            observer.observe(image);
        }
    }
    Ok(())
}
