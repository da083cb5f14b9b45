//! Pointer bindings: magnetic controls, parallax shapes, custom cursor, and
//! form-field focus.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use super::{Page, dom};
use crate::error::PageError;
use crate::pointer::{
    CURSOR_CLASS, FIELD_SELECTOR, INTERACTIVE_SELECTOR, MAGNETIC_SELECTOR, cursor_base_style, cursor_follow_style,
    cursor_hover_style, cursor_visibility_style, field_focus_style,
};
use crate::style::{StylePatch, Transform};

const HERO_SELECTOR: &str = ".hero";
const BLUR_SHAPE_SELECTOR: &str = ".blur-shape";

fn transform_patch(transform: Transform) -> StylePatch {
    StylePatch::new().set("transform", transform.to_string())
}

pub(crate) fn bind_magnetic(page: &Page) -> Result<(), PageError> {
    for control in dom::query_all(&page.document, MAGNETIC_SELECTOR)? {
        {
            let core = page.core.clone();
            let target = control.clone();
            dom::on(&control, "mousemove", move |event| {
                let Some(pointer) = dom::client_point(&event) else {
                    return;
                };
                let transform = core.borrow().magnetic(pointer, dom::bounding_rect(&target));
                dom::report("magnetic buttons", dom::apply_style(&target, &transform_patch(transform)));
            })?;
        }
        let target = control.clone();
        dom::on(&control, "mouseleave", move |_| {
            dom::report("magnetic buttons", dom::apply_style(&target, &transform_patch(Transform::IDENTITY)));
        })?;
    }
    Ok(())
}

fn apply_all(shapes: &[Element], transforms: &[Transform]) -> Result<(), PageError> {
    for (shape, transform) in shapes.iter().zip(transforms) {
        dom::apply_style(shape, &transform_patch(*transform))?;
    }
    Ok(())
}

/// Shapes drift with the pointer, only on pages with a hero region.
///
/// Each pointer move replaces the pending zero-delay timeout; dropping a
/// `Timeout` cancels it, so only the latest position in a tick is applied.
pub(crate) fn bind_parallax(page: &Page) -> Result<(), PageError> {
    if dom::query(&page.document, HERO_SELECTOR)?.is_none() {
        return Ok(());
    }
    let shapes = Rc::new(dom::query_all(&page.document, BLUR_SHAPE_SELECTOR)?);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    {
        let page_for_cb = page.clone();
        let shapes = Rc::clone(&shapes);
        let pending = Rc::clone(&pending);
        dom::on(&page.window, "mousemove", move |event| {
            let Some(pointer) = dom::client_point(&event) else {
                return;
            };
            let page = page_for_cb.clone();
            let shapes = Rc::clone(&shapes);
            let timeout = Timeout::new(0, move || {
                let (width, height) = dom::viewport_size(&page.window);
                let transforms = page.core.borrow().parallax(pointer, width, height, shapes.len());
                dom::report("parallax", apply_all(&shapes, &transforms));
            });
            *pending.borrow_mut() = Some(timeout);
        })?;
    }

    dom::on(&page.window, "mouseleave", move |_| {
        pending.borrow_mut().take();
        let rest = vec![Transform::IDENTITY; shapes.len()];
        dom::report("parallax", apply_all(&shapes, &rest));
    })
}

pub(crate) fn bind_cursor(page: &Page) -> Result<(), PageError> {
    let Some(body) = page.document.body() else {
        return Ok(());
    };
    let cursor = page.document.create_element("div")?;
    cursor.set_class_name(CURSOR_CLASS);
    dom::apply_style(&cursor, &cursor_base_style())?;
    body.append_child(&cursor)?;

    {
        let cursor = cursor.clone();
        dom::on(&page.document, "mousemove", move |event| {
            if let Some(pointer) = dom::client_point(&event) {
                dom::report("cursor", dom::apply_style(&cursor, &cursor_follow_style(pointer)));
            }
        })?;
    }
    for (event, visible) in [("mouseenter", true), ("mouseleave", false)] {
        let cursor = cursor.clone();
        dom::on(&page.document, event, move |_| {
            dom::report("cursor", dom::apply_style(&cursor, &cursor_visibility_style(visible)));
        })?;
    }

    for element in dom::query_all(&page.document, INTERACTIVE_SELECTOR)? {
        for (event, over) in [("mouseenter", true), ("mouseleave", false)] {
            let cursor = cursor.clone();
            dom::on(&element, event, move |_| {
                dom::report("cursor", dom::apply_style(&cursor, &cursor_hover_style(over)));
            })?;
        }
    }
    Ok(())
}

pub(crate) fn bind_field_focus(page: &Page) -> Result<(), PageError> {
    for field in dom::query_all(&page.document, FIELD_SELECTOR)? {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let target = field.clone();
            dom::on(&field, event, move |_| {
                dom::report("field focus", dom::apply_style(&target, &field_focus_style(focused)));
            })?;
        }
    }
    Ok(())
}
