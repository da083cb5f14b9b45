//! Thin `web-sys` helpers shared by the page bindings.
//!
//! Fallible DOM calls return `Result<_, PageError>` so bindings can use `?`;
//! [`report`] is the single place those errors end up, as warnings.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Node, Window,
};

use crate::error::PageError;
use crate::observe::ObserverOptions;
use crate::pointer::{Point, Rect};
use crate::style::StylePatch;

pub(crate) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub(crate) fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoWindow)
}

/// Log a binding failure and carry on.
pub(crate) fn report(behavior: &str, result: Result<(), PageError>) {
    if let Err(e) = result {
        log::warn!("{behavior}: {e}");
    }
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    Ok(document.query_selector(selector)?)
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Write every declaration in `patch` to the element's inline style.
/// Elements without an inline style (non-HTML) are skipped.
pub(crate) fn apply_style(element: &Element, patch: &StylePatch) -> Result<(), PageError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    for (property, value) in patch.iter() {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub(crate) fn set_class(element: &Element, class: &str, present: bool) -> Result<(), PageError> {
    element.class_list().toggle_with_force(class, present)?;
    Ok(())
}

/// Register a listener that lives as long as the page.
pub(crate) fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`on`], but marks the listener passive so it never blocks scrolling.
pub(crate) fn on_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Client coordinates of a mouse event.
pub(crate) fn client_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

pub(crate) fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Whether the event target lies inside `container`.
pub(crate) fn event_within(event: &Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_ref::<Node>().cloned())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// `window.innerWidth` / `window.innerHeight`, zero when unavailable.
pub(crate) fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    (width, height)
}

/// Whether the runtime provides `IntersectionObserver`.
pub(crate) fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Build an observer that calls `on_visible` the first time each observed
/// element intersects.
///
/// Each element is unobserved as soon as it has been reported, so the
/// observer holds nothing once every element has fired. The browser keeps
/// the observer alive while it still has targets. Nothing is observed yet;
/// callers build the observer before touching the page so a rejected
/// option leaves the markup as it was.
pub(crate) fn one_shot_observer<F>(
    options: &ObserverOptions,
    mut on_visible: F,
) -> Result<IntersectionObserver, PageError>
where
    F: FnMut(&Element) + 'static,
{
    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    Ok(observer)
}
