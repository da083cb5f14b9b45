//! Dark mode toggle binding.
//!
//! Applies the restored theme on mount and flips it on every click of the
//! toggle control. The `.dark-mode` class lives on `<body>`, where the
//! stylesheet expects it.

use web_sys::{Document, Element};

use super::Page;
use super::dom;
use crate::error::PageError;
use crate::theme::{DARK_CLASS, Theme};

const TOGGLE_ID: &str = "themeToggle";

fn render(document: &Document, toggle: Option<&Element>, theme: Theme) -> Result<(), PageError> {
    if let Some(body) = document.body() {
        dom::set_class(&body, DARK_CLASS, theme.is_dark())?;
    }
    if let Some(toggle) = toggle {
        toggle.set_text_content(Some(theme.toggle_icon()));
    }
    Ok(())
}

pub(crate) fn bind(page: &Page) -> Result<(), PageError> {
    let toggle = page.document.get_element_by_id(TOGGLE_ID);
    let initial = page.core.borrow().theme();
    render(&page.document, toggle.as_ref(), initial)?;

    let Some(toggle) = toggle else {
        log::debug!("no theme toggle on this page");
        return Ok(());
    };

    let core = page.core.clone();
    let document = page.document.clone();
    let target = toggle.clone();
    dom::on(&target, "click", move |_| {
        let theme = core.borrow_mut().toggle_theme();
        dom::report("theme", render(&document, Some(&toggle), theme));
    })
}
