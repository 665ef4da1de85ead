use web_sys::{Element, HtmlElement};

use crate::style::StyleMap;

/// Look up an element by id without panicking outside the browser.
#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
}

/// Set each entry of `style` as its own inline property on `element`.
///
/// Every key goes through `setProperty` separately, so a value the browser
/// rejects affects only its own property.
pub fn apply_style(element: &HtmlElement, style: &StyleMap) {
    let declarations = element.style();
    for (key, value) in style.iter() {
        if let Err(err) = declarations.set_property(key, value) {
            log::warn!("cannot set {key} on button: {err:?}");
        }
    }
}

/// Remove previously applied inline properties from `element`.
pub fn clear_style(element: &HtmlElement, keys: &[String]) {
    let declarations = element.style();
    for key in keys {
        let _ = declarations.remove_property(key);
    }
}
