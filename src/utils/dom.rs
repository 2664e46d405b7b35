//! DOM and Web API utility functions.

use wasm_bindgen::JsCast;
use web_sys::Window;

use fauxsh_core::console;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Leave the terminal for `url`.
pub fn navigate(url: &str) {
    let Some(window) = window() else { return };
    if let Err(e) = window.location().set_href(url) {
        console::error(&format!("navigation to {} failed: {:?}", url, e));
    }
}
