//! Window scroll helpers. Requires a browser environment.

/// Jump to the top of the document.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
