//! Thin accessors over the browser globals.

use web_sys::{Element, Window};

use crate::error::HostError;

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document_element() -> Result<Element, HostError> {
    window()?
        .document()
        .ok_or(HostError::NoDocument)?
        .document_element()
        .ok_or(HostError::NoDocumentElement)
}

/// Raw vertical scroll position as reported by the window.
pub fn scroll_y() -> Result<f64, HostError> {
    window()?.scroll_y().map_err(|err| HostError::Read {
        what: "scrollY",
        message: format!("{:?}", err),
    })
}

pub fn viewport_width() -> Result<f64, HostError> {
    let value = window()?.inner_width().map_err(|err| HostError::Read {
        what: "innerWidth",
        message: format!("{:?}", err),
    })?;
    value.as_f64().ok_or(HostError::Read {
        what: "innerWidth",
        message: "not a number".to_string(),
    })
}

pub fn viewport_height() -> Result<f64, HostError> {
    let value = window()?.inner_height().map_err(|err| HostError::Read {
        what: "innerHeight",
        message: format!("{:?}", err),
    })?;
    value.as_f64().ok_or(HostError::Read {
        what: "innerHeight",
        message: "not a number".to_string(),
    })
}

/// Full scrollable height of the document.
pub fn scroll_height() -> Result<f64, HostError> {
    Ok(document_element()?.scroll_height() as f64)
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
