use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced while building the icon's DOM subtree.
///
/// The widget does not validate its inputs; these only wrap failures the
/// browser itself reports from element creation and insertion.
#[derive(Debug, Error)]
pub enum IconError {
    /// The browser rejected an element creation or insertion.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// The container element has no owner document to create nodes with.
    #[error("container has no owner document")]
    NoDocument,
}

impl IconError {
    pub(crate) fn dom(err: JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}
