//! Error types for configuration, DOM wiring and clipboard access.
//!
//! Only `CopyError` is ever surfaced to the visitor (as the manual-copy hint).
//! The others end up in the console log or, for the exported entry points, as
//! a thrown JS error string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Invalid `PageConfig` values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidDistance { field: &'static str, value: f64 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Failures while wiring the controller into the document.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("document has no root element")]
    NoRoot,
    #[error("local storage unavailable")]
    NoStorage,
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PageError {
    /// Wrap a thrown JS value with the DOM call that produced it.
    #[must_use]
    pub fn js(context: &'static str, value: &JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Clipboard write failures. Both map to the same manual-copy hint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    #[error("clipboard api unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
