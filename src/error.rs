//! Error Types
//!
//! Failures of the add-to-cart and share flows. None of them is fatal to the
//! page; each one is reported to the user through a notice or only logged.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The server answered but refused the add
    #[error("server rejected the add: {reason}")]
    Rejected { reason: String },
    /// Fetch rejected or the body could not be read
    #[error("request failed: {0}")]
    Transport(String),
    /// The body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
}

impl CartError {
    pub fn transport(value: JsValue) -> Self {
        Self::Transport(js_error_message(&value))
    }

    /// Notice shown to the user for this failure
    pub fn notice(&self) -> Notice {
        match self {
            Self::Rejected { .. } => Notice::AddFailed,
            Self::Transport(_) | Self::Decode(_) => Notice::NetworkError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("no browser window")]
    NoWindow,
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

/// Best-effort message for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
