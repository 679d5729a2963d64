//! Frontend Models
//!
//! Data structures exchanged with the storefront server and the browser.

use serde::{Deserialize, Serialize};

/// Body returned by the add-to-cart endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartResponse {
    /// A missing flag counts as a failure
    #[serde(default)]
    pub success: bool,
    /// Absolute number of items in the cart after the add
    #[serde(default)]
    pub cart_count: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Data passed to `navigator.share`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}
