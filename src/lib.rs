//! Storefront UI
//!
//! Client-side behaviour for the server-rendered storefront pages:
//! - menu: mobile navigation toggle
//! - cart: add-to-cart buttons and the cart counter
//! - share: native share sheet with a copy-link fallback
//! - rating: clickable star rating

pub mod cart;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;
pub mod notice;
pub mod rating;
pub mod share;
pub mod store;

mod dom;
mod page;

pub use page::{init, share_product, toggle_mobile_menu, PageHandle};
