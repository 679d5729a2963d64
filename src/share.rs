//! Product Sharing
//!
//! Uses the platform share sheet when the browser has one, otherwise copies
//! the page URL to the clipboard.

use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::config::PageConfig;
use crate::error::{js_error_message, ShareError};
use crate::models::SharePayload;
use crate::notice::{self, Notice};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
    fn native_share(data: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    fn clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

impl SharePayload {
    /// Page globals win, empty strings fall back like missing ones
    pub fn resolve(
        product_name: Option<String>,
        product_description: Option<String>,
        document_title: String,
        url: String,
    ) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        Self {
            title: non_empty(product_name).unwrap_or(document_title),
            text: non_empty(product_description).unwrap_or_default(),
            url,
        }
    }
}

fn window_string(window: &Window, name: &str) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

/// Share data for the current page
pub fn page_payload(window: &Window) -> SharePayload {
    let title = window.document().map(|d| d.title()).unwrap_or_default();
    let url = window.location().href().unwrap_or_default();
    SharePayload::resolve(
        window_string(window, "productName"),
        window_string(window, "productDescription"),
        title,
        url,
    )
}

fn supports_native_share(window: &Window) -> bool {
    let navigator = window.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .map(|f| f.is_function())
        .unwrap_or(false)
}

/// Copy `url` to the clipboard and wait for the write
pub async fn copy_link(url: &str) -> Result<(), ShareError> {
    let promise = clipboard_write_text(url).map_err(|e| ShareError::Clipboard(js_error_message(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ShareError::Clipboard(js_error_message(&e)))?;
    Ok(())
}

/// Share the current product page
pub fn share_product(config: Rc<PageConfig>) {
    let Some(window) = web_sys::window() else {
        log::warn!("[SHARE] {}", ShareError::NoWindow);
        return;
    };
    let payload = page_payload(&window);

    if supports_native_share(&window) {
        let data = match serde_wasm_bindgen::to_value(&payload) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("[SHARE] Failed to serialize payload: {}", e);
                return;
            }
        };
        match native_share(&data) {
            // Cancel and failure look the same from here
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[SHARE] share sheet closed: {}", js_error_message(&e));
                }
            }),
            Err(e) => log::debug!("[SHARE] share rejected: {}", js_error_message(&e)),
        }
        return;
    }

    spawn_local(async move {
        match copy_link(&payload.url).await {
            Ok(()) => notice::show(Notice::LinkCopied, &config.messages),
            Err(e) => {
                log::warn!("[SHARE] {}", e);
                notice::show(Notice::CopyFailed, &config.messages);
            }
        }
    });
}
