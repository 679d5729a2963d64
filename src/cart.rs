//! Add To Cart
//!
//! Wires `.add-to-cart-btn` buttons to the add-to-cart endpoint.
//!
//! Every click sends one background request. The server owns the cart count:
//! on success the counter shows the count the server returned and is never
//! incremented locally, so several open tabs cannot drift apart.

use dom_listeners::ListenerSet;
use leptos::prelude::Effect;
use leptos::task::spawn_local;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Headers, Request, RequestCredentials, RequestInit, Response};

use crate::config::PageConfig;
use crate::dom;
use crate::error::CartError;
use crate::models::CartResponse;
use crate::notice::{self, Notice};
use crate::store::{store_cart_count, store_set_cart_count, PageStore};

/// Characters escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Fill the `{id}` placeholder of the endpoint template
pub fn cart_add_url(template: &str, product_id: &str) -> String {
    let encoded = utf8_percent_encode(product_id, PATH_SEGMENT).to_string();
    template.replace("{id}", &encoded)
}

pub fn parse_cart_response(body: &str) -> Result<CartResponse, CartError> {
    serde_json::from_str(body).map_err(|e| CartError::Decode(e.to_string()))
}

/// Server count on success, `Rejected` when the server refused the add
pub fn accept_response(response: CartResponse) -> Result<Option<u32>, CartError> {
    if response.success {
        Ok(response.cart_count)
    } else {
        Err(CartError::Rejected {
            reason: response.error.unwrap_or_else(|| "no reason given".to_string()),
        })
    }
}

/// What the page does after an add-to-cart request settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOutcome {
    pub notice: Notice,
    /// New counter value, None leaves the counter untouched
    pub cart_count: Option<u32>,
}

impl CartOutcome {
    pub fn from_result(result: &Result<Option<u32>, CartError>) -> Self {
        match result {
            Ok(count) => Self {
                notice: Notice::AddedToCart,
                cart_count: *count,
            },
            Err(e) => Self {
                notice: e.notice(),
                cart_count: None,
            },
        }
    }
}

/// Send `GET url` as a background request and decode the JSON body.
/// The HTTP status is not inspected; the body decides the outcome.
pub async fn request_add(url: &str) -> Result<CartResponse, CartError> {
    let window = web_sys::window().ok_or_else(|| CartError::Transport("no browser window".to_string()))?;

    let headers = Headers::new().map_err(CartError::transport)?;
    headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(CartError::transport)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_headers(headers.as_ref());

    let request = Request::new_with_str_and_init(url, &init).map_err(CartError::transport)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(CartError::transport)?
        .dyn_into()
        .map_err(CartError::transport)?;
    log::debug!("[CART] {} -> HTTP {}", url, response.status());

    let body = JsFuture::from(response.text().map_err(CartError::transport)?)
        .await
        .map_err(CartError::transport)?
        .as_string()
        .ok_or_else(|| CartError::Decode("response body is not text".to_string()))?;

    parse_cart_response(&body)
}

/// Add one product and report the result to the user
pub async fn add_to_cart(product_id: String, config: Rc<PageConfig>, store: PageStore) {
    let url = config.cart_url(&product_id);
    let result = request_add(&url).await.and_then(accept_response);
    match &result {
        Ok(count) => log::info!("[CART] added product {} (cart_count={:?})", product_id, count),
        Err(e) => log::warn!("[CART] product {}: {}", product_id, e),
    }

    let outcome = CartOutcome::from_result(&result);
    notice::show(outcome.notice, &config.messages);
    if let Some(count) = outcome.cart_count {
        if !store_set_cart_count(&store, count) {
            log::debug!("[CART] page torn down, dropping cart_count={}", count);
        }
    }
}

fn product_id(button: &Element, attr: &str) -> Option<String> {
    button
        .get_attribute(attr)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

/// Write the counter text; a page without a counter is fine
pub fn render_count(document: &Document, counter_id: &str, count: u32) {
    if let Some(counter) = document.get_element_by_id(counter_id) {
        counter.set_text_content(Some(&count.to_string()));
    }
}

/// Bind every add-to-cart button and mirror the cart count into `#cart-count`
pub fn bind(
    document: &Document,
    config: &Rc<PageConfig>,
    store: PageStore,
    listeners: &mut ListenerSet,
) -> Result<(), JsValue> {
    let buttons = dom::query_all(document, &config.selectors.add_to_cart);
    for button in &buttons {
        let cfg = Rc::clone(config);
        let el = button.clone();
        listeners.bind(button, "click", move |_| {
            let Some(id) = product_id(&el, &cfg.selectors.product_id_attr) else {
                log::warn!("[CART] button without {}", cfg.selectors.product_id_attr);
                return;
            };
            spawn_local(add_to_cart(id, Rc::clone(&cfg), store));
        })?;
    }

    let counter_id = config.selectors.cart_count_id.clone();
    Effect::new(move |_| {
        if let Some(count) = store_cart_count(&store) {
            if let Some(document) = dom::document() {
                render_count(&document, &counter_id, count);
            }
        }
    });

    log::debug!("[CART] bound {} buttons", buttons.len());
    Ok(())
}
