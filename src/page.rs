//! Page Wiring
//!
//! Single entry point binding all widgets of a storefront page, and the
//! handle that unbinds them again.

use dom_listeners::ListenerSet;
use leptos::prelude::Owner;
use any_spawner::Executor;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::PageConfig;
use crate::store::create_page_store;
use crate::{cart, dom, logging, menu, rating, share};

/// Live bindings of an initialized page
#[wasm_bindgen]
pub struct PageHandle {
    listeners: Rc<RefCell<ListenerSet>>,
    owner: Owner,
}

#[wasm_bindgen]
impl PageHandle {
    /// Remove listeners and globals, then dispose the reactive state
    pub fn teardown(self) {
        let PageHandle { listeners, owner } = self;
        listeners.borrow_mut().clear();
        drop(owner);
        log::info!("[INIT] storefront page torn down");
    }

    /// Keep the bindings for the rest of the page lifetime
    #[wasm_bindgen(js_name = keepAlive)]
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

fn mount(document: &Document, config: &Rc<PageConfig>, owner: &Owner, listeners: &mut ListenerSet) -> Result<(), JsValue> {
    owner.with(|| {
        let store = create_page_store();
        menu::bind(document, config, listeners)?;
        cart::bind(document, config, store, listeners)?;
        rating::bind(document, config, store, listeners)?;
        Ok::<(), JsValue>(())
    })?;
    log::info!("[INIT] storefront page ready ({} bindings)", listeners.len());
    Ok(())
}

fn install_globals(config: &Rc<PageConfig>, listeners: &mut ListenerSet) -> Result<(), JsValue> {
    let cfg = Rc::clone(config);
    listeners.install_global("toggleMobileMenu", move || {
        if let Some(document) = dom::document() {
            menu::toggle(&document, &cfg);
        }
    })?;
    let cfg = Rc::clone(config);
    listeners.install_global("shareProduct", move || share::share_product(Rc::clone(&cfg)))?;
    Ok(())
}

/// Wire up the menu, cart buttons, share action and star rating.
///
/// Binding waits for `DOMContentLoaded` when the document is still loading.
/// `window.toggleMobileMenu` and `window.shareProduct` are installed so inline
/// `onclick` attributes in the templates keep working.
#[wasm_bindgen(js_name = initStorefront)]
pub fn init() -> Result<PageHandle, JsValue> {
    let config = Rc::new(PageConfig::from_window());
    logging::init(&config.log_level);
    // Already set when the host page runs another Leptos app
    let _ = Executor::init_wasm_bindgen();

    let document = dom::document().ok_or_else(|| JsValue::from_str("storefront-ui needs a browser document"))?;
    let owner = Owner::new();
    let listeners = Rc::new(RefCell::new(ListenerSet::new()));

    install_globals(&config, &mut listeners.borrow_mut())?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let own = owner.clone();
        let set = Rc::clone(&listeners);
        listeners.borrow_mut().bind(&document, "DOMContentLoaded", move |_| {
            if let Err(e) = mount(&doc, &config, &own, &mut set.borrow_mut()) {
                log::error!("[INIT] {}", crate::error::js_error_message(&e));
            }
        })?;
        log::debug!("[INIT] waiting for DOMContentLoaded");
    } else {
        mount(&document, &config, &owner, &mut listeners.borrow_mut())?;
    }

    Ok(PageHandle {
        listeners,
        owner,
    })
}

/// Flip the mobile menu, for callers outside `init`
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() -> bool {
    let config = PageConfig::from_window();
    dom::document()
        .and_then(|document| menu::toggle(&document, &config))
        .unwrap_or(false)
}

/// Share the current product, for callers outside `init`
#[wasm_bindgen(js_name = shareProduct)]
pub fn share_product() {
    share::share_product(Rc::new(PageConfig::from_window()));
}
