//! Mobile Menu
//!
//! Shows and hides the mobile navigation panel, and closes it when a click
//! lands outside both the panel and its trigger.

use dom_listeners::ListenerSet;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, Node};

use crate::config::PageConfig;
use crate::dom;

/// Where a document click landed, relative to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Menu,
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    visible: bool,
}

impl MenuState {
    pub fn from_hidden(hidden: bool) -> Self {
        Self { visible: !hidden }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Document-level click; only outside clicks change the state
    pub fn on_document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.visible = false;
        }
    }
}

fn menu_element(document: &Document, config: &PageConfig) -> Option<Element> {
    let menu = document.get_element_by_id(&config.selectors.menu_id);
    if menu.is_none() {
        log::debug!("[MENU] #{} not on this page", config.selectors.menu_id);
    }
    menu
}

fn read_state(menu: &Element, config: &PageConfig) -> MenuState {
    MenuState::from_hidden(menu.class_list().contains(&config.menu_hidden_class))
}

fn write_state(menu: &Element, config: &PageConfig, state: MenuState) {
    dom::set_class(menu, &config.menu_hidden_class, !state.is_visible());
}

/// Flip the menu visibility. Returns the new visibility, None without a menu.
pub fn toggle(document: &Document, config: &PageConfig) -> Option<bool> {
    let menu = menu_element(document, config)?;
    let mut state = read_state(&menu, config);
    state.toggle();
    write_state(&menu, config, state);
    log::debug!("[MENU] visible={}", state.is_visible());
    Some(state.is_visible())
}

/// Decide where a click landed; the trigger wins over the menu
pub fn click_target(on_trigger: bool, inside_menu: bool) -> ClickTarget {
    if on_trigger {
        ClickTarget::Trigger
    } else if inside_menu {
        ClickTarget::Menu
    } else {
        ClickTarget::Outside
    }
}

/// Classify a click target against the menu and trigger selector
pub fn classify(menu: &Element, target: &Node, trigger_selector: &str) -> ClickTarget {
    let on_trigger = target
        .dyn_ref::<Element>()
        .and_then(|el| el.closest(trigger_selector).ok().flatten())
        .is_some();
    click_target(on_trigger, menu.contains(Some(target)))
}

/// Hide the menu if the click landed outside it and its trigger
pub fn dismiss_on_click(document: &Document, config: &PageConfig, event: &Event) {
    let Some(menu) = menu_element(document, config) else { return };
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return;
    };
    let mut state = read_state(&menu, config);
    if !state.is_visible() {
        return;
    }
    state.on_document_click(classify(&menu, &target, &config.selectors.menu_trigger));
    if !state.is_visible() {
        write_state(&menu, config, state);
        log::debug!("[MENU] closed by outside click");
    }
}

/// Bind the outside-click listener and any `data-menu-toggle` triggers
pub fn bind(document: &Document, config: &Rc<PageConfig>, listeners: &mut ListenerSet) -> Result<(), JsValue> {
    let triggers = dom::query_all(document, &config.selectors.menu_toggle);
    for trigger in &triggers {
        let doc = document.clone();
        let cfg = Rc::clone(config);
        listeners.bind(trigger, "click", move |_| {
            toggle(&doc, &cfg);
        })?;
    }

    let doc = document.clone();
    let cfg = Rc::clone(config);
    listeners.bind(document, "click", move |ev| dismiss_on_click(&doc, &cfg, &ev))?;

    log::debug!("[MENU] bound {} toggle controls", triggers.len());
    Ok(())
}
