//! DOM Listener Utilities
//!
//! Event listeners and window globals bound from Rust closures.
//! Every binding keeps its closure alive and undoes itself on drop,
//! so a page can be wired up and torn down again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// A single event listener attached to a DOM target
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target` for `event`
    pub fn bind<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A function installed as a property of `window`
///
/// Lets inline `onclick="name()"` attributes in server templates reach Rust code.
pub struct GlobalFn {
    name: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl GlobalFn {
    pub fn install<F>(name: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut()>::new(handler);
        js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref())?;
        Ok(Self { name, closure })
    }
}

impl Drop for GlobalFn {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else { return };
        let key = JsValue::from_str(self.name);
        // Only remove the property if it still points at our closure
        let current = js_sys::Reflect::get(&window, &key).unwrap_or(JsValue::UNDEFINED);
        if current == *self.closure.as_ref() {
            let _ = js_sys::Reflect::delete_property(&window, &key);
        }
    }
}

/// Bindings that are removed together
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
    globals: Vec<GlobalFn>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a listener and keep it in the set
    pub fn bind<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::bind(target, event, handler)?);
        Ok(())
    }

    /// Install a window global and keep it in the set
    pub fn install_global<F>(&mut self, name: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        self.globals.push(GlobalFn::install(name, handler)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len() + self.globals.len()
    }

    /// Remove every binding in the set
    pub fn clear(&mut self) {
        let count = self.len();
        self.listeners.clear();
        self.globals.clear();
        log::debug!("[LISTENERS] removed {} bindings", count);
    }
}
