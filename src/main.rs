//! Storefront UI Entry Point

fn main() {
    console_error_panic_hook::set_once();
    match storefront_ui::init() {
        Ok(handle) => handle.keep_alive(),
        Err(e) => web_sys::console::error_1(&e),
    }
}
