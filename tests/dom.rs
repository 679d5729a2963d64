//! Browser tests for the DOM-facing code.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use storefront_ui::config::{PageConfig, StarStyles};
use storefront_ui::{cart, menu, rating};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(html);
    document
}

fn by_id(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).unwrap()
}

fn click(document: &Document, id: &str) {
    by_id(document, id).dyn_into::<HtmlElement>().unwrap().click();
}

fn is_hidden(document: &Document) -> bool {
    by_id(document, "mobile-menu").class_list().contains("hidden")
}

fn window_has(name: &str) -> bool {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .unwrap()
        .is_function()
}

const MENU_PAGE: &str = r#"
    <button id="trigger" data-menu-toggle><span id="icon">menu</span></button>
    <nav id="mobile-menu" class="hidden"><a id="link">Produits</a></nav>
    <p id="outside">Bienvenue</p>
"#;

#[wasm_bindgen_test]
fn counter_is_overwritten_with_server_count() {
    let document = fixture(r#"<span id="cart-count">12</span>"#);
    cart::render_count(&document, "cart-count", 7);
    assert_eq!(by_id(&document, "cart-count").text_content().as_deref(), Some("7"));

    cart::render_count(&document, "cart-count", 7);
    assert_eq!(by_id(&document, "cart-count").text_content().as_deref(), Some("7"));
}

#[wasm_bindgen_test]
fn missing_counter_is_ignored() {
    let document = fixture("<p>no counter</p>");
    cart::render_count(&document, "cart-count", 3);
    assert!(document.get_element_by_id("cart-count").is_none());
}

#[wasm_bindgen_test]
fn classify_trigger_menu_and_outside() {
    let document = fixture(MENU_PAGE);
    let menu_el = by_id(&document, "mobile-menu");
    let selector = PageConfig::default().selectors.menu_trigger;

    let target = |id: &str| menu::classify(&menu_el, &by_id(&document, id), &selector);
    assert_eq!(target("trigger"), menu::ClickTarget::Trigger);
    assert_eq!(target("icon"), menu::ClickTarget::Trigger);
    assert_eq!(target("link"), menu::ClickTarget::Menu);
    assert_eq!(target("mobile-menu"), menu::ClickTarget::Menu);
    assert_eq!(target("outside"), menu::ClickTarget::Outside);
}

#[wasm_bindgen_test]
fn toggle_without_menu_is_tolerated() {
    let document = fixture("<p>no menu</p>");
    assert_eq!(menu::toggle(&document, &PageConfig::default()), None);
}

#[wasm_bindgen_test]
fn labels_follow_three_then_one() {
    let document = fixture(
        r#"
        <input type="radio" name="rating" id="rating-1" value="1">
        <label for="rating-1">1</label>
        <label for="rating-2">2</label>
        <label for="rating-3">3</label>
        <label for="rating-4">4</label>
        <label for="rating-5">5</label>
        "#,
    );
    let labels: Vec<Element> = (1..=5)
        .map(|n| {
            let selector = format!(r#"label[for="rating-{}"]"#, n);
            document.query_selector(&selector).unwrap().unwrap()
        })
        .collect();
    let styles = StarStyles::default();

    rating::render(&labels, &styles, 3);
    rating::render(&labels, &styles, 1);

    for (i, label) in labels.iter().enumerate() {
        let classes = label.class_list();
        let selected = i == 0;
        assert_eq!(classes.contains("text-yellow-500"), selected, "label {}", i + 1);
        assert_eq!(classes.contains("text-stone-300"), !selected, "label {}", i + 1);
    }
}

#[wasm_bindgen_test]
fn init_binds_menu_and_teardown_unbinds() {
    let document = fixture(MENU_PAGE);
    let handle = storefront_ui::init().unwrap();
    assert!(window_has("toggleMobileMenu"));
    assert!(window_has("shareProduct"));

    // Trigger clicks flip visibility
    click(&document, "trigger");
    assert!(!is_hidden(&document));
    click(&document, "link");
    assert!(!is_hidden(&document));
    click(&document, "trigger");
    assert!(is_hidden(&document));

    // Outside click closes
    click(&document, "trigger");
    click(&document, "outside");
    assert!(is_hidden(&document));

    handle.teardown();
    assert!(!window_has("toggleMobileMenu"));
    assert!(!window_has("shareProduct"));

    // No listeners left
    click(&document, "trigger");
    assert!(is_hidden(&document));
    by_id(&document, "mobile-menu").class_list().remove_1("hidden").unwrap();
    click(&document, "outside");
    assert!(!is_hidden(&document));
}

#[wasm_bindgen_test]
fn invalid_classes_are_logged_not_thrown() {
    let document = fixture(r#"<label for="rating-1">1</label>"#);
    let label = query(&document, r#"label[for="rating-1"]"#);
    let styles = StarStyles {
        selected: "text yellow".to_string(),
        unselected: String::new(),
    };

    rating::render(&[label.clone()], &styles, 1);
    assert_eq!(label.class_list().length(), 0);

    let document = fixture(MENU_PAGE);
    let config = PageConfig {
        menu_hidden_class: String::new(),
        ..PageConfig::default()
    };
    menu::toggle(&document, &config);
    assert!(is_hidden(&document));
}

fn query(document: &Document, selector: &str) -> Element {
    document.query_selector(selector).unwrap().unwrap()
}
