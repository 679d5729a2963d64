//! Page Configuration
//!
//! Element ids, selectors, style classes and notice texts used by the widgets.
//! Defaults match the storefront templates. A page can override any field
//! through a `window.storefrontConfig` object.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the optional page-level override object
pub const CONFIG_GLOBAL: &str = "storefrontConfig";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub stars: StarStyles,
    pub messages: Messages,
    /// Class that hides the mobile menu
    pub menu_hidden_class: String,
    /// Add-to-cart endpoint, `{id}` is replaced by the product id
    pub cart_endpoint: String,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            stars: StarStyles::default(),
            messages: Messages::default(),
            menu_hidden_class: "hidden".to_string(),
            cart_endpoint: "/cart/add/{id}/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_id: String,
    /// Elements counted as the menu trigger when checking outside clicks
    pub menu_trigger: String,
    /// Elements that get a click listener toggling the menu
    pub menu_toggle: String,
    pub add_to_cart: String,
    pub product_id_attr: String,
    pub cart_count_id: String,
    pub rating_checked: String,
    pub rating_labels: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_id: "mobile-menu".to_string(),
            menu_trigger: r#"[onclick="toggleMobileMenu()"], [data-menu-toggle]"#.to_string(),
            menu_toggle: "[data-menu-toggle]".to_string(),
            add_to_cart: ".add-to-cart-btn".to_string(),
            product_id_attr: "data-product-id".to_string(),
            cart_count_id: "cart-count".to_string(),
            rating_checked: r#"input[name="rating"]:checked"#.to_string(),
            rating_labels: r#"label[for^="rating-"]"#.to_string(),
        }
    }
}

/// Classes applied to rating labels
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarStyles {
    pub selected: String,
    pub unselected: String,
}

impl Default for StarStyles {
    fn default() -> Self {
        Self {
            selected: "text-yellow-500".to_string(),
            unselected: "text-stone-300".to_string(),
        }
    }
}

/// User-facing notice texts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub added: String,
    pub add_failed: String,
    pub network_error: String,
    pub link_copied: String,
    pub copy_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            added: "✅ Produit ajouté au panier !".to_string(),
            add_failed: "Erreur lors de l’ajout au panier.".to_string(),
            network_error: "Erreur réseau ou serveur.".to_string(),
            link_copied: "Lien copié dans le presse-papier !".to_string(),
            copy_failed: "Impossible de copier le lien.".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override, missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse page config: {}", e))
    }

    /// Read `window.storefrontConfig`, falling back to defaults
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[INIT] ignoring invalid {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    /// Build the add-to-cart URL for a product
    pub fn cart_url(&self, product_id: &str) -> String {
        crate::cart::cart_add_url(&self.cart_endpoint, product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_templates() {
        let config = PageConfig::default();
        assert_eq!(config.selectors.menu_id, "mobile-menu");
        assert_eq!(config.selectors.cart_count_id, "cart-count");
        assert_eq!(config.selectors.product_id_attr, "data-product-id");
        assert_eq!(config.stars.selected, "text-yellow-500");
        assert_eq!(config.stars.unselected, "text-stone-300");
        assert_eq!(config.cart_url("42"), "/cart/add/42/");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(
            r#"{"cart_endpoint": "/panier/ajouter/{id}/", "messages": {"added": "Added!"}}"#,
        )
        .unwrap();
        assert_eq!(config.cart_endpoint, "/panier/ajouter/{id}/");
        assert_eq!(config.messages.added, "Added!");
        assert_eq!(config.messages.network_error, Messages::default().network_error);
        assert_eq!(config.selectors, Selectors::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(PageConfig::from_json("{not json").is_err());
        assert!(PageConfig::from_json(r#"{"stars": 3}"#).is_err());
    }
}
