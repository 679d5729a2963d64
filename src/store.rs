//! Page State Store
//!
//! Uses Leptos reactive_stores for the state mirrored into the DOM.

use leptos::prelude::*;
use reactive_stores::Store;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Last cart count reported by the server, None until the first add
    pub cart_count: Option<u32>,
    /// Selected star rating, 0 = no selection
    pub rating: u32,
}

pub type PageStore = Store<PageState>;

pub fn create_page_store() -> PageStore {
    Store::new(PageState::default())
}

// ========================
// Store Helper Functions
// ========================

// A store disposed by teardown reads as empty and ignores writes, so a request
// still in flight at teardown settles without touching it.

/// Tracked read of the cart count
pub fn store_cart_count(store: &PageStore) -> Option<u32> {
    store.cart_count().try_get().flatten()
}

/// Replace the cart count with the server value. False once disposed.
pub fn store_set_cart_count(store: &PageStore, count: u32) -> bool {
    match store.cart_count().try_write() {
        Some(mut current) => {
            *current = Some(count);
            true
        }
        None => false,
    }
}

/// Tracked read of the rating
pub fn store_rating(store: &PageStore) -> u32 {
    store.rating().try_get().unwrap_or(0)
}

pub fn store_set_rating(store: &PageStore, rating: u32) -> bool {
    match store.rating().try_write() {
        Some(mut current) => {
            *current = rating;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_count_is_overwritten_not_incremented() {
        let owner = Owner::new();
        owner.with(|| {
            let store = create_page_store();
            assert_eq!(store_cart_count(&store), None);
            assert!(store_set_cart_count(&store, 3));
            assert!(store_set_cart_count(&store, 7));
            assert_eq!(store_cart_count(&store), Some(7));
            assert!(store_set_cart_count(&store, 2));
            assert_eq!(store_cart_count(&store), Some(2));
        });
    }

    #[test]
    fn test_rating_follows_last_write() {
        let owner = Owner::new();
        owner.with(|| {
            let store = create_page_store();
            assert_eq!(store_rating(&store), 0);
            store_set_rating(&store, 3);
            store_set_rating(&store, 1);
            assert_eq!(store_rating(&store), 1);
        });
    }

    #[test]
    fn test_writes_after_owner_dropped_are_ignored() {
        let owner = Owner::new();
        let store = owner.with(create_page_store);
        assert!(store_set_cart_count(&store, 4));
        drop(owner);

        assert!(!store_set_cart_count(&store, 7));
        assert!(!store_set_rating(&store, 5));
        assert_eq!(store_cart_count(&store), None);
        assert_eq!(store_rating(&store), 0);
    }
}
