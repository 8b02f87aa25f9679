//! Reactive translation helper for views.

use smart_menu_core::i18n::{translate, Language};

use crate::store::{store_language, use_app_store, AppStore};

#[derive(Clone, Copy)]
pub struct I18n {
    store: AppStore,
}

impl I18n {
    /// Translation of `key` in the current language. Tracks the language, so
    /// closures calling this re-render when it changes.
    pub fn t(&self, key: &str) -> String {
        translate(store_language(&self.store), key).to_string()
    }

    pub fn language(&self) -> Language {
        store_language(&self.store)
    }
}

pub fn use_i18n() -> I18n {
    I18n { store: use_app_store() }
}
