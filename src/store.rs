//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use smart_menu_core::domain::UserSession;
use smart_menu_core::i18n::Language;

use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in restaurant user, mirrored from local storage
    pub session: Option<UserSession>,
    /// UI language
    pub language: Language,
    /// Pending orders shown on the sidebar badge
    pub pending_orders: u64,
}

impl AppState {
    /// State restored from local storage at startup
    pub fn restore() -> Self {
        Self {
            session: storage::load_session(),
            language: storage::load_language(),
            pending_orders: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_session(store: &AppStore) -> Option<UserSession> {
    store.session().get()
}

pub fn store_is_logged_in(store: &AppStore) -> bool {
    store.session().with(|s| s.is_some())
}

/// Cache a fresh login in memory and in local storage
pub fn store_set_session(store: &AppStore, session: UserSession) {
    storage::save_session(&session);
    store.session().set(Some(session));
}

pub fn store_clear_session(store: &AppStore) {
    storage::clear_session();
    store.session().set(None);
    store.pending_orders().set(0);
}

pub fn store_language(store: &AppStore) -> Language {
    store.language().get()
}

pub fn store_set_language(store: &AppStore, language: Language) {
    storage::save_language(language);
    store.language().set(language);
}

pub fn store_pending_orders(store: &AppStore) -> u64 {
    store.pending_orders().get()
}

pub fn store_set_pending_orders(store: &AppStore, count: u64) {
    store.pending_orders().set(count);
}
