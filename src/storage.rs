//! Local Storage
//!
//! Typed access to every value the app keeps in `window.localStorage`.
//! Storage failures (private mode, quota) are logged and otherwise ignored:
//! nothing here is worth interrupting the user for.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

use smart_menu_core::cart::Cart;
use smart_menu_core::device::{generate_device_id, is_device_id};
use smart_menu_core::domain::{RestaurantSettings, SystemPreferences, UserSession};
use smart_menu_core::i18n::Language;

const DEVICE_ID_KEY: &str = "deviceId";
const LANGUAGE_KEY: &str = "language";
const RESTAURANT_SETTINGS_KEY: &str = "restaurant_settings";
const SYSTEM_PREFERENCES_KEY: &str = "system_preferences";
const API_BASE_URL_KEY: &str = "api_base_url";

const TOKEN_KEY: &str = "jwt_token";
const USER_ID_KEY: &str = "user_id";
const USERNAME_KEY: &str = "username";
const EMAIL_KEY: &str = "email";
const ROLE_KEY: &str = "role";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    let Some(storage) = local_storage() else { return };
    if storage.set_item(key, value).is_err() {
        web_sys::console::warn_1(&format!("[STORAGE] Failed to write {}", key).into());
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORAGE] Ignoring malformed {}: {}", key, e).into());
            None
        }
    }
}

fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set(key, &raw),
        Err(e) => web_sys::console::error_1(&format!("[STORAGE] Failed to encode {}: {}", key, e).into()),
    }
}

// ========================
// Session
// ========================

/// Cached login, present only when a token is stored
pub fn load_session() -> Option<UserSession> {
    let token = get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    Some(UserSession {
        token,
        id: get(USER_ID_KEY).unwrap_or_default(),
        username: get(USERNAME_KEY).unwrap_or_default(),
        email: get(EMAIL_KEY).unwrap_or_default(),
        role: get(ROLE_KEY).unwrap_or_default(),
    })
}

pub fn save_session(session: &UserSession) {
    set(TOKEN_KEY, &session.token);
    set(USER_ID_KEY, &session.id);
    set(USERNAME_KEY, &session.username);
    set(EMAIL_KEY, &session.email);
    set(ROLE_KEY, &session.role);
}

/// Removes the auth keys only. Device id, carts and language survive logout.
pub fn clear_session() {
    for key in [TOKEN_KEY, USER_ID_KEY, USERNAME_KEY, EMAIL_KEY, ROLE_KEY] {
        remove(key);
    }
}

pub fn token() -> Option<String> {
    get(TOKEN_KEY).filter(|t| !t.is_empty())
}

// ========================
// Customer Device
// ========================

/// Stored device id, generating and persisting one on first use
pub fn device_id() -> String {
    if let Some(id) = get(DEVICE_ID_KEY).filter(|id| is_device_id(id)) {
        return id;
    }
    let id = generate_device_id(js_sys::Date::now() as u64, js_sys::Math::random());
    web_sys::console::log_1(&format!("[STORAGE] New device id {}", id).into());
    set(DEVICE_ID_KEY, &id);
    id
}

fn cart_key(table_id: &str) -> String {
    format!("cart-{}", table_id)
}

pub fn load_cart(table_id: &str) -> Cart {
    get_json(&cart_key(table_id)).unwrap_or_default()
}

pub fn save_cart(table_id: &str, cart: &Cart) {
    set_json(&cart_key(table_id), cart);
}

pub fn clear_cart(table_id: &str) {
    remove(&cart_key(table_id));
}

// ========================
// Preferences
// ========================

pub fn load_language() -> Language {
    get(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(language: Language) {
    set(LANGUAGE_KEY, language.code());
}

pub fn load_restaurant_settings() -> RestaurantSettings {
    get_json(RESTAURANT_SETTINGS_KEY).unwrap_or_default()
}

pub fn save_restaurant_settings(settings: &RestaurantSettings) {
    set_json(RESTAURANT_SETTINGS_KEY, settings);
}

pub fn load_system_preferences() -> SystemPreferences {
    get_json(SYSTEM_PREFERENCES_KEY).unwrap_or_default()
}

pub fn save_system_preferences(preferences: &SystemPreferences) {
    set_json(SYSTEM_PREFERENCES_KEY, preferences);
}

pub fn api_base_url_override() -> Option<String> {
    get(API_BASE_URL_KEY)
}

/// Empty input removes the override
pub fn save_api_base_url_override(raw: &str) {
    match smart_menu_core::config::normalize_base_url(raw) {
        Some(url) => set(API_BASE_URL_KEY, &url),
        None => remove(API_BASE_URL_KEY),
    }
}
