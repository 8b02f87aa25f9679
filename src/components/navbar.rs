//! Navbar Component
//!
//! Top bar of the admin pages: menu toggle, brand, language switcher,
//! greeting and logout.

use leptos::prelude::*;
use smart_menu_core::i18n::Language;

use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::router::Route;
use crate::store::{store_clear_session, store_session, store_set_language, use_app_store};

/// Language `<select>`, shared with the settings page
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let store = use_app_store();
    let i18n = use_i18n();

    view! {
        <select
            class="language-select"
            aria-label=move || i18n.t("language")
            prop:value=move || i18n.language().code()
            on:change=move |ev| {
                if let Some(language) = Language::from_code(&event_target_value(&ev)) {
                    web_sys::console::log_1(&format!("[I18N] Language -> {}", language.code()).into());
                    store_set_language(&store, language);
                }
            }
        >
            {Language::ALL
                .into_iter()
                .map(|l| view! { <option value=l.code()>{format!("{} {}", l.flag(), l.name())}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let i18n = use_i18n();

    view! {
        <header class="navbar">
            <button class="menu-toggle" aria-label=move || i18n.t("toggleMenu") on:click=move |_| ctx.toggle_sidebar()>
                <i class="fas fa-bars"></i>
            </button>
            <span class="navbar-brand">{move || i18n.t("appName")}</span>
            <div class="navbar-right">
                <LanguageSelect />
                <span class="navbar-welcome">{move || {
                    let name = store_session(&store)
                        .map(|s| s.display_name().to_string())
                        .unwrap_or_else(|| "Admin".to_string());
                    format!("{}, {}", i18n.t("welcome"), name)
                }}</span>
                <button
                    class="btn btn-secondary btn-small"
                    on:click=move |_| {
                        store_clear_session(&store);
                        ctx.navigate(Route::Login);
                    }
                >
                    {move || i18n.t("logout")}
                </button>
            </div>
        </header>
    }
}
