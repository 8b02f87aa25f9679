//! Settings Page
//!
//! Profile, restaurant and system preference tabs. Everything is kept in
//! local storage; the backend only serves the connection check.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::config::DEFAULT_API_BASE_URL;
use smart_menu_core::domain::{RestaurantSettings, SystemPreferences, UserSession};
use smart_menu_core::i18n::Language;
use smart_menu_core::validation::validate_password_change;

use crate::api;
use crate::components::{AdminLayout, Flash, FlashBanner};
use crate::i18n::{use_i18n, I18n};
use crate::storage;
use crate::store::{store_session, store_set_language, use_app_store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Restaurant,
    Preferences,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Profile, Tab::Restaurant, Tab::Preferences];

    fn label_key(&self) -> &'static str {
        match self {
            Tab::Profile => "profile",
            Tab::Restaurant => "restaurant",
            Tab::Preferences => "preferences",
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let flash = Flash::new();
    let (tab, set_tab) = signal(Tab::Profile);

    view! {
        <AdminLayout title_key="settings" subtitle_key="settingsSubtitle">
            <FlashBanner flash=flash />
            <div class="tabs">
                {Tab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(t)
                    >
                        {move || i18n.t(t.label_key())}
                    </button>
                }).collect_view()}
            </div>
            {move || match tab.get() {
                Tab::Profile => view! { <ProfileTab flash=flash /> }.into_any(),
                Tab::Restaurant => view! { <RestaurantTab flash=flash /> }.into_any(),
                Tab::Preferences => view! { <PreferencesTab flash=flash /> }.into_any(),
            }}
        </AdminLayout>
    }
}

// ========================
// Profile
// ========================

#[component]
fn ProfileTab(flash: Flash) -> impl IntoView {
    let i18n = use_i18n();
    let store = use_app_store();

    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_password_change(&new_password.get_untracked(), &confirm.get_untracked()) {
            Ok(check) => {
                web_sys::console::log_1(&format!("[SETTINGS] Password check: {:?}", check).into());
                set_current.set(String::new());
                set_new_password.set(String::new());
                set_confirm.set(String::new());
                flash.success(i18n.t(check.notice_key()));
            }
            Err(e) => flash.error(i18n.t(e.key())),
        }
    };

    let session_field = move |label: &'static str, read: fn(&UserSession) -> String| {
        view! {
            <div class="form-group">
                <label>{move || i18n.t(label)}</label>
                <input type="text" readonly=true prop:value=move || store_session(&store).map(|s| read(&s)).unwrap_or_default() />
            </div>
        }
    };

    view! {
        <form class="settings-form" on:submit=on_save>
            {session_field("username", |s| s.username.clone())}
            {session_field("email", |s| s.email.clone())}
            {session_field("role", |s| s.display_role())}
            <div class="form-group">
                <label>{move || i18n.t("currentPassword")}</label>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=current
                    on:input=move |ev| set_current.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>{move || i18n.t("newPassword")}</label>
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=new_password
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>{move || i18n.t("confirmPassword")}</label>
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=confirm
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary">{move || i18n.t("checkPassword")}</button>
        </form>
    }
}

// ========================
// Restaurant
// ========================

fn text_input<T: Send + Sync + 'static>(
    i18n: I18n,
    state: RwSignal<T>,
    label: &'static str,
    kind: &'static str,
    read: fn(&T) -> String,
    write: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{move || i18n.t(label)}</label>
            <input
                type=kind
                prop:value=move || state.with(read)
                on:input=move |ev| state.update(|s| write(s, event_target_value(&ev)))
            />
        </div>
    }
}

fn checkbox<T: Send + Sync + 'static>(
    i18n: I18n,
    state: RwSignal<T>,
    label: &'static str,
    read: fn(&T) -> bool,
    write: fn(&mut T, bool),
) -> impl IntoView {
    view! {
        <label class="checkbox">
            <input
                type="checkbox"
                prop:checked=move || state.with(read)
                on:change=move |ev| state.update(|s| write(s, event_target_checked(&ev)))
            />
            {move || i18n.t(label)}
        </label>
    }
}

#[component]
fn RestaurantTab(flash: Flash) -> impl IntoView {
    let i18n = use_i18n();
    let settings = RwSignal::new(storage::load_restaurant_settings());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = settings.get_untracked();
        match current.validate() {
            Ok(()) => {
                storage::save_restaurant_settings(&current);
                web_sys::console::log_1(&"[SETTINGS] Restaurant settings saved".into());
                flash.success(i18n.t("settingsSaved"));
            }
            Err(e) => flash.error(i18n.t(e.key())),
        }
    };

    let parse_percent = |raw: String| raw.trim().parse::<f64>().unwrap_or(f64::NAN);

    view! {
        <form class="settings-form" on:submit=on_save>
            {text_input(i18n, settings, "currency", "text", |s: &RestaurantSettings| s.currency.clone(), |s, v| s.currency = v)}
            {text_input(i18n, settings, "timezone", "text", |s: &RestaurantSettings| s.timezone.clone(), |s, v| s.timezone = v)}
            <div class="form-row">
                {text_input(i18n, settings, "openingTime", "time", |s: &RestaurantSettings| s.opening_time.clone(), |s, v| s.opening_time = v)}
                {text_input(i18n, settings, "closingTime", "time", |s: &RestaurantSettings| s.closing_time.clone(), |s, v| s.closing_time = v)}
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>{move || i18n.t("serviceCharge")}</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="any"
                        prop:value=move || settings.with(|s| s.service_charge.to_string())
                        on:input=move |ev| settings.update(|s| s.service_charge = parse_percent(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label>{move || i18n.t("vatRate")}</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="any"
                        prop:value=move || settings.with(|s| s.vat_rate.to_string())
                        on:input=move |ev| settings.update(|s| s.vat_rate = parse_percent(event_target_value(&ev)))
                    />
                </div>
            </div>
            {text_input(i18n, settings, "receiptFooter", "text", |s: &RestaurantSettings| s.receipt_footer.clone(), |s, v| s.receipt_footer = v)}
            {checkbox(i18n, settings, "allowOnlineOrders", |s: &RestaurantSettings| s.allow_online_orders, |s, v| s.allow_online_orders = v)}
            {checkbox(i18n, settings, "autoAcceptOrders", |s: &RestaurantSettings| s.auto_accept_orders, |s, v| s.auto_accept_orders = v)}
            <button type="submit" class="btn btn-primary">{move || i18n.t("checkPassword")}</button>
        </form>
    }
}

// ========================
// Preferences
// ========================

#[component]
fn PreferencesTab(flash: Flash) -> impl IntoView {
    let i18n = use_i18n();
    let store = use_app_store();
    let preferences = RwSignal::new(SystemPreferences {
        language: i18n.language().code().to_string(),
        ..storage::load_system_preferences()
    });
    let (api_url, set_api_url) = signal(storage::api_base_url_override().unwrap_or_default());
    let (checking, set_checking) = signal(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = preferences.get_untracked();
        storage::save_system_preferences(&current);
        storage::save_api_base_url_override(&api_url.get_untracked());
        if let Some(language) = Language::from_code(&current.language) {
            store_set_language(&store, language);
        }
        web_sys::console::log_1(&format!("[SETTINGS] Backend: {}", api::base_url()).into());
        flash.success(i18n.t("settingsSaved"));
    };

    let on_check = move |_: leptos::ev::MouseEvent| {
        storage::save_api_base_url_override(&api_url.get_untracked());
        set_checking.set(true);
        spawn_local(async move {
            match api::health().await {
                Ok(health) => flash.success(format!("{} ({})", i18n.t("connectionOk"), health.status)),
                Err(e) => flash.error(format!("{}: {}", i18n.t("connectionFailed"), e)),
            }
            set_checking.set(false);
        });
    };

    view! {
        <form class="settings-form" on:submit=on_save>
            <div class="form-group">
                <label>{move || i18n.t("language")}</label>
                <select
                    prop:value=move || preferences.with(|p| p.language.clone())
                    on:change=move |ev| preferences.update(|p| p.language = event_target_value(&ev))
                >
                    {Language::ALL
                        .into_iter()
                        .map(|l| view! { <option value=l.code()>{format!("{} {}", l.flag(), l.name())}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>{move || i18n.t("dateFormat")}</label>
                    <select
                        prop:value=move || preferences.with(|p| p.date_format.clone())
                        on:change=move |ev| preferences.update(|p| p.date_format = event_target_value(&ev))
                    >
                        {["DD/MM/YYYY", "MM/DD/YYYY", "YYYY-MM-DD"]
                            .into_iter()
                            .map(|f| view! { <option value=f>{f}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>{move || i18n.t("timeFormat")}</label>
                    <select
                        prop:value=move || preferences.with(|p| p.time_format.clone())
                        on:change=move |ev| preferences.update(|p| p.time_format = event_target_value(&ev))
                    >
                        <option value="24h">"24h"</option>
                        <option value="12h">"12h"</option>
                    </select>
                </div>
            </div>
            <fieldset>
                <legend>{move || i18n.t("notifications")}</legend>
                {checkbox(i18n, preferences, "emailNotifications", |p: &SystemPreferences| p.email_notifications, |p, v| p.email_notifications = v)}
                {checkbox(i18n, preferences, "smsNotifications", |p: &SystemPreferences| p.sms_notifications, |p, v| p.sms_notifications = v)}
                {checkbox(i18n, preferences, "orderNotifications", |p: &SystemPreferences| p.order_notifications, |p, v| p.order_notifications = v)}
                {checkbox(i18n, preferences, "feedbackNotifications", |p: &SystemPreferences| p.feedback_notifications, |p, v| p.feedback_notifications = v)}
            </fieldset>
            <div class="form-group">
                <label>{move || i18n.t("apiBaseUrl")}</label>
                <div class="input-with-button">
                    <input
                        type="url"
                        placeholder=DEFAULT_API_BASE_URL
                        prop:value=api_url
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn btn-secondary" disabled=checking on:click=on_check>
                        {move || i18n.t("testConnection")}
                    </button>
                </div>
                <small class="muted">{move || i18n.t("apiBaseUrlHint")}</small>
            </div>
            <button type="submit" class="btn btn-primary">{move || i18n.t("checkPassword")}</button>
        </form>
    }
}
