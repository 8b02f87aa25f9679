//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use smart_menu_core::config::LOGIN_REDIRECT_MS;
use smart_menu_core::domain::UserSession;
use smart_menu_core::validation::validate_login;

use crate::api;
use crate::components::{Flash, FlashBanner, LanguageSelect};
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::poll::Lifetime;
use crate::router::Route;
use crate::store::{store_is_logged_in, store_set_session, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let i18n = use_i18n();
    let flash = Flash::new();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let lifetime = Lifetime::current();

    // Already signed in: skip the form
    Effect::new(move |_| {
        if store_is_logged_in(&store) && !submitting.get_untracked() {
            ctx.redirect(Route::Dashboard);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Err(e) = validate_login(&user, &pass) {
            flash.error(i18n.t(e.key()));
            return;
        }

        set_submitting.set(true);
        let lifetime = lifetime.clone();
        spawn_local(async move {
            match api::login(user.trim(), &pass).await {
                Ok(response) => {
                    web_sys::console::log_1(&format!("[AUTH] Logged in as {}", response.username).into());
                    store_set_session(&store, UserSession::from(response));
                    flash.success(i18n.t("loginSuccess"));
                    lifetime.after(LOGIN_REDIRECT_MS, move || ctx.navigate(Route::Dashboard));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[AUTH] Login failed: {}", e).into());
                    flash.error(e.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>{move || i18n.t("appName")}</h1>
                    <p>{move || i18n.t("loginSubtitle")}</p>
                    <LanguageSelect />
                </div>
                <FlashBanner flash=flash />
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">{move || i18n.t("username")}</label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{move || i18n.t("password")}</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                        {move || if submitting.get() { i18n.t("signingIn") } else { i18n.t("signIn") }}
                    </button>
                </form>
                <p class="auth-switch">
                    {move || i18n.t("noAccount")}" "
                    <a href="/register" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Register);
                    }>{move || i18n.t("register")}</a>
                </p>
            </div>
        </div>
    }
}
