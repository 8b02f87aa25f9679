//! Register Page
//!
//! Creates a restaurant account, then sends the user to the login form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use smart_menu_core::config::REGISTER_REDIRECT_MS;
use smart_menu_core::validation::{password_strength, RegisterForm};

use crate::api;
use crate::components::{Flash, FlashBanner};
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::poll::Lifetime;
use crate::router::Route;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let flash = Flash::new();

    let form = RwSignal::new(RegisterForm::default());
    let (submitting, set_submitting) = signal(false);
    let lifetime = Lifetime::current();

    let strength = Memo::new(move |_| form.with(|f| password_strength(&f.password)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                flash.error(i18n.t(e.key()));
                return;
            }
        };

        set_submitting.set(true);
        let lifetime = lifetime.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => {
                    web_sys::console::log_1(&format!("[AUTH] Registered {}", request.username).into());
                    flash.success(i18n.t("registerSuccess"));
                    lifetime.after(REGISTER_REDIRECT_MS, move || ctx.navigate(Route::Login));
                }
                Err(e) => {
                    flash.error(e.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    // One labelled input bound to a form field
    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, put: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{move || i18n.t(label)}</label>
                <input
                    id=id
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| put(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>{move || i18n.t("createAccount")}</h1>
                    <p>{move || i18n.t("registerSubtitle")}</p>
                </div>
                <FlashBanner flash=flash />
                <form on:submit=on_submit>
                    {text_field("username", "username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {text_field("email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field("full-name", "fullName", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text_field("restaurant-name", "restaurantName", "text", |f| f.restaurant_name.clone(), |f, v| f.restaurant_name = v)}
                    {text_field("password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {move || strength.get().map(|s| view! {
                        <div class=format!("password-strength {}", s.css_class())>
                            <div class="strength-bar"></div>
                            <span>{format!("{}: {}", i18n.t("passwordStrength"), i18n.t(s.label_key()))}</span>
                        </div>
                    })}
                    <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                        {move || if submitting.get() { i18n.t("creatingAccount") } else { i18n.t("register") }}
                    </button>
                </form>
                <p class="auth-switch">
                    {move || i18n.t("haveAccount")}" "
                    <a href="/login" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Login);
                    }>{move || i18n.t("login")}</a>
                </p>
            </div>
        </div>
    }
}
