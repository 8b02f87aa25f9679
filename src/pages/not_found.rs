use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::router::Route;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    web_sys::console::warn_1(&format!("[ROUTER] No page for {}", path).into());

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>{move || i18n.t("notFoundTitle")}</h2>
            <p>{move || i18n.t("notFound")}</p>
            <code>{path}</code>
            <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Dashboard)>
                {move || i18n.t("goHome")}
            </button>
        </div>
    }
}
