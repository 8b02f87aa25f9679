//! Admin Layout
//!
//! Sidebar/navbar frame shared by every admin page. Content only renders
//! while a session exists; `App` handles the redirect to the login form.

use leptos::prelude::*;

use crate::components::{Navbar, Sidebar};
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::store::{store_is_logged_in, use_app_store};

#[component]
pub fn AdminLayout(
    /// i18n key of the page title
    title_key: &'static str,
    /// i18n key of the line under the title
    subtitle_key: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let i18n = use_i18n();

    view! {
        <Show when=move || store_is_logged_in(&store)>
            <div class="admin-container">
                <Sidebar />
                <Show when=move || ctx.sidebar_open.get()>
                    <div class="sidebar-backdrop" on:click=move |_| ctx.close_sidebar()></div>
                </Show>
                <div class="main-wrapper">
                    <Navbar />
                    <main class="main-content">
                        <div class="page-header">
                            <h1>{move || i18n.t(title_key)}</h1>
                            <p class="subtitle">{move || i18n.t(subtitle_key)}</p>
                        </div>
                        {children()}
                    </main>
                </div>
            </div>
        </Show>
    }
}
