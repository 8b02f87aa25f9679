//! Sidebar Component
//!
//! Admin navigation with the active page highlighted, a pending-orders badge
//! and the signed-in user's footer.

use leptos::prelude::*;
use smart_menu_core::config::PENDING_POLL_MS;

use crate::api;
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::poll;
use crate::router::Route;
use crate::store::{
    store_clear_session, store_pending_orders, store_session, store_set_pending_orders,
    use_app_store,
};

/// (route, icon class, label key)
fn nav_items() -> [(Route, &'static str, &'static str); 8] {
    [
        (Route::Dashboard, "fas fa-chart-line", "dashboard"),
        (Route::Menu, "fas fa-utensils", "manageMenu"),
        (Route::DailyMenu, "fas fa-calendar-day", "todaysMenu"),
        (Route::Orders, "fas fa-receipt", "orders"),
        (Route::Feedback, "fas fa-comments", "customerFeedback"),
        (Route::Reports, "fas fa-chart-bar", "reports"),
        (Route::QrCodes, "fas fa-qrcode", "qrCodes"),
        (Route::Settings, "fas fa-cog", "settings"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let i18n = use_i18n();

    poll::poll_every(PENDING_POLL_MS, move || async move {
        match api::count_pending_orders().await {
            Ok(count) => store_set_pending_orders(&store, count),
            Err(e) => web_sys::console::warn_1(&format!("[SIDEBAR] Pending count failed: {}", e).into()),
        }
    });

    let logout = move |_| {
        web_sys::console::log_1(&"[SIDEBAR] Logout".into());
        store_clear_session(&store);
        ctx.navigate(Route::Login);
    };

    view! {
        <aside class=move || if ctx.sidebar_open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <i class="fas fa-utensils"></i>
                <span class="sidebar-brand">{move || i18n.t("appName")}</span>
                <button class="sidebar-close" on:click=move |_| ctx.close_sidebar()>"×"</button>
            </div>

            <nav class="sidebar-nav">
                {nav_items().into_iter().map(|(route, icon, key)| {
                    let href = route.to_url();
                    let active_route = route.clone();
                    let target = route.clone();
                    let is_orders = route == Route::Orders;
                    view! {
                        <a
                            href=href
                            class=move || if ctx.route.get() == active_route { "nav-item active" } else { "nav-item" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(target.clone());
                            }
                        >
                            <i class=icon></i>
                            <span>{move || i18n.t(key)}</span>
                            {move || (is_orders && store_pending_orders(&store) > 0).then(|| view! {
                                <span class="badge">{store_pending_orders(&store)}</span>
                            })}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                {move || store_session(&store).map(|session| view! {
                    <div class="user-info">
                        <div class="user-avatar">
                            {session.display_name().chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                        </div>
                        <div class="user-details">
                            <span class="user-name">{session.display_name().to_string()}</span>
                            <span class="user-role">{session.display_role()}</span>
                        </div>
                    </div>
                })}
                <button class="btn btn-logout" on:click=logout>
                    <i class="fas fa-sign-out-alt"></i>
                    {move || i18n.t("logout")}
                </button>
            </div>
        </aside>
    }
}
