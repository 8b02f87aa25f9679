//! Dashboard Page
//!
//! Headline numbers plus the latest orders, best sellers and reviews.

use leptos::prelude::*;
use leptos::task::spawn_local;
use smart_menu_core::domain::{DashboardStats, RecentFeedback, RecentOrder, TopItem};
use smart_menu_core::format::format_currency;

use crate::api;
use crate::clock;
use crate::components::{AdminLayout, Flash, FlashBanner, Stars};
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::router::Route;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let flash = Flash::new();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (orders, set_orders) = signal(Vec::<RecentOrder>::new());
    let (top, set_top) = signal(Vec::<TopItem>::new());
    let (feedback, set_feedback) = signal(Vec::<RecentFeedback>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        web_sys::console::log_1(&"[DASHBOARD] Loading".into());
        match api::dashboard_stats().await {
            Ok(s) => set_stats.set(s),
            Err(e) => flash.error(e.to_string()),
        }
        match api::recent_orders().await {
            Ok(list) => set_orders.set(list),
            Err(e) => flash.error(e.to_string()),
        }
        match api::top_items().await {
            Ok(list) => set_top.set(list),
            Err(e) => flash.error(e.to_string()),
        }
        match api::recent_feedback().await {
            Ok(list) => set_feedback.set(list),
            Err(e) => flash.error(e.to_string()),
        }
        set_loading.set(false);
    });

    let stat_card = move |icon: &'static str, label: &'static str, value: Signal<String>| {
        view! {
            <div class="stat-card">
                <i class=icon></i>
                <div>
                    <span class="stat-value">{move || value.get()}</span>
                    <span class="stat-label">{move || i18n.t(label)}</span>
                </div>
            </div>
        }
    };

    view! {
        <AdminLayout title_key="dashboard" subtitle_key="dashboardSubtitle">
            <FlashBanner flash=flash />
            <Show when=move || loading.get()>
                <p class="loading">{move || i18n.t("loadingDashboard")}</p>
            </Show>
            <div class="stats-grid">
                {stat_card("fas fa-receipt", "totalOrders", Signal::derive(move || stats.get().total_orders.to_string()))}
                {stat_card("fas fa-money-bill", "totalSales", Signal::derive(move || format_currency(stats.get().total_sales)))}
                {stat_card("fas fa-clock", "pendingOrders", Signal::derive(move || stats.get().pending_orders.to_string()))}
                {stat_card("fas fa-utensils", "activeItems", Signal::derive(move || stats.get().active_items.to_string()))}
                {stat_card("fas fa-chair", "tablesCount", Signal::derive(move || stats.get().tables_count.to_string()))}
            </div>

            <div class="dashboard-grid">
                <section class="card">
                    <div class="card-header">
                        <h2>{move || i18n.t("recentOrders")}</h2>
                        <button class="btn btn-link" on:click=move |_| ctx.navigate(Route::Orders)>{move || i18n.t("viewAll")}</button>
                    </div>
                    <Show
                        when=move || !orders.with(|o| o.is_empty())
                        fallback=move || view! { <p class="empty">{move || i18n.t("noRecentOrders")}</p> }
                    >
                        <table class="data-table">
                            <thead><tr>
                                <th>{move || i18n.t("orderNumber")}</th>
                                <th>{move || i18n.t("table")}</th>
                                <th>{move || i18n.t("amount")}</th>
                                <th>{move || i18n.t("status")}</th>
                                <th>{move || i18n.t("time")}</th>
                            </tr></thead>
                            <tbody>
                                <For each=move || orders.get() key=|o| o.id.clone() let:order>
                                    <tr>
                                        <td>{order.order_number.clone().unwrap_or_else(|| order.id.clone())}</td>
                                        <td>{order.table_number.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format_currency(order.amount)}</td>
                                        <td><span class=format!("status-badge {}", order.status.css_class())>{move || i18n.t(order.status.label_key())}</span></td>
                                        <td>{clock::stamp(order.created_at)}</td>
                                    </tr>
                                </For>
                            </tbody>
                        </table>
                    </Show>
                </section>

                <section class="card">
                    <div class="card-header">
                        <h2>{move || i18n.t("topItems")}</h2>
                        <button class="btn btn-link" on:click=move |_| ctx.navigate(Route::Reports)>{move || i18n.t("viewAll")}</button>
                    </div>
                    <Show
                        when=move || !top.with(|t| t.is_empty())
                        fallback=move || view! { <p class="empty">{move || i18n.t("noSalesData")}</p> }
                    >
                        <ol class="top-items">
                            <For each=move || top.get() key=|t| t.name.clone() let:item>
                                <li>
                                    <span class="top-item-name">{item.name.clone()}</span>
                                    <span class="top-item-sold">{move || format!("{} {}", item.total_sold, i18n.t("unitsSold"))}</span>
                                    <span class="top-item-revenue">{format_currency(item.total_revenue)}</span>
                                </li>
                            </For>
                        </ol>
                    </Show>
                </section>

                <section class="card">
                    <div class="card-header">
                        <h2>{move || i18n.t("recentFeedback")}</h2>
                        <button class="btn btn-link" on:click=move |_| ctx.navigate(Route::Feedback)>{move || i18n.t("viewAll")}</button>
                    </div>
                    <Show
                        when=move || !feedback.with(|f| f.is_empty())
                        fallback=move || view! { <p class="empty">{move || i18n.t("noRecentFeedback")}</p> }
                    >
                        <ul class="feedback-list">
                            <For each=move || feedback.get() key=|f| f.id.clone() let:entry>
                                <li class="feedback-entry">
                                    <Stars rating=entry.rating />
                                    <span class="feedback-order">{entry.order_number.clone().unwrap_or_default()}</span>
                                    <p>{entry.comments.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| i18n.t("noComments"))}</p>
                                    <small>{clock::stamp(entry.created_at)}</small>
                                </li>
                            </For>
                        </ul>
                    </Show>
                </section>
            </div>
        </AdminLayout>
    }
}
