//! Reports Page
//!
//! Sales figures aggregated on the client from the order list.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::domain::{Order, OrderStatus};
use smart_menu_core::format::format_price;
use smart_menu_core::report::ReportSummary;

use crate::api;
use crate::clock;
use crate::components::{AdminLayout, Flash, FlashBanner};
use crate::i18n::use_i18n;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let i18n = use_i18n();
    let flash = Flash::new();

    let orders = RwSignal::new(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (from, set_from) = signal(None::<NaiveDate>);
    let (to, set_to) = signal(None::<NaiveDate>);

    spawn_local(async move {
        match api::list_orders().await {
            Ok(list) => orders.set(list),
            Err(e) => flash.error(e.to_string()),
        }
        set_loading.set(false);
    });

    let summary = Memo::new(move |_| {
        let (from, to) = (from.get(), to.get());
        let report = orders.with(|list| ReportSummary::from_orders(list, from, to));
        web_sys::console::log_1(
            &format!("[REPORTS] {} orders, revenue {}", report.total_orders, report.total_revenue).into(),
        );
        report
    });

    view! {
        <AdminLayout title_key="reports" subtitle_key="reportsSubtitle">
            <FlashBanner flash=flash />
            <section class="card filter-panel">
                <h2>{move || i18n.t("filterReports")}</h2>
                <label class="inline-field">
                    {move || i18n.t("dateFrom")}
                    <input
                        type="date"
                        prop:value=move || from.get().map(clock::date_input_value).unwrap_or_default()
                        on:change=move |ev| set_from.set(clock::parse_date_input(&event_target_value(&ev)))
                    />
                </label>
                <label class="inline-field">
                    {move || i18n.t("dateTo")}
                    <input
                        type="date"
                        prop:value=move || to.get().map(clock::date_input_value).unwrap_or_default()
                        on:change=move |ev| set_to.set(clock::parse_date_input(&event_target_value(&ev)))
                    />
                </label>
                <button class="btn btn-secondary" on:click=move |_| {
                    set_from.set(None);
                    set_to.set(None);
                }>
                    {move || i18n.t("clearFilter")}
                </button>
            </section>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loadingReports")}</p> }
            >
                <section class="card">
                    <h2>{move || i18n.t("keyMetrics")}</h2>
                    <div class="stats-grid">
                        <div class="stat-card">
                            <span class="stat-value">{move || format_price(summary.with(|s| s.total_revenue))}</span>
                            <span class="stat-label">{move || i18n.t("totalRevenue")}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{move || summary.with(|s| s.total_orders)}</span>
                            <span class="stat-label">{move || i18n.t("totalOrders")}</span>
                        </div>
                    </div>
                </section>

                <section class="card">
                    <h2>{move || i18n.t("ordersByStatus")}</h2>
                    <ul class="status-counts">
                        {OrderStatus::ALL.into_iter().map(|status| view! {
                            <li>
                                <span class=format!("status-badge {}", status.css_class())>{move || i18n.t(status.label_key())}</span>
                                <strong>{move || summary.with(|s| s.count_for(status))}</strong>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>

                <section class="card">
                    <h2>{move || i18n.t("topSellingItems")}</h2>
                    <Show
                        when=move || !summary.with(|s| s.top_items.is_empty())
                        fallback=move || view! { <p class="empty">{move || i18n.t("noSalesData")}</p> }
                    >
                        <table class="data-table">
                            <thead><tr>
                                <th>"#"</th>
                                <th>{move || i18n.t("item")}</th>
                                <th>{move || i18n.t("unitsSold")}</th>
                                <th>{move || i18n.t("totalRevenue")}</th>
                            </tr></thead>
                            <tbody>
                                {move || summary.get().top_items.into_iter().enumerate().map(|(rank, item)| view! {
                                    <tr>
                                        <td>{rank + 1}</td>
                                        <td>{item.name}</td>
                                        <td>{item.total_sold}</td>
                                        <td>{format_price(item.total_revenue)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </Show>
                </section>
            </Show>
        </AdminLayout>
    }
}
