//! Orders Page
//!
//! Loads every order once, then filters, searches and pages locally.
//! Status changes are sent one order at a time; payment is tracked only in
//! the loaded list because the backend has no field for it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::config::PAGE_SIZE;
use smart_menu_core::domain::{find_by_id, remove_by_id, set_payment_status, upsert, Order, OrderStatus};
use smart_menu_core::filter::OrderFilter;
use smart_menu_core::format::format_price;
use smart_menu_core::pagination::Paginator;

use crate::api;
use crate::clock;
use crate::components::{AdminLayout, DeleteConfirmButton, Flash, FlashBanner, Modal, Pager};
use crate::i18n::use_i18n;
use crate::store::{store_set_pending_orders, use_app_store};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_app_store();
    let flash = Flash::new();

    let orders = RwSignal::new(Vec::<Order>::new());
    let filter = RwSignal::new(OrderFilter::default());
    let pager = RwSignal::new(Paginator::new(PAGE_SIZE));
    let (loading, set_loading) = signal(true);
    let details = RwSignal::new(None::<Order>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_orders().await {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[ORDERS] Loaded {} orders", list.len()).into());
                    orders.set(list);
                }
                Err(e) => flash.error(e.to_string()),
            }
            set_loading.set(false);
        });
    };
    load();

    let filtered = Memo::new(move |_| {
        let f = filter.get();
        orders.with(|list| f.apply(list))
    });

    Effect::new(move |_| {
        let total = filtered.with(|list| list.len());
        pager.update(|p| p.set_total(total));
    });

    // Keep the sidebar badge in step with local edits
    Effect::new(move |_| {
        let pending = orders.with(|list| list.iter().filter(|o| o.status == OrderStatus::Pending).count());
        if !loading.get() {
            store_set_pending_orders(&store, pending as u64);
        }
    });

    let visible = move || {
        let p = pager.get();
        filtered.with(|list| p.slice(list).to_vec())
    };

    let on_status = move |id: String, status: OrderStatus| {
        spawn_local(async move {
            match api::update_order_status(&id, status).await {
                Ok(mut order) => {
                    web_sys::console::log_1(&format!("[ORDERS] {} -> {:?}", id, status).into());
                    if let Some(local) = orders.with_untracked(|list| find_by_id(list, &order.id).map(|o| o.payment_status)) {
                        order.payment_status = local;
                    }
                    details.update(|d| {
                        if d.as_ref().is_some_and(|d| d.id == order.id) {
                            *d = Some(order.clone());
                        }
                    });
                    orders.update(|list| upsert(list, order));
                    flash.success(i18n.t("orderStatusUpdated"));
                }
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let on_payment = move |id: String| {
        let mut changed = false;
        orders.update(|list| {
            if let Some(next) = find_by_id(list, &id).map(|o| o.payment_status.toggled()) {
                changed = set_payment_status(list, &id, next);
            }
        });
        if changed {
            details.update(|d| {
                if let Some(d) = d.as_mut().filter(|d| d.id == id) {
                    d.payment_status = d.payment_status.toggled();
                }
            });
            web_sys::console::log_1(&format!("[ORDERS] {} payment toggled", id).into());
            flash.success(i18n.t("paymentUpdated"));
        }
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_order(&id).await {
                Ok(()) => {
                    orders.update(|list| {
                        remove_by_id(list, &id);
                    });
                    flash.success(i18n.t("orderDeleted"));
                }
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let on_details = move |id: String| {
        spawn_local(async move {
            match api::get_order(&id).await {
                Ok(order) => details.set(Some(order)),
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    view! {
        <AdminLayout title_key="orders" subtitle_key="ordersSubtitle">
            <FlashBanner flash=flash />
            <div class="toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder=move || i18n.t("searchOrders")
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        filter.update(|f| f.search = event_target_value(&ev));
                        pager.update(|p| p.go_to(1));
                    }
                />
                <select
                    prop:value=move || filter.with(|f| f.status.map(|s| s.as_str()).unwrap_or_default().to_string())
                    on:change=move |ev| {
                        filter.update(|f| f.status = OrderStatus::from_str(&event_target_value(&ev)));
                        pager.update(|p| p.go_to(1));
                    }
                >
                    <option value="">{move || i18n.t("allStatuses")}</option>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{move || i18n.t(s.label_key())}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn-secondary" on:click=move |_| load()>
                    <i class="fas fa-sync"></i>" "{move || i18n.t("refresh")}
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loadingOrders")}</p> }
            >
                <Show
                    when=move || !filtered.with(|list| list.is_empty())
                    fallback=move || view! { <p class="empty">{move || i18n.t("noOrders")}</p> }
                >
                    <table class="data-table">
                        <thead><tr>
                            <th>{move || i18n.t("orderNumber")}</th>
                            <th>{move || i18n.t("table")}</th>
                            <th>{move || i18n.t("customer")}</th>
                            <th>{move || i18n.t("items")}</th>
                            <th>{move || i18n.t("total")}</th>
                            <th>{move || i18n.t("status")}</th>
                            <th>{move || i18n.t("payment")}</th>
                            <th>{move || i18n.t("time")}</th>
                            <th>{move || i18n.t("actions")}</th>
                        </tr></thead>
                        <tbody>
                            {move || visible().into_iter().map(|order| {
                                let status_id = order.id.clone();
                                let payment_id = order.id.clone();
                                let details_id = order.id.clone();
                                let delete_id = order.id.clone();
                                let status = order.status;
                                let paid = order.payment_status.is_paid();
                                view! {
                                    <tr>
                                        <td><strong>{order.display_number()}</strong></td>
                                        <td>{order.display_table()}</td>
                                        <td>{order.customer_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{order.items.iter().map(|i| i.quantity).sum::<u32>()}</td>
                                        <td>{format_price(order.total)}</td>
                                        <td>
                                            <select
                                                class=format!("status-select {}", status.css_class())
                                                prop:value=status.as_str()
                                                on:change=move |ev| {
                                                    if let Some(next) = OrderStatus::from_str(&event_target_value(&ev)) {
                                                        if next != status {
                                                            on_status(status_id.clone(), next);
                                                        }
                                                    }
                                                }
                                            >
                                                {OrderStatus::ALL
                                                    .into_iter()
                                                    .map(|s| view! { <option value=s.as_str()>{move || i18n.t(s.label_key())}</option> })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <button
                                                class=if paid { "payment-badge paid" } else { "payment-badge unpaid" }
                                                title=move || i18n.t(if paid { "markUnpaid" } else { "markPaid" })
                                                on:click=move |_| on_payment(payment_id.clone())
                                            >
                                                {move || i18n.t(if paid { "paymentCompleted" } else { "paymentPending" })}
                                            </button>
                                        </td>
                                        <td>{clock::stamp(order.created_at)}</td>
                                        <td class="actions">
                                            <button class="btn btn-small" on:click=move |_| on_details(details_id.clone())>
                                                {move || i18n.t("viewDetails")}
                                            </button>
                                            <DeleteConfirmButton
                                                prompt_key="deleteOrderConfirm"
                                                on_confirm=move |_| on_delete(delete_id.clone())
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Pager paginator=pager on_page=move |n| pager.update(|p| p.go_to(n)) />
                </Show>
            </Show>

            <Show when=move || details.with(|d| d.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        let number = details.with(|d| d.as_ref().map(|o| o.display_number()).unwrap_or_default());
                        format!("{} {}", i18n.t("orderDetails"), number)
                    })
                    on_close=move |_| details.set(None)
                >
                    {move || details.get().map(|order| view! { <OrderDetails order=order /> })}
                </Modal>
            </Show>
        </AdminLayout>
    }
}

/// Line items and totals of one order
#[component]
fn OrderDetails(order: Order) -> impl IntoView {
    let i18n = use_i18n();
    let status = order.status;
    let payment = order.payment_status;

    view! {
        <div class="order-details">
            <dl class="order-meta">
                <dt>{move || i18n.t("table")}</dt><dd>{order.display_table()}</dd>
                <dt>{move || i18n.t("customer")}</dt><dd>{order.customer_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{move || i18n.t("status")}</dt>
                <dd><span class=format!("status-badge {}", status.css_class())>{move || i18n.t(status.label_key())}</span></dd>
                <dt>{move || i18n.t("payment")}</dt><dd>{move || i18n.t(payment.label_key())}</dd>
                <dt>{move || i18n.t("time")}</dt><dd>{clock::stamp(order.created_at)}</dd>
            </dl>
            <table class="data-table">
                <thead><tr>
                    <th>{move || i18n.t("item")}</th>
                    <th>{move || i18n.t("quantity")}</th>
                    <th>{move || i18n.t("price")}</th>
                    <th>{move || i18n.t("subtotal")}</th>
                </tr></thead>
                <tbody>
                    {order.items.iter().map(|line| view! {
                        <tr>
                            <td>
                                {line.menu_item_name.clone()}
                                {line.special_instructions.clone().filter(|s| !s.is_empty()).map(|s| view! {
                                    <small class="muted">{s}</small>
                                })}
                            </td>
                            <td>{line.quantity}</td>
                            <td>{format_price(line.price)}</td>
                            <td>{format_price(line.line_total())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <div class="order-totals">
                {order.subtotal.map(|v| view! { <p>{move || i18n.t("subtotal")}": "{format_price(v)}</p> })}
                {order.tax.map(|v| view! { <p>{move || i18n.t("tax")}": "{format_price(v)}</p> })}
                <p class="grand-total"><strong>{move || i18n.t("total")}": "{format_price(order.total)}</strong></p>
            </div>
            {order.customer_notes.clone().filter(|n| !n.trim().is_empty()).map(|notes| view! {
                <div class="customer-notes">
                    <h4>{move || i18n.t("customerNotes")}</h4>
                    <p>{notes}</p>
                </div>
            })}
        </div>
    }
}
