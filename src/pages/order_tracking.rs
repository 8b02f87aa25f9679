//! Order Tracking Page
//!
//! Shows where a placed order is in the kitchen, refreshed every few seconds.

use leptos::prelude::*;

use smart_menu_core::config::TRACKING_POLL_MS;
use smart_menu_core::domain::{Order, OrderStatus};
use smart_menu_core::format::{format_price, format_time};

use crate::api::{self, ApiError};
use crate::components::LanguageSelect;
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::poll;
use crate::router::Route;

#[component]
pub fn OrderTrackingPage(order: Option<String>, table: Option<String>) -> impl IntoView {
    let i18n = use_i18n();

    match order {
        Some(order_number) => view! { <TrackingView order_number=order_number table=table /> }.into_any(),
        None => view! {
            <div class="customer-page">
                <div class="alert alert-error">{move || i18n.t("noOrderNumber")}</div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn TrackingView(order_number: String, table: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();

    let order = RwSignal::new(None::<Order>);
    // i18n key or server message of the last failure
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(true);

    {
        let order_number = order_number.clone();
        poll::poll_every(TRACKING_POLL_MS, move || {
            let order_number = order_number.clone();
            async move {
                let finished = order
                    .try_with_untracked(|o| o.as_ref().is_some_and(|o| o.status.is_final()))
                    .unwrap_or(true);
                if finished {
                    return;
                }
                match api::track_order(&order_number).await {
                    Ok(fresh) => {
                        web_sys::console::log_1(
                            &format!("[TRACKING] {} is {:?}", order_number, fresh.status).into(),
                        );
                        error.set(None);
                        order.set(Some(fresh));
                    }
                    Err(ApiError::Http { status: 404, .. }) => error.set(Some("orderNotFound".to_string())),
                    Err(e) => error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            }
        });
    }

    let menu_route = Route::CustomerMenu { table: table.clone() };
    let feedback_route = Route::CustomerFeedback {
        order: Some(order_number.clone()),
        table,
    };

    view! {
        <div class="customer-page tracking-page">
            <header class="customer-header">
                <h1>{move || i18n.t("trackOrder")}</h1>
                <LanguageSelect />
            </header>

            {move || error.get().map(|message| view! {
                <div class="alert alert-error">{move || i18n.t(&message)}</div>
            })}

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loadingOrder")}</p> }
            >
                {move || order.get().map(|o| view! { <OrderProgress order=o /> })}
            </Show>

            <p class="muted">{move || i18n.t("autoRefresh")}</p>
            <div class="tracking-actions">
                <button class="btn btn-secondary" on:click=move |_| ctx.navigate(menu_route.clone())>
                    {move || i18n.t("backToMenu")}
                </button>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(feedback_route.clone())>
                    {move || i18n.t("leaveFeedback")}
                </button>
            </div>
        </div>
    }
}

/// Status timeline plus the order's lines
#[component]
fn OrderProgress(order: Order) -> impl IntoView {
    let i18n = use_i18n();
    let status = order.status;
    let current_step = status.step();

    let banner = match status {
        OrderStatus::Cancelled => Some(("alert alert-error", "orderCancelled")),
        OrderStatus::Ready => Some(("alert alert-success", "orderReady")),
        OrderStatus::Completed => Some(("alert alert-success", "orderCompleted")),
        _ => None,
    };

    view! {
        <section class="card">
            <h2>{order.display_number()}</h2>
            <p class="muted">{move || i18n.t("orderPlacedAt")}" "{format_time(order.created_at)}</p>
            {banner.map(|(class, key)| view! { <div class=class>{move || i18n.t(key)}</div> })}

            <ol class="timeline">
                {OrderStatus::timeline().into_iter().enumerate().map(|(index, step)| {
                    let class = match current_step {
                        Some(now) if index < now => "timeline-step done",
                        Some(now) if index == now => "timeline-step current",
                        _ => "timeline-step",
                    };
                    view! {
                        <li class=class>
                            <span class="timeline-icon">{step.icon()}</span>
                            <span>{move || i18n.t(step.label_key())}</span>
                        </li>
                    }
                }).collect_view()}
            </ol>

            <ul class="order-lines">
                {order.items.iter().map(|line| view! {
                    <li>
                        <span>{format!("{} × {}", line.quantity, line.menu_item_name)}</span>
                        <span>{format_price(line.line_total())}</span>
                    </li>
                }).collect_view()}
            </ul>
            <p class="grand-total">
                <strong>{move || i18n.t("total")}": "{format_price(order.total)}</strong>
            </p>
        </section>
    }
}
