//! Customer Feedback Page
//!
//! Star rating and comments for a finished order, then back to the menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::config::FEEDBACK_REDIRECT_MS;
use smart_menu_core::domain::SubmitFeedbackRequest;
use smart_menu_core::validation::validate_rating;

use crate::api;
use crate::components::{Flash, FlashBanner, StarRating};
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::poll::Lifetime;
use crate::router::Route;
use crate::storage;

#[component]
pub fn CustomerFeedbackPage(order: Option<String>, table: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let flash = Flash::new();

    let (rating, set_rating) = signal(0u8);
    let (comments, set_comments) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (done, set_done) = signal(false);
    let lifetime = Lifetime::current();

    let has_order = order.is_some();
    let menu_route = Route::CustomerMenu { table };

    let on_submit = {
        let menu_route = menu_route.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(order_number) = order.clone() else {
                flash.error(i18n.t("noOrderNumber"));
                return;
            };
            let rating = match validate_rating(rating.get_untracked()) {
                Ok(r) => r,
                Err(e) => {
                    flash.error(i18n.t(e.key()));
                    return;
                }
            };
            let request = SubmitFeedbackRequest {
                order_number,
                device_id: Some(storage::device_id()),
                rating,
                comments: comments.get_untracked().trim().to_string(),
            };
            let menu_route = menu_route.clone();
            let lifetime = lifetime.clone();

            set_submitting.set(true);
            spawn_local(async move {
                match api::submit_feedback(&request).await {
                    Ok(ack) => {
                        web_sys::console::log_1(
                            &format!("[FEEDBACK] {} rated {} ({})", request.order_number, request.rating, ack.success).into(),
                        );
                        set_done.set(true);
                        flash.success(ack.message.unwrap_or_else(|| i18n.t("thankYou")));
                        lifetime.after(FEEDBACK_REDIRECT_MS, move || ctx.navigate(menu_route));
                    }
                    Err(e) => {
                        flash.error(e.to_string());
                        set_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="customer-page feedback-page">
            <header class="customer-header">
                <h1>{move || i18n.t("leaveFeedback")}</h1>
            </header>
            <FlashBanner flash=flash />
            {(!has_order).then(|| view! { <div class="alert alert-error">{move || i18n.t("noOrderNumber")}</div> })}

            <Show
                when=move || !done.get()
                fallback=move || view! {
                    <div class="thank-you">
                        <h2>{move || i18n.t("thankYou")}</h2>
                        <p class="muted">{move || i18n.t("redirecting")}</p>
                    </div>
                }
            >
                <form class="card feedback-form" on:submit=on_submit.clone()>
                    <h2>{move || i18n.t("rateYourExperience")}</h2>
                    <StarRating rating=rating on_rate=move |r| set_rating.set(r) />
                    <p class="muted">{move || i18n.t("tapToRate")}</p>
                    <textarea
                        placeholder=move || i18n.t("commentsPlaceholder")
                        prop:value=comments
                        on:input=move |ev| set_comments.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get() || !has_order>
                        {move || if submitting.get() { i18n.t("submitting") } else { i18n.t("submitFeedback") }}
                    </button>
                </form>
            </Show>

            <button class="btn btn-link" on:click=move |_| ctx.navigate(menu_route.clone())>
                {move || i18n.t("backToMenu")}
            </button>
        </div>
    }
}
