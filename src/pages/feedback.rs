//! Feedback Page
//!
//! Server-side filtered and paginated customer reviews plus rating stats.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::domain::{Feedback, FeedbackPage, FeedbackStats};
use smart_menu_core::filter::{FeedbackQuery, FeedbackSort};
use smart_menu_core::format::format_price;
use smart_menu_core::pagination::Paginator;

use crate::api;
use crate::clock;
use crate::components::{AdminLayout, DeleteConfirmButton, Flash, FlashBanner, Pager, Stars};
use crate::i18n::use_i18n;

#[component]
pub fn FeedbackAdminPage() -> impl IntoView {
    let i18n = use_i18n();
    let flash = Flash::new();

    // `query` is what was last sent; `draft` is the filter panel
    let query = RwSignal::new(FeedbackQuery::default());
    let draft = RwSignal::new(FeedbackQuery::default());
    let page = RwSignal::new(FeedbackPage::default());
    let stats = RwSignal::new(FeedbackStats::default());
    let (loading, set_loading) = signal(true);
    let (reload, set_reload) = signal(0u32);

    let load_stats = move || {
        spawn_local(async move {
            match api::feedback_stats().await {
                Ok(s) => stats.set(s),
                Err(e) => flash.error(e.to_string()),
            }
        });
    };
    load_stats();

    Effect::new(move |_| {
        let q = query.get();
        let _ = reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_feedback(&q).await {
                Ok(result) => {
                    web_sys::console::log_1(
                        &format!("[FEEDBACK] Page {} of {}", result.current_page + 1, result.total_pages).into(),
                    );
                    page.set(result);
                }
                Err(e) => flash.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    let paginator = Signal::derive(move || {
        let size = query.with(|q| q.size);
        page.with(|p| Paginator {
            page: p.current_page + 1,
            page_size: size,
            total_items: p.total_items,
        })
    });

    let apply = move || {
        let mut next = draft.get_untracked();
        next.page = 1;
        query.set(next);
    };

    let clear = move || {
        let cleared = query.with_untracked(|q| q.cleared());
        draft.set(cleared.clone());
        query.set(cleared);
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_feedback(&id).await {
                Ok(()) => {
                    flash.success(i18n.t("feedbackDeleted"));
                    set_reload.update(|n| *n += 1);
                    load_stats();
                }
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    view! {
        <AdminLayout title_key="customerFeedback" subtitle_key="feedbackSubtitle">
            <FlashBanner flash=flash />

            <div class="stats-grid">
                <div class="stat-card">
                    <span class="stat-value">{move || format!("{:.1}", stats.with(|s| s.average_rating))}</span>
                    <span class="stat-label">{move || i18n.t("averageRating")}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.with(|s| s.total_feedback)}</span>
                    <span class="stat-label">{move || i18n.t("totalFeedback")}</span>
                </div>
                <div class="stat-card rating-distribution">
                    <span class="stat-label">{move || i18n.t("ratingDistribution")}</span>
                    {(1u8..=5).rev().map(|r| view! {
                        <div class="distribution-row">
                            <span>{format!("{}★", r)}</span>
                            <div class="bar">
                                <div class="bar-fill" style=move || format!("width: {:.0}%", stats.with(|s| s.percent_for(r)))></div>
                            </div>
                            <span>{move || stats.with(|s| s.count_for(r))}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <form class="filter-panel" on:submit=move |ev| {
                ev.prevent_default();
                apply();
            }>
                <select
                    prop:value=move || draft.with(|q| q.rating.map(|r| r.to_string()).unwrap_or_default())
                    on:change=move |ev| draft.update(|q| q.rating = event_target_value(&ev).parse().ok())
                >
                    <option value="">{move || i18n.t("allRatings")}</option>
                    {(1u8..=5).rev().map(|r| view! { <option value=r.to_string()>{format!("{}★", r)}</option> }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder=move || i18n.t("orderNumber")
                    prop:value=move || draft.with(|q| q.order_number.clone())
                    on:input=move |ev| draft.update(|q| q.order_number = event_target_value(&ev))
                />
                <label class="inline-field">
                    {move || i18n.t("startDate")}
                    <input
                        type="date"
                        prop:value=move || draft.with(|q| q.start_date.map(clock::date_input_value).unwrap_or_default())
                        on:change=move |ev| draft.update(|q| q.start_date = clock::parse_date_input(&event_target_value(&ev)))
                    />
                </label>
                <label class="inline-field">
                    {move || i18n.t("endDate")}
                    <input
                        type="date"
                        prop:value=move || draft.with(|q| q.end_date.map(clock::date_input_value).unwrap_or_default())
                        on:change=move |ev| draft.update(|q| q.end_date = clock::parse_date_input(&event_target_value(&ev)))
                    />
                </label>
                <label class="inline-field">
                    {move || i18n.t("sortBy")}
                    <select
                        prop:value=move || draft.with(|q| q.sort.as_str())
                        on:change=move |ev| {
                            if let Some(sort) = FeedbackSort::from_str(&event_target_value(&ev)) {
                                draft.update(|q| q.sort = sort);
                            }
                        }
                    >
                        {FeedbackSort::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{move || i18n.t(s.label_key())}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="btn btn-primary">{move || i18n.t("filter")}</button>
                <button type="button" class="btn btn-secondary" on:click=move |_| clear()>
                    {move || i18n.t("clearFilter")}
                </button>
            </form>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loadingFeedback")}</p> }
            >
                <Show
                    when=move || !page.with(|p| p.entries.is_empty())
                    fallback=move || view! { <p class="empty">{move || i18n.t("noFeedback")}</p> }
                >
                    <div class="feedback-cards">
                        {move || page.get().entries.into_iter().map(|entry| view! {
                            <FeedbackCard entry=entry on_delete=on_delete />
                        }).collect_view()}
                    </div>
                    <Pager paginator=paginator on_page=move |n| query.update(|q| q.page = n) />
                </Show>
            </Show>
        </AdminLayout>
    }
}

#[component]
fn FeedbackCard(entry: Feedback, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    let i18n = use_i18n();
    let id = entry.id.clone();
    let comments = entry.comments.clone().filter(|c| !c.trim().is_empty());

    view! {
        <div class="feedback-card">
            <div class="feedback-card-header">
                <Stars rating=entry.rating />
                <span class="muted">{clock::stamp(entry.created_at)}</span>
            </div>
            <dl class="feedback-meta">
                <dt>{move || i18n.t("orderNumber")}</dt>
                <dd>{entry.order_number.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{move || i18n.t("table")}</dt>
                <dd>{entry.table_number.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{move || i18n.t("amount")}</dt>
                <dd>{entry.total_amount.map(format_price).unwrap_or_else(|| "-".to_string())}</dd>
            </dl>
            <p class="feedback-comments">
                {move || comments.clone().unwrap_or_else(|| i18n.t("noComments"))}
            </p>
            <DeleteConfirmButton prompt_key="deleteFeedbackConfirm" on_confirm=move |_| on_delete.run(id.clone()) />
        </div>
    }
}
