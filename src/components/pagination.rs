//! Pager control for paginated tables.

use leptos::prelude::*;
use smart_menu_core::pagination::Paginator;

use crate::i18n::use_i18n;

const WINDOW: usize = 5;

#[component]
pub fn Pager(
    #[prop(into)] paginator: Signal<Paginator>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Show when=move || (paginator.get().total_pages() > 1)>
            <div class="pagination">
                <span class="pagination-info">{move || {
                    let p = paginator.get();
                    let (first, last) = p.showing_range();
                    format!(
                        "{} {} {} {} {} {}",
                        i18n.t("showing"), first, i18n.t("to"), last, i18n.t("of"), p.total_items
                    )
                }}</span>
                <div class="pagination-controls">
                    <button
                        class="btn btn-secondary btn-small"
                        disabled=move || !paginator.get().has_prev()
                        on:click=move |_| on_page.run(paginator.get_untracked().page.saturating_sub(1))
                    >
                        {move || i18n.t("previous")}
                    </button>
                    {move || {
                        let p = paginator.get();
                        p.window(WINDOW)
                            .into_iter()
                            .map(|n| view! {
                                <button
                                    class=if n == p.page { "btn btn-small page-number active" } else { "btn btn-small page-number" }
                                    on:click=move |_| on_page.run(n)
                                >
                                    {n}
                                </button>
                            })
                            .collect_view()
                    }}
                    <button
                        class="btn btn-secondary btn-small"
                        disabled=move || !paginator.get().has_next()
                        on:click=move |_| on_page.run(paginator.get_untracked().page + 1)
                    >
                        {move || i18n.t("next")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
