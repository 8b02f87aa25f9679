//! Star Rating
//!
//! `StarRating` is the clickable 1-5 input on the customer feedback page;
//! `Stars` renders a fixed rating.

use leptos::prelude::*;
use smart_menu_core::format::stars;

#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<u8>,
    #[prop(into)] on_rate: Callback<u8>,
) -> impl IntoView {
    let (hover, set_hover) = signal(0u8);

    view! {
        <div class="star-rating" on:mouseleave=move |_| set_hover.set(0)>
            {(1u8..=5)
                .map(|n| view! {
                    <button
                        type="button"
                        class=move || {
                            let shown = if hover.get() > 0 { hover.get() } else { rating.get() };
                            if n <= shown { "star filled" } else { "star" }
                        }
                        aria-label=format!("{} / 5", n)
                        on:mouseenter=move |_| set_hover.set(n)
                        on:click=move |_| on_rate.run(n)
                    >
                        "★"
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Stars(rating: u8) -> impl IntoView {
    view! { <span class="stars" title=format!("{}/5", rating)>{stars(rating)}</span> }
}
