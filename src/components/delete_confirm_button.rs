//! Delete Confirm Button Component
//!
//! Inline delete confirmation: a delete button that turns into a
//! confirm/cancel pair.

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Inline delete confirmation button
///
/// # Arguments
/// * `prompt_key` - i18n key of the question shown while confirming
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt_key: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="btn btn-danger btn-small"
                    disabled=move || disabled.get().unwrap_or(false)
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    {move || i18n.t("delete")}
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{
                    let key = prompt_key.clone();
                    move || i18n.t(&key)
                }</span>
                <button
                    class="btn btn-danger btn-small"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    {move || i18n.t("confirm")}
                </button>
                <button
                    class="btn btn-secondary btn-small"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    {move || i18n.t("cancel")}
                </button>
            </span>
        </Show>
    }
}
