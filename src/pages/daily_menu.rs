//! Daily Menu Page
//!
//! Picks menu items for a given date, optionally at a special price.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::domain::{remove_by_id, upsert, DailyMenuEntry, MenuItem};
use smart_menu_core::format::format_price;
use smart_menu_core::validation::DailyMenuForm;

use crate::api;
use crate::clock;
use crate::components::{AdminLayout, DeleteConfirmButton, Flash, FlashBanner, Modal};
use crate::i18n::use_i18n;

#[component]
pub fn DailyMenuPage() -> impl IntoView {
    let i18n = use_i18n();
    let flash = Flash::new();

    let (date, set_date) = signal(clock::today());
    let entries = RwSignal::new(Vec::<DailyMenuEntry>::new());
    let menu_items = RwSignal::new(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);
    let form = RwSignal::new(None::<DailyMenuForm>);
    let (saving, set_saving) = signal(false);

    // Item choices for the modal
    spawn_local(async move {
        match api::list_menu_items().await {
            Ok(list) => menu_items.set(list),
            Err(e) => flash.error(e.to_string()),
        }
    });

    Effect::new(move |_| {
        let day = date.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_daily_menu(day).await {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[DAILY] {} entries for {}", list.len(), day).into());
                    entries.set(list);
                }
                Err(e) => {
                    entries.set(Vec::new());
                    flash.error(e.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let on_toggle = move |id: String| {
        spawn_local(async move {
            match api::toggle_daily_menu_entry(&id).await {
                Ok(entry) => entries.update(|list| upsert(list, entry)),
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let on_remove = move |id: String| {
        spawn_local(async move {
            match api::delete_daily_menu_entry(&id).await {
                Ok(()) => {
                    entries.update(|list| {
                        remove_by_id(list, &id);
                    });
                    flash.success(i18n.t("itemRemovedFromDailyMenu"));
                }
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else {
            return;
        };
        let payload = match current.validate(date.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                flash.error(i18n.t(e.key()));
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_daily_menu_entry(id, &payload).await,
                None => api::create_daily_menu_entry(&payload).await,
            };
            match result {
                Ok(entry) => {
                    entries.update(|list| upsert(list, entry));
                    form.set(None);
                    flash.success(i18n.t(if current.id.is_some() {
                        "itemUpdatedInDailyMenu"
                    } else {
                        "itemAddedToDailyMenu"
                    }));
                }
                Err(e) => flash.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <AdminLayout title_key="dailyMenu" subtitle_key="dailyMenuSubtitle">
            <FlashBanner flash=flash />
            <div class="toolbar">
                <label class="inline-field">
                    {move || i18n.t("selectDate")}
                    <input
                        type="date"
                        prop:value=move || clock::date_input_value(date.get())
                        on:change=move |ev| {
                            if let Some(day) = clock::parse_date_input(&event_target_value(&ev)) {
                                set_date.set(day);
                            }
                        }
                    />
                </label>
                <button class="btn btn-primary" on:click=move |_| form.set(Some(DailyMenuForm::default()))>
                    <i class="fas fa-plus"></i>" "{move || i18n.t("addToDailyMenu")}
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loading")}</p> }
            >
                <Show
                    when=move || !entries.with(|list| list.is_empty())
                    fallback=move || view! { <p class="empty">{move || i18n.t("noDailyMenuItems")}</p> }
                >
                    <div class="daily-grid">
                        {move || entries.get().into_iter().map(|entry| {
                            let edit = DailyMenuForm::from_entry(&entry);
                            let toggle_id = entry.id.clone();
                            let remove_id = entry.id.clone();
                            let available = entry.available;
                            view! {
                                <div class=if available { "daily-card" } else { "daily-card unavailable" }>
                                    {entry.image_url.clone().map(|src| view! { <img src=src alt="" /> })}
                                    <h3>{entry.item_name.clone()}</h3>
                                    <p class="muted">{entry.category.clone().unwrap_or_default()}</p>
                                    <p class="price">
                                        {entry.has_discount().then(|| view! {
                                            <s class="original-price">{format_price(entry.original_price)}</s>
                                        })}
                                        " "{format_price(entry.effective_price())}
                                    </p>
                                    <div class="actions">
                                        <button
                                            class=if available { "status-toggle on" } else { "status-toggle off" }
                                            on:click=move |_| on_toggle(toggle_id.clone())
                                        >
                                            {move || i18n.t(if available { "available" } else { "notAvailable" })}
                                        </button>
                                        <button class="btn btn-small" on:click=move |_| form.set(Some(edit.clone()))>
                                            {move || i18n.t("edit")}
                                        </button>
                                        <DeleteConfirmButton
                                            prompt_key="removeDailyMenuConfirm"
                                            on_confirm=move |_| on_remove(remove_id.clone())
                                        />
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </Show>

            <Show when=move || form.with(|f| f.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        let editing = form.with(|f| f.as_ref().is_some_and(|f| f.id.is_some()));
                        i18n.t(if editing { "editDailyMenuItem" } else { "addToDailyMenu" })
                    })
                    on_close=move |_| form.set(None)
                >
                    <form class="modal-form" on:submit=on_save>
                        <div class="form-group">
                            <label>{move || i18n.t("menuItem")}</label>
                            <select
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.menu_item_id.clone()).unwrap_or_default())
                                on:change=move |ev| form.update(|f| if let Some(f) = f { f.menu_item_id = event_target_value(&ev) })
                            >
                                <option value="">{move || i18n.t("selectItem")}</option>
                                {move || menu_items.get().into_iter().map(|item| view! {
                                    <option value=item.id.clone()>{format!("{} ({})", item.name, format_price(item.price))}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>{move || i18n.t("specialPriceOptional")}</label>
                            <input
                                type="number"
                                min="0"
                                step="any"
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.special_price.clone()).unwrap_or_default())
                                on:input=move |ev| form.update(|f| if let Some(f) = f { f.special_price = event_target_value(&ev) })
                            />
                        </div>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.available))
                                on:change=move |ev| form.update(|f| if let Some(f) = f { f.available = event_target_checked(&ev) })
                            />
                            {move || i18n.t("availableLabel")}
                        </label>
                        <div class="modal-actions">
                            <button type="button" class="btn btn-secondary" on:click=move |_| form.set(None)>
                                {move || i18n.t("cancel")}
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=saving>
                                {move || i18n.t("save")}
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </AdminLayout>
    }
}
