//! Menu Management Page
//!
//! Paginated table of menu items with an add/edit/copy modal, photo upload,
//! availability toggle and inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

use smart_menu_core::config::PAGE_SIZE;
use smart_menu_core::domain::{remove_by_id, upsert, Category, MenuItem};
use smart_menu_core::format::format_price;
use smart_menu_core::pagination::Paginator;
use smart_menu_core::validation::{validate_image, MenuItemForm};

use crate::api;
use crate::components::{AdminLayout, DeleteConfirmButton, Flash, FlashBanner, Modal, Pager};
use crate::i18n::{use_i18n, I18n};
use crate::store::{store_session, use_app_store};

/// Category label: translated for the built-in ones, verbatim otherwise
pub fn category_label(i18n: I18n, item: &MenuItem) -> String {
    match item.known_category() {
        Some(c) => i18n.t(c.label_key()),
        None => item.category.clone().unwrap_or_else(|| "-".to_string()),
    }
}

/// Reads `file` into a `data:` URL
async fn read_data_url(file: &File) -> Result<String, String> {
    let js_err = |e: JsValue| e.as_string().unwrap_or_else(|| "Could not read file".to_string());
    let reader = FileReader::new().map_err(js_err)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let source = reader.clone();
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &source.result().unwrap_or(JsValue::NULL));
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("Could not read file"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    value.as_string().ok_or_else(|| "Could not read file".to_string())
}

#[component]
pub fn MenuManagementPage() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_app_store();
    let flash = Flash::new();

    let items = RwSignal::new(Vec::<MenuItem>::new());
    let pager = RwSignal::new(Paginator::new(PAGE_SIZE));
    let (loading, set_loading) = signal(true);
    // Open modal state; `None` means closed
    let form = RwSignal::new(None::<MenuItemForm>);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match api::list_menu_items().await {
            Ok(list) => {
                web_sys::console::log_1(&format!("[MENU] Loaded {} items", list.len()).into());
                items.set(list);
            }
            Err(e) => flash.error(e.to_string()),
        }
        set_loading.set(false);
    });

    Effect::new(move |_| {
        let total = items.with(|list| list.len());
        pager.update(|p| p.set_total(total));
    });

    let visible = move || {
        let p = pager.get();
        items.with(|list| p.slice(list).to_vec())
    };

    let on_toggle = move |id: String| {
        spawn_local(async move {
            match api::toggle_menu_item(&id).await {
                Ok(item) => items.update(|list| upsert(list, item)),
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_menu_item(&id).await {
                Ok(()) => {
                    items.update(|list| {
                        remove_by_id(list, &id);
                    });
                    flash.success(i18n.t("itemDeleted"));
                }
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let on_image = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = validate_image(file.size() as u64, &file.type_()) {
            input.set_value("");
            flash.error(i18n.t(e.key()));
            return;
        }
        spawn_local(async move {
            match read_data_url(&file).await {
                Ok(url) => form.update(|f| {
                    if let Some(f) = f {
                        f.image = Some(url);
                    }
                }),
                Err(e) => flash.error(e),
            }
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else {
            return;
        };
        let user_id = store_session(&store).map(|u| u.id).unwrap_or_default();
        let payload = match current.validate(&user_id) {
            Ok(payload) => payload,
            Err(e) => {
                flash.error(i18n.t(e.key()));
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_menu_item(id, &payload).await,
                None => api::create_menu_item(&payload).await,
            };
            match result {
                Ok(item) => {
                    web_sys::console::log_1(&format!("[MENU] Saved {}", item.name).into());
                    items.update(|list| upsert(list, item));
                    form.set(None);
                    flash.success(i18n.t(if current.is_edit() { "itemUpdated" } else { "itemAdded" }));
                }
                Err(e) => flash.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    // The photo that will be saved with the item
    let preview = move || form.with(|f| f.as_ref().and_then(|f| f.image.clone()));

    view! {
        <AdminLayout title_key="menuItems" subtitle_key="menuSubtitle">
            <FlashBanner flash=flash />
            <div class="toolbar">
                <button class="btn btn-primary" on:click=move |_| form.set(Some(MenuItemForm::default()))>
                    <i class="fas fa-plus"></i>" "{move || i18n.t("addMenuItem")}
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loading")}</p> }
            >
                <Show
                    when=move || !items.with(|list| list.is_empty())
                    fallback=move || view! { <p class="empty">{move || i18n.t("noData")}</p> }
                >
                    <table class="data-table">
                        <thead><tr>
                            <th>{move || i18n.t("photo")}</th>
                            <th>{move || i18n.t("name")}</th>
                            <th>{move || i18n.t("category")}</th>
                            <th>{move || i18n.t("price")}</th>
                            <th>{move || i18n.t("stock")}</th>
                            <th>{move || i18n.t("status")}</th>
                            <th>{move || i18n.t("actions")}</th>
                        </tr></thead>
                        <tbody>
                            {move || visible().into_iter().map(|item| {
                                    let edit_item = item.clone();
                                    let copy_item = item.clone();
                                    let toggle_id = item.id.clone();
                                    let delete_id = item.id.clone();
                                    let available = item.available;
                                    let label_item = item.clone();
                                    view! {
                                        <tr>
                                            <td>{item.image_url.clone().map(|src| view! { <img class="thumb" src=src alt="" /> })}</td>
                                            <td>
                                                <strong>{item.name.clone()}</strong>
                                                <small class="muted">{item.description.clone().unwrap_or_default()}</small>
                                            </td>
                                            <td>{move || category_label(i18n, &label_item)}</td>
                                            <td>{format_price(item.price)}</td>
                                            <td>{item.stock.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <button
                                                    class=if available { "status-toggle on" } else { "status-toggle off" }
                                                    on:click=move |_| on_toggle(toggle_id.clone())
                                                >
                                                    {move || i18n.t(if available { "available" } else { "notAvailable" })}
                                                </button>
                                            </td>
                                            <td class="actions">
                                                <button class="btn btn-small" on:click=move |_| form.set(Some(MenuItemForm::from_item(&edit_item)))>
                                                    {move || i18n.t("edit")}
                                                </button>
                                                <button class="btn btn-small" on:click=move |_| form.set(Some(MenuItemForm::copy_of(&copy_item)))>
                                                    {move || i18n.t("copy")}
                                                </button>
                                                <DeleteConfirmButton
                                                    prompt_key="deleteConfirm"
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

            <Show when=move || form.with(|f| f.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        let editing = form.with(|f| f.as_ref().is_some_and(|f| f.is_edit()));
                        i18n.t(if editing { "editMenuItem" } else { "addMenuItem" })
                    })
                    on_close=move |_| form.set(None)
                >
                    <form class="modal-form" on:submit=on_save>
                        <div class="form-group">
                            <label>{move || i18n.t("nameLabel")}</label>
                            <input
                                type="text"
                                placeholder=move || i18n.t("namePlaceholder")
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default())
                                on:input=move |ev| form.update(|f| if let Some(f) = f { f.name = event_target_value(&ev) })
                            />
                        </div>
                        <div class="form-group">
                            <label>{move || i18n.t("descriptionLabel")}</label>
                            <textarea
                                placeholder=move || i18n.t("descriptionPlaceholder")
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.description.clone()).unwrap_or_default())
                                on:input=move |ev| form.update(|f| if let Some(f) = f { f.description = event_target_value(&ev) })
                            ></textarea>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>{move || i18n.t("priceLabel")}</label>
                                <input
                                    type="number"
                                    min="0"
                                    step="any"
                                    placeholder=move || i18n.t("pricePlaceholder")
                                    prop:value=move || form.with(|f| f.as_ref().map(|f| f.price.clone()).unwrap_or_default())
                                    on:input=move |ev| form.update(|f| if let Some(f) = f { f.price = event_target_value(&ev) })
                                />
                            </div>
                            <div class="form-group">
                                <label>{move || i18n.t("stockLabel")}</label>
                                <input
                                    type="number"
                                    min="0"
                                    placeholder=move || i18n.t("stockPlaceholder")
                                    prop:value=move || form.with(|f| f.as_ref().map(|f| f.stock.clone()).unwrap_or_default())
                                    on:input=move |ev| form.update(|f| if let Some(f) = f { f.stock = event_target_value(&ev) })
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>{move || i18n.t("categoryLabel")}</label>
                            <select
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.category.clone()).unwrap_or_default())
                                on:change=move |ev| form.update(|f| if let Some(f) = f { f.category = event_target_value(&ev) })
                            >
                                <option value="">{move || i18n.t("selectCategory")}</option>
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! { <option value=c.as_str()>{move || i18n.t(c.label_key())}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>{move || i18n.t("photoLabel")}</label>
                            <input type="file" accept="image/*" on:change=on_image />
                            <small class="muted">{move || i18n.t("fileHint")}</small>
                            {move || preview().map(|src| view! { <img class="image-preview" src=src alt="" /> })}
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
                                {move || {
                                    let editing = form.with(|f| f.as_ref().is_some_and(|f| f.is_edit()));
                                    i18n.t(if editing { "updateItem" } else { "addItem" })
                                }}
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </AdminLayout>
    }
}
