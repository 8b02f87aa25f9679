//! QR Codes Page
//!
//! Tables and rooms with the QR code that opens their customer menu.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::domain::{remove_by_id, upsert, Table};
use smart_menu_core::format::qr_code_image_url;
use smart_menu_core::validation::{TableForm, ValidationError};

use crate::api;
use crate::components::{AdminLayout, DeleteConfirmButton, Flash, FlashBanner};
use crate::i18n::use_i18n;
use crate::router;

#[component]
pub fn QrCodesPage() -> impl IntoView {
    let i18n = use_i18n();
    let flash = Flash::new();

    let tables = RwSignal::new(Vec::<Table>::new());
    let (loading, set_loading) = signal(true);
    let form = RwSignal::new(TableForm::default());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (saving, set_saving) = signal(false);
    let selected = RwSignal::new(HashSet::<String>::new());

    spawn_local(async move {
        match api::list_tables().await {
            Ok(list) => {
                web_sys::console::log_1(&format!("[QR] Loaded {} tables", list.len()).into());
                tables.set(list);
            }
            Err(e) => flash.error(e.to_string()),
        }
        set_loading.set(false);
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(problems) => {
                errors.set(problems);
                return;
            }
        };
        errors.set(Vec::new());
        set_saving.set(true);
        spawn_local(async move {
            match api::create_table(&request).await {
                Ok(table) => {
                    tables.update(|list| upsert(list, table));
                    form.set(TableForm::default());
                    flash.success(i18n.t("tableAdded"));
                }
                Err(e) => flash.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_table(&id).await {
                Ok(()) => {
                    tables.update(|list| {
                        remove_by_id(list, &id);
                    });
                    selected.update(|s| {
                        s.remove(&id);
                    });
                    flash.success(i18n.t("tableDeleted"));
                }
                Err(e) => flash.error(e.to_string()),
            }
        });
    };

    let all_selected = move || {
        let total = tables.with(|list| list.len());
        total > 0 && selected.with(|s| s.len()) == total
    };

    let toggle_all = move |_: leptos::ev::Event| {
        if all_selected() {
            selected.set(HashSet::new());
        } else {
            selected.set(tables.with(|list| list.iter().map(|t| t.id.clone()).collect()));
        }
    };

    // Unselected cards carry `no-print`, so the browser dialog only prints the chosen codes
    let print_selected = move |_: leptos::ev::MouseEvent| {
        if selected.with(|s| s.is_empty()) {
            flash.error(i18n.t("noTablesSelected"));
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                web_sys::console::error_1(&e);
            }
        }
    };

    view! {
        <AdminLayout title_key="qrCodes" subtitle_key="qrCodesSubtitle">
            <FlashBanner flash=flash />

            <section class="card no-print">
                <h2>{move || i18n.t("addTable")}</h2>
                <form class="inline-form" on:submit=on_add>
                    <input
                        type="text"
                        maxlength="50"
                        placeholder=move || i18n.t("tableNumberPlaceholder")
                        prop:value=move || form.with(|f| f.table_number.clone())
                        on:input=move |ev| form.update(|f| f.table_number = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        maxlength="100"
                        placeholder=move || i18n.t("locationPlaceholder")
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || if form.with(|f| f.is_room) { "room" } else { "table" }
                        on:change=move |ev| form.update(|f| f.is_room = event_target_value(&ev) == "room")
                    >
                        <option value="table">{move || i18n.t("tableTypeTable")}</option>
                        <option value="room">{move || i18n.t("tableTypeRoom")}</option>
                    </select>
                    <button type="submit" class="btn btn-primary" disabled=saving>
                        <i class="fas fa-plus"></i>" "{move || i18n.t("addTable")}
                    </button>
                </form>
                <Show when=move || !errors.with(|e| e.is_empty())>
                    <ul class="form-errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{move || i18n.t(e.key())}</li> }).collect_view()}
                    </ul>
                </Show>
            </section>

            <div class="toolbar no-print">
                <label class="checkbox">
                    <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                    {move || i18n.t("selectAll")}
                </label>
                <button class="btn btn-secondary" on:click=print_selected>
                    <i class="fas fa-print"></i>" "{move || i18n.t("printSelected")}
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="loading">{move || i18n.t("loadingTables")}</p> }
            >
                <Show
                    when=move || !tables.with(|list| list.is_empty())
                    fallback=move || view! { <p class="empty">{move || i18n.t("noTables")}</p> }
                >
                    <div class="qr-grid">
                        {move || {
                                let origin = router::origin();
                                tables.get().into_iter().map(|table| {
                                    let menu_url = table.menu_url(&origin);
                                    let qr_src = qr_code_image_url(&menu_url);
                                    let id = table.id.clone();
                                    let check_id = table.id.clone();
                                    let toggle_id = table.id.clone();
                                    let delete_id = table.id.clone();
                                    let kind = table.kind_key();
                                    view! {
                                        <div class=move || {
                                            if selected.with(|s| s.contains(&id)) { "qr-card selected" } else { "qr-card no-print" }
                                        }>
                                            <label class="checkbox no-print">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || selected.with(|s| s.contains(&check_id))
                                                    on:change=move |ev| {
                                                        let on = event_target_checked(&ev);
                                                        selected.update(|s| {
                                                            if on {
                                                                s.insert(toggle_id.clone());
                                                            } else {
                                                                s.remove(&toggle_id);
                                                            }
                                                        });
                                                    }
                                                />
                                            </label>
                                            <h3>{table.table_number.clone()}</h3>
                                            <span class="muted">{move || i18n.t(kind)}</span>
                                            {table.location.clone().filter(|l| !l.is_empty()).map(|l| view! { <p class="muted">{l}</p> })}
                                            <img class="qr-image" src=qr_src alt=table.table_number.clone() />
                                            <p class="qr-caption">{move || i18n.t("scanToOrder")}</p>
                                            <div class="actions no-print">
                                                <a class="btn btn-small" href=menu_url target="_blank" rel="noopener">
                                                    {move || i18n.t("openMenu")}
                                                </a>
                                                <DeleteConfirmButton
                                                    prompt_key="deleteTableConfirm"
                                                    on_confirm=move |_| on_delete(delete_id.clone())
                                                />
                                            </div>
                                        </div>
                                    }
                                }).collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </AdminLayout>
    }
}
