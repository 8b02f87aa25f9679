//! Customer Menu Page
//!
//! Reached by scanning a table's QR code (`/customer-menu?table=<id>`).
//! Browses the table's menu, keeps a cart on the device and places the
//! order.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use smart_menu_core::cart::Cart;
use smart_menu_core::config::WELCOME_MS;
use smart_menu_core::domain::{MenuItem, PlaceOrderRequest, TableMenu, TrackSessionRequest};
use smart_menu_core::format::format_price;
use smart_menu_core::validation::validate_checkout;

use super::menu_management::category_label;
use crate::api;
use crate::components::{Flash, FlashBanner, LanguageSelect, Modal};
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::poll::Lifetime;
use crate::router::Route;
use crate::storage;

#[component]
pub fn CustomerMenuPage(table: Option<String>) -> impl IntoView {
    let i18n = use_i18n();

    match table {
        Some(table_id) => view! { <TableMenuView table_id=table_id /> }.into_any(),
        None => view! {
            <div class="customer-page">
                <div class="alert alert-error">{move || i18n.t("noTableSelected")}</div>
            </div>
        }
        .into_any(),
    }
}

/// What the item area of the menu shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuArea {
    Loading,
    /// The menu request failed; stays until a retry succeeds
    Failed,
    Empty,
    Items,
}

fn menu_area(loading: bool, failed: bool, item_count: usize) -> MenuArea {
    if loading {
        MenuArea::Loading
    } else if failed {
        MenuArea::Failed
    } else if item_count == 0 {
        MenuArea::Empty
    } else {
        MenuArea::Items
    }
}

#[component]
fn TableMenuView(table_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let flash = Flash::new();
    let device_id = storage::device_id();

    let menu = RwSignal::new(None::<TableMenu>);
    let (loading, set_loading) = signal(true);
    let load_error = RwSignal::new(None::<String>);
    let (welcome, set_welcome) = signal(None::<&'static str>);
    let category = RwSignal::new(None::<String>);
    let cart = RwSignal::new(storage::load_cart(&table_id));
    let (cart_open, set_cart_open) = signal(false);
    let customer_name = RwSignal::new(String::new());
    let (placing, set_placing) = signal(false);

    // Item being added, with its quantity and instructions
    let adding = RwSignal::new(None::<MenuItem>);
    let quantity = RwSignal::new(1u32);
    let instructions = RwSignal::new(String::new());

    {
        let table_id = table_id.clone();
        Effect::new(move |_| cart.with(|c| storage::save_cart(&table_id, c)));
    }

    // Menu fetch; a failure stays on screen until a retry succeeds
    let load_menu = {
        let table_id = table_id.clone();
        let device_id = device_id.clone();
        Callback::new(move |_: ()| {
            let table_id = table_id.clone();
            let device_id = device_id.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api::table_menu(&table_id, &device_id).await {
                    Ok(loaded) => {
                        let summary = format!("{} items", loaded.total_items);
                        web_sys::console::log_1(
                            &format!("[CUSTOMER] Table {} menu: {}", loaded.table_id, summary).into(),
                        );
                        load_error.set(None);
                        menu.set(Some(loaded));
                    }
                    Err(e) => {
                        let line = format!("[CUSTOMER] Menu for {} failed: {}", table_id, e);
                        web_sys::console::error_1(&line.into());
                        load_error.set(Some(e.to_string()));
                    }
                }
                set_loading.set(false);
            });
        })
    };
    load_menu.run(());

    {
        let device_id = device_id.clone();
        let lifetime = Lifetime::current();
        spawn_local(async move {
            let returning = match api::customer_session(&device_id).await {
                Ok(session) => {
                    if let Some(name) = session.customer_name.filter(|n| !n.trim().is_empty()) {
                        customer_name.set(name);
                    }
                    session.is_returning_customer
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[CUSTOMER] No session: {}", e).into());
                    false
                }
            };
            set_welcome.set(Some(if returning { "customerWelcomeBack" } else { "customerWelcome" }));
            lifetime.after(WELCOME_MS, move || set_welcome.set(None));
        });
    }

    let items = Memo::new(move |_| {
        menu.with(|m| m.as_ref().map(TableMenu::available_items).unwrap_or_default())
    });

    let area = Memo::new(move |_| {
        menu_area(loading.get(), load_error.with(|e| e.is_some()), items.with(|list| list.len()))
    });

    let categories = Memo::new(move |_| {
        items.with(|list| {
            list.iter()
                .filter_map(|i| i.category.clone())
                .filter(|c| !c.trim().is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>()
        })
    });

    let shown = move || {
        let selected = category.get();
        items.with(|list| {
            list.iter()
                .filter(|i| selected.is_none() || i.category == selected)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let open_add = move |item: MenuItem| {
        quantity.set(1);
        instructions.set(String::new());
        adding.set(Some(item));
    };

    let confirm_add = move |_: leptos::ev::MouseEvent| {
        let Some(item) = adding.get_untracked() else {
            return;
        };
        let qty = quantity.get_untracked();
        let note = instructions.get_untracked();
        cart.update(|c| c.add(&item, qty, &note));
        adding.set(None);
        flash.success(i18n.t("itemAddedToCart"));
    };

    let on_place_order = {
        let table_id = table_id.clone();
        let device_id = device_id.clone();
        Callback::new(move |_: ()| {
            let name = match cart.with_untracked(|c| validate_checkout(c, &customer_name.get_untracked())) {
                Ok(name) => name,
                Err(e) => {
                    flash.error(i18n.t(e.key()));
                    return;
                }
            };
            let table_id = table_id.clone();
            let device_id = device_id.clone();
            let items = cart.with_untracked(Cart::to_order_lines);
            set_placing.set(true);
            spawn_local(async move {
                let session = TrackSessionRequest {
                    device_id: device_id.clone(),
                    table_id: table_id.clone(),
                    customer_name: Some(name.clone()),
                };
                if let Err(e) = api::track_session(&session).await {
                    web_sys::console::warn_1(&format!("[CUSTOMER] Session not recorded: {}", e).into());
                }

                let request = PlaceOrderRequest {
                    table_id: table_id.clone(),
                    device_id,
                    customer_name: name,
                    items,
                };
                match api::place_order(&request).await {
                    Ok(placed) => {
                        let line = format!("[CUSTOMER] Order {} placed", placed.order_number);
                        web_sys::console::log_1(&line.into());
                        cart.set(Cart::new());
                        storage::clear_cart(&table_id);
                        flash.success(i18n.t("orderPlaced"));
                        ctx.navigate(Route::OrderTracking {
                            order: Some(placed.order_number),
                            table: Some(table_id),
                        });
                    }
                    Err(e) => {
                        flash.error(e.to_string());
                        set_placing.set(false);
                    }
                }
            });
        })
    };

    view! {
        <div class="customer-page">
            <header class="customer-header">
                <div>
                    <h1>{move || i18n.t("menuTitle")}</h1>
                    <p class="muted">{move || menu.with(|m| m.as_ref().and_then(|m| m.table_number.clone()).unwrap_or_default())}</p>
                </div>
                <div class="customer-header-actions">
                    <LanguageSelect />
                    <button class="btn btn-primary cart-button" on:click=move |_| set_cart_open.set(true)>
                        <i class="fas fa-shopping-cart"></i>
                        " "{move || i18n.t("viewCart")}
                        <span class="badge">{move || cart.with(|c| c.item_count())}</span>
                    </button>
                </div>
            </header>

            {move || welcome.get().map(|key| view! { <div class="alert alert-info welcome">{move || i18n.t(key)}</div> })}
            <FlashBanner flash=flash />

            <nav class="category-filter">
                <button
                    class=move || if category.with(|c| c.is_none()) { "chip active" } else { "chip" }
                    on:click=move |_| category.set(None)
                >
                    {move || i18n.t("allItems")}
                </button>
                {move || categories.get().into_iter().map(|c| {
                    let value = c.clone();
                    let active = c.clone();
                    view! {
                        <button
                            class=move || if category.with(|sel| sel.as_deref() == Some(active.as_str())) { "chip active" } else { "chip" }
                            on:click=move |_| category.set(Some(value.clone()))
                        >
                            {c}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <Show when=move || area.get() == MenuArea::Loading>
                <p class="loading">{move || i18n.t("loadingMenu")}</p>
            </Show>
            <Show when=move || area.get() == MenuArea::Failed>
                <div class="alert alert-error menu-load-error">
                    <p><strong>{move || i18n.t("menuLoadFailed")}</strong></p>
                    <p class="muted">{move || load_error.get().unwrap_or_default()}</p>
                    <button class="btn btn-primary" on:click=move |_| load_menu.run(())>
                        {move || i18n.t("retry")}
                    </button>
                </div>
            </Show>
            <Show when=move || area.get() == MenuArea::Empty>
                <p class="empty">{move || i18n.t("noMenuItems")}</p>
            </Show>
            <Show when=move || area.get() == MenuArea::Items>
                <div class="menu-grid">
                    {move || shown().into_iter().map(|item| {
                        let label_item = item.clone();
                        let add_item = item.clone();
                        view! {
                            <div class="menu-card">
                                {item.image_url.clone().map(|src| view! { <img src=src alt=item.name.clone() /> })}
                                <div class="menu-card-body">
                                    <h3>{item.name.clone()}</h3>
                                    <span class="muted">{move || category_label(i18n, &label_item)}</span>
                                    <p>{item.description.clone().unwrap_or_default()}</p>
                                    <div class="menu-card-footer">
                                        <strong class="price">{format_price(item.price)}</strong>
                                        <button class="btn btn-primary btn-small" on:click=move |_| open_add(add_item.clone())>
                                            {move || i18n.t("addToCart")}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || adding.with(|a| a.is_some())>
                <Modal
                    title=Signal::derive(move || adding.with(|a| a.as_ref().map(|i| i.name.clone()).unwrap_or_default()))
                    on_close=move |_| adding.set(None)
                >
                    <div class="form-group">
                        <label>{move || i18n.t("quantity")}</label>
                        <div class="quantity-control">
                            <button class="btn btn-small" on:click=move |_| quantity.update(|q| *q = (*q).saturating_sub(1).max(1))>"−"</button>
                            <span>{move || quantity.get()}</span>
                            <button class="btn btn-small" on:click=move |_| quantity.update(|q| *q += 1)>"+"</button>
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{move || i18n.t("specialInstructions")}</label>
                        <textarea
                            placeholder=move || i18n.t("specialInstructionsPlaceholder")
                            prop:value=instructions
                            on:input=move |ev| instructions.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <p class="muted">{move || {
                        let price = adding.with(|a| a.as_ref().map(|i| i.price).unwrap_or(0.0));
                        format!("{}: {}", i18n.t("subtotal"), format_price(price * quantity.get() as f64))
                    }}</p>
                    <button class="btn btn-primary btn-block" on:click=confirm_add>
                        {move || i18n.t("addToCart")}
                    </button>
                </Modal>
            </Show>

            <Show when=move || cart_open.get()>
                <div class="drawer-backdrop" on:click=move |_| set_cart_open.set(false)></div>
                <aside class="cart-drawer">
                    <div class="drawer-header">
                        <h2>{move || i18n.t("cart")}</h2>
                        <button class="modal-close" aria-label=move || i18n.t("close") on:click=move |_| set_cart_open.set(false)>"×"</button>
                    </div>
                    <Show
                        when=move || !cart.with(|c| c.is_empty())
                        fallback=move || view! { <p class="empty">{move || i18n.t("cartEmpty")}</p> }
                    >
                        <ul class="cart-lines">
                            {move || cart.get().lines().iter().cloned().enumerate().map(|(index, line)| view! {
                                <li class="cart-line">
                                    <div>
                                        <strong>{line.name.clone()}</strong>
                                        {(!line.special_instructions.is_empty()).then(|| view! {
                                            <small class="muted">{line.special_instructions.clone()}</small>
                                        })}
                                    </div>
                                    <input
                                        type="number"
                                        min="0"
                                        class="quantity-input"
                                        prop:value=line.quantity.to_string()
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                                            cart.update(|c| c.set_quantity(index, value));
                                        }
                                    />
                                    <span>{format_price(line.line_total())}</span>
                                    <button class="btn btn-link" on:click=move |_| cart.update(|c| c.remove(index))>
                                        {move || i18n.t("remove")}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                        <p class="cart-total">
                            <strong>{move || format!("{}: {}", i18n.t("total"), format_price(cart.with(|c| c.total())))}</strong>
                        </p>
                        <div class="form-group">
                            <label>{move || i18n.t("yourName")}</label>
                            <input
                                type="text"
                                placeholder=move || i18n.t("yourNamePlaceholder")
                                prop:value=customer_name
                                on:input=move |ev| customer_name.set(event_target_value(&ev))
                            />
                        </div>
                        <button class="btn btn-primary btn-block" disabled=placing on:click=move |_| on_place_order.run(())>
                            {move || if placing.get() { i18n.t("placingOrder") } else { i18n.t("placeOrder") }}
                        </button>
                    </Show>
                </aside>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_is_not_reported_as_empty_menu() {
        assert_eq!(menu_area(false, true, 0), MenuArea::Failed);
        assert_eq!(menu_area(false, false, 0), MenuArea::Empty);
    }

    #[test]
    fn test_menu_area_precedence() {
        assert_eq!(menu_area(true, true, 0), MenuArea::Loading);
        assert_eq!(menu_area(false, true, 4), MenuArea::Failed);
        assert_eq!(menu_area(false, false, 4), MenuArea::Items);
    }
}
