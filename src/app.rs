//! Smart Menu Frontend App
//!
//! Provides the shared state and renders the page for the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::AppContext;
use crate::pages::*;
use crate::router::{self, Route};
use crate::store::{store_is_logged_in, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restore());
    provide_context(store);

    let ctx = AppContext::new(signal(router::current()), signal(false));
    provide_context(ctx);

    // Back/forward buttons; the app lives as long as the page
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_with_location());

    // Only flips on login/logout, so badge updates never rebuild the page
    let logged_in = Memo::new(move |_| store_is_logged_in(&store));

    // Admin pages need a session: bounce to the login form, keeping the URL honest
    Effect::new(move |_| {
        let route = ctx.route.get();
        if route.requires_auth() && !logged_in.get() {
            web_sys::console::log_1(&format!("[AUTH] {} needs a session", route.to_url()).into());
            ctx.redirect(Route::Login);
        }
    });

    web_sys::console::log_1(&format!("[APP] Started at {}", ctx.route.get_untracked().to_url()).into());

    view! {
        {move || {
            let route = ctx.route.get();
            if route.requires_auth() && !logged_in.get() {
                return view! { <LoginPage /> }.into_any();
            }
            match route {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Register => view! { <RegisterPage /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                Route::Menu => view! { <MenuManagementPage /> }.into_any(),
                Route::DailyMenu => view! { <DailyMenuPage /> }.into_any(),
                Route::Orders => view! { <OrdersPage /> }.into_any(),
                Route::Feedback => view! { <FeedbackAdminPage /> }.into_any(),
                Route::Reports => view! { <ReportsPage /> }.into_any(),
                Route::QrCodes => view! { <QrCodesPage /> }.into_any(),
                Route::Settings => view! { <SettingsPage /> }.into_any(),
                Route::CustomerMenu { table } => view! { <CustomerMenuPage table=table /> }.into_any(),
                Route::OrderTracking { order, table } => {
                    view! { <OrderTrackingPage order=order table=table /> }.into_any()
                }
                Route::CustomerFeedback { order, table } => {
                    view! { <CustomerFeedbackPage order=order table=table /> }.into_any()
                }
                Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            }
        }}
    }
}
