//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::router::{self, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    /// Mobile sidebar open - read
    pub sidebar_open: ReadSignal<bool>,
    /// Mobile sidebar open - write
    set_sidebar_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        sidebar_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            sidebar_open: sidebar_open.0,
            set_sidebar_open: sidebar_open.1,
        }
    }

    /// Go to `route`, adding a history entry
    pub fn navigate(&self, route: Route) {
        web_sys::console::log_1(&format!("[ROUTER] -> {}", route.to_url()).into());
        router::push(&route);
        self.set_sidebar_open.set(false);
        self.set_route.set(route);
    }

    /// Go to `route` in place of the current entry (redirects)
    pub fn redirect(&self, route: Route) {
        router::replace(&route);
        self.set_route.set(route);
    }

    /// Re-read the browser location after back/forward
    pub fn sync_with_location(&self) {
        self.set_route.set(router::current());
    }

    pub fn toggle_sidebar(&self) {
        self.set_sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar_open.set(false);
    }
}

/// Get the app context, set up by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
