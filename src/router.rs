//! Client-side Router
//!
//! Maps `location.pathname` + `location.search` to a [`Route`] and back.
//! Navigation goes through the History API so the page never reloads.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsValue;

use smart_menu_core::format::encode_component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Menu,
    DailyMenu,
    Orders,
    Feedback,
    Reports,
    QrCodes,
    Settings,
    CustomerMenu { table: Option<String> },
    OrderTracking { order: Option<String>, table: Option<String> },
    CustomerFeedback { order: Option<String>, table: Option<String> },
    NotFound(String),
}

/// Value of `name` in a `?a=1&b=2` query string, percent-decoded.
/// Empty values count as absent.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().into_owned()
        })
        .filter(|v| !v.is_empty())
}

impl Route {
    pub fn parse(path: &str, search: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            "/menu" => Route::Menu,
            "/daily-menu" => Route::DailyMenu,
            "/orders" => Route::Orders,
            "/feedback" => Route::Feedback,
            "/reports" => Route::Reports,
            "/qr-codes" => Route::QrCodes,
            "/settings" => Route::Settings,
            "/customer-menu" => Route::CustomerMenu {
                table: query_param(search, "table"),
            },
            "/order-tracking" => Route::OrderTracking {
                order: query_param(search, "order"),
                table: query_param(search, "table"),
            },
            "/customer-feedback" => Route::CustomerFeedback {
                order: query_param(search, "order"),
                table: query_param(search, "table"),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Path plus query string for this route
    pub fn to_url(&self) -> String {
        fn with_query(path: &str, params: &[(&str, &Option<String>)]) -> String {
            let query: Vec<String> = params
                .iter()
                .filter_map(|(k, v)| v.as_ref().map(|v| format!("{}={}", k, encode_component(v))))
                .collect();
            if query.is_empty() {
                path.to_string()
            } else {
                format!("{}?{}", path, query.join("&"))
            }
        }

        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Menu => "/menu".to_string(),
            Route::DailyMenu => "/daily-menu".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::Feedback => "/feedback".to_string(),
            Route::Reports => "/reports".to_string(),
            Route::QrCodes => "/qr-codes".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::CustomerMenu { table } => with_query("/customer-menu", &[("table", table)]),
            Route::OrderTracking { order, table } => {
                with_query("/order-tracking", &[("order", order), ("table", table)])
            }
            Route::CustomerFeedback { order, table } => {
                with_query("/customer-feedback", &[("order", order), ("table", table)])
            }
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Pages behind the login gate
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Menu
                | Route::DailyMenu
                | Route::Orders
                | Route::Feedback
                | Route::Reports
                | Route::QrCodes
                | Route::Settings
        )
    }
}

// ========================
// Browser Location
// ========================

/// Route for the current `window.location`
pub fn current() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Login;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}

/// Push `route` onto the history stack without reloading
pub fn push(route: &Route) {
    let url = route.to_url();
    let pushed = web_sys::window()
        .and_then(|w| w.history().ok())
        .map(|h| h.push_state_with_url(&JsValue::NULL, "", Some(&url)));
    if !matches!(pushed, Some(Ok(()))) {
        web_sys::console::warn_1(&format!("[ROUTER] pushState failed for {}", url).into());
    }
}

/// Replace the current history entry
pub fn replace(route: &Route) {
    let url = route.to_url();
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Full page load of `/login`, dropping all in-memory state
pub fn hard_redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// `scheme://host[:port]` of the running app, used in QR code links
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_routes() {
        assert_eq!(Route::parse("/", ""), Route::Login);
        assert_eq!(Route::parse("/login", ""), Route::Login);
        assert_eq!(Route::parse("/dashboard/", ""), Route::Dashboard);
        assert_eq!(Route::parse("/daily-menu", ""), Route::DailyMenu);
        assert_eq!(Route::parse("/qr-codes", "?x=1"), Route::QrCodes);
        assert_eq!(Route::parse("/nope", ""), Route::NotFound("/nope".into()));
    }

    #[test]
    fn test_parse_customer_routes() {
        assert_eq!(
            Route::parse("/customer-menu", "?table=t%201"),
            Route::CustomerMenu { table: Some("t 1".into()) }
        );
        assert_eq!(
            Route::parse("/customer-menu", ""),
            Route::CustomerMenu { table: None }
        );
        assert_eq!(
            Route::parse("/order-tracking", "?table=t1&order=ORD20241120093000123"),
            Route::OrderTracking {
                order: Some("ORD20241120093000123".into()),
                table: Some("t1".into()),
            }
        );
        assert_eq!(
            Route::parse("/customer-feedback", "?order=&table=t1"),
            Route::CustomerFeedback { order: None, table: Some("t1".into()) }
        );
    }

    #[test]
    fn test_to_url_round_trips_through_parse() {
        let routes = [
            Route::Orders,
            Route::CustomerMenu { table: Some("abc def".into()) },
            Route::OrderTracking { order: Some("ORD1".into()), table: None },
        ];
        for route in routes {
            let url = route.to_url();
            let (path, search) = url.split_once('?').unwrap_or((url.as_str(), ""));
            assert_eq!(Route::parse(path, search), route, "{}", url);
        }
        assert_eq!(
            Route::CustomerFeedback { order: Some("ORD1".into()), table: Some("t1".into()) }.to_url(),
            "/customer-feedback?order=ORD1&table=t1"
        );
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?a=1&b=two+words", "b"), Some("two words".into()));
        assert_eq!(query_param("?flag", "flag"), None);
        assert_eq!(query_param("", "a"), None);
    }

    #[test]
    fn test_auth_gate_routes() {
        assert!(Route::Settings.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::CustomerMenu { table: None }.requires_auth());
    }
}
