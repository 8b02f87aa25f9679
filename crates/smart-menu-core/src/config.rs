//! Client Configuration
//!
//! Backend location and every timing constant the UI relies on.

/// Backend used when neither the build nor the user overrides it
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Rows per page on paginated admin lists
pub const PAGE_SIZE: usize = 10;

/// Sidebar pending-orders badge refresh
pub const PENDING_POLL_MS: u32 = 30_000;
/// Customer order tracking refresh
pub const TRACKING_POLL_MS: u32 = 10_000;
/// Success/error banners clear after this long
pub const FLASH_MS: u32 = 3_000;
/// Returning-customer greeting on the customer menu
pub const WELCOME_MS: u32 = 5_000;
pub const LOGIN_REDIRECT_MS: u32 = 1_000;
pub const REGISTER_REDIRECT_MS: u32 = 2_000;
/// Delay before a customer returns to the menu after leaving feedback
pub const FEEDBACK_REDIRECT_MS: u32 = 3_000;

/// Trims whitespace and trailing slashes. Empty input means "no override".
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First usable base URL out of the stored override and the build-time value
pub fn resolve_base_url(stored: Option<&str>, build_time: Option<&str>) -> String {
    stored
        .and_then(normalize_base_url)
        .or_else(|| build_time.and_then(normalize_base_url))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("  https://api.example.com/api/ "),
            Some("https://api.example.com/api".into())
        );
        assert_eq!(normalize_base_url("   "), None);
    }

    #[test]
    fn test_resolve_order() {
        assert_eq!(resolve_base_url(Some("http://a/api"), Some("http://b/api")), "http://a/api");
        assert_eq!(resolve_base_url(Some(""), Some("http://b/api/")), "http://b/api");
        assert_eq!(resolve_base_url(None, None), DEFAULT_API_BASE_URL);
    }
}
