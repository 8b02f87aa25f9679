//! Dashboard Endpoints

use smart_menu_core::domain::{DashboardStats, RecentFeedback, RecentOrder, TopItem};

use super::{get, ApiError};

pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    get("/dashboard/stats").await
}

pub async fn recent_orders() -> Result<Vec<RecentOrder>, ApiError> {
    get("/dashboard/recent-orders").await
}

pub async fn top_items() -> Result<Vec<TopItem>, ApiError> {
    get("/dashboard/top-items").await
}

pub async fn recent_feedback() -> Result<Vec<RecentFeedback>, ApiError> {
    get("/dashboard/recent-feedback").await
}
