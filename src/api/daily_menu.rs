//! Daily Menu Endpoints
//!
//! Entries are scoped to a calendar date (`YYYY-MM-DD`).

use chrono::NaiveDate;
use smart_menu_core::domain::{DailyMenuEntry, DailyMenuPayload};

use super::{delete, get, patch, post, put, segment, ApiError};

pub async fn list_daily_menu(date: NaiveDate) -> Result<Vec<DailyMenuEntry>, ApiError> {
    get(&format!("/daily-menu?date={}", date.format("%Y-%m-%d"))).await
}

pub async fn create_daily_menu_entry(
    payload: &DailyMenuPayload,
) -> Result<DailyMenuEntry, ApiError> {
    post("/daily-menu", payload).await
}

pub async fn update_daily_menu_entry(
    id: &str,
    payload: &DailyMenuPayload,
) -> Result<DailyMenuEntry, ApiError> {
    put(&format!("/daily-menu/{}", segment(id)), payload).await
}

pub async fn toggle_daily_menu_entry(id: &str) -> Result<DailyMenuEntry, ApiError> {
    patch(&format!("/daily-menu/{}/toggle", segment(id))).await
}

pub async fn delete_daily_menu_entry(id: &str) -> Result<(), ApiError> {
    delete(&format!("/daily-menu/{}", segment(id))).await
}
