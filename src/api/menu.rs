//! Menu Item Endpoints

use smart_menu_core::domain::{MenuItem, MenuItemPayload};

use super::{delete, get, patch, post, put, segment, ApiError};

pub async fn list_menu_items() -> Result<Vec<MenuItem>, ApiError> {
    get("/menu-items").await
}

pub async fn create_menu_item(payload: &MenuItemPayload) -> Result<MenuItem, ApiError> {
    post("/menu-items", payload).await
}

pub async fn update_menu_item(id: &str, payload: &MenuItemPayload) -> Result<MenuItem, ApiError> {
    put(&format!("/menu-items/{}", segment(id)), payload).await
}

/// Flips availability server-side and returns the updated item
pub async fn toggle_menu_item(id: &str) -> Result<MenuItem, ApiError> {
    patch(&format!("/menu-items/{}/toggle", segment(id))).await
}

pub async fn delete_menu_item(id: &str) -> Result<(), ApiError> {
    delete(&format!("/menu-items/{}", segment(id))).await
}
