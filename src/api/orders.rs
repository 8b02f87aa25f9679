//! Order Endpoints

use smart_menu_core::domain::{Order, OrderStatus, UpdateOrderRequest};

use super::{delete, get, put, segment, ApiError};

pub async fn list_orders() -> Result<Vec<Order>, ApiError> {
    get("/orders").await
}

pub async fn get_order(id: &str) -> Result<Order, ApiError> {
    get(&format!("/orders/{}", segment(id))).await
}

pub async fn update_order_status(id: &str, status: OrderStatus) -> Result<Order, ApiError> {
    put(&format!("/orders/{}", segment(id)), &UpdateOrderRequest { status }).await
}

pub async fn delete_order(id: &str) -> Result<(), ApiError> {
    delete(&format!("/orders/{}", segment(id))).await
}

/// Number of orders still waiting for confirmation, for the sidebar badge
pub async fn count_pending_orders() -> Result<u64, ApiError> {
    let orders = list_orders().await?;
    Ok(orders.iter().filter(|o| o.status == OrderStatus::Pending).count() as u64)
}
