//! Public Endpoints
//!
//! Used by the customer flow. No token is sent and a 401 never ends an admin
//! session.

use serde::Deserialize;
use smart_menu_core::domain::{
    CustomerSession, Order, PlaceOrderRequest, PlaceOrderResponse, SubmitFeedbackRequest,
    TableMenu, TrackSessionRequest,
};

use super::{get_public, post_public, segment, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct PublicAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Menu for the table; the device id lets the server record the visit
pub async fn table_menu(table_id: &str, device_id: &str) -> Result<TableMenu, ApiError> {
    get_public(&format!(
        "/public/menu/{}?deviceId={}",
        segment(table_id),
        segment(device_id)
    ))
    .await
}

pub async fn customer_session(device_id: &str) -> Result<CustomerSession, ApiError> {
    get_public(&format!("/public/session/{}", segment(device_id))).await
}

pub async fn track_session(request: &TrackSessionRequest) -> Result<CustomerSession, ApiError> {
    post_public("/public/session", request).await
}

pub async fn place_order(request: &PlaceOrderRequest) -> Result<PlaceOrderResponse, ApiError> {
    post_public("/public/order", request).await
}

pub async fn track_order(order_number: &str) -> Result<Order, ApiError> {
    get_public(&format!("/public/order/{}", segment(order_number))).await
}

pub async fn submit_feedback(request: &SubmitFeedbackRequest) -> Result<PublicAck, ApiError> {
    post_public("/public/feedback", request).await
}
