//! Order Entity
//!
//! Orders are created by customers through the public flow and processed by
//! staff on the admin side. The server owns every status transition; the
//! client only displays them and requests changes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Just placed, awaiting confirmation
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    /// Delivered/served
    #[serde(alias = "SERVED", alias = "DELIVERED")]
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire name, as the backend expects it in `PUT /orders/{id}`
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Some(OrderStatus::Pending),
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "PREPARING" => Some(OrderStatus::Preparing),
            "READY" => Some(OrderStatus::Ready),
            "COMPLETED" | "SERVED" | "DELIVERED" => Some(OrderStatus::Completed),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "statusPending",
            OrderStatus::Confirmed => "statusConfirmed",
            OrderStatus::Preparing => "statusPreparing",
            OrderStatus::Ready => "statusReady",
            OrderStatus::Completed => "statusCompleted",
            OrderStatus::Cancelled => "statusCancelled",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Confirmed => "status-confirmed",
            OrderStatus::Preparing => "status-preparing",
            OrderStatus::Ready => "status-ready",
            OrderStatus::Completed => "status-delivered",
            OrderStatus::Cancelled => "status-cancelled",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "⏳",
            OrderStatus::Confirmed => "✅",
            OrderStatus::Preparing => "👨‍🍳",
            OrderStatus::Ready => "🔔",
            OrderStatus::Completed => "✅",
            OrderStatus::Cancelled => "❌",
        }
    }

    /// Position on the customer tracking timeline. Cancelled orders are off
    /// the timeline.
    pub fn step(&self) -> Option<usize> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Confirmed => Some(1),
            OrderStatus::Preparing => Some(2),
            OrderStatus::Ready => Some(3),
            OrderStatus::Completed => Some(4),
            OrderStatus::Cancelled => None,
        }
    }

    /// Statuses shown on the tracking timeline, in order
    pub fn timeline() -> [OrderStatus; 5] {
        [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ]
    }

    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }

    pub fn toggled(self) -> Self {
        match self {
            PaymentStatus::Pending => PaymentStatus::Completed,
            PaymentStatus::Completed => PaymentStatus::Pending,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "paymentPending",
            PaymentStatus::Completed => "paymentCompleted",
        }
    }
}

/// A line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub menu_item_id: Option<String>,
    pub menu_item_name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order as returned by `/orders` and `/public/order/{number}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub customer_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Order {
    /// Human-readable order number, falling back to a prefix of the id
    pub fn display_number(&self) -> String {
        match &self.order_number {
            Some(n) if !n.is_empty() => n.clone(),
            _ => format!("ORD-{}", self.id.chars().take(8).collect::<String>()),
        }
    }

    /// Table label, or "N/A" when the order has none
    pub fn display_table(&self) -> String {
        self.table_number.clone().unwrap_or_else(|| "N/A".to_string())
    }

    /// Sum of the line totals; the server's `total` is authoritative
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Record a payment change on the order with `id`. The backend has no
/// payment field, so this state lives only in the loaded list.
pub fn set_payment_status(orders: &mut [Order], id: &str, status: PaymentStatus) -> bool {
    match orders.iter_mut().find(|o| o.id == id) {
        Some(order) => {
            order.payment_status = status;
            true
        }
        None => false,
    }
}

/// Body of `PUT /orders/{id}`; only the status can change
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: OrderStatus,
}

/// One cart line sent with `POST /public/order`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub special_instructions: String,
}

/// Body of `POST /public/order`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub table_id: String,
    pub device_id: String,
    pub customer_name: String,
    pub items: Vec<OrderLineRequest>,
}

/// Response of `POST /public/order`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    #[serde(default)]
    pub success: bool,
    pub order_number: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_aliases() {
        let served: OrderStatus = serde_json::from_str("\"SERVED\"").unwrap();
        assert_eq!(served, OrderStatus::Completed);
        assert_eq!(OrderStatus::from_str("delivered"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::from_str("lost"), None);
    }

    #[test]
    fn test_timeline_steps() {
        for (i, status) in OrderStatus::timeline().iter().enumerate() {
            assert_eq!(status.step(), Some(i));
        }
        assert_eq!(OrderStatus::Cancelled.step(), None);
        assert!(OrderStatus::Cancelled.is_final());
        assert!(!OrderStatus::Ready.is_final());
    }

    #[test]
    fn test_order_deserialize_and_display() {
        let json = r#"{
            "id":"6745f0a1b2c3d4e5f6a7b8c9","orderNumber":null,"tableNumber":"Table 5",
            "items":[
                {"menuItemId":"m1","menuItemName":"Ugali & Fish","price":15000,"quantity":2,"specialInstructions":"No onions"},
                {"menuItemName":"Soda","price":1500,"quantity":1}
            ],
            "total":31500,"status":"PREPARING","createdAt":"2024-11-20T14:45:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.display_number(), "ORD-6745f0a1");
        assert_eq!(order.display_table(), "Table 5");
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.items_total(), 31500.0);
    }

    #[test]
    fn test_update_request_carries_only_status() {
        let req = UpdateOrderRequest { status: OrderStatus::Ready };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"status":"READY"}"#);
    }

    #[test]
    fn test_payment_toggle_flips_the_loaded_order() {
        let json = r#"[
            {"id":"o1","items":[],"total":1000,"status":"PENDING"},
            {"id":"o2","items":[],"total":2000,"status":"READY"}
        ]"#;
        let mut orders: Vec<Order> = serde_json::from_str(json).unwrap();
        let next = orders[1].payment_status.toggled();
        assert_eq!(next, PaymentStatus::Completed);

        assert!(set_payment_status(&mut orders, "o2", next));
        assert!(orders[1].payment_status.is_paid());
        assert!(!orders[0].payment_status.is_paid());
        assert!(!set_payment_status(&mut orders, "missing", next));

        assert_eq!(orders[1].payment_status.toggled(), PaymentStatus::Pending);
    }
}
