//! Dashboard Aggregates
//!
//! Shapes of the `/dashboard/*` endpoints. Aggregation happens server-side.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::order::OrderStatus;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_sales: f64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub active_items: u64,
    #[serde(default)]
    pub tables_count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    pub name: String,
    #[serde(default)]
    pub total_sold: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFeedback {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_tolerate_missing_fields() {
        let stats: DashboardStats = serde_json::from_str(r#"{"totalOrders":45,"pendingOrders":8}"#).unwrap();
        assert_eq!(stats.total_orders, 45);
        assert_eq!(stats.pending_orders, 8);
        assert_eq!(stats.total_sales, 0.0);
    }

    #[test]
    fn test_recent_order_status() {
        let json = r#"{"id":"o1","orderNumber":"ORD-001","amount":45000,"status":"READY"}"#;
        let order: RecentOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
    }
}
