//! Sales Reports
//!
//! Aggregates the loaded order list over an optional, inclusive date range.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{Order, OrderStatus, TopItem};

/// How many rows the top-selling table shows
pub const TOP_ITEMS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSummary {
    pub total_orders: usize,
    /// Cancelled orders excluded
    pub total_revenue: f64,
    /// One entry per status in lifecycle order, zero counts included
    pub by_status: Vec<(OrderStatus, usize)>,
    /// Quantity sold descending, ties broken by revenue
    pub top_items: Vec<TopItem>,
}

/// Whether `order` falls inside `[from, to]`. Undated orders only match an
/// open range.
pub fn in_range(order: &Order, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(day) = order.created_at.map(|at| at.date()) else {
        return false;
    };
    from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
}

impl ReportSummary {
    pub fn from_orders(orders: &[Order], from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let selected: Vec<&Order> = orders.iter().filter(|o| in_range(o, from, to)).collect();

        let by_status = OrderStatus::ALL
            .iter()
            .map(|s| (*s, selected.iter().filter(|o| o.status == *s).count()))
            .collect();

        let sold: Vec<&Order> = selected
            .iter()
            .copied()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .collect();
        let total_revenue = sold.iter().map(|o| o.total).sum();

        let mut per_item: HashMap<&str, (u64, f64)> = HashMap::new();
        for item in sold.iter().flat_map(|o| o.items.iter()) {
            let entry = per_item.entry(item.menu_item_name.as_str()).or_default();
            entry.0 += item.quantity as u64;
            entry.1 += item.line_total();
        }
        let mut top_items: Vec<TopItem> = per_item
            .into_iter()
            .map(|(name, (total_sold, total_revenue))| TopItem {
                name: name.to_string(),
                total_sold,
                total_revenue,
            })
            .collect();
        top_items.sort_by(|a, b| {
            b.total_sold
                .cmp(&a.total_sold)
                .then(b.total_revenue.total_cmp(&a.total_revenue))
                .then_with(|| a.name.cmp(&b.name))
        });
        top_items.truncate(TOP_ITEMS_LIMIT);

        Self {
            total_orders: selected.len(),
            total_revenue,
            by_status,
            top_items,
        }
    }

    pub fn count_for(&self, status: OrderStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, day: &str, total: f64, items: serde_json::Value) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": format!("{}-{}", status, day),
            "status": status,
            "total": total,
            "createdAt": format!("{}T12:00:00", day),
            "items": items,
        }))
        .unwrap()
    }

    fn line(name: &str, price: f64, quantity: u32) -> serde_json::Value {
        serde_json::json!({ "menuItemName": name, "price": price, "quantity": quantity })
    }

    fn sample() -> Vec<Order> {
        vec![
            order("COMPLETED", "2024-11-01", 30000.0, serde_json::json!([line("Pilau", 10000.0, 3)])),
            order("PENDING", "2024-11-05", 12000.0, serde_json::json!([line("Chips Mayai", 6000.0, 2)])),
            order("CANCELLED", "2024-11-05", 50000.0, serde_json::json!([line("Pilau", 10000.0, 5)])),
            order("READY", "2024-11-10", 18000.0, serde_json::json!([line("Chips Mayai", 6000.0, 3)])),
        ]
    }

    #[test]
    fn test_revenue_excludes_cancelled() {
        let report = ReportSummary::from_orders(&sample(), None, None);
        assert_eq!(report.total_orders, 4);
        assert_eq!(report.total_revenue, 60000.0);
        assert_eq!(report.count_for(OrderStatus::Cancelled), 1);
        assert_eq!(report.count_for(OrderStatus::Confirmed), 0);
        assert_eq!(report.by_status.len(), OrderStatus::ALL.len());
    }

    #[test]
    fn test_top_items_by_quantity_then_revenue() {
        let report = ReportSummary::from_orders(&sample(), None, None);
        let names: Vec<&str> = report.top_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Chips Mayai", "Pilau"]);
        assert_eq!(report.top_items[0].total_sold, 5);
        assert_eq!(report.top_items[1].total_revenue, 30000.0);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let from = NaiveDate::from_ymd_opt(2024, 11, 5);
        let to = NaiveDate::from_ymd_opt(2024, 11, 10);
        let report = ReportSummary::from_orders(&sample(), from, to);
        assert_eq!(report.total_orders, 3);
        assert_eq!(report.total_revenue, 30000.0);

        let report = ReportSummary::from_orders(&sample(), from, None);
        assert_eq!(report.total_orders, 3);
    }

    #[test]
    fn test_empty_report() {
        let report = ReportSummary::from_orders(&[], None, None);
        assert_eq!(report.total_orders, 0);
        assert!(report.top_items.is_empty());
    }
}
