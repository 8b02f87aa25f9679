//! List Filters
//!
//! `OrderFilter` narrows the already-loaded order list on the client.
//! `FeedbackQuery` is sent to the server, which filters and pages feedback.

use chrono::NaiveDate;
use crate::domain::{Order, OrderStatus};
use crate::format::encode_component;

// ========================
// Orders
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    /// `None` shows every status
    pub status: Option<OrderStatus>,
    pub search: String,
}

impl OrderFilter {
    /// Status must match, and the search term (case-insensitive) must occur
    /// in the order number, table number or customer name.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(order.display_number()),
            order.table_number.clone(),
            order.customer_name.clone(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching orders, newest first. Orders without a timestamp go last.
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        let mut out: Vec<Order> = orders.iter().filter(|o| self.matches(o)).cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }
}

// ========================
// Feedback
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackSort {
    #[default]
    DateDesc,
    DateAsc,
    RatingDesc,
    RatingAsc,
}

impl FeedbackSort {
    pub const ALL: [FeedbackSort; 4] = [
        FeedbackSort::DateDesc,
        FeedbackSort::DateAsc,
        FeedbackSort::RatingDesc,
        FeedbackSort::RatingAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackSort::DateDesc => "date_desc",
            FeedbackSort::DateAsc => "date_asc",
            FeedbackSort::RatingDesc => "rating_desc",
            FeedbackSort::RatingAsc => "rating_asc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == s)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            FeedbackSort::DateDesc => "sortNewest",
            FeedbackSort::DateAsc => "sortOldest",
            FeedbackSort::RatingDesc => "sortHighestRating",
            FeedbackSort::RatingAsc => "sortLowestRating",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackQuery {
    /// 1-based, as shown in the pager
    pub page: usize,
    pub size: usize,
    pub rating: Option<u8>,
    pub order_number: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort: FeedbackSort,
}

impl Default for FeedbackQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: crate::config::PAGE_SIZE,
            rating: None,
            order_number: String::new(),
            start_date: None,
            end_date: None,
            sort: FeedbackSort::default(),
        }
    }
}

impl FeedbackQuery {
    /// Resets every filter but keeps the page size
    pub fn cleared(&self) -> Self {
        Self { size: self.size, ..Self::default() }
    }

    /// Query string for `GET /feedback`, without the leading `?`.
    /// The server counts pages from zero.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page.saturating_sub(1)),
            format!("size={}", self.size),
        ];
        if let Some(rating) = self.rating.filter(|r| *r > 0) {
            params.push(format!("rating={}", rating));
        }
        let order_number = self.order_number.trim();
        if !order_number.is_empty() {
            params.push(format!("orderNumber={}", encode_component(order_number)));
        }
        if let Some(start) = self.start_date {
            params.push(format!("startDate={}", start.format("%Y-%m-%d")));
        }
        if let Some(end) = self.end_date {
            params.push(format!("endDate={}", end.format("%Y-%m-%d")));
        }
        params.push(format!("sortBy={}", self.sort.as_str()));
        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn order(id: &str, number: &str, table: &str, customer: &str, status: OrderStatus, at: &str) -> Order {
        let mut o: Order = serde_json::from_value(serde_json::json!({
            "id": id,
            "orderNumber": number,
            "tableNumber": table,
            "customerName": customer,
            "total": 1000.0,
        }))
        .unwrap();
        o.status = status;
        o.created_at = NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M").ok();
        o
    }

    fn sample() -> Vec<Order> {
        vec![
            order("1", "ORD-001", "T1", "Asha", OrderStatus::Pending, "2024-11-20 09:00"),
            order("2", "ORD-002", "T2", "Baraka", OrderStatus::Ready, "2024-11-20 11:00"),
            order("3", "ORD-003", "Room 4", "Chausiku", OrderStatus::Pending, "2024-11-20 10:00"),
        ]
    }

    #[test]
    fn test_order_filter_newest_first() {
        let ids: Vec<String> = OrderFilter::default().apply(&sample()).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_order_filter_by_status_and_search() {
        let filter = OrderFilter { status: Some(OrderStatus::Pending), search: String::new() };
        assert_eq!(filter.apply(&sample()).len(), 2);

        let filter = OrderFilter { status: None, search: "  room ".into() };
        let found = filter.apply(&sample());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");

        let filter = OrderFilter { status: Some(OrderStatus::Ready), search: "asha".into() };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_feedback_query_defaults() {
        assert_eq!(
            FeedbackQuery::default().to_query_string(),
            "page=0&size=10&sortBy=date_desc"
        );
    }

    #[test]
    fn test_feedback_query_full() {
        let query = FeedbackQuery {
            page: 3,
            size: 10,
            rating: Some(4),
            order_number: "ORD 12".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 11, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 11, 30),
            sort: FeedbackSort::RatingAsc,
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&size=10&rating=4&orderNumber=ORD%2012&startDate=2024-11-01&endDate=2024-11-30&sortBy=rating_asc"
        );
        assert_eq!(query.cleared(), FeedbackQuery::default());
    }

    #[test]
    fn test_feedback_sort_parse() {
        assert_eq!(FeedbackSort::from_str("rating_desc"), Some(FeedbackSort::RatingDesc));
        assert_eq!(FeedbackSort::from_str("bogus"), None);
    }
}
