//! Feedback Entity
//!
//! Customer ratings (1-5 stars) attached to an order.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    pub rating: u8,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Entity for Feedback {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One page of `GET /feedback`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPage {
    #[serde(default)]
    pub entries: Vec<Feedback>,
    /// Zero-based, as sent by the server
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_items: usize,
}

/// Response of `GET /feedback/stats`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    #[serde(default)]
    pub total_feedback: usize,
    #[serde(default)]
    pub average_rating: f64,
    /// Rating (as string key, "1".."5") to count
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, usize>,
}

impl FeedbackStats {
    /// Count for a star rating, zero when the server omitted it
    pub fn count_for(&self, rating: u8) -> usize {
        self.rating_distribution
            .get(&rating.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Share of feedback with the given rating, in percent
    pub fn percent_for(&self, rating: u8) -> f64 {
        if self.total_feedback == 0 {
            return 0.0;
        }
        self.count_for(rating) as f64 * 100.0 / self.total_feedback as f64
    }
}

/// Body of `POST /public/feedback`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub order_number: String,
    pub device_id: Option<String>,
    pub rating: u8,
    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_distribution() {
        let json = r#"{"totalFeedback":4,"averageRating":4.3,"ratingDistribution":{"5":2,"4":1,"3":1}}"#;
        let stats: FeedbackStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.count_for(5), 2);
        assert_eq!(stats.count_for(1), 0);
        assert_eq!(stats.percent_for(5), 50.0);
    }

    #[test]
    fn test_empty_stats_percent_is_zero() {
        assert_eq!(FeedbackStats::default().percent_for(3), 0.0);
    }

    #[test]
    fn test_feedback_page_deserialize() {
        let json = r#"{"entries":[{"id":"f1","orderNumber":"ORD-001","rating":5,"comments":"Great"}],
                       "currentPage":0,"totalPages":1,"totalItems":1}"#;
        let page: FeedbackPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].rating, 5);
        assert_eq!(page.total_items, 1);
    }
}
