//! Feedback Endpoints

use smart_menu_core::domain::{FeedbackPage, FeedbackStats};
use smart_menu_core::filter::FeedbackQuery;

use super::{delete, get, segment, ApiError};

/// One page of feedback, filtered and sorted server-side
pub async fn list_feedback(query: &FeedbackQuery) -> Result<FeedbackPage, ApiError> {
    get(&format!("/feedback?{}", query.to_query_string())).await
}

pub async fn feedback_stats() -> Result<FeedbackStats, ApiError> {
    get("/feedback/stats").await
}

pub async fn delete_feedback(id: &str) -> Result<(), ApiError> {
    delete(&format!("/feedback/{}", segment(id))).await
}
