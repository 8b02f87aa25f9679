//! Daily Menu Entry
//!
//! Associates a menu item with a date, optionally at a special price.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenuEntry {
    pub id: String,
    pub menu_item_id: String,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub original_price: f64,
    #[serde(default)]
    pub special_price: Option<f64>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    pub date: NaiveDate,
}

fn default_true() -> bool {
    true
}

impl DailyMenuEntry {
    /// Price a customer pays on that day
    pub fn effective_price(&self) -> f64 {
        self.special_price.unwrap_or(self.original_price)
    }

    pub fn has_discount(&self) -> bool {
        self.special_price
            .map(|p| p < self.original_price)
            .unwrap_or(false)
    }
}

impl Entity for DailyMenuEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update body for `/daily-menu`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenuPayload {
    pub menu_item_id: String,
    pub date: NaiveDate,
    pub special_price: Option<f64>,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(special: Option<f64>) -> DailyMenuEntry {
        DailyMenuEntry {
            id: "d1".into(),
            menu_item_id: "m1".into(),
            item_name: "Ugali & Fish".into(),
            category: Some("main".into()),
            original_price: 15000.0,
            special_price: special,
            available: true,
            image_url: None,
            date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
        }
    }

    #[test]
    fn test_effective_price() {
        assert_eq!(entry(Some(13000.0)).effective_price(), 13000.0);
        assert_eq!(entry(None).effective_price(), 15000.0);
        assert!(entry(Some(13000.0)).has_discount());
        assert!(!entry(None).has_discount());
    }

    #[test]
    fn test_payload_date_format() {
        let payload = DailyMenuPayload {
            menu_item_id: "m1".into(),
            date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
            special_price: None,
            available: true,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""date":"2024-11-20""#));
        assert!(json.contains(r#""specialPrice":null"#));
    }
}
