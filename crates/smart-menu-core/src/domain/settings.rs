//! Restaurant Settings
//!
//! Client-owned settings persisted in local storage.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::format::format_datetime_with;
use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantSettings {
    pub currency: String,
    pub timezone: String,
    pub opening_time: String,
    pub closing_time: String,
    /// Percent
    pub service_charge: f64,
    /// Percent
    pub vat_rate: f64,
    pub receipt_footer: String,
    pub allow_online_orders: bool,
    pub auto_accept_orders: bool,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            currency: "TSH".to_string(),
            timezone: "Africa/Dar_es_Salaam".to_string(),
            opening_time: "08:00".to_string(),
            closing_time: "22:00".to_string(),
            service_charge: 0.0,
            vat_rate: 18.0,
            receipt_footer: "Thank you for dining with us!".to_string(),
            allow_online_orders: true,
            auto_accept_orders: false,
        }
    }
}

impl RestaurantSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.service_charge) || !in_range(self.vat_rate) {
            return Err(ValidationError::PercentOutOfRange);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemPreferences {
    pub language: String,
    pub date_format: String,
    pub time_format: String,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub order_notifications: bool,
    pub feedback_notifications: bool,
}

impl Default for SystemPreferences {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            time_format: "24h".to_string(),
            email_notifications: true,
            sms_notifications: false,
            order_notifications: true,
            feedback_notifications: true,
        }
    }
}

impl SystemPreferences {
    /// Timestamp in the chosen date and clock formats
    pub fn format_timestamp(&self, at: Option<NaiveDateTime>) -> String {
        format_datetime_with(at, &self.date_format, &self.time_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_follow_saved_formats() {
        let at = NaiveDateTime::parse_from_str("2024-11-20 14:05", "%Y-%m-%d %H:%M").ok();
        assert_eq!(SystemPreferences::default().format_timestamp(at), "20/11/2024 14:05");

        let us = SystemPreferences {
            date_format: "MM/DD/YYYY".into(),
            time_format: "12h".into(),
            ..Default::default()
        };
        assert_eq!(us.format_timestamp(at), "11/20/2024 02:05 PM");
    }

    #[test]
    fn test_defaults_validate() {
        assert!(RestaurantSettings::default().validate().is_ok());
    }

    #[test]
    fn test_percent_out_of_range() {
        let settings = RestaurantSettings {
            vat_rate: 120.0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::PercentOutOfRange));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let prefs: SystemPreferences = serde_json::from_str(r#"{"language":"sw"}"#).unwrap();
        assert_eq!(prefs.language, "sw");
        assert!(prefs.order_notifications);
    }
}
