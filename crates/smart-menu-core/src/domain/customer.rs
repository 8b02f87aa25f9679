//! Public Customer Flow Models
//!
//! Menu-for-table and returning-customer session shapes served under
//! `/public`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::menu_item::MenuItem;

/// Response of `GET /public/menu/{tableId}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMenu {
    pub table_id: String,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub total_items: usize,
}

impl TableMenu {
    /// Items a customer can order right now
    pub fn available_items(&self) -> Vec<MenuItem> {
        self.menu_items.iter().filter(|i| i.available).cloned().collect()
    }
}

/// Response of `GET /public/session/{deviceId}` and `POST /public/session`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSession {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub visit_count: Option<u32>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub is_returning_customer: bool,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub last_visit: Option<NaiveDateTime>,
}

/// Body of `POST /public/session`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSessionRequest {
    pub device_id: String,
    pub table_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

/// The "no session" response encodes the flag as the string `"false"`.
fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returning_customer_as_bool() {
        let json = r#"{"sessionId":"s1","visitCount":3,"isReturningCustomer":true,"customerName":"Asha"}"#;
        let session: CustomerSession = serde_json::from_str(json).unwrap();
        assert!(session.is_returning_customer);
        assert_eq!(session.customer_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_no_session_string_flag() {
        let json = r#"{"message":"No session found","isReturningCustomer":"false"}"#;
        let session: CustomerSession = serde_json::from_str(json).unwrap();
        assert!(!session.is_returning_customer);
        assert!(session.session_id.is_none());
    }

    #[test]
    fn test_table_menu_available_items() {
        let json = r#"{"tableId":"t1","tableNumber":"Table 1","totalItems":2,"menuItems":[
            {"id":"a","name":"Rice","price":2000,"available":true},
            {"id":"b","name":"Juice","price":3000,"available":false}
        ]}"#;
        let menu: TableMenu = serde_json::from_str(json).unwrap();
        let available = menu.available_items();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "a");
    }
}
