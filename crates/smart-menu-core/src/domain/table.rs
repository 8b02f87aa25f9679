//! Table Entity
//!
//! A physical table or room that carries a QR code pointing at the customer
//! menu.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub table_number: String,
    #[serde(default, alias = "isRoom")]
    pub room: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub qr_code_id: Option<String>,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

impl Table {
    pub fn kind_key(&self) -> &'static str {
        if self.room {
            "tableTypeRoom"
        } else {
            "tableTypeTable"
        }
    }

    /// URL encoded into the QR code: the server-provided one when set,
    /// otherwise the customer menu under `origin`.
    pub fn menu_url(&self, origin: &str) -> String {
        match &self.qr_code_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => crate::format::customer_menu_url(origin, &self.id),
        }
    }
}

impl Entity for Table {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /tables`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    pub table_number: String,
    pub is_room: bool,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_accepts_room_aliases() {
        let a: Table = serde_json::from_str(r#"{"id":"t1","tableNumber":"1","room":true}"#).unwrap();
        let b: Table = serde_json::from_str(r#"{"id":"t2","tableNumber":"2","isRoom":true}"#).unwrap();
        assert!(a.room && b.room);
        assert_eq!(a.kind_key(), "tableTypeRoom");
        assert!(a.active);
    }

    #[test]
    fn test_menu_url_fallback() {
        let mut table: Table = serde_json::from_str(r#"{"id":"t9","tableNumber":"9","qrCodeUrl":""}"#).unwrap();
        assert_eq!(table.menu_url("https://menu.example"), "https://menu.example/customer-menu?table=t9");
        table.qr_code_url = Some("https://other/customer-menu?table=t9".into());
        assert_eq!(table.menu_url("https://menu.example"), "https://other/customer-menu?table=t9");
    }
}
