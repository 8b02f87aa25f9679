//! Menu Item Entity
//!
//! A dish or drink a restaurant offers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Built-in menu categories.
///
/// The backend stores the category as a free string; anything outside this
/// list is shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    MainDishes,
    Sides,
    Drinks,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::MainDishes,
        Category::Sides,
        Category::Drinks,
        Category::Desserts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MainDishes => "main",
            Category::Sides => "sides",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
        }
    }

    /// Accepts both the short code and the English display name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "main" | "main dishes" | "main course" => Some(Category::MainDishes),
            "sides" | "side" => Some(Category::Sides),
            "drinks" | "drink" => Some(Category::Drinks),
            "desserts" | "dessert" => Some(Category::Desserts),
            _ => None,
        }
    }

    /// i18n key for the category label
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::MainDishes => "mainDishes",
            Category::Sides => "sides",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
        }
    }
}

/// Menu item as returned by `/menu-items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Known category, if the stored string matches one
    pub fn known_category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::from_str)
    }
}

impl Entity for MenuItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update body for `/menu-items`. The server replaces the whole
/// item on update, so every field is always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPayload {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub available: bool,
    pub allergens: Vec<String>,
    pub prep_time_minutes: Option<u32>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_deserialize_minimal() {
        let json = r#"{"id":"m1","name":"Chips Mayai","price":6000}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Chips Mayai");
        assert!(item.available);
        assert!(item.allergens.is_empty());
        assert_eq!(item.known_category(), None);
    }

    #[test]
    fn test_menu_item_deserialize_backend_shape() {
        let json = r#"{
            "id":"m2","userId":"u1","name":"Ugali & Fish","description":"Fried fish",
            "price":15000.0,"category":"Main Dishes","imageUrl":null,"available":false,
            "allergens":["fish"],"prepTimeMinutes":20,"featured":true,
            "createdAt":"2024-11-20T14:45:00.123","updatedAt":"2024-11-20T14:45:00"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(!item.available);
        assert_eq!(item.known_category(), Some(Category::MainDishes));
        assert_eq!(item.prep_time_minutes, Some(20));
        assert!(item.created_at.is_some());
    }

    #[test]
    fn test_category_round_trip_codes() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("Breakfast"), None);
    }
}
