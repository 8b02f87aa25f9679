//! Shopping Cart
//!
//! Per-table cart kept on the customer's device. A line is identified by the
//! menu item id together with its special-instruction text, so the same dish
//! with different instructions stays on separate lines.

use serde::{Deserialize, Serialize};

use crate::domain::{MenuItem, OrderLineRequest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub special_instructions: String,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Serialized as a bare JSON array of lines
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `item`. Merges into an existing line with the same
    /// id and instructions.
    pub fn add(&mut self, item: &MenuItem, quantity: u32, special_instructions: &str) {
        if quantity == 0 {
            return;
        }
        let instructions = special_instructions.trim();
        match self
            .lines
            .iter_mut()
            .find(|l| l.id == item.id && l.special_instructions == instructions)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity,
                special_instructions: instructions.to_string(),
            }),
        }
    }

    /// Remove the line at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Set the quantity of the line at `index`. Zero or negative removes it.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) {
        if quantity <= 0 {
            self.remove(index);
            return;
        }
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn to_order_lines(&self) -> Vec<OrderLineRequest> {
        self.lines
            .iter()
            .map(|l| OrderLineRequest {
                id: l.id.clone(),
                name: l.name.clone(),
                price: l.price,
                quantity: l.quantity,
                special_instructions: l.special_instructions.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, price: f64) -> MenuItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Item {}", id),
            "price": price,
        }))
        .unwrap()
    }

    #[test]
    fn test_total_is_sum_of_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(&make_item("a", 15000.0), 2, "");
        cart.add(&make_item("b", 1500.0), 3, "");
        cart.add(&make_item("c", 6000.0), 1, "extra chili");
        assert_eq!(cart.total(), 15000.0 * 2.0 + 1500.0 * 3.0 + 6000.0);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_merges_same_item_and_instructions() {
        let mut cart = Cart::new();
        let fish = make_item("a", 15000.0);
        cart.add(&fish, 1, "no onions");
        cart.add(&fish, 2, " no onions ");
        cart.add(&fish, 1, "");
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_set_quantity_non_positive_removes() {
        let mut cart = Cart::new();
        cart.add(&make_item("a", 100.0), 1, "");
        cart.add(&make_item("b", 200.0), 1, "");
        cart.set_quantity(0, 5);
        assert_eq!(cart.lines()[0].quantity, 5);
        cart.set_quantity(0, 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id, "b");
        cart.set_quantity(0, -1);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_set_quantity_clamps_huge_input() {
        let mut cart = Cart::new();
        cart.add(&make_item("a", 100.0), 1, "");
        cart.set_quantity(0, 5_000_000_000);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(&make_item("a", 100.0), 1, "");
        cart.remove(7);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_persisted_shape_is_plain_array() {
        let mut cart = Cart::new();
        cart.add(&make_item("a", 100.0), 2, "well done");
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"a","name":"Item a","price":100.0,"quantity":2,"specialInstructions":"well done"}]"#
        );
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_order_lines_mirror_cart() {
        let mut cart = Cart::new();
        cart.add(&make_item("a", 100.0), 2, "");
        let lines = cart.to_order_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].name, "Item a");
    }
}
