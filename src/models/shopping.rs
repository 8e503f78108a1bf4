//! Shopping list model
//!
//! A simple checklist entity with no derived computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ShoppingItemId, ShoppingListId};

/// One entry on a shopping list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub checked: bool,
}

fn default_quantity() -> u32 {
    1
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: ShoppingItemId::new(),
            name: name.into(),
            quantity,
            checked: false,
        }
    }
}

/// A named checklist of items to buy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ShoppingListId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ShoppingListId::new(),
            name: name.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_item_mut(&mut self, id: ShoppingItemId) -> Option<&mut ShoppingItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Count of checked items
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Mark the list as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_unchecked() {
        let item = ShoppingItem::new("Milk", 2);
        assert!(!item.checked);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_checked_count() {
        let mut list = ShoppingList::new("Groceries");
        list.items.push(ShoppingItem::new("Milk", 1));
        list.items.push(ShoppingItem::new("Bread", 1));
        list.items[0].checked = true;

        assert_eq!(list.checked_count(), 1);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":"Milk"}"#;
        let item: ShoppingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(!item.checked);
    }
}
