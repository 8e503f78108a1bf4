//! Shopping list operations

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ShoppingItemId, ShoppingList, ShoppingListId};
use crate::storage::Storage;

/// Service for shopping lists
pub struct ShoppingService<'a> {
    storage: &'a Storage,
}

impl<'a> ShoppingService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All lists, oldest first
    pub fn list_all(&self) -> FintrackResult<Vec<ShoppingList>> {
        self.storage.shopping.list()
    }

    pub fn get_list(&self, id: ShoppingListId) -> FintrackResult<ShoppingList> {
        self.storage
            .shopping
            .get(id)?
            .ok_or_else(|| FintrackError::shopping_list_not_found(id.to_string()))
    }

    /// Find a list by its id prefix or exact name (case-insensitive)
    ///
    /// Lists are usually addressed by name on the command line; the short id
    /// prefix shown in tables works too.
    pub fn find_list(&self, needle: &str) -> FintrackResult<ShoppingList> {
        let lists = self.list_all()?;
        let lowered = needle.to_lowercase();
        lists
            .into_iter()
            .find(|l| l.name.to_lowercase() == lowered || l.id.matches_prefix(needle))
            .ok_or_else(|| FintrackError::shopping_list_not_found(needle))
    }

    /// Create a new, empty list
    pub fn create_list(&self, name: &str) -> FintrackResult<ShoppingListId> {
        if name.trim().is_empty() {
            return Err(FintrackError::Validation("List name cannot be empty".into()));
        }
        let lowered = name.to_lowercase();
        if self
            .list_all()?
            .iter()
            .any(|l| l.name.to_lowercase() == lowered)
        {
            return Err(FintrackError::Duplicate {
                entity_type: "Shopping list",
                identifier: name.to_string(),
            });
        }
        let list = ShoppingList::new(name);
        let id = list.id;
        self.persist(list)?;
        Ok(id)
    }

    /// Delete a whole list
    pub fn delete_list(&self, id: ShoppingListId) -> FintrackResult<()> {
        if !self.storage.shopping.delete(id)? {
            return Err(FintrackError::shopping_list_not_found(id.to_string()));
        }
        self.storage.shopping.save()
    }

    /// Add an item to a list
    pub fn add_item(
        &self,
        list_id: ShoppingListId,
        name: &str,
        quantity: u32,
    ) -> FintrackResult<ShoppingItemId> {
        if name.trim().is_empty() {
            return Err(FintrackError::Validation("Item name cannot be empty".into()));
        }
        if quantity == 0 {
            return Err(FintrackError::Validation("Quantity must be at least 1".into()));
        }
        let mut list = self.get_list(list_id)?;
        let item = crate::models::ShoppingItem::new(name, quantity);
        let id = item.id;
        list.items.push(item);
        self.persist(list)?;
        Ok(id)
    }

    /// Remove an item from a list
    pub fn remove_item(&self, list_id: ShoppingListId, id: ShoppingItemId) -> FintrackResult<()> {
        let mut list = self.get_list(list_id)?;
        let before = list.items.len();
        list.items.retain(|i| i.id != id);
        if list.items.len() == before {
            return Err(FintrackError::NotFound {
                entity_type: "Shopping item",
                identifier: id.to_string(),
            });
        }
        self.persist(list)
    }

    pub fn check_item(&self, list_id: ShoppingListId, id: ShoppingItemId) -> FintrackResult<()> {
        self.set_checked(list_id, id, true)
    }

    pub fn uncheck_item(&self, list_id: ShoppingListId, id: ShoppingItemId) -> FintrackResult<()> {
        self.set_checked(list_id, id, false)
    }

    fn set_checked(
        &self,
        list_id: ShoppingListId,
        id: ShoppingItemId,
        checked: bool,
    ) -> FintrackResult<()> {
        let mut list = self.get_list(list_id)?;
        match list.find_item_mut(id) {
            Some(item) => item.checked = checked,
            None => {
                return Err(FintrackError::NotFound {
                    entity_type: "Shopping item",
                    identifier: id.to_string(),
                })
            }
        }
        self.persist(list)
    }

    fn persist(&self, mut list: ShoppingList) -> FintrackResult<()> {
        list.touch();
        self.storage.shopping.upsert(list)?;
        self.storage.shopping.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(storage: &Storage) -> ShoppingService<'_> {
        ShoppingService::new(storage)
    }

    #[test]
    fn test_create_and_find_by_name() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let id = svc.create_list("Groceries").unwrap();
        let found = svc.find_list("groceries").unwrap();
        assert_eq!(found.id, id);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        svc.create_list("Groceries").unwrap();
        let err = svc.create_list("groceries").unwrap_err();
        assert!(matches!(err, FintrackError::Duplicate { .. }));
    }

    #[test]
    fn test_item_check_cycle() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let list_id = svc.create_list("Hardware").unwrap();
        let item_id = svc.add_item(list_id, "Screws", 100).unwrap();

        svc.check_item(list_id, item_id).unwrap();
        assert_eq!(svc.get_list(list_id).unwrap().checked_count(), 1);

        svc.uncheck_item(list_id, item_id).unwrap();
        assert_eq!(svc.get_list(list_id).unwrap().checked_count(), 0);
    }

    #[test]
    fn test_remove_item() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let list_id = svc.create_list("Groceries").unwrap();
        let item_id = svc.add_item(list_id, "Milk", 2).unwrap();
        svc.remove_item(list_id, item_id).unwrap();
        assert!(svc.get_list(list_id).unwrap().items.is_empty());

        let err = svc.remove_item(list_id, ShoppingItemId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_list() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let id = svc.create_list("Old list").unwrap();
        svc.delete_list(id).unwrap();
        assert!(svc.get_list(id).unwrap_err().is_not_found());
        assert!(svc.delete_list(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let storage = Storage::in_memory();
        let svc = service(&storage);
        let id = svc.create_list("Groceries").unwrap();
        assert!(svc.add_item(id, "Milk", 0).unwrap_err().is_validation());
    }
}
