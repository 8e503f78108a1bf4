//! Storage layer for fintrack
//!
//! Persistence is expressed as per-collection store traits with two
//! implementations: JSON files on disk and a purely in-memory variant used
//! for demo mode and tests. Callers receive the concrete mix through the
//! [`Storage`] coordinator, never through a runtime null-check.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json::{JsonBudgetPlanStore, JsonPaymentPlanStore, JsonShoppingListStore};
pub use memory::{MemoryBudgetPlanStore, MemoryPaymentPlanStore, MemoryShoppingListStore};

use crate::config::FintrackPaths;
use crate::error::FintrackResult;
use crate::models::{BudgetPlan, MonthlyPaymentPlan, PlanMonth, ShoppingList, ShoppingListId};

/// Store for budget plans, keyed by month (one plan per month)
pub trait BudgetPlanStore: Send + Sync {
    /// Load the collection from its backing medium
    fn load(&self) -> FintrackResult<()>;
    /// Persist the collection to its backing medium
    fn save(&self) -> FintrackResult<()>;
    fn get(&self, month: PlanMonth) -> FintrackResult<Option<BudgetPlan>>;
    fn upsert(&self, plan: BudgetPlan) -> FintrackResult<()>;
    fn delete(&self, month: PlanMonth) -> FintrackResult<bool>;
    /// All plans, ordered by month
    fn list(&self) -> FintrackResult<Vec<BudgetPlan>>;
}

/// Store for monthly payment plans, keyed by month
pub trait PaymentPlanStore: Send + Sync {
    fn load(&self) -> FintrackResult<()>;
    fn save(&self) -> FintrackResult<()>;
    fn get(&self, month: PlanMonth) -> FintrackResult<Option<MonthlyPaymentPlan>>;
    fn upsert(&self, plan: MonthlyPaymentPlan) -> FintrackResult<()>;
    fn delete(&self, month: PlanMonth) -> FintrackResult<bool>;
    fn list(&self) -> FintrackResult<Vec<MonthlyPaymentPlan>>;
}

/// Store for shopping lists, keyed by id
pub trait ShoppingListStore: Send + Sync {
    fn load(&self) -> FintrackResult<()>;
    fn save(&self) -> FintrackResult<()>;
    fn get(&self, id: ShoppingListId) -> FintrackResult<Option<ShoppingList>>;
    fn upsert(&self, list: ShoppingList) -> FintrackResult<()>;
    fn delete(&self, id: ShoppingListId) -> FintrackResult<bool>;
    /// All lists, ordered by creation time
    fn list(&self) -> FintrackResult<Vec<ShoppingList>>;
}

/// Main storage coordinator holding one store per collection
pub struct Storage {
    pub budgets: Box<dyn BudgetPlanStore>,
    pub payments: Box<dyn PaymentPlanStore>,
    pub shopping: Box<dyn ShoppingListStore>,
}

impl Storage {
    /// File-backed storage rooted at the application paths
    pub fn json(paths: &FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            budgets: Box::new(JsonBudgetPlanStore::new(paths.budgets_file())),
            payments: Box::new(JsonPaymentPlanStore::new(paths.payments_file())),
            shopping: Box::new(JsonShoppingListStore::new(paths.shopping_file())),
        })
    }

    /// Purely in-memory storage; nothing survives the process
    pub fn in_memory() -> Self {
        Self {
            budgets: Box::new(MemoryBudgetPlanStore::new()),
            payments: Box::new(MemoryPaymentPlanStore::new()),
            shopping: Box::new(MemoryShoppingListStore::new()),
        }
    }

    /// In-memory storage pre-populated with demo data
    pub fn in_memory_demo() -> FintrackResult<Self> {
        let storage = Self::in_memory();
        memory::seed_demo_data(&storage)?;
        Ok(storage)
    }

    /// Load all collections
    pub fn load_all(&self) -> FintrackResult<()> {
        self.budgets.load()?;
        self.payments.load()?;
        self.shopping.load()?;
        Ok(())
    }

    /// Save all collections
    pub fn save_all(&self) -> FintrackResult<()> {
        self.budgets.save()?;
        self.payments.save()?;
        self.shopping.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::json(&paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.budgets.list().unwrap().is_empty());
    }

    #[test]
    fn test_demo_storage_is_populated() {
        let storage = Storage::in_memory_demo().unwrap();
        assert!(!storage.budgets.list().unwrap().is_empty());
        assert!(!storage.payments.list().unwrap().is_empty());
        assert!(!storage.shopping.list().unwrap().is_empty());
    }
}
