//! JSON file-backed stores
//!
//! Each collection lives in one JSON file, cached in memory behind an
//! RwLock and written back atomically on save.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetPlan, MonthlyPaymentPlan, PlanMonth, ShoppingList, ShoppingListId};

use super::file_io::{read_json, write_json_atomic};
use super::{BudgetPlanStore, PaymentPlanStore, ShoppingListStore};

fn lock_err(e: impl std::fmt::Display) -> FintrackError {
    FintrackError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Serializable budget collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    plans: Vec<BudgetPlan>,
}

/// File-backed budget plan store
pub struct JsonBudgetPlanStore {
    path: PathBuf,
    plans: RwLock<HashMap<PlanMonth, BudgetPlan>>,
}

impl JsonBudgetPlanStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            plans: RwLock::new(HashMap::new()),
        }
    }
}

impl BudgetPlanStore for JsonBudgetPlanStore {
    fn load(&self) -> FintrackResult<()> {
        let file_data: BudgetData = read_json(&self.path)?;
        let mut plans = self.plans.write().map_err(lock_err)?;

        plans.clear();
        for plan in file_data.plans {
            plans.insert(plan.month, plan);
        }
        Ok(())
    }

    fn save(&self) -> FintrackResult<()> {
        let plans = self.plans.read().map_err(lock_err)?;

        let mut list: Vec<_> = plans.values().cloned().collect();
        list.sort_by_key(|p| p.month);

        write_json_atomic(&self.path, &BudgetData { plans: list })
    }

    fn get(&self, month: PlanMonth) -> FintrackResult<Option<BudgetPlan>> {
        let plans = self.plans.read().map_err(lock_err)?;
        Ok(plans.get(&month).cloned())
    }

    fn upsert(&self, plan: BudgetPlan) -> FintrackResult<()> {
        let mut plans = self.plans.write().map_err(lock_err)?;
        plans.insert(plan.month, plan);
        Ok(())
    }

    fn delete(&self, month: PlanMonth) -> FintrackResult<bool> {
        let mut plans = self.plans.write().map_err(lock_err)?;
        Ok(plans.remove(&month).is_some())
    }

    fn list(&self) -> FintrackResult<Vec<BudgetPlan>> {
        let plans = self.plans.read().map_err(lock_err)?;
        let mut list: Vec<_> = plans.values().cloned().collect();
        list.sort_by_key(|p| p.month);
        Ok(list)
    }
}

/// Serializable payment collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PaymentData {
    #[serde(default)]
    plans: Vec<MonthlyPaymentPlan>,
}

/// File-backed payment plan store
pub struct JsonPaymentPlanStore {
    path: PathBuf,
    plans: RwLock<HashMap<PlanMonth, MonthlyPaymentPlan>>,
}

impl JsonPaymentPlanStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            plans: RwLock::new(HashMap::new()),
        }
    }
}

impl PaymentPlanStore for JsonPaymentPlanStore {
    fn load(&self) -> FintrackResult<()> {
        let file_data: PaymentData = read_json(&self.path)?;
        let mut plans = self.plans.write().map_err(lock_err)?;

        plans.clear();
        for plan in file_data.plans {
            plans.insert(plan.month, plan);
        }
        Ok(())
    }

    fn save(&self) -> FintrackResult<()> {
        let plans = self.plans.read().map_err(lock_err)?;

        let mut list: Vec<_> = plans.values().cloned().collect();
        list.sort_by_key(|p| p.month);

        write_json_atomic(&self.path, &PaymentData { plans: list })
    }

    fn get(&self, month: PlanMonth) -> FintrackResult<Option<MonthlyPaymentPlan>> {
        let plans = self.plans.read().map_err(lock_err)?;
        Ok(plans.get(&month).cloned())
    }

    fn upsert(&self, plan: MonthlyPaymentPlan) -> FintrackResult<()> {
        let mut plans = self.plans.write().map_err(lock_err)?;
        plans.insert(plan.month, plan);
        Ok(())
    }

    fn delete(&self, month: PlanMonth) -> FintrackResult<bool> {
        let mut plans = self.plans.write().map_err(lock_err)?;
        Ok(plans.remove(&month).is_some())
    }

    fn list(&self) -> FintrackResult<Vec<MonthlyPaymentPlan>> {
        let plans = self.plans.read().map_err(lock_err)?;
        let mut list: Vec<_> = plans.values().cloned().collect();
        list.sort_by_key(|p| p.month);
        Ok(list)
    }
}

/// Serializable shopping collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ShoppingData {
    #[serde(default)]
    lists: Vec<ShoppingList>,
}

/// File-backed shopping list store
pub struct JsonShoppingListStore {
    path: PathBuf,
    lists: RwLock<HashMap<ShoppingListId, ShoppingList>>,
}

impl JsonShoppingListStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lists: RwLock::new(HashMap::new()),
        }
    }
}

impl ShoppingListStore for JsonShoppingListStore {
    fn load(&self) -> FintrackResult<()> {
        let file_data: ShoppingData = read_json(&self.path)?;
        let mut lists = self.lists.write().map_err(lock_err)?;

        lists.clear();
        for list in file_data.lists {
            lists.insert(list.id, list);
        }
        Ok(())
    }

    fn save(&self) -> FintrackResult<()> {
        let lists = self.lists.read().map_err(lock_err)?;

        let mut all: Vec<_> = lists.values().cloned().collect();
        all.sort_by_key(|l| l.created_at);

        write_json_atomic(&self.path, &ShoppingData { lists: all })
    }

    fn get(&self, id: ShoppingListId) -> FintrackResult<Option<ShoppingList>> {
        let lists = self.lists.read().map_err(lock_err)?;
        Ok(lists.get(&id).cloned())
    }

    fn upsert(&self, list: ShoppingList) -> FintrackResult<()> {
        let mut lists = self.lists.write().map_err(lock_err)?;
        lists.insert(list.id, list);
        Ok(())
    }

    fn delete(&self, id: ShoppingListId) -> FintrackResult<bool> {
        let mut lists = self.lists.write().map_err(lock_err)?;
        Ok(lists.remove(&id).is_some())
    }

    fn list(&self) -> FintrackResult<Vec<ShoppingList>> {
        let lists = self.lists.read().map_err(lock_err)?;
        let mut all: Vec<_> = lists.values().cloned().collect();
        all.sort_by_key(|l| l.created_at);
        Ok(all)
    }
}
