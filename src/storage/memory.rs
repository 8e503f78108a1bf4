//! In-memory stores
//!
//! Hold everything behind an RwLock with no backing file; `load` and `save`
//! are no-ops. Used for demo mode and in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Datelike;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    AllocationTarget, BudgetPlan, ExpenseCategory, ExpenseItem, IncomeItem, IncomeKind, Money,
    MonthlyPaymentPlan, PaymentItem, PlanMonth, ShoppingItem, ShoppingList, ShoppingListId,
};

use super::{BudgetPlanStore, PaymentPlanStore, ShoppingListStore, Storage};

fn lock_err(e: impl std::fmt::Display) -> FintrackError {
    FintrackError::Storage(format!("Failed to acquire lock: {}", e))
}

/// In-memory budget plan store
#[derive(Default)]
pub struct MemoryBudgetPlanStore {
    plans: RwLock<HashMap<PlanMonth, BudgetPlan>>,
}

impl MemoryBudgetPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetPlanStore for MemoryBudgetPlanStore {
    fn load(&self) -> FintrackResult<()> {
        Ok(())
    }

    fn save(&self) -> FintrackResult<()> {
        Ok(())
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

/// In-memory payment plan store
#[derive(Default)]
pub struct MemoryPaymentPlanStore {
    plans: RwLock<HashMap<PlanMonth, MonthlyPaymentPlan>>,
}

impl MemoryPaymentPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentPlanStore for MemoryPaymentPlanStore {
    fn load(&self) -> FintrackResult<()> {
        Ok(())
    }

    fn save(&self) -> FintrackResult<()> {
        Ok(())
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

/// In-memory shopping list store
#[derive(Default)]
pub struct MemoryShoppingListStore {
    lists: RwLock<HashMap<ShoppingListId, ShoppingList>>,
}

impl MemoryShoppingListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShoppingListStore for MemoryShoppingListStore {
    fn load(&self) -> FintrackResult<()> {
        Ok(())
    }

    fn save(&self) -> FintrackResult<()> {
        Ok(())
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

/// Populate a storage instance with a sample month of data
pub fn seed_demo_data(storage: &Storage) -> FintrackResult<()> {
    let month = PlanMonth::current();

    let mut plan = BudgetPlan::new(month);
    plan.income.push(IncomeItem::new(
        "Salary",
        Money::from_major(8000),
        IncomeKind::Main,
    ));
    plan.income.push(IncomeItem::new(
        "Freelance",
        Money::from_major(2000),
        IncomeKind::Side,
    ));
    plan.expenses.push(ExpenseItem::new(
        "Rent",
        Money::from_major(2500),
        ExpenseCategory::Fixed,
        "housing",
    ));
    plan.expenses.push(ExpenseItem::new(
        "Groceries",
        Money::from_major(1200),
        ExpenseCategory::Variable,
        "food",
    ));
    plan.expenses.push(ExpenseItem::new(
        "Utilities",
        Money::from_major(400),
        ExpenseCategory::Fixed,
        "housing",
    ));
    plan.allocations
        .push(AllocationTarget::percentage("savings", 30.0, 1));
    plan.allocations
        .push(AllocationTarget::percentage("emergency", 20.0, 2));
    plan.allocations
        .push(AllocationTarget::percentage("investments", 40.0, 3));
    plan.allocations
        .push(AllocationTarget::percentage("fun", 10.0, 4));
    plan.recompute_totals();
    storage.budgets.upsert(plan)?;

    let mut payments = MonthlyPaymentPlan::new(month);
    let mut rent = PaymentItem::new(
        "Rent",
        Money::from_major(2500),
        month.first_day().with_day(5).unwrap_or(month.first_day()),
    );
    rent.is_paid = true;
    payments.items.push(rent);
    payments.items.push(PaymentItem::new(
        "Electricity",
        Money::from_major(200),
        month.first_day().with_day(20).unwrap_or(month.last_day()),
    ));
    storage.payments.upsert(payments)?;

    let mut groceries = ShoppingList::new("Weekly groceries");
    groceries.items.push(ShoppingItem::new("Milk", 2));
    groceries.items.push(ShoppingItem::new("Bread", 1));
    groceries.items.push(ShoppingItem::new("Coffee", 1));
    storage.shopping.upsert(groceries)?;

    Ok(())
}
