//! Budget plan operations
//!
//! Mutations go through here so the denormalized totals are always
//! recomputed before a plan is persisted.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    AllocationId, AllocationRule, AllocationTarget, BudgetPlan, ExpenseCategory, ExpenseId,
    ExpenseItem, IncomeId, IncomeItem, IncomeKind, Money, PlanMonth,
};
use crate::storage::Storage;

/// Service for creating and mutating budget plans
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Fetch the plan for a month, or fail if none exists
    pub fn get_plan(&self, month: PlanMonth) -> FintrackResult<BudgetPlan> {
        self.storage
            .budgets
            .get(month)?
            .ok_or_else(|| FintrackError::plan_not_found(month.to_string()))
    }

    /// Fetch the plan for a month, creating an empty one if none exists
    pub fn get_or_create_plan(&self, month: PlanMonth) -> FintrackResult<BudgetPlan> {
        match self.storage.budgets.get(month)? {
            Some(plan) => Ok(plan),
            None => {
                let plan = BudgetPlan::new(month);
                self.persist(plan.clone())?;
                Ok(plan)
            }
        }
    }

    /// All stored plans, oldest month first
    pub fn list_plans(&self) -> FintrackResult<Vec<BudgetPlan>> {
        self.storage.budgets.list()
    }

    /// Add an income source to a month's plan
    pub fn add_income(
        &self,
        month: PlanMonth,
        name: &str,
        amount: Money,
        kind: IncomeKind,
    ) -> FintrackResult<IncomeId> {
        if name.trim().is_empty() {
            return Err(FintrackError::Validation("Income name cannot be empty".into()));
        }
        if amount.is_negative() {
            return Err(FintrackError::Validation(
                "Income amount cannot be negative".into(),
            ));
        }
        let mut plan = self.get_or_create_plan(month)?;
        let item = IncomeItem::new(name, amount, kind);
        let id = item.id;
        plan.income.push(item);
        self.persist(plan)?;
        Ok(id)
    }

    /// Change the amount of an existing income source
    pub fn set_income_amount(
        &self,
        month: PlanMonth,
        id: IncomeId,
        amount: Money,
    ) -> FintrackResult<()> {
        if amount.is_negative() {
            return Err(FintrackError::Validation(
                "Income amount cannot be negative".into(),
            ));
        }
        let mut plan = self.get_plan(month)?;
        match plan.find_income_mut(id) {
            Some(item) => item.amount = amount,
            None => {
                return Err(FintrackError::NotFound {
                    entity_type: "Income item",
                    identifier: id.to_string(),
                })
            }
        }
        self.persist(plan)
    }

    /// Remove an income source by id
    pub fn remove_income(&self, month: PlanMonth, id: IncomeId) -> FintrackResult<()> {
        let mut plan = self.get_plan(month)?;
        let before = plan.income.len();
        plan.income.retain(|i| i.id != id);
        if plan.income.len() == before {
            return Err(FintrackError::NotFound {
                entity_type: "Income item",
                identifier: id.to_string(),
            });
        }
        self.persist(plan)
    }

    /// Add a planned expense to a month's plan
    pub fn add_expense(
        &self,
        month: PlanMonth,
        name: &str,
        planned: Money,
        category: ExpenseCategory,
        subcategory: &str,
    ) -> FintrackResult<ExpenseId> {
        if name.trim().is_empty() {
            return Err(FintrackError::Validation("Expense name cannot be empty".into()));
        }
        if planned.is_negative() {
            return Err(FintrackError::Validation(
                "Planned expense cannot be negative".into(),
            ));
        }
        let mut plan = self.get_or_create_plan(month)?;
        let item = ExpenseItem::new(name, planned, category, subcategory);
        let id = item.id;
        plan.expenses.push(item);
        self.persist(plan)?;
        Ok(id)
    }

    /// Remove an expense by id
    pub fn remove_expense(&self, month: PlanMonth, id: ExpenseId) -> FintrackResult<()> {
        let mut plan = self.get_plan(month)?;
        let before = plan.expenses.len();
        plan.expenses.retain(|e| e.id != id);
        if plan.expenses.len() == before {
            return Err(FintrackError::NotFound {
                entity_type: "Expense item",
                identifier: id.to_string(),
            });
        }
        self.persist(plan)
    }

    /// Record actual spending against an expense (adds to the running total)
    pub fn record_spending(
        &self,
        month: PlanMonth,
        id: ExpenseId,
        spent: Money,
    ) -> FintrackResult<Money> {
        if spent.is_negative() {
            return Err(FintrackError::Validation(
                "Spent amount cannot be negative".into(),
            ));
        }
        let mut plan = self.get_plan(month)?;
        let actual = match plan.find_expense_mut(id) {
            Some(expense) => {
                expense.add_actual(spent);
                expense.actual
            }
            None => {
                return Err(FintrackError::NotFound {
                    entity_type: "Expense item",
                    identifier: id.to_string(),
                })
            }
        };
        self.persist(plan)?;
        Ok(actual)
    }

    /// Add an allocation rule to a month's plan
    pub fn add_allocation(
        &self,
        month: PlanMonth,
        name: &str,
        rule: AllocationRule,
        priority: u32,
    ) -> FintrackResult<AllocationId> {
        let target = AllocationTarget::new(name, rule, priority);
        target
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        let mut plan = self.get_or_create_plan(month)?;
        let id = target.id;
        plan.allocations.push(target);
        self.persist(plan)?;
        Ok(id)
    }

    /// Remove an allocation rule by id
    pub fn remove_allocation(&self, month: PlanMonth, id: AllocationId) -> FintrackResult<()> {
        let mut plan = self.get_plan(month)?;
        let before = plan.allocations.len();
        plan.allocations.retain(|a| a.id != id);
        if plan.allocations.len() == before {
            return Err(FintrackError::NotFound {
                entity_type: "Allocation target",
                identifier: id.to_string(),
            });
        }
        self.persist(plan)
    }

    fn persist(&self, mut plan: BudgetPlan) -> FintrackResult<()> {
        plan.recompute_totals();
        self.storage.budgets.upsert(plan)?;
        self.storage.budgets.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> PlanMonth {
        PlanMonth::new(2025, 4).unwrap()
    }

    fn service(storage: &Storage) -> BudgetService<'_> {
        BudgetService::new(storage)
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let first = svc.get_or_create_plan(month()).unwrap();
        let second = svc.get_or_create_plan(month()).unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(svc.list_plans().unwrap().len(), 1);
    }

    #[test]
    fn test_add_income_recomputes_totals() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        svc.add_income(month(), "Salary", Money::from_major(8000), IncomeKind::Main)
            .unwrap();
        svc.add_income(month(), "Freelance", Money::from_major(2000), IncomeKind::Side)
            .unwrap();

        let plan = svc.get_plan(month()).unwrap();
        assert_eq!(plan.total_income, Money::from_major(10000));
        assert_eq!(plan.leftover_amount, Money::from_major(10000));
    }

    #[test]
    fn test_add_income_rejects_bad_input() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let err = svc
            .add_income(month(), "  ", Money::from_major(100), IncomeKind::Main)
            .unwrap_err();
        assert!(err.is_validation());

        let err = svc
            .add_income(month(), "x", Money::from_major(-1), IncomeKind::Main)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_set_income_amount() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let id = svc
            .add_income(month(), "Salary", Money::from_major(8000), IncomeKind::Main)
            .unwrap();
        svc.set_income_amount(month(), id, Money::from_major(8500))
            .unwrap();

        let plan = svc.get_plan(month()).unwrap();
        assert_eq!(plan.total_income, Money::from_major(8500));

        let err = svc
            .set_income_amount(month(), id, Money::from_major(-1))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_remove_income_missing_id() {
        let storage = Storage::in_memory();
        let svc = service(&storage);
        svc.add_income(month(), "Salary", Money::from_major(8000), IncomeKind::Main)
            .unwrap();

        let err = svc.remove_income(month(), IncomeId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_expense_lifecycle() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        svc.add_income(month(), "Salary", Money::from_major(10000), IncomeKind::Main)
            .unwrap();
        let id = svc
            .add_expense(
                month(),
                "Rent",
                Money::from_major(2500),
                ExpenseCategory::Fixed,
                "housing",
            )
            .unwrap();

        let plan = svc.get_plan(month()).unwrap();
        assert_eq!(plan.total_expenses, Money::from_major(2500));
        assert_eq!(plan.leftover_amount, Money::from_major(7500));

        svc.remove_expense(month(), id).unwrap();
        let plan = svc.get_plan(month()).unwrap();
        assert_eq!(plan.total_expenses, Money::zero());
        assert_eq!(plan.leftover_amount, Money::from_major(10000));
    }

    #[test]
    fn test_record_spending_accumulates() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let id = svc
            .add_expense(
                month(),
                "Groceries",
                Money::from_major(1200),
                ExpenseCategory::Variable,
                "food",
            )
            .unwrap();

        svc.record_spending(month(), id, Money::from_major(300))
            .unwrap();
        let total = svc
            .record_spending(month(), id, Money::from_major(150))
            .unwrap();
        assert_eq!(total, Money::from_major(450));

        let plan = svc.get_plan(month()).unwrap();
        assert_eq!(plan.total_actual_expenses(), Money::from_major(450));
        // Planned side untouched.
        assert_eq!(plan.total_expenses, Money::from_major(1200));
    }

    #[test]
    fn test_allocation_validation() {
        let storage = Storage::in_memory();
        let svc = service(&storage);

        let err = svc
            .add_allocation(month(), "", AllocationRule::Percentage(30.0), 1)
            .unwrap_err();
        assert!(err.is_validation());

        let err = svc
            .add_allocation(month(), "savings", AllocationRule::Percentage(-5.0), 1)
            .unwrap_err();
        assert!(err.is_validation());

        svc.add_allocation(month(), "savings", AllocationRule::Percentage(30.0), 1)
            .unwrap();
        assert_eq!(svc.get_plan(month()).unwrap().allocations.len(), 1);
    }

    #[test]
    fn test_get_missing_plan_fails() {
        let storage = Storage::in_memory();
        let svc = service(&storage);
        assert!(svc.get_plan(month()).unwrap_err().is_not_found());
    }
}
