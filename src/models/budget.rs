//! Budget plan model
//!
//! A budget plan aggregates income sources, planned/actual expenses, and
//! allocation rules for one month. Totals are denormalized onto the plan
//! and must be recomputed by callers before persisting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AllocationId, BudgetPlanId, ExpenseId, IncomeId};
use super::money::Money;
use super::month::PlanMonth;

/// Classification of an income source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    /// Primary salary or wage
    #[default]
    Main,
    /// Side gigs, freelance
    Side,
    /// Anything else (gifts, refunds, interest)
    Other,
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Side => write!(f, "side"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A single income source within a budget plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeItem {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
    pub kind: IncomeKind,
}

impl IncomeItem {
    pub fn new(name: impl Into<String>, amount: Money, kind: IncomeKind) -> Self {
        Self {
            id: IncomeId::new(),
            name: name.into(),
            amount,
            kind,
        }
    }
}

/// Whether an expense is a fixed obligation or varies month to month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    #[default]
    Fixed,
    Variable,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

/// A planned expense with actual spending recorded against it over the month
///
/// `amount` mirrors `planned` at save time; it is a denormalization kept for
/// compatibility with exported data, not an independent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub subcategory: String,
    pub planned: Money,
    pub actual: Money,
}

impl ExpenseItem {
    pub fn new(
        name: impl Into<String>,
        planned: Money,
        category: ExpenseCategory,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount: planned,
            category,
            subcategory: subcategory.into(),
            planned,
            actual: Money::zero(),
        }
    }

    /// Change the planned amount, keeping the denormalized `amount` in sync
    pub fn set_planned(&mut self, planned: Money) {
        self.planned = planned;
        self.amount = planned;
    }

    /// Record actual spending (replaces the running total)
    pub fn set_actual(&mut self, actual: Money) {
        self.actual = actual;
    }

    /// Add to the actual spending total
    pub fn add_actual(&mut self, spent: Money) {
        self.actual += spent;
    }
}

/// How an allocation target distributes leftover money
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AllocationRule {
    /// Percent of the leftover amount (0-100, not validated to sum to 100)
    Percentage(f64),
    /// Fixed amount taken verbatim, regardless of leftover
    Fixed(Money),
}

impl fmt::Display for AllocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage(p) => write!(f, "{}%", p),
            Self::Fixed(m) => write!(f, "{} fixed", m),
        }
    }
}

/// A rule distributing leftover money into a named bucket
///
/// Represents a rule, not an amount; amounts are derived at read time from
/// the plan's leftover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationTarget {
    pub id: AllocationId,
    pub name: String,
    pub rule: AllocationRule,
    #[serde(default)]
    pub priority: u32,
}

impl AllocationTarget {
    pub fn new(name: impl Into<String>, rule: AllocationRule, priority: u32) -> Self {
        Self {
            id: AllocationId::new(),
            name: name.into(),
            rule,
            priority,
        }
    }

    pub fn percentage(name: impl Into<String>, percent: f64, priority: u32) -> Self {
        Self::new(name, AllocationRule::Percentage(percent), priority)
    }

    pub fn fixed(name: impl Into<String>, amount: Money, priority: u32) -> Self {
        Self::new(name, AllocationRule::Fixed(amount), priority)
    }

    /// The amount this rule allocates out of the given leftover
    ///
    /// Percentage rules scale the leftover; fixed rules ignore it. Nothing
    /// guarantees the amounts across targets sum to the leftover.
    pub fn allocated_from(&self, leftover: Money) -> Money {
        match &self.rule {
            AllocationRule::Percentage(p) => leftover.apply_percentage(*p),
            AllocationRule::Fixed(m) => *m,
        }
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }
        if let AllocationRule::Percentage(p) = self.rule {
            if p < 0.0 {
                return Err(BudgetValidationError::NegativePercentage);
            }
        }
        Ok(())
    }
}

/// Month-scoped aggregate of income, expenses, and allocation rules
///
/// `total_income`, `total_expenses`, and `leftover_amount` are denormalized;
/// callers mutating the child collections are responsible for calling
/// [`BudgetPlan::recompute_totals`] before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub id: BudgetPlanId,
    pub month: PlanMonth,
    #[serde(default)]
    pub income: Vec<IncomeItem>,
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
    #[serde(default)]
    pub allocations: Vec<AllocationTarget>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub leftover_amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetPlan {
    /// Create an empty plan for a month
    pub fn new(month: PlanMonth) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetPlanId::new(),
            month,
            income: Vec::new(),
            expenses: Vec::new(),
            allocations: Vec::new(),
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            leftover_amount: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Recompute the denormalized totals from the child collections
    ///
    /// Also re-syncs each expense's `amount` mirror and bumps `updated_at`.
    pub fn recompute_totals(&mut self) {
        for e in &mut self.expenses {
            e.amount = e.planned;
        }
        self.total_income = self.income.iter().map(|i| i.amount).sum();
        self.total_expenses = self.expenses.iter().map(|e| e.planned).sum();
        self.leftover_amount = self.total_income - self.total_expenses;
        self.updated_at = Utc::now();
    }

    /// Sum of actual spending recorded so far
    pub fn total_actual_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.actual).sum()
    }

    pub fn find_expense_mut(&mut self, id: ExpenseId) -> Option<&mut ExpenseItem> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    pub fn find_income_mut(&mut self, id: IncomeId) -> Option<&mut IncomeItem> {
        self.income.iter_mut().find(|i| i.id == id)
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        for item in &self.income {
            if item.amount.is_negative() {
                return Err(BudgetValidationError::NegativeIncome);
            }
        }
        for item in &self.expenses {
            if item.planned.is_negative() {
                return Err(BudgetValidationError::NegativePlannedExpense);
            }
        }
        for target in &self.allocations {
            target.validate()?;
        }
        Ok(())
    }
}

/// Validation errors for budget plans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeIncome,
    NegativePlannedExpense,
    NegativePercentage,
    EmptyName,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome => write!(f, "Income amount cannot be negative"),
            Self::NegativePlannedExpense => write!(f, "Planned expense cannot be negative"),
            Self::NegativePercentage => write!(f, "Allocation percentage cannot be negative"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
