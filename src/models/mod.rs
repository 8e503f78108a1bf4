//! Core data models for fintrack

pub mod budget;
pub mod ids;
pub mod money;
pub mod month;
pub mod payment;
pub mod shopping;

pub use budget::{
    AllocationRule, AllocationTarget, BudgetPlan, ExpenseCategory, ExpenseItem, IncomeItem,
    IncomeKind,
};
pub use ids::{
    AllocationId, BudgetPlanId, ExpenseId, IncomeId, PaymentId, PaymentPlanId, ShoppingItemId,
    ShoppingListId,
};
pub use money::Money;
pub use month::PlanMonth;
pub use payment::{MonthlyPaymentPlan, PaymentItem, PaymentStatus};
pub use shopping::{ShoppingItem, ShoppingList};
