//! Plan summaries
//!
//! Pure calculations over budget and payment plans. Nothing in here touches
//! storage, which keeps the math trivially testable.

use crate::models::{AllocationId, BudgetPlan, Money, MonthlyPaymentPlan};

/// Computed view of a single budget plan
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_actual_expenses: Money,
    pub leftover_amount: Money,
    pub actual_leftover_amount: Money,
    pub allocations: Vec<AllocationAmount>,
}

/// One allocation target resolved to a concrete amount
#[derive(Debug, Clone)]
pub struct AllocationAmount {
    pub id: AllocationId,
    pub name: String,
    pub priority: u32,
    pub amount: Money,
}

/// Computed view of a monthly payment plan
#[derive(Debug, Clone)]
pub struct PaymentSummary {
    pub total_amount: Money,
    pub paid_amount: Money,
    pub remaining_amount: Money,
    pub paid_count: usize,
    pub total_count: usize,
    pub completion_percentage: f64,
}

/// Summarize a budget plan: totals, leftover, and resolved allocations.
///
/// Allocations are resolved against the planned leftover in priority order.
/// Percentage targets are taken verbatim; they are not normalized, so a set
/// of rules exceeding 100% simply allocates more than the leftover.
pub fn summarize_budget(plan: &BudgetPlan) -> BudgetSummary {
    let total_income: Money = plan.income.iter().map(|i| i.amount).sum();
    let total_expenses: Money = plan.expenses.iter().map(|e| e.planned).sum();
    let total_actual_expenses: Money = plan.expenses.iter().map(|e| e.actual).sum();
    let leftover_amount = total_income - total_expenses;
    let actual_leftover_amount = total_income - total_actual_expenses;

    let mut allocations: Vec<AllocationAmount> = plan
        .allocations
        .iter()
        .map(|target| AllocationAmount {
            id: target.id,
            name: target.name.clone(),
            priority: target.priority,
            amount: target.allocated_from(leftover_amount),
        })
        .collect();
    allocations.sort_by_key(|a| a.priority);

    BudgetSummary {
        total_income,
        total_expenses,
        total_actual_expenses,
        leftover_amount,
        actual_leftover_amount,
        allocations,
    }
}

/// Summarize a payment plan. Completion is the share of items paid, by
/// count; an empty plan is 0% complete, not NaN.
pub fn summarize_payments(plan: &MonthlyPaymentPlan) -> PaymentSummary {
    let total_amount: Money = plan.items.iter().map(|p| p.amount).sum();
    let paid_amount: Money = plan
        .items
        .iter()
        .filter(|p| p.is_paid)
        .map(|p| p.amount)
        .sum();
    let paid_count = plan.items.iter().filter(|p| p.is_paid).count();
    let total_count = plan.items.len();

    let completion_percentage = if total_count == 0 {
        0.0
    } else {
        paid_count as f64 / total_count as f64 * 100.0
    };

    PaymentSummary {
        total_amount,
        paid_amount,
        remaining_amount: total_amount - paid_amount,
        paid_count,
        total_count,
        completion_percentage,
    }
}
