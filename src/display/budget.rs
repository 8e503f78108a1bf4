//! Budget display formatting
//!
//! Formats budget plans and their summaries for terminal output.

use crate::models::BudgetPlan;
use crate::services::BudgetSummary;

/// Format a full budget plan view: income, expenses, allocations, totals
pub fn format_budget_plan(plan: &BudgetPlan, summary: &BudgetSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget plan for {}\n\n", plan.month));

    if plan.income.is_empty() {
        output.push_str("No income recorded.\n");
    } else {
        output.push_str("Income\n");
        for item in &plan.income {
            output.push_str(&format!(
                "  {}  {:<24} {:>12} {}  ({})\n",
                item.id,
                item.name,
                item.amount.to_string(),
                currency,
                item.kind
            ));
        }
    }
    output.push('\n');

    if plan.expenses.is_empty() {
        output.push_str("No expenses planned.\n");
    } else {
        output.push_str("Expenses (planned / actual)\n");
        for item in &plan.expenses {
            let label = if item.subcategory.is_empty() {
                item.category.to_string()
            } else {
                format!("{}/{}", item.category, item.subcategory)
            };
            output.push_str(&format!(
                "  {}  {:<24} {:>12} / {:>12} {}  ({})\n",
                item.id,
                item.name,
                item.planned.to_string(),
                item.actual.to_string(),
                currency,
                label
            ));
        }
    }
    output.push('\n');

    if !summary.allocations.is_empty() {
        output.push_str("Allocations from leftover\n");
        for alloc in &summary.allocations {
            output.push_str(&format!(
                "  {}  {:<24} {:>12} {}\n",
                alloc.id,
                alloc.name,
                alloc.amount.to_string(),
                currency
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "  Total income:    {:>12} {}\n",
        summary.total_income.to_string(),
        currency
    ));
    output.push_str(&format!(
        "  Total expenses:  {:>12} {}\n",
        summary.total_expenses.to_string(),
        currency
    ));
    output.push_str(&format!(
        "  Actual spent:    {:>12} {}\n",
        summary.total_actual_expenses.to_string(),
        currency
    ));
    output.push_str(&format!(
        "  Leftover:        {:>12} {}\n",
        summary.leftover_amount.to_string(),
        currency
    ));

    output
}

/// Format a one-line-per-month overview of all stored plans
pub fn format_plan_list(plans: &[BudgetPlan], currency: &str) -> String {
    if plans.is_empty() {
        return "No budget plans found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:>12}  {:>12}  {:>12}\n",
        "Month", "Income", "Expenses", "Leftover"
    ));
    output.push_str(&format!(
        "{:-<8}  {:->12}  {:->12}  {:->12}\n",
        "", "", "", ""
    ));
    for plan in plans {
        output.push_str(&format!(
            "{:<8}  {:>12}  {:>12}  {:>12}\n",
            plan.month.to_string(),
            plan.total_income.to_string(),
            plan.total_expenses.to_string(),
            plan.leftover_amount.to_string()
        ));
    }
    output.push_str(&format!("\nAmounts in {}.\n", currency));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AllocationTarget, ExpenseCategory, ExpenseItem, IncomeItem, IncomeKind, Money, PlanMonth,
    };
    use crate::services::summarize_budget;

    fn sample_plan() -> BudgetPlan {
        let mut plan = BudgetPlan::new(PlanMonth::new(2025, 3).unwrap());
        plan.income.push(IncomeItem::new(
            "Salary",
            Money::from_major(8000),
            IncomeKind::Main,
        ));
        plan.expenses.push(ExpenseItem::new(
            "Rent",
            Money::from_major(2500),
            ExpenseCategory::Fixed,
            "housing",
        ));
        plan.allocations
            .push(AllocationTarget::percentage("savings", 30.0, 1));
        plan.recompute_totals();
        plan
    }

    #[test]
    fn test_format_budget_plan() {
        let plan = sample_plan();
        let summary = summarize_budget(&plan);
        let output = format_budget_plan(&plan, &summary, "RON");

        assert!(output.contains("Salary"));
        assert!(output.contains("Rent"));
        assert!(output.contains("savings"));
        assert!(output.contains("5500.00"));
        assert!(output.contains("1650.00"));
    }

    #[test]
    fn test_format_empty_plan() {
        let plan = BudgetPlan::new(PlanMonth::new(2025, 3).unwrap());
        let summary = summarize_budget(&plan);
        let output = format_budget_plan(&plan, &summary, "RON");
        assert!(output.contains("No income recorded"));
        assert!(output.contains("No expenses planned"));
    }

    #[test]
    fn test_format_plan_list() {
        let output = format_plan_list(&[sample_plan()], "RON");
        assert!(output.contains("2025-03"));
        assert!(output.contains("8000.00"));

        assert!(format_plan_list(&[], "RON").contains("No budget plans"));
    }
}
