//! Workbook assembly
//!
//! Shapes stored data into sheets: one per entity category plus a computed
//! summary sheet. Writers in the sibling modules decide the on-disk format.

use std::collections::BTreeSet;

use crate::error::FintrackResult;
use crate::models::PlanMonth;
use crate::services::{summarize_budget, summarize_payments};
use crate::storage::Storage;

/// A single named sheet: a header row plus data rows
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: &'static str,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: &'static str, header: Vec<&'static str>) -> Self {
        Self {
            name,
            header,
            rows: Vec::new(),
        }
    }
}

/// Build the full workbook from everything in storage
pub fn build_workbook(storage: &Storage) -> FintrackResult<Vec<Sheet>> {
    let budgets = storage.budgets.list()?;
    let payments = storage.payments.list()?;
    let shopping = storage.shopping.list()?;

    let mut income = Sheet::new("Income", vec!["Month", "Name", "Amount", "Type"]);
    let mut expenses = Sheet::new(
        "Expenses",
        vec!["Month", "Name", "Category", "Subcategory", "Planned", "Actual"],
    );
    let mut allocations = Sheet::new(
        "Allocations",
        vec!["Month", "Name", "Rule", "Priority", "Amount"],
    );
    let mut bills = Sheet::new(
        "Payments",
        vec!["Month", "Name", "Amount", "Due date", "Paid"],
    );
    let mut lists = Sheet::new("Shopping", vec!["List", "Item", "Quantity", "Checked"]);
    let mut summary = Sheet::new(
        "Summary",
        vec![
            "Month",
            "Total income",
            "Total expenses",
            "Actual expenses",
            "Leftover",
            "Payments total",
            "Payments paid",
            "Payments done %",
        ],
    );

    for plan in &budgets {
        let month = plan.month.to_string();
        let plan_summary = summarize_budget(plan);

        for item in &plan.income {
            income.rows.push(vec![
                month.clone(),
                item.name.clone(),
                item.amount.to_string(),
                item.kind.to_string(),
            ]);
        }
        for item in &plan.expenses {
            expenses.rows.push(vec![
                month.clone(),
                item.name.clone(),
                item.category.to_string(),
                item.subcategory.clone(),
                item.planned.to_string(),
                item.actual.to_string(),
            ]);
        }
        for target in &plan.allocations {
            let amount = target.allocated_from(plan_summary.leftover_amount);
            allocations.rows.push(vec![
                month.clone(),
                target.name.clone(),
                target.rule.to_string(),
                target.priority.to_string(),
                amount.to_string(),
            ]);
        }
    }

    // A month belongs in the summary when either side tracked it, so a
    // payment-only month still gets a row.
    let months: BTreeSet<PlanMonth> = budgets
        .iter()
        .map(|p| p.month)
        .chain(payments.iter().map(|p| p.month))
        .collect();

    for month in months {
        let plan_summary = budgets
            .iter()
            .find(|p| p.month == month)
            .map(summarize_budget);
        let payment_summary = payments
            .iter()
            .find(|p| p.month == month)
            .map(summarize_payments);

        summary.rows.push(vec![
            month.to_string(),
            plan_summary
                .as_ref()
                .map(|s| s.total_income.to_string())
                .unwrap_or_default(),
            plan_summary
                .as_ref()
                .map(|s| s.total_expenses.to_string())
                .unwrap_or_default(),
            plan_summary
                .as_ref()
                .map(|s| s.total_actual_expenses.to_string())
                .unwrap_or_default(),
            plan_summary
                .as_ref()
                .map(|s| s.leftover_amount.to_string())
                .unwrap_or_default(),
            payment_summary
                .as_ref()
                .map(|s| s.total_amount.to_string())
                .unwrap_or_default(),
            payment_summary
                .as_ref()
                .map(|s| s.paid_amount.to_string())
                .unwrap_or_default(),
            payment_summary
                .as_ref()
                .map(|s| format!("{:.0}", s.completion_percentage))
                .unwrap_or_default(),
        ]);
    }

    for plan in &payments {
        let month = plan.month.to_string();
        for item in &plan.items {
            bills.rows.push(vec![
                month.clone(),
                item.name.clone(),
                item.amount.to_string(),
                item.due_date.to_string(),
                if item.is_paid { "yes" } else { "no" }.to_string(),
            ]);
        }
    }

    for list in &shopping {
        for item in &list.items {
            lists.rows.push(vec![
                list.name.clone(),
                item.name.clone(),
                item.quantity.to_string(),
                if item.checked { "yes" } else { "no" }.to_string(),
            ]);
        }
    }

    Ok(vec![income, expenses, allocations, bills, lists, summary])
}
