//! Budget CLI commands
//!
//! Implements CLI commands for monthly budget plans: income, expenses,
//! spending, and allocation targets.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_plan, format_plan_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{AllocationRule, ExpenseCategory, IncomeKind, Money, PlanMonth};
use crate::services::{summarize_budget, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget plan for a month
    Show {
        /// Month (e.g., "2025-03"; defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List all stored budget plans
    List,

    /// Add an income source
    AddIncome {
        /// Income name
        name: String,
        /// Amount (e.g., "8000" or "8000.00")
        amount: String,
        /// Income type: main, side, or other
        #[arg(short, long, default_value = "main")]
        kind: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change the amount of an existing income source
    SetIncome {
        /// Income id (or short prefix)
        id: String,
        /// New amount
        amount: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove an income source by id
    RemoveIncome {
        /// Income id (or short prefix shown in the plan view)
        id: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Add a planned expense
    AddExpense {
        /// Expense name
        name: String,
        /// Planned amount
        amount: String,
        /// Category: fixed or variable
        #[arg(short, long, default_value = "variable")]
        category: String,
        /// Subcategory (e.g., "housing", "food")
        #[arg(short, long, default_value = "")]
        subcategory: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove an expense by id
    RemoveExpense {
        /// Expense id (or short prefix)
        id: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Record actual spending against an expense
    Spend {
        /// Expense id (or short prefix)
        id: String,
        /// Amount spent
        amount: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Add an allocation target for the leftover amount
    AddAllocation {
        /// Bucket name (e.g., "savings")
        name: String,
        /// Percentage of leftover (e.g., "30"); mutually exclusive with --fixed
        #[arg(short, long)]
        percent: Option<f64>,
        /// Fixed amount instead of a percentage
        #[arg(short, long)]
        fixed: Option<String>,
        /// Ordering priority (lower first)
        #[arg(long, default_value = "0")]
        priority: u32,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove an allocation target by id
    RemoveAllocation {
        /// Allocation id (or short prefix)
        id: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },
}

pub(crate) fn parse_month(month: Option<&str>) -> FintrackResult<PlanMonth> {
    match month {
        Some(raw) => raw
            .parse()
            .map_err(|e| FintrackError::Validation(format!("Invalid month: {}", e))),
        None => Ok(PlanMonth::current()),
    }
}

pub(crate) fn parse_amount(raw: &str) -> FintrackResult<Money> {
    Money::parse(raw).map_err(|e| FintrackError::Validation(format!("Invalid amount: {}", e)))
}

fn parse_kind(raw: &str) -> FintrackResult<IncomeKind> {
    match raw.to_lowercase().as_str() {
        "main" => Ok(IncomeKind::Main),
        "side" => Ok(IncomeKind::Side),
        "other" => Ok(IncomeKind::Other),
        other => Err(FintrackError::Validation(format!(
            "Unknown income type '{}' (expected main, side, or other)",
            other
        ))),
    }
}

fn parse_category(raw: &str) -> FintrackResult<ExpenseCategory> {
    match raw.to_lowercase().as_str() {
        "fixed" => Ok(ExpenseCategory::Fixed),
        "variable" => Ok(ExpenseCategory::Variable),
        other => Err(FintrackError::Validation(format!(
            "Unknown expense category '{}' (expected fixed or variable)",
            other
        ))),
    }
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let service = BudgetService::new(storage);
    let currency = settings.currency_code.as_str();

    match cmd {
        BudgetCommands::Show { month } => {
            let month = parse_month(month.as_deref())?;
            // Viewing a month must not persist an empty plan for it.
            match service.get_plan(month) {
                Ok(plan) => {
                    let summary = summarize_budget(&plan);
                    print!("{}", format_budget_plan(&plan, &summary, currency));
                }
                Err(err) if err.is_not_found() => {
                    println!("No budget plan for {}.", month);
                }
                Err(err) => return Err(err),
            }
        }

        BudgetCommands::List => {
            let plans = service.list_plans()?;
            print!("{}", format_plan_list(&plans, currency));
        }

        BudgetCommands::AddIncome {
            name,
            amount,
            kind,
            month,
        } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let kind = parse_kind(&kind)?;
            let id = service.add_income(month, &name, amount, kind)?;
            println!("Added income '{}' ({} {}) to {} [{}]", name, amount, currency, month, id);
        }

        BudgetCommands::SetIncome { id, amount, month } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let plan = service.get_plan(month)?;
            let income_id = plan
                .income
                .iter()
                .find(|i| i.id.matches_prefix(&id))
                .map(|i| i.id)
                .ok_or_else(|| FintrackError::NotFound {
                    entity_type: "Income item",
                    identifier: id.clone(),
                })?;
            service.set_income_amount(month, income_id, amount)?;
            println!("Set income {} to {} {}", income_id, amount, currency);
        }

        BudgetCommands::RemoveIncome { id, month } => {
            let month = parse_month(month.as_deref())?;
            let plan = service.get_plan(month)?;
            let income_id = plan
                .income
                .iter()
                .find(|i| i.id.matches_prefix(&id))
                .map(|i| i.id)
                .ok_or_else(|| FintrackError::NotFound {
                    entity_type: "Income item",
                    identifier: id.clone(),
                })?;
            service.remove_income(month, income_id)?;
            println!("Removed income {} from {}", income_id, month);
        }

        BudgetCommands::AddExpense {
            name,
            amount,
            category,
            subcategory,
            month,
        } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let id = service.add_expense(month, &name, amount, category, &subcategory)?;
            println!(
                "Added expense '{}' ({} {}) to {} [{}]",
                name, amount, currency, month, id
            );
        }

        BudgetCommands::RemoveExpense { id, month } => {
            let month = parse_month(month.as_deref())?;
            let plan = service.get_plan(month)?;
            let expense_id = plan
                .expenses
                .iter()
                .find(|e| e.id.matches_prefix(&id))
                .map(|e| e.id)
                .ok_or_else(|| FintrackError::NotFound {
                    entity_type: "Expense item",
                    identifier: id.clone(),
                })?;
            service.remove_expense(month, expense_id)?;
            println!("Removed expense {} from {}", expense_id, month);
        }

        BudgetCommands::Spend { id, amount, month } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let plan = service.get_plan(month)?;
            let expense = plan
                .expenses
                .iter()
                .find(|e| e.id.matches_prefix(&id))
                .ok_or_else(|| FintrackError::NotFound {
                    entity_type: "Expense item",
                    identifier: id.clone(),
                })?;
            let name = expense.name.clone();
            let planned = expense.planned;
            let total = service.record_spending(month, expense.id, amount)?;
            println!(
                "Recorded {} {} against '{}' ({} of {} planned)",
                amount, currency, name, total, planned
            );
        }

        BudgetCommands::AddAllocation {
            name,
            percent,
            fixed,
            priority,
            month,
        } => {
            let month = parse_month(month.as_deref())?;
            let rule = match (percent, fixed) {
                (Some(p), None) => AllocationRule::Percentage(p),
                (None, Some(raw)) => AllocationRule::Fixed(parse_amount(&raw)?),
                _ => {
                    return Err(FintrackError::Validation(
                        "Provide exactly one of --percent or --fixed".into(),
                    ))
                }
            };
            let id = service.add_allocation(month, &name, rule, priority)?;
            println!("Added allocation '{}' to {} [{}]", name, month, id);
        }

        BudgetCommands::RemoveAllocation { id, month } => {
            let month = parse_month(month.as_deref())?;
            let plan = service.get_plan(month)?;
            let alloc_id = plan
                .allocations
                .iter()
                .find(|a| a.id.matches_prefix(&id))
                .map(|a| a.id)
                .ok_or_else(|| FintrackError::NotFound {
                    entity_type: "Allocation target",
                    identifier: id.clone(),
                })?;
            service.remove_allocation(month, alloc_id)?;
            println!("Removed allocation {} from {}", alloc_id, month);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_defaults_to_current() {
        assert_eq!(parse_month(None).unwrap(), PlanMonth::current());
        assert_eq!(
            parse_month(Some("2025-03")).unwrap(),
            PlanMonth::new(2025, 3).unwrap()
        );
        assert!(parse_month(Some("not-a-month")).unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_kind_and_category() {
        assert_eq!(parse_kind("Side").unwrap(), IncomeKind::Side);
        assert!(parse_kind("salary").is_err());
        assert_eq!(parse_category("FIXED").unwrap(), ExpenseCategory::Fixed);
        assert!(parse_category("weird").is_err());
    }
}
