//! Payment CLI commands
//!
//! Monthly bill tracking: add, pay, and review what is due.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_due_list, format_payment_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::PaymentId;
use crate::services::{summarize_payments, PaymentService};
use crate::storage::Storage;

use super::budget::{parse_amount, parse_month};

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Show all payments for a month with due-date status
    Show {
        /// Month (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Add a bill to track
    Add {
        /// Payment name
        name: String,
        /// Amount
        amount: String,
        /// Due date (YYYY-MM-DD)
        due: String,
        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove a bill by id
    Remove {
        /// Payment id (or short prefix)
        id: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Mark a bill as paid
    Pay {
        /// Payment id (or short prefix)
        id: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Mark a bill as unpaid
    Unpay {
        /// Payment id (or short prefix)
        id: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show only the bills that need attention (overdue, urgent, soon)
    Due {
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn parse_due_date(raw: &str, format: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, format)
        .map_err(|e| FintrackError::Validation(format!("Invalid due date '{}': {}", raw, e)))
}

fn resolve_payment_id(
    service: &PaymentService<'_>,
    month: crate::models::PlanMonth,
    prefix: &str,
) -> FintrackResult<PaymentId> {
    let plan = service.get_plan(month)?;
    plan.items
        .iter()
        .find(|p| p.id.matches_prefix(prefix))
        .map(|p| p.id)
        .ok_or_else(|| FintrackError::payment_not_found(prefix))
}

/// Handle a payment command
pub fn handle_payment_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PaymentCommands,
) -> FintrackResult<()> {
    let service = PaymentService::new(storage, settings);
    let currency = settings.currency_code.as_str();

    match cmd {
        PaymentCommands::Show { month } => {
            let month = parse_month(month.as_deref())?;
            // Viewing a month must not persist an empty plan for it.
            match service.get_plan(month) {
                Ok(plan) => {
                    let summary = summarize_payments(&plan);
                    let items = service.payments_with_status(month)?;
                    println!("Payments for {}", month);
                    print!("{}", format_payment_list(&items, &summary, currency));
                }
                Err(err) if err.is_not_found() => {
                    println!("No payments tracked for {}.", month);
                }
                Err(err) => return Err(err),
            }
        }

        PaymentCommands::Add {
            name,
            amount,
            due,
            notes,
            month,
        } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let due = parse_due_date(&due, &settings.date_format)?;
            let id = service.add_payment(month, &name, amount, due, &notes)?;
            println!(
                "Added payment '{}' ({} {}) due {} [{}]",
                name, amount, currency, due, id
            );
        }

        PaymentCommands::Remove { id, month } => {
            let month = parse_month(month.as_deref())?;
            let payment_id = resolve_payment_id(&service, month, &id)?;
            service.remove_payment(month, payment_id)?;
            println!("Removed payment {}", payment_id);
        }

        PaymentCommands::Pay { id, month } => {
            let month = parse_month(month.as_deref())?;
            let payment_id = resolve_payment_id(&service, month, &id)?;
            service.mark_paid(month, payment_id)?;
            println!("Marked {} as paid", payment_id);
        }

        PaymentCommands::Unpay { id, month } => {
            let month = parse_month(month.as_deref())?;
            let payment_id = resolve_payment_id(&service, month, &id)?;
            service.mark_unpaid(month, payment_id)?;
            println!("Marked {} as unpaid", payment_id);
        }

        PaymentCommands::Due { month } => {
            let month = parse_month(month.as_deref())?;
            match service.due_payments(month) {
                Ok(due) => print!("{}", format_due_list(&due, currency)),
                Err(err) if err.is_not_found() => print!("{}", format_due_list(&[], currency)),
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date() {
        let date = parse_due_date("2025-03-10", "%Y-%m-%d").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert!(parse_due_date("10/03/2025", "%Y-%m-%d")
            .unwrap_err()
            .is_validation());
    }
}
