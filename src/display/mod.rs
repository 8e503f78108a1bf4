//! Display formatting for terminal output
//!
//! Formats data models and summaries as plain text tables for the terminal.

pub mod budget;
pub mod payments;
pub mod shopping;

pub use budget::{format_budget_plan, format_plan_list};
pub use payments::{format_due_list, format_payment_list};
pub use shopping::{format_shopping_list, format_shopping_overview};
