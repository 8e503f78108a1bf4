//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod budget;
pub mod currency;
pub mod export;
pub mod payments;
pub mod shopping;

pub use budget::{handle_budget_command, BudgetCommands};
pub use currency::handle_convert_command;
pub use export::{handle_export_command, ExportCommands};
pub use payments::{handle_payment_command, PaymentCommands};
pub use shopping::{handle_shopping_command, ShoppingCommands};
