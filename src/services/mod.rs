//! Domain services
//!
//! Each service borrows the storage coordinator and exposes the operations
//! one CLI domain needs. The summary module is pure calculation shared by
//! display and export.

pub mod budget;
pub mod currency;
pub mod payments;
pub mod shopping;
pub mod summary;

pub use budget::BudgetService;
pub use currency::{Conversion, CurrencyService, HttpRateSource, RateSource};
pub use payments::{PaymentService, PaymentWithStatus};
pub use shopping::ShoppingService;
pub use summary::{
    summarize_budget, summarize_payments, AllocationAmount, BudgetSummary, PaymentSummary,
};
