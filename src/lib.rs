//! fintrack - personal finance tracking from the command line
//!
//! This library backs the `fintrack` binary. It tracks monthly budget plans
//! (income, planned and actual expenses, leftover allocation rules), bill
//! payments with due-date urgency, and shopping lists, with currency
//! conversion and spreadsheet export on the side.
//!
//! # Architecture
//!
//! - `config`: settings and path management
//! - `error`: custom error types
//! - `models`: core data models (plans, payments, shopping lists, money)
//! - `storage`: pluggable stores with JSON file and in-memory backends
//! - `services`: business logic layer, including the pure summary calculators
//! - `display`: terminal table formatting
//! - `export`: CSV workbook and JSON dump export
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FintrackPaths, Settings};
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FintrackError;
