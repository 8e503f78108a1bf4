//! Data export
//!
//! Turns stored plans and lists into a CSV workbook or a single JSON dump.

pub mod csv;
pub mod json;
pub mod workbook;

pub use csv::write_csv_workbook;
pub use json::{build_json_dump, write_json_dump};
pub use workbook::{build_workbook, Sheet};
