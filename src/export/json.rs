//! JSON dump writer
//!
//! Exports every stored entity into a single JSON document, mainly for
//! backups and for moving data between machines.

use std::path::Path;

use serde::Serialize;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetPlan, MonthlyPaymentPlan, ShoppingList};
use crate::storage::Storage;

/// The full exported dataset
#[derive(Debug, Serialize)]
pub struct JsonDump {
    pub exported_at: chrono::DateTime<chrono::Utc>,
    pub budget_plans: Vec<BudgetPlan>,
    pub payment_plans: Vec<MonthlyPaymentPlan>,
    pub shopping_lists: Vec<ShoppingList>,
}

/// Collect everything in storage into a dump
pub fn build_json_dump(storage: &Storage) -> FintrackResult<JsonDump> {
    Ok(JsonDump {
        exported_at: chrono::Utc::now(),
        budget_plans: storage.budgets.list()?,
        payment_plans: storage.payments.list()?,
        shopping_lists: storage.shopping.list()?,
    })
}

/// Write the dump to a file as pretty-printed JSON
pub fn write_json_dump(storage: &Storage, out_file: &Path) -> FintrackResult<()> {
    if let Some(parent) = out_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            FintrackError::Export(format!("Failed to create output directory: {}", e))
        })?;
    }
    let dump = build_json_dump(storage)?;
    let contents = serde_json::to_string_pretty(&dump)
        .map_err(|e| FintrackError::Export(format!("Failed to serialize export: {}", e)))?;
    std::fs::write(out_file, contents)
        .map_err(|e| FintrackError::Export(format!("Failed to write {}: {}", out_file.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::seed_demo_data;
    use tempfile::TempDir;

    #[test]
    fn test_dump_contains_all_collections() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();

        let dump = build_json_dump(&storage).unwrap();
        assert_eq!(dump.budget_plans.len(), 1);
        assert_eq!(dump.payment_plans.len(), 1);
        assert_eq!(dump.shopping_lists.len(), 1);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/export.json");
        write_json_dump(&storage, &out).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value["budget_plans"].is_array());
        assert_eq!(value["budget_plans"].as_array().unwrap().len(), 1);
    }
}
