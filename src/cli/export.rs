//! Export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::FintrackResult;
use crate::export::{build_workbook, write_csv_workbook, write_json_dump};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export everything as a directory of CSV sheets
    Csv {
        /// Output directory
        #[arg(short, long, default_value = "fintrack-export")]
        out: PathBuf,
    },

    /// Export everything as a single JSON file
    Json {
        /// Output file
        #[arg(short, long, default_value = "fintrack-export.json")]
        out: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Csv { out } => {
            let sheets = build_workbook(storage)?;
            let files = write_csv_workbook(&sheets, &out)?;
            println!("Exported {} sheets to {}", files.len(), out.display());
            for file in files {
                println!("  {}", file.display());
            }
        }

        ExportCommands::Json { out } => {
            write_json_dump(storage, &out)?;
            println!("Exported data to {}", out.display());
        }
    }

    Ok(())
}
