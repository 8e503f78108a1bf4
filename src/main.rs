use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_convert_command, handle_export_command, handle_payment_command,
    handle_shopping_command,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Command-line personal finance tracker",
    long_about = "fintrack tracks monthly budget plans, bill payments, and shopping \
                  lists from the command line, with currency conversion and \
                  spreadsheet export on the side."
)]
struct Cli {
    /// Run against sample in-memory data; nothing is written to disk
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget plan commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Monthly payment tracking commands
    #[command(subcommand, alias = "pay")]
    Payments(fintrack::cli::PaymentCommands),

    /// Shopping list commands
    #[command(subcommand, alias = "shop")]
    Shopping(fintrack::cli::ShoppingCommands),

    /// Convert an amount between currencies
    Convert {
        /// Amount (e.g., "100" or "100.50")
        amount: String,
        /// Source currency code (e.g., EUR)
        from: String,
        /// Target currency code (e.g., RON)
        to: String,
    },

    /// Export stored data to CSV sheets or JSON
    #[command(subcommand)]
    Export(fintrack::cli::ExportCommands),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = if cli.demo {
        Storage::in_memory_demo()?
    } else {
        Storage::json(&paths)?
    };
    storage.load_all()?;

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Payments(cmd)) => {
            handle_payment_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Shopping(cmd)) => {
            handle_shopping_command(&storage, cmd)?;
        }
        Some(Commands::Convert { amount, from, to }) => {
            handle_convert_command(&settings, &amount, &from, &to)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete.");
            println!();
            println!("Run 'fintrack budget show' to start a plan for this month.");
        }
        Some(Commands::Config) => {
            println!("fintrack configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency:            {}", settings.currency_code);
            println!("  Rate cache TTL:      {}s", settings.rate_cache_ttl_secs);
            println!("  Urgent within days:  {}", settings.payment_urgent_days);
            println!("  Soon within days:    {}", settings.payment_soon_days);
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            println!("fintrack - personal finance tracking from the command line");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack --demo budget show' to explore with sample data.");
        }
    }

    Ok(())
}
