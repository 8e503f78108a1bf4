//! Currency conversion CLI command

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::services::{CurrencyService, HttpRateSource};

use super::budget::parse_amount;

/// Handle `convert AMOUNT FROM TO`
pub fn handle_convert_command(
    settings: &Settings,
    amount: &str,
    from: &str,
    to: &str,
) -> FintrackResult<()> {
    let amount = parse_amount(amount)?;
    let source = HttpRateSource::new()?;
    let service = CurrencyService::new(Box::new(source), settings);

    let result = service.convert(amount, from, to)?;
    println!(
        "{} {} = {} {}  (rate {:.4})",
        result.amount, result.from_currency, result.converted_amount, result.to_currency, result.rate
    );

    Ok(())
}
