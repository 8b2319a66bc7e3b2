use chrono::{Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use mortgage_core::summary::estimate;
use mortgage_core::types::Currency;
use mortgage_core::validate::{validate, RawLoanInput, ValidationResult};

use crate::input;

/// Arguments for a loan estimate
#[derive(Args)]
pub struct EstimateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed, in currency units
    #[arg(long, alias = "amount")]
    pub principal: Option<String>,

    /// Annual interest rate in percent (4 means 4%)
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<String>,

    /// Tenure in whole years
    #[arg(long, alias = "term")]
    pub term_years: Option<String>,

    /// Loan start date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Currency label for displayed amounts
    #[arg(long, default_value = "MYR")]
    pub currency: String,
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw: RawLoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        RawLoanInput {
            principal: args.principal.clone(),
            annual_rate_pct: args.annual_rate_pct.clone(),
            term_years: args.term_years.clone(),
        }
    };

    let loan = match validate(&raw) {
        ValidationResult::Valid(loan) => loan,
        ValidationResult::Invalid(violations) => {
            for v in &violations {
                eprintln!("{}: {} {}", "invalid".yellow().bold(), v.field, v.reason);
            }
            return Err("input failed validation".into());
        }
    };

    let start_date = args.start_date.unwrap_or_else(|| Local::now().date_naive());
    let output = estimate(&loan, start_date, parse_currency(&args.currency));

    Ok(serde_json::to_value(&output)?)
}

fn parse_currency(code: &str) -> Currency {
    match code.to_ascii_uppercase().as_str() {
        "MYR" => Currency::MYR,
        "USD" => Currency::USD,
        "EUR" => Currency::EUR,
        "GBP" => Currency::GBP,
        "SGD" => Currency::SGD,
        other => Currency::Other(other.to_string()),
    }
}
