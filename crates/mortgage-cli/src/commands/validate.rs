use clap::Args;
use serde_json::Value;

use mortgage_core::validate::{validate, RawLoanInput};

use crate::input;

/// Arguments for standalone input validation
#[derive(Args)]
pub struct ValidateArgs {
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
}

/// Run the validator alone and print the tagged result.
///
/// An invalid verdict is still a successful run; the form uses it to flag
/// fields, not to abort.
pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
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

    let result = validate(&raw);
    Ok(serde_json::to_value(&result)?)
}
