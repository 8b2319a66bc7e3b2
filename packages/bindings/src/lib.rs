use chrono::{Local, NaiveDate};
use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use mortgage_core::summary::estimate;
use mortgage_core::types::Currency;
use mortgage_core::validate::{validate, RawLoanInput, ValidationResult};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate raw form fields. The page calls this on every field change and
/// uses the tagged result to flag offending inputs; an invalid verdict is
/// data, not a thrown error.
#[napi]
pub fn validate_loan(input_json: String) -> NapiResult<String> {
    let raw: RawLoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let result = validate(&raw);
    serde_json::to_string(&result).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct EstimateRequest {
    principal: Option<String>,
    annual_rate_pct: Option<String>,
    term_years: Option<String>,
    /// Loan start date; today when omitted.
    start_date: Option<NaiveDate>,
    /// Currency label; MYR when omitted.
    currency: Option<Currency>,
}

/// Run the full estimate for raw form fields.
///
/// The page only triggers this from a valid form state, so invalid input
/// here is a broken caller contract and surfaces as a thrown error rather
/// than a result.
#[napi]
pub fn estimate_loan(input_json: String) -> NapiResult<String> {
    let request: EstimateRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;

    let raw = RawLoanInput {
        principal: request.principal,
        annual_rate_pct: request.annual_rate_pct,
        term_years: request.term_years,
    };

    let loan = match validate(&raw) {
        ValidationResult::Valid(loan) => loan,
        ValidationResult::Invalid(violations) => {
            let reasons: Vec<String> = violations
                .iter()
                .map(|v| format!("{} {}", v.field, v.reason))
                .collect();
            return Err(to_napi_error(format!(
                "input failed validation: {}",
                reasons.join("; ")
            )));
        }
    };

    let start_date = request
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    let currency = request.currency.unwrap_or_default();

    let output = estimate(&loan, start_date, currency);
    serde_json::to_string(&output).map_err(to_napi_error)
}
