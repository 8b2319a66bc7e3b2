//! Input validation for loan estimates.
//!
//! The estimator form keeps everything as text until submission, so raw
//! fields arrive here as strings. Each field is parsed once into a typed
//! value, then checked against the admissible ranges. Every violated field
//! is reported, not just the first, so the form can flag all offending
//! inputs in one pass. All checks in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::Money;
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Admissible ranges
// ---------------------------------------------------------------------------

/// Smallest principal accepted, in currency units.
pub const MIN_PRINCIPAL: Money = dec!(1_000);

/// Largest principal accepted, in currency units.
pub const MAX_PRINCIPAL: Money = dec!(999_999_999);

/// Lowest annual rate accepted, in percent per annum.
pub const MIN_ANNUAL_RATE_PCT: Decimal = dec!(0.01);

/// Highest annual rate accepted, in percent per annum.
pub const MAX_ANNUAL_RATE_PCT: Decimal = dec!(20.99);

/// Shortest tenure accepted, in whole years.
pub const MIN_TERM_YEARS: u32 = 1;

/// Longest tenure accepted, in whole years.
pub const MAX_TERM_YEARS: u32 = 50;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw, untyped form input. A field is `None` when the form never set it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLoanInput {
    /// Amount borrowed, as entered.
    pub principal: Option<String>,
    /// Annual interest rate in percent, as entered.
    pub annual_rate_pct: Option<String>,
    /// Tenure in years, as entered.
    pub term_years: Option<String>,
}

/// A validated loan.
///
/// Construction goes through [`validate`]; the amortization engine assumes
/// the documented ranges hold and does not re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed, in currency units.
    pub principal: Money,
    /// Annual interest rate in percent (4 means 4% per annum).
    pub annual_rate_pct: Decimal,
    /// Tenure in whole years.
    pub term_years: u32,
}

impl LoanInput {
    /// Typed construction for programmatic callers that never touch the
    /// form. Fails fast on the first out-of-range field; [`validate`] is
    /// the entry point when every violation must be reported together.
    pub fn new(principal: Money, annual_rate_pct: Decimal, term_years: u32) -> MortgageResult<Self> {
        if principal < MIN_PRINCIPAL || principal > MAX_PRINCIPAL {
            return Err(MortgageError::InvalidInput {
                field: "principal".into(),
                reason: "must be between 1,000 and 999,999,999".into(),
            });
        }

        if annual_rate_pct < MIN_ANNUAL_RATE_PCT || annual_rate_pct > MAX_ANNUAL_RATE_PCT {
            return Err(MortgageError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: "must be between 0.01% and 20.99%".into(),
            });
        }

        if term_years < MIN_TERM_YEARS || term_years > MAX_TERM_YEARS {
            return Err(MortgageError::InvalidInput {
                field: "term_years".into(),
                reason: "must be between 1 and 50 years".into(),
            });
        }

        Ok(LoanInput {
            principal,
            annual_rate_pct,
            term_years,
        })
    }
}

/// One rejected field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

/// Outcome of validating a [`RawLoanInput`].
///
/// An invalid result is a normal outcome the caller uses to suppress
/// computation and display, never an error to propagate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid(LoanInput),
    Invalid(Vec<FieldViolation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The validated input, if there is one.
    pub fn input(&self) -> Option<&LoanInput> {
        match self {
            ValidationResult::Valid(input) => Some(input),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// The violated fields; empty for a valid result.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate raw form input, reporting every violated field.
///
/// Pure predicate over its input; callers re-run it on every field change
/// rather than caching a verdict against stale text.
pub fn validate(raw: &RawLoanInput) -> ValidationResult {
    let mut violations: Vec<FieldViolation> = Vec::new();

    let principal = parse_decimal("principal", raw.principal.as_deref(), &mut violations);
    let annual_rate_pct = parse_decimal(
        "annual_rate_pct",
        raw.annual_rate_pct.as_deref(),
        &mut violations,
    );
    let term_years = parse_term(raw.term_years.as_deref(), &mut violations);

    if let Some(p) = principal {
        if p < MIN_PRINCIPAL || p > MAX_PRINCIPAL {
            violations.push(FieldViolation {
                field: "principal".into(),
                reason: "must be between 1,000 and 999,999,999".into(),
            });
        }
    }

    if let Some(r) = annual_rate_pct {
        if r < MIN_ANNUAL_RATE_PCT || r > MAX_ANNUAL_RATE_PCT {
            violations.push(FieldViolation {
                field: "annual_rate_pct".into(),
                reason: "must be between 0.01% and 20.99%".into(),
            });
        }
    }

    if let Some(t) = term_years {
        if t < MIN_TERM_YEARS || t > MAX_TERM_YEARS {
            violations.push(FieldViolation {
                field: "term_years".into(),
                reason: "must be between 1 and 50 years".into(),
            });
        }
    }

    match (principal, annual_rate_pct, term_years) {
        (Some(principal), Some(annual_rate_pct), Some(term_years)) if violations.is_empty() => {
            ValidationResult::Valid(LoanInput {
                principal,
                annual_rate_pct,
                term_years,
            })
        }
        _ => ValidationResult::Invalid(violations),
    }
}

fn parse_decimal(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Decimal> {
    let text = match value.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            violations.push(FieldViolation {
                field: field.into(),
                reason: "is required".into(),
            });
            return None;
        }
    };

    match text.parse::<Decimal>() {
        Ok(v) => Some(v),
        Err(_) => {
            violations.push(FieldViolation {
                field: field.into(),
                reason: "is not a number".into(),
            });
            None
        }
    }
}

fn parse_term(value: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<u32> {
    let text = match value.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            violations.push(FieldViolation {
                field: "term_years".into(),
                reason: "is required".into(),
            });
            return None;
        }
    };

    match text.parse::<u32>() {
        Ok(v) => Some(v),
        Err(_) => {
            violations.push(FieldViolation {
                field: "term_years".into(),
                reason: "is not a whole number of years".into(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn raw(principal: &str, rate: &str, term: &str) -> RawLoanInput {
        RawLoanInput {
            principal: Some(principal.to_string()),
            annual_rate_pct: Some(rate.to_string()),
            term_years: Some(term.to_string()),
        }
    }

    #[test]
    fn test_accepts_lower_bounds() {
        let result = validate(&raw("1000", "0.01", "1"));
        let input = result.input().expect("lower bounds should validate");
        assert_eq!(input.principal, dec!(1000));
        assert_eq!(input.annual_rate_pct, dec!(0.01));
        assert_eq!(input.term_years, 1);
    }

    #[test]
    fn test_accepts_upper_bounds() {
        let result = validate(&raw("999999999", "20.99", "50"));
        assert!(result.is_valid());
    }

    #[test]
    fn test_rejects_principal_below_minimum() {
        let result = validate(&raw("999", "4", "30"));
        assert!(!result.is_valid());
        assert_eq!(result.violations().len(), 1);
        assert_eq!(result.violations()[0].field, "principal");
    }

    #[test]
    fn test_rejects_rate_above_maximum() {
        let result = validate(&raw("500000", "21", "30"));
        assert_eq!(result.violations().len(), 1);
        assert_eq!(result.violations()[0].field, "annual_rate_pct");
    }

    #[test]
    fn test_rejects_term_above_maximum() {
        let result = validate(&raw("500000", "4", "51"));
        assert_eq!(result.violations().len(), 1);
        assert_eq!(result.violations()[0].field, "term_years");
    }

    #[test]
    fn test_reports_all_violated_fields_together() {
        let result = validate(&raw("500", "25", "0"));
        let fields: Vec<&str> = result.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["principal", "annual_rate_pct", "term_years"]);
    }

    #[test]
    fn test_missing_fields_are_violations() {
        let result = validate(&RawLoanInput::default());
        assert_eq!(result.violations().len(), 3);
        for v in result.violations() {
            assert_eq!(v.reason, "is required");
        }
    }

    #[test]
    fn test_blank_field_is_a_violation() {
        let result = validate(&raw("   ", "4", "30"));
        assert_eq!(result.violations()[0].field, "principal");
        assert_eq!(result.violations()[0].reason, "is required");
    }

    #[test]
    fn test_non_numeric_text_is_a_violation() {
        let result = validate(&raw("half a million", "4", "30"));
        assert_eq!(result.violations()[0].reason, "is not a number");
    }

    #[test]
    fn test_fractional_tenure_is_a_violation() {
        let result = validate(&raw("500000", "4", "7.5"));
        assert_eq!(result.violations()[0].field, "term_years");
        assert_eq!(result.violations()[0].reason, "is not a whole number of years");
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let result = validate(&raw("  500000 ", " 4 ", " 30 "));
        assert!(result.is_valid());
    }

    #[test]
    fn test_revalidation_is_pure() {
        let input = raw("500000", "4", "30");
        assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn test_typed_constructor_enforces_ranges() {
        assert!(LoanInput::new(dec!(500_000), dec!(4), 30).is_ok());

        let err = LoanInput::new(dec!(999), dec!(4), 30).unwrap_err();
        assert!(err.to_string().contains("principal"));

        let err = LoanInput::new(dec!(500_000), dec!(21), 30).unwrap_err();
        assert!(err.to_string().contains("annual_rate_pct"));

        let err = LoanInput::new(dec!(500_000), dec!(4), 51).unwrap_err();
        assert!(err.to_string().contains("term_years"));
    }
}
