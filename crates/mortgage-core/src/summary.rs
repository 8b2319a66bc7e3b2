//! Estimate assembly for the presentation layer.
//!
//! The engine only returns aggregate metrics; everything the estimator
//! page renders on top of them lives here: the principal/interest split
//! that drives the donut arc, the payoff date, the tenure in months, and
//! the standard output envelope.

use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{compute_metrics, num_payments, LoanMetrics};
use crate::types::{with_metadata, ComputationOutput, Currency, Money, Rate};
use crate::validate::LoanInput;

/// Share of the total repayment going to principal vs interest.
///
/// Both are fractions of 1 over the same denominator (the total payment),
/// so they sum to 1 and can drive an arc or bar directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// principal / total_payment.
    pub principal_share: Rate,
    /// total_interest / total_payment.
    pub interest_share: Rate,
}

/// Complete estimate as rendered by the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanEstimate {
    /// Currency label for displayed amounts.
    pub currency: Currency,
    /// Date the loan starts.
    pub start_date: NaiveDate,
    /// Date the final installment falls in.
    pub payoff_date: NaiveDate,
    /// Tenure expressed in months.
    pub term_months: u32,
    /// Aggregate repayment metrics, full precision.
    pub metrics: LoanMetrics,
    /// Principal/interest split of the total payment.
    pub breakdown: PaymentBreakdown,
}

/// Derive the principal/interest split from computed metrics.
///
/// The denominator is the total payment, which is strictly positive for
/// any validated loan, so no zero-denominator guard is needed here.
pub fn payment_breakdown(principal: Money, metrics: &LoanMetrics) -> PaymentBreakdown {
    PaymentBreakdown {
        principal_share: principal / metrics.total_payment,
        interest_share: metrics.total_interest / metrics.total_payment,
    }
}

/// Date the final installment falls in: same calendar month and day, year
/// advanced by the tenure. A Feb 29 start clamps to Feb 28 when the target
/// year is not a leap year.
pub fn payoff_date(start: NaiveDate, term_years: u32) -> NaiveDate {
    let year = start.year() + term_years as i32;
    match NaiveDate::from_ymd_opt(year, start.month(), start.day()) {
        Some(date) => date,
        None => NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year"),
    }
}

/// Assemble the full estimate for a validated loan.
///
/// The start date is passed in by the caller (the CLI and the bindings
/// default it to today) so the computation itself stays deterministic.
pub fn estimate(
    input: &LoanInput,
    start_date: NaiveDate,
    currency: Currency,
) -> ComputationOutput<LoanEstimate> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let metrics = compute_metrics(input);
    let breakdown = payment_breakdown(input.principal, &metrics);

    if input.annual_rate_pct > dec!(10) {
        warnings.push(format!(
            "Annual rate {}% exceeds 10% — unusually high for a mortgage, verify the quoted rate",
            input.annual_rate_pct
        ));
    }
    if metrics.total_interest > input.principal {
        warnings.push(
            "Total interest exceeds the amount borrowed over this tenure".to_string(),
        );
    }

    let output = LoanEstimate {
        currency,
        start_date,
        payoff_date: payoff_date(start_date, input.term_years),
        term_months: num_payments(input.term_years),
        metrics,
        breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Fixed-Rate Amortization (Monthly Compounding)",
        input,
        warnings,
        elapsed,
        output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn benchmark_loan() -> LoanInput {
        LoanInput {
            principal: dec!(500_000),
            annual_rate_pct: dec!(4),
            term_years: 30,
        }
    }

    #[test]
    fn test_shares_sum_to_one() {
        let metrics = compute_metrics(&benchmark_loan());
        let breakdown = payment_breakdown(dec!(500_000), &metrics);
        let sum = breakdown.principal_share + breakdown.interest_share;
        assert!((sum - Decimal::ONE).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_interest_share_matches_benchmark() {
        let metrics = compute_metrics(&benchmark_loan());
        let breakdown = payment_breakdown(dec!(500_000), &metrics);
        // ~41.8% of the total repayment is interest at 4% over 30 years
        assert_eq!(breakdown.interest_share.round_dp(4), dec!(0.4182));
    }

    #[test]
    fn test_payoff_date_advances_year_only() {
        let start = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        assert_eq!(
            payoff_date(start, 30),
            NaiveDate::from_ymd_opt(2054, 11, 15).unwrap()
        );
    }

    #[test]
    fn test_payoff_date_clamps_leap_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            payoff_date(start, 30),
            NaiveDate::from_ymd_opt(2054, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_estimate_envelope() {
        let input = benchmark_loan();
        let start = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let output = estimate(&input, start, Currency::MYR);

        assert_eq!(output.result.term_months, 360);
        assert_eq!(
            output.result.payoff_date,
            NaiveDate::from_ymd_opt(2054, 11, 1).unwrap()
        );
        assert!(output.warnings.is_empty());
        // Assumptions echo the validated input
        assert_eq!(output.assumptions["term_years"], 30);
    }

    #[test]
    fn test_high_rate_warning() {
        let input = LoanInput {
            principal: dec!(500_000),
            annual_rate_pct: dec!(12),
            term_years: 30,
        };
        let start = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let output = estimate(&input, start, Currency::MYR);
        assert_eq!(output.warnings.len(), 2);
        assert!(output.warnings[0].contains("exceeds 10%"));
    }
}
