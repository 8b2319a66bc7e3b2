//! Fixed-rate amortization engine.
//!
//! Closed-form level payment for a fully amortizing loan with monthly
//! compounding. Stateless and pure: identical input yields identical
//! output, and nothing here rounds. Display rounding to 2 dp is the
//! presentation layer's concern. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};
use crate::validate::LoanInput;

/// Installments per year.
const MONTHS_PER_YEAR: u32 = 12;

/// Divisor taking a percent value to a fraction of 1.
const PERCENT: Decimal = dec!(100);

/// Aggregate repayment metrics for a validated loan.
///
/// Values carry full precision so downstream derivations (percentage
/// splits, per-month figures) stay consistent with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanMetrics {
    /// Level monthly installment.
    pub monthly_payment: Money,
    /// Sum of all installments over the tenure.
    pub total_payment: Money,
    /// Interest portion of the total payment.
    pub total_interest: Money,
}

/// Monthly rate as a fraction of 1 (annual percent / 100 / 12).
pub fn monthly_rate(annual_rate_pct: Decimal) -> Rate {
    annual_rate_pct / PERCENT / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly installments over the tenure.
pub fn num_payments(term_years: u32) -> u32 {
    term_years * MONTHS_PER_YEAR
}

/// Compute aggregate repayment metrics for a validated loan.
///
/// Callers must only pass input that came out of
/// [`crate::validate::validate`]. The annuity formula is a 0/0
/// indeterminate form at a zero rate; that boundary is unreachable through
/// the validated path because the rate is floored at 0.01%, so the engine
/// does not special-case it.
pub fn compute_metrics(input: &LoanInput) -> LoanMetrics {
    debug_assert!(input.principal > Decimal::ZERO, "unvalidated principal");
    debug_assert!(input.annual_rate_pct > Decimal::ZERO, "unvalidated rate");
    debug_assert!(input.term_years > 0, "unvalidated term");

    let rate = monthly_rate(input.annual_rate_pct);
    let n = num_payments(input.term_years);
    let growth = (Decimal::ONE + rate).powd(Decimal::from(n));

    let monthly_payment = input.principal * rate * growth / (growth - Decimal::ONE);
    let total_payment = monthly_payment * Decimal::from(n);
    let total_interest = total_payment - input.principal;

    LoanMetrics {
        monthly_payment,
        total_payment,
        total_interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn benchmark_loan() -> LoanInput {
        LoanInput {
            principal: dec!(500_000),
            annual_rate_pct: dec!(4),
            term_years: 30,
        }
    }

    #[test]
    fn test_benchmark_monthly_payment() {
        let metrics = compute_metrics(&benchmark_loan());
        // 500k at 4% over 30 years is the form's default scenario
        assert_eq!(metrics.monthly_payment.round_dp(2), dec!(2387.08));
        assert!((metrics.total_payment - dec!(859_347.53)).abs() < dec!(0.01));
        assert!((metrics.total_interest - dec!(359_347.53)).abs() < dec!(0.01));
    }

    #[test]
    fn test_totals_identity() {
        let metrics = compute_metrics(&benchmark_loan());
        assert_eq!(metrics.total_payment, metrics.monthly_payment * dec!(360));
        assert_eq!(
            metrics.total_interest,
            metrics.total_payment - dec!(500_000)
        );
    }

    #[test]
    fn test_interest_is_nonnegative_at_rate_floor() {
        let input = LoanInput {
            principal: dec!(1000),
            annual_rate_pct: dec!(0.01),
            term_years: 1,
        };
        let metrics = compute_metrics(&input);
        assert!(metrics.total_payment >= input.principal);
        assert!(metrics.total_interest > Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let input = benchmark_loan();
        assert_eq!(compute_metrics(&input), compute_metrics(&input));
    }

    #[test]
    fn test_payment_increases_with_rate() {
        let mut input = benchmark_loan();
        let at_4 = compute_metrics(&input);
        input.annual_rate_pct = dec!(5);
        let at_5 = compute_metrics(&input);
        assert!(at_5.monthly_payment > at_4.monthly_payment);
        assert!(at_5.total_interest > at_4.total_interest);
        // Reference: 5% over 30 years on 500k is ~2684.11/month
        assert_eq!(at_5.monthly_payment.round_dp(2), dec!(2684.11));
    }

    #[test]
    fn test_monthly_rate_conversion() {
        assert_eq!(monthly_rate(dec!(6)), dec!(0.005));
        assert_eq!(num_payments(30), 360);
    }
}
