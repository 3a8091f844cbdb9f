use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};

/// validated `(principal, annual rate, term)` triple the engine works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanQuoteInput {
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
}

impl LoanQuoteInput {
    /// create input, rejecting values no loan product can have
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Self> {
        if !principal.is_positive() {
            return Err(QuoteError::InvalidPrincipal { principal });
        }
        if term_months == 0 {
            return Err(QuoteError::InvalidTerm { months: term_months });
        }
        if annual_rate.is_negative() {
            return Err(QuoteError::NegativeRate { rate: annual_rate });
        }

        Ok(Self {
            principal,
            annual_rate,
            term_months,
        })
    }

    /// create input from raw slider floats
    pub fn from_f64(principal: f64, annual_rate_percent: f64, term_months: u32) -> Result<Self> {
        let principal = Money::try_from_f64(principal)?;
        let annual_rate = Rate::try_from_percent_f64(annual_rate_percent)?;
        Self::new(principal, annual_rate, term_months)
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// run the engine; recomputed on every call
    pub fn quote(&self) -> AmortizationResult {
        AmortizationResult::compute(self.principal, self.annual_rate, self.term_months)
    }
}

/// installment and its totals for one input triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub principal: Money,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl AmortizationResult {
    pub fn compute(principal: Money, annual_rate: Rate, term_months: u32) -> Self {
        let monthly_payment = compute_monthly_payment(principal, annual_rate, term_months);
        let (total_payment, total_interest) =
            derive_breakdown(principal, monthly_payment, term_months);

        trace!(
            %principal,
            rate = %annual_rate,
            term_months,
            %monthly_payment,
            "quote computed"
        );

        Self {
            principal,
            term_months,
            monthly_payment,
            total_payment,
            total_interest,
        }
    }
}

/// fixed monthly installment on a reducing balance
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), with r = annual rate / 12.
/// A zero rate degenerates to `P / n`. Once (1 + r)^n no longer fits a
/// decimal the installment is `P * r` to every representable digit. Inputs
/// are expected to be clamped already; a zero term returns the principal
/// unchanged.
pub fn compute_monthly_payment(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    debug_assert!(!annual_rate.is_negative(), "negative rate {annual_rate}");

    if term_months == 0 {
        return principal;
    }

    let r = annual_rate.monthly_rate();

    if r.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let interest_only = principal.as_decimal() * r;

    match compound_factor(r, term_months) {
        Some(compound) => {
            let annuity = compound / (compound - Decimal::ONE);
            Money::from_decimal(interest_only * annuity)
        }
        None => {
            trace!(term_months, rate = %annual_rate, "compound factor saturated");
            Money::from_decimal(interest_only)
        }
    }
}

/// `(total_payment, total_interest)` for a fixed installment
pub fn derive_breakdown(principal: Money, monthly_payment: Money, term_months: u32) -> (Money, Money) {
    let total_payment = monthly_payment * Decimal::from(term_months);
    let total_interest = total_payment - principal;
    (total_payment, total_interest)
}

/// (1 + r)^n by repeated multiplication, `None` on overflow
fn compound_factor(r: Decimal, n: u32) -> Option<Decimal> {
    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..n {
        compound = compound.checked_mul(base)?;
    }
    Some(compound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn emi(principal: i64, rate_percent: Decimal, months: u32) -> Money {
        compute_monthly_payment(Money::from_major(principal), Rate::from_percent(rate_percent), months)
    }

    fn close(a: Money, b: Money, tolerance: Decimal) -> bool {
        (a - b).abs().as_decimal() <= tolerance
    }

    #[test]
    fn test_zero_rate_splits_principal_evenly() {
        for (principal, months) in [(100_000, 12), (250_000, 7), (3_000_000, 240), (1, 3)] {
            let payment = emi(principal, Decimal::ZERO, months);
            assert_eq!(payment, Money::from_major(principal) / Decimal::from(months));
        }
    }

    #[test]
    fn test_interest_accrues_when_rate_positive() {
        for (principal, rate, months) in [
            (100_000, dec!(0.5), 12),
            (200_000, dec!(15), 24),
            (3_000_000, dec!(9.5), 240),
            (50_000, dec!(24), 1),
        ] {
            let payment = emi(principal, rate, months);
            let (total, interest) = derive_breakdown(Money::from_major(principal), payment, months);
            assert!(total > Money::from_major(principal));
            assert!(interest > Money::ZERO);
        }
    }

    #[test]
    fn test_linear_in_principal() {
        let base = emi(100_000, dec!(11.25), 36);
        for k in [2_i64, 5, 30, 250] {
            let scaled = emi(100_000 * k, dec!(11.25), 36);
            assert!(close(scaled, base * Decimal::from(k), dec!(0.0001)));
        }
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let mut previous = emi(500_000, dec!(8), 60);
        for rate in [dec!(8.25), dec!(9), dec!(12.5), dec!(18), dec!(24)] {
            let current = emi(500_000, rate, 60);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_longer_term_lowers_installment_raises_interest() {
        let principal = Money::from_major(800_000);
        let rate = Rate::from_percent(dec!(9));

        let short = AmortizationResult::compute(principal, rate, 36);
        let long = AmortizationResult::compute(principal, rate, 84);

        assert!(long.monthly_payment < short.monthly_payment);
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn test_home_loan_default_scenario() {
        // ₹30,00,000 at 9.5% for 20 years
        let result = AmortizationResult::compute(
            Money::from_major(3_000_000),
            Rate::from_percent(dec!(9.5)),
            240,
        );

        assert_eq!(result.monthly_payment.round_dp(2), Money::from_decimal(dec!(27963.94)));
        assert!(close(result.total_payment, Money::from_decimal(dec!(6711344.55)), dec!(0.01)));
        assert!(close(result.total_interest, Money::from_decimal(dec!(3711344.55)), dec!(0.01)));
    }

    #[test]
    fn test_personal_loan_representative_example() {
        // ₹2,00,000 at 15% for 24 months
        let result = AmortizationResult::compute(
            Money::from_major(200_000),
            Rate::from_percentage(15),
            24,
        );

        assert_eq!(result.monthly_payment.round_dp(2), Money::from_decimal(dec!(9697.33)));
        assert_eq!(result.total_payment.round_dp(2), Money::from_decimal(dec!(232735.91)));
        assert_eq!(result.total_interest.round_dp(2), Money::from_decimal(dec!(32735.91)));
    }

    #[test]
    fn test_one_lakh_at_twelve_percent() {
        let payment = emi(100_000, dec!(12), 12);
        assert_eq!(payment.round_dp(2), Money::from_decimal(dec!(8884.88)));
    }

    #[test]
    fn test_single_month_term() {
        // one installment repays principal plus one month of interest
        let payment = emi(120_000, dec!(12), 1);
        assert_eq!(payment, Money::from_major(121_200));
    }

    #[test]
    fn test_very_long_term_converges_to_interest_only() {
        // (1.02)^5000 does not fit a decimal
        let input = LoanQuoteInput::new(Money::from_major(100_000), Rate::from_percentage(24), 5_000)
            .unwrap();
        let result = input.quote();

        assert_eq!(result.monthly_payment, Money::from_major(2_000));
        assert!(result.total_interest > Money::ZERO);

        // just below saturation the installment is already P * r to the paisa
        let payment = emi(100_000, dec!(24), 3_000);
        assert_eq!(payment.round_dp(2), Money::from_major(2_000));

        let payment = emi(100_000, dec!(24), u32::MAX);
        assert_eq!(payment, Money::from_major(2_000));
    }

    #[test]
    fn test_input_validation() {
        let rate = Rate::from_percentage(10);

        assert!(matches!(
            LoanQuoteInput::new(Money::ZERO, rate, 12),
            Err(QuoteError::InvalidPrincipal { .. })
        ));
        assert!(matches!(
            LoanQuoteInput::new(Money::from_major(-1), rate, 12),
            Err(QuoteError::InvalidPrincipal { .. })
        ));
        assert!(matches!(
            LoanQuoteInput::new(Money::from_major(10_000), rate, 0),
            Err(QuoteError::InvalidTerm { months: 0 })
        ));
        assert!(matches!(
            LoanQuoteInput::new(Money::from_major(10_000), Rate::from_percent(dec!(-1)), 12),
            Err(QuoteError::NegativeRate { .. })
        ));
        assert!(matches!(
            LoanQuoteInput::from_f64(f64::NAN, 10.0, 12),
            Err(QuoteError::NonFiniteInput { field: "amount", .. })
        ));
        assert!(matches!(
            LoanQuoteInput::from_f64(10_000.0, f64::INFINITY, 12),
            Err(QuoteError::NonFiniteInput { field: "annual_rate_percent", .. })
        ));

        let input = LoanQuoteInput::from_f64(200_000.0, 15.0, 24).unwrap();
        assert_eq!(input.principal(), Money::from_major(200_000));
        assert_eq!(input.annual_rate(), Rate::from_percentage(15));
        assert_eq!(input.quote().monthly_payment.round_dp(2), Money::from_decimal(dec!(9697.33)));
    }
}
