//! Loan-category presets and the clamping rules that keep slider input
//! inside them.
//!
//! A [`PresetTable`] is plain immutable data. The canonical table lives in a
//! `static` and is handed out by reference; alternative tables come from
//! [`crate::config::EngineConfig`] and are validated before use.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};
use crate::types::{LoanCategory, TenureUnit};

/// `max(min, min(value, max))`
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let upper = if value > max { max } else { value };
    if upper < min {
        min
    } else {
        upper
    }
}

/// bounds and defaults for one loan category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPreset {
    pub category: LoanCategory,
    pub min_amount: i64,
    pub max_amount: i64,
    pub default_amount: i64,
    pub min_rate_percent: Decimal,
    pub max_rate_percent: Decimal,
    pub default_rate_percent: Decimal,
    pub min_tenure_years: u32,
    pub max_tenure_years: u32,
    pub default_tenure_years: u32,
}

impl LoanPreset {
    pub fn default_amount(&self) -> Money {
        Money::from_major(self.default_amount)
    }

    pub fn default_rate(&self) -> Rate {
        Rate::from_percent(self.default_rate_percent)
    }

    pub fn default_term_months(&self) -> u32 {
        TenureUnit::Years.to_months(self.default_tenure_years)
    }

    pub fn amount_bounds(&self) -> (Money, Money) {
        (Money::from_major(self.min_amount), Money::from_major(self.max_amount))
    }

    pub fn rate_bounds(&self) -> (Rate, Rate) {
        (
            Rate::from_percent(self.min_rate_percent),
            Rate::from_percent(self.max_rate_percent),
        )
    }

    /// tenure bounds expressed in `unit`
    pub fn tenure_bounds(&self, unit: TenureUnit) -> (u32, u32) {
        match unit {
            TenureUnit::Years => (self.min_tenure_years, self.max_tenure_years),
            TenureUnit::Months => (
                TenureUnit::Years.to_months(self.min_tenure_years),
                TenureUnit::Years.to_months(self.max_tenure_years),
            ),
        }
    }

    pub fn clamp_amount(&self, amount: Money) -> Money {
        let (min, max) = self.amount_bounds();
        let clamped = clamp(amount, min, max);
        if clamped != amount {
            trace!(category = %self.category, proposed = %amount, %clamped, "amount clamped");
        }
        clamped
    }

    pub fn clamp_rate(&self, rate: Rate) -> Rate {
        let (min, max) = self.rate_bounds();
        let clamped = clamp(rate, min, max);
        if clamped != rate {
            trace!(category = %self.category, proposed = %rate, %clamped, "rate clamped");
        }
        clamped
    }

    pub fn clamp_tenure(&self, value: u32, unit: TenureUnit) -> u32 {
        let (min, max) = self.tenure_bounds(unit);
        let clamped = clamp(value, min, max);
        if clamped != value {
            trace!(category = %self.category, proposed = value, clamped, ?unit, "tenure clamped");
        }
        clamped
    }

    /// check the ordering invariants a table loaded from config must hold
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| {
            Err(QuoteError::InvalidPreset {
                category: self.category,
                message,
            })
        };

        if self.min_amount <= 0 {
            return fail(format!("min_amount {} must be positive", self.min_amount));
        }
        if !(self.min_amount <= self.default_amount && self.default_amount <= self.max_amount) {
            return fail(format!(
                "amount default {} outside [{}, {}]",
                self.default_amount, self.min_amount, self.max_amount
            ));
        }
        if self.min_rate_percent < Decimal::ZERO {
            return fail(format!("min_rate_percent {} is negative", self.min_rate_percent));
        }
        if !(self.min_rate_percent <= self.default_rate_percent
            && self.default_rate_percent <= self.max_rate_percent)
        {
            return fail(format!(
                "rate default {} outside [{}, {}]",
                self.default_rate_percent, self.min_rate_percent, self.max_rate_percent
            ));
        }
        if self.min_tenure_years == 0 {
            return fail("min_tenure_years must be at least 1".to_string());
        }
        if !(self.min_tenure_years <= self.default_tenure_years
            && self.default_tenure_years <= self.max_tenure_years)
        {
            return fail(format!(
                "tenure default {} outside [{}, {}]",
                self.default_tenure_years, self.min_tenure_years, self.max_tenure_years
            ));
        }
        Ok(())
    }
}

/// one preset per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTable {
    pub home: LoanPreset,
    pub personal: LoanPreset,
    pub car: LoanPreset,
    pub education: LoanPreset,
}

pub static CANONICAL_PRESETS: PresetTable = PresetTable {
    home: LoanPreset {
        category: LoanCategory::Home,
        min_amount: 500_000,
        max_amount: 50_000_000,
        default_amount: 3_000_000,
        min_rate_percent: dec!(8.0),
        max_rate_percent: dec!(15.0),
        default_rate_percent: dec!(9.5),
        min_tenure_years: 1,
        max_tenure_years: 30,
        default_tenure_years: 20,
    },
    personal: LoanPreset {
        category: LoanCategory::Personal,
        min_amount: 50_000,
        max_amount: 4_000_000,
        default_amount: 200_000,
        min_rate_percent: dec!(10.5),
        max_rate_percent: dec!(24.0),
        default_rate_percent: dec!(15.0),
        min_tenure_years: 1,
        max_tenure_years: 5,
        default_tenure_years: 2,
    },
    car: LoanPreset {
        category: LoanCategory::Car,
        min_amount: 100_000,
        max_amount: 10_000_000,
        default_amount: 800_000,
        min_rate_percent: dec!(8.5),
        max_rate_percent: dec!(16.0),
        default_rate_percent: dec!(9.0),
        min_tenure_years: 1,
        max_tenure_years: 7,
        default_tenure_years: 5,
    },
    education: LoanPreset {
        category: LoanCategory::Education,
        min_amount: 50_000,
        max_amount: 15_000_000,
        default_amount: 1_000_000,
        min_rate_percent: dec!(8.0),
        max_rate_percent: dec!(15.0),
        default_rate_percent: dec!(10.5),
        min_tenure_years: 1,
        max_tenure_years: 15,
        default_tenure_years: 7,
    },
};

impl PresetTable {
    /// the single canonical table shared by every calculator surface
    pub fn canonical() -> &'static PresetTable {
        &CANONICAL_PRESETS
    }

    pub fn get(&self, category: LoanCategory) -> &LoanPreset {
        match category {
            LoanCategory::Home => &self.home,
            LoanCategory::Personal => &self.personal,
            LoanCategory::Car => &self.car,
            LoanCategory::Education => &self.education,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoanPreset> {
        LoanCategory::ALL.into_iter().map(move |c| self.get(c))
    }

    pub fn validate(&self) -> Result<()> {
        for category in LoanCategory::ALL {
            let preset = self.get(category);
            if preset.category != category {
                return Err(QuoteError::InvalidPreset {
                    category,
                    message: format!("slot holds a {} preset", preset.category),
                });
            }
            preset.validate()?;
        }
        Ok(())
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        CANONICAL_PRESETS.clone()
    }
}
