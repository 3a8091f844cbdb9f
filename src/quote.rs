//! Slider binding for the EMI calculators.
//!
//! A [`QuoteSession`] owns the three slider values for one calculator
//! surface. Every setter clamps into the active category's preset, a
//! category switch resets to that category's defaults, and the quote is
//! recomputed from scratch on each read.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::formatting::{format_currency, format_inr, format_rate, format_tenure};
use crate::payments::{AmortizationResult, AmortizationSchedule, LoanQuoteInput};
use crate::presets::{LoanPreset, PresetTable};
use crate::types::{LoanCategory, TenureUnit};

/// calculator state bound to a preset table
#[derive(Debug, Clone)]
pub struct QuoteSession<'a> {
    presets: &'a PresetTable,
    category: LoanCategory,
    amount: Money,
    rate: Rate,
    tenure: u32,
    tenure_unit: TenureUnit,
}

impl<'a> QuoteSession<'a> {
    /// start a session on `category` with its default values
    pub fn new(presets: &'a PresetTable, category: LoanCategory) -> Self {
        let preset = presets.get(category);
        debug!(%category, "quote session started");
        Self {
            presets,
            category,
            amount: preset.default_amount(),
            rate: preset.default_rate(),
            tenure: preset.default_tenure_years,
            tenure_unit: TenureUnit::Years,
        }
    }

    /// start a session from a surface config
    pub fn from_config(config: &'a EngineConfig) -> Self {
        let mut session = Self::new(&config.presets, config.default_category);
        if config.default_tenure_unit != session.tenure_unit {
            session.toggle_tenure_unit();
        }
        session
    }

    pub fn preset(&self) -> &'a LoanPreset {
        self.presets.get(self.category)
    }

    pub fn category(&self) -> LoanCategory {
        self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn tenure(&self) -> u32 {
        self.tenure
    }

    pub fn tenure_unit(&self) -> TenureUnit {
        self.tenure_unit
    }

    pub fn term_months(&self) -> u32 {
        self.tenure_unit.to_months(self.tenure)
    }

    /// set the loan amount, clamped to the preset; returns the stored value
    pub fn set_amount(&mut self, amount: Money) -> Money {
        self.amount = self.preset().clamp_amount(amount);
        self.amount
    }

    /// set the annual rate, clamped to the preset; returns the stored value
    pub fn set_rate(&mut self, rate: Rate) -> Rate {
        self.rate = self.preset().clamp_rate(rate);
        self.rate
    }

    /// set the tenure in the current unit, clamped to the preset
    pub fn set_tenure(&mut self, tenure: u32) -> u32 {
        self.tenure = self.preset().clamp_tenure(tenure, self.tenure_unit);
        self.tenure
    }

    /// set from raw slider floats, rejecting non-finite values
    pub fn set_amount_f64(&mut self, amount: f64) -> Result<Money> {
        Ok(self.set_amount(Money::try_from_f64(amount)?))
    }

    pub fn set_rate_percent_f64(&mut self, rate_percent: f64) -> Result<Rate> {
        Ok(self.set_rate(Rate::try_from_percent_f64(rate_percent)?))
    }

    /// switch loan category, discarding any in-progress adjustment
    pub fn switch_category(&mut self, category: LoanCategory) {
        let preset = self.presets.get(category);
        debug!(from = %self.category, to = %category, "category switched, sliders reset");

        self.category = category;
        self.amount = preset.default_amount();
        self.rate = preset.default_rate();
        self.tenure = preset.default_tenure_years;
        self.tenure_unit = TenureUnit::Years;
    }

    /// flip the tenure between years and months, converting the value
    pub fn toggle_tenure_unit(&mut self) -> TenureUnit {
        let months = self.term_months();
        let unit = self.tenure_unit.toggled();

        self.tenure_unit = unit;
        self.tenure = self.preset().clamp_tenure(unit.from_months(months), unit);
        unit
    }

    /// validated engine input for the current sliders
    pub fn input(&self) -> Result<LoanQuoteInput> {
        LoanQuoteInput::new(self.amount, self.rate, self.term_months())
    }

    /// recompute the quote for the current sliders
    pub fn quote(&self) -> Result<AmortizationResult> {
        Ok(self.input()?.quote())
    }

    pub fn schedule(&self) -> Result<AmortizationSchedule> {
        Ok(AmortizationSchedule::generate(&self.input()?))
    }

    /// display-ready view of the current quote
    pub fn summary(&self) -> Result<QuoteSummary> {
        let result = self.quote()?;
        Ok(QuoteSummary {
            category: self.category,
            principal: result.principal,
            annual_rate_percent: self.rate,
            tenure: self.tenure,
            tenure_unit: self.tenure_unit,
            term_months: result.term_months,
            monthly_payment: result.monthly_payment.round_dp(2),
            total_payment: result.total_payment.round_dp(2),
            total_interest: result.total_interest.round_dp(2),
            display: QuoteDisplay {
                principal: format_inr(result.principal),
                rate: format_rate(self.rate),
                tenure: format_tenure(self.tenure, self.tenure_unit),
                monthly_payment: format_currency(result.monthly_payment),
                total_payment: format_currency(result.total_payment),
                total_interest: format_currency(result.total_interest),
            },
        })
    }

    /// current quote as compact JSON
    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.summary()?)?)
    }
}

/// serializable view of a session's quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub category: LoanCategory,
    pub principal: Money,
    pub annual_rate_percent: Rate,
    pub tenure: u32,
    pub tenure_unit: TenureUnit,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub display: QuoteDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDisplay {
    pub principal: String,
    pub rate: String,
    pub tenure: String,
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
}
