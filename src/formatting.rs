//! Rupee display helpers using Indian digit grouping (thousand, lakh, crore).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::types::TenureUnit;

const LAKH: Decimal = dec!(100000);
const CRORE: Decimal = dec!(10000000);

/// short display form used next to sliders and result cards
///
/// `≥ 1 Cr` renders as `₹x.xx Cr`, `≥ 1 L` as `₹x.xx L`, anything smaller as
/// whole rupees with en-IN grouping. Boundaries take the larger unit.
/// Negative amounts are not special-cased and fall into the last branch.
pub fn format_currency(amount: Money) -> String {
    let value = amount.as_decimal();

    if value >= CRORE {
        format!("₹{} Cr", two_places(value / CRORE))
    } else if value >= LAKH {
        format!("₹{} L", two_places(value / LAKH))
    } else {
        format!("₹{}", group_rupees(value))
    }
}

/// whole rupees with en-IN grouping at any magnitude, e.g. `₹30,00,000`
pub fn format_inr(amount: Money) -> String {
    format!("₹{}", group_rupees(amount.as_decimal()))
}

pub fn format_rate(rate: Rate) -> String {
    rate.to_string()
}

pub fn format_tenure(value: u32, unit: TenureUnit) -> String {
    let noun = match unit {
        TenureUnit::Years => "year",
        TenureUnit::Months => "month",
    };
    if value == 1 {
        format!("{value} {noun}")
    } else {
        format!("{value} {noun}s")
    }
}

/// en-IN grouping of an integer: last three digits, then pairs
pub fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_rupees(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_digits(&digits);
    if rounded < Decimal::ZERO {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn two_places(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
