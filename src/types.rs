use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::QuoteError;

/// loan categories offered on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanCategory {
    Home,
    Personal,
    Car,
    Education,
}

impl LoanCategory {
    pub const ALL: [LoanCategory; 4] = [
        LoanCategory::Home,
        LoanCategory::Personal,
        LoanCategory::Car,
        LoanCategory::Education,
    ];

    /// lowercase tag used by the form fields
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanCategory::Home => "home",
            LoanCategory::Personal => "personal",
            LoanCategory::Car => "car",
            LoanCategory::Education => "education",
        }
    }
}

impl fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanCategory {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(LoanCategory::Home),
            "personal" => Ok(LoanCategory::Personal),
            "car" => Ok(LoanCategory::Car),
            "education" => Ok(LoanCategory::Education),
            _ => Err(QuoteError::UnknownCategory { tag: s.to_string() }),
        }
    }
}

/// unit the tenure slider is currently expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureUnit {
    #[default]
    Years,
    Months,
}

impl TenureUnit {
    /// convert a tenure value into months
    pub fn to_months(&self, value: u32) -> u32 {
        match self {
            TenureUnit::Years => value.saturating_mul(12),
            TenureUnit::Months => value,
        }
    }

    /// convert a month count into this unit; months to years rounds half up
    pub fn from_months(&self, months: u32) -> u32 {
        match self {
            TenureUnit::Years => months.saturating_add(6) / 12,
            TenureUnit::Months => months,
        }
    }

    pub fn toggled(&self) -> TenureUnit {
        match self {
            TenureUnit::Years => TenureUnit::Months,
            TenureUnit::Months => TenureUnit::Years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_tags() {
        for category in LoanCategory::ALL {
            assert_eq!(category.as_str().parse::<LoanCategory>().unwrap(), category);
        }
        assert_eq!(" Home ".parse::<LoanCategory>().unwrap(), LoanCategory::Home);
        assert!("gold".parse::<LoanCategory>().is_err());
    }

    #[test]
    fn test_category_serde_tag() {
        let json = serde_json::to_string(&LoanCategory::Education).unwrap();
        assert_eq!(json, "\"education\"");
    }

    #[test]
    fn test_years_to_months_is_lossless() {
        for years in 1..=30 {
            let months = TenureUnit::Years.to_months(years);
            assert_eq!(TenureUnit::Years.from_months(months), years);
        }
    }

    #[test]
    fn test_months_to_years_rounds() {
        assert_eq!(TenureUnit::Years.from_months(17), 1);
        assert_eq!(TenureUnit::Years.from_months(18), 2);
        assert_eq!(TenureUnit::Years.from_months(24), 2);
        assert_eq!(TenureUnit::Years.from_months(5), 0);
        assert_eq!(TenureUnit::Months.from_months(18), 18);
    }
}
