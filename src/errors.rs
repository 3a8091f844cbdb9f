use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::LoanCategory;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("invalid principal: {principal}, must be greater than zero")]
    InvalidPrincipal {
        principal: Money,
    },

    #[error("invalid term: {months} months, must be at least one month")]
    InvalidTerm {
        months: u32,
    },

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("non-finite {field}: {value}")]
    NonFiniteInput {
        field: &'static str,
        value: f64,
    },

    #[error("unknown loan category: {tag}")]
    UnknownCategory {
        tag: String,
    },

    #[error("invalid preset for {category}: {message}")]
    InvalidPreset {
        category: LoanCategory,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
