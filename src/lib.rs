pub mod config;
pub mod decimal;
pub mod errors;
pub mod formatting;
pub mod payments;
pub mod presets;
pub mod quote;
pub mod types;

// re-export key types
pub use config::EngineConfig;
pub use decimal::{Money, Rate};
pub use errors::{QuoteError, Result};
pub use formatting::{format_currency, format_inr, format_rate, format_tenure, group_indian};
pub use payments::{
    compute_monthly_payment, derive_breakdown, AmortizationResult, AmortizationSchedule,
    LoanQuoteInput, ScheduledPayment, YearlySummary,
};
pub use presets::{clamp, LoanPreset, PresetTable, CANONICAL_PRESETS};
pub use quote::{QuoteDisplay, QuoteSession, QuoteSummary};
pub use types::{LoanCategory, TenureUnit};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
