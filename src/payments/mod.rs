pub mod amortization;
pub mod schedule;

pub use amortization::{
    compute_monthly_payment, derive_breakdown, AmortizationResult, LoanQuoteInput,
};
pub use schedule::{AmortizationSchedule, ScheduledPayment, YearlySummary};
