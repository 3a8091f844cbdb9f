/// category switch - sliders clamp to the preset and reset on switch
use lendingleaf_emi::{format_currency, LoanCategory, Money, PresetTable, QuoteSession, Rate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=lendingleaf_emi=trace shows every clamp and recompute
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== category switch example ===\n");

    let mut session = QuoteSession::new(PresetTable::canonical(), LoanCategory::Car);

    // drag past the preset bounds
    let amount = session.set_amount(Money::from_major(25_000_000));
    let rate = session.set_rate(Rate::from_percentage(5));
    println!("car amount clamped to {}", format_currency(amount));
    println!("car rate clamped to {}", rate);
    println!("car emi: {}\n", format_currency(session.quote()?.monthly_payment));

    // switching discards the adjustments above
    for category in LoanCategory::ALL {
        session.switch_category(category);
        let summary = session.summary()?;
        println!(
            "{:<10} {} at {} for {} -> {} / month",
            category,
            summary.display.principal,
            summary.display.rate,
            summary.display.tenure,
            summary.display.monthly_payment,
        );
    }

    Ok(())
}
