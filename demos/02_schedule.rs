/// schedule - month-by-month table and year-wise rollup
use chrono::NaiveDate;
use lendingleaf_emi::{
    format_currency, format_inr, AmortizationSchedule, LoanQuoteInput, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== amortization schedule ===\n");

    // ₹2,00,000 personal loan at 15% for 24 months
    let input = LoanQuoteInput::new(Money::from_major(200_000), Rate::from_percentage(15), 24)?;
    let first_due = NaiveDate::from_ymd_opt(2024, 2, 5).ok_or("bad date")?;
    let schedule = AmortizationSchedule::generate_dated(&input, first_due)?;

    println!("emi: {}", format_inr(schedule.monthly_payment));
    println!("total payment: {}", format_currency(schedule.total_payment));
    println!("total interest: {}\n", format_currency(schedule.total_interest));

    for payment in &schedule.payments {
        println!(
            "{:>3} {} interest {:>8} principal {:>8} balance {:>10}",
            payment.payment_number,
            payment.due_date.map(|d| d.to_string()).unwrap_or_default(),
            format_inr(payment.interest_portion),
            format_inr(payment.principal_portion),
            format_inr(payment.ending_balance),
        );
    }

    println!();
    for year in schedule.yearly_summary() {
        println!(
            "year {}: principal {} interest {} closing {}",
            year.year,
            format_inr(year.principal_paid),
            format_inr(year.interest_paid),
            format_inr(year.closing_balance),
        );
    }

    Ok(())
}
