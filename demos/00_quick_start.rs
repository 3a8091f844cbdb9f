/// quick start - one EMI quote from the canonical presets
use lendingleaf_emi::{LoanCategory, PresetTable, QuoteSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // home loan calculator with its default sliders
    let session = QuoteSession::new(PresetTable::canonical(), LoanCategory::Home);

    // print current quote
    println!("{}", serde_json::to_string_pretty(&session.summary()?)?);

    Ok(())
}
