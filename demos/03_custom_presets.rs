/// custom presets - a calculator surface with its own preset table
use lendingleaf_emi::{EngineConfig, QuoteSession};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // LENDINGLEAF_PRESETS=/path/to/presets.json overrides the canonical table
    let config = EngineConfig::from_env()?;
    println!("{}\n", config.to_json_pretty()?);

    let mut session = QuoteSession::from_config(&config);
    println!("{}", session.json()?);

    session.toggle_tenure_unit();
    println!("{}", session.json()?);

    Ok(())
}
