use monitor_checks::{Check, CheckParams, Config, Result, config::OutputMode, logging};
use std::fs;
use tracing::{info, warn};

fn main() -> Result<()> {
    logging::init_logging();

    let config = Config::from_env()?;
    info!("Encoding checks with config: {:?}", config);

    let raw = fs::read_to_string(&config.input.path)?;
    let checks: Vec<Check> = serde_json::from_str(&raw)?;
    info!("Loaded {} checks from {}", checks.len(), config.input.path);

    let mut encoded = Vec::with_capacity(checks.len());
    for check in &checks {
        if let Err(e) = check.validate() {
            warn!("Skipping {} check {:?}: {}", check.check_type(), check.name(), e);
            continue;
        }

        let params = match config.output.mode {
            OutputMode::Create => check.post_params(),
            OutputMode::Update => check.put_params(),
        };
        encoded.push(params);
    }

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&encoded)?
    } else {
        serde_json::to_string(&encoded)?
    };
    println!("{}", output);

    info!("Encoded {} of {} checks", encoded.len(), checks.len());
    Ok(())
}
