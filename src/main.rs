use clap::Parser;
use imei_check::core::report;
use imei_check::utils::{logger, validation::Validate};
use imei_check::{CliConfig, OutputFormat, ValidationResult};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting imei-check CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let mut inputs = config.identifiers.clone();
    if let Some(path) = &config.input_file {
        match report::read_identifiers(path) {
            Ok(mut from_file) => {
                tracing::info!("Read {} identifier(s) from {}", from_file.len(), path);
                inputs.append(&mut from_file);
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        }
    }

    let report = report::run_batch(&inputs, config.length);

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for entry in &report.entries {
                match &entry.result {
                    ValidationResult::Valid => println!("✅ {}: valid", entry.input),
                    ValidationResult::Invalid(reason) => {
                        println!("❌ {}: {}", entry.input, reason)
                    }
                }
            }
            println!("{} valid, {} invalid", report.valid, report.invalid);
        }
    }

    if !report.all_valid() {
        tracing::warn!("{} identifier(s) failed validation", report.invalid);
        std::process::exit(1);
    }

    tracing::info!("✅ All {} identifier(s) valid", report.valid);
    Ok(())
}
