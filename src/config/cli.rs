use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "imei-check")]
#[command(about = "Validate numeric identifiers (IMEI and similar) with the Luhn checksum")]
pub struct CliConfig {
    /// Identifiers to validate
    pub identifiers: Vec<String>,

    #[arg(long, default_value = "15", help = "Expected identifier length in digits")]
    pub length: usize,

    #[arg(long, help = "File with one identifier per line ('#' lines are comments)")]
    pub input_file: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("length", self.length, 1)?;

        if let Some(path) = &self.input_file {
            validate_path("input_file", path)?;
        }

        if self.identifiers.is_empty() && self.input_file.is_none() {
            return Err(CheckError::MissingConfigError {
                field: "identifiers".to_string(),
            });
        }

        Ok(())
    }
}
