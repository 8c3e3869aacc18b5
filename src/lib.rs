pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::core::{validate, ChecksumValidator, Luhn, Report, IMEI_LENGTH};
pub use crate::domain::model::{Identifier, InvalidReason, ValidationResult};
pub use crate::domain::ports::ChecksumScheme;
pub use crate::utils::error::{CheckError, Result};
