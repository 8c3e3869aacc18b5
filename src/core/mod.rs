pub mod luhn;
pub mod report;
pub mod validator;

pub use crate::domain::model::{Identifier, InvalidReason, ValidationResult};
pub use crate::domain::ports::ChecksumScheme;
pub use luhn::Luhn;
pub use report::{Report, ReportEntry};
pub use validator::{validate, ChecksumValidator, IMEI_LENGTH};
