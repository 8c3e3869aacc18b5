use crate::core::luhn::Luhn;
use crate::domain::model::{Identifier, InvalidReason, ValidationResult};
use crate::domain::ports::ChecksumScheme;

/// An IMEI is always 15 digits.
pub const IMEI_LENGTH: usize = 15;

/// Validates candidate strings against a fixed length and a checksum scheme.
///
/// Pure and stateless: safe to share across threads, and repeated calls with
/// the same input always produce the same result.
#[derive(Debug, Clone)]
pub struct ChecksumValidator<S: ChecksumScheme = Luhn> {
    expected_length: usize,
    scheme: S,
}

impl ChecksumValidator<Luhn> {
    /// Luhn validator for 15-digit IMEI numbers.
    pub fn imei() -> Self {
        Self::new(IMEI_LENGTH, Luhn)
    }
}

impl<S: ChecksumScheme> ChecksumValidator<S> {
    pub fn new(expected_length: usize, scheme: S) -> Self {
        Self {
            expected_length,
            scheme,
        }
    }

    pub fn expected_length(&self) -> usize {
        self.expected_length
    }

    /// Classifies `input`. Checks run in order: length, digits, checksum;
    /// the first failure wins. Malformed input is a normal outcome, not an
    /// error or a panic.
    pub fn validate(&self, input: &str) -> ValidationResult {
        let identifier = match Identifier::parse(input, self.expected_length) {
            Ok(identifier) => identifier,
            Err(reason) => return ValidationResult::Invalid(reason),
        };

        if self.scheme.check(identifier.digits()) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(InvalidReason::ChecksumMismatch)
        }
    }
}

/// Validates `input` as a Luhn-checksummed identifier of `expected_length`
/// decimal digits.
pub fn validate(input: &str, expected_length: usize) -> ValidationResult {
    ChecksumValidator::new(expected_length, Luhn).validate(input)
}
