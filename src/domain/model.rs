use serde::Serialize;
use std::fmt;

/// A fixed-length sequence of decimal digits parsed from raw input.
///
/// Construction performs the structural checks (length, digit-only);
/// checksum verification is a separate step on the parsed digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    digits: Vec<u8>,
}

impl Identifier {
    /// Parses `input` into an identifier of exactly `expected_length` digits.
    ///
    /// Structural failures come back as [`InvalidReason`] values, never as
    /// panics. Any string is acceptable input, including empty ones.
    pub fn parse(input: &str, expected_length: usize) -> Result<Self, InvalidReason> {
        let actual = input.chars().count();
        if actual != expected_length {
            return Err(InvalidReason::WrongLength {
                expected: expected_length,
                actual,
            });
        }

        let mut digits = Vec::with_capacity(expected_length);
        for (position, ch) in input.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(InvalidReason::NonDigit { position }),
            }
        }

        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Outcome of validating one candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Why a candidate failed. The three cases are mutually exclusive and
/// checked in this order: length, digits, checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidReason {
    WrongLength { expected: usize, actual: usize },
    NonDigit { position: usize },
    ChecksumMismatch,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::WrongLength { expected, actual } => {
                write!(f, "expected {} digits, got {}", expected, actual)
            }
            InvalidReason::NonDigit { position } => {
                write!(f, "non-digit character at position {}", position)
            }
            InvalidReason::ChecksumMismatch => write!(f, "checksum mismatch"),
        }
    }
}
