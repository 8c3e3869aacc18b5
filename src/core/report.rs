use crate::core::luhn::Luhn;
use crate::core::validator::ChecksumValidator;
use crate::domain::model::ValidationResult;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub input: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Batch validation outcome, serializable for the JSON output format.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub expected_length: usize,
    pub valid: usize,
    pub invalid: usize,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Runs the Luhn validator over every input and tallies the outcomes.
pub fn run_batch(inputs: &[String], expected_length: usize) -> Report {
    let validator = ChecksumValidator::new(expected_length, Luhn);
    let mut entries = Vec::with_capacity(inputs.len());
    let mut valid = 0;

    for input in inputs {
        let result = validator.validate(input);
        match &result {
            ValidationResult::Valid => valid += 1,
            ValidationResult::Invalid(reason) => {
                tracing::debug!("'{}' rejected: {}", input, reason);
            }
        }
        entries.push(ReportEntry {
            input: input.clone(),
            result,
        });
    }

    Report {
        expected_length,
        valid,
        invalid: entries.len() - valid,
        entries,
    }
}

/// Reads identifiers from a file, one per line. Blank lines and lines
/// starting with '#' are skipped; surrounding whitespace is trimmed.
pub fn read_identifiers(path: &str) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_batch_counts() {
        let inputs = vec![
            "490154203237518".to_string(),
            "490154203237519".to_string(),
            "12345".to_string(),
        ];
        let report = run_batch(&inputs, 15);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid, 2);
        assert_eq!(report.entries.len(), 3);
        assert!(!report.all_valid());
    }

    #[test]
    fn test_empty_batch_is_all_valid() {
        let report = run_batch(&[], 15);
        assert_eq!(report.valid, 0);
        assert!(report.all_valid());
    }
}
