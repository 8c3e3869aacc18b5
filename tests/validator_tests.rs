use imei_check::{validate, ChecksumValidator, InvalidReason, Luhn, ValidationResult};

#[test]
fn test_known_imei_vectors() {
    assert_eq!(validate("490154203237518", 15), ValidationResult::Valid);
    assert_eq!(
        validate("490154203237519", 15),
        ValidationResult::Invalid(InvalidReason::ChecksumMismatch)
    );
}

#[test]
fn test_structural_failures() {
    assert_eq!(
        validate("12345", 15),
        ValidationResult::Invalid(InvalidReason::WrongLength {
            expected: 15,
            actual: 5
        })
    );
    assert_eq!(
        validate("", 15),
        ValidationResult::Invalid(InvalidReason::WrongLength {
            expected: 15,
            actual: 0
        })
    );
    assert_eq!(
        validate("49015420323751A", 15),
        ValidationResult::Invalid(InvalidReason::NonDigit { position: 14 })
    );
}

#[test]
fn test_whitespace_and_symbols_are_non_digits() {
    assert_eq!(
        validate("4901542 323751 ", 15),
        ValidationResult::Invalid(InvalidReason::NonDigit { position: 7 })
    );
    assert_eq!(
        validate("49015-420323751", 15),
        ValidationResult::Invalid(InvalidReason::NonDigit { position: 5 })
    );
}

#[test]
fn test_valid_implies_invariants() {
    let candidates = ["490154203237518", "291417776317061", "690743915000806"];
    for candidate in candidates {
        assert_eq!(validate(candidate, 15), ValidationResult::Valid);
        assert_eq!(candidate.len(), 15);
        assert!(candidate.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_generated_check_digit_validates() {
    let payload: Vec<u8> = "63608377835337"
        .chars()
        .map(|c| c.to_digit(10).unwrap() as u8)
        .collect();
    let check = Luhn::check_digit(&payload);
    let full = format!("63608377835337{}", check);
    assert_eq!(validate(&full, 15), ValidationResult::Valid);
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(ChecksumValidator::imei());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = validator.clone();
            std::thread::spawn(move || validator.validate("490154203237518"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), ValidationResult::Valid);
    }
}

#[test]
fn test_result_serializes_for_hosts() {
    let valid = serde_json::to_value(validate("490154203237518", 15)).unwrap();
    assert_eq!(valid["outcome"], "valid");

    let invalid = serde_json::to_value(validate("12345", 15)).unwrap();
    assert_eq!(invalid["outcome"], "invalid");
    assert_eq!(invalid["reason"]["kind"], "wrong_length");
    assert_eq!(invalid["reason"]["expected"], 15);
    assert_eq!(invalid["reason"]["actual"], 5);
}
