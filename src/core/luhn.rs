use crate::domain::ports::ChecksumScheme;

/// The Luhn checksum over a fixed-length digit sequence.
///
/// Positions are counted left to right from 0. Digits at odd positions are
/// doubled, with 9 subtracted when the doubled value exceeds 9; digits at
/// even positions count as-is. A sequence passes when the sum is divisible
/// by 10. For a 15-digit IMEI this matches the standard check-digit rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Luhn;

impl Luhn {
    /// Luhn-weighted sum of `digits`.
    pub fn weighted_sum(digits: &[u8]) -> u32 {
        digits
            .iter()
            .enumerate()
            .map(|(position, &digit)| {
                let digit = u32::from(digit);
                if position % 2 == 1 {
                    let doubled = digit * 2;
                    if doubled > 9 {
                        doubled - 9
                    } else {
                        doubled
                    }
                } else {
                    digit
                }
            })
            .sum()
    }

    /// The digit that, appended to `payload`, makes the whole sequence pass.
    ///
    /// When the appended digit lands at an odd position it is itself subject
    /// to doubling, so the inverse of the doubling map is applied.
    pub fn check_digit(payload: &[u8]) -> u8 {
        let target = ((10 - Self::weighted_sum(payload) % 10) % 10) as u8;
        if payload.len() % 2 == 1 {
            // doubling maps d to 2d (d < 5) or 2d - 9 (d >= 5); invert it
            if target % 2 == 0 {
                target / 2
            } else {
                (target + 9) / 2
            }
        } else {
            target
        }
    }
}

impl ChecksumScheme for Luhn {
    fn check(&self, digits: &[u8]) -> bool {
        Self::weighted_sum(digits) % 10 == 0
    }
}
