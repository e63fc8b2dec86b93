use crate::checksum::{sum_all_digits, Validator};

/// Number of leading digits covered by the check digit.
pub const CHECKSUM_PAYLOAD_LENGTH: usize = 12;

/// Luhn-family checksum of the 13 digit identity number.
///
/// Walking the first twelve digits left to right (1-indexed), odd positions
/// contribute the digit itself and even positions contribute the digit sum of
/// twice the digit. The check digit is `(10 - sum % 10) % 10`.
pub struct IdNumberChecksum;

impl IdNumberChecksum {
    /// Expected check digit for the first twelve digits found in `payload`.
    /// Non-digit characters are skipped. Returns `None` if there are fewer than
    /// twelve digits.
    pub fn compute_check_digit(&self, payload: &str) -> Option<u32> {
        let mut digits = payload.chars().filter_map(|c| c.to_digit(10));
        check_digit_of(&mut digits)
    }
}

fn check_digit_of(digits: &mut impl Iterator<Item = u32>) -> Option<u32> {
    let mut sum = 0;
    for position in 1..=CHECKSUM_PAYLOAD_LENGTH {
        let digit = digits.next()?;
        if position % 2 == 1 {
            sum += digit;
        } else {
            sum += sum_all_digits(digit * 2);
        }
    }
    Some((10 - (sum % 10)) % 10)
}

impl Validator for IdNumberChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let mut digits = candidate.chars().filter_map(|c| c.to_digit(10));

        let Some(expected) = check_digit_of(&mut digits) else {
            return false;
        };
        match (digits.next(), digits.next()) {
            (Some(actual), None) => actual == expected,
            // missing check digit or trailing digits
            _ => false,
        }
    }
}
