//! Validation and decoding of the 13 digit national identity number.
//!
//! Layout (digits are 1-indexed):
//!
//! | digits | meaning                                   |
//! |--------|-------------------------------------------|
//! | 1-6    | birth date as `YYMMDD`                    |
//! | 7-10   | gender code, below 5000 is female         |
//! | 11     | 0 for citizens, 1 for permanent residents |
//! | 12     | unused by the decoder                     |
//! | 13     | check digit over digits 1-12              |

mod decoded;
mod error;

pub use decoded::{
    Citizenship, DecodedIdentity, Gender, CENTURY_PIVOT, FULL_DATE_FORMAT, MALE_GENDER_CODE_START,
};
pub use error::ValidationError;

use crate::checksum::{IdNumberChecksum, Validator};
use std::ops::Range;

pub const ID_NUMBER_LENGTH: usize = 13;

const YEAR: Range<usize> = 0..2;
const MONTH: Range<usize> = 2..4;
const DAY: Range<usize> = 4..6;
const GENDER_CODE: Range<usize> = 6..10;
const CITIZENSHIP: usize = 10;
const CHECK_DIGIT: usize = 12;

const MAX_GENDER_CODE: u16 = 9999;

/// Validates `id_number` and decodes its fields.
///
/// Checks run in a fixed order and the first failure is returned: emptiness,
/// digits only, length, month, day, gender code, citizenship digit, checksum.
pub fn validate(id_number: &str) -> Result<DecodedIdentity, ValidationError> {
    if id_number.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !id_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonNumeric);
    }
    // ASCII only from here on, so byte indexing is safe
    if id_number.len() != ID_NUMBER_LENGTH {
        return Err(ValidationError::WrongLength);
    }

    let month = numeric_field(id_number, MONTH);
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth);
    }

    // Not bounded by the length of the month
    let day = numeric_field(id_number, DAY);
    if !(1..=31).contains(&day) {
        return Err(ValidationError::InvalidDay);
    }

    let gender_code = id_number[GENDER_CODE]
        .parse::<u16>()
        .map_err(|_| ValidationError::InvalidGenderCode)?;
    if gender_code > MAX_GENDER_CODE {
        return Err(ValidationError::InvalidGenderCode);
    }

    let citizenship_digit = digit_at(id_number, CITIZENSHIP);
    if citizenship_digit > 1 {
        return Err(ValidationError::InvalidCitizenshipDigit);
    }

    if !IdNumberChecksum.is_valid_match(id_number) {
        return Err(ValidationError::ChecksumMismatch);
    }

    let birth_date = decoded::birth_date(numeric_field(id_number, YEAR), month, day)
        .ok_or(ValidationError::InvalidDay)?;

    Ok(DecodedIdentity {
        id_number: id_number.to_string(),
        birth_date,
        gender_code,
        gender: Gender::from_code(gender_code),
        citizenship_digit,
        citizenship: Citizenship::from_digit(citizenship_digit),
        check_digit: digit_at(id_number, CHECK_DIGIT),
    })
}

/// Feedback for an identity number that is still being typed.
///
/// An empty field shows nothing; anything else reports the first failing check.
pub fn input_feedback(raw: &str) -> Option<ValidationError> {
    if raw.is_empty() {
        return None;
    }
    validate(raw).err()
}

/// Keeps the birth date portion of an identity number and masks the rest, for logs.
pub(crate) fn redact(id_number: &str) -> String {
    id_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < DAY.end { c } else { '*' })
        .collect()
}

fn numeric_field(id_number: &str, range: Range<usize>) -> u32 {
    id_number.as_bytes()[range]
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn digit_at(id_number: &str, index: usize) -> u8 {
    id_number.as_bytes()[index] - b'0'
}
