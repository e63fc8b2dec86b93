mod id_number_checksum;

pub use crate::checksum::id_number_checksum::{IdNumberChecksum, CHECKSUM_PAYLOAD_LENGTH};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
