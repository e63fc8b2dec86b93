use strum::IntoStaticStr;
use thiserror::Error;

/// Reason an identity number was rejected. The `Display` text is the message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationError {
    #[error("Please enter an ID number.")]
    EmptyInput,

    #[error("ID must contain only digits.")]
    NonNumeric,

    #[error("ID must be 13 digits long.")]
    WrongLength,

    #[error("Invalid birth month. Month must be between 01 and 12.")]
    InvalidMonth,

    #[error("Invalid birth day. Day must be between 01 and 31.")]
    InvalidDay,

    #[error("Invalid gender code. Must be between 0000 and 9999.")]
    InvalidGenderCode,

    #[error("Invalid citizenship digit. Must be 0 (SA citizen) or 1 (permanent resident).")]
    InvalidCitizenshipDigit,

    #[error("Invalid checksum. The last digit does not match the ID number.")]
    ChecksumMismatch,
}

impl ValidationError {
    /// Stable snake_case name, used as a metric label.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod test {
    use super::ValidationError;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::NonNumeric.to_string(),
            "ID must contain only digits."
        );
        assert_eq!(
            ValidationError::WrongLength.to_string(),
            "ID must be 13 digits long."
        );
        assert_eq!(
            ValidationError::ChecksumMismatch.to_string(),
            "Invalid checksum. The last digit does not match the ID number."
        );
    }

    #[test]
    fn reasons_are_snake_case() {
        assert_eq!(ValidationError::EmptyInput.reason(), "empty_input");
        assert_eq!(
            ValidationError::InvalidCitizenshipDigit.reason(),
            "invalid_citizenship_digit"
        );
        assert_eq!(ValidationError::ChecksumMismatch.reason(), "checksum_mismatch");
    }
}
