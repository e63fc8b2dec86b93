use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};
use strum::Display;

/// Two digit years below this value belong to the 2000s, the rest to the 1900s.
pub const CENTURY_PIVOT: u32 = 50;

/// Smallest gender code assigned to males.
pub const MALE_GENDER_CODE_START: u16 = 5000;

/// `dd-mm-yyyy`, zero padded.
pub const FULL_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn from_code(gender_code: u16) -> Self {
        if gender_code < MALE_GENDER_CODE_START {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

/// Renders as the answer to "is a citizen": `Yes` or `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Citizenship {
    #[serde(rename = "Yes")]
    #[strum(serialize = "Yes")]
    Citizen,
    #[serde(rename = "No")]
    #[strum(serialize = "No")]
    PermanentResident,
}

impl Citizenship {
    /// Only called with an already validated digit (0 or 1).
    pub(crate) fn from_digit(digit: u8) -> Self {
        if digit == 0 {
            Citizenship::Citizen
        } else {
            Citizenship::PermanentResident
        }
    }
}

/// Fields decoded from an identity number that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedIdentity {
    pub id_number: String,
    #[serde(rename = "fullDate", serialize_with = "serialize_full_date")]
    pub birth_date: NaiveDate,
    pub gender_code: u16,
    pub gender: Gender,
    pub citizenship_digit: u8,
    pub citizenship: Citizenship,
    pub check_digit: u8,
}

impl DecodedIdentity {
    /// Birth date as `dd-mm-yyyy`.
    pub fn full_date(&self) -> String {
        self.birth_date.format(FULL_DATE_FORMAT).to_string()
    }

    pub fn summary(&self, display_name: &str) -> String {
        format!(
            "Name: {}\nID Number: {}\nBirth Date: {}\nGender: {}\nCitizen: {}",
            display_name,
            self.id_number,
            self.full_date(),
            self.gender,
            self.citizenship
        )
    }
}

fn serialize_full_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(FULL_DATE_FORMAT))
}

/// Builds the birth date from the raw two digit year, month and day.
///
/// The day is added to the first of the month, so days past the end of the
/// month roll into the next one (31 April is 1 May).
pub(crate) fn birth_date(two_digit_year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let century = if two_digit_year < CENTURY_PIVOT { 2000 } else { 1900 };
    let year = century + two_digit_year as i32;
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day.checked_sub(1)?)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pivot_splits_centuries() {
        assert_eq!(birth_date(0, 1, 1), NaiveDate::from_ymd_opt(2000, 1, 1));
        assert_eq!(birth_date(49, 1, 1), NaiveDate::from_ymd_opt(2049, 1, 1));
        assert_eq!(birth_date(50, 1, 1), NaiveDate::from_ymd_opt(1950, 1, 1));
        assert_eq!(birth_date(99, 12, 31), NaiveDate::from_ymd_opt(1999, 12, 31));
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(birth_date(80, 4, 31), NaiveDate::from_ymd_opt(1980, 5, 1));
        // 1980 is a leap year, 1981 is not
        assert_eq!(birth_date(80, 2, 30), NaiveDate::from_ymd_opt(1980, 3, 1));
        assert_eq!(birth_date(81, 2, 29), NaiveDate::from_ymd_opt(1981, 3, 1));
        assert_eq!(birth_date(81, 2, 31), NaiveDate::from_ymd_opt(1981, 3, 3));
    }

    #[test]
    fn gender_boundary() {
        assert_eq!(Gender::from_code(0), Gender::Female);
        assert_eq!(Gender::from_code(4999), Gender::Female);
        assert_eq!(Gender::from_code(5000), Gender::Male);
        assert_eq!(Gender::from_code(9999), Gender::Male);
    }

    #[test]
    fn citizenship_renders_yes_no() {
        assert_eq!(Citizenship::from_digit(0).to_string(), "Yes");
        assert_eq!(Citizenship::from_digit(1).to_string(), "No");
    }

    #[test]
    fn serializes_caller_facing_fields() {
        let decoded = DecodedIdentity {
            id_number: "8001015009087".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            gender_code: 5009,
            gender: Gender::Male,
            citizenship_digit: 0,
            citizenship: Citizenship::Citizen,
            check_digit: 7,
        };
        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(json["fullDate"], "01-01-1980");
        assert_eq!(json["gender"], "Male");
        assert_eq!(json["citizenship"], "Yes");
        assert_eq!(json["idNumber"], "8001015009087");
    }
}
