// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod identity;
mod lookup;
mod observability;
mod search;
mod tokio;

#[cfg(any(test, feature = "testing"))]
mod simple_lookup;

// This is the public API of the library
pub use checksum::{IdNumberChecksum, Validator, CHECKSUM_PAYLOAD_LENGTH};
pub use identity::{
    input_feedback, validate, Citizenship, DecodedIdentity, Gender, ValidationError,
    CENTURY_PIVOT, FULL_DATE_FORMAT, ID_NUMBER_LENGTH, MALE_GENDER_CODE_START,
};
pub use lookup::config::{
    DEFAULT_HTTPS_TIMEOUT_SEC, DEFAULT_LOOKUP_ENDPOINT, ID_NUMBER_PLACEHOLDER,
};
pub use lookup::{
    HolidayLookup, HttpHolidayLookup, HttpMethod, HttpStatusCodeRange, LookupConfig,
    LookupError, LookupRequest, LookupResult, LookupYear,
};
pub use observability::labels::Labels;
pub use search::{
    search, search_with_metrics, DisplayState, HolidayChecker, HolidayReport, SearchError,
    SearchMetrics, NO_HOLIDAYS_MESSAGE, SERVER_ERROR_MESSAGE,
};

#[cfg(feature = "testing")]
pub use crate::simple_lookup::SimpleLookup;
