//! Merges local validation with the holiday lookup into a [DisplayState].
//!
//! A search runs two gates in sequence. The local gate validates and decodes
//! the identity number; the remote gate asks the lookup service, which has the
//! final say: a message containing "invalid" rejects an identity number that
//! passed locally.

mod checker;
mod metrics;

pub use self::checker::HolidayChecker;
pub use self::metrics::SearchMetrics;

use crate::identity::{self, DecodedIdentity, ValidationError};
use crate::lookup::{HolidayLookup, LookupError, LookupRequest, LookupResult};
use serde::Serialize;
use thiserror::Error;

/// Shown for any failure of the lookup itself. Details are only logged.
pub const SERVER_ERROR_MESSAGE: &str = "A server error occurred.";

/// Holiday description used when the lookup returns none.
pub const NO_HOLIDAYS_MESSAGE: &str = "No public holidays found for your birthday.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayReport {
    pub decoded: DecodedIdentity,
    /// Human readable summary of the decoded identity.
    pub description: String,
    pub holiday_description: String,
    pub all_holidays_list: Vec<String>,
    pub year: Option<String>,
    pub message: String,
}

impl HolidayReport {
    fn merge(decoded: DecodedIdentity, description: String, result: LookupResult) -> Self {
        let all_holidays_list = result.holidays();
        HolidayReport {
            decoded,
            description,
            holiday_description: result
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| NO_HOLIDAYS_MESSAGE.to_string()),
            all_holidays_list,
            year: result.year.map(|year| year.to_string()),
            message: result.message.unwrap_or_default(),
        }
    }
}

/// Snapshot handed to the caller. Rebuilt from scratch by every search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayState {
    /// Nothing to show: before the first search and while one is running.
    #[default]
    Idle,
    Found(HolidayReport),
    #[serde(rename_all = "camelCase")]
    Failed { error_message: String },
}

impl DisplayState {
    pub fn is_ok(&self) -> bool {
        matches!(self, DisplayState::Found(_))
    }

    pub fn report(&self) -> Option<&HolidayReport> {
        match self {
            DisplayState::Found(report) => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DisplayState::Failed { error_message } => Some(error_message),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    RemoteRejection(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl SearchError {
    /// Message shown to the user. Lookup failures collapse to [SERVER_ERROR_MESSAGE].
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Validation(err) => err.to_string(),
            SearchError::RemoteRejection(message) => message.clone(),
            SearchError::Lookup(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Validates `id_number`, asks `lookup` for holidays and merges both.
///
/// The lookup is only called when local validation passes.
pub async fn search<L: HolidayLookup + ?Sized>(
    id_number: &str,
    display_name: &str,
    lookup: &L,
) -> DisplayState {
    search_with_metrics(id_number, display_name, lookup, &SearchMetrics::default()).await
}

pub async fn search_with_metrics<L: HolidayLookup + ?Sized>(
    id_number: &str,
    display_name: &str,
    lookup: &L,
    metrics: &SearchMetrics,
) -> DisplayState {
    metrics.searches.increment(1);

    match run(id_number, display_name, lookup).await {
        Ok(report) => {
            metrics.successes.increment(1);
            DisplayState::Found(report)
        }
        Err(err) => {
            report_failure(&err, id_number, metrics);
            DisplayState::Failed {
                error_message: err.user_message(),
            }
        }
    }
}

async fn run<L: HolidayLookup + ?Sized>(
    id_number: &str,
    display_name: &str,
    lookup: &L,
) -> Result<HolidayReport, SearchError> {
    let decoded = identity::validate(id_number)?;
    let description = decoded.summary(display_name);

    let result = lookup
        .lookup(&LookupRequest::new(id_number, display_name))
        .await?;
    let result = remote_gate(result)?;

    Ok(HolidayReport::merge(decoded, description, result))
}

fn remote_gate(result: LookupResult) -> Result<LookupResult, SearchError> {
    match result.rejection_message() {
        Some(message) => Err(SearchError::RemoteRejection(message.to_string())),
        None => Ok(result),
    }
}

fn report_failure(err: &SearchError, id_number: &str, metrics: &SearchMetrics) {
    match err {
        SearchError::Validation(validation_error) => {
            metrics.record_validation_failure(validation_error);
            tracing::debug!(
                reason = validation_error.reason(),
                "identity number rejected locally"
            );
        }
        SearchError::RemoteRejection(message) => {
            metrics.remote_rejections.increment(1);
            tracing::warn!(
                id_number = %identity::redact(id_number),
                message = %message,
                "holiday lookup rejected identity number"
            );
        }
        SearchError::Lookup(lookup_error) => {
            metrics.record_lookup_error(lookup_error);
            tracing::error!(
                id_number = %identity::redact(id_number),
                error = %lookup_error,
                "holiday lookup failed"
            );
        }
    }
}
