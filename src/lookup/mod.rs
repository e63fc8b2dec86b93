pub mod config;
mod http_lookup;
mod result;

pub use config::{HttpMethod, HttpStatusCodeRange, LookupConfig};
pub use http_lookup::HttpHolidayLookup;
pub use result::{LookupRequest, LookupResult, LookupYear};

use async_trait::async_trait;
use std::sync::Arc;
use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LookupError {
    #[error("Error making HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid lookup response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// For lookups that are not backed by HTTP.
    #[error("Lookup unavailable: {0}")]
    Unavailable(String),
}

impl LookupError {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// The external holiday lookup service, keyed by identity number.
#[async_trait]
pub trait HolidayLookup: Send + Sync {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, LookupError>;
}

#[async_trait]
impl<T: HolidayLookup + ?Sized> HolidayLookup for Arc<T> {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        self.as_ref().lookup(request).await
    }
}

#[async_trait]
impl<T: HolidayLookup + ?Sized> HolidayLookup for Box<T> {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        self.as_ref().lookup(request).await
    }
}
