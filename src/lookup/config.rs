use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_HTTPS_TIMEOUT_SEC: u64 = 3;
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "http://localhost:8080/holidays";

/// Replaced by the identity number in request header values.
pub const ID_NUMBER_PLACEHOLDER: &str = "$ID_NUMBER";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// Sends `idNumber` and `name` as query parameters.
    Get,
    /// Sends the request as a JSON body.
    #[default]
    Post,
}

/// Half open range of HTTP status codes, `start..end`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HttpStatusCodeRange {
    pub start: u16,
    pub end: u16,
}

impl HttpStatusCodeRange {
    pub fn contains(&self, status: u16) -> bool {
        (self.start..self.end).contains(&status)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LookupConfig {
    pub endpoint: String,
    pub method: HttpMethod,
    // Values may contain $ID_NUMBER
    pub request_headers: BTreeMap<String, String>,
    pub valid_http_status_code: Vec<HttpStatusCodeRange>,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            endpoint: DEFAULT_LOOKUP_ENDPOINT.to_string(),
            method: HttpMethod::default(),
            request_headers: BTreeMap::new(),
            valid_http_status_code: vec![HttpStatusCodeRange {
                start: 200,
                end: 300,
            }],
            timeout: Duration::from_secs(DEFAULT_HTTPS_TIMEOUT_SEC),
        }
    }
}

impl LookupConfig {
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_request_headers(mut self, request_headers: BTreeMap<String, String>) -> Self {
        self.request_headers = request_headers;
        self
    }

    pub fn with_valid_http_status_code(
        mut self,
        valid_http_status_code: Vec<HttpStatusCodeRange>,
    ) -> Self {
        self.valid_http_status_code = valid_http_status_code;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_valid_status(&self, status: u16) -> bool {
        self.valid_http_status_code
            .iter()
            .any(|range| range.contains(status))
    }

    pub(crate) fn header_value(value: &str, id_number: &str) -> String {
        value.replace(ID_NUMBER_PLACEHOLDER, id_number)
    }
}
