use crate::lookup::{HolidayLookup, LookupError, LookupRequest, LookupResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory [HolidayLookup] that answers every request the same way and
/// remembers what it was asked.
pub struct SimpleLookup {
    response: Result<LookupResult, String>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<LookupRequest>>,
}

impl SimpleLookup {
    pub fn returning(result: LookupResult) -> Self {
        Self::new(Ok(result))
    }

    /// Every lookup fails with [LookupError::Unavailable].
    pub fn failing(reason: &str) -> Self {
        Self::new(Err(reason.to_string()))
    }

    fn new(response: Result<LookupResult, String>) -> Self {
        SimpleLookup {
            response,
            delays: HashMap::new(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(vec![]),
        }
    }

    /// Delays the answer for one identity number.
    pub fn with_delay_for(mut self, id_number: &str, delay: Duration) -> Self {
        self.delays.insert(id_number.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HolidayLookup for SimpleLookup {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delays.get(&request.id_number) {
            tokio::time::sleep(*delay).await;
        }

        self.response
            .clone()
            .map_err(LookupError::Unavailable)
    }
}
