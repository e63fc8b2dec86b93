use crate::observability::labels::{Labels, NO_LABEL};
use crate::{LookupError, ValidationError};
use metrics::{counter, Counter};

const REASON: &str = "reason";
const KIND: &str = "kind";

pub struct SearchMetrics {
    labels: Labels,
    pub searches: Counter,
    pub successes: Counter,
    pub remote_rejections: Counter,
    pub stale_results_dropped: Counter,
}

impl SearchMetrics {
    pub fn new(labels: &Labels) -> Self {
        SearchMetrics {
            labels: labels.clone(),
            searches: counter!("search.count", labels.clone()),
            successes: counter!("search.success", labels.clone()),
            remote_rejections: counter!("search.remote_rejection", labels.clone()),
            stale_results_dropped: counter!("search.stale_result_dropped", labels.clone()),
        }
    }

    pub fn record_validation_failure(&self, error: &ValidationError) {
        counter!(
            "search.validation_failure",
            self.labels.clone_with_labels(&[(REASON, error.reason())])
        )
        .increment(1);
    }

    pub fn record_lookup_error(&self, error: &LookupError) {
        counter!(
            "search.lookup_error",
            self.labels.clone_with_labels(&[(KIND, error.kind())])
        )
        .increment(1);
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        SearchMetrics::new(&NO_LABEL)
    }
}
