use crate::bank_code::BankCodeKind;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

const STATUS: &str = "status";
const KIND: &str = "kind";

pub struct DirectoryMetrics {
    pub fetch_success: Counter,
    pub fetch_failed: Counter,
    pub parse_failed: Counter,
    pub banks_loaded: Counter,
}

impl DirectoryMetrics {
    pub fn new(labels: &Labels) -> Self {
        DirectoryMetrics {
            fetch_success: counter!(
                "bank_directory.fetch",
                labels.clone_with_labels(&[(STATUS, "success")])
            ),
            fetch_failed: counter!(
                "bank_directory.fetch",
                labels.clone_with_labels(&[(STATUS, "fetch_failed")])
            ),
            parse_failed: counter!(
                "bank_directory.fetch",
                labels.clone_with_labels(&[(STATUS, "parse_failed")])
            ),
            banks_loaded: counter!("bank_directory.banks", labels.clone()),
        }
    }
}

impl Default for DirectoryMetrics {
    fn default() -> Self {
        DirectoryMetrics::new(&NO_LABEL)
    }
}

pub struct InferenceMetrics {
    pub invalid_code: Counter,
    pub short_code_matches: Counter,
    pub long_code_matches: Counter,
}

impl InferenceMetrics {
    pub fn new(labels: &Labels) -> Self {
        InferenceMetrics {
            invalid_code: counter!("bank_inference.invalid_code", labels.clone()),
            short_code_matches: counter!(
                "bank_inference.matches",
                labels.clone_with_labels(&[(KIND, BankCodeKind::Short.to_string())])
            ),
            long_code_matches: counter!(
                "bank_inference.matches",
                labels.clone_with_labels(&[(KIND, BankCodeKind::Long.to_string())])
            ),
        }
    }

    pub fn record_match(&self, kind: BankCodeKind) {
        match kind {
            BankCodeKind::Short => self.short_code_matches.increment(1),
            BankCodeKind::Long => self.long_code_matches.increment(1),
        }
    }
}

impl Default for InferenceMetrics {
    fn default() -> Self {
        InferenceMetrics::new(&NO_LABEL)
    }
}
