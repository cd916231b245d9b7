use log::debug;

use crate::checksum::is_valid_account_number;
use crate::directory::{Bank, BankDirectory};
use crate::observability::labels::{Labels, NO_LABEL};
use crate::observability::metrics::InferenceMetrics;

/// Keeps the banks for which `account_number` carries a valid check digit,
/// trying the short and the long code of every bank independently.
///
/// Bank codes that cannot be parsed are skipped. A malformed account number
/// matches no bank.
pub fn infer_banks(account_number: &str, banks: &[Bank]) -> Vec<Bank> {
    infer_banks_with_metrics(account_number, banks, &InferenceMetrics::new(&NO_LABEL))
}

fn infer_banks_with_metrics(
    account_number: &str,
    banks: &[Bank],
    metrics: &InferenceMetrics,
) -> Vec<Bank> {
    banks
        .iter()
        .filter(|bank| {
            let mut is_match = false;
            for (kind, code) in bank.parsed_codes() {
                match code {
                    Ok(code) => {
                        if is_valid_account_number(account_number, &code) {
                            metrics.record_match(kind);
                            is_match = true;
                        }
                    }
                    Err(err) => {
                        metrics.invalid_code.increment(1);
                        debug!("Skipping {} code of {}: {}", kind, bank.name, err);
                    }
                }
            }
            is_match
        })
        .cloned()
        .collect()
}

/// Finds the banks an account number may belong to, using the banks listed by a directory
pub struct BankInferrer<D: BankDirectory> {
    directory: D,
    metrics: InferenceMetrics,
}

impl<D: BankDirectory> BankInferrer<D> {
    pub fn new(directory: D) -> Self {
        Self::with_labels(directory, &NO_LABEL)
    }

    pub fn with_labels(directory: D, labels: &Labels) -> Self {
        BankInferrer {
            directory,
            metrics: InferenceMetrics::new(labels),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn infer(&self, account_number: &str) -> Vec<Bank> {
        let banks = self.directory.list_banks();
        infer_banks_with_metrics(account_number, &banks, &self.metrics)
    }
}

#[cfg(test)]
mod test {
    use crate::directory::{Bank, StaticBankDirectory};
    use crate::inference::*;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    fn banks() -> Vec<Bank> {
        vec![
            Bank::new("Access Bank", Some("044"), None),
            Bank::new("Guaranty Trust Bank", Some("058"), None),
            Bank::new("Long Code Bank", None, Some("12345")),
            Bank::new("Both Codes Bank", Some("057"), Some("00044")),
            Bank::new("Broken Bank", Some("44"), Some("x1234")),
            Bank::new("No Code Bank", None, None),
        ]
    }

    #[test]
    fn test_infer_short_code() {
        // 1234567895 is valid for 044 only
        let matches = infer_banks("1234567895", &banks());
        assert_eq!(matches, vec![Bank::new("Access Bank", Some("044"), None)]);
    }

    #[test]
    fn test_infer_long_code() {
        let matches = infer_banks("1234567893", &banks());
        assert_eq!(
            matches,
            vec![Bank::new("Long Code Bank", None, Some("12345"))]
        );
    }

    #[test]
    fn test_infer_checks_both_codes() {
        // valid for the long code 00044 of a bank whose short code does not match
        let matches = infer_banks("1234567898", &banks());
        assert_eq!(
            matches,
            vec![Bank::new("Both Codes Bank", Some("057"), Some("00044"))]
        );
    }

    #[test]
    fn test_infer_keeps_every_matching_bank() {
        // 0000000000 is valid for 044, the sum of the 000044 prefix is a multiple of 10.
        // Adjacent matching banks must all be kept.
        let banks = vec![
            Bank::new("Access Bank", Some("044"), None),
            Bank::new("Access Bank (Diamond)", Some("044"), None),
            Bank::new("Access Bank (Legacy)", Some("044"), None),
            Bank::new("Guaranty Trust Bank", Some("058"), None),
        ];
        let matches = infer_banks("0000000000", &banks);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|bank| bank.short_code.as_deref() == Some("044")));
    }

    #[test]
    fn test_infer_malformed_account_number() {
        for account_number in ["", "123", "12345678955", "123456789a"] {
            assert!(infer_banks(account_number, &banks()).is_empty());
        }
    }

    #[test]
    fn test_bank_inferrer() {
        let inferrer = BankInferrer::new(StaticBankDirectory::new(banks()));
        let matches = inferrer.infer("3104872141");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Guaranty Trust Bank");
        assert_eq!(inferrer.directory().list_banks().len(), 6);

        let empty = BankInferrer::new(StaticBankDirectory::default());
        assert!(empty.infer("3104872141").is_empty());
    }

    #[test]
    fn should_submit_inference_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let inferrer = BankInferrer::with_labels(
                StaticBankDirectory::new(banks()),
                &Labels::new(&[("source", "test")]),
            );
            inferrer.infer("1234567895");
            inferrer.infer("1234567893");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let key = Key::from_parts(
            "bank_inference.invalid_code",
            vec![Label::new("source", "test")],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, key))
            .expect("metric not found");
        // two broken codes per call
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(4)));

        for kind in ["short", "long"] {
            let key = Key::from_parts(
                "bank_inference.matches",
                vec![Label::new("source", "test"), Label::new("kind", kind)],
            );
            let metric_value = snapshot
                .get(&CompositeKey::new(Counter, key))
                .expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
        }
    }
}
