// Tue Jan 13 2026 - Alex

use crate::config::{ScanConfig, ServiceConfig};
use crate::engine::cancel::CancellationToken;
use crate::engine::scanner::FeatureScanner;
use crate::output::ScanReport;
use crate::pattern::error::{FeatureError, FeatureResult};
use crate::pattern::Feature;
use std::fmt;
use std::sync::Once;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Created,
    Running,
    Stopped,
}

/// Owns a scanner and exposes it behind a start/stop lifecycle.
///
/// `start` and `stop` run their work at most once and block concurrent
/// callers until that work has completed. Stopping trips the service's
/// cancellation token, so scans in flight abort and later scans are refused.
pub struct FeatureService {
    config: ServiceConfig,
    scanner: FeatureScanner,
    boot_once: Once,
    shutdown_once: Once,
    shutdown: CancellationToken,
}

impl FeatureService {
    pub fn new(config: ServiceConfig) -> FeatureResult<Self> {
        let scanner = FeatureScanner::with_config(&config)?;

        Ok(Self {
            config,
            scanner,
            boot_once: Once::new(),
            shutdown_once: Once::new(),
            shutdown: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn start(&self) {
        self.boot_once.call_once(|| {
            log::info!(
                "Feature service started ({} threads, parallel: {})",
                self.config.threads,
                self.config.parallel
            );
        });
    }

    pub fn stop(&self) {
        self.shutdown_once.call_once(|| {
            self.shutdown.cancel();
            log::info!("Feature service stopped");
        });
    }

    pub fn state(&self) -> ServiceState {
        if self.shutdown_once.is_completed() {
            ServiceState::Stopped
        } else if self.boot_once.is_completed() {
            ServiceState::Running
        } else {
            ServiceState::Created
        }
    }

    /// Default scan parameters, to be adjusted by the caller before scanning.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new()
    }

    pub fn scan(&self, config: &ScanConfig) -> FeatureResult<Vec<Feature>> {
        self.scan_with_cancel(config, &CancellationToken::new())
    }

    pub fn scan_with_cancel(&self, config: &ScanConfig, cancel: &CancellationToken) -> FeatureResult<Vec<Feature>> {
        self.scan_report_with_cancel(config, cancel).map(ScanReport::into_features)
    }

    pub fn scan_report(&self, config: &ScanConfig) -> FeatureResult<ScanReport> {
        self.scan_report_with_cancel(config, &CancellationToken::new())
    }

    pub fn scan_report_with_cancel(&self, config: &ScanConfig, cancel: &CancellationToken) -> FeatureResult<ScanReport> {
        if self.shutdown.is_cancelled() {
            return Err(FeatureError::InvalidOperation("service has been stopped".to_string()));
        }

        let cancel = cancel.linked(&self.shutdown);
        self.scanner.scan_report(config, &cancel)
    }
}

impl fmt::Debug for FeatureService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureService")
            .field("config", &self.config)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    /// Inputs large enough that a full scan takes far longer than the tests
    /// wait before cancelling.
    fn long_sequences() -> Vec<String> {
        (0..3)
            .map(|s| (0..600).map(|i| char::from(b'a' + ((i * 7 + i * i * 13 + s) % 26) as u8)).collect())
            .collect()
    }

    fn service() -> FeatureService {
        FeatureService::new(ServiceConfig::new()).unwrap()
    }

    fn sorted_texts(features: &[Feature]) -> Vec<String> {
        let mut texts: Vec<_> = features.iter().map(|f| f.sequence().to_string()).collect();
        texts.sort();
        texts
    }

    #[test]
    fn test_scan_finds_punctuation() {
        let service = service();
        let mut config = service.scan_config();
        config.set_min_count(2);
        config.set_sequences(vec!["This is, a test.", "This is, another test."]);

        let features = service.scan(&config).unwrap();
        let dot = features.iter().find(|f| f.sequence() == ".").unwrap();
        assert_eq!(dot.count(), 2);
        assert_eq!(dot.positions(), vec![[15, 16], [21, 22]]);
    }

    #[test]
    fn test_scan_min_length_max_length() {
        struct TestCase {
            min_length: i64,
            max_length: i64,
            sequences: Vec<&'static str>,
            expected: Vec<&'static str>,
            invalid: bool,
        }

        let ab_abc = vec!["ab", "ab", "abc", "abc"];
        let test_cases = vec![
            TestCase { min_length: 1, max_length: -1, sequences: vec!["ab"], expected: vec![], invalid: false },
            TestCase { min_length: 1, max_length: -1, sequences: vec!["ab", "ab"], expected: vec!["a", "b", "ab"], invalid: false },
            TestCase { min_length: 1, max_length: -1, sequences: vec!["ab", "ab", "ab"], expected: vec!["a", "b", "ab"], invalid: false },
            TestCase { min_length: 1, max_length: -1, sequences: vec!["ab", "ab", "abc"], expected: vec!["a", "b", "ab"], invalid: false },
            TestCase { min_length: 1, max_length: -1, sequences: ab_abc.clone(), expected: vec!["a", "b", "c", "ab", "bc", "abc"], invalid: false },
            TestCase { min_length: 1, max_length: 1, sequences: ab_abc.clone(), expected: vec!["a", "b", "c"], invalid: false },
            TestCase { min_length: 2, max_length: 2, sequences: ab_abc.clone(), expected: vec!["ab", "bc"], invalid: false },
            TestCase { min_length: 3, max_length: 3, sequences: ab_abc.clone(), expected: vec!["abc"], invalid: false },
            TestCase { min_length: 2, max_length: 3, sequences: ab_abc.clone(), expected: vec!["ab", "bc", "abc"], invalid: false },
            TestCase { min_length: 2, max_length: -1, sequences: ab_abc.clone(), expected: vec!["ab", "bc", "abc"], invalid: false },
            TestCase { min_length: 1, max_length: -2, sequences: ab_abc.clone(), expected: vec![], invalid: true },
            TestCase { min_length: 2, max_length: 1, sequences: ab_abc.clone(), expected: vec![], invalid: true },
            TestCase { min_length: 0, max_length: -1, sequences: ab_abc.clone(), expected: vec![], invalid: true },
        ];

        let service = service();
        for (i, test_case) in test_cases.into_iter().enumerate() {
            let config = service.scan_config()
                .with_min_count(2)
                .with_max_length(test_case.max_length)
                .with_min_length(test_case.min_length)
                .with_sequences(test_case.sequences);

            match service.scan(&config) {
                Ok(features) => {
                    assert!(!test_case.invalid, "case {} expected an error", i + 1);
                    let mut expected: Vec<String> = test_case.expected.iter().map(|s| s.to_string()).collect();
                    expected.sort();
                    assert_eq!(sorted_texts(&features), expected, "case {}", i + 1);
                }
                Err(err) => {
                    assert!(test_case.invalid && err.is_invalid_config(), "case {}: {}", i + 1, err);
                }
            }
        }
    }

    #[test]
    fn test_scan_counts_per_feature() {
        let service = service();
        let config = service.scan_config()
            .with_min_count(2)
            .with_sequences(vec!["ab", "ab"]);

        for feature in service.scan(&config).unwrap() {
            assert_eq!(feature.count(), 2);
            assert_eq!(feature.count(), feature.positions().len());
        }
    }

    #[test]
    fn test_scan_results_are_sorted() {
        let service = service();
        let config = service.scan_config()
            .with_min_count(1)
            .with_sequences(vec!["cba", "bca"]);

        let features = service.scan(&config).unwrap();
        let texts: Vec<_> = features.iter().map(|f| f.sequence().to_string()).collect();
        assert_eq!(texts, sorted_texts(&features));
    }

    #[test]
    fn test_features_accept_positions_after_scan() {
        let service = service();
        let config = service.scan_config()
            .with_min_count(2)
            .with_sequences(vec!["ab", "ab"]);

        let features = service.scan(&config).unwrap();
        let feature = &features[0];
        feature.add_position(&[7, 8]).unwrap();
        assert_eq!(feature.count(), 3);
        assert!(feature.add_position(&[7]).unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_lifecycle_is_idempotent() {
        let service = service();
        assert_eq!(service.state(), ServiceState::Created);

        service.start();
        service.start();
        assert_eq!(service.state(), ServiceState::Running);

        service.stop();
        service.stop();
        assert_eq!(service.state(), ServiceState::Stopped);
    }

    #[test]
    fn test_scan_after_stop_is_refused() {
        let service = service();
        service.start();
        service.stop();

        let config = service.scan_config().with_sequences(vec!["ab"]);
        assert!(service.scan(&config).unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_scan_with_cancelled_token() {
        let service = service();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let config = service.scan_config().with_sequences(vec!["ab"]);
        assert!(service.scan_with_cancel(&config, &cancel).unwrap_err().is_cancelled());
        assert!(service.scan(&config).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_threads() {
        let err = FeatureService::new(ServiceConfig::new().with_threads(0)).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_debug_shows_config_and_state() {
        let service = FeatureService::new(ServiceConfig::new().with_threads(2)).unwrap();
        service.start();

        let rendered = format!("{:?}", service);
        assert!(rendered.starts_with("FeatureService"));
        assert!(rendered.contains("threads: 2"));
        assert!(rendered.contains("state: Running"));
    }

    #[test]
    fn test_stop_aborts_running_scan() {
        let service = Arc::new(FeatureService::new(ServiceConfig::new().with_threads(2)).unwrap());
        service.start();

        let config = service.scan_config().with_sequences(long_sequences());
        let ready = Arc::new(Barrier::new(2));

        let handle = {
            let service = service.clone();
            let ready = ready.clone();
            thread::spawn(move || {
                ready.wait();
                service.scan(&config)
            })
        };

        ready.wait();
        thread::sleep(Duration::from_millis(5));
        service.stop();

        let err = handle.join().unwrap().unwrap_err();
        assert!(err.is_cancelled(), "unexpected error: {}", err);
        assert_eq!(service.state(), ServiceState::Stopped);
    }
}
