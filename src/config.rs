// Tue Jan 13 2026 - Alex

use crate::pattern::error::{FeatureError, FeatureResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a single feature scan.
///
/// Lengths are measured in tokens, i.e. characters when the separator is
/// empty. A `max_length` of -1 removes the upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    max_length: i64,
    min_length: i64,
    min_count: i64,
    separator: String,
    sequences: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_length: -1,
            min_length: 1,
            min_count: 1,
            separator: String::new(),
            sequences: Vec::new(),
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> FeatureResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScanConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    pub fn min_length(&self) -> i64 {
        self.min_length
    }

    pub fn min_count(&self) -> i64 {
        self.min_count
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn sequences(&self) -> &[String] {
        &self.sequences
    }

    pub fn set_max_length(&mut self, max_length: i64) {
        self.max_length = max_length;
    }

    pub fn set_min_length(&mut self, min_length: i64) {
        self.min_length = min_length;
    }

    pub fn set_min_count(&mut self, min_count: i64) {
        self.min_count = min_count;
    }

    pub fn set_separator(&mut self, separator: &str) {
        self.separator = separator.to_string();
    }

    pub fn set_sequences<S: Into<String>>(&mut self, sequences: Vec<S>) {
        self.sequences = sequences.into_iter().map(Into::into).collect();
    }

    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_min_count(mut self, min_count: i64) -> Self {
        self.min_count = min_count;
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn with_sequences<S: Into<String>>(mut self, sequences: Vec<S>) -> Self {
        self.set_sequences(sequences);
        self
    }

    pub fn validate(&self) -> FeatureResult<()> {
        if self.max_length == 0 {
            return Err(invalid("max length must not be 0"));
        }
        if self.max_length < -1 {
            return Err(invalid("max length must be greater than -2"));
        }
        if self.min_length < 1 {
            return Err(invalid("min length must be greater than 0"));
        }
        if self.max_length != -1 && self.max_length < self.min_length {
            return Err(invalid("max length must be equal to or greater than min length"));
        }
        if self.min_count < 0 {
            return Err(invalid("min count must be greater than -1"));
        }
        if self.sequences.is_empty() {
            return Err(invalid("sequences must not be empty"));
        }
        Ok(())
    }

    /// Token length bounds as `(min, max)`, `None` meaning unbounded.
    /// Only meaningful once `validate` has passed.
    pub fn length_bounds(&self) -> (usize, Option<usize>) {
        let min = usize::try_from(self.min_length).unwrap_or(1).max(1);
        let max = usize::try_from(self.max_length).ok();
        (min, max)
    }

    /// Minimum count as an unsigned threshold. Only meaningful once
    /// `validate` has passed.
    pub fn count_threshold(&self) -> usize {
        usize::try_from(self.min_count).unwrap_or(0)
    }
}

fn invalid(msg: &str) -> FeatureError {
    FeatureError::InvalidConfig(msg.to_string())
}

/// Settings of the service that runs scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub threads: usize,
    pub parallel: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            parallel: true,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> FeatureResult<()> {
        if self.threads == 0 {
            return Err(invalid("threads must be greater than 0"));
        }
        Ok(())
    }
}
