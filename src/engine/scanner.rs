// Tue Jan 13 2026 - Alex

use crate::config::{ScanConfig, ServiceConfig};
use crate::engine::cancel::CancellationToken;
use crate::output::{FeatureProvenance, ScanReport, ScanStatistics, SequenceOccurrences};
use crate::pattern::error::{FeatureError, FeatureResult};
use crate::pattern::{CandidateGenerator, Feature, OccurrenceLocator, Position};
use crate::utils::logging::ScopedTimer;
use ahash::AHashSet;
use itertools::Itertools;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Instant;

/// Runs feature scans: collects candidates from every input, locates each
/// candidate in every input, and keeps the ones that recur often enough.
pub struct FeatureScanner {
    locator: OccurrenceLocator,
    use_parallel: bool,
    pool: Option<ThreadPool>,
}

/// All occurrences of one candidate across the inputs.
struct CandidateMatch<'a> {
    text: &'a str,
    positions: Vec<Position>,
    occurrences: Vec<SequenceOccurrences>,
}

impl FeatureScanner {
    pub fn new() -> Self {
        Self {
            locator: OccurrenceLocator::new(),
            use_parallel: true,
            pool: None,
        }
    }

    pub fn with_config(config: &ServiceConfig) -> FeatureResult<Self> {
        config.validate()?;

        let pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .thread_name(|i| format!("feature-scan-{}", i))
                .build()
                .map_err(|e| FeatureError::InvalidConfig(format!("failed to build thread pool: {}", e)))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            locator: OccurrenceLocator::new(),
            use_parallel: config.parallel,
            pool,
        })
    }

    pub fn use_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }

    pub fn scan(&self, config: &ScanConfig, cancel: &CancellationToken) -> FeatureResult<Vec<Feature>> {
        self.scan_report(config, cancel).map(ScanReport::into_features)
    }

    pub fn scan_report(&self, config: &ScanConfig, cancel: &CancellationToken) -> FeatureResult<ScanReport> {
        config.validate()?;
        if cancel.is_cancelled() {
            return Err(FeatureError::Cancelled);
        }

        let _timer = ScopedTimer::new("feature scan");
        let start = Instant::now();

        let candidates = self.collect_candidates(config);
        log::debug!(
            "Collected {} candidates from {} sequences",
            candidates.len(),
            config.sequences().len()
        );

        let matches = self.locate_all(config.sequences(), &candidates, cancel)?;
        let matched_candidates = matches.iter().filter(|m| !m.positions.is_empty()).count();

        let threshold = config.count_threshold();
        let mut features = Vec::new();
        let mut provenance = Vec::new();

        for candidate in matches {
            // A candidate without positions cannot form a feature, even when
            // the threshold is zero.
            if candidate.positions.is_empty() || candidate.positions.len() < threshold {
                continue;
            }

            features.push(Feature::from_positions(candidate.text.to_string(), candidate.positions));
            provenance.push(FeatureProvenance {
                sequence: candidate.text.to_string(),
                occurrences: candidate.occurrences,
            });
        }

        let statistics = ScanStatistics {
            sequences: config.sequences().len(),
            candidates: candidates.len(),
            matched_candidates,
            features: features.len(),
            total_positions: features.iter().map(Feature::count).sum(),
            elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        log::info!(
            "Scan found {} features among {} candidates ({} positions)",
            statistics.features,
            statistics.candidates,
            statistics.total_positions
        );

        Ok(ScanReport {
            features,
            provenance,
            statistics,
        })
    }

    /// Distinct candidates over all inputs, sorted by text.
    fn collect_candidates<'a>(&self, config: &'a ScanConfig) -> Vec<&'a str> {
        let (min_length, max_length) = config.length_bounds();
        let generator = CandidateGenerator::new(config.separator(), min_length, max_length);

        let mut seen = AHashSet::new();
        for sequence in config.sequences() {
            seen.extend(generator.generate(sequence));
        }

        seen.into_iter().sorted_unstable().collect()
    }

    fn locate_all<'a>(
        &self,
        sequences: &[String],
        candidates: &[&'a str],
        cancel: &CancellationToken,
    ) -> FeatureResult<Vec<CandidateMatch<'a>>> {
        if !self.use_parallel {
            return candidates.iter()
                .map(|&candidate| self.locate_checked(sequences, candidate, cancel))
                .collect();
        }

        let run = || {
            candidates.par_iter()
                .map(|&candidate| self.locate_checked(sequences, candidate, cancel))
                .collect::<FeatureResult<Vec<_>>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn locate_checked<'a>(
        &self,
        sequences: &[String],
        candidate: &'a str,
        cancel: &CancellationToken,
    ) -> FeatureResult<CandidateMatch<'a>> {
        if cancel.is_cancelled() {
            return Err(FeatureError::Cancelled);
        }
        Ok(self.locate_candidate(sequences, candidate))
    }

    fn locate_candidate<'a>(&self, sequences: &[String], candidate: &'a str) -> CandidateMatch<'a> {
        let mut positions = Vec::new();
        let mut occurrences = Vec::new();

        for (index, sequence) in sequences.iter().enumerate() {
            let found = self.locator.locate(sequence, candidate);
            if !found.is_empty() {
                occurrences.push(SequenceOccurrences { index, count: found.len() });
                positions.extend(found);
            }
        }

        CandidateMatch {
            text: candidate,
            positions,
            occurrences,
        }
    }
}

impl Default for FeatureScanner {
    fn default() -> Self {
        Self::new()
    }
}
