// Tue Jan 13 2026 - Alex

pub mod json;

pub use json::JsonSerializer;

use crate::pattern::Feature;
use serde::{Deserialize, Serialize};

/// Everything a scan produced: the features themselves, where each feature's
/// occurrences came from, and counters describing the run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub features: Vec<Feature>,
    pub provenance: Vec<FeatureProvenance>,
    pub statistics: ScanStatistics,
}

impl ScanReport {
    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    pub fn provenance_of(&self, sequence: &str) -> Option<&FeatureProvenance> {
        self.provenance.iter().find(|p| p.sequence == sequence)
    }
}

/// Per-input breakdown of a feature's occurrences. Feature positions are
/// local to the input they were found in; this keeps track of which input
/// that was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureProvenance {
    pub sequence: String,
    pub occurrences: Vec<SequenceOccurrences>,
}

impl FeatureProvenance {
    pub fn total(&self) -> usize {
        self.occurrences.iter().map(|o| o.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceOccurrences {
    pub index: usize,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStatistics {
    pub sequences: usize,
    pub candidates: usize,
    pub matched_candidates: usize,
    pub features: usize,
    pub total_positions: usize,
    pub elapsed_ms: u64,
}
