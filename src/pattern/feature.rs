// Tue Jan 13 2026 - Alex

use crate::pattern::error::{FeatureError, FeatureResult};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open `[start, end]` character offsets of one occurrence inside one
/// input sequence.
pub type Position = [usize; 2];

/// A recurring sub-sequence detected across the scanned inputs, together with
/// every location it was found at.
///
/// All access goes through one lock so a feature can be shared between
/// threads (behind an `Arc`) and enriched with further positions after the
/// scan that produced it has returned.
pub struct Feature {
    sequence: String,
    positions: Mutex<Vec<Position>>,
}

impl Feature {
    pub fn new(sequence: &str, positions: Vec<Vec<usize>>) -> FeatureResult<Self> {
        if positions.is_empty() {
            return Err(FeatureError::InvalidConfig("positions must not be empty".to_string()));
        }
        if sequence.is_empty() {
            return Err(FeatureError::InvalidConfig("sequence must not be empty".to_string()));
        }

        let positions = positions.iter()
            .map(|p| to_position(p).ok_or_else(|| {
                FeatureError::InvalidConfig("positions must have 2 dimensions".to_string())
            }))
            .collect::<FeatureResult<Vec<_>>>()?;

        Ok(Self::from_positions(sequence.to_string(), positions))
    }

    /// Builds a feature from positions that are already two-dimensional.
    pub(crate) fn from_positions(sequence: String, positions: Vec<Position>) -> Self {
        debug_assert!(!sequence.is_empty() && !positions.is_empty());
        Self {
            sequence,
            positions: Mutex::new(positions),
        }
    }

    pub fn add_position(&self, position: &[usize]) -> FeatureResult<()> {
        let mut positions = self.positions.lock();

        let position = to_position(position).ok_or_else(|| {
            FeatureError::InvalidOperation("positions must have 2 dimensions".to_string())
        })?;

        positions.push(position);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.positions.lock().len()
    }

    /// Returns a copy of the positions recorded so far.
    pub fn positions(&self) -> Vec<Position> {
        self.positions.lock().clone()
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn snapshot(&self) -> FeatureSnapshot {
        let positions = self.positions();
        FeatureSnapshot {
            sequence: self.sequence.clone(),
            count: positions.len(),
            positions,
        }
    }
}

fn to_position(position: &[usize]) -> Option<Position> {
    match *position {
        [start, end] => Some([start, end]),
        _ => None,
    }
}

impl Clone for Feature {
    fn clone(&self) -> Self {
        Self::from_positions(self.sequence.clone(), self.positions())
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature")
            .field("sequence", &self.sequence)
            .field("positions", &*self.positions.lock())
            .finish()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x{}", self.sequence, self.count())
    }
}

/// Point-in-time copy of a feature, used for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    pub sequence: String,
    pub count: usize,
    pub positions: Vec<Position>,
}

impl TryFrom<FeatureSnapshot> for Feature {
    type Error = FeatureError;

    fn try_from(snapshot: FeatureSnapshot) -> FeatureResult<Self> {
        let positions = snapshot.positions.iter().map(|p| p.to_vec()).collect();
        Feature::new(&snapshot.sequence, positions)
    }
}
