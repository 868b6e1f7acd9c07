// Tue Jan 13 2026 - Alex

pub mod candidate;
pub mod error;
pub mod feature;
pub mod locator;

pub use candidate::CandidateGenerator;
pub use error::{FeatureError, FeatureResult};
pub use feature::{Feature, FeatureSnapshot, Position};
pub use locator::OccurrenceLocator;
