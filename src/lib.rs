// Tue Jan 15 2026 - Alex

pub mod config;
pub mod engine;
pub mod output;
pub mod pattern;
pub mod utils;

pub use config::{ScanConfig, ServiceConfig};
pub use engine::{CancellationToken, FeatureScanner, FeatureService};
pub use output::{JsonSerializer, ScanReport};
pub use pattern::{Feature, FeatureError, FeatureResult, Position};
