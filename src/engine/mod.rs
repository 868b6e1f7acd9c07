// Tue Jan 13 2026 - Alex

pub mod cancel;
pub mod scanner;
pub mod service;

pub use cancel::CancellationToken;
pub use scanner::FeatureScanner;
pub use service::{FeatureService, ServiceState};
