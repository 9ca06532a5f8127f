pub mod classifier;
pub mod engine;
pub mod input;
pub mod report;

pub use crate::domain::model::{ClassificationResult, CoverageAreas, CoverageTier, ZipCode};
pub use crate::domain::ports::{ConfigProvider, CoverageSource};
pub use crate::utils::error::Result;
