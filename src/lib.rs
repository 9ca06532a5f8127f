pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BuiltinSource, TomlFileSource};
pub use config::toml_config::CoverageConfig;
pub use crate::core::{
    classifier::{classify_with, ZipCoverageClassifier},
    engine::CoverageEngine,
    input::{format_phone, sanitize_zip_input},
    report::BatchReport,
};
pub use domain::model::{ClassificationResult, CoverageAreas, CoverageTier, ZipCode};
pub use utils::error::{CoverageError, Result};
