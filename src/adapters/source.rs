use crate::config::builtin;
use crate::config::toml_config::CoverageConfig;
use crate::domain::model::{CoverageAreas, ZipCode};
use crate::domain::ports::CoverageSource;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CoverageSource for TomlFileSource {
    fn load(&self) -> Result<CoverageAreas> {
        let config = CoverageConfig::from_file(&self.path)?;
        config.to_areas()
    }

    fn describe(&self) -> String {
        format!("coverage file {}", self.path.display())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CoverageSource for BuiltinSource {
    fn load(&self) -> Result<CoverageAreas> {
        let collect = |zips: &[&str]| -> HashSet<ZipCode> {
            zips.iter().filter_map(|z| ZipCode::parse(z)).collect()
        };

        Ok(CoverageAreas::new(
            builtin::DEPLOYMENT_NAME,
            collect(builtin::SERVICE_AREA),
            collect(builtin::EXTENDED_AREA),
        ))
    }

    fn describe(&self) -> String {
        format!("built-in table '{}'", builtin::DEPLOYMENT_NAME)
    }
}
