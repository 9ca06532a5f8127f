use crate::domain::model::CoverageAreas;
use crate::utils::error::Result;

/// Where a deployment's coverage sets come from.
pub trait CoverageSource: Send + Sync {
    fn load(&self) -> Result<CoverageAreas>;

    /// Human-readable origin, used in logs and dry-run summaries.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn config_path(&self) -> Option<&str>;
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> &str;
    fn zip_column(&self) -> &str;
    fn zips(&self) -> &[String];
}
