pub mod builtin;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "zip-coverage")]
#[command(about = "Check zip codes against a service-area coverage table")]
pub struct CliConfig {
    /// Zip codes to check
    #[arg(value_name = "ZIP")]
    pub zips: Vec<String>,

    /// Coverage TOML file; the built-in table is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Batch input: one zip per line, or a .csv file with a zip column
    #[arg(short, long)]
    pub input: Option<String>,

    /// Column holding the zip code in CSV input
    #[arg(long, default_value = "zip")]
    pub zip_column: String,

    /// Output format: text, json, csv or tsv
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Load and validate the coverage table without classifying anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn config_path(&self) -> Option<&str> {
        self.config.as_deref()
    }

    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn zip_column(&self) -> &str {
        &self.zip_column
    }

    fn zips(&self) -> &[String] {
        &self.zips
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_output_format("format", &self.format)?;
        validation::validate_non_empty_string("zip_column", &self.zip_column)?;

        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(path) = &self.input {
            validation::validate_path("input", path)?;
        }
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }

        Ok(())
    }
}
