use crate::adapters::{BuiltinSource, TomlFileSource};
use crate::core::classifier::ZipCoverageClassifier;
use crate::core::report::{self, BatchReport};
use crate::domain::ports::{ConfigProvider, CoverageSource};
use crate::utils::error::Result;
use std::path::Path;

/// Picks the coverage source for a configured path, falling back to the
/// built-in table.
pub fn source_for(config_path: Option<&str>) -> Box<dyn CoverageSource> {
    match config_path {
        Some(path) => Box::new(TomlFileSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}

pub struct CoverageEngine<C: ConfigProvider> {
    config: C,
    classifier: ZipCoverageClassifier,
}

impl<C: ConfigProvider> CoverageEngine<C> {
    pub fn new(config: C) -> Result<Self> {
        let source = source_for(config.config_path());
        let classifier = ZipCoverageClassifier::from_source(source.as_ref())?;
        Ok(Self { config, classifier })
    }

    pub fn with_classifier(config: C, classifier: ZipCoverageClassifier) -> Self {
        Self { config, classifier }
    }

    pub fn classifier(&self) -> &ZipCoverageClassifier {
        &self.classifier
    }

    /// 收集輸入 (批次檔在前，命令列參數在後) 並分類
    pub fn run(&self) -> Result<BatchReport> {
        let mut entries = match self.config.input_path() {
            Some(path) => report::read_entries(Path::new(path), self.config.zip_column())?,
            None => Vec::new(),
        };
        entries.extend(self.config.zips().iter().cloned());

        if entries.is_empty() {
            tracing::warn!("No zip codes given, nothing to classify");
        }

        Ok(BatchReport::build(&self.classifier, entries))
    }

    /// Renders `report` and writes it to the configured output file, if any.
    ///
    /// Returns the rendered text when it should go to stdout instead, or
    /// `None` when there is nothing to print.
    pub fn deliver(&self, report: &BatchReport) -> Result<Option<String>> {
        let rendered = report.render(self.config.output_format())?;

        match self.config.output_path() {
            Some(path) => {
                let path = Path::new(path);
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                std::fs::write(path, rendered)?;
                tracing::info!("📁 Report saved to: {}", path.display());
                Ok(None)
            }
            None if rendered.is_empty() => Ok(None),
            None => Ok(Some(rendered)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CoverageTier;
    use tempfile::TempDir;

    struct TestConfig {
        input: Option<String>,
        output: Option<String>,
        format: String,
        zips: Vec<String>,
    }

    impl ConfigProvider for TestConfig {
        fn config_path(&self) -> Option<&str> {
            None
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
            "zip"
        }
        fn zips(&self) -> &[String] {
            &self.zips
        }
    }

    #[test]
    fn test_builtin_engine_classifies_arguments() {
        let engine = CoverageEngine::new(TestConfig {
            input: None,
            output: None,
            format: "text".to_string(),
            zips: vec!["60431".to_string(), "60008".to_string(), "99999".to_string()],
        })
        .unwrap();

        let report = engine.run().unwrap();
        let tiers: Vec<CoverageTier> = report.results.iter().map(|r| r.result.tier).collect();
        assert_eq!(
            tiers,
            vec![
                CoverageTier::Serviced,
                CoverageTier::Extended,
                CoverageTier::Unserved
            ]
        );

        let stdout = engine.deliver(&report).unwrap();
        assert!(stdout.unwrap().starts_with("60431 [serviced]"));
    }

    #[test]
    fn test_empty_text_report_prints_nothing() {
        let engine = CoverageEngine::new(TestConfig {
            input: None,
            output: None,
            format: "text".to_string(),
            zips: Vec::new(),
        })
        .unwrap();

        let report = engine.run().unwrap();
        assert!(report.results.is_empty());
        assert!(engine.deliver(&report).unwrap().is_none());
    }

    #[test]
    fn test_input_file_comes_before_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("zips.txt");
        std::fs::write(&input, "60435\n\nabc\n").unwrap();

        let engine = CoverageEngine::new(TestConfig {
            input: Some(input.to_str().unwrap().to_string()),
            output: None,
            format: "text".to_string(),
            zips: vec!["60008".to_string()],
        })
        .unwrap();

        let report = engine.run().unwrap();
        let inputs: Vec<&str> = report.results.iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, vec!["60435", "abc", "60008"]);
    }

    #[test]
    fn test_deliver_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("reports").join("coverage.csv");

        let engine = CoverageEngine::new(TestConfig {
            input: None,
            output: Some(output.to_str().unwrap().to_string()),
            format: "csv".to_string(),
            zips: vec!["60431".to_string()],
        })
        .unwrap();

        let report = engine.run().unwrap();
        assert!(engine.deliver(&report).unwrap().is_none());

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("input,zip,tier,message"));
    }
}
