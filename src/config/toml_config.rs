use crate::domain::model::{CoverageAreas, ZipCode};
use crate::utils::error::{CoverageError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageConfig {
    pub deployment: DeploymentConfig,
    pub coverage: CoverageLists,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageLists {
    #[serde(default)]
    pub service_area: Vec<String>,
    #[serde(default)]
    pub extended_area: Vec<String>,
}

impl CoverageConfig {
    /// 從 TOML 檔案載入覆蓋範圍
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CoverageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CoverageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEPLOYMENT_NAME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("deployment.name", &self.deployment.name)?;

        if self.coverage.service_area.is_empty() {
            return Err(CoverageError::MissingConfigError {
                field: "coverage.service_area".to_string(),
            });
        }

        validation::validate_zip_list("coverage.service_area", &self.coverage.service_area)?;
        validation::validate_zip_list("coverage.extended_area", &self.coverage.extended_area)?;

        Ok(())
    }

    /// 驗證後轉成分類器使用的集合
    pub fn to_areas(&self) -> Result<CoverageAreas> {
        self.validate_config()?;

        let service_area = Self::collect_zips("coverage.service_area", &self.coverage.service_area);
        let extended_area =
            Self::collect_zips("coverage.extended_area", &self.coverage.extended_area);

        Ok(CoverageAreas::new(
            self.deployment.name.clone(),
            service_area,
            extended_area,
        ))
    }

    fn collect_zips(field: &str, entries: &[String]) -> HashSet<ZipCode> {
        let zips: HashSet<ZipCode> = entries.iter().filter_map(|z| ZipCode::parse(z)).collect();
        if zips.len() < entries.len() {
            tracing::debug!(
                "{} lists {} duplicate entr(y/ies)",
                field,
                entries.len() - zips.len()
            );
        }
        zips
    }
}

impl Validate for CoverageConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_coverage_config() {
        let toml_content = r#"
[deployment]
name = "joliet-metro"
description = "Joliet and surrounding suburbs"

[coverage]
service_area = ["60431", "60435"]
extended_area = ["60008"]
"#;

        let config = CoverageConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.deployment.name, "joliet-metro");
        assert_eq!(config.coverage.service_area.len(), 2);
        assert!(config.validate().is_ok());

        let areas = config.to_areas().unwrap();
        assert!(areas.service_area.contains(&ZipCode::parse("60435").unwrap()));
        assert!(areas.extended_area.contains(&ZipCode::parse("60008").unwrap()));
    }

    #[test]
    fn test_extended_area_is_optional() {
        let toml_content = r#"
[deployment]
name = "small"

[coverage]
service_area = ["60431"]
"#;

        let areas = CoverageConfig::from_toml_str(toml_content)
            .unwrap()
            .to_areas()
            .unwrap();
        assert!(areas.extended_area.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ZIP_COVERAGE_TEST_DEPLOYMENT", "aurora-west");

        let toml_content = r#"
[deployment]
name = "${ZIP_COVERAGE_TEST_DEPLOYMENT}"

[coverage]
service_area = ["60506"]
"#;

        let config = CoverageConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.deployment.name, "aurora-west");

        std::env::remove_var("ZIP_COVERAGE_TEST_DEPLOYMENT");
    }

    #[test]
    fn test_unset_env_var_is_left_as_written() {
        let toml_content = r#"
[deployment]
name = "${ZIP_COVERAGE_SURELY_UNSET_VAR}"

[coverage]
service_area = ["60506"]
"#;

        let config = CoverageConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.deployment.name, "${ZIP_COVERAGE_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_zip_is_rejected_with_field() {
        let toml_content = r#"
[deployment]
name = "bad"

[coverage]
service_area = ["60431"]
extended_area = ["6000"]
"#;

        let config = CoverageConfig::from_toml_str(toml_content).unwrap();
        match config.validate() {
            Err(CoverageError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "coverage.extended_area");
                assert_eq!(value, "6000");
            }
            other => panic!("unexpected validation result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_service_area_is_missing() {
        let toml_content = r#"
[deployment]
name = "empty"

[coverage]
extended_area = ["60008"]
"#;

        let config = CoverageConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CoverageError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_overlap_and_duplicates_are_accepted() {
        let toml_content = r#"
[deployment]
name = "overlap"

[coverage]
service_area = ["60134", "60188", "60134"]
extended_area = ["60188", "60008"]
"#;

        let areas = CoverageConfig::from_toml_str(toml_content)
            .unwrap()
            .to_areas()
            .unwrap();
        assert_eq!(areas.service_area.len(), 2);
        assert_eq!(areas.overlap().len(), 1);
    }

    #[test]
    fn test_example_file_placeholder_only_in_values() {
        let content = include_str!("../../coverage.example.toml");

        // comments are substituted too, so placeholders may only appear in values
        for line in content.lines().filter(|l| l.contains("${")) {
            assert!(!line.trim_start().starts_with('#'), "placeholder in comment: {}", line);
        }

        let areas = CoverageConfig::from_toml_str(content)
            .unwrap()
            .to_areas()
            .unwrap();
        assert!(areas.service_area.contains(&ZipCode::parse("60431").unwrap()));
    }

    #[test]
    fn test_malformed_toml() {
        let result = CoverageConfig::from_toml_str("[deployment\nname = 1");
        assert!(matches!(
            result,
            Err(CoverageError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[deployment]
name = "file-test"

[coverage]
service_area = ["60431"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = CoverageConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.deployment.name, "file-test");
    }
}
