use crate::domain::model::ZipCode;
use crate::utils::error::{CoverageError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const OUTPUT_FORMATS: [&str; 4] = ["text", "json", "csv", "tsv"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CoverageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CoverageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoverageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry must already be a bare 5-digit zip. Surrounding whitespace is
/// rejected too, so a typo in a coverage file never silently widens coverage.
pub fn validate_zip_list(field_name: &str, zips: &[String]) -> Result<()> {
    for zip in zips {
        if ZipCode::parse(zip).is_none() || zip.trim() != zip {
            return Err(CoverageError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: zip.clone(),
                reason: "Expected exactly 5 ASCII digits".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    if !OUTPUT_FORMATS.contains(&format) {
        return Err(CoverageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                OUTPUT_FORMATS.join(", ")
            ),
        });
    }
    Ok(())
}
