use crate::core::classifier::ZipCoverageClassifier;
use crate::domain::model::{ClassificationResult, CoverageTier};
use crate::utils::error::{CoverageError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub input: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub invalid: usize,
    pub serviced: usize,
    pub extended: usize,
    pub unserved: usize,
}

impl TierSummary {
    pub fn record(&mut self, tier: CoverageTier) {
        match tier {
            CoverageTier::Invalid => self.invalid += 1,
            CoverageTier::Serviced => self.serviced += 1,
            CoverageTier::Extended => self.extended += 1,
            CoverageTier::Unserved => self.unserved += 1,
        }
    }

    pub fn count(&self, tier: CoverageTier) -> usize {
        match tier {
            CoverageTier::Invalid => self.invalid,
            CoverageTier::Serviced => self.serviced,
            CoverageTier::Extended => self.extended,
            CoverageTier::Unserved => self.unserved,
        }
    }

    pub fn total(&self) -> usize {
        self.invalid + self.serviced + self.extended + self.unserved
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub deployment: String,
    pub generated_at: DateTime<Utc>,
    pub summary: TierSummary,
    pub results: Vec<ReportRow>,
}

impl BatchReport {
    pub fn build<I, S>(classifier: &ZipCoverageClassifier, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut summary = TierSummary::default();
        let results: Vec<ReportRow> = inputs
            .into_iter()
            .map(|raw| {
                let input: String = raw.into();
                let result = classifier.classify(&input);
                summary.record(result.tier);
                ReportRow { input, result }
            })
            .collect();

        tracing::info!(
            "📊 Classified {} entries: {} serviced, {} extended, {} unserved, {} invalid",
            summary.total(),
            summary.serviced,
            summary.extended,
            summary.unserved,
            summary.invalid
        );

        Self {
            deployment: classifier.deployment().to_string(),
            generated_at: Utc::now(),
            summary,
            results,
        }
    }

    pub fn render(&self, format: &str) -> Result<String> {
        match format {
            "json" => self.to_json(),
            "csv" => self.to_delimited(b','),
            "tsv" => self.to_delimited(b'\t'),
            "text" => Ok(self.to_text()),
            other => Err(CoverageError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported output format".to_string(),
            }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_delimited(&self, delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        writer.write_record(["input", "zip", "tier", "message"])?;
        for row in &self.results {
            let zip = row.result.zip.as_ref().map(|z| z.as_str()).unwrap_or("");
            writer.write_record([
                row.input.as_str(),
                zip,
                row.result.tier.as_str(),
                row.result.message,
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CoverageError::IoError(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// One line per entry, for terminals.
    pub fn to_text(&self) -> String {
        self.results
            .iter()
            .map(|row| {
                let label = row
                    .result
                    .zip
                    .as_ref()
                    .map(|z| z.to_string())
                    .unwrap_or_else(|| format!("{:?}", row.input));
                format!("{} [{}] {}", label, row.result.tier, row.result.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 讀取批次輸入：`.csv` 依欄位讀取，其他格式一行一筆
pub fn read_entries(path: &Path, zip_column: &str) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let entries = if is_csv {
        read_csv_entries(file, zip_column)?
    } else {
        read_line_entries(BufReader::new(file))?
    };

    tracing::debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

pub fn read_csv_entries<R: Read>(reader: R, zip_column: &str) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h.trim() == zip_column)
        .ok_or_else(|| CoverageError::InputError {
            message: format!(
                "column '{}' not found, available columns: {}",
                zip_column,
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        })?;

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        entries.push(record.get(column).unwrap_or("").to_string());
    }
    Ok(entries)
}

pub fn read_line_entries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => CoverageError::InputError {
                message: format!("line {}: not valid UTF-8", index + 1),
            },
            _ => CoverageError::IoError(e),
        })?;
        if !line.trim().is_empty() {
            entries.push(line);
        }
    }
    Ok(entries)
}
