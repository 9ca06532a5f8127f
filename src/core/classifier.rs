use crate::domain::model::{ClassificationResult, CoverageAreas, CoverageTier, ZipCode};
use crate::domain::ports::CoverageSource;
use crate::utils::error::Result;
use std::collections::HashSet;

/// Classifies `input` against explicitly supplied coverage sets.
///
/// Service membership is checked first, so a zip present in both sets is
/// `Serviced`. Never fails: malformed input becomes `Invalid`.
pub fn classify_with(
    input: &str,
    service_area: &HashSet<ZipCode>,
    extended_area: &HashSet<ZipCode>,
) -> ClassificationResult {
    let Some(zip) = ZipCode::parse(input) else {
        return ClassificationResult::invalid();
    };

    let tier = if service_area.contains(&zip) {
        CoverageTier::Serviced
    } else if extended_area.contains(&zip) {
        CoverageTier::Extended
    } else {
        CoverageTier::Unserved
    };

    ClassificationResult::for_zip(zip, tier)
}

#[derive(Debug, Clone)]
pub struct ZipCoverageClassifier {
    areas: CoverageAreas,
}

impl ZipCoverageClassifier {
    pub fn new(areas: CoverageAreas) -> Self {
        let overlap = areas.overlap();
        if !overlap.is_empty() {
            tracing::warn!(
                "⚠️ {} zip(s) listed in both service and extended areas of '{}', service wins: {:?}",
                overlap.len(),
                areas.deployment,
                overlap
            );
        }

        tracing::debug!(
            "Classifier ready for '{}': {} serviced, {} extended",
            areas.deployment,
            areas.service_area.len(),
            areas.extended_area.len()
        );

        Self { areas }
    }

    pub fn from_source(source: &dyn CoverageSource) -> Result<Self> {
        tracing::info!("📁 Loading coverage from {}", source.describe());
        let areas = source.load()?;
        Ok(Self::new(areas))
    }

    pub fn classify(&self, input: &str) -> ClassificationResult {
        let result = classify_with(input, &self.areas.service_area, &self.areas.extended_area);
        tracing::debug!("classified {:?} as {}", input, result.tier);
        result
    }

    pub fn areas(&self) -> &CoverageAreas {
        &self.areas
    }

    pub fn deployment(&self) -> &str {
        &self.areas.deployment
    }
}
