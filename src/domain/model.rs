use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

// `\d` would also accept non-ASCII digits
static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("zip pattern is a valid regex"));

/// A syntactically valid US zip code: exactly five ASCII digits.
///
/// Existence is not checked; `00000` is a valid `ZipCode`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    /// Trims `input` and accepts it only if exactly five ASCII digits remain.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if ZIP_PATTERN.is_match(trimmed) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageTier {
    Invalid,
    Serviced,
    Extended,
    Unserved,
}

impl CoverageTier {
    pub const ALL: [CoverageTier; 4] = [
        CoverageTier::Invalid,
        CoverageTier::Serviced,
        CoverageTier::Extended,
        CoverageTier::Unserved,
    ];

    pub fn message(self) -> &'static str {
        match self {
            CoverageTier::Invalid => "Please enter a valid 5-digit zip code.",
            CoverageTier::Serviced => "Yes! We service your area. Call or text us anytime.",
            CoverageTier::Extended => "We may be able to reach you. Give us a call to confirm!",
            CoverageTier::Unserved => {
                "We don't typically service that area, but call us anyway—we might be able to help."
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageTier::Invalid => "invalid",
            CoverageTier::Serviced => "serviced",
            CoverageTier::Extended => "extended",
            CoverageTier::Unserved => "unserved",
        }
    }
}

impl fmt::Display for CoverageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one lookup. `zip` is `None` exactly when the tier is `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub tier: CoverageTier,
    pub zip: Option<ZipCode>,
    pub message: &'static str,
}

impl ClassificationResult {
    pub fn invalid() -> Self {
        Self {
            tier: CoverageTier::Invalid,
            zip: None,
            message: CoverageTier::Invalid.message(),
        }
    }

    pub fn for_zip(zip: ZipCode, tier: CoverageTier) -> Self {
        Self {
            tier,
            zip: Some(zip),
            message: tier.message(),
        }
    }
}

/// Service and extended zip sets for one deployment. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct CoverageAreas {
    pub deployment: String,
    pub service_area: HashSet<ZipCode>,
    pub extended_area: HashSet<ZipCode>,
}

impl CoverageAreas {
    pub fn new(
        deployment: impl Into<String>,
        service_area: HashSet<ZipCode>,
        extended_area: HashSet<ZipCode>,
    ) -> Self {
        Self {
            deployment: deployment.into(),
            service_area,
            extended_area,
        }
    }

    /// Zips listed in both sets. They classify as serviced.
    pub fn overlap(&self) -> Vec<&ZipCode> {
        let mut shared: Vec<&ZipCode> = self
            .service_area
            .intersection(&self.extended_area)
            .collect();
        shared.sort();
        shared
    }
}
