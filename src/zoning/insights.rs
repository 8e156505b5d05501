use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::zoning::error::LoadError;

/// Family used for codes that don't belong to any known family.
pub const UNKNOWN_FAMILY: &str = "null";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub factor: String,
    pub impact: String
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDimensions {
    pub rights_flexibility: u8,
    pub accessibility: u8,
    pub amenity_edge: u8,
    pub infra_resilience: u8,
    pub overlay_constraints: u8
}

/// Investment outlook for a zoning family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoningInsight {
    pub score: u8,
    pub thesis: String,
    pub uplift_drivers: Vec<Factor>,
    pub headwinds: Vec<Factor>,
    pub recommended_development: String,
    pub kpis: Vec<String>,
    pub scoring_dimensions: ScoringDimensions
}

/// Maps a zoning code (or a spelled-out zone name) to its family,
/// e.g. "GR4" and "group housing" both belong to "general_residential".
pub fn family_for_code(code: &str) -> &'static str {
    match code.trim().to_lowercase().as_str() {
        "ag" | "agricultural" => "agricultural",
        "co1" | "co2" | "community" => "community",
        "gb1" | "gb2" | "gb3" | "gb4" | "gb5" | "gb6" | "gb7"
        | "general business" => "general_business",
        "gi1" | "gi2" | "general industrial" => "general_industrial",
        "gr1" | "gr2" | "gr3" | "gr4" | "gr5" | "gr6"
        | "group housing" | "general residential" => "general_residential",
        "lu" | "limited use" => "limited_use",
        "lb" | "lb1" | "lb2" | "local business" => "local_business",
        "mu1" | "mu2" | "mu3" | "mixed use" => "mixed_use",
        "os1" | "os2" | "os3" | "open space" => "open_space",
        "sr1" | "sr2" | "single residential" => "single_residential",
        "tr1" | "tr2" | "tr3" | "transport" => "transport",
        "ut" | "utility" => "utility",
        _ => UNKNOWN_FAMILY,
    }
}

/// Insights keyed by family name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightCatalog {
    families: BTreeMap<String, ZoningInsight>
}

impl InsightCatalog {
    pub fn empty() -> InsightCatalog {
        InsightCatalog::default()
    }

    pub fn from_records<I>(records: I) -> Result<InsightCatalog, LoadError>
    where
        I: IntoIterator<Item = (String, ZoningInsight)>
    {
        let mut families = BTreeMap::new();
        for (family, insight) in records {
            let key = family.trim().to_lowercase();
            if key.is_empty() {
                return Err(LoadError::InvalidCode(family));
            }
            if families.insert(key.clone(), insight).is_some() {
                return Err(LoadError::DuplicateCode(key));
            }
        }
        Ok(InsightCatalog { families })
    }

    /// Insights for the family of `code`, or the catch-all `null` family when
    /// the code is unknown or its family has no entry.
    pub fn insights_for(&self, code: &str) -> Option<&ZoningInsight> {
        self.families
            .get(family_for_code(code))
            .or_else(|| self.families.get(UNKNOWN_FAMILY))
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
