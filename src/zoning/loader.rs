use std::fmt::Formatter;
use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use log::{info, warn};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::zoning::error::LoadError;
use crate::zoning::insights::{InsightCatalog, ZoningInsight};
use crate::zoning::models::{ZoningData, ZoningRecord};

/// Every key/value pair of a JSON object in file order. Unlike a map, a
/// repeated key shows up twice instead of replacing the earlier value.
struct Entries<V>(Vec<(String, V)>);

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "a JSON object keyed by code")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, V>()? {
            entries.push(entry);
        }
        Ok(Entries(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

pub fn load_zoning_data<P: AsRef<Path>>(path: P) -> Result<ZoningData, LoadError> {
    let file = File::open(path)?;
    read_zoning_data(BufReader::new(file))
}

/// Reads a JSON object of zoning code -> record.
pub fn read_zoning_data<R: Read>(reader: R) -> Result<ZoningData, LoadError> {
    let Entries(records) = serde_json::from_reader::<_, Entries<ZoningRecord>>(reader)?;
    ZoningData::from_records(records)
}

pub fn load_insights<P: AsRef<Path>>(path: P) -> Result<InsightCatalog, LoadError> {
    let file = File::open(path)?;
    read_insights(BufReader::new(file))
}

/// Reads a JSON object of zoning family -> insight.
pub fn read_insights<R: Read>(reader: R) -> Result<InsightCatalog, LoadError> {
    let Entries(insights) = serde_json::from_reader::<_, Entries<ZoningInsight>>(reader)?;
    InsightCatalog::from_records(insights)
}

/// Loads the zoning data, falling back to an empty data set on any failure.
/// Every lookup then resolves to the placeholder record.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> ZoningData {
    let path = path.as_ref();
    match load_zoning_data(path) {
        Ok(data) => {
            info!("Loaded {} zoning codes from {}", data.len(), path.display());
            data
        },
        Err(err) => {
            warn!(
                "Could not load zoning data from {}, continuing without it. {}",
                path.display(),
                err
            );
            ZoningData::empty()
        },
    }
}

/// Same as `load_or_empty`, for the insight families. Without them responses
/// carry no `insights`.
pub fn load_insights_or_empty<P: AsRef<Path>>(path: P) -> InsightCatalog {
    let path = path.as_ref();
    match load_insights(path) {
        Ok(catalog) => {
            info!("Loaded {} zoning insight families from {}", catalog.len(), path.display());
            catalog
        },
        Err(err) => {
            warn!(
                "Could not load zoning insights from {}, continuing without them. {}",
                path.display(),
                err
            );
            InsightCatalog::empty()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "MU2": {
            "description": "Mixed Use 2",
            "permitted_uses": ["Shops", "Flats"],
            "restrictions": ["Height limit: 25m"]
        },
        "gr2-gr6": {
            "description": "General Residential",
            "permitted_uses": ["Flats"],
            "restrictions": ["Coverage: 60% max"],
            "recommended_actions": ["Check inclusionary housing policy"]
        }
    }"#;

    #[test]
    fn test_read_zoning_data() {
        let data = read_zoning_data(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);

        let mixed = data.get("MU2").unwrap();
        assert_eq!(mixed.permitted_uses, vec!["Shops", "Flats"]);
        assert!(mixed.recommended_actions.is_none());

        let residential = data.get("GR2-GR6").unwrap();
        assert_eq!(
            residential.recommended_actions,
            Some(vec!["Check inclusionary housing policy".to_string()])
        );
    }

    #[test]
    fn test_repeated_code_is_rejected() {
        let json = r#"{
            "MU2": {"description": "first", "permitted_uses": [], "restrictions": []},
            "MU2": {"description": "second", "permitted_uses": [], "restrictions": []}
        }"#;

        match read_zoning_data(json.as_bytes()) {
            Err(LoadError::DuplicateCode(code)) => assert_eq!(code, "MU2"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_json() {
        let result = read_zoning_data(r#"["MU2"]"#.as_bytes());
        assert!(matches!(result, Err(LoadError::InvalidJson(_))));

        let result = read_zoning_data(r#"{"MU2": {"description": "x"}}"#.as_bytes());
        assert!(matches!(result, Err(LoadError::InvalidJson(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_zoning_data("does/not/exist.json");
        assert!(matches!(result, Err(LoadError::IO(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_empty() {
        let data = load_or_empty("does/not/exist.json");
        assert!(data.is_empty());
        assert!(load_insights_or_empty("does/not/exist.json").is_empty());
    }

    #[test]
    fn test_bundled_data_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/static/data/zoning_data.json");
        let data = load_zoning_data(path).unwrap();
        assert!(data.get("MU2").is_some());
        assert!(data.get("GR2-GR6").is_some());
    }

    #[test]
    fn test_repeated_family_is_rejected() {
        let insight = r#"{
            "score": 73, "thesis": "t", "uplift_drivers": [], "headwinds": [],
            "recommended_development": "d", "kpis": [],
            "scoring_dimensions": {
                "rights_flexibility": 1, "accessibility": 2, "amenity_edge": 3,
                "infra_resilience": 4, "overlay_constraints": 5
            }
        }"#;
        let json = format!(r#"{{"mixed_use": {0}, "mixed_use": {0}}}"#, insight);

        match read_insights(json.as_bytes()) {
            Err(LoadError::DuplicateCode(family)) => assert_eq!(family, "mixed_use"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bundled_insights_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/static/data/zoning_insights.json");
        let catalog = load_insights(path).unwrap();

        assert_eq!(catalog.len(), 13);
        let mixed_use = catalog.insights_for("MU2").unwrap();
        assert_eq!(mixed_use.score, 73);
        assert_eq!(mixed_use.scoring_dimensions.rights_flexibility, 85);
        assert_eq!(catalog.insights_for("ZZ9").unwrap().score, 0);
    }
}
