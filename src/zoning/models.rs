use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::zoning::error::LoadError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoningRecord {
    pub description: String,
    pub permitted_uses: Vec<String>,
    pub restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_actions: Option<Vec<String>>
}

impl ZoningRecord {
    /// Returned whenever a zoning code can't be resolved.
    pub fn placeholder() -> ZoningRecord {
        ZoningRecord {
            description: "Zoning information not available".to_string(),
            permitted_uses: vec!["Information not available".to_string()],
            restrictions: vec!["Information not available".to_string()],
            recommended_actions: Some(vec![
                "Verify zoning with the local municipality before making any decisions"
                    .to_string()
            ])
        }
    }
}

/// Immutable set of zoning records keyed by normalized zoning code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoningData {
    records: BTreeMap<String, ZoningRecord>
}

impl ZoningData {
    pub fn empty() -> ZoningData {
        ZoningData::default()
    }

    /// Builds the data set, normalizing every code. Two codes that normalize
    /// to the same key (e.g. "gr2" and "GR2 ") are rejected.
    pub fn from_records<I>(records: I) -> Result<ZoningData, LoadError>
    where
        I: IntoIterator<Item = (String, ZoningRecord)>
    {
        let mut normalized = BTreeMap::new();
        for (code, record) in records {
            let key = normalize_code(&code);
            if key.is_empty() {
                return Err(LoadError::InvalidCode(code));
            }
            if normalized.insert(key.clone(), record).is_some() {
                return Err(LoadError::DuplicateCode(key));
            }
        }
        Ok(ZoningData { records: normalized })
    }

    pub fn get(&self, code: &str) -> Option<&ZoningRecord> {
        self.records.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ZoningRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
