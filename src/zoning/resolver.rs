use crate::zoning::insights::{InsightCatalog, ZoningInsight};
use crate::zoning::models::{normalize_code, ZoningData, ZoningRecord};

/// Resolves zoning codes against a fixed data set.
///
/// Lookup order for a normalized code:
/// 1. exact key
/// 2. range key covering the code (`GR2-GR6` covers `GR4`); when several
///    ranges cover it the narrowest wins, equal widths go to the first key in
///    lexicographic order
/// 3. longest stored key that is a prefix of the code (`GR` covers `GR2`)
pub struct ZoningResolver {
    data: ZoningData,
    insights: InsightCatalog
}

impl ZoningResolver {
    pub fn new(data: ZoningData) -> ZoningResolver {
        ZoningResolver::with_insights(data, InsightCatalog::empty())
    }

    pub fn with_insights(data: ZoningData, insights: InsightCatalog) -> ZoningResolver {
        ZoningResolver { data, insights }
    }

    pub fn data(&self) -> &ZoningData {
        &self.data
    }

    pub fn insights(&self) -> &InsightCatalog {
        &self.insights
    }

    pub fn resolve(&self, code: &str) -> Option<&ZoningRecord> {
        let code = normalize_code(code);
        if code.is_empty() {
            return None;
        }

        if let Some(record) = self.data.get(&code) {
            return Some(record);
        }

        if let Some((code_family, n)) = split_family(&code) {
            let in_range = self
                .data
                .iter()
                .filter_map(|(key, record)| parse_range(key).map(|range| (range, record)))
                .filter(|((family, from, to), _)| {
                    *family == code_family && *from <= n && n <= *to
                })
                .min_by_key(|((_, from, to), _)| to - from)
                .map(|(_, record)| record);
            if in_range.is_some() {
                return in_range;
            }
        }

        self.data
            .iter()
            .filter(|(key, _)| code.starts_with(key.as_str()))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, record)| record)
    }

    pub fn resolve_or_placeholder(&self, code: &str) -> ZoningRecord {
        self.resolve(code)
            .cloned()
            .unwrap_or_else(ZoningRecord::placeholder)
    }

    /// Insights for the family of `code`. Independent of whether the code
    /// itself resolves to a record.
    pub fn insights_for(&self, code: &str) -> Option<&ZoningInsight> {
        self.insights.insights_for(code)
    }
}

/// Splits "GR12" into ("GR", 12).
fn split_family(code: &str) -> Option<(&str, u32)> {
    let digits_at = code.find(|c: char| c.is_ascii_digit())?;
    let (family, number) = code.split_at(digits_at);
    if family.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse::<u32>().ok().map(|n| (family, n))
}

/// Splits "GR2-GR6" into ("GR", 2, 6). Both ends must share the family.
fn parse_range(key: &str) -> Option<(&str, u32, u32)> {
    let mut bounds = key.splitn(2, '-');
    let (low, high) = (bounds.next()?, bounds.next()?);
    let (family, from) = split_family(low)?;
    let (high_family, to) = split_family(high)?;
    if family != high_family {
        return None;
    }
    Some((family, from, to))
}
