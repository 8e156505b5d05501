use std::collections::HashMap;
use std::fmt::Formatter;

use xxhash_rust::xxh32::xxh32;

use crate::coordinates::Coordinate;

/// Codes handed out by the mock geocoder.
pub const MOCK_ZONING_CODES: [&str; 12] = [
    "SR1", "SR2", "GR2", "GR4", "MU1", "MU2", "GB2", "GB5", "GI1", "LB1", "OS2", "CO1",
];

/// ERF numbers whose zoning is pinned instead of computed. 4028 is the
/// reference parcel used in demos and always maps to GR2. Keys must be valid
/// ERF numbers, since reserved parcels still get a mock display position.
pub const RESERVED_ERFS: [(&str, &str); 1] = [("4028", "GR2")];

const LOCATION_HASH_SEED: u32 = 0;

#[derive(Debug, Clone, PartialEq)]
pub enum ErfError {
    NotNumeric(String)
}

impl std::fmt::Display for ErfError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ErfError::NotNumeric(_) => write!(
                f,
                "Invalid ERF number. Please enter a numeric ERF number."
            ),
        }
    }
}

impl std::error::Error for ErfError {}

/// Stand-in for a GIS lookup: derives zoning codes and display coordinates
/// from the request input without any real spatial data.
#[derive(Debug, Clone)]
pub struct MockGeocoder {
    codes: Vec<String>,
    reserved: HashMap<String, String>
}

impl Default for MockGeocoder {
    fn default() -> Self {
        MockGeocoder::new()
    }
}

impl MockGeocoder {
    pub fn new() -> MockGeocoder {
        MockGeocoder {
            codes: mock_codes(),
            reserved: RESERVED_ERFS
                .iter()
                .map(|(erf, code)| (erf.to_string(), code.to_string()))
                .collect()
        }
    }

    /// Replaces the reserved table. Every key must be an ERF number.
    pub fn with_reserved(reserved: HashMap<String, String>) -> Result<MockGeocoder, ErfError> {
        for erf in reserved.keys() {
            ErfNumber::parse(erf)?;
        }
        Ok(MockGeocoder { codes: mock_codes(), reserved })
    }

    /// Hashes the textual form of the coordinate with xxh32 (seed 0), so the
    /// same point always gets the same code, across restarts too.
    pub fn code_for_location(&self, coordinate: &Coordinate) -> String {
        let key = format!("{},{}", coordinate.lat, coordinate.lng);
        let hash = xxh32(key.as_bytes(), LOCATION_HASH_SEED) as usize;
        self.codes[hash % self.codes.len()].clone()
    }

    pub fn code_for_erf(&self, erf: &str) -> Result<String, ErfError> {
        let erf = erf.trim();
        if let Some(code) = self.reserved.get(erf) {
            return Ok(code.clone());
        }
        let number = ErfNumber::parse(erf)?;
        Ok(self.codes[number.rem(self.codes.len() as u64) as usize].clone())
    }

    /// Mock display position for an ERF, somewhere in [0, 1) on both axes.
    pub fn location_for_erf(&self, erf: &str) -> Result<Coordinate, ErfError> {
        let number = ErfNumber::parse(erf.trim())?;
        Ok(Coordinate {
            lat: number.rem(100) as f64 / 100.0,
            lng: number.rem(50) as f64 / 50.0
        })
    }
}

fn mock_codes() -> Vec<String> {
    MOCK_ZONING_CODES.iter().map(|c| c.to_string()).collect()
}

/// ERF number checked to be plain ASCII digits. Kept as text: parcel keys
/// can be longer than any integer type, and only remainders are needed.
struct ErfNumber<'a>(&'a str);

impl<'a> ErfNumber<'a> {
    fn parse(erf: &'a str) -> Result<ErfNumber<'a>, ErfError> {
        if erf.is_empty() || !erf.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErfError::NotNumeric(erf.to_string()));
        }
        Ok(ErfNumber(erf))
    }

    fn rem(&self, modulus: u64) -> u64 {
        self.0
            .bytes()
            .fold(0, |acc, digit| (acc * 10 + u64::from(digit - b'0')) % modulus)
    }
}
