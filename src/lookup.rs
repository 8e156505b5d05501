use std::fmt::Formatter;

use crate::coordinates::{parse_coordinates, Coordinate, CoordinateError};
use crate::zoning::geocode::{ErfError, MockGeocoder};
use crate::zoning::insights::ZoningInsight;
use crate::zoning::models::ZoningRecord;
use crate::zoning::resolver::ZoningResolver;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates(String),
    Erf(String)
}

impl LocationQuery {
    /// Picks the query variant from the raw request fields. Coordinates take
    /// precedence when both are present.
    pub fn from_fields(
        coordinates: Option<String>,
        erf: Option<String>
    ) -> Result<LocationQuery, LookupError> {
        match (coordinates, erf) {
            (Some(coordinates), _) => Ok(LocationQuery::Coordinates(coordinates)),
            (None, Some(erf)) => Ok(LocationQuery::Erf(erf)),
            (None, None) => Err(LookupError::InvalidInput),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub location: Coordinate,
    pub erf_number: Option<String>,
    pub zoning_type: String,
    pub zoning_info: ZoningRecord,
    pub insights: Option<ZoningInsight>
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    Coordinate(CoordinateError),
    Erf(ErfError),
    InvalidInput
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            LookupError::Coordinate(inner) => write!(f, "{}", inner),
            LookupError::Erf(inner) => write!(f, "{}", inner),
            LookupError::InvalidInput => write!(f, "Invalid input data"),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<CoordinateError> for LookupError {
    fn from(error: CoordinateError) -> Self {
        LookupError::Coordinate(error)
    }
}

impl From<ErfError> for LookupError {
    fn from(error: ErfError) -> Self {
        LookupError::Erf(error)
    }
}

pub fn lookup(
    query: &LocationQuery,
    geocoder: &MockGeocoder,
    resolver: &ZoningResolver
) -> Result<LookupResult, LookupError> {
    match query {
        LocationQuery::Coordinates(text) => {
            let location = parse_coordinates(text)?;
            let zoning_type = geocoder.code_for_location(&location);
            let zoning_info = resolver.resolve_or_placeholder(&zoning_type);
            let insights = resolver.insights_for(&zoning_type).cloned();

            Ok(LookupResult { location, erf_number: None, zoning_type, zoning_info, insights })
        },
        LocationQuery::Erf(erf) => {
            let erf = erf.trim();
            let location = geocoder.location_for_erf(erf)?;
            let zoning_type = geocoder.code_for_erf(erf)?;
            let zoning_info = resolver.resolve_or_placeholder(&zoning_type);
            let insights = resolver.insights_for(&zoning_type).cloned();

            Ok(LookupResult {
                location,
                erf_number: Some(erf.to_string()),
                zoning_type,
                zoning_info,
                insights
            })
        },
    }
}
