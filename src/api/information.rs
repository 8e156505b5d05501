use actix_web::{Error, HttpResponse, web};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::api::ErrorResponse;
use crate::coordinates::Coordinate;
use crate::lookup::{lookup, LocationQuery, LookupResult};
use crate::zoning::geocode::MockGeocoder;
use crate::zoning::insights::ZoningInsight;
use crate::zoning::models::ZoningRecord;
use crate::zoning::resolver::ZoningResolver;

#[derive(Deserialize)]
pub struct LocationRequest {
    coordinates: Option<String>,
    erf: Option<String>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    pub success: bool,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erf_number: Option<String>,
    pub zoning_type: String,
    pub zoning_info: ZoningRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<ZoningInsight>
}

impl From<LookupResult> for LocationResponse {
    fn from(result: LookupResult) -> Self {
        LocationResponse {
            success: true,
            location: result.location,
            erf_number: result.erf_number,
            zoning_type: result.zoning_type,
            zoning_info: result.zoning_info,
            insights: result.insights
        }
    }
}

pub async fn get_information(
    request: web::Json<LocationRequest>,
    geocoder: web::Data<MockGeocoder>,
    resolver: web::Data<ZoningResolver>
) -> Result<HttpResponse, Error> {
    let request = request.into_inner();
    let result = LocationQuery::from_fields(request.coordinates, request.erf)
        .and_then(|query| lookup(&query, &geocoder, &resolver));

    match result {
        Ok(result) => {
            info!(
                "Resolved {} to zoning {}",
                result.location,
                result.zoning_type
            );
            Ok(HttpResponse::Ok().json(LocationResponse::from(result)))
        },
        Err(err) => {
            warn!("Could not look up location: {}", err);
            Ok(HttpResponse::Ok().json(ErrorResponse::new(err.to_string())))
        },
    }
}
