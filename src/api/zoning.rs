use actix_web::{Error, HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::api::ErrorResponse;
use crate::zoning::insights::ZoningInsight;
use crate::zoning::models::{normalize_code, ZoningRecord};
use crate::zoning::resolver::ZoningResolver;

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoningResponse {
    pub success: bool,
    pub zoning_type: String,
    pub zoning_info: ZoningRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<ZoningInsight>
}

/// Looks a zoning code up directly, without the placeholder fallback.
pub async fn get_zoning(
    code: web::Path<String>,
    resolver: web::Data<ZoningResolver>
) -> Result<HttpResponse, Error> {
    let code = code.into_inner();

    match resolver.resolve(&code) {
        Some(record) => Ok(HttpResponse::Ok().json(ZoningResponse {
            success: true,
            zoning_type: normalize_code(&code),
            zoning_info: record.clone(),
            insights: resolver.insights_for(&code).cloned()
        })),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            format!("Unknown zoning code: {}", code.trim())
        ))),
    }
}
