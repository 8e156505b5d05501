use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::zoning::resolver::ZoningResolver;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
    pub zoning_codes: usize,
    pub insight_families: usize
}

pub async fn health(resolver: web::Data<ZoningResolver>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        zoning_codes: resolver.data().len(),
        insight_families: resolver.insights().len()
    })
}
