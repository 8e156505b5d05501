use actix_web::{error, web, HttpResponse};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::api::health::health;
use crate::api::information::get_information;
use crate::api::zoning::get_zoning;

pub mod health;
pub mod information;
pub mod zoning;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> ErrorResponse {
        ErrorResponse { success: false, error: error.into() }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/get_information", web::post().to(get_information))
        .route("/zoning/{code}", web::get().to(get_zoning));
}

/// Bodies that aren't a JSON object get the same answer as an object with
/// neither `coordinates` nor `erf`, with a 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new("Invalid input data"));
        error::InternalError::from_response(err, response).into()
    })
}
