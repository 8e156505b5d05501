use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use env_logger::Env;
use log::{info, warn};

use crate::config::init_config;
use crate::zoning::geocode::MockGeocoder;
use crate::zoning::loader::{load_insights_or_empty, load_or_empty};
use crate::zoning::resolver::ZoningResolver;

mod api;
mod config;
mod coordinates;
mod lookup;
mod zoning;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = init_config()?;

    let zoning_data = load_or_empty(&config.zoning_data_path);
    if zoning_data.is_empty() {
        warn!("No zoning data available, every lookup will return the placeholder record");
    }

    let insights = load_insights_or_empty(&config.insights_path);
    if insights.is_empty() {
        warn!("No zoning insights available, responses will not include them");
    }

    let resolver = web::Data::new(ZoningResolver::with_insights(zoning_data, insights));
    let geocoder = web::Data::new(MockGeocoder::new());

    info!("Listening on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(resolver.clone())
            .app_data(geocoder.clone())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
