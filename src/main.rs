mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::CONFIG;
use crate::repositories::{
    MongoNeighborhoodRepository, MongoPropertyRepository, NeighborhoodRepository,
};
use crate::services::{NeighborhoodService, PropertyService};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| startup_error("Failed to connect to MongoDB", e))?;

    let db = client.database(&CONFIG.database_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| startup_error("Failed to ping MongoDB", e))?;
    info!("Connected to MongoDB successfully!");

    // Initialize repositories and services
    let property_repository = Arc::new(MongoPropertyRepository::new(&db));
    let neighborhood_repository = Arc::new(MongoNeighborhoodRepository::new(&db));

    neighborhood_repository
        .create_indexes()
        .await
        .map_err(|e| startup_error("Failed to create indexes", e))?;

    let neighborhood_service = NeighborhoodService::new(neighborhood_repository.clone());
    match &CONFIG.neighborhoods_file {
        Some(path) => {
            neighborhood_service
                .seed_from_file(path)
                .await
                .map_err(|e| startup_error("Failed to seed neighborhoods", e))?;
        }
        None => info!("NEIGHBORHOODS_FILE not set, skipping neighborhood seed"),
    }

    let property_service = web::Data::new(PropertyService::new(
        property_repository,
        neighborhood_repository,
    ));
    let neighborhood_service = web::Data::new(neighborhood_service);

    // Start HTTP server
    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(property_service.clone())
            .app_data(neighborhood_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
