use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::net::TcpListener;

mod clients;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

use crate::clients::DashScopeClient;
use crate::config::AppSettings;
use crate::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load application settings
    let app_settings = match AppSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            log::error!("Cannot start server without valid settings");
            std::process::exit(1);
        }
    };

    // The API key is checked per request, so startup proceeds without it
    if app_settings.api_keys.dashscope_api_key.is_none() {
        log::warn!("DASHSCOPE_API_KEY is not set; generation requests will fail until it is configured");
    }

    // Get server host and port from settings
    let host = &app_settings.server.host;
    let port = app_settings.server.port;

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Health check: GET /health");
    log::info!("Generation endpoint: POST /api/generate");

    let server_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(server_addr)?;

    HttpServer::new(move || {
        let app_settings = app_settings.clone();

        // Initialize the generation client
        let dashscope_client = match DashScopeClient::new(&app_settings) {
            Ok(client) => web::Data::new(client),
            Err(e) => {
                log::error!("Failed to initialize DashScope client: {}", e);
                log::error!("Cannot start server without a working generation client");
                std::process::exit(1);
            }
        };

        // Configure CORS using actix-cors
        let mut cors = Cors::default().supports_credentials();

        // Add allowed origins based on configuration
        if app_settings.server.cors_origins.contains(&"*".to_string()) {
            cors = cors.allow_any_origin();
        } else {
            for origin in &app_settings.server.cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        // Common CORS settings for all origins
        cors = cors.allow_any_method().allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(app_settings.clone()))
            .app_data(dashscope_client)
            // Register health check endpoint
            .service(web::resource("/health").route(web::get().to(handlers::health::health_check)))
            // Generation API routes
            .configure(configure_routes)
    })
    .listen(listener)?
    .run()
    .await
}
