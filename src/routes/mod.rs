use actix_web::web;

use crate::handlers::generate_handlers;

// Configure API routes (/api/*)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/generate", web::post().to(generate_handlers::generate_titles)),
    );
}
