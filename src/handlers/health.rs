use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    status: String,
    message: String,
}

pub async fn health_check() -> impl Responder {
    // Public health endpoint - only reports that the proxy is up
    let response = HealthResponse {
        status: "OK".to_string(),
        message: "后端代理运行中".to_string(),
    };

    HttpResponse::Ok().json(response)
}
