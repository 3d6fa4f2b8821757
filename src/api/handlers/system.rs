// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use crate::api::types::HealthResponse;

pub const TOOLS: [&str; 13] = [
    "password-generator",
    "password-strength",
    "lorem-ipsum",
    "color-converter",
    "base64",
    "url-encoder",
    "hash-generator",
    "json-formatter",
    "bcrypt",
    "jwt-encoder",
    "jwt-decoder",
    "timestamp-converter",
    "drive-direct-link",
];

/// Service health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        tools: TOOLS.iter().map(|t| t.to_string()).collect(),
        error: None,
    })
}
