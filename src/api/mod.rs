// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::system::health,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::check_strength,
        crate::api::handlers::generator::generate_lorem,

        // Color endpoints
        crate::api::handlers::color::convert_color,
        crate::api::handlers::color::list_presets,
        crate::api::handlers::color::random_color,

        // Tool endpoints
        crate::api::handlers::tools::base64,
        crate::api::handlers::tools::url,
        crate::api::handlers::tools::hash,
        crate::api::handlers::tools::json_tool,
        crate::api::handlers::tools::bcrypt_hash,
        crate::api::handlers::tools::bcrypt_verify,
        crate::api::handlers::tools::jwt_encode,
        crate::api::handlers::tools::jwt_decode,
        crate::api::handlers::tools::convert_timestamp,
        crate::api::handlers::tools::drive_link
    ),
    components(
        schemas(
            crate::api::types::HealthResponse,
            crate::api::types::TextResponse,

            // Generator
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::GeneratedPassword,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::api::types::LoremKind,
            crate::api::types::LoremRequest,
            crate::models::CharClass,
            crate::models::PasswordSpec,
            crate::models::StrengthLabel,
            crate::models::StrengthTier,
            crate::models::StrengthScore,

            // Color
            crate::api::types::ColorFormat,
            crate::api::types::ColorConvertRequest,
            crate::api::types::ColorResponse,
            crate::api::types::ColorPreset,
            crate::api::types::ColorPresetsResponse,
            crate::models::Rgb,
            crate::models::Hsl,
            crate::models::Hsv,
            crate::models::Cmyk,
            crate::models::ColorValue,

            // Tools
            crate::api::types::CodecDirection,
            crate::api::types::CodecRequest,
            crate::api::types::HashRequest,
            crate::api::types::HashResponse,
            crate::api::types::JsonToolRequest,
            crate::api::types::JsonToolResponse,
            crate::api::types::BcryptHashRequest,
            crate::api::types::BcryptHashResponse,
            crate::api::types::BcryptVerifyRequest,
            crate::api::types::BcryptVerifyResponse,
            crate::api::types::JwtEncodeRequest,
            crate::api::types::JwtEncodeResponse,
            crate::api::types::JwtDecodeRequest,
            crate::api::types::JwtDecodeResponse,
            crate::api::types::TimestampRequest,
            crate::api::types::TimestampResponse,
            crate::api::types::DriveLinkRequest,
            crate::crypto::DigestOutput,
            crate::crypto::DecodedJwt,
            crate::tools::TimestampInfo,
            crate::tools::JsonAction,
            crate::tools::JsonIndent,
            crate::tools::JsonReport
        )
    ),
    tags(
        (name = "Generator", description = "Password, strength and placeholder text endpoints"),
        (name = "Color", description = "Color conversion endpoints"),
        (name = "Tools", description = "Encoding, hashing, JWT and conversion utilities"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "DevTools Kit API",
        version = "0.1.0",
        description = "Password generator, color converter and developer utilities",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

// Shared by the server and the route tests
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", ApiDoc::openapi())
    )
    .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
    .service(web::scope("/api").configure(routes::configure_routes));
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let (address, port) = config.bind_address();
    log::info!("Starting DevTools Kit API server on {}:{}", address, port);
    log::info!("API docs at http://{}:{}/swagger-ui/", address, port);

    let cors_max_age = config.cors_max_age;
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(cors_max_age);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .configure(configure_app)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn routes_are_mounted_under_api() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_app),
        )
        .await;

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["tools"].as_array().unwrap().len(), handlers::system::TOOLS.len());

        let req = test::TestRequest::post()
            .uri("/api/generator/password")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["passwords"][0]["password"].as_str().unwrap().len(), 12);
    }

    #[actix_web::test]
    async fn openapi_document_is_served() {
        let app = test::init_service(App::new().configure(configure_app)).await;

        let doc: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api-docs/openapi.json").to_request(),
        )
        .await;
        assert!(doc["paths"]["/api/color/convert"].is_object());
        assert!(doc["paths"]["/api/tools/jwt/decode"].is_object());
        assert!(doc["paths"]["/api/tools/json"].is_object());
        assert!(doc["paths"]["/api/tools/bcrypt/verify"].is_object());
    }
}
