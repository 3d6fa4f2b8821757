// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::system::health));

    // Generators
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::generator::check_strength))
            .route("/lorem", web::post().to(handlers::generator::generate_lorem))
    );

    // Color converter
    cfg.service(
        web::scope("/color")
            .route("/convert", web::post().to(handlers::color::convert_color))
            .route("/presets", web::get().to(handlers::color::list_presets))
            .route("/random", web::get().to(handlers::color::random_color))
    );

    // Encoding, hashing and conversion tools
    cfg.service(
        web::scope("/tools")
            .route("/base64", web::post().to(handlers::tools::base64))
            .route("/url", web::post().to(handlers::tools::url))
            .route("/hash", web::post().to(handlers::tools::hash))
            .route("/json", web::post().to(handlers::tools::json_tool))
            .route("/bcrypt/hash", web::post().to(handlers::tools::bcrypt_hash))
            .route("/bcrypt/verify", web::post().to(handlers::tools::bcrypt_verify))
            .route("/jwt/encode", web::post().to(handlers::tools::jwt_encode))
            .route("/jwt/decode", web::post().to(handlers::tools::jwt_decode))
            .route("/timestamp", web::post().to(handlers::tools::convert_timestamp))
            .route("/drive-link", web::post().to(handlers::tools::drive_link))
    );
}
