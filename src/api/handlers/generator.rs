// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::core::config::Config;
use crate::generators::password::{self, PasswordGenerator};
use crate::generators::{LoremGenerator, LoremMode};
use crate::models::PasswordSpec;
use crate::api::types::{
    GeneratedPassword, LoremKind, LoremRequest, PasswordGenerationRequest,
    PasswordGenerationResponse, StrengthRequest, StrengthResponse, TextResponse,
};

const MAX_BATCH: usize = 50;

// Merge request fields over the configured defaults
fn build_spec(config: &Config, req: &PasswordGenerationRequest) -> PasswordSpec {
    let defaults = config.default_password_spec();
    PasswordSpec {
        length: req.length.unwrap_or(defaults.length),
        classes: match &req.classes {
            Some(classes) => classes.iter().copied().collect(),
            None => defaults.classes,
        },
        exclude_similar: req.exclude_similar.unwrap_or(defaults.exclude_similar),
        exclude_ambiguous: req.exclude_ambiguous.unwrap_or(defaults.exclude_ambiguous),
        min_digits: req.min_digits.unwrap_or(defaults.min_digits),
        min_symbols: req.min_symbols.unwrap_or(defaults.min_symbols),
    }
}

/// Generate secure passwords
///
/// Generates one or more passwords and scores each of them.
#[utoipa::path(
    post,
    path = "/api/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated passwords", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let count = generation_req.count.unwrap_or(1);
    if count == 0 || count > MAX_BATCH {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse {
            success: false,
            passwords: Vec::new(),
            error: Some(format!("Count must be between 1 and {}", MAX_BATCH)),
        });
    }

    let spec = build_spec(&config, &generation_req);
    let mut generator = PasswordGenerator::new();

    match generator.generate_batch(&spec, count) {
        Ok(passwords) => {
            log::debug!("Generated {} password(s) of length {}", count, spec.length);
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                passwords: passwords
                    .into_iter()
                    .map(|password| GeneratedPassword {
                        strength: password::score(&password),
                        password,
                    })
                    .collect(),
                error: None,
            })
        }
        Err(e) => {
            log::warn!("Rejected password options: {}", e);
            HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                passwords: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

/// Analyze password strength
///
/// Scores a password and suggests improvements.
#[utoipa::path(
    post,
    path = "/api/generator/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Password analysis result", body = StrengthResponse)
    )
)]
pub async fn check_strength(req: web::Json<StrengthRequest>) -> impl Responder {
    HttpResponse::Ok().json(StrengthResponse {
        success: true,
        strength: Some(password::score(&req.password)),
        error: None,
    })
}

/// Generate Lorem Ipsum placeholder text
#[utoipa::path(
    post,
    path = "/api/generator/lorem",
    tag = "Generator",
    request_body = LoremRequest,
    responses(
        (status = 200, description = "Generated text", body = TextResponse),
        (status = 400, description = "Count out of range", body = TextResponse)
    )
)]
pub async fn generate_lorem(req: web::Json<LoremRequest>) -> impl Responder {
    let mode = match req.kind {
        LoremKind::Words => LoremMode::Words(req.count),
        LoremKind::Sentences => LoremMode::Sentences(req.count),
        LoremKind::Paragraphs => LoremMode::Paragraphs(req.count),
    };

    match LoremGenerator::new().generate(mode, req.start_with_lorem.unwrap_or(true)) {
        Ok(text) => HttpResponse::Ok().json(TextResponse {
            success: true,
            result: Some(text),
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(TextResponse {
            success: false,
            result: None,
            error: Some(e.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn app_config() -> web::Data<Config> {
        web::Data::new(Config::default())
    }

    #[actix_web::test]
    async fn password_batch_uses_requested_options() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .route("/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/password")
            .set_json(json!({ "length": 20, "classes": ["digit"], "min_symbols": 0, "count": 3 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        let passwords = body["passwords"].as_array().unwrap();
        assert_eq!(passwords.len(), 3);
        for entry in passwords {
            let password = entry["password"].as_str().unwrap();
            assert_eq!(password.len(), 20);
            assert!(password.chars().all(|c| c.is_ascii_digit()));
            assert!(entry["strength"]["score"].is_u64());
        }
    }

    #[actix_web::test]
    async fn invalid_length_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .route("/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/password")
            .set_json(json!({ "length": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("between 4 and 128"));
    }

    #[actix_web::test]
    async fn empty_class_list_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .route("/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/password")
            .set_json(json!({ "classes": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn strength_reports_label_and_feedback() {
        let app = test::init_service(App::new().route("/strength", web::post().to(check_strength))).await;

        let req = test::TestRequest::post()
            .uri("/strength")
            .set_json(json!({ "password": "abc" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["strength"]["score"], 1);
        assert_eq!(body["strength"]["label"], "Weak");
        assert!(body["strength"]["feedback"]
            .as_array()
            .unwrap()
            .contains(&json!("Use at least 8 characters")));
    }

    #[actix_web::test]
    async fn lorem_words() {
        let app = test::init_service(App::new().route("/lorem", web::post().to(generate_lorem))).await;

        let req = test::TestRequest::post()
            .uri("/lorem")
            .set_json(json!({ "kind": "words", "count": 7 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let text = body["result"].as_str().unwrap();
        assert!(text.starts_with("Lorem ipsum"));
        assert_eq!(text.split_whitespace().count(), 7);
    }
}
