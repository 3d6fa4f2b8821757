// src/api/handlers/tools.rs
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::api::types::{
    BcryptHashRequest, BcryptHashResponse, BcryptVerifyRequest, BcryptVerifyResponse,
    CodecDirection, CodecRequest, DriveLinkRequest, HashRequest, HashResponse, JsonToolRequest,
    JsonToolResponse, JwtDecodeRequest, JwtDecodeResponse, JwtEncodeRequest, JwtEncodeResponse,
    TextResponse, TimestampRequest, TimestampResponse,
};
use crate::crypto::{self, CryptoError};
use crate::tools::{direct_download_link, encoding, json, timestamp};

fn text_result<E: std::fmt::Display>(result: Result<String, E>) -> HttpResponse {
    match result {
        Ok(text) => HttpResponse::Ok().json(TextResponse {
            success: true,
            result: Some(text),
            error: None,
        }),
        Err(e) => {
            log::warn!("Tool request rejected: {}", e);
            HttpResponse::BadRequest().json(TextResponse {
                success: false,
                result: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Base64 encode or decode UTF-8 text
#[utoipa::path(
    post,
    path = "/api/tools/base64",
    tag = "Tools",
    request_body = CodecRequest,
    responses(
        (status = 200, description = "Converted text", body = TextResponse),
        (status = 400, description = "Invalid input", body = TextResponse)
    )
)]
pub async fn base64(req: web::Json<CodecRequest>) -> impl Responder {
    text_result(match req.direction {
        CodecDirection::Encode => encoding::base64_encode(&req.input),
        CodecDirection::Decode => encoding::base64_decode(&req.input),
    })
}

/// Percent-encode or decode text
#[utoipa::path(
    post,
    path = "/api/tools/url",
    tag = "Tools",
    request_body = CodecRequest,
    responses(
        (status = 200, description = "Converted text", body = TextResponse),
        (status = 400, description = "Invalid input", body = TextResponse)
    )
)]
pub async fn url(req: web::Json<CodecRequest>) -> impl Responder {
    text_result(match req.direction {
        CodecDirection::Encode => encoding::url_encode(&req.input),
        CodecDirection::Decode => encoding::url_decode(&req.input),
    })
}

/// Hash text with MD5, SHA-1, SHA-2 or SHA-3
///
/// Returns every supported digest when no algorithm is given.
#[utoipa::path(
    post,
    path = "/api/tools/hash",
    tag = "Tools",
    request_body = HashRequest,
    responses(
        (status = 200, description = "Hex digests", body = HashResponse),
        (status = 400, description = "Unsupported algorithm", body = HashResponse)
    )
)]
pub async fn hash(req: web::Json<HashRequest>) -> impl Responder {
    let input = req.input.as_bytes();
    let result = match req.algorithm.as_deref() {
        Some(algorithm) => crypto::digest(algorithm, input).map(|d| vec![d]),
        None => Ok(crypto::digest_all(input)),
    };

    match result {
        Ok(hashes) => HttpResponse::Ok().json(HashResponse {
            success: true,
            hashes,
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(HashResponse {
            success: false,
            hashes: Vec::new(),
            error: Some(e.to_string()),
        }),
    }
}

/// Format, minify or validate a JSON document
#[utoipa::path(
    post,
    path = "/api/tools/json",
    tag = "Tools",
    request_body = JsonToolRequest,
    responses(
        (status = 200, description = "Processed document and sizes", body = JsonToolResponse),
        (status = 400, description = "Empty or malformed JSON", body = JsonToolResponse)
    )
)]
pub async fn json_tool(req: web::Json<JsonToolRequest>) -> impl Responder {
    match json::process(&req.input, req.action, req.indent.unwrap_or_default()) {
        Ok(report) => HttpResponse::Ok().json(JsonToolResponse {
            success: true,
            report: Some(report),
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(JsonToolResponse {
            success: false,
            report: None,
            error: Some(e.to_string()),
        }),
    }
}

// Missing input is the caller's fault, anything else from bcrypt is ours
fn bcrypt_status(error: &CryptoError) -> actix_web::http::StatusCode {
    match error {
        CryptoError::MissingInput(_) => actix_web::http::StatusCode::BAD_REQUEST,
        _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Hash a password with bcrypt
#[utoipa::path(
    post,
    path = "/api/tools/bcrypt/hash",
    tag = "Tools",
    request_body = BcryptHashRequest,
    responses(
        (status = 200, description = "Salted bcrypt hash", body = BcryptHashResponse),
        (status = 400, description = "Password missing", body = BcryptHashResponse),
        (status = 500, description = "Hashing failed", body = BcryptHashResponse)
    )
)]
pub async fn bcrypt_hash(req: web::Json<BcryptHashRequest>) -> impl Responder {
    let cost = req.salt_rounds.unwrap_or(crypto::DEFAULT_BCRYPT_COST);
    match crypto::bcrypt_hash(&req.password, cost) {
        Ok(hash) => HttpResponse::Ok().json(BcryptHashResponse {
            success: true,
            hash: Some(hash),
            error: None,
        }),
        Err(e) => {
            let status = bcrypt_status(&e);
            if status.is_server_error() {
                log::error!("bcrypt hashing failed: {}", e);
            }
            HttpResponse::build(status).json(BcryptHashResponse {
                success: false,
                hash: None,
                error: Some(match e {
                    CryptoError::MissingInput(msg) => msg.to_string(),
                    _ => "Failed to generate hash".to_string(),
                }),
            })
        }
    }
}

/// Check a password against a bcrypt hash
#[utoipa::path(
    post,
    path = "/api/tools/bcrypt/verify",
    tag = "Tools",
    request_body = BcryptVerifyRequest,
    responses(
        (status = 200, description = "Whether the password matches", body = BcryptVerifyResponse),
        (status = 400, description = "Password or hash missing", body = BcryptVerifyResponse),
        (status = 500, description = "Hash could not be checked", body = BcryptVerifyResponse)
    )
)]
pub async fn bcrypt_verify(req: web::Json<BcryptVerifyRequest>) -> impl Responder {
    match crypto::bcrypt_verify(&req.password, &req.hash) {
        Ok(is_valid) => HttpResponse::Ok().json(BcryptVerifyResponse {
            success: true,
            is_valid: Some(is_valid),
            error: None,
        }),
        Err(e) => {
            let status = bcrypt_status(&e);
            if status.is_server_error() {
                log::warn!("bcrypt verification failed: {}", e);
            }
            HttpResponse::build(status).json(BcryptVerifyResponse {
                success: false,
                is_valid: None,
                error: Some(match e {
                    CryptoError::MissingInput(msg) => msg.to_string(),
                    _ => "Failed to verify hash".to_string(),
                }),
            })
        }
    }
}

/// Sign a JWT with an HMAC secret
#[utoipa::path(
    post,
    path = "/api/tools/jwt/encode",
    tag = "Tools",
    request_body = JwtEncodeRequest,
    responses(
        (status = 200, description = "Signed token", body = JwtEncodeResponse),
        (status = 400, description = "Invalid payload, secret or algorithm", body = JwtEncodeResponse)
    )
)]
pub async fn jwt_encode(req: web::Json<JwtEncodeRequest>) -> impl Responder {
    if req.secret.is_empty() {
        return HttpResponse::BadRequest().json(JwtEncodeResponse {
            success: false,
            token: None,
            error: Some("Secret is required".to_string()),
        });
    }

    let algorithm = req.algorithm.as_deref().unwrap_or("HS256");
    match crypto::jwt_encode(&req.payload, &req.secret, algorithm, req.expires_in.as_deref()) {
        Ok(token) => HttpResponse::Ok().json(JwtEncodeResponse {
            success: true,
            token: Some(token),
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(JwtEncodeResponse {
            success: false,
            token: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Decode a JWT and verify it when a secret is given
#[utoipa::path(
    post,
    path = "/api/tools/jwt/decode",
    tag = "Tools",
    request_body = JwtDecodeRequest,
    responses(
        (status = 200, description = "Decoded header and claims", body = JwtDecodeResponse),
        (status = 400, description = "Malformed token", body = JwtDecodeResponse)
    )
)]
pub async fn jwt_decode(req: web::Json<JwtDecodeRequest>) -> impl Responder {
    let secret = req.secret.as_deref().filter(|s| !s.is_empty());
    match crypto::jwt_decode(&req.token, secret) {
        Ok(decoded) => HttpResponse::Ok().json(JwtDecodeResponse {
            success: true,
            decoded: Some(decoded),
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(JwtDecodeResponse {
            success: false,
            decoded: None,
            error: Some(format!("Invalid token: {}", e)),
        }),
    }
}

/// Convert between Unix timestamps and calendar dates
#[utoipa::path(
    post,
    path = "/api/tools/timestamp",
    tag = "Tools",
    request_body = TimestampRequest,
    responses(
        (status = 200, description = "Timestamp in every format", body = TimestampResponse),
        (status = 400, description = "Unparseable input", body = TimestampResponse)
    )
)]
pub async fn convert_timestamp(req: web::Json<TimestampRequest>) -> impl Responder {
    let now = Utc::now();
    let result = match (&req.timestamp, &req.date) {
        (Some(value), _) => timestamp::from_timestamp(value, now).map_err(|e| e.to_string()),
        (None, Some(date)) => timestamp::from_datetime(
            date,
            req.time.as_deref().unwrap_or("00:00"),
            req.utc.unwrap_or(false),
            now,
        )
        .map_err(|e| e.to_string()),
        (None, None) => Err("Either timestamp or date is required".to_string()),
    };

    match result {
        Ok(info) => HttpResponse::Ok().json(TimestampResponse {
            success: true,
            info: Some(info),
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(TimestampResponse {
            success: false,
            info: None,
            error: Some(e),
        }),
    }
}

/// Turn a Google Drive share link into a direct download link
#[utoipa::path(
    post,
    path = "/api/tools/drive-link",
    tag = "Tools",
    request_body = DriveLinkRequest,
    responses(
        (status = 200, description = "Direct download URL", body = TextResponse),
        (status = 400, description = "Not a Drive share link", body = TextResponse)
    )
)]
pub async fn drive_link(req: web::Json<DriveLinkRequest>) -> impl Responder {
    text_result(direct_download_link(&req.url))
}
