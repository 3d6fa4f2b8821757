// src/crypto.rs
use chrono::Utc;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    MissingInput(&'static str),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Invalid expiry '{0}' (use seconds or a number with s, m, h or d)")]
    InvalidExpiry(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

pub const DIGEST_ALGORITHMS: [&str; 6] = ["md5", "sha1", "sha256", "sha512", "sha3-256", "sha3-512"];

pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DigestOutput {
    /// Display name (e.g. "SHA-256", "SHA3-512")
    pub algorithm: String,
    /// Lowercase hex digest
    pub hash: String,
}

/// Hash `input` and return the lowercase hex digest.
///
/// Names are matched case-insensitively with `-` and `_` ignored, so
/// `SHA-256`, `sha256` and `sha_256` are the same algorithm.
pub fn digest(algorithm: &str, input: &[u8]) -> Result<DigestOutput> {
    let normalized: String = algorithm
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let (label, hash) = match normalized.as_str() {
        "md5" => ("MD5", hex::encode(Md5::digest(input))),
        "sha1" => ("SHA-1", hex::encode(Sha1::digest(input))),
        "sha256" => ("SHA-256", hex::encode(Sha256::digest(input))),
        "sha512" => ("SHA-512", hex::encode(Sha512::digest(input))),
        "sha3256" => ("SHA3-256", hex::encode(Sha3_256::digest(input))),
        "sha3512" => ("SHA3-512", hex::encode(Sha3_512::digest(input))),
        _ => return Err(CryptoError::UnsupportedAlgorithm(algorithm.to_string())),
    };

    Ok(DigestOutput {
        algorithm: label.to_string(),
        hash,
    })
}

pub fn digest_all(input: &[u8]) -> Vec<DigestOutput> {
    DIGEST_ALGORITHMS
        .iter()
        .filter_map(|algorithm| digest(algorithm, input).ok())
        .collect()
}

/// Salt and hash a password with bcrypt. `cost` must be 4-31.
pub fn bcrypt_hash(password: &str, cost: u32) -> Result<String> {
    if password.is_empty() {
        return Err(CryptoError::MissingInput("Password is required"));
    }
    Ok(bcrypt::hash(password, cost)?)
}

pub fn bcrypt_verify(password: &str, hash: &str) -> Result<bool> {
    if password.is_empty() || hash.trim().is_empty() {
        return Err(CryptoError::MissingInput("Both password and hash are required"));
    }
    Ok(bcrypt::verify(password, hash.trim())?)
}

fn hmac_algorithm(name: &str) -> Result<Algorithm> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(CryptoError::UnsupportedAlgorithm(name.to_string())),
    }
}

/// Parse an expiry like `3600`, `30s`, `15m`, `2h` or `7d` into seconds.
pub fn parse_expires_in(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let invalid = || CryptoError::InvalidExpiry(input.to_string());

    let (number, multiplier) = match trimmed.chars().last() {
        Some('s') => (&trimmed[..trimmed.len() - 1], 1),
        Some('m') => (&trimmed[..trimmed.len() - 1], 60),
        Some('h') => (&trimmed[..trimmed.len() - 1], 3_600),
        Some('d') => (&trimmed[..trimmed.len() - 1], 86_400),
        Some(_) => (trimmed, 1),
        None => return Err(invalid()),
    };

    let value: i64 = number.trim().parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }
    value.checked_mul(multiplier).ok_or_else(invalid)
}

/// Sign a JSON object payload with an HMAC secret.
///
/// `iat` is always set to the current time; `exp` is added when an expiry is
/// given.
pub fn jwt_encode(payload: &Value, secret: &str, algorithm: &str, expires_in: Option<&str>) -> Result<String> {
    let algorithm = hmac_algorithm(algorithm)?;
    let mut claims: Map<String, Value> = payload
        .as_object()
        .cloned()
        .ok_or_else(|| CryptoError::InvalidPayload("payload must be a JSON object".to_string()))?;

    let now = Utc::now().timestamp();
    claims.insert("iat".to_string(), Value::from(now));

    if let Some(expires_in) = expires_in.filter(|e| !e.trim().is_empty()) {
        let seconds = parse_expires_in(expires_in)?;
        claims.insert("exp".to_string(), Value::from(now + seconds));
    }

    let token = encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DecodedJwt {
    #[schema(value_type = Object)]
    pub header: Value,
    #[schema(value_type = Object)]
    pub payload: Value,
    /// True only when a secret was supplied and the signature checked out
    pub verified: bool,
    pub verification_error: Option<String>,
}

/// Decode a token, verifying it when a secret is supplied.
pub fn jwt_decode(token: &str, secret: Option<&str>) -> Result<DecodedJwt> {
    let token = token.trim();
    let header = decode_header(token)?;

    let mut unverified = Validation::new(header.alg);
    unverified.insecure_disable_signature_validation();
    unverified.validate_exp = false;
    unverified.validate_aud = false;
    unverified.required_spec_claims.clear();
    let payload = decode::<Value>(token, &DecodingKey::from_secret(&[]), &unverified)?.claims;

    let (verified, verification_error) = match secret.filter(|s| !s.is_empty()) {
        Some(secret) => {
            let mut validation = Validation::new(header.alg);
            validation.validate_aud = false;
            validation.required_spec_claims.clear();
            match decode::<Value>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation) {
                Ok(_) => (true, None),
                Err(e) => {
                    log::debug!("JWT verification failed: {}", e);
                    (false, Some(verification_message(&e)))
                }
            }
        }
        None => (false, None),
    };

    Ok(DecodedJwt {
        header: serde_json::to_value(&header)
            .map_err(|e| CryptoError::InvalidPayload(e.to_string()))?,
        payload,
        verified,
        verification_error,
    })
}

fn verification_message(error: &jsonwebtoken::errors::Error) -> String {
    use jsonwebtoken::errors::ErrorKind;
    match error.kind() {
        ErrorKind::InvalidSignature => "Invalid signature".to_string(),
        ErrorKind::ExpiredSignature => "Token expired".to_string(),
        ErrorKind::ImmatureSignature => "Token not yet valid".to_string(),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sha256_of_known_input() {
        let out = digest("SHA-256", b"hello").unwrap();
        assert_eq!(out.algorithm, "SHA-256");
        assert_eq!(out.hash, "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
    }

    #[test]
    fn known_answers_for_abc() {
        let cases = [
            ("md5", "900150983cd24fb0d6963f7d28e17f72"),
            ("sha1", "a9993e364706816aba3e25717850c26c9cd0d89d"),
            ("sha256", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
            (
                "sha512",
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
            ("sha3-256", "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
            (
                "sha3-512",
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
            ),
        ];
        for (algorithm, expected) in cases {
            assert_eq!(digest(algorithm, b"abc").unwrap().hash, expected, "{}", algorithm);
        }
    }

    #[test]
    fn algorithm_names_are_forgiving() {
        assert_eq!(digest("SHA3_256", b"").unwrap().algorithm, "SHA3-256");
        assert_eq!(digest("SHA-1", b"").unwrap().algorithm, "SHA-1");
        assert!(matches!(digest("whirlpool", b"x"), Err(CryptoError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn digest_all_covers_every_algorithm() {
        let all = digest_all(b"abc");
        assert_eq!(all.len(), DIGEST_ALGORITHMS.len());
        assert_eq!(all[0].algorithm, "MD5");
        assert_eq!(all[5].algorithm, "SHA3-512");
    }

    #[test]
    fn bcrypt_round_trip() {
        let hash = bcrypt_hash("correct horse", 4).unwrap();
        assert!(hash.starts_with("$2b$04$"));
        assert!(bcrypt_verify("correct horse", &hash).unwrap());
        assert!(!bcrypt_verify("battery staple", &hash).unwrap());
    }

    #[test]
    fn bcrypt_rejects_missing_input_and_bad_cost() {
        assert!(matches!(bcrypt_hash("", 10), Err(CryptoError::MissingInput(_))));
        assert!(matches!(bcrypt_verify("pw", " "), Err(CryptoError::MissingInput(_))));
        assert!(matches!(bcrypt_hash("pw", 3), Err(CryptoError::Bcrypt(_))));
        assert!(bcrypt_verify("pw", "not-a-hash").is_err());
    }

    #[test]
    fn expiry_parsing() {
        assert_eq!(parse_expires_in("3600").unwrap(), 3600);
        assert_eq!(parse_expires_in("15m").unwrap(), 900);
        assert_eq!(parse_expires_in("2h").unwrap(), 7200);
        assert_eq!(parse_expires_in("7d").unwrap(), 604_800);
        assert!(parse_expires_in("soon").is_err());
        assert!(parse_expires_in("-5").is_err());
        assert!(parse_expires_in("").is_err());
    }

    #[test]
    fn encode_then_verify() {
        let token = jwt_encode(&json!({"sub": "42", "name": "Ada"}), "s3cret", "HS256", Some("1h")).unwrap();

        let decoded = jwt_decode(&token, Some("s3cret")).unwrap();
        assert!(decoded.verified);
        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.payload["name"], "Ada");
        assert!(decoded.payload["exp"].as_i64().unwrap() > decoded.payload["iat"].as_i64().unwrap());
    }

    #[test]
    fn wrong_secret_reports_invalid_signature() {
        let token = jwt_encode(&json!({"sub": "42"}), "right", "HS512", None).unwrap();

        let decoded = jwt_decode(&token, Some("wrong")).unwrap();
        assert!(!decoded.verified);
        assert_eq!(decoded.verification_error.as_deref(), Some("Invalid signature"));
        assert_eq!(decoded.payload["sub"], "42");
    }

    #[test]
    fn decode_without_secret_is_unverified() {
        let token = jwt_encode(&json!({"role": "admin"}), "k", "HS384", None).unwrap();
        let decoded = jwt_decode(&token, None).unwrap();
        assert!(!decoded.verified);
        assert!(decoded.verification_error.is_none());
    }

    #[test]
    fn non_object_payload_and_rsa_are_rejected() {
        assert!(matches!(jwt_encode(&json!([1, 2]), "k", "HS256", None), Err(CryptoError::InvalidPayload(_))));
        assert!(matches!(jwt_encode(&json!({}), "k", "RS256", None), Err(CryptoError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn garbage_token_fails_to_decode() {
        assert!(jwt_decode("not.a.jwt", None).is_err());
    }
}
