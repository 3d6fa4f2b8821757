// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::crypto::{DecodedJwt, DigestOutput};
use crate::models::{CharClass, ColorValue, StrengthScore};
use crate::tools::{JsonAction, JsonIndent, JsonReport, TimestampInfo};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Crate version
    pub version: String,
    /// Tools served by this instance
    pub tools: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Generator requests and responses
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, 4-128 (server default when omitted)
    pub length: Option<usize>,
    /// Character classes to draw from (all four when omitted)
    pub classes: Option<Vec<CharClass>>,
    /// Drop look-alike glyphs
    pub exclude_similar: Option<bool>,
    /// Drop brackets, quotes and punctuation from symbols
    pub exclude_ambiguous: Option<bool>,
    /// Minimum number of digits
    pub min_digits: Option<usize>,
    /// Minimum number of symbols
    pub min_symbols: Option<usize>,
    /// Number of passwords to generate, 1-50
    pub count: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthScore,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated passwords with their strength
    pub passwords: Vec<GeneratedPassword>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Password to score
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    pub success: bool,
    pub strength: Option<StrengthScore>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum LoremKind {
    Words,
    Sentences,
    Paragraphs,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoremRequest {
    /// What to count
    pub kind: LoremKind,
    /// How many words, sentences or paragraphs
    pub count: usize,
    /// Open with the classic "Lorem ipsum dolor sit amet" text
    pub start_with_lorem: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TextResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Resulting text (only present on success)
    pub result: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Color requests and responses
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ColorConvertRequest {
    /// Format of `value`
    pub format: ColorFormat,
    /// Hex string such as `#3b82f6`, or comma separated components (`59,130,246`)
    pub value: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ColorResponse {
    pub success: bool,
    pub color: Option<ColorValue>,
    /// CSS `rgb(...)` string
    pub css_rgb: Option<String>,
    /// CSS `hsl(...)` string
    pub css_hsl: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ColorPreset {
    pub name: String,
    pub color: ColorValue,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ColorPresetsResponse {
    pub success: bool,
    pub presets: Vec<ColorPreset>,
    pub error: Option<String>,
}

// Tools requests and responses
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CodecDirection {
    Encode,
    Decode,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CodecRequest {
    /// Text to encode or decode
    pub input: String,
    pub direction: CodecDirection,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashRequest {
    /// Text to hash
    pub input: String,
    /// md5, sha1, sha256, sha512, sha3-256 or sha3-512; every supported digest when omitted
    pub algorithm: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashResponse {
    pub success: bool,
    pub hashes: Vec<DigestOutput>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JwtEncodeRequest {
    /// Claims object to sign
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    /// HMAC secret
    pub secret: String,
    /// HS256, HS384 or HS512 (HS256 when omitted)
    pub algorithm: Option<String>,
    /// Lifetime such as `3600`, `30m`, `2h` or `7d`
    pub expires_in: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JwtEncodeResponse {
    pub success: bool,
    pub token: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JwtDecodeRequest {
    pub token: String,
    /// Verify the signature with this secret when present
    pub secret: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct JwtDecodeResponse {
    pub success: bool,
    pub decoded: Option<DecodedJwt>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TimestampRequest {
    /// Unix time in seconds (up to 10 digits) or milliseconds
    pub timestamp: Option<String>,
    /// `YYYY-MM-DD`, used when `timestamp` is absent
    pub date: Option<String>,
    /// `HH:MM`, midnight when omitted
    pub time: Option<String>,
    /// Read `date`/`time` as UTC instead of server local time
    pub utc: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TimestampResponse {
    pub success: bool,
    pub info: Option<TimestampInfo>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DriveLinkRequest {
    /// Google Drive share URL
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JsonToolRequest {
    /// JSON document as text
    pub input: String,
    pub action: JsonAction,
    /// "2", "4" or "tab" (two spaces when omitted)
    pub indent: Option<JsonIndent>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JsonToolResponse {
    pub success: bool,
    pub report: Option<JsonReport>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BcryptHashRequest {
    pub password: String,
    /// Cost factor 4-31 (10 when omitted)
    pub salt_rounds: Option<u32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BcryptHashResponse {
    pub success: bool,
    pub hash: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BcryptVerifyRequest {
    pub password: String,
    pub hash: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BcryptVerifyResponse {
    pub success: bool,
    pub is_valid: Option<bool>,
    pub error: Option<String>,
}
