// src/tools/encoding.rs
use base64::engine::general_purpose;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid Base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid percent-encoding: {0}")]
    InvalidPercentEncoding(String),
}

pub type Result<T> = std::result::Result<T, EncodingError>;

fn require_input(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(EncodingError::EmptyInput);
    }
    Ok(())
}

pub fn base64_encode(input: &str) -> Result<String> {
    require_input(input)?;
    Ok(general_purpose::STANDARD.encode(input.as_bytes()))
}

/// Decode standard Base64 into UTF-8 text. Surrounding whitespace is ignored.
pub fn base64_decode(input: &str) -> Result<String> {
    let trimmed = input.trim();
    require_input(trimmed)?;
    let bytes = general_purpose::STANDARD.decode(trimmed)?;
    String::from_utf8(bytes).map_err(|_| EncodingError::InvalidUtf8)
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ~`.
pub fn url_encode(input: &str) -> Result<String> {
    require_input(input)?;
    Ok(urlencoding::encode(input).into_owned())
}

pub fn url_decode(input: &str) -> Result<String> {
    require_input(input)?;
    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| EncodingError::InvalidPercentEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_handles_multibyte_text() {
        let encoded = base64_encode("héllo wörld").unwrap();
        assert_eq!(encoded, "aMOpbGxvIHfDtnJsZA==");
        assert_eq!(base64_decode(&encoded).unwrap(), "héllo wörld");
    }

    #[test]
    fn base64_rejects_garbage_and_binary() {
        assert!(matches!(base64_decode("***"), Err(EncodingError::InvalidBase64(_))));
        assert!(matches!(base64_decode("/w=="), Err(EncodingError::InvalidUtf8)));
        assert!(matches!(base64_encode(""), Err(EncodingError::EmptyInput)));
    }

    #[test]
    fn url_component_encoding() {
        assert_eq!(url_encode("a b&c=d/é").unwrap(), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(url_decode("a%20b%26c%3Dd%2F%C3%A9").unwrap(), "a b&c=d/é");
        assert_eq!(url_encode("safe-_.~").unwrap(), "safe-_.~");
    }

    #[test]
    fn url_decode_rejects_invalid_utf8() {
        assert!(matches!(url_decode("%FF%FE"), Err(EncodingError::InvalidPercentEncoding(_))));
    }
}
