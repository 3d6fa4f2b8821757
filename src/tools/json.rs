// src/tools/json.rs
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("Please enter some JSON to process")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Formatted output is not valid UTF-8")]
    InvalidUtf8,
}

pub type Result<T> = std::result::Result<T, JsonError>;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum JsonAction {
    Format,
    Validate,
    Minify,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum JsonIndent {
    #[default]
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "tab")]
    Tab,
}

impl JsonIndent {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            JsonIndent::Two => b"  ",
            JsonIndent::Four => b"    ",
            JsonIndent::Tab => b"\t",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JsonReport {
    pub is_valid: bool,
    /// Pretty or minified document; a confirmation line for `validate`
    pub output: String,
    /// Input length in characters
    pub original_size: usize,
    /// Output length in characters, absent for `validate`
    pub processed_size: Option<usize>,
}

fn pretty(value: &Value, indent: JsonIndent) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|_| JsonError::InvalidUtf8)
}

/// Parse `input` and format, minify or just validate it. Key order is kept.
pub fn process(input: &str, action: JsonAction, indent: JsonIndent) -> Result<JsonReport> {
    if input.trim().is_empty() {
        return Err(JsonError::EmptyInput);
    }

    let value: Value = serde_json::from_str(input)?;
    let original_size = input.chars().count();

    let (output, processed_size) = match action {
        JsonAction::Validate => ("✅ Valid JSON".to_string(), None),
        JsonAction::Format => {
            let text = pretty(&value, indent)?;
            let size = text.chars().count();
            (text, Some(size))
        }
        JsonAction::Minify => {
            let text = serde_json::to_string(&value)?;
            let size = text.chars().count();
            (text, Some(size))
        }
    };

    Ok(JsonReport {
        is_valid: true,
        output,
        original_size,
        processed_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{ "name": "kit", "tags": ["a", "b"], "nested": { "on": true } }"#;

    #[test]
    fn format_with_each_indent() {
        let two = process(DOC, JsonAction::Format, JsonIndent::Two).unwrap();
        assert!(two.output.starts_with("{\n  \"name\": \"kit\",\n  \"tags\": [\n    \"a\","));

        let four = process(DOC, JsonAction::Format, JsonIndent::Four).unwrap();
        assert!(four.output.contains("\n    \"nested\": {\n        \"on\": true\n    }"));

        let tab = process(DOC, JsonAction::Format, JsonIndent::Tab).unwrap();
        assert!(tab.output.contains("\n\t\"tags\": [\n\t\t\"a\""));
        assert_eq!(tab.processed_size, Some(tab.output.chars().count()));
    }

    #[test]
    fn minify_keeps_key_order() {
        let report = process(DOC, JsonAction::Minify, JsonIndent::default()).unwrap();
        assert_eq!(report.output, r#"{"name":"kit","tags":["a","b"],"nested":{"on":true}}"#);
        assert_eq!(report.original_size, DOC.len());
        assert!(report.processed_size.unwrap() < report.original_size);
    }

    #[test]
    fn validate_only_confirms() {
        let report = process("[1, 2, 3]", JsonAction::Validate, JsonIndent::Four).unwrap();
        assert!(report.is_valid);
        assert_eq!(report.output, "✅ Valid JSON");
        assert_eq!(report.processed_size, None);
    }

    #[test]
    fn malformed_and_empty_input() {
        assert!(matches!(
            process("{\"a\": }", JsonAction::Validate, JsonIndent::Two),
            Err(JsonError::Invalid(_))
        ));
        let err = process("  \n", JsonAction::Format, JsonIndent::Two).unwrap_err();
        assert_eq!(err.to_string(), "Please enter some JSON to process");
    }

    #[test]
    fn indent_names_deserialize() {
        let indent: JsonIndent = serde_json::from_str("\"tab\"").unwrap();
        assert_eq!(indent, JsonIndent::Tab);
        let indent: JsonIndent = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(indent, JsonIndent::Four);
    }
}
