// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Password generation

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];
}

/// Options for a single password generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordSpec {
    /// Total password length (4-128)
    pub length: usize,
    /// Active character classes
    #[schema(value_type = Vec<CharClass>)]
    pub classes: BTreeSet<CharClass>,
    /// Drop look-alike glyphs such as `l`, `1` and `O`
    pub exclude_similar: bool,
    /// Drop brackets, quotes and punctuation from the symbol alphabet
    pub exclude_ambiguous: bool,
    /// Minimum number of digits (only used when digits are active)
    pub min_digits: usize,
    /// Minimum number of symbols (only used when symbols are active)
    pub min_symbols: usize,
}

impl PasswordSpec {
    pub fn has(&self, class: CharClass) -> bool {
        self.classes.contains(&class)
    }
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: 12,
            classes: CharClass::ALL.into_iter().collect(),
            exclude_similar: false,
            exclude_ambiguous: false,
            min_digits: 1,
            min_symbols: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "No password")]
    NoPassword,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrengthLabel::NoPassword => "No password",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        write!(f, "{}", text)
    }
}

/// Qualitative color used when rendering a strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Gray,
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthScore {
    /// Accumulated points (0-7)
    pub score: u8,
    /// Meter level (0-4)
    pub level: u8,
    pub label: StrengthLabel,
    pub tier: StrengthTier,
    /// Suggestions for a stronger password
    pub feedback: Vec<String>,
}

// Colors

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hsl {
    /// Hue in degrees (0-360)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// One color projected into every supported coordinate system.
///
/// All projections are derived together from `rgb`; see `crate::color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorValue {
    /// `#rrggbb`, lowercase
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
}
