// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::RngCore;
use rand_core::OsRng;
use thiserror::Error;

use crate::models::{CharClass, PasswordSpec, StrengthLabel, StrengthScore, StrengthTier};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const MAX_SCORE: u8 = 7;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Look-alike glyphs removed from every active class when `exclude_similar` is set
const SIMILAR: &str = "iIl1Lo0O";
// Removed from the symbol class only when `exclude_ambiguous` is set
const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;<>.?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password length must be between 4 and 128 characters (got {length})")]
    InvalidLength { length: usize },

    #[error("{field} ({value}) cannot exceed the password length ({length})")]
    MinimumExceedsLength { field: &'static str, value: usize, length: usize },

    #[error("At least one character type must be included")]
    NoCharsetAvailable,
}

pub type Result<T> = std::result::Result<T, PasswordError>;

/// The alphabet of one character class after exclusion filters.
pub fn alphabet(class: CharClass, spec: &PasswordSpec) -> Vec<char> {
    let base = match class {
        CharClass::Uppercase => UPPERCASE,
        CharClass::Lowercase => LOWERCASE,
        CharClass::Digit => DIGITS,
        CharClass::Symbol => SYMBOLS,
    };

    base.chars()
        .filter(|c| !(spec.exclude_similar && SIMILAR.contains(*c)))
        .filter(|c| !(class == CharClass::Symbol && spec.exclude_ambiguous && AMBIGUOUS.contains(*c)))
        .collect()
}

/// The union of every active class alphabet, in class order.
pub fn charset(spec: &PasswordSpec) -> Vec<char> {
    CharClass::ALL
        .iter()
        .filter(|class| spec.has(**class))
        .flat_map(|class| alphabet(*class, spec))
        .collect()
}

/// Builds passwords from an injected random source.
pub struct PasswordGenerator<R: RngCore = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Generate one password.
    ///
    /// Guaranteed digits and symbols are drawn first, the rest is filled from
    /// the full charset, and the whole sequence is shuffled. The minimums are
    /// a floor: the fill may add more digits or symbols. When the minimums
    /// together exceed `length`, digits keep priority and the symbol draw is
    /// cut short.
    pub fn generate(&mut self, spec: &PasswordSpec) -> Result<String> {
        validate(spec)?;

        let chars = charset(spec);
        if chars.is_empty() {
            return Err(PasswordError::NoCharsetAvailable);
        }

        let mut password: Vec<char> = Vec::with_capacity(spec.length);

        let floors = [
            (CharClass::Digit, spec.min_digits),
            (CharClass::Symbol, spec.min_symbols),
        ];
        for (class, count) in floors {
            if !spec.has(class) || count == 0 {
                continue;
            }
            let class_chars = alphabet(class, spec);
            if class_chars.is_empty() {
                continue;
            }
            let count = count.min(spec.length - password.len());
            self.draw(&class_chars, count, &mut password);
        }

        let remaining = spec.length - password.len();
        self.draw(&chars, remaining, &mut password);

        password.shuffle(&mut self.rng);

        Ok(password.into_iter().collect())
    }

    pub fn generate_batch(&mut self, spec: &PasswordSpec, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(spec)).collect()
    }

    fn draw(&mut self, from: &[char], count: usize, into: &mut Vec<char>) {
        if count == 0 {
            return;
        }
        let dist = Uniform::from(0..from.len());
        into.extend((0..count).map(|_| from[dist.sample(&mut self.rng)]));
    }
}

fn validate(spec: &PasswordSpec) -> Result<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&spec.length) {
        return Err(PasswordError::InvalidLength { length: spec.length });
    }
    if spec.min_digits > spec.length {
        return Err(PasswordError::MinimumExceedsLength {
            field: "min_digits",
            value: spec.min_digits,
            length: spec.length,
        });
    }
    if spec.min_symbols > spec.length {
        return Err(PasswordError::MinimumExceedsLength {
            field: "min_symbols",
            value: spec.min_symbols,
            length: spec.length,
        });
    }
    Ok(())
}

fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Score a password.
///
/// One point each for: length >= 8, length >= 12, a lowercase letter, an
/// uppercase letter, a digit, a symbol, length >= 16, and all four classes
/// together. The total saturates at `MAX_SCORE`.
pub fn score(password: &str) -> StrengthScore {
    if password.is_empty() {
        return StrengthScore {
            score: 0,
            level: 0,
            label: StrengthLabel::NoPassword,
            tier: StrengthTier::Gray,
            feedback: vec![],
        };
    }

    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(is_symbol);

    let mut points: u8 = 0;
    let mut feedback = Vec::new();

    if length >= 8 {
        points += 1;
    } else {
        feedback.push("Use at least 8 characters".to_string());
    }
    if length >= 12 {
        points += 1;
    }

    let classes = [
        (has_lower, "Add lowercase letters"),
        (has_upper, "Add uppercase letters"),
        (has_digit, "Add numbers"),
        (has_symbol, "Add symbols"),
    ];
    for (present, hint) in classes {
        if present {
            points += 1;
        } else {
            feedback.push(hint.to_string());
        }
    }

    if length >= 16 {
        points += 1;
    }
    if has_lower && has_upper && has_digit && has_symbol {
        points += 1;
    }

    feedback.extend(sequence_warning(password));

    let points = points.min(MAX_SCORE);
    let (level, label, tier) = grade(points);

    StrengthScore {
        score: points,
        level,
        label,
        tier,
        feedback,
    }
}

fn grade(points: u8) -> (u8, StrengthLabel, StrengthTier) {
    match points {
        0 => (0, StrengthLabel::VeryWeak, StrengthTier::Red),
        1..=2 => (1, StrengthLabel::Weak, StrengthTier::Red),
        3..=4 => (2, StrengthLabel::Medium, StrengthTier::Yellow),
        5..=6 => (3, StrengthLabel::Strong, StrengthTier::Green),
        _ => (4, StrengthLabel::VeryStrong, StrengthTier::Green),
    }
}

// Flags runs of three ascending letters or digits, e.g. "abc" or "123".
fn sequence_warning(password: &str) -> Option<String> {
    let chars: Vec<char> = password.chars().collect();
    let mut letters = 1;
    let mut digits = 1;

    for pair in chars.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let ascending = (curr as u32) == (prev as u32) + 1;

        letters = if ascending && prev.is_ascii_alphabetic() && curr.is_ascii_alphabetic() {
            letters + 1
        } else {
            1
        };
        digits = if ascending && prev.is_ascii_digit() && curr.is_ascii_digit() {
            digits + 1
        } else {
            1
        };

        if letters >= 3 {
            return Some("Avoid using consecutive letters (e.g., 'abc')".to_string());
        }
        if digits >= 3 {
            return Some("Avoid using consecutive numbers (e.g., '123')".to_string());
        }
    }
    None
}
