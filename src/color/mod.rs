// src/color/mod.rs
//! Color conversion between HEX, RGB, HSL, HSV and CMYK.
//!
//! RGB is the canonical form: every constructor converts its input to an RGB
//! triple first and then derives all other projections from it, so the five
//! representations of a `ColorValue` never drift apart. Math runs on
//! normalized 0-1 floats and is rounded only when a projection is stored.

use rand::Rng;
use thiserror::Error;

use crate::models::{Cmyk, ColorValue, Hsl, Hsv, Rgb};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;

pub const DEFAULT_HEX: &str = "#3b82f6";

pub const PRESETS: [(&str, &str); 12] = [
    ("Red", "#ef4444"),
    ("Orange", "#f97316"),
    ("Yellow", "#eab308"),
    ("Green", "#22c55e"),
    ("Blue", "#3b82f6"),
    ("Indigo", "#6366f1"),
    ("Purple", "#a855f7"),
    ("Pink", "#ec4899"),
    ("Gray", "#6b7280"),
    ("Black", "#000000"),
    ("White", "#ffffff"),
    ("Cyan", "#06b6d4"),
];

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn clamp_hue(value: i32) -> u16 {
    value.clamp(0, 360) as u16
}

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn to_percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

fn to_degrees(unit: f64) -> u16 {
    (unit * 360.0).round().clamp(0.0, 360.0) as u16
}

fn normalized(rgb: Rgb) -> (f64, f64, f64) {
    (rgb.r as f64 / 255.0, rgb.g as f64 / 255.0, rgb.b as f64 / 255.0)
}

// Hue as a 0-1 fraction of the color wheel, shared by HSL and HSV.
fn hue(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    let sector = if max == r {
        (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    sector / 6.0
}

pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = normalized(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0, s: 0, l: to_percent(l) };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    Hsl {
        h: to_degrees(hue(r, g, b, max, d)),
        s: to_percent(s),
        l: to_percent(l),
    }
}

pub fn to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = normalized(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let s = if max == 0.0 { 0.0 } else { chroma / max };
    let h = if chroma == 0.0 { 0.0 } else { hue(r, g, b, max, chroma) };

    Hsv {
        h: to_degrees(h),
        s: to_percent(s),
        v: to_percent(max),
    }
}

pub fn to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = normalized(rgb);
    let k = 1.0 - r.max(g).max(b);

    // Pure black: c, m, y would divide by zero
    if k == 1.0 {
        return Cmyk { c: 0, m: 0, y: 0, k: 100 };
    }

    Cmyk {
        c: to_percent((1.0 - r - k) / (1.0 - k)),
        m: to_percent((1.0 - g - k) / (1.0 - k)),
        y: to_percent((1.0 - b - k) / (1.0 - k)),
        k: to_percent(k),
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    if s == 0.0 {
        let gray = to_byte(l);
        return Rgb { r: gray, g: gray, b: gray };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: to_byte(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        g: to_byte(hue_to_rgb(p, q, h)),
        b: to_byte(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = (hsv.h % 360) as f64 / 60.0;
    let s = hsv.s as f64 / 100.0;
    let v = hsv.v as f64 / 100.0;

    let chroma = v * s;
    let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb {
        r: to_byte(r + m),
        g: to_byte(g + m),
        b: to_byte(b + m),
    }
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = cmyk.k as f64 / 100.0;
    let channel = |ink: u8| to_byte((1.0 - ink as f64 / 100.0) * (1.0 - k));

    Rgb {
        r: channel(cmyk.c),
        g: channel(cmyk.m),
        b: channel(cmyk.y),
    }
}

/// Parse `#rrggbb` or `rrggbb`, case-insensitive. Whitespace is not stripped.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(format!(
            "expected #rrggbb, got '{}'",
            input
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColorError::InvalidFormat(e.to_string()))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Parse `expected` comma separated integers such as `59, 130, 246`.
pub fn parse_components(input: &str, expected: usize) -> Result<Vec<i32>> {
    let values = input
        .split(',')
        .map(|part| part.trim().trim_end_matches('%').parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ColorError::InvalidFormat(format!("'{}': {}", input, e)))?;

    if values.len() != expected {
        return Err(ColorError::InvalidFormat(format!(
            "expected {} components, got {}",
            expected,
            values.len()
        )));
    }

    Ok(values)
}

impl ColorValue {
    /// Canonical constructor. Every other constructor ends here.
    pub fn from_rgb(rgb: Rgb) -> Self {
        ColorValue {
            hex: to_hex(rgb),
            rgb,
            hsl: to_hsl(rgb),
            hsv: to_hsv(rgb),
            cmyk: to_cmyk(rgb),
        }
    }

    /// Channels outside 0-255 are clamped.
    pub fn from_rgb_values(r: i32, g: i32, b: i32) -> Self {
        Self::from_rgb(Rgb {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        })
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        parse_hex(hex).map(Self::from_rgb)
    }

    /// Hue is clamped to 0-360, saturation and lightness to 0-100.
    pub fn from_hsl(h: i32, s: i32, l: i32) -> Self {
        let hsl = Hsl {
            h: clamp_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        };
        Self::from_rgb(hsl_to_rgb(hsl))
    }

    pub fn from_hsv(h: i32, s: i32, v: i32) -> Self {
        let hsv = Hsv {
            h: clamp_hue(h),
            s: clamp_percent(s),
            v: clamp_percent(v),
        };
        Self::from_rgb(hsv_to_rgb(hsv))
    }

    pub fn from_cmyk(c: i32, m: i32, y: i32, k: i32) -> Self {
        let cmyk = Cmyk {
            c: clamp_percent(c),
            m: clamp_percent(m),
            y: clamp_percent(y),
            k: clamp_percent(k),
        };
        Self::from_rgb(cmyk_to_rgb(cmyk))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(Rgb {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        })
    }

    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    pub fn css_hsl(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hsl.h, self.hsl.s, self.hsl.l)
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::from_rgb(Rgb { r: 59, g: 130, b: 246 })
    }
}

pub fn presets() -> Vec<(&'static str, ColorValue)> {
    PRESETS
        .iter()
        .filter_map(|(name, hex)| ColorValue::from_hex(hex).ok().map(|color| (*name, color)))
        .collect()
}

/// A single-field edit applied to the current color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorEdit {
    Hex(String),
    Red(i32),
    Green(i32),
    Blue(i32),
    Hue(i32),
    Saturation(i32),
    Lightness(i32),
}

/// Holds the color of one converter instance and applies edits to it.
///
/// Every edit recomputes all projections from RGB. A rejected edit leaves the
/// previous value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEditor {
    current: ColorValue,
}

impl ColorEditor {
    pub fn new(initial: ColorValue) -> Self {
        ColorEditor { current: initial }
    }

    pub fn current(&self) -> &ColorValue {
        &self.current
    }

    pub fn apply(&mut self, edit: ColorEdit) -> Result<&ColorValue> {
        let Rgb { r, g, b } = self.current.rgb;
        let Hsl { h, s, l } = self.current.hsl;
        let (r, g, b) = (r as i32, g as i32, b as i32);
        let (h, s, l) = (h as i32, s as i32, l as i32);

        let next = match edit {
            ColorEdit::Hex(hex) => ColorValue::from_hex(&hex)?,
            ColorEdit::Red(value) => ColorValue::from_rgb_values(value, g, b),
            ColorEdit::Green(value) => ColorValue::from_rgb_values(r, value, b),
            ColorEdit::Blue(value) => ColorValue::from_rgb_values(r, g, value),
            ColorEdit::Hue(value) => ColorValue::from_hsl(value, s, l),
            ColorEdit::Saturation(value) => ColorValue::from_hsl(h, value, l),
            ColorEdit::Lightness(value) => ColorValue::from_hsl(h, s, value),
        };

        self.current = next;
        Ok(&self.current)
    }
}

impl Default for ColorEditor {
    fn default() -> Self {
        Self::new(ColorValue::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn blue_500_projections() {
        let color = ColorValue::from_rgb_values(59, 130, 246);
        assert_eq!(color.hex, "#3b82f6");
        assert_eq!(color.hsl, Hsl { h: 217, s: 91, l: 60 });
        assert_eq!(color.hsv, Hsv { h: 217, s: 76, v: 96 });
        assert_eq!(color.cmyk, Cmyk { c: 76, m: 47, y: 0, k: 4 });
        assert_eq!(color, ColorValue::default());
    }

    #[test]
    fn black_and_white_are_achromatic() {
        let black = ColorValue::from_rgb_values(0, 0, 0);
        assert_eq!(black.cmyk, Cmyk { c: 0, m: 0, y: 0, k: 100 });
        assert_eq!(black.hsl, Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(black.hsv, Hsv { h: 0, s: 0, v: 0 });

        let white = ColorValue::from_hex("#FFFFFF").unwrap();
        assert_eq!(white.hex, "#ffffff");
        assert_eq!(white.hsl, Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(white.cmyk, Cmyk { c: 0, m: 0, y: 0, k: 0 });
    }

    #[test]
    fn primary_hues() {
        assert_eq!(ColorValue::from_rgb_values(255, 0, 0).hsl.h, 0);
        assert_eq!(ColorValue::from_rgb_values(0, 255, 0).hsl.h, 120);
        assert_eq!(ColorValue::from_rgb_values(0, 0, 255).hsl.h, 240);
        assert_eq!(ColorValue::from_rgb_values(255, 0, 255).hsv.h, 300);
    }

    #[test]
    fn hex_parsing_accepts_optional_hash_and_any_case() {
        assert_eq!(parse_hex("3B82F6").unwrap(), Rgb { r: 59, g: 130, b: 246 });
        assert_eq!(parse_hex("#3b82F6").unwrap(), Rgb { r: 59, g: 130, b: 246 });
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "#fff", "#3b82f", "#3b82f6a", "#gggggg", "3b 82f6", " #3b82f6 ", "#3b82f6\n"] {
            assert!(
                matches!(ColorValue::from_hex(bad), Err(ColorError::InvalidFormat(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(ColorValue::from_rgb_values(-20, 300, 128).rgb, Rgb { r: 0, g: 255, b: 128 });
        let red = ColorValue::from_hsl(400, 150, 50);
        assert_eq!(red.rgb, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn hsl_edit_converges_with_rgb_edit() {
        let via_hsl = ColorValue::from_hsl(217, 91, 60);
        let via_rgb = ColorValue::from_rgb(via_hsl.rgb);
        assert_eq!(via_hsl, via_rgb);
        let expected = Rgb { r: 59, g: 130, b: 246 };
        assert!((via_hsl.rgb.r as i32 - expected.r as i32).abs() <= 1);
        assert!((via_hsl.rgb.g as i32 - expected.g as i32).abs() <= 1);
        assert!((via_hsl.rgb.b as i32 - expected.b as i32).abs() <= 1);
    }

    #[test]
    fn hsv_and_cmyk_inverses() {
        assert_eq!(ColorValue::from_hsv(120, 100, 100).rgb, Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(ColorValue::from_hsv(360, 100, 100).rgb, Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(ColorValue::from_cmyk(0, 100, 100, 0).rgb, Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(ColorValue::from_cmyk(0, 0, 0, 100).rgb, Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn css_strings() {
        let color = ColorValue::default();
        assert_eq!(color.css_rgb(), "rgb(59, 130, 246)");
        assert_eq!(color.css_hsl(), "hsl(217, 91%, 60%)");
    }

    #[test]
    fn component_lists() {
        assert_eq!(parse_components("59, 130, 246", 3).unwrap(), vec![59, 130, 246]);
        assert_eq!(parse_components("217,91%,60%", 3).unwrap(), vec![217, 91, 60]);
        assert!(parse_components("1,2", 3).is_err());
        assert!(parse_components("a,b,c", 3).is_err());
    }

    #[test]
    fn presets_all_parse() {
        let all = presets();
        assert_eq!(all.len(), PRESETS.len());
        assert_eq!(all[9].1.hex, "#000000");
    }

    #[test]
    fn random_color_is_deterministic_under_seed() {
        let a = ColorValue::random(&mut ChaCha20Rng::seed_from_u64(11));
        let b = ColorValue::random(&mut ChaCha20Rng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a, ColorValue::from_rgb(a.rgb));
    }

    #[test]
    fn editor_keeps_last_good_value_on_bad_hex() {
        let mut editor = ColorEditor::default();
        let before = editor.current().clone();

        assert!(editor.apply(ColorEdit::Hex("#12".into())).is_err());
        assert_eq!(editor.current(), &before);

        editor.apply(ColorEdit::Red(255)).unwrap();
        assert_eq!(editor.current().rgb, Rgb { r: 255, g: 130, b: 246 });
        assert_eq!(editor.current().hex, "#ff82f6");

        editor.apply(ColorEdit::Lightness(0)).unwrap();
        assert_eq!(editor.current().rgb, Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(editor.current().hex, "#000000");
    }

    proptest! {
        #[test]
        fn rgb_survives_canonicalisation(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = ColorValue::from_rgb(Rgb { r, g, b });
            prop_assert_eq!(color.rgb, Rgb { r, g, b });
        }

        #[test]
        fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = ColorValue::from_rgb(Rgb { r, g, b });
            let back = ColorValue::from_hex(&to_hex(color.rgb)).unwrap();
            prop_assert_eq!(back.rgb, color.rgb);
        }

        #[test]
        fn projections_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = ColorValue::from_rgb(Rgb { r, g, b });
            prop_assert!(color.hsl.h <= 360 && color.hsl.s <= 100 && color.hsl.l <= 100);
            prop_assert!(color.hsv.h <= 360 && color.hsv.s <= 100 && color.hsv.v <= 100);
            prop_assert!(color.cmyk.c <= 100 && color.cmyk.m <= 100 && color.cmyk.y <= 100 && color.cmyk.k <= 100);
            prop_assert_eq!(color.hex.len(), 7);
        }
    }
}
