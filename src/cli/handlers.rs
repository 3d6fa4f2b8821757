// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use chrono::Utc;
use console::{style, StyledObject};

use crate::cli::commands::{ColorArgs, PasswordArgs};
use crate::color::parse_components;
use crate::core::config::Config;
use crate::crypto;
use crate::generators::password::{self, PasswordGenerator};
use crate::models::{CharClass, ColorValue, PasswordSpec, StrengthScore, StrengthTier};
use crate::tools::{direct_download_link, timestamp};

const MAX_CLI_BATCH: usize = 50;

// Handlers for CLI commands

pub fn password_spec(config: &Config, args: &PasswordArgs) -> PasswordSpec {
    let defaults = config.default_password_spec();
    let excluded = [
        (CharClass::Uppercase, args.no_uppercase),
        (CharClass::Lowercase, args.no_lowercase),
        (CharClass::Digit, args.no_digits),
        (CharClass::Symbol, args.no_symbols),
    ];

    PasswordSpec {
        length: args.length.unwrap_or(defaults.length),
        classes: excluded
            .iter()
            .filter(|(_, off)| !off)
            .map(|(class, _)| *class)
            .collect(),
        exclude_similar: args.exclude_similar || defaults.exclude_similar,
        exclude_ambiguous: args.exclude_ambiguous,
        min_digits: args.min_digits.unwrap_or(defaults.min_digits),
        min_symbols: args.min_symbols.unwrap_or(defaults.min_symbols),
    }
}

pub fn handle_password(config: &Config, args: &PasswordArgs) -> Result<()> {
    if args.count == 0 || args.count > MAX_CLI_BATCH {
        bail!("Count must be between 1 and {}", MAX_CLI_BATCH);
    }

    let spec = password_spec(config, args);
    let passwords = PasswordGenerator::new().generate_batch(&spec, args.count)?;

    for generated in passwords {
        let strength = password::score(&generated);
        println!("{}  {}", style(&generated).bold(), format_strength(&strength));
    }
    Ok(())
}

fn tier_style(tier: StrengthTier, text: String) -> StyledObject<String> {
    match tier {
        StrengthTier::Gray => style(text).dim(),
        StrengthTier::Red => style(text).red(),
        StrengthTier::Yellow => style(text).yellow(),
        StrengthTier::Green => style(text).green(),
    }
}

pub fn format_strength(strength: &StrengthScore) -> String {
    let meter = format!(
        "[{}{}] {}",
        "#".repeat(strength.level as usize),
        "-".repeat(4 - strength.level as usize),
        strength.label
    );
    tier_style(strength.tier, meter).to_string()
}

pub fn handle_strength(password: &str) {
    let strength = password::score(password);
    println!("{} ({}/{})", format_strength(&strength), strength.score, password::MAX_SCORE);
    for hint in &strength.feedback {
        println!("  {} {}", style("•").cyan(), hint);
    }
}

pub fn resolve_color(args: &ColorArgs) -> Result<ColorValue> {
    if let Some(hex) = &args.hex {
        return Ok(ColorValue::from_hex(hex)?);
    }
    if let Some(rgb) = &args.rgb {
        let v = parse_components(rgb, 3)?;
        return Ok(ColorValue::from_rgb_values(v[0], v[1], v[2]));
    }
    if let Some(hsl) = &args.hsl {
        let v = parse_components(hsl, 3)?;
        return Ok(ColorValue::from_hsl(v[0], v[1], v[2]));
    }
    bail!("Provide a hex color, --rgb or --hsl")
}

pub fn color_lines(color: &ColorValue) -> Vec<String> {
    vec![
        format!("HEX   {}", color.hex),
        format!("RGB   {}", color.css_rgb()),
        format!("HSL   {}", color.css_hsl()),
        format!("HSV   hsv({}, {}%, {}%)", color.hsv.h, color.hsv.s, color.hsv.v),
        format!(
            "CMYK  cmyk({}%, {}%, {}%, {}%)",
            color.cmyk.c, color.cmyk.m, color.cmyk.y, color.cmyk.k
        ),
    ]
}

pub fn print_color(color: &ColorValue) {
    for line in color_lines(color) {
        println!("{}", line);
    }
}

pub fn handle_color(args: &ColorArgs) -> Result<()> {
    let color = resolve_color(args)?;
    print_color(&color);
    Ok(())
}

pub fn handle_hash(text: &str, algorithm: Option<&str>) -> Result<()> {
    let digests = match algorithm {
        Some(algorithm) => vec![crypto::digest(algorithm, text.as_bytes())?],
        None => crypto::digest_all(text.as_bytes()),
    };
    for digest in digests {
        println!("{:<8} {}", style(&digest.algorithm).bold(), digest.hash);
    }
    Ok(())
}

pub fn handle_timestamp(value: &str) -> Result<()> {
    let info = timestamp::from_timestamp(value, Utc::now())
        .with_context(|| format!("Could not convert '{}'", value))?;
    println!("Unix     {}", info.unix);
    println!("Millis   {}", info.milliseconds);
    println!("ISO      {}", info.iso);
    println!("UTC      {}", info.utc);
    println!("Local    {}", info.local);
    println!("Relative {}", style(&info.relative).italic());
    Ok(())
}

pub fn handle_drive(url: &str) -> Result<()> {
    println!("{}", direct_download_link(url)?);
    Ok(())
}
