// src/cli/menu.rs
use anyhow::{Context, Result};
use console::style;
use inquire::{Confirm, Select, Text};

use crate::cli::handlers::{format_strength, print_color};
use crate::color::{ColorEdit, ColorEditor};
use crate::core::config::Config;
use crate::generators::password::{self, PasswordGenerator};
use crate::models::{CharClass, PasswordSpec};

const GENERATE: &str = "🔐  Generate secure password";
const STRENGTH: &str = "📊  Check password strength";
const COLOR: &str = "🎨  Color converter";
const EXIT: &str = "❌  Exit";

const COLOR_FIELDS: [&str; 7] = ["Hex", "Red", "Green", "Blue", "Hue", "Saturation", "Lightness"];
const COLOR_DONE: &str = "Done";

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║           🦀 DEVTOOLS KIT            ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let selection = Select::new("Choose an option:", vec![GENERATE, STRENGTH, COLOR, EXIT])
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()?;

        let result = match selection {
            Some(GENERATE) => generate_password(config),
            Some(STRENGTH) => check_strength(),
            Some(COLOR) => color_converter(config),
            _ => break,
        };

        if let Err(e) = result {
            println!("❌ {}", e);
        }
    }

    Ok(())
}

fn prompt_number(message: &str, default: usize) -> Result<usize> {
    let text = Text::new(message).with_default(&default.to_string()).prompt()?;
    text.trim()
        .parse()
        .with_context(|| format!("'{}' is not a number", text))
}

fn generate_password(config: &Config) -> Result<()> {
    let defaults = config.default_password_spec();
    let length = prompt_number("Password length:", defaults.length)?;

    let mut classes = Vec::new();
    for (class, question) in [
        (CharClass::Uppercase, "Include uppercase letters?"),
        (CharClass::Lowercase, "Include lowercase letters?"),
        (CharClass::Digit, "Include numbers?"),
        (CharClass::Symbol, "Include symbols?"),
    ] {
        if Confirm::new(question).with_default(true).prompt()? {
            classes.push(class);
        }
    }

    let exclude_similar = Confirm::new("Exclude similar characters (like i, l, 1, O, 0)?")
        .with_default(defaults.exclude_similar)
        .prompt()?;

    let spec = PasswordSpec {
        length,
        classes: classes.into_iter().collect(),
        exclude_similar,
        ..defaults
    };

    let generated = PasswordGenerator::new().generate(&spec)?;
    println!("\nGenerated Password: {}", style(&generated).bold());
    println!("Strength: {}\n", format_strength(&password::score(&generated)));
    Ok(())
}

fn check_strength() -> Result<()> {
    let candidate = inquire::Password::new("Password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let strength = password::score(&candidate);
    println!("Strength: {}", format_strength(&strength));
    for hint in &strength.feedback {
        println!("  • {}", hint);
    }
    Ok(())
}

pub fn parse_edit(field: &str, value: &str) -> Result<ColorEdit> {
    if field == "Hex" {
        return Ok(ColorEdit::Hex(value.to_string()));
    }

    let number: i32 = value
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a number", value))?;

    Ok(match field {
        "Red" => ColorEdit::Red(number),
        "Green" => ColorEdit::Green(number),
        "Blue" => ColorEdit::Blue(number),
        "Hue" => ColorEdit::Hue(number),
        "Saturation" => ColorEdit::Saturation(number),
        _ => ColorEdit::Lightness(number),
    })
}

fn color_converter(config: &Config) -> Result<()> {
    let mut editor = ColorEditor::new(config.default_color_value());
    print_color(editor.current());

    loop {
        let mut options = COLOR_FIELDS.to_vec();
        options.push(COLOR_DONE);

        let field = match Select::new("Edit which value?", options).prompt_skippable()? {
            Some(COLOR_DONE) | None => return Ok(()),
            Some(field) => field,
        };

        let value = Text::new(&format!("{}:", field)).prompt()?;
        let applied = parse_edit(field, &value).and_then(|edit| Ok(editor.apply(edit)?.clone()));

        match applied {
            Ok(color) => print_color(&color),
            Err(e) => {
                println!("❌ {} (keeping {})", e, editor.current().hex);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_from_prompt_text() {
        assert_eq!(parse_edit("Hex", "#ffffff").unwrap(), ColorEdit::Hex("#ffffff".to_string()));
        assert_eq!(parse_edit("Hue", " 120 ").unwrap(), ColorEdit::Hue(120));
        assert!(parse_edit("Red", "lots").is_err());
    }

    #[test]
    fn editor_driven_by_prompt_text() {
        let mut editor = ColorEditor::new(Config::default().default_color_value());
        editor.apply(parse_edit("Red", "300").unwrap()).unwrap();
        assert_eq!(editor.current().rgb.r, 255);

        assert!(editor.apply(parse_edit("Hex", "nope").unwrap()).is_err());
        assert_eq!(editor.current().rgb.r, 255);
    }
}
