pub mod cast;
pub mod history;
pub mod palaces;
pub mod read;

use colored::Colorize;
use ly_engine::{Hexagram, Reading};

/// How a reading is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Drawing plus markdown report.
    Markdown,
    /// Drawing plus plain-text report.
    Plain,
    /// One JSON document.
    Json,
}

impl Format {
    /// Pick the format from the `--json` and `--plain` flags.
    pub fn from_flags(json: bool, plain: bool) -> Self {
        match (json, plain) {
            (true, _) => Self::Json,
            (false, true) => Self::Plain,
            (false, false) => Self::Markdown,
        }
    }
}

/// Print a hexagram drawing with moving lines highlighted.
fn print_hexagram(hexagram: &Hexagram) {
    for line in hexagram.render().lines() {
        if line.ends_with(" o") || line.ends_with(" x") {
            println!("  {}", line.yellow());
        } else {
            println!("  {line}");
        }
    }
}

/// Print the markdown report, colouring headings.
fn print_markdown(reading: &Reading) {
    for line in reading.to_markdown().lines() {
        if line.starts_with('#') {
            println!("{}", line.bold().cyan());
        } else {
            println!("{line}");
        }
    }
}

/// Print a hexagram and its reading in the chosen format.
fn print_reading(hexagram: &Hexagram, reading: &Reading, format: Format) -> Result<(), String> {
    if format == Format::Json {
        let doc = serde_json::json!({
            "hexagram": hexagram,
            "reading": reading,
        });
        let text = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let structure = &reading.diagnosis.original;
    let number = reading
        .original_number
        .map_or_else(String::new, |n| format!("{n}. "));
    println!();
    print_hexagram(hexagram);
    println!();
    println!(
        "  {}{} {}",
        structure.upper.symbol(),
        structure.lower.symbol(),
        format!("{number}{}", reading.original_name).bold()
    );
    if hexagram.has_moving_lines() {
        let changed = &reading.diagnosis.changed;
        let number = reading
            .changed_number
            .map_or_else(String::new, |n| format!("{n}. "));
        println!(
            "  {}{} -> {number}{}",
            changed.upper.symbol(),
            changed.lower.symbol(),
            reading.changed_name
        );
    }
    println!();
    match format {
        Format::Plain => print!("{}", reading.to_plain_text()),
        _ => print_markdown(reading),
    }
    Ok(())
}
