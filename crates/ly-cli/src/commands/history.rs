use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ly_session::History;

fn load(path: &Path, limit: usize) -> Result<History, String> {
    History::load(path, limit).map_err(|e| e.to_string())
}

pub fn list(path: &Path, limit: usize) -> Result<(), String> {
    let history = load(path, limit)?;
    if history.is_empty() {
        println!("  No saved readings.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Time", "Hexagram", "Question"]);
    for record in history.records() {
        let id = record.id.to_string();
        let question = if record.question.is_empty() {
            "-".to_string()
        } else {
            record.question.clone()
        };
        table.add_row(vec![
            id[..8].to_string(),
            record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            record.hexagram_name().to_string(),
            question,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} readings", history.len());
    Ok(())
}

pub fn show(path: &Path, limit: usize, id: &str) -> Result<(), String> {
    let history = load(path, limit)?;
    let record = history.find(id).map_err(|e| e.to_string())?;

    println!("  {} {}", "Id:".bold(), record.id);
    println!("  {} {}", "Time:".bold(), record.timestamp.to_rfc3339());
    if !record.question.is_empty() {
        println!("  {} {}", "Question:".bold(), record.question);
    }
    println!();
    for line in record.hexagram.render().lines() {
        println!("  {line}");
    }
    println!();
    println!("{}", record.interpretation);
    Ok(())
}

pub fn clear(path: &Path, limit: usize) -> Result<(), String> {
    let mut history = load(path, limit)?;
    let count = history.len();
    history.clear();
    history.save(path).map_err(|e| e.to_string())?;
    println!("  Cleared {count} readings.");
    Ok(())
}
