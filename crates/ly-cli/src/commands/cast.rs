use std::path::Path;

use colored::Colorize;

use ly_session::{CastingSession, History, HistoryRecord, SessionConfig};

use super::Format;

pub fn run(
    config: &SessionConfig,
    question: &str,
    format: Format,
    history: Option<&Path>,
) -> Result<(), String> {
    // Load first so a bad history file fails before anything is cast.
    let saved = history
        .map(|path| History::load(path, config.history_limit).map(|h| (path, h)))
        .transpose()
        .map_err(|e| e.to_string())?;

    let mut session = CastingSession::new(config);
    let show_tosses = format != Format::Json;

    if show_tosses && !question.is_empty() {
        println!("  {} {question}", "?".bold());
    }
    while session.remaining() > 0 {
        let line = session.toss().map_err(|e| e.to_string())?;
        if show_tosses {
            let label = session.language().catalog().line(session.lines().len() - 1);
            println!("  {}  {line}", label.dimmed());
        }
    }

    let hexagram = session.finish().map_err(|e| e.to_string())?;
    let reading = session.read(&hexagram).map_err(|e| e.to_string())?;
    super::print_reading(&hexagram, &reading, format)?;

    if let Some((path, mut saved)) = saved {
        let record = HistoryRecord::new(hexagram, question, &reading);
        let id = record.id;
        saved.add(record);
        saved.save(path).map_err(|e| e.to_string())?;
        if show_tosses {
            println!();
            println!("  {} {id}", "Saved".green());
        }
    }

    Ok(())
}
