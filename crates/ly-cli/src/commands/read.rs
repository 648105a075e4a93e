use ly_engine::CastResult;
use ly_session::{CastingSession, SessionConfig};

use super::Format;

/// Enter lines cast with physical coins, bottom first.
pub fn run(config: &SessionConfig, lines: &[u32], format: Format) -> Result<(), String> {
    let mut session = CastingSession::new(config);
    for sum in lines {
        let line = CastResult::from_sum(*sum).map_err(|e| e.to_string())?;
        session.push(line).map_err(|e| e.to_string())?;
    }
    let hexagram = session.finish().map_err(|e| e.to_string())?;
    let reading = session.read(&hexagram).map_err(|e| e.to_string())?;
    super::print_reading(&hexagram, &reading, format)
}
