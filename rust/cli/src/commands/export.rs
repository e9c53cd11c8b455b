//! Hand history export command.
//!
//! Flattens the action lists of every record into one row per action, written
//! as CSV or as a JSON array. Amounts are exported in big blinds.

use std::io::Write;

use serde::Serialize;

use crate::cli::ExportFormat;
use crate::error::CliError;
use crate::history::parse_records;
use crate::io_utils::{read_text_auto, write_text_auto};
use crate::ui;

const CSV_HEADER: &str = "hand_id,action_id,phase,seat,action,bet_bb,pot_bb,auto,hero,ts";

#[derive(Debug, Serialize)]
struct ActionRow {
    hand_id: String,
    action_id: u32,
    phase: String,
    seat: String,
    action: String,
    bet_bb: String,
    pot_bb: String,
    auto: bool,
    hero: bool,
    ts: String,
}

impl ActionRow {
    fn csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            csv_field(&self.hand_id),
            self.action_id,
            self.phase,
            self.seat,
            self.action,
            self.bet_bb,
            self.pot_bb,
            self.auto,
            self.hero,
            self.ts
        )
    }
}

/// Quotes a free-text field when it holds a delimiter, a quote or a line break
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Handles the export command.
///
/// Any unreadable record aborts the export before the output is written.
pub fn handle_export_command(
    input: String,
    output: String,
    format: ExportFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).inspect_err(|e| {
        let _ = ui::write_error(err, &format!("Failed to read {}: {}", input, e));
    })?;

    let mut rows = Vec::new();
    let mut hands = 0usize;
    for (line_no, parsed) in parse_records(&content) {
        let record = parsed.map_err(|e| {
            let msg = format!("Invalid record at line {}: {}", line_no, e);
            let _ = ui::write_error(err, &msg);
            CliError::InvalidInput(msg)
        })?;
        hands += 1;
        rows.extend(record.actions.iter().map(|a| ActionRow {
            hand_id: record.hand_id.clone(),
            action_id: a.id,
            phase: a.phase.to_string(),
            seat: a.position.to_string(),
            action: a.action.to_string(),
            bet_bb: a.bet_size.to_string(),
            pot_bb: a.pot_size.to_string(),
            auto: a.auto,
            hero: record.hero == Some(a.position),
            ts: a.timestamp.to_rfc3339(),
        }));
    }

    let body = match format {
        ExportFormat::Csv => {
            let mut s = String::from(CSV_HEADER);
            s.push('\n');
            for row in &rows {
                s.push_str(&row.csv());
                s.push('\n');
            }
            s
        }
        ExportFormat::Json => {
            serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?
        }
    };
    write_text_auto(&output, &body).inspect_err(|e| {
        let _ = ui::write_error(err, &format!("Failed to write {}: {}", output, e));
    })?;

    writeln!(
        out,
        "Exported {} actions from {} hands to {}",
        rows.len(),
        hands,
        output
    )?;
    Ok(())
}
