//! Hand history records: one JSON object per line.
//!
//! A record stores the command log next to the action list it produced, so
//! any hand can be rebuilt by replaying `commands` and the rebuilt actions can
//! be compared with the stored ones.

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sixmax_engine::chips::Chips;
use sixmax_engine::engine::Hand;
use sixmax_engine::errors::HandError;
use sixmax_engine::player::ActionRecord;
use sixmax_engine::result::{CompletionType, HandResult};
use sixmax_engine::seat::Seat;
use sixmax_engine::state::{Command, HandConfig};
use std::path::Path;

use crate::error::CliError;
use crate::io_utils::{append_line, read_text_auto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand_id: String,
    #[serde(default)]
    pub hero: Option<Seat>,
    pub starting_stack: Chips,
    pub commands: Vec<Command>,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
    #[serde(default)]
    pub board: Vec<String>,
    #[serde(default)]
    pub completion: Option<CompletionType>,
    #[serde(default)]
    pub result: Option<HandResult>,
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandRecord {
    pub fn from_hand(hand_id: String, hand: &Hand) -> Self {
        let state = hand.state();
        let config = state.config();
        Self {
            hand_id,
            hero: config.hero,
            starting_stack: config.starting_stack,
            commands: hand.commands().to_vec(),
            actions: state.actions().to_vec(),
            board: state.board().to_vec(),
            completion: state.is_complete().then(|| state.completion_type()),
            result: state.hand_result().cloned(),
            ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn config(&self) -> HandConfig {
        HandConfig {
            hero: self.hero,
            starting_stack: self.starting_stack,
        }
    }

    /// Rebuilds the hand from the stored command log
    pub fn replay(&self) -> Result<Hand, HandError> {
        Hand::replay(self.config(), self.commands.clone())
    }
}

/// `YYYYMMDD-NNNNNN`
pub fn format_hand_id(date: NaiveDate, seq: u32) -> String {
    format!("{}-{:06}", date.format("%Y%m%d"), seq)
}

pub fn is_valid_hand_id(s: &str) -> bool {
    if s.len() != 15 || !s.is_ascii() || &s[8..9] != "-" {
        return false;
    }
    if !s[..8].chars().chain(s[9..].chars()).all(|c| c.is_ascii_digit()) {
        return false;
    }
    match (s[0..4].parse(), s[4..6].parse(), s[6..8].parse()) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
        _ => false,
    }
}

/// Non-empty lines of a history file, numbered from 1, each parsed on its own
/// so one bad line does not hide the rest.
pub fn parse_records(content: &str) -> Vec<(usize, Result<HandRecord, serde_json::Error>)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, serde_json::from_str(l)))
        .collect()
}

/// Appends finished hands to a JSONL file, numbering them per day.
#[derive(Debug)]
pub struct HandLogger {
    path: String,
    date: NaiveDate,
    seq: u32,
}

impl HandLogger {
    /// Continues numbering after the highest of today's ids already in `path`
    pub fn open(path: &str) -> Result<Self, CliError> {
        let date = Utc::now().date_naive();
        let seq = if Path::new(path).exists() {
            let content = read_text_auto(path)?;
            let prefix = format_hand_id(date, 0);
            parse_records(&content)
                .into_iter()
                .filter_map(|(_, r)| r.ok())
                .filter(|r| is_valid_hand_id(&r.hand_id) && r.hand_id.starts_with(&prefix[..9]))
                .filter_map(|r| r.hand_id[9..].parse::<u32>().ok())
                .max()
                .unwrap_or(0)
        } else {
            0
        };
        Ok(Self {
            path: path.to_string(),
            date,
            seq,
        })
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(self.date, self.seq)
    }

    pub fn write(&self, record: &HandRecord) -> Result<(), CliError> {
        let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
        append_line(&self.path, &line)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
