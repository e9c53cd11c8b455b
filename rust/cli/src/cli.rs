//! Command-line definition for the `sixmax` binary.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "sixmax",
    version,
    about = "Six-max no-limit hold'em hand recorder"
)]
pub struct SixmaxCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record one hand interactively from stdin
    Play {
        /// Seat the hero sits in (SB, BB, UTG, HJ, CO, BTN)
        #[arg(long)]
        hero: Option<String>,
        /// Starting stack in big blinds
        #[arg(long)]
        stack: Option<String>,
        /// Append the finished hand to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Rebuild recorded hands and print their action lists
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Check recorded hands against a fresh replay
    Verify {
        #[arg(long)]
        input: String,
    },
    /// Flatten recorded hands into CSV or JSON
    Export {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum)]
        format: ExportFormat,
        #[arg(long)]
        output: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Replay { .. } => "replay",
            Commands::Verify { .. } => "verify",
            Commands::Export { .. } => "export",
            Commands::Cfg => "cfg",
        }
    }
}
