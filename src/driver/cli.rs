//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// アクティビティ記録から距離・速度・消費カロリーを求めるCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "daytrack")]
#[command(about = "Summarize a day's steps or a training session", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Profile file with weight and height
    #[arg(short, long, global = true, default_value = "./.daytrack/profile.json")]
    pub profile: String,

    /// Weight in kg (overrides the profile)
    #[arg(short, long, global = true)]
    pub weight: Option<f64>,

    /// Height (overrides the profile)
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize a "<steps>,<duration>" record, e.g. "8000,1h30m"
    Steps {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
    /// Summarize a "<steps>,<label>,<duration>" record, e.g. "5000,Running,45m"
    Training {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
}
