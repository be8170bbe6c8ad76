//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goodday")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a mood reading (-10 to +10)
    Log {
        /// Capture mode (timeline, points, realtime)
        mode: String,

        /// Mood value; timeline mode takes the drawn-curve average
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Free-text context for the entry
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Show the mood timeline for one day
    History {
        /// Day to show, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show behavioral insights over a trailing window
    Insights {
        /// Window to analyze (week, month, year)
        #[arg(short, long, default_value = "week")]
        range: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
