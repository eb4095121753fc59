//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gamedb_progress::{MatchStrategy, SettingsOverrides};

#[derive(Parser)]
#[command(name = "gamedb")]
#[command(about = "Track game database progress for dead consoles", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing dead_consoles.json and the *_games.json catalogs
    /// (defaults to the settings file, then the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Directory for the generated site (default: <root>/site)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Reference dataset filename inside the root directory
    #[arg(long, global = true)]
    pub reference: Option<String>,

    /// How catalog names are matched to reference consoles
    /// (exact-then-substring or first-substring)
    #[arg(long, global = true)]
    pub strategy: Option<MatchStrategy>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub(crate) fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            input_dir: self.root.clone(),
            output_dir: self.output.clone(),
            reference_file: self.reference.clone(),
            strategy: self.strategy,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Print the progress report, then generate the site
    Run,

    /// Print the progress report only
    Report,

    /// Generate the static site only
    Site,

    /// List reference consoles that have no catalog yet
    Missing {
        /// Maximum number of consoles to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum ConfigAction {
    /// Show the effective settings after applying overrides
    Show,

    /// Print the settings file path
    Path,
}
