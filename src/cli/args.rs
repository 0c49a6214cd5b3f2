//! CLI argument definitions and parsing structures.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "lepl-draft", about = "League rank normalization and draft value CLI")]
pub struct LeplDraft {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse one scraped rank string and print its canonical form and score
    ParseRank {
        /// Raw rank text, e.g. "Gold II 45 LP" or "Master 150 LP"
        text: String,

        /// Emit the parsed rank as JSON instead of plain text.
        #[clap(long, short)]
        json: bool,
    },

    /// Fold a file of scraped observation records into the profile store
    Fold {
        /// JSON file of per-account observation records.
        #[clap(long, short)]
        input: PathBuf,

        /// Profile store path (defaults to the per-user data directory).
        #[clap(long)]
        store: Option<PathBuf>,

        /// Print each fold decision.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Compute draft point values for every stored profile
    PointValues {
        /// Curation config (or set `LEPL_DRAFT_CONFIG`).
        #[clap(long, short)]
        config: Option<PathBuf>,

        /// Profile store path (defaults to the per-user data directory).
        #[clap(long)]
        store: Option<PathBuf>,

        /// Emit rows as JSON instead of a table.
        #[clap(long, short)]
        json: bool,
    },
}
