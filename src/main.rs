//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use lepl_draft::{
    cli::{Commands, LeplDraft},
    commands::{
        fold::handle_fold, parse_rank::handle_parse_rank, point_values::handle_point_values,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let app = LeplDraft::parse();

    match app.command {
        Commands::ParseRank { text, json } => handle_parse_rank(&text, json)?,

        Commands::Fold {
            input,
            store,
            verbose,
        } => handle_fold(input, store, verbose)?,

        Commands::PointValues {
            config,
            store,
            json,
        } => handle_point_values(config, store, json)?,
    }

    Ok(())
}
