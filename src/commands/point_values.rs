//! Compute and print draft point values for every stored profile.

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::CurationConfig;
use crate::error::Result;
use crate::profile::point_value::NO_DATA_SENTINEL;
use crate::profile::{point_value, DraftValueInputs, PlayerRankProfile};
use crate::rank::RankTable;
use crate::storage::{ProfileMap, ProfileStore};

/// One output row, shaped for the spreadsheet exporter.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerValueRow {
    pub player: String,
    pub current_rank: Option<String>,
    pub true_peak_rank: Option<String>,
    /// Draft value; [`NO_DATA_SENTINEL`] when the player had no signal.
    pub point_value: f64,
}

pub fn handle_point_values(
    config_path: Option<PathBuf>,
    store_path: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let config = CurationConfig::resolve(config_path)?;
    let store = ProfileStore::open(store_path)?;
    let profiles = store.load()?;
    let rows = compute_rows(&profiles, &config);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<24} {:<18} {:<18} {:>8}",
        "Player", "Current", "True Peak", "Value"
    );
    for row in &rows {
        let value = if row.point_value == NO_DATA_SENTINEL {
            "-".to_string()
        } else {
            format!("{:.2}", row.point_value)
        };
        println!(
            "{:<24} {:<18} {:<18} {:>8}",
            row.player,
            row.current_rank.as_deref().unwrap_or("-"),
            row.true_peak_rank.as_deref().unwrap_or("-"),
            value
        );
    }
    Ok(())
}

/// Build the output rows, strongest first; no-data rows sink to the
/// bottom despite their large sentinel.
pub fn compute_rows(profiles: &ProfileMap, config: &CurationConfig) -> Vec<PlayerValueRow> {
    let table = RankTable::default();
    let mut rows: Vec<PlayerValueRow> = profiles
        .iter()
        .map(|(player, profile)| value_row(player, profile, config, &table))
        .collect();

    rows.sort_by(|a, b| {
        let a_missing = a.point_value == NO_DATA_SENTINEL;
        let b_missing = b.point_value == NO_DATA_SENTINEL;
        a_missing.cmp(&b_missing).then(
            b.point_value
                .partial_cmp(&a.point_value)
                .unwrap_or(Ordering::Equal),
        )
    });
    rows
}

fn value_row(
    player: &str,
    profile: &PlayerRankProfile,
    config: &CurationConfig,
    table: &RankTable,
) -> PlayerValueRow {
    let inputs = DraftValueInputs::from_profile(profile, &config.seasons, table);
    let value = point_value(&inputs, config.modifier_for(player));
    let peak = profile.true_peak_rank(table);
    PlayerValueRow {
        player: player.to_string(),
        current_rank: profile.current_rank.map(|rank| rank.to_string()),
        true_peak_rank: (!peak.is_unranked()).then(|| peak.to_string()),
        point_value: value.as_f64(),
    }
}
