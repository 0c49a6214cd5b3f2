//! Fold scraped observation records into the stored player profiles.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::profile::{Observation, SeasonLabel};
use crate::rank::{RankParser, RankTable};
use crate::storage::{ProfileMap, ProfileStore};

/// One account's scrape result, as handed over by the collection layer.
/// Rank fields hold the raw scraped text; parsing happens here so a single
/// bad string skips one observation instead of aborting the pass.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationRecord {
    pub player: String,
    #[serde(default)]
    pub account: Option<String>,
    /// Current-season Solo/Duo rank text; absent when the scrape saw none.
    #[serde(default)]
    pub current: Option<String>,
    /// Peak rank text per split label ("S2024 S3"). Splits with no
    /// Solo/Duo data are simply absent from the map.
    #[serde(default)]
    pub split_peaks: BTreeMap<String, String>,
}

/// Outcome counters for one fold pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FoldSummary {
    pub folded: usize,
    pub skipped: usize,
}

pub fn handle_fold(input: PathBuf, store_path: Option<PathBuf>, verbose: bool) -> Result<()> {
    let records: Vec<ObservationRecord> =
        serde_json::from_str(&std::fs::read_to_string(&input)?)?;

    let table = RankTable::default();
    let store = ProfileStore::open(store_path)?;
    let mut profiles = store.load()?;

    let summary = fold_records(&records, &mut profiles, &table, verbose);

    store.save(&profiles)?;
    println!(
        "Folded {} observations ({} skipped) into {}",
        summary.folded,
        summary.skipped,
        store.path().display()
    );
    Ok(())
}

/// Fold every record into the given profile map, in input order. Account
/// scan order is what breaks score ties, so order matters.
pub fn fold_records(
    records: &[ObservationRecord],
    profiles: &mut ProfileMap,
    table: &RankTable,
    verbose: bool,
) -> FoldSummary {
    let mut parser = RankParser::new(table);
    let mut summary = FoldSummary::default();

    for record in records {
        let account = record.account.as_deref().unwrap_or(&record.player);
        let profile = profiles.entry(record.player.clone()).or_default();

        if let Some(text) = &record.current {
            match parser.parse(text) {
                Ok(rank) => {
                    if verbose {
                        println!("{account}: current {rank}");
                    }
                    profile.fold(Observation::CurrentSeason(rank), table);
                    summary.folded += 1;
                }
                Err(err) => {
                    warn!(player = %record.player, account = %account, %err,
                        "skipping unparseable current rank");
                    summary.skipped += 1;
                }
            }
        }

        for (label, text) in &record.split_peaks {
            let season: SeasonLabel = match label.parse() {
                Ok(season) => season,
                Err(err) => {
                    warn!(player = %record.player, account = %account, %err,
                        "skipping split with bad season label");
                    summary.skipped += 1;
                    continue;
                }
            };
            match parser.parse(text) {
                Ok(rank) => {
                    if verbose {
                        println!("{account}: {season} peak {rank}");
                    }
                    profile.fold(Observation::SplitPeak { season, rank }, table);
                    summary.folded += 1;
                }
                Err(err) => {
                    warn!(player = %record.player, account = %account, season = %season, %err,
                        "skipping unparseable split peak");
                    summary.skipped += 1;
                }
            }
        }
    }

    summary
}
