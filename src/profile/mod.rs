//! Player rank profiles: folding per-account scrape observations into one
//! aggregate per player.
//!
//! A profile is owned exclusively by the aggregation pass building it and
//! is only ever extended by later passes, never rolled back. All rank
//! comparisons go through [`RankTable::score`]; ties keep the value that
//! was observed first, so replays are deterministic.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::DraftError;
use crate::rank::{Rank, RankTable};

pub mod point_value;

pub use point_value::{point_value, DraftValueInputs, PointValue};

/// A named competitive split, e.g. "S2024 S3". Ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonLabel {
    pub year: u16,
    pub split: u8,
}

impl SeasonLabel {
    pub fn new(year: u16, split: u8) -> Self {
        Self { year, split }
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{} S{}", self.year, self.split)
    }
}

impl FromStr for SeasonLabel {
    type Err = DraftError;

    /// Accepts "S2024 S3" and sheet-style column names like
    /// "S2024 S3 Peak" (trailing "Peak" is dropped).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DraftError::InvalidSeasonLabel {
            label: s.to_string(),
        };
        let mut tokens = s.split_whitespace();
        let year_tok = tokens.next().ok_or_else(invalid)?;
        let split_tok = tokens.next().ok_or_else(invalid)?;
        if let Some(trailing) = tokens.next() {
            if !trailing.eq_ignore_ascii_case("peak") || tokens.next().is_some() {
                return Err(invalid());
            }
        }

        let year = year_tok
            .strip_prefix(['S', 's'])
            .and_then(|y| y.parse::<u16>().ok())
            .ok_or_else(invalid)?;
        let split = split_tok
            .strip_prefix(['S', 's'])
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        Ok(Self { year, split })
    }
}

// Serialized as the display string so it can key JSON maps.
impl Serialize for SeasonLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeasonLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One scraped data point, tagged by what it describes.
///
/// The tag travels with the value instead of living in shared mutable
/// "profile type" flags on the collection layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// An account's current-season Solo/Duo rank.
    CurrentSeason(Rank),
    /// The peak rank one account reached during a named split. Splits with
    /// no Solo/Duo data at all produce no observation; absence is
    /// distinguishable from "observed but low".
    SplitPeak { season: SeasonLabel, rank: Rank },
}

/// Aggregate rank state for one player across all linked accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRankProfile {
    /// Best current-season rank across accounts; unset until some account
    /// contributes a ranked observation.
    pub current_rank: Option<Rank>,
    /// Highest current-season rank ever observed, across all passes.
    /// Monotonic: only ever replaced by a strictly higher score.
    pub peak_current_season_rank: Option<Rank>,
    /// Best recorded peak per split, across accounts.
    #[serde(default)]
    pub split_peaks: BTreeMap<SeasonLabel, Rank>,
}

impl PlayerRankProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the profile.
    ///
    /// Unranked observations carry no signal: they never set a field and
    /// never displace a ranked value (an unranked alt must not erase a
    /// main's rank). Never fails; bad text is rejected earlier, at parse.
    pub fn fold(&mut self, observation: Observation, table: &RankTable) {
        match observation {
            Observation::CurrentSeason(rank) => {
                if rank.is_unranked() {
                    debug!("account contributed no current-season signal");
                    return;
                }
                replace_if_stronger(&mut self.current_rank, rank, table);
                replace_if_stronger(&mut self.peak_current_season_rank, rank, table);
            }
            Observation::SplitPeak { season, rank } => {
                if rank.is_unranked() {
                    debug!(season = %season, "skipping unranked split peak");
                    return;
                }
                match self.split_peaks.entry(season) {
                    Entry::Vacant(slot) => {
                        slot.insert(rank);
                    }
                    // Ties keep the first encountered (account scan order).
                    Entry::Occupied(mut slot) => {
                        if table.score(&rank) > table.score(slot.get()) {
                            slot.insert(rank);
                        }
                    }
                }
            }
        }
    }

    /// All-time peak, recomputed fresh from the full `split_peaks` map so
    /// it can never regress through incremental bookkeeping. Empty map
    /// means `Unranked`.
    pub fn true_peak_rank(&self, table: &RankTable) -> Rank {
        let mut best = Rank::UNRANKED;
        for rank in self.split_peaks.values() {
            if table.score(rank) > table.score(&best) {
                best = *rank;
            }
        }
        best
    }
}

fn replace_if_stronger(slot: &mut Option<Rank>, rank: Rank, table: &RankTable) {
    let stronger = match slot {
        None => true,
        Some(existing) => table.score(&rank) > table.score(existing),
    };
    if stronger {
        *slot = Some(rank);
    }
}
