//! Draft point-value formula: blends current form, previous-split form,
//! and multi-season peaks into one scalar used to seed the draft.

use super::{PlayerRankProfile, SeasonLabel};
use crate::rank::RankTable;

/// Serialized stand-in for a player with no usable rank signal at all.
/// Deliberately far above any real score so sheet sorts surface it;
/// callers must treat it as missing, never as a worst-possible score.
pub const NO_DATA_SENTINEL: f64 = 9999.0;

/// Result of the point-value formula. The formula itself never fails;
/// absent data degrades to `NoData`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointValue {
    Scored(f64),
    NoData,
}

impl PointValue {
    /// Flatten for serialization, mapping `NoData` to [`NO_DATA_SENTINEL`].
    pub fn as_f64(self) -> f64 {
        match self {
            PointValue::Scored(value) => value,
            PointValue::NoData => NO_DATA_SENTINEL,
        }
    }

    pub fn scored(self) -> Option<f64> {
        match self {
            PointValue::Scored(value) => Some(value),
            PointValue::NoData => None,
        }
    }
}

/// Score components feeding the formula. `None` means the underlying rank
/// was absent or unranked; such components never enter an average as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DraftValueInputs {
    pub current_season: Option<f64>,
    pub previous_split: Option<f64>,
    pub peak: Option<f64>,
    pub past_year_avg: Option<f64>,
    pub past_2_years_avg: Option<f64>,
}

impl DraftValueInputs {
    /// Derive the formula inputs from a profile.
    ///
    /// `timeline` lists season labels newest first and fixes the windows:
    /// previous split is the newest label with a recorded peak, the
    /// one-year average spans the first 3 labels, the two-year average the
    /// first 5. An empty timeline falls back to the profile's own recorded
    /// splits, newest first.
    pub fn from_profile(
        profile: &PlayerRankProfile,
        timeline: &[SeasonLabel],
        table: &RankTable,
    ) -> Self {
        let timeline: Vec<SeasonLabel> = if timeline.is_empty() {
            profile.split_peaks.keys().rev().copied().collect()
        } else {
            timeline.to_vec()
        };

        let split_score = |season: &SeasonLabel| {
            profile
                .split_peaks
                .get(season)
                .map(|rank| table.score(rank).as_f64())
        };

        let previous_split = timeline.iter().find_map(&split_score);
        let past_year_avg = mean(timeline.iter().take(3).filter_map(&split_score));
        let past_2_years_avg = mean(timeline.iter().take(5).filter_map(&split_score));

        let current_season = profile
            .current_rank
            .map(|rank| table.score(&rank).as_f64());
        let peak = {
            let rank = profile.true_peak_rank(table);
            (!rank.is_unranked()).then(|| table.score(&rank).as_f64())
        };

        Self {
            current_season,
            previous_split,
            peak,
            past_year_avg,
            past_2_years_avg,
        }
    }
}

/// Compute one player's draft value.
///
/// When any of the three season-level history signals (previous split,
/// one-year average, two-year average) exists, current form is emphasized
/// (x1.5) and the previous split damped (/2) before averaging; a
/// brand-new player with no history is averaged unweighted. `modifier` is
/// the manual curation adjustment, applied after averaging.
pub fn point_value(inputs: &DraftValueInputs, modifier: Option<f64>) -> PointValue {
    let mut current = inputs.current_season;
    let mut previous = inputs.previous_split;

    let history_present = inputs.previous_split.is_some()
        || inputs.past_year_avg.is_some()
        || inputs.past_2_years_avg.is_some();
    if history_present {
        current = current.map(|c| c * 1.5);
        previous = previous.map(|p| p / 2.0);
    }

    let components = [
        current,
        previous,
        inputs.peak,
        inputs.past_year_avg,
        inputs.past_2_years_avg,
    ];
    match mean(components.into_iter().flatten()) {
        Some(value) => PointValue::Scored(value + modifier.unwrap_or(0.0)),
        None => PointValue::NoData,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests;
