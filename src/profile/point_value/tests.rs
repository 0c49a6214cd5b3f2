use super::*;
use crate::profile::Observation;
use crate::rank::{Division, Rank, Tier};

fn table() -> RankTable {
    RankTable::standard()
}

fn rank(tier: Tier, division: u8, lp: u32) -> Rank {
    Rank::new(tier, Division::new(division).ok(), lp)
}

fn season(year: u16, split: u8) -> SeasonLabel {
    SeasonLabel::new(year, split)
}

#[test]
fn test_reweighting_with_history_present() {
    // current = Gold 2 (14.0), previous split = Platinum 4 (16.0), nothing
    // else: reweight applies, mean of 21.0 and 8.0 = 14.5.
    let inputs = DraftValueInputs {
        current_season: Some(14.0),
        previous_split: Some(16.0),
        ..Default::default()
    };
    assert_eq!(point_value(&inputs, None), PointValue::Scored(14.5));
}

#[test]
fn test_no_history_skips_reweighting() {
    // Brand-new player in placements: current form only, unweighted.
    let inputs = DraftValueInputs {
        current_season: Some(14.0),
        ..Default::default()
    };
    assert_eq!(point_value(&inputs, None), PointValue::Scored(14.0));

    // Peak alone is not a season-level history signal either.
    let inputs = DraftValueInputs {
        current_season: Some(14.0),
        peak: Some(20.0),
        ..Default::default()
    };
    assert_eq!(point_value(&inputs, None), PointValue::Scored(17.0));
}

#[test]
fn test_year_average_alone_triggers_reweighting() {
    let inputs = DraftValueInputs {
        current_season: Some(10.0),
        past_year_avg: Some(12.0),
        ..Default::default()
    };
    // (10 * 1.5 + 12) / 2 = 13.5
    assert_eq!(point_value(&inputs, None), PointValue::Scored(13.5));
}

#[test]
fn test_absent_components_never_average_as_zero() {
    let inputs = DraftValueInputs {
        past_2_years_avg: Some(18.0),
        ..Default::default()
    };
    assert_eq!(point_value(&inputs, None), PointValue::Scored(18.0));
}

#[test]
fn test_no_signals_returns_no_data() {
    let value = point_value(&DraftValueInputs::default(), None);
    assert_eq!(value, PointValue::NoData);
    assert_eq!(value.as_f64(), NO_DATA_SENTINEL);
    assert_eq!(value.scored(), None);
    assert!(value.as_f64().is_finite());
}

#[test]
fn test_modifier_applied_after_averaging() {
    let inputs = DraftValueInputs {
        current_season: Some(14.0),
        previous_split: Some(16.0),
        ..Default::default()
    };
    assert_eq!(point_value(&inputs, Some(-2.0)), PointValue::Scored(12.5));

    // A modifier cannot conjure a value out of no data.
    assert_eq!(point_value(&DraftValueInputs::default(), Some(-2.0)), PointValue::NoData);
}

#[test]
fn test_inputs_from_profile_windows() {
    let table = table();
    let timeline = [
        season(2024, 3),
        season(2024, 2),
        season(2024, 1),
        season(2023, 2),
        season(2023, 1),
    ];

    let mut profile = PlayerRankProfile::new();
    profile.fold(Observation::CurrentSeason(rank(Tier::Gold, 2, 0)), &table);
    // No data for S2024 S3; previous split must skip to S2024 S2.
    profile.fold(
        Observation::SplitPeak { season: season(2024, 2), rank: rank(Tier::Platinum, 4, 0) },
        &table,
    );
    profile.fold(
        Observation::SplitPeak { season: season(2023, 1), rank: rank(Tier::Emerald, 4, 0) },
        &table,
    );

    let inputs = DraftValueInputs::from_profile(&profile, &timeline, &table);
    assert_eq!(inputs.current_season, Some(14.0));
    assert_eq!(inputs.previous_split, Some(16.0));
    // Peak is the all-time best split: Emerald 4 = 20.0.
    assert_eq!(inputs.peak, Some(20.0));
    // One-year window (first 3 labels) only holds S2024 S2.
    assert_eq!(inputs.past_year_avg, Some(16.0));
    // Two-year window averages S2024 S2 and S2023 S1.
    assert_eq!(inputs.past_2_years_avg, Some(18.0));
}

#[test]
fn test_inputs_from_profile_empty_timeline_uses_recorded_splits() {
    let table = table();
    let mut profile = PlayerRankProfile::new();
    profile.fold(
        Observation::SplitPeak { season: season(2023, 1), rank: rank(Tier::Silver, 2, 0) },
        &table,
    );
    profile.fold(
        Observation::SplitPeak { season: season(2024, 1), rank: rank(Tier::Gold, 4, 0) },
        &table,
    );

    let inputs = DraftValueInputs::from_profile(&profile, &[], &table);
    // Newest recorded split first.
    assert_eq!(inputs.previous_split, Some(12.0));
    assert_eq!(inputs.past_year_avg, Some(11.0));
}

#[test]
fn test_inputs_from_empty_profile_are_all_absent() {
    let table = table();
    let profile = PlayerRankProfile::new();
    let inputs = DraftValueInputs::from_profile(&profile, &[], &table);
    assert_eq!(inputs, DraftValueInputs::default());
    assert_eq!(point_value(&inputs, None), PointValue::NoData);
}
