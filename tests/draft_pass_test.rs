//! A full draft pass: fold scraped records into a store on disk, reload,
//! fold a second pass, and compute the final value rows.

use std::collections::BTreeMap;

use lepl_draft::{
    commands::{
        fold::{fold_records, ObservationRecord},
        point_values::compute_rows,
    },
    config::CurationConfig,
    storage::ProfileStore,
    RankTable, SeasonLabel,
};

fn record(
    player: &str,
    current: Option<&str>,
    split_peaks: &[(&str, &str)],
) -> ObservationRecord {
    ObservationRecord {
        player: player.to_string(),
        account: None,
        current: current.map(str::to_string),
        split_peaks: split_peaks
            .iter()
            .map(|(label, rank)| (label.to_string(), rank.to_string()))
            .collect(),
    }
}

#[test]
fn test_two_pass_draft_flow() {
    let table = RankTable::default();
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::open(Some(dir.path().join("profiles.json"))).unwrap();

    // Pass 1: main accounts.
    let mut profiles = store.load().unwrap();
    let pass1 = vec![
        record(
            "woomy",
            Some("Gold 2"),
            &[("S2024 S2", "Platinum 4"), ("S2023 S1", "Gold 1")],
        ),
        record("bandit", Some("Master 150 LP"), &[("S2024 S2", "Diamond 2 10 LP")]),
        record("newbie", None, &[]),
    ];
    let summary = fold_records(&pass1, &mut profiles, &table, false);
    assert_eq!(summary.skipped, 0);
    store.save(&profiles).unwrap();

    // Pass 2: alt accounts, reloaded from disk. The alt's unranked current
    // must not displace anything; its higher old split peak must win.
    let mut profiles = store.load().unwrap();
    let pass2 = vec![record(
        "woomy",
        Some("Unranked"),
        &[("S2023 S1", "Platinum 2")],
    )];
    fold_records(&pass2, &mut profiles, &table, false);
    store.save(&profiles).unwrap();

    let profiles = store.load().unwrap();
    let woomy = &profiles["woomy"];
    assert_eq!(woomy.current_rank.map(|r| r.to_string()), Some("Gold 2".into()));
    assert_eq!(
        woomy.split_peaks[&SeasonLabel::new(2023, 1)].to_string(),
        "Platinum 2"
    );
    assert_eq!(woomy.true_peak_rank(&table).to_string(), "Platinum 2");

    // Value pass with an explicit timeline and one curated modifier.
    let config = CurationConfig {
        seasons: vec![
            SeasonLabel::new(2024, 3),
            SeasonLabel::new(2024, 2),
            SeasonLabel::new(2024, 1),
            SeasonLabel::new(2023, 2),
            SeasonLabel::new(2023, 1),
        ],
        modifiers: BTreeMap::from([("bandit".to_string(), -2.0)]),
    };
    let rows = compute_rows(&profiles, &config);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].player, "bandit");
    assert_eq!(rows[1].player, "woomy");
    // No observations at all: sentinel row, sorted last.
    assert_eq!(rows[2].player, "newbie");
    assert_eq!(rows[2].current_rank, None);

    // bandit: current 29.5 weighted x1.5, previous split Diamond 2 (26.1)
    // halved, peak 26.1, year avg 26.1, 2-year avg 26.1, then -2.
    let expected = (29.5 * 1.5 + 26.1 / 2.0 + 26.1 + 26.1 + 26.1) / 5.0 - 2.0;
    assert!((rows[0].point_value - expected).abs() < 1e-9);
}
