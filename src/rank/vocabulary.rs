//! Shared rank vocabulary: token lookup and score arithmetic.
//!
//! One injected table replaces the per-scraper rank dictionaries the data
//! sources each maintain in their own format. Consumers take a
//! `&RankTable` parameter, so tests can substitute alternate vocabularies.

use std::collections::HashMap;

use super::score::RankScore;
use super::{Division, Rank, Tier};
use crate::error::{DraftError, Result};

/// Midpoint division offset, between division 3 (1.0) and division 2 (2.0).
/// Used when scraped text names a tier with no division at all.
const DIVISION_FALLBACK_OFFSET: f64 = 1.5;

/// Maps every textual tier/division token to its canonical meaning and
/// holds the score bases for each tier.
#[derive(Debug, Clone)]
pub struct RankTable {
    tokens: HashMap<String, (Tier, Option<Division>)>,
}

impl Default for RankTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RankTable {
    /// Build the standard vocabulary: full tier names, apex abbreviations
    /// (M/GM/C), and compact letter+division forms (I4, G2, D1, ...).
    pub fn standard() -> Self {
        let mut tokens: HashMap<String, (Tier, Option<Division>)> = HashMap::new();

        for tier in Tier::RANKED {
            tokens.insert(tier.name().to_lowercase(), (tier, None));
        }
        tokens.insert("grand master".to_string(), (Tier::Grandmaster, None));
        tokens.insert("unranked".to_string(), (Tier::Unranked, None));

        tokens.insert("m".to_string(), (Tier::Master, None));
        tokens.insert("gm".to_string(), (Tier::Grandmaster, None));
        tokens.insert("c".to_string(), (Tier::Challenger, None));

        // Compact forms: one tier letter plus an Arabic division.
        let letters = [
            (Tier::Iron, 'i'),
            (Tier::Bronze, 'b'),
            (Tier::Silver, 's'),
            (Tier::Gold, 'g'),
            (Tier::Platinum, 'p'),
            (Tier::Emerald, 'e'),
            (Tier::Diamond, 'd'),
        ];
        for (tier, letter) in letters {
            for div in 1..=4u8 {
                // Division bounds are static here, so construction cannot fail.
                if let Ok(division) = Division::new(div) {
                    tokens.insert(format!("{letter}{div}"), (tier, Some(division)));
                }
            }
        }

        Self { tokens }
    }

    /// Look up one normalized (lowercased, trimmed) token.
    pub fn lookup(&self, token: &str) -> Option<(Tier, Option<Division>)> {
        self.tokens.get(token).copied()
    }

    /// Like [`lookup`](Self::lookup) but failing with `UnknownRankToken`,
    /// for callers that must surface bad vocabulary rather than fall back.
    pub fn require(&self, token: &str) -> Result<(Tier, Option<Division>)> {
        self.lookup(token).ok_or_else(|| DraftError::UnknownRankToken {
            token: token.to_string(),
        })
    }

    /// Base score of a tier, strictly increasing in ladder order.
    ///
    /// Apex bases are spaced >= 6 apart so no LP total of a lower apex tier
    /// can cross the base of the next one.
    pub fn tier_base(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Unranked => RankScore::UNRANKED.as_f64(),
            Tier::Iron => 0.0,
            Tier::Bronze => 4.0,
            Tier::Silver => 8.0,
            Tier::Gold => 12.0,
            Tier::Platinum => 16.0,
            Tier::Emerald => 20.0,
            Tier::Diamond => 24.0,
            Tier::Master => 28.0,
            Tier::Grandmaster => 36.0,
            Tier::Challenger => 42.0,
        }
    }

    /// Offset within a tier: division 4 -> 0, 3 -> 1, 2 -> 2, 1 -> 3.
    pub fn division_offset(&self, division: Division) -> f64 {
        f64::from(4 - division.as_u8())
    }

    /// Average score for a divisioned tier whose division is unknown
    /// ("Gold" with nothing else). Sits between division 3 and division 2.
    pub fn tier_average(&self, tier: Tier) -> f64 {
        debug_assert!(tier.has_divisions());
        self.tier_base(tier) + DIVISION_FALLBACK_OFFSET
    }

    /// Score a rank. Total over the whole `Rank` domain; `Unranked` maps to
    /// the sentinel, never to a zero-value competitive score.
    pub fn score(&self, rank: &Rank) -> RankScore {
        if rank.is_unranked() {
            return RankScore::UNRANKED;
        }
        let lp = f64::from(rank.league_points) / 100.0;
        let base = match rank.division {
            Some(division) => self.tier_base(rank.tier) + self.division_offset(division),
            None if rank.tier.is_apex() => self.tier_base(rank.tier),
            None => self.tier_average(rank.tier),
        };
        RankScore(base + lp)
    }
}
