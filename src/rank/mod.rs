//! Canonical rank model: tiers, divisions, and the `Rank` value type.
//!
//! Every scraped source renders ranks differently ("Gold 2", "GOLD II",
//! "G2", "Master 150 LP"); this module is the single representation they
//! all normalize into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

pub mod parser;
pub mod score;
pub mod vocabulary;

pub use parser::{parse_rank, RankParser};
pub use score::RankScore;
pub use vocabulary::RankTable;

/// Major rank bands in ladder order.
///
/// `Unranked` sorts below every real tier so the derived ordering matches
/// the score ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Tier {
    Unranked,
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    /// All ranked tiers, ladder order (excludes `Unranked`).
    pub const RANKED: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// Master, Grandmaster, and Challenger have no divisions; players are
    /// ordered purely by LP within the tier.
    pub fn is_apex(self) -> bool {
        matches!(self, Tier::Master | Tier::Grandmaster | Tier::Challenger)
    }

    /// True for Iron..Diamond, the tiers subdivided into divisions 1-4.
    pub fn has_divisions(self) -> bool {
        !self.is_apex() && self != Tier::Unranked
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Unranked => "Unranked",
            Tier::Iron => "Iron",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Emerald => "Emerald",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
            Tier::Grandmaster => "Grandmaster",
            Tier::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sub-rank within a tier; 1 is the highest, 4 the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Division(u8);

impl Division {
    pub fn new(value: u8) -> Result<Self, DraftError> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DraftError::InvalidDivision { value })
        }
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One normalized rank observation.
///
/// `division` is `None` for apex tiers and `Unranked`, and also for the
/// documented "tier only" case where scraped text carries no division at
/// all; the scorer resolves that case to the tier's midpoint fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank {
    pub tier: Tier,
    pub division: Option<Division>,
    pub league_points: u32,
}

impl Rank {
    pub const UNRANKED: Rank = Rank {
        tier: Tier::Unranked,
        division: None,
        league_points: 0,
    };

    /// Build a rank, dropping a division on tiers that cannot carry one.
    pub fn new(tier: Tier, division: Option<Division>, league_points: u32) -> Self {
        let division = if tier.has_divisions() { division } else { None };
        Self {
            tier,
            division,
            league_points,
        }
    }

    pub fn is_unranked(&self) -> bool {
        self.tier == Tier::Unranked
    }
}

impl fmt::Display for Rank {
    /// Canonical text form: "Gold 2", "Gold 2 37 LP", "Gold" (division
    /// unknown), "Master 150 LP", "Unranked". Re-parsing this output yields
    /// an equal `Rank`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unranked() {
            return write!(f, "Unranked");
        }
        if self.tier.is_apex() {
            return write!(f, "{} {} LP", self.tier, self.league_points);
        }
        match (self.division, self.league_points) {
            (Some(div), 0) => write!(f, "{} {}", self.tier, div),
            (Some(div), lp) => write!(f, "{} {} {} LP", self.tier, div, lp),
            (None, 0) => write!(f, "{}", self.tier),
            (None, lp) => write!(f, "{} {} LP", self.tier, lp),
        }
    }
}

impl FromStr for Rank {
    type Err = DraftError;

    /// Parse with the standard vocabulary. Hot paths should hold a
    /// [`RankParser`] instead of building a table per call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rank(s, &RankTable::default())
    }
}
