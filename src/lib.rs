//! League Draft Value Engine
//!
//! A Rust library for normalizing League of Legends rank text scraped from
//! heterogeneous sources, scoring ranks on one monotonic scale, and
//! computing per-player draft point values for a fantasy-style draft.
//!
//! ## Features
//!
//! - **Rank Normalization**: One parser for every source's rank vocabulary
//!   ("Gold 2", "GOLD II", "G2", "Master 150 LP")
//! - **Rank Scoring**: Monotonic real-valued scores with documented apex
//!   tier spacing; unranked is a sentinel, never a zero-value rank
//! - **Multi-Account Aggregation**: Fold per-account observations into one
//!   profile per player with deterministic tie-breaking
//! - **Draft Point Values**: Weighted blend of current form, previous
//!   split, and multi-season peaks
//! - **Profile Storage**: JSON-backed store extended pass over pass
//!
//! ## Quick Start
//!
//! ```rust
//! use lepl_draft::{Observation, PlayerRankProfile, RankTable, Result, parse_rank};
//!
//! # fn example() -> Result<()> {
//! let table = RankTable::default();
//! let rank = parse_rank("Gold II 45 LP", &table)?;
//! assert_eq!(table.score(&rank).as_f64(), 14.45);
//!
//! let mut profile = PlayerRankProfile::new();
//! profile.fold(Observation::CurrentSeason(rank), &table);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a curation config to avoid passing it per command:
//! ```bash
//! export LEPL_DRAFT_CONFIG=~/lepl/curation.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod profile;
pub mod rank;
pub mod storage;

// Re-export commonly used types
pub use config::{CurationConfig, CONFIG_ENV_VAR};
pub use error::{DraftError, Result};
pub use profile::{point_value, DraftValueInputs, Observation, PlayerRankProfile, PointValue, SeasonLabel};
pub use rank::{parse_rank, Division, Rank, RankParser, RankScore, RankTable, Tier};
