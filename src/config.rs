//! Curation config: the season timeline and manual point-value modifiers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::SeasonLabel;

/// Points at a config file when `--config` is not passed.
pub const CONFIG_ENV_VAR: &str = "LEPL_DRAFT_CONFIG";

/// Manually curated inputs to the point-value pass.
///
/// ```json
/// {
///   "seasons": ["S2024 S3", "S2024 S2", "S2024 S1", "S2023 S2", "S2023 S1"],
///   "modifiers": { "honeynutwoomy": -2.0 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurationConfig {
    /// Season labels newest first; fixes the previous-split scan order and
    /// the one-year/two-year average windows.
    #[serde(default)]
    pub seasons: Vec<SeasonLabel>,
    /// Fixed additive point-value modifier per player id.
    #[serde(default)]
    pub modifiers: BTreeMap<String, f64>,
}

impl CurationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from an explicit path, else from `LEPL_DRAFT_CONFIG`, else
    /// fall back to the empty config (no timeline, no modifiers).
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let path = explicit.or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn modifier_for(&self, player: &str) -> Option<f64> {
        self.modifiers.get(player).copied()
    }
}
