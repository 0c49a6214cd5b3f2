//! JSON-backed profile store.
//!
//! Profiles are only ever extended between passes, so the store is a plain
//! map from player id to [`PlayerRankProfile`], written whole after each
//! pass. Writes go through a sibling temp file and a rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DraftError, Result};
use crate::profile::PlayerRankProfile;

/// All players' profiles, keyed by opaque player id.
pub type ProfileMap = BTreeMap<String, PlayerRankProfile>;

pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Open a store at `path`, or at the default location
    /// (`<data_dir>/lepl-draft/profiles.json`) when none is given. The
    /// file itself is created on the first save.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| DraftError::Storage {
            message: "could not determine data directory".to_string(),
        })?;
        Ok(base.join("lepl-draft").join("profiles.json"))
    }

    /// Load every stored profile; a store that does not exist yet is an
    /// empty map, not an error.
    pub fn load(&self) -> Result<ProfileMap> {
        if !self.path.exists() {
            return Ok(ProfileMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, profiles: &ProfileMap) -> Result<()> {
        let contents = serde_json::to_string_pretty(profiles)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
