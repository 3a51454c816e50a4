//! Per-team artifact persistence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::Team;

/// Storage seam for completed teams. The pipeline writes only through this
/// trait, so tests can capture artifacts wherever they like.
pub trait TeamWriter {
    /// Persist one fully assembled team and return the artifact path
    fn write_team(&self, team: &Team) -> Result<PathBuf>;
}

/// Writes `<dir>/<team name>.json`, pretty-printed, overwriting any
/// previous artifact of the same name
pub struct JsonDirWriter {
    dir: PathBuf,
}

impl JsonDirWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TeamWriter for JsonDirWriter {
    fn write_team(&self, team: &Team) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(format!("{}.json", team.name));
        let json = serde_json::to_string_pretty(team)?;
        fs::write(&path, json)?;

        info!("Saved {} players to {}", team.players.len(), path.display());
        Ok(path)
    }
}
