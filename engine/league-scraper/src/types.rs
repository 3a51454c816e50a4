use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a player's career per-game table: header label → cell text.
///
/// The key set comes from the table's own header row, so it varies by era
/// and table revision. Values are kept as rendered; nothing is coerced.
pub type SeasonStat = BTreeMap<String, String>;

/// A franchise from the league index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Franchise name as rendered in the index table
    pub name: String,
    /// Franchise page URL
    pub url: String,
    /// Latest-season roster, populated once every player's stats are in
    pub players: Vec<Player>,
}

/// A rostered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Player name as rendered in the roster table
    pub name: String,
    /// Player profile URL
    pub url: String,
    /// Season-by-season per-game averages, oldest first
    pub career_stats: Vec<SeasonStat>,
}

impl Team {
    /// A team fresh off the index page, roster not yet collected
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), players: Vec::new() }
    }
}

impl Player {
    /// A roster entry before its career stats are attached
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), career_stats: Vec::new() }
    }
}

/// What a completed run did
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Teams fully extracted and written
    pub teams: usize,
    /// Players whose career stats were collected
    pub players: usize,
    /// Artifact paths, one per team, in extraction order
    pub written: Vec<PathBuf>,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub finished_at: DateTime<Utc>,
}
