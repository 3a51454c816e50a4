use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default landing page for the league's franchise index
pub const DEFAULT_LEAGUE_INDEX_URL: &str = "https://www.basketball-reference.com/teams/";

/// Default pause between consecutive navigations, in milliseconds. Chosen
/// empirically to stay under the source site's anti-scraping threshold.
pub const DEFAULT_PACE_MS: u64 = 3_500;

/// Configuration for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// League team-index URL the run starts from
    pub league_index_url: String,

    /// Directory the per-team artifacts are written to
    pub output_dir: PathBuf,

    /// Fixed pause between consecutive navigations, in milliseconds
    pub pace_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            league_index_url: DEFAULT_LEAGUE_INDEX_URL.to_string(),
            output_dir: PathBuf::from("output"),
            pace_ms: DEFAULT_PACE_MS,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("LEAGUE_INDEX_URL") {
            config.league_index_url = url;
        }
        if let Ok(dir) = std::env::var("SCRAPER_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(ms) = std::env::var("SCRAPER_PACE_MS") {
            config.pace_ms = ms.parse().unwrap_or(DEFAULT_PACE_MS);
        }

        config
    }

    /// Pace interval as a `Duration`
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pace_interval() {
        let config = ScraperConfig::default();
        assert_eq!(config.pace(), Duration::from_millis(DEFAULT_PACE_MS));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }
}
