//! Error types for the scrape pipeline

use page_navigator::{NavigationError, QueryError};
use thiserror::Error;

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that abort a scrape run.
///
/// No stage retries and the orchestrator catches nothing: the first error
/// surfaces at the top level with the stage that raised it.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A page failed to load, in whichever stage was navigating
    #[error("Navigation failed for {url}")]
    Navigation {
        url: String,
        #[source]
        source: NavigationError,
    },

    /// Team-index extraction failure. Propagates untagged: a broken index
    /// page means the source has structurally changed.
    #[error(transparent)]
    Parse(#[from] QueryError),

    /// Latest-season resolution failed on a franchise page
    #[error("Error extracting latest season")]
    LatestSeason(#[source] QueryError),

    /// Roster extraction failed on a season page
    #[error("Error extracting players")]
    Roster(#[source] QueryError),

    /// Career-stats extraction failed on a player page
    #[error("Error extracting player career stats")]
    CareerStats(#[source] QueryError),

    /// Output directory or artifact write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages_match_surface_contract() {
        let season = ScrapeError::LatestSeason(QueryError::NoMatch { selector: "x".into() });
        let roster = ScrapeError::Roster(QueryError::NoMatch { selector: "x".into() });
        let stats = ScrapeError::CareerStats(QueryError::NoMatch { selector: "x".into() });

        assert_eq!(season.to_string(), "Error extracting latest season");
        assert_eq!(roster.to_string(), "Error extracting players");
        assert_eq!(stats.to_string(), "Error extracting player career stats");
    }

    #[test]
    fn test_stage_errors_keep_their_cause() {
        use std::error::Error as _;

        let err = ScrapeError::Roster(QueryError::NoMatch { selector: "#roster".into() });
        let source = err.source().expect("cause preserved");
        assert!(source.to_string().contains("#roster"));
    }
}
