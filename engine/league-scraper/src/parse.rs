//! DOM parsing for each scrape stage.
//!
//! These functions are pure: they read an already-rendered [`Page`] and
//! return owned records, so they can be exercised against fixture HTML
//! without a browser.

use page_navigator::{attr, element_text, Page, QueryError};
use scraper::Selector;
use url::Url;

use crate::types::{Player, SeasonStat, Team};

/// Active-franchise anchors in the league index table
const TEAM_INDEX_ANCHORS: &str = "#teams_active > tbody > tr > th > a";
/// Most recent season row on a franchise page. The season table is
/// reverse-chronological, so row 0 is the latest.
const LATEST_SEASON_ANCHOR: &str = "tbody > tr[data-row=\"0\"] > th > a";
/// Player-name cells in a season roster table
const ROSTER_ANCHORS: &str = "#roster > tbody > tr > td[data-stat=\"player\"] > a";
/// Career per-game table header cells
const PER_GAME_HEADERS: &str = "#per_game > thead > tr > th";
/// Career per-game table body rows
const PER_GAME_ROWS: &str = "#per_game > tbody > tr";

/// Teams from the league index page, in table row order
pub fn team_index(page: &Page) -> Result<Vec<Team>, QueryError> {
    page.query_all(TEAM_INDEX_ANCHORS, |a| {
        Team::new(element_text(a), resolve_href(page.url(), attr(a, "href")))
    })
}

/// Roster URL of the most recent season on a franchise page
pub fn latest_season_url(page: &Page) -> Result<String, QueryError> {
    page.query_single(LATEST_SEASON_ANCHOR, |a| resolve_href(page.url(), attr(a, "href")))
}

/// Roster entries from a season page, in table row order. Career stats are
/// attached later by the pipeline.
pub fn roster(page: &Page) -> Result<Vec<Player>, QueryError> {
    page.query_all(ROSTER_ANCHORS, |a| {
        Player::new(element_text(a), resolve_href(page.url(), attr(a, "href")))
    })
}

/// Season-by-season career rows from a player page, oldest first.
///
/// The header row is read once and its labels are zipped positionally
/// against every body row's cells. A row with fewer cells than headers
/// yields a mapping missing the trailing keys; extra cells are dropped.
/// Neither case is an error.
pub fn career_stats(page: &Page) -> Result<Vec<SeasonStat>, QueryError> {
    let headers = page.query_all(PER_GAME_HEADERS, element_text)?;

    let cells = Selector::parse("th, td")
        .map_err(|_| QueryError::InvalidSelector { selector: "th, td".to_string() })?;
    let rows = page.query_all(PER_GAME_ROWS, |row| {
        row.select(&cells).map(element_text).collect::<Vec<_>>()
    })?;

    Ok(rows
        .into_iter()
        .map(|row| headers.iter().cloned().zip(row).collect::<SeasonStat>())
        .collect())
}

/// Resolve an anchor's `href` against the page it appeared on. The source
/// serves relative links; artifacts store absolute URLs. Values that fail
/// to resolve are kept verbatim.
fn resolve_href(base: &str, href: Option<String>) -> String {
    let raw = href.unwrap_or_default();
    if raw.is_empty() || raw.starts_with("http://") || raw.starts_with("https://") {
        return raw;
    }

    match Url::parse(base).and_then(|b| b.join(&raw)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => raw,
    }
}
