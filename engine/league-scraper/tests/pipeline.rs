//! End-to-end pipeline tests against a fake navigator serving fixture pages

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use league_scraper::{JsonDirWriter, LeagueScraper, ScrapeError, ScraperConfig};
use page_navigator::{NavigationError, Page, PageNavigator, WaitPolicy};

const INDEX_URL: &str = "https://league.test/teams/";

/// Serves canned pages and records every navigation with its timestamp
struct FakeNavigator {
    pages: HashMap<String, String>,
    visits: Mutex<Vec<(String, Instant)>>,
}

impl FakeNavigator {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages.iter().map(|(u, h)| (u.to_string(), h.to_string())).collect(),
            visits: Mutex::new(Vec::new()),
        }
    }

    fn visits(&self) -> Vec<(String, Instant)> {
        self.visits.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageNavigator for FakeNavigator {
    async fn navigate(&self, url: &str, _wait: WaitPolicy) -> page_navigator::Result<Page> {
        self.visits.lock().unwrap().push((url.to_string(), Instant::now()));
        match self.pages.get(url) {
            Some(html) => Ok(Page::new(url, html.clone())),
            None => Err(NavigationError::Api {
                status: 404,
                message: format!("no fixture for {url}"),
            }),
        }
    }
}

fn config(output_dir: &std::path::Path, pace_ms: u64) -> ScraperConfig {
    ScraperConfig {
        league_index_url: INDEX_URL.to_string(),
        output_dir: output_dir.to_path_buf(),
        pace_ms,
    }
}

const LAKERS_FRANCHISE: &str = r#"
    <table id="seasons"><tbody>
        <tr data-row="0"><th><a href="/teams/LAL/2024.html">2023-24</a></th></tr>
        <tr data-row="1"><th><a href="/teams/LAL/2023.html">2022-23</a></th></tr>
    </tbody></table>
"#;

const LAKERS_ROSTER: &str = r#"
    <table id="roster"><tbody>
        <tr><td data-stat="player"><a href="/players/a/playera01.html">A</a></td></tr>
    </tbody></table>
"#;

const PLAYER_A_PAGE: &str = r#"
    <table id="per_game">
        <thead><tr><th>Season</th><th>PTS</th></tr></thead>
        <tbody><tr><th>2023</th><td>20.1</td></tr></tbody>
    </table>
"#;

/// Index, franchise, roster, and player pages for a one-team league
fn lakers_fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            INDEX_URL,
            r#"<table id="teams_active"><tbody>
                <tr><th><a href="/teams/LAL/">Lakers</a></th></tr>
            </tbody></table>"#,
        ),
        ("https://league.test/teams/LAL/", LAKERS_FRANCHISE),
        ("https://league.test/teams/LAL/2024.html", LAKERS_ROSTER),
        ("https://league.test/players/a/playera01.html", PLAYER_A_PAGE),
    ]
}

#[tokio::test]
async fn test_end_to_end_writes_one_artifact_per_team() {
    let tmp = tempfile::tempdir().unwrap();
    let navigator = FakeNavigator::new(&lakers_fixtures());
    let scraper = LeagueScraper::new(navigator, config(tmp.path(), 1));
    let writer = JsonDirWriter::new(tmp.path());

    let summary = scraper.run(&writer).await.unwrap();

    assert_eq!(summary.teams, 1);
    assert_eq!(summary.players, 1);
    assert_eq!(summary.written, vec![tmp.path().join("Lakers.json")]);

    let raw = std::fs::read_to_string(tmp.path().join("Lakers.json")).unwrap();
    let artifact: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        artifact,
        serde_json::json!({
            "name": "Lakers",
            "url": "https://league.test/teams/LAL/",
            "players": [{
                "name": "A",
                "url": "https://league.test/players/a/playera01.html",
                "careerStats": [{"PTS": "20.1", "Season": "2023"}]
            }]
        })
    );
}

#[tokio::test]
async fn test_players_keep_roster_order_in_artifact() {
    let roster = r#"
        <table id="roster"><tbody>
            <tr><td data-stat="player"><a href="/players/b/b01.html">B</a></td></tr>
            <tr><td data-stat="player"><a href="/players/a/a01.html">A</a></td></tr>
        </tbody></table>
    "#;
    let player_page = r#"
        <table id="per_game">
            <thead><tr><th>Season</th></tr></thead>
            <tbody><tr><th>2023</th></tr></tbody>
        </table>
    "#;
    let mut fixtures = lakers_fixtures();
    fixtures[2] = ("https://league.test/teams/LAL/2024.html", roster);
    fixtures.push(("https://league.test/players/b/b01.html", player_page));
    fixtures.push(("https://league.test/players/a/a01.html", player_page));

    let tmp = tempfile::tempdir().unwrap();
    let navigator = FakeNavigator::new(&fixtures);
    let scraper = LeagueScraper::new(navigator, config(tmp.path(), 1));
    let writer = JsonDirWriter::new(tmp.path());

    scraper.run(&writer).await.unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("Lakers.json")).unwrap();
    let artifact: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let names: Vec<_> = artifact["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[tokio::test]
async fn test_failed_team_writes_nothing_and_keeps_prior_artifacts() {
    // Two teams; the second team's roster page is missing, so its roster
    // navigation fails after the first team has already been written.
    let index = r#"<table id="teams_active"><tbody>
        <tr><th><a href="/teams/LAL/">Lakers</a></th></tr>
        <tr><th><a href="/teams/BOS/">Celtics</a></th></tr>
    </tbody></table>"#;
    let celtics_franchise = r#"
        <table id="seasons"><tbody>
            <tr data-row="0"><th><a href="/teams/BOS/2024.html">2023-24</a></th></tr>
        </tbody></table>
    "#;
    let mut fixtures = lakers_fixtures();
    fixtures[0] = (INDEX_URL, index);
    fixtures.push(("https://league.test/teams/BOS/", celtics_franchise));
    // no fixture for https://league.test/teams/BOS/2024.html

    let tmp = tempfile::tempdir().unwrap();
    let navigator = FakeNavigator::new(&fixtures);
    let scraper = LeagueScraper::new(navigator, config(tmp.path(), 1));
    let writer = JsonDirWriter::new(tmp.path());

    let err = scraper.run(&writer).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Navigation { .. }));

    assert!(tmp.path().join("Lakers.json").exists());
    assert!(!tmp.path().join("Celtics.json").exists());
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn test_missing_latest_season_row_surfaces_stage_message() {
    let mut fixtures = lakers_fixtures();
    fixtures[1] = ("https://league.test/teams/LAL/", "<table><tbody></tbody></table>");

    let tmp = tempfile::tempdir().unwrap();
    let navigator = FakeNavigator::new(&fixtures);
    let scraper = LeagueScraper::new(navigator, config(tmp.path(), 1));
    let writer = JsonDirWriter::new(tmp.path());

    let err = scraper.run(&writer).await.unwrap_err();
    assert!(matches!(err, ScrapeError::LatestSeason(_)));
    assert_eq!(err.to_string(), "Error extracting latest season");
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_every_navigation_is_followed_by_one_pause() {
    const PACE_MS: u64 = 40;

    let tmp = tempfile::tempdir().unwrap();
    let navigator = FakeNavigator::new(&lakers_fixtures());
    let scraper = LeagueScraper::new(navigator, config(tmp.path(), PACE_MS));
    let writer = JsonDirWriter::new(tmp.path());

    let started = Instant::now();
    let summary = scraper.run(&writer).await.unwrap();
    let elapsed = started.elapsed();

    // index + franchise + roster + one player page
    let visits = scraper.navigator().visits();
    assert_eq!(visits.len(), 4);

    let pace = Duration::from_millis(PACE_MS);
    for pair in visits.windows(2) {
        let gap = pair[1].1.duration_since(pair[0].1);
        assert!(gap >= pace, "navigations only {}ms apart", gap.as_millis());
    }

    // one pause per navigation, including after the last one
    assert!(elapsed >= pace * 4);
    assert_eq!(summary.teams, 1);
}
