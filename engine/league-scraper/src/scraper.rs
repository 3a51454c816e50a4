//! Stage extractors and the pipeline orchestrator

use page_navigator::{Page, PageNavigator, WaitPolicy};
use tracing::{error, info};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::output::TeamWriter;
use crate::pacer::RateLimiter;
use crate::parse;
use crate::types::{Player, RunSummary, SeasonStat, Team};

/// Drives the full extraction sequence over one shared navigator session.
///
/// Each stage method performs exactly one navigation and ends with one
/// pacing pause, so consecutive navigations are always separated by the
/// configured interval. Everything runs sequentially: one page in flight,
/// no parallel teams, no parallel players.
pub struct LeagueScraper<N: PageNavigator> {
    navigator: N,
    limiter: RateLimiter,
    config: ScraperConfig,
}

impl<N: PageNavigator> LeagueScraper<N> {
    pub fn new(navigator: N, config: ScraperConfig) -> Self {
        let limiter = RateLimiter::new(config.pace());
        Self { navigator, limiter, config }
    }

    /// The shared navigator session
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    async fn goto(&self, url: &str) -> Result<Page> {
        self.navigator.navigate(url, WaitPolicy::DomContentLoaded).await.map_err(|source| {
            error!("Navigation failed for {}: {}", url, source);
            ScrapeError::Navigation { url: url.to_string(), source }
        })
    }

    /// All active teams from the league index, in table order.
    ///
    /// No stage tag on failure: a broken index page means the source has
    /// structurally changed, and the raw error says more than a label.
    pub async fn extract_teams(&self) -> Result<Vec<Team>> {
        let page = self.goto(&self.config.league_index_url).await?;
        let teams = parse::team_index(&page)?;
        self.limiter.pace().await;
        Ok(teams)
    }

    /// Roster URL of the most recent season on a franchise page
    pub async fn extract_latest_season_url(&self, team_url: &str) -> Result<String> {
        let page = self.goto(team_url).await?;
        let season_url = parse::latest_season_url(&page).map_err(|e| {
            error!("Failed to resolve latest season on {}: {}", team_url, e);
            ScrapeError::LatestSeason(e)
        })?;
        self.limiter.pace().await;
        Ok(season_url)
    }

    /// Roster entries for a season page, career stats not yet attached
    pub async fn extract_players(&self, season_url: &str) -> Result<Vec<Player>> {
        let page = self.goto(season_url).await?;
        let players = parse::roster(&page).map_err(|e| {
            error!("Failed to extract roster on {}: {}", season_url, e);
            ScrapeError::Roster(e)
        })?;
        self.limiter.pace().await;
        Ok(players)
    }

    /// Season-by-season career rows for one player
    pub async fn extract_career_stats(&self, player_url: &str) -> Result<Vec<SeasonStat>> {
        let page = self.goto(player_url).await?;
        let stats = parse::career_stats(&page).map_err(|e| {
            error!("Failed to extract career stats on {}: {}", player_url, e);
            ScrapeError::CareerStats(e)
        })?;
        self.limiter.pace().await;
        Ok(stats)
    }

    /// Run the whole pipeline: every team, every rostered player, one
    /// artifact per team.
    ///
    /// A team is written only after all of its players' stats are attached.
    /// The first stage failure aborts the run; artifacts of teams that
    /// already completed stay on disk.
    pub async fn run<W: TeamWriter>(&self, writer: &W) -> Result<RunSummary> {
        let started_at = chrono::Utc::now();
        let mut written = Vec::new();
        let mut player_count = 0usize;

        let teams = self.extract_teams().await?;
        info!("Extracted {} teams from league index", teams.len());

        let team_count = teams.len();
        for mut team in teams {
            info!("Extracting team: {}", team.name);

            let season_url = self.extract_latest_season_url(&team.url).await?;
            let mut players = self.extract_players(&season_url).await?;

            for player in &mut players {
                info!("Extracting player: {}", player.name);
                player.career_stats = self.extract_career_stats(&player.url).await?;
                player_count += 1;
            }

            team.players = players;
            written.push(writer.write_team(&team)?);
            info!("Finished extracting team: {}", team.name);
        }

        Ok(RunSummary {
            teams: team_count,
            players: player_count,
            written,
            started_at,
            finished_at: chrono::Utc::now(),
        })
    }
}
