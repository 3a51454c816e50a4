//! Page Navigator
//!
//! Navigation and DOM-query client for scraping pages that only render
//! fully inside a real browser. Pages are fetched through a
//! browser-rendering service (headless browser with anti-bot stealth) that
//! returns the final HTML; extraction then runs over that snapshot via CSS
//! selectors.
//!
//! The pipeline depends on the [`PageNavigator`] trait rather than the
//! concrete client, so tests can serve canned pages.

pub mod error;
pub mod page;

pub use error::{NavigationError, QueryError, Result};
pub use page::{attr, element_text, Page};

use std::time::Duration;

use tracing::info;

/// How long a navigation waits before the DOM is considered ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitPolicy {
    /// DOM parsed; subresources may still be loading
    #[default]
    DomContentLoaded,
    /// Full load event fired
    Load,
    /// No network activity for a quiet period
    NetworkIdle,
}

impl WaitPolicy {
    fn as_goto_option(self) -> &'static str {
        match self {
            WaitPolicy::DomContentLoaded => "domcontentloaded",
            WaitPolicy::Load => "load",
            WaitPolicy::NetworkIdle => "networkidle2",
        }
    }
}

/// Abstract navigation seam
#[async_trait::async_trait]
pub trait PageNavigator: Send + Sync {
    /// Load `url` and return the rendered page snapshot
    async fn navigate(&self, url: &str, wait: WaitPolicy) -> Result<Page>;
}

/// Configuration for the rendering-service client
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NavigatorConfig {
    /// Base URL of the rendering service
    pub base_url: String,

    /// Optional API token, passed as a query parameter
    pub token: Option<String>,

    /// Run the underlying browser headless
    pub headless: bool,

    /// Enable the service's anti-bot stealth mode
    pub stealth: bool,

    /// Per-navigation timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            token: None,
            headless: true,
            stealth: true,
            timeout_secs: 30,
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("RENDERER_URL") {
            config.base_url = url;
        }
        if let Ok(token) = std::env::var("RENDERER_TOKEN") {
            config.token = Some(token);
        }
        if let Ok(headless) = std::env::var("RENDERER_HEADLESS") {
            config.headless = headless != "false";
        }

        config
    }
}

/// Production navigator backed by a rendering service's `/content` endpoint.
///
/// The service drives a real browser, applies the configured launch flags,
/// waits for the requested readiness event, and hands back the rendered
/// HTML. No browser state crosses this boundary.
pub struct BrowserNavigator {
    client: reqwest::Client,
    config: NavigatorConfig,
}

impl BrowserNavigator {
    pub fn new(config: NavigatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        let mut endpoint = format!("{}/content", self.config.base_url.trim_end_matches('/'));
        if let Some(ref token) = self.config.token {
            endpoint.push_str(&format!("?token={token}"));
        }
        endpoint
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> NavigationError {
        if err.is_timeout() {
            NavigationError::Timeout { url: url.to_string() }
        } else {
            NavigationError::Transport(err)
        }
    }
}

#[async_trait::async_trait]
impl PageNavigator for BrowserNavigator {
    async fn navigate(&self, url: &str, wait: WaitPolicy) -> Result<Page> {
        info!("Navigating to: {}", url);

        let body = serde_json::json!({
            "url": url,
            "gotoOptions": { "waitUntil": wait.as_goto_option() },
            "launch": {
                "headless": self.config.headless,
                "stealth": self.config.stealth,
            },
        });

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NavigationError::Api { status: status.as_u16(), message });
        }

        let html = response.text().await.map_err(|e| self.classify(url, e))?;

        info!("Rendered {} ({} bytes)", url, html.len());
        Ok(Page::new(url, html))
    }
}
