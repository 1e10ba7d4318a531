pub mod remoteok;
pub mod weworkremotely;

pub use remoteok::RemoteOk;
pub use weworkremotely::WeWorkRemotely;

use crate::domain::model::JobSource;
use crate::utils::error::{Result, ScoutError};
use reqwest::Client;
use std::time::Duration;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request knobs shared by all adapters: the browser-identifying User-Agent
/// and the per-request timeout.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        FetchSettings {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl FetchSettings {
    pub fn with_timeout(timeout: Duration) -> Self {
        FetchSettings {
            timeout,
            ..Default::default()
        }
    }
}

/// Thin reqwest wrapper the adapters share. One GET per call; a non-2xx
/// status becomes a `SiteStatus` error instead of a body.
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
}

impl SiteClient {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()?;
        Ok(SiteClient { client })
    }

    pub async fn get(&self, site: JobSource, url: &str) -> Result<String> {
        tracing::debug!("Fetching {} search page: {}", site, url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", site, status);
        if !status.is_success() {
            return Err(ScoutError::SiteStatus {
                site,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Collapse internal whitespace and trim. Listing markup tends to wrap
/// titles and company names across indented lines.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
