use crate::domain::model::{JobRecord, JobSource};
use crate::domain::ports::JobSite;
use crate::sites::{clean_text, SiteClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;

/// RemoteOK adapter. Listings are `tr.job` rows; the posting URL is built
/// from the row's `data-id` attribute. A configurable delay runs before the
/// request as a crude rate-limit mitigation (the site blocks eager clients).
pub struct RemoteOk {
    client: SiteClient,
    base_url: String,
    backoff: Duration,
    listing: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
}

impl RemoteOk {
    pub const PRODUCTION_URL: &'static str = "https://remoteok.com/";
    pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

    pub fn new(client: SiteClient, base_url: impl Into<String>, backoff: Duration) -> Self {
        RemoteOk {
            client,
            base_url: base_url.into(),
            backoff,
            listing: Selector::parse("tr.job").expect("static selector"),
            title: Selector::parse("h2").expect("static selector"),
            company: Selector::parse("h3").expect("static selector"),
            location: Selector::parse("div.location").expect("static selector"),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}remote-{}", self.base_url, query.trim().replace(' ', "-"))
    }

    fn parse_jobs(&self, body: &str) -> Vec<JobRecord> {
        let document = Html::parse_document(body);
        let mut jobs = Vec::new();

        for listing in document.select(&self.listing) {
            let title = listing
                .select(&self.title)
                .next()
                .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")));
            let company = listing
                .select(&self.company)
                .next()
                .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")));

            let (title, company) = match (title, company) {
                (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (t, c),
                _ => continue,
            };

            let location = listing
                .select(&self.location)
                .next()
                .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")))
                .filter(|loc| !loc.is_empty())
                .unwrap_or_else(|| "Remote".to_string());

            let url = listing
                .value()
                .attr("data-id")
                .map(|id| format!("{}remote-jobs/{}", self.base_url, id))
                .unwrap_or_default();

            jobs.push(JobRecord {
                title,
                company,
                location,
                url,
                source: JobSource::RemoteOk,
                description: String::new(),
                match_score: None,
            });
        }

        jobs
    }
}

#[async_trait]
impl JobSite for RemoteOk {
    fn source(&self) -> JobSource {
        JobSource::RemoteOk
    }

    async fn try_fetch(&self, query: &str) -> Result<Vec<JobRecord>> {
        if !self.backoff.is_zero() {
            tracing::debug!("Backing off {:?} before RemoteOK request", self.backoff);
            tokio::time::sleep(self.backoff).await;
        }

        let url = self.search_url(query);
        let body = self.client.get(self.source(), &url).await?;
        let jobs = self.parse_jobs(&body);
        tracing::info!("Found {} jobs on {}", jobs.len(), self.source());
        Ok(jobs)
    }
}
