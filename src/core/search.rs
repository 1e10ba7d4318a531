use crate::config::tables::MatchTables;
use crate::core::{pipeline, skills};
use crate::domain::model::{JobRecord, SearchOutcome, SearchRequest, SourceReport};
use crate::domain::ports::JobSite;
use crate::sites::{FetchSettings, RemoteOk, SiteClient, WeWorkRemotely};
use crate::utils::error::Result;
use std::time::Duration;

/// Drives one search: infer skills, fetch every site in fixed order, then
/// score, filter and rank the combined list. Site order is significant --
/// it decides tie order in the ranked output.
pub struct SearchEngine {
    sites: Vec<Box<dyn JobSite>>,
    tables: MatchTables,
}

impl SearchEngine {
    pub fn new(sites: Vec<Box<dyn JobSite>>, tables: MatchTables) -> Self {
        Self { sites, tables }
    }

    /// Production wiring: WeWorkRemotely first, then RemoteOK.
    pub fn with_default_sites(
        tables: MatchTables,
        settings: FetchSettings,
        backoff: Duration,
    ) -> Result<Self> {
        Self::with_sites(
            tables,
            settings,
            backoff,
            WeWorkRemotely::PRODUCTION_URL,
            RemoteOk::PRODUCTION_URL,
        )
    }

    /// Same wiring with overridable base URLs, for mirrors and tests.
    pub fn with_sites(
        tables: MatchTables,
        settings: FetchSettings,
        backoff: Duration,
        weworkremotely_url: &str,
        remoteok_url: &str,
    ) -> Result<Self> {
        let client = SiteClient::new(&settings)?;
        let sites: Vec<Box<dyn JobSite>> = vec![
            Box::new(WeWorkRemotely::new(client.clone(), weworkremotely_url)),
            Box::new(RemoteOk::new(client, remoteok_url, backoff)),
        ];
        Ok(Self::new(sites, tables))
    }

    /// Runs the whole search. Infallible: fetch failures degrade to
    /// per-source reports and an empty contribution, never an abort.
    pub async fn search(&self, request: &SearchRequest) -> SearchOutcome {
        tracing::info!("Searching for: {}", request.position);

        let skills = skills::infer_skills(&self.tables, &request.position);
        tracing::debug!("Identified skills: {:?}", skills.as_slice());

        let mut all_jobs: Vec<JobRecord> = Vec::new();
        let mut reports: Vec<SourceReport> = Vec::new();

        for site in &self.sites {
            let outcome = site.fetch(&request.position).await;
            reports.push(outcome.report());
            all_jobs.extend(outcome.jobs);
        }

        tracing::info!("Collected {} jobs across {} sources", all_jobs.len(), reports.len());

        let jobs = pipeline::rank_jobs(
            &self.tables,
            all_jobs,
            &skills,
            &request.preferred_countries,
            request.min_score,
        );
        tracing::info!("{} jobs passed the filters", jobs.len());

        SearchOutcome {
            skills,
            jobs,
            reports,
            searched_at: chrono::Utc::now(),
        }
    }
}
