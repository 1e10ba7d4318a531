use crate::domain::model::{FetchOutcome, FetchStatus, JobRecord, JobSource};
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;

/// One job board. Adding a source means implementing this trait; existing
/// adapters stay untouched.
#[async_trait]
pub trait JobSite: Send + Sync {
    fn source(&self) -> JobSource;

    /// Fetch and parse the board's search page. Propagates errors; callers
    /// outside of tests should go through `fetch`.
    async fn try_fetch(&self, query: &str) -> Result<Vec<JobRecord>>;

    /// The adapter boundary: never fails. A non-2xx status degrades to a
    /// warning report, any other error to a failure report, both with an
    /// empty job list.
    async fn fetch(&self, query: &str) -> FetchOutcome {
        let source = self.source();
        match self.try_fetch(query).await {
            Ok(jobs) => FetchOutcome {
                source,
                status: FetchStatus::Success,
                jobs,
            },
            Err(ScoutError::SiteStatus { status, .. }) => {
                tracing::warn!("{} returned status code: {}", source, status);
                FetchOutcome {
                    source,
                    status: FetchStatus::HttpStatus(status),
                    jobs: Vec::new(),
                }
            }
            Err(e) => {
                tracing::error!("{} scraping failed: {}", source, e);
                FetchOutcome {
                    source,
                    status: FetchStatus::Failed(e.to_string()),
                    jobs: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSite {
        error: fn() -> ScoutError,
    }

    #[async_trait]
    impl JobSite for FailingSite {
        fn source(&self) -> JobSource {
            JobSource::WeWorkRemotely
        }

        async fn try_fetch(&self, _query: &str) -> Result<Vec<JobRecord>> {
            Err((self.error)())
        }
    }

    #[tokio::test]
    async fn test_fetch_degrades_site_status_to_report() {
        let site = FailingSite {
            error: || ScoutError::SiteStatus {
                site: JobSource::WeWorkRemotely,
                status: 503,
            },
        };
        let outcome = site.fetch("rust developer").await;
        assert_eq!(outcome.status, FetchStatus::HttpStatus(503));
        assert!(outcome.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_degrades_other_errors_to_failure() {
        let site = FailingSite {
            error: || ScoutError::ConfigError {
                message: "boom".to_string(),
            },
        };
        let outcome = site.fetch("rust developer").await;
        assert!(matches!(outcome.status, FetchStatus::Failed(_)));
        assert!(outcome.jobs.is_empty());
    }
}
