use crate::domain::model::{JobRecord, JobSource};
use crate::domain::ports::JobSite;
use crate::sites::{clean_text, SiteClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

/// WeWorkRemotely adapter. Search results live under `li.feature` elements;
/// listings without a title or company are skipped.
pub struct WeWorkRemotely {
    client: SiteClient,
    base_url: String,
    listing: Selector,
    title: Selector,
    company: Selector,
    region: Selector,
    link: Selector,
}

impl WeWorkRemotely {
    pub const PRODUCTION_URL: &'static str = "https://weworkremotely.com/";

    pub fn new(client: SiteClient, base_url: impl Into<String>) -> Self {
        WeWorkRemotely {
            client,
            base_url: base_url.into(),
            listing: Selector::parse("li.feature").expect("static selector"),
            title: Selector::parse("span.title").expect("static selector"),
            company: Selector::parse("span.company").expect("static selector"),
            region: Selector::parse("span.region").expect("static selector"),
            link: Selector::parse("a[href]").expect("static selector"),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}remote-jobs/search?term={}",
            self.base_url,
            query.trim().replace(' ', "+")
        )
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

            // Missing required fields: skip this listing, keep the rest.
            let (title, company) = match (title, company) {
                (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (t, c),
                _ => continue,
            };

            let location = listing
                .select(&self.region)
                .next()
                .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")))
                .filter(|loc| !loc.is_empty())
                .unwrap_or_else(|| "Remote".to_string());

            let url = listing
                .select(&self.link)
                .next()
                .and_then(|el| el.value().attr("href"))
                .and_then(|href| self.absolute_url(href))
                .unwrap_or_default();

            jobs.push(JobRecord {
                title,
                company,
                location,
                url,
                source: JobSource::WeWorkRemotely,
                description: String::new(),
                match_score: None,
            });
        }

        jobs
    }

    fn absolute_url(&self, href: &str) -> Option<String> {
        let base = Url::parse(&self.base_url).ok()?;
        base.join(href).ok().map(String::from)
    }
}

#[async_trait]
impl JobSite for WeWorkRemotely {
    fn source(&self) -> JobSource {
        JobSource::WeWorkRemotely
    }

    async fn try_fetch(&self, query: &str) -> Result<Vec<JobRecord>> {
        let url = self.search_url(query);
        let body = self.client.get(self.source(), &url).await?;
        let jobs = self.parse_jobs(&body);
        tracing::info!("Found {} jobs on {}", jobs.len(), self.source());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::FetchSettings;

    fn adapter() -> WeWorkRemotely {
        let client = SiteClient::new(&FetchSettings::default()).unwrap();
        WeWorkRemotely::new(client, "https://weworkremotely.com/")
    }

    #[test]
    fn test_search_url_replaces_spaces_with_plus() {
        assert_eq!(
            adapter().search_url("Data Analyst"),
            "https://weworkremotely.com/remote-jobs/search?term=Data+Analyst"
        );
    }

    #[test]
    fn test_parse_extracts_listing_fields() {
        let body = r#"
            <ul>
              <li class="feature">
                <a href="/remote-jobs/acme-rust-developer">
                  <span class="title">Rust Developer</span>
                  <span class="company">Acme Corp</span>
                  <span class="region">Berlin, Germany</span>
                </a>
              </li>
            </ul>
        "#;
        let jobs = adapter().parse_jobs(body);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Rust Developer");
        assert_eq!(jobs[0].company, "Acme Corp");
        assert_eq!(jobs[0].location, "Berlin, Germany");
        assert_eq!(
            jobs[0].url,
            "https://weworkremotely.com/remote-jobs/acme-rust-developer"
        );
        assert_eq!(jobs[0].source, JobSource::WeWorkRemotely);
        assert!(jobs[0].match_score.is_none());
    }

    #[test]
    fn test_parse_skips_listing_missing_company() {
        let body = r#"
            <ul>
              <li class="feature">
                <span class="title">Orphan Listing</span>
              </li>
              <li class="feature">
                <span class="title">Kept Listing</span>
                <span class="company">Acme Corp</span>
              </li>
            </ul>
        "#;
        let jobs = adapter().parse_jobs(body);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Kept Listing");
    }

    #[test]
    fn test_parse_defaults_location_to_remote() {
        let body = r#"
            <li class="feature">
              <span class="title">Rust Developer</span>
              <span class="company">Acme Corp</span>
            </li>
        "#;
        let jobs = adapter().parse_jobs(body);
        assert_eq!(jobs[0].location, "Remote");
    }

    #[test]
    fn test_parse_missing_anchor_leaves_url_empty() {
        let body = r#"
            <li class="feature">
              <span class="title">Rust Developer</span>
              <span class="company">Acme Corp</span>
            </li>
        "#;
        let jobs = adapter().parse_jobs(body);
        assert_eq!(jobs[0].url, "");
    }
}
