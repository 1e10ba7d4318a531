use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which job board a record came from. Variant order fixes adapter priority
/// for tie-breaking in the ranked output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSource {
    WeWorkRemotely,
    RemoteOk,
}

impl std::fmt::Display for JobSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobSource::WeWorkRemotely => write!(f, "WeWorkRemotely"),
            JobSource::RemoteOk => write!(f, "RemoteOK"),
        }
    }
}

/// One scraped posting. Adapters guarantee non-empty `title` and `company`
/// and fall back to `"Remote"` for a missing location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub source: JobSource,
    pub description: String,
    pub match_score: Option<f64>,
}

impl JobRecord {
    /// Score as a zero-decimal percentage string, e.g. `Some(0.6)` -> "60%".
    /// Unscored records render as the empty string.
    pub fn display_score(&self) -> String {
        match self.match_score {
            Some(score) => format!("{:.0}%", score * 100.0),
            None => String::new(),
        }
    }
}

/// Lowercase skill keywords, duplicate-free, first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills: Vec<String> = Vec::new();
        for keyword in keywords {
            let skill = keyword.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !skills.contains(&skill) {
                skills.push(skill);
            }
        }
        SkillSet(skills)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

/// User inputs for one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub position: String,
    pub preferred_countries: Vec<String>,
    pub min_score: f64,
}

/// How one adapter invocation ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    Success,
    HttpStatus(u16),
    Failed(String),
}

/// Everything one adapter invocation produced.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub source: JobSource,
    pub status: FetchStatus,
    pub jobs: Vec<JobRecord>,
}

impl FetchOutcome {
    pub fn report(&self) -> SourceReport {
        SourceReport {
            source: self.source,
            status: self.status.clone(),
            jobs_found: self.jobs.len(),
        }
    }
}

/// Per-source diagnostic surfaced to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: JobSource,
    pub status: FetchStatus,
    pub jobs_found: usize,
}

/// Result of a whole search: ranked jobs plus per-source diagnostics.
/// Zero jobs with Success reports is the valid "no results" state.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub skills: SkillSet,
    pub jobs: Vec<JobRecord>,
    pub reports: Vec<SourceReport>,
    pub searched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_set_dedups_and_lowercases() {
        let skills = SkillSet::new(["Python", "SQL", "python", "  git  ", ""]);
        assert_eq!(skills.as_slice(), &["python", "sql", "git"]);
    }

    #[test]
    fn test_display_score_formats_percentage() {
        let mut job = JobRecord {
            title: "Data Analyst".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            url: String::new(),
            source: JobSource::WeWorkRemotely,
            description: String::new(),
            match_score: Some(0.6),
        };
        assert_eq!(job.display_score(), "60%");

        job.match_score = Some(1.5);
        assert_eq!(job.display_score(), "150%");

        job.match_score = None;
        assert_eq!(job.display_score(), "");
    }

    #[test]
    fn test_source_display_names() {
        assert_eq!(JobSource::WeWorkRemotely.to_string(), "WeWorkRemotely");
        assert_eq!(JobSource::RemoteOk.to_string(), "RemoteOK");
    }
}
