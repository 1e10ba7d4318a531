use crate::config::tables::MatchTables;
use crate::core::scoring;
use crate::domain::model::{JobRecord, SkillSet};

/// Score, filter and rank a combined job list.
///
/// Order of operations: score every job, apply the country filter (jobs in
/// a preferred country or with "remote" in the location survive), drop jobs
/// below the minimum score, then stable-sort by score descending. Ties keep
/// collection order, which is adapter priority order. An empty result is the
/// valid "no matches" state, not an error.
pub fn rank_jobs(
    tables: &MatchTables,
    jobs: Vec<JobRecord>,
    skills: &SkillSet,
    preferred_countries: &[String],
    min_score: f64,
) -> Vec<JobRecord> {
    let mut scored: Vec<JobRecord> = jobs
        .into_iter()
        .map(|mut job| {
            job.match_score = Some(scoring::match_score(tables, &job, skills));
            job
        })
        .collect();

    if !preferred_countries.is_empty() {
        scored.retain(|job| {
            let location = job.location.to_lowercase();
            location.contains("remote")
                || preferred_countries
                    .iter()
                    .any(|country| location.contains(&country.to_lowercase()))
        });
    }

    scored.retain(|job| job.match_score.unwrap_or(0.0) >= min_score);

    // Vec::sort_by is stable, so equal scores keep adapter order.
    scored.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::JobSource;

    fn job(title: &str, location: &str, source: JobSource) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            url: String::new(),
            source,
            description: String::new(),
            match_score: None,
        }
    }

    fn tables() -> MatchTables {
        MatchTables::builtin()
    }

    #[test]
    fn test_min_score_cut_and_descending_order() {
        let skills = SkillSet::new(["python", "sql", "git", "react", "css"]);
        // 4/5, 2/5 and 1/5 matched skills at weight 1.0.
        let jobs = vec![
            job("python sql git react", "Anywhere", JobSource::WeWorkRemotely),
            job("python sql", "Anywhere", JobSource::WeWorkRemotely),
            job("python", "Anywhere", JobSource::RemoteOk),
        ];

        let ranked = rank_jobs(&tables(), jobs, &skills, &[], 0.3);
        let scores: Vec<f64> = ranked.iter().map(|j| j.match_score.unwrap()).collect();
        assert_eq!(scores, vec![0.8, 0.4]);
    }

    #[test]
    fn test_country_filter_keeps_remote_fallback() {
        let skills = SkillSet::new(["python"]);
        let jobs = vec![
            job("python", "New York, USA", JobSource::WeWorkRemotely),
            job("python", "Berlin, Germany", JobSource::WeWorkRemotely),
            job("python", "Remote", JobSource::RemoteOk),
        ];

        let preferred = vec!["USA".to_string()];
        let ranked = rank_jobs(&tables(), jobs, &skills, &preferred, 0.0);
        let locations: Vec<&str> = ranked.iter().map(|j| j.location.as_str()).collect();
        assert!(locations.contains(&"New York, USA"));
        assert!(locations.contains(&"Remote"));
        assert!(!locations.contains(&"Berlin, Germany"));
    }

    #[test]
    fn test_no_country_filter_keeps_all() {
        let skills = SkillSet::new(["python"]);
        let jobs = vec![
            job("python", "Berlin, Germany", JobSource::WeWorkRemotely),
            job("python", "Tokyo, Japan", JobSource::RemoteOk),
        ];
        let ranked = rank_jobs(&tables(), jobs, &skills, &[], 0.0);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_exact_threshold_kept() {
        // Strictly-below is dropped; exactly-at survives.
        let skills = SkillSet::new(["python", "sql"]);
        let jobs = vec![job("python", "Anywhere", JobSource::WeWorkRemotely)];
        let ranked = rank_jobs(&tables(), jobs, &skills, &[], 0.5);
        assert_eq!(ranked.len(), 1);

        let jobs = vec![job("python", "Anywhere", JobSource::WeWorkRemotely)];
        let ranked = rank_jobs(&tables(), jobs, &skills, &[], 0.51);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_adapter_order() {
        let skills = SkillSet::new(["python"]);
        let jobs = vec![
            job("python first", "Remote", JobSource::WeWorkRemotely),
            job("python second", "Remote", JobSource::WeWorkRemotely),
            job("python third", "Remote", JobSource::RemoteOk),
        ];

        let ranked = rank_jobs(&tables(), jobs, &skills, &[], 0.0);
        let titles: Vec<&str> = ranked.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["python first", "python second", "python third"]);
    }

    #[test]
    fn test_high_weight_scores_can_exceed_one() {
        let skills = SkillSet::new(["python"]);
        let jobs = vec![job("python", "Remote, USA", JobSource::WeWorkRemotely)];
        let ranked = rank_jobs(&tables(), jobs, &skills, &[], 1.0);
        // min_score maxes out at 1.0, a 1.5 score can never be excluded.
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].match_score.unwrap() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let skills = SkillSet::new(["python"]);
        let ranked = rank_jobs(&tables(), vec![], &skills, &[], 0.3);
        assert!(ranked.is_empty());
    }
}
