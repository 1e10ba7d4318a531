use crate::config::tables::MatchTables;
use crate::domain::model::{JobRecord, SkillSet};

/// Country priority multiplier for a location string. First table entry
/// whose country name appears (case-insensitive) in the location wins;
/// unknown locations weigh 1.0.
pub fn country_weight(tables: &MatchTables, location: &str) -> f64 {
    let location = location.to_lowercase();
    for entry in &tables.country_weights {
        if location.contains(&entry.country.to_lowercase()) {
            return entry.weight;
        }
    }
    1.0
}

/// Match score: fraction of skills found as substrings of the job's title or
/// description, multiplied by the country weight. Deliberately uncapped --
/// a perfect match in a 1.5-weight country scores 1.5. The weight is a
/// tie-break amplifier, not a normalized probability.
pub fn match_score(tables: &MatchTables, job: &JobRecord, skills: &SkillSet) -> f64 {
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();

    let matched = skills
        .iter()
        .filter(|skill| title.contains(skill.as_str()) || description.contains(skill.as_str()))
        .count();

    let fraction = matched as f64 / skills.len().max(1) as f64;
    fraction * country_weight(tables, &job.location)
}
