use crate::config::tables::MatchTables;
use crate::domain::model::SkillSet;

/// Infer a skill set from a free-text job title. Each category whose key
/// appears as a substring of the lowercased title contributes its skills;
/// when nothing matches, the table's default set applies. Never empty as
/// long as the tables validate.
pub fn infer_skills(tables: &MatchTables, job_title: &str) -> SkillSet {
    let title = job_title.to_lowercase();

    let mut matched: Vec<&str> = Vec::new();
    for category in &tables.skill_categories {
        if title.contains(&category.key.to_lowercase()) {
            matched.extend(category.skills.iter().map(String::as_str));
        }
    }

    if matched.is_empty() {
        return SkillSet::new(&tables.default_skills);
    }

    SkillSet::new(matched)
}
