use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One job-title category and the skills it implies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub skills: Vec<String>,
}

/// One country and its priority multiplier. Lookup is case-insensitive
/// substring match against a location string, so "USA" matches "Remote, USA".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryWeight {
    pub country: String,
    pub weight: f64,
}

/// The static matching configuration: category-to-skills mapping, the
/// fallback skill set, and the country priority weights. Passed into the
/// inferencer and scorer instead of living as global state, so it can be
/// swapped out in tests or overridden from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTables {
    pub skill_categories: Vec<SkillCategory>,
    pub default_skills: Vec<String>,
    pub country_weights: Vec<CountryWeight>,
}

impl MatchTables {
    pub fn builtin() -> Self {
        fn category(key: &str, skills: &[&str]) -> SkillCategory {
            SkillCategory {
                key: key.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            }
        }

        fn country(name: &str, weight: f64) -> CountryWeight {
            CountryWeight {
                country: name.to_string(),
                weight,
            }
        }

        MatchTables {
            skill_categories: vec![
                category(
                    "developer",
                    &[
                        "python",
                        "javascript",
                        "html",
                        "css",
                        "react",
                        "node.js",
                        "sql",
                        "git",
                    ],
                ),
                category(
                    "data",
                    &[
                        "python",
                        "sql",
                        "pandas",
                        "numpy",
                        "statistics",
                        "machine learning",
                        "data visualization",
                    ],
                ),
                category(
                    "analyst",
                    &[
                        "sql",
                        "excel",
                        "data analysis",
                        "statistics",
                        "tableau",
                        "powerbi",
                    ],
                ),
                category(
                    "designer",
                    &[
                        "ui",
                        "ux",
                        "adobe",
                        "figma",
                        "sketch",
                        "wireframing",
                        "prototype",
                    ],
                ),
                category(
                    "manager",
                    &[
                        "leadership",
                        "project management",
                        "agile",
                        "scrum",
                        "communication",
                    ],
                ),
                category(
                    "marketing",
                    &[
                        "seo",
                        "social media",
                        "content creation",
                        "analytics",
                        "email marketing",
                    ],
                ),
                category(
                    "customer",
                    &[
                        "communication",
                        "problem solving",
                        "patience",
                        "crm",
                        "conflict resolution",
                    ],
                ),
                category(
                    "sales",
                    &[
                        "negotiation",
                        "crm",
                        "prospecting",
                        "cold calling",
                        "relationship building",
                    ],
                ),
                category(
                    "support",
                    &[
                        "troubleshooting",
                        "communication",
                        "patience",
                        "ticketing systems",
                        "problem solving",
                    ],
                ),
            ],
            default_skills: vec![
                "communication".to_string(),
                "teamwork".to_string(),
                "problem solving".to_string(),
                "adaptability".to_string(),
                "time management".to_string(),
            ],
            country_weights: vec![
                country("USA", 1.5),
                country("Canada", 1.4),
                country("Germany", 1.3),
                country("Australia", 1.3),
                country("Philippines", 0.7),
                country("India", 0.6),
                country("Japan", 0.6),
            ],
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let tables: MatchTables = toml::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }
}

impl Validate for MatchTables {
    fn validate(&self) -> Result<()> {
        for category in &self.skill_categories {
            validation::validate_non_empty_string("skill_categories.key", &category.key)?;
            if category.skills.is_empty() {
                return Err(crate::utils::error::ScoutError::InvalidConfigValue {
                    field: "skill_categories.skills".to_string(),
                    value: category.key.clone(),
                    reason: "Category has no skills".to_string(),
                });
            }
            for skill in &category.skills {
                validation::validate_non_empty_string("skill_categories.skills", skill)?;
            }
        }

        if self.default_skills.is_empty() {
            return Err(crate::utils::error::ScoutError::ConfigError {
                message: "default_skills must not be empty".to_string(),
            });
        }

        for entry in &self.country_weights {
            validation::validate_non_empty_string("country_weights.country", &entry.country)?;
            validation::validate_positive_weight(
                &format!("country_weights.{}", entry.country),
                entry.weight,
            )?;
        }

        Ok(())
    }
}
