pub mod tables;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "jobscout")]
#[command(about = "Find remote jobs matching your skills and country preferences")]
pub struct CliConfig {
    /// Desired job position, e.g. "Python Developer" or "Data Analyst"
    pub position: String,

    /// Preferred countries; empty means no country filter
    #[arg(long, value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Minimum match score, mirrors the original 0.0..=1.0 slider
    #[arg(long, default_value = "0.3")]
    pub min_score: f64,

    /// Write the ranked results to a CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// TOML file overriding the builtin skill/country tables
    #[arg(long)]
    pub tables: Option<String>,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    /// Delay before the RemoteOK request, its crude rate-limit mitigation
    #[arg(long, default_value = "2000")]
    pub backoff_ms: u64,

    #[arg(long, default_value = "https://weworkremotely.com/")]
    pub weworkremotely_url: String,

    #[arg(long, default_value = "https://remoteok.com/")]
    pub remoteok_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("position", &self.position)?;
        validation::validate_range("min_score", self.min_score, 0.0, 1.0)?;
        validation::validate_url("weworkremotely_url", &self.weworkremotely_url)?;
        validation::validate_url("remoteok_url", &self.remoteok_url)?;
        for country in &self.countries {
            validation::validate_non_empty_string("countries", country)?;
        }
        Ok(())
    }
}
