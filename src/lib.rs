pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod sites;
pub mod utils;

pub use config::{tables::MatchTables, CliConfig};
pub use core::search::SearchEngine;
pub use domain::model::{JobRecord, JobSource, SearchOutcome, SearchRequest, SkillSet};
pub use domain::ports::JobSite;
pub use sites::{FetchSettings, RemoteOk, SiteClient, WeWorkRemotely};
pub use utils::error::{Result, ScoutError};
