pub mod pipeline;
pub mod scoring;
pub mod search;
pub mod skills;

pub use crate::domain::model::{
    FetchOutcome, FetchStatus, JobRecord, JobSource, SearchOutcome, SearchRequest, SkillSet,
    SourceReport,
};
pub use crate::domain::ports::JobSite;
pub use crate::utils::error::Result;
