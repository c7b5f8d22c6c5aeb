pub mod config;
pub mod research;
pub mod source;

pub use config::{AocrConfig, LlmConfig, ReportConfig, SearchConfig};
pub use research::{CompanyResearch, ResearchResult};
pub use source::Source;
