pub mod client;
pub mod error;
pub mod extract;

pub use client::{SearchClient, WebSearch};
pub use error::SearchError;
pub use extract::{extract_sources, parse_sources};
