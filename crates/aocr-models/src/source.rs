use serde::{Deserialize, Serialize};

/// Title used when a search result carries none.
pub const UNTITLED: &str = "Untitled";

/// One deduplicated search-result entry. `link` is the identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl Source {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}
