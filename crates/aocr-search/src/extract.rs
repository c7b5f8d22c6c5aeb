use std::collections::HashSet;

use aocr_models::source::{Source, UNTITLED};
use serde_json::Value;
use tracing::warn;

use crate::error::SearchError;

/// Parse the `organic` results of a search response into deduplicated sources.
///
/// A response without an `organic` field yields an empty list. Entries with an
/// empty or previously seen `link` are skipped; order is first-seen.
pub fn parse_sources(raw: &str) -> Result<Vec<Source>, SearchError> {
    let value: Value = serde_json::from_str(raw)?;
    let object = value
        .as_object()
        .ok_or_else(|| SearchError::Parse("top-level value is not an object".to_string()))?;

    let Some(organic) = object.get("organic") else {
        return Ok(Vec::new());
    };
    let entries = organic
        .as_array()
        .ok_or_else(|| SearchError::Parse("`organic` is not an array".to_string()))?;

    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or_else(|| SearchError::Parse(format!("organic[{index}] is not an object")))?;

        let link = match entry.get("link") {
            Some(Value::Array(_) | Value::Object(_)) => {
                return Err(SearchError::Parse(format!(
                    "organic[{index}].link is not a scalar"
                )))
            }
            other => field_text(other).unwrap_or_default(),
        };
        if link.is_empty() || seen.contains(&link) {
            continue;
        }

        let title = field_text(entry.get("title")).unwrap_or_else(|| UNTITLED.to_string());
        let snippet = field_text(entry.get("snippet")).unwrap_or_default();

        seen.insert(link.clone());
        sources.push(Source {
            title,
            link,
            snippet,
        });
    }

    Ok(sources)
}

/// Lenient variant of [`parse_sources`]: any failure is logged and becomes an
/// empty list.
pub fn extract_sources(raw: &str) -> Vec<Source> {
    match parse_sources(raw) {
        Ok(sources) => sources,
        Err(e) => {
            warn!(error = %e, "Error extracting sources");
            Vec::new()
        }
    }
}

/// Missing and null fields read as `None`. Other non-string values keep
/// their JSON text, so `"title": 2024` reads as `"2024"`.
fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
