use std::fmt::Write as _;
use std::path::Path;

use aocr_models::research::ResearchResult;
use tracing::{error, info};

pub const REPORT_TITLE: &str = "# AI Offerings and Case Studies Competitive Research Report";
pub const NO_COMPARATIVE_ANALYSIS: &str = "No comparative analysis available";

/// Render the research result as a Markdown report.
pub fn render_markdown(result: &ResearchResult) -> String {
    let mut report = format!("{REPORT_TITLE}\n\n");

    for research in result.iter() {
        let _ = write!(
            report,
            "## {} AI Offerings\n\n{}\n\n### Research Sources:\n",
            research.company, research.ai_offerings
        );
        for source in &research.sources {
            let _ = writeln!(report, "- **{}**: {}", source.title, source.link);
        }
        report.push('\n');
    }

    let analysis = result
        .comparative_analysis
        .as_deref()
        .unwrap_or(NO_COMPARATIVE_ANALYSIS);
    let _ = write!(report, "## Comparative Analysis\n\n{analysis}\n");

    report
}

/// Write the rendered report to `path`, replacing any existing file.
///
/// The outcome is printed either way; a failed write is reported, not raised.
/// Returns whether the file was written.
pub fn export_markdown(result: &ResearchResult, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let report = render_markdown(result);

    match std::fs::write(path, report) {
        Ok(()) => {
            info!(path = %path.display(), run_id = %result.run_id, "Report written");
            println!("Markdown report exported successfully to {}", path.display());
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to write report");
            println!("Error exporting Markdown file: {e}");
            false
        }
    }
}

/// Write the structured result as pretty-printed JSON to `path`.
///
/// Reported like [`export_markdown`]: the outcome is printed and logged, and
/// the return value says whether the file was written.
pub fn export_json(result: &ResearchResult, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let written = serde_json::to_string_pretty(result)
        .map_err(std::io::Error::from)
        .and_then(|json| std::fs::write(path, json));

    match written {
        Ok(()) => {
            info!(path = %path.display(), run_id = %result.run_id, "JSON result written");
            println!("JSON result exported successfully to {}", path.display());
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to write JSON result");
            println!("Error exporting JSON file: {e}");
            false
        }
    }
}
