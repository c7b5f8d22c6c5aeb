use anyhow::{Context, Result};
use aocr_models::config::AocrConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "aocr",
    about = "AI Offerings Competitive Research - compare the AI offerings of companies against a parent company"
)]
struct Cli {
    /// Companies to research
    #[arg(required = true)]
    companies: Vec<String>,

    /// Parent company the others are compared against (also researched)
    #[arg(short, long)]
    parent: String,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Markdown report path, overrides `report.output_path`
    #[arg(short, long)]
    output: Option<String>,

    /// Also write the structured research result as JSON
    #[arg(long)]
    json: Option<String>,

    /// Print the Markdown report to stdout
    #[arg(long)]
    print: bool,
}

fn load_config(path: Option<&str>) -> Result<AocrConfig> {
    let Some(path) = path else {
        return Ok(AocrConfig::default());
    };
    let config_str =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {path}"))?;
    toml::from_str(&config_str).with_context(|| "Failed to parse config")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // API keys may live in a local .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let orchestrator =
        aocr::build_orchestrator(&config).context("Failed to build orchestrator")?;

    let result = aocr::research(&orchestrator, &cli.companies, &cli.parent)
        .await
        .map_err(|e| anyhow::anyhow!("Research failed: {e}"))?;

    if cli.print {
        println!("{}", aocr::report::render_markdown(&result));
    }

    let output = cli.output.unwrap_or(config.report.output_path);
    aocr::report::export_markdown(&result, &output);

    if let Some(json_path) = &cli.json {
        aocr::report::export_json(&result, json_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_companies_and_parent() {
        let cli = Cli::try_parse_from(["aocr", "-p", "Initech", "Acme", "Globex"]).unwrap();
        assert_eq!(cli.companies, vec!["Acme", "Globex"]);
        assert_eq!(cli.parent, "Initech");
        assert!(cli.config.is_none());
        assert!(!cli.print);
    }

    #[test]
    fn requires_companies_and_parent() {
        assert!(Cli::try_parse_from(["aocr", "-p", "Initech"]).is_err());
        assert!(Cli::try_parse_from(["aocr", "Acme"]).is_err());
    }

    #[test]
    fn missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), AocrConfig::default());
    }

    #[test]
    fn unreadable_config_is_an_error() {
        assert!(load_config(Some("/nonexistent/aocr.toml")).is_err());
    }
}
