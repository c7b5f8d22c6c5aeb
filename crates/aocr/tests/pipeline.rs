//! Config-to-report pipeline tests against local mock providers.

use aocr::models::AocrConfig;
use aocr::report::{export_markdown, render_markdown, REPORT_TITLE};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AocrConfig {
    let mut config = AocrConfig::default();
    config.search.endpoint = format!("{}/search", server.uri());
    config.search.api_key = Some("serper-key".to_string());
    config.llm.endpoint = format!("{}/openai/v1/chat/completions", server.uri());
    config.llm.api_key = Some("groq-key".to_string());
    config
}

fn answer(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": text}}]
    }))
}

#[test]
fn shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/aocr.toml");
    let config_str = std::fs::read_to_string(path).unwrap();
    let config: AocrConfig = toml::from_str(&config_str).unwrap();
    assert_eq!(config, AocrConfig::default());
}

#[tokio::test]
async fn research_and_export_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organic": [
                {"title": "AI at Acme", "link": "https://acme.example/ai"},
                {"title": "AI at Acme again", "link": "https://acme.example/ai"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(body_string_contains("Compare the AI capabilities"))
        .respond_with(answer("Both are early adopters."))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(answer("Runs a recommendation engine."))
        .with_priority(2)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let orchestrator = aocr::build_orchestrator(&config).unwrap();
    let result = aocr::research(&orchestrator, &["Acme".to_string()], "Acme")
        .await
        .unwrap();

    // Acme was processed twice; the report lists it once
    assert_eq!(result.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("ai_competitive_research.md");
    assert!(export_markdown(&result, &report_path));

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(report, render_markdown(&result));
    assert!(report.starts_with(REPORT_TITLE));
    assert_eq!(report.matches("## Acme AI Offerings").count(), 1);
    assert!(report.contains("Runs a recommendation engine."));
    assert!(report.contains("- **AI at Acme**: https://acme.example/ai\n"));
    assert!(!report.contains("AI at Acme again"));
    assert!(report.ends_with("## Comparative Analysis\n\nBoth are early adopters.\n"));
}

#[tokio::test]
async fn provider_outage_fails_research() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .mount(&server)
        .await;

    let orchestrator = aocr::build_orchestrator(&config_for(&server)).unwrap();
    let result = aocr::research(&orchestrator, &["Acme".to_string()], "Initech").await;

    assert!(result.is_err());
}
