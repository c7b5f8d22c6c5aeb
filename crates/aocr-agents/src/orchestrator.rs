use std::iter;
use std::sync::Arc;
use std::time::Instant;

use aocr_models::research::{CompanyResearch, ResearchResult};
use aocr_search::{extract_sources, WebSearch};
use tracing::{info, warn};

use crate::agent::ResearchAgent;
use crate::error::AgentError;
use crate::llm::LanguageModel;
use crate::prompts::{comparison_prompt, company_search_query, research_instruction};
use crate::tool::{Tool, WebSearchTool};

/// The orchestrator researches each company in turn and then asks the model
/// for a comparative analysis.
pub struct Orchestrator {
    search: Arc<dyn WebSearch>,
    model: Arc<dyn LanguageModel>,
    agent: ResearchAgent,
}

impl Orchestrator {
    /// The agent gets a `web_search` tool backed by the same search provider
    /// the orchestrator uses for its own source lists.
    pub fn new(
        search: Arc<dyn WebSearch>,
        model: Arc<dyn LanguageModel>,
        max_iterations: usize,
    ) -> Self {
        let tools: Vec<Arc<dyn Tool>> = vec![Arc::new(WebSearchTool::new(Arc::clone(&search)))];
        let agent = ResearchAgent::new(Arc::clone(&model), tools, max_iterations);

        Self {
            search,
            model,
            agent,
        }
    }

    /// Companies in processing order: `companies` followed by the parent,
    /// empty names dropped. Duplicates are kept.
    pub fn working_set<'a>(companies: &'a [String], parent_company: &'a str) -> Vec<&'a str> {
        companies
            .iter()
            .map(String::as_str)
            .chain(iter::once(parent_company))
            .filter(|company| !company.is_empty())
            .collect()
    }

    /// Research every company, then compare them against the parent.
    ///
    /// A company processed twice keeps only its latest record. Any failure
    /// aborts the run.
    pub async fn run(
        &self,
        companies: &[String],
        parent_company: &str,
    ) -> Result<ResearchResult, AgentError> {
        let start = Instant::now();
        let mut result = ResearchResult::new(parent_company);
        let working_set = Self::working_set(companies, parent_company);

        info!(
            run_id = %result.run_id,
            companies = working_set.len(),
            parent = parent_company,
            "Starting research run"
        );

        for company in working_set {
            let research = self.research_company(company).await?;
            if result.insert(research).is_some() {
                warn!(company, "Company researched more than once; keeping the latest result");
            }
        }

        let analysis = self
            .model
            .prompt(&comparison_prompt(companies, parent_company))
            .await?;
        result.comparative_analysis = Some(analysis);
        result.processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %result.run_id,
            companies = result.len(),
            elapsed_ms = result.processing_time_ms,
            "Research run complete"
        );

        Ok(result)
    }

    /// Direct source search plus an independent agent run for one company.
    pub async fn research_company(&self, company: &str) -> Result<CompanyResearch, AgentError> {
        let start = Instant::now();
        info!(company, "Researching company");

        let raw = self.search.search(&company_search_query(company)).await?;
        let sources = extract_sources(&raw);

        let ai_offerings = self.agent.run(&research_instruction(company)).await?;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(company, sources = sources.len(), elapsed_ms, "Company research complete");

        Ok(CompanyResearch {
            company: company.to_string(),
            ai_offerings,
            sources,
            elapsed_ms,
        })
    }
}
