use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::source::Source;

/// Research output for a single company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyResearch {
    pub company: String,
    /// Free-form prose written by the research agent.
    pub ai_offerings: String,
    /// Sources from the orchestrator's direct search, in first-seen order.
    pub sources: Vec<Source>,
    pub elapsed_ms: u64,
}

/// Everything produced by one orchestration run.
///
/// Company records keep the position of their first insertion. Re-inserting a
/// company replaces its record in place, so the last write wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchResult {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub parent_company: String,
    companies: Vec<CompanyResearch>,
    pub comparative_analysis: Option<String>,
    pub processing_time_ms: u64,
}

impl ResearchResult {
    pub fn new(parent_company: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            parent_company: parent_company.into(),
            companies: Vec::new(),
            comparative_analysis: None,
            processing_time_ms: 0,
        }
    }

    /// Insert a company record. Returns the replaced record, if any.
    pub fn insert(&mut self, research: CompanyResearch) -> Option<CompanyResearch> {
        match self
            .companies
            .iter_mut()
            .find(|existing| existing.company == research.company)
        {
            Some(existing) => Some(std::mem::replace(existing, research)),
            None => {
                self.companies.push(research);
                None
            }
        }
    }

    pub fn get(&self, company: &str) -> Option<&CompanyResearch> {
        self.companies.iter().find(|r| r.company == company)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompanyResearch> {
        self.companies.iter()
    }

    pub fn company_names(&self) -> Vec<&str> {
        self.companies.iter().map(|r| r.company.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
