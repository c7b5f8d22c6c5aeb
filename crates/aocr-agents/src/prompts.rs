/// Description advertised for the `web_search` tool.
pub const WEB_SEARCH_DESCRIPTION: &str =
    "Conduct targeted web searches for AI offerings and case studies";

pub fn research_system_prompt() -> String {
    "You are an expert AI research analyst. Your task is to comprehensively document:\n\
     1. Detailed AI offerings of the company\n\
     2. Specific case studies and client implementations (mention client names if found)\n\
     3. Technological innovations and unique AI solutions\n\n\
     Use available tools to gather information. Provide clear, structured, and verifiable insights."
        .to_string()
}

/// Query for the orchestrator's direct source search. The search client
/// appends its own suffix.
pub fn company_search_query(company: &str) -> String {
    format!("{company} AI offerings technology case studies client projects")
}

pub fn research_instruction(company: &str) -> String {
    format!(
        "Comprehensive analysis of {company}'s AI offerings, technological capabilities, \
         and notable case studies. Provide detailed insights into their AI implementations."
    )
}

/// Names every entry of `companies` as given, empty ones included.
pub fn comparison_prompt(companies: &[String], parent_company: &str) -> String {
    format!(
        "Compare the AI capabilities of {} in relation to {parent_company}.\n\
         Analyze:\n\
         1. Technological strengths and unique offerings\n\
         2. Comparative advantages\n\
         3. Potential competitive positioning\n\
         Focus specifically on how the other companies compare to {parent_company}.",
        companies.join(", ")
    )
}
