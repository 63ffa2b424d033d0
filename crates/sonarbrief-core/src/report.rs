// Rust guideline compliant 2026-10-19

//! Markdown report for language-model consumption.
//!
//! Each issue becomes one fenced `markdown` block holding its metadata,
//! the surrounding code, and a fix instruction. Blocks keep the order in
//! which the service returned the issues.

use crate::client::{SonarClient, Transport};
use crate::component::ComponentPath;
use crate::models::Issue;
use crate::prompt::generate_fix_prompt;

/// Report emitted when the project has no matching issues.
pub const NO_ISSUES_REPORT: &str = "```markdown\nNo issues found in the project.\n```";

const NOT_AVAILABLE: &str = "N/A";

/// Renders the block for one issue from already-fetched context and rule name.
///
/// # Arguments
///
/// * `issue` - The issue to describe
/// * `context` - Rendered code context or placeholder
/// * `rule_description` - Rule display name or `N/A`
pub fn render_block(issue: &Issue, context: &str, rule_description: &str) -> String {
    let path = ComponentPath::parse(&issue.component);
    let line = issue
        .line
        .map(|line| line.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let tags = if issue.tags.is_empty() {
        "None".to_string()
    } else {
        issue.tags.join(", ")
    };

    let mut block = String::from("```markdown\n");
    block.push_str(&format!("Issue Key: {}\n", issue.key));
    block.push_str(&format!("Project: {}\n", path.project.unwrap_or(NOT_AVAILABLE)));
    block.push_str(&format!("Module: {}\n", path.module.unwrap_or(NOT_AVAILABLE)));
    block.push_str(&format!("File: {}\n", path.file));
    block.push_str(&format!("Line: {}\n", line));
    block.push_str(&format!("Type: {}\n", issue.issue_type));
    block.push_str(&format!("Severity: {}\n", issue.severity));
    block.push_str(&format!("Rule ID: {}\n", issue.rule));
    block.push_str(&format!("Rule Description: {}\n", rule_description));
    block.push_str(&format!(
        "Effort to Fix: {}\n",
        issue.effort.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    block.push_str(&format!("Tags: {}\n", tags));
    block.push_str(&format!("Status: {}\n", issue.status));
    block.push_str(&format!("Issue: {}\n", issue.message));
    block.push_str("Code Context:\n");
    block.push_str(context);
    block.push('\n');
    block.push_str(&format!("LLM Fix Prompt: {}\n", generate_fix_prompt(issue)));
    block.push_str("Suggested Fix: (Provide a fix for the above issue)\n");
    block.push_str("```\n");
    block
}

impl<T: Transport> SonarClient<T> {
    /// Formats every issue into the markdown report.
    ///
    /// Context and rule name are fetched per issue, one request at a time.
    /// Issues without a line get a placeholder instead of a context request.
    pub fn format_issues(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return NO_ISSUES_REPORT.to_string();
        }

        issues
            .iter()
            .map(|issue| {
                let context = self.fetch_context(&issue.component, issue.line);
                let rule_description = self.fetch_rule_description(&issue.rule);
                render_block(issue, &context, &rule_description)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Fetches all issues and formats them.
    pub fn generate_report(&self) -> String {
        let issues = self.fetch_issues();
        self.format_issues(&issues)
    }
}
