// Rust guideline compliant 2026-10-19

//! Canned remediation instructions for well-known findings.
//!
//! Matching is exact and case-sensitive on both the issue type and the
//! message. Parameterized or reworded messages fall back to
//! [`DEFAULT_PROMPT`].

use crate::models::{Issue, IssueType};

/// Instruction used when no entry matches.
pub const DEFAULT_PROMPT: &str = "Analyze the issue and provide a concise fix, adhering to best practices for TypeScript and React where applicable.";

/// A curated instruction for one (type, message) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    /// Issue type the entry applies to.
    pub issue_type: IssueType,
    /// Exact issue message.
    pub message: &'static str,
    /// Instruction handed to the model.
    pub instruction: &'static str,
}

/// Curated (type, message) instructions.
pub const PROMPTS: &[PromptEntry] = &[
    PromptEntry {
        issue_type: IssueType::CodeSmell,
        message: "Remove this unused import",
        instruction: "Remove the specified import statement from the file.",
    },
    PromptEntry {
        issue_type: IssueType::CodeSmell,
        message: "A form label must be associated with a control",
        instruction: "Add an `htmlFor` attribute to the label linking it to the corresponding input's `id` in JSX, ensuring accessibility compliance (WCAG 2.1).",
    },
    PromptEntry {
        issue_type: IssueType::CodeSmell,
        message: "Do not use Array index in keys",
        instruction: "Replace array index with a unique identifier (e.g., item ID) for the React key prop to prevent rendering issues.",
    },
    PromptEntry {
        issue_type: IssueType::CodeSmell,
        message: "Extract this nested ternary operation",
        instruction: "Refactor the nested ternary into separate if-statements or a variable assignment for clarity.",
    },
    PromptEntry {
        issue_type: IssueType::CodeSmell,
        message: "Prefer `globalThis` over `window`",
        instruction: "Replace `window` with `globalThis` for better compatibility in Node and browser environments.",
    },
    PromptEntry {
        issue_type: IssueType::CodeSmell,
        message: "Unexpected lexical declaration in case block",
        instruction: "Move the `let` or `const` declaration outside the case block or wrap it in a block scope `{}`.",
    },
    PromptEntry {
        issue_type: IssueType::Bug,
        message: "Visible, non-interactive elements with click handlers",
        instruction: "Add a `role` attribute (e.g., `button`) and keyboard event listeners (e.g., `onKeyDown`) to ensure accessibility.",
    },
    PromptEntry {
        issue_type: IssueType::Bug,
        message: "Do not add `then` to an object",
        instruction: "Remove the invalid `then` property from the object, as it may cause runtime errors.",
    },
];

/// Looks up the instruction for a type and message.
pub fn lookup_prompt(issue_type: &IssueType, message: &str) -> Option<&'static str> {
    PROMPTS
        .iter()
        .find(|entry| entry.issue_type == *issue_type && entry.message == message)
        .map(|entry| entry.instruction)
}

/// Returns the fix instruction for an issue.
pub fn generate_fix_prompt(issue: &Issue) -> &'static str {
    lookup_prompt(&issue.issue_type, &issue.message).unwrap_or(DEFAULT_PROMPT)
}
