// Rust guideline compliant 2026-10-19

//! Data models for SonarCloud API payloads.
//!
//! Field defaults mirror what the report prints when the service omits a
//! value, so a sparse issue still renders a complete block.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of finding reported by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum IssueType {
    /// Maintainability problem.
    CodeSmell,
    /// Reliability problem.
    Bug,
    /// Security problem.
    Vulnerability,
    /// Security-sensitive code that needs review.
    SecurityHotspot,
    /// A type this crate does not know, kept as sent.
    Other(String),
    /// The service sent no type.
    #[default]
    Unknown,
}

impl IssueType {
    /// Returns the API spelling of the type.
    pub fn as_str(&self) -> &str {
        match self {
            IssueType::CodeSmell => "CODE_SMELL",
            IssueType::Bug => "BUG",
            IssueType::Vulnerability => "VULNERABILITY",
            IssueType::SecurityHotspot => "SECURITY_HOTSPOT",
            IssueType::Other(raw) => raw,
            IssueType::Unknown => "UNKNOWN",
        }
    }
}

impl From<String> for IssueType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CODE_SMELL" => IssueType::CodeSmell,
            "BUG" => IssueType::Bug,
            "VULNERABILITY" => IssueType::Vulnerability,
            "SECURITY_HOTSPOT" => IssueType::SecurityHotspot,
            _ => IssueType::Other(raw),
        }
    }
}

/// Severity assigned by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Must be fixed immediately.
    Blocker,
    /// High impact.
    Critical,
    /// Significant impact.
    Major,
    /// Low impact.
    Minor,
    /// Informational only.
    Info,
    /// A severity this crate does not know, kept as sent.
    Other(String),
    /// The service sent no severity.
    #[default]
    Unknown,
}

impl Severity {
    /// Returns the API spelling of the severity.
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Blocker => "BLOCKER",
            Severity::Critical => "CRITICAL",
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Info => "INFO",
            Severity::Other(raw) => raw,
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BLOCKER" => Severity::Blocker,
            "CRITICAL" => Severity::Critical,
            "MAJOR" => Severity::Major,
            "MINOR" => Severity::Minor,
            "INFO" => Severity::Info,
            _ => Severity::Other(raw),
        }
    }
}

/// Workflow status of an issue.
///
/// A missing status is treated as [`IssueStatus::Open`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum IssueStatus {
    /// Newly raised.
    #[default]
    Open,
    /// Acknowledged by a reviewer.
    Confirmed,
    /// Raised again after being resolved.
    Reopened,
    /// Marked fixed or accepted.
    Resolved,
    /// No longer present in the code.
    Closed,
    /// A status this crate does not know, kept as sent.
    Other(String),
}

impl IssueStatus {
    /// Returns the API spelling of the status.
    pub fn as_str(&self) -> &str {
        match self {
            IssueStatus::Open => "OPEN",
            IssueStatus::Confirmed => "CONFIRMED",
            IssueStatus::Reopened => "REOPENED",
            IssueStatus::Resolved => "RESOLVED",
            IssueStatus::Closed => "CLOSED",
            IssueStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for IssueStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OPEN" => IssueStatus::Open,
            "CONFIRMED" => IssueStatus::Confirmed,
            "REOPENED" => IssueStatus::Reopened,
            "RESOLVED" => IssueStatus::Resolved,
            "CLOSED" => IssueStatus::Closed,
            _ => IssueStatus::Other(raw),
        }
    }
}

// API enums travel as plain strings; null reads as the default variant.
macro_rules! api_string_enum {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    Ok(Option::<String>::deserialize(deserializer)?
                        .map(<$ty>::from)
                        .unwrap_or_default())
                }
            }
        )*
    };
}

api_string_enum!(IssueType, Severity, IssueStatus);

/// A single finding returned by `issues/search`.
///
/// An explicit JSON `null` is read the same as a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Service-assigned issue key.
    #[serde(default = "not_available", deserialize_with = "not_available_if_null")]
    pub key: String,
    /// Colon-delimited `project:module:path` identifier.
    #[serde(default = "unknown_component", deserialize_with = "unknown_component_if_null")]
    pub component: String,
    /// Line the issue points at, if any.
    #[serde(default)]
    pub line: Option<u32>,
    /// Kind of finding.
    #[serde(rename = "type", default)]
    pub issue_type: IssueType,
    /// Severity of the finding.
    #[serde(default)]
    pub severity: Severity,
    /// Human-readable message.
    #[serde(default = "no_description", deserialize_with = "no_description_if_null")]
    pub message: String,
    /// Rule identifier, e.g. `typescript:S1128`.
    #[serde(default = "not_available", deserialize_with = "not_available_if_null")]
    pub rule: String,
    /// Estimated remediation effort, e.g. `5min`.
    #[serde(default)]
    pub effort: Option<String>,
    /// Tags attached to the issue.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub tags: Vec<String>,
    /// Workflow status.
    #[serde(default)]
    pub status: IssueStatus,
}

fn not_available() -> String {
    "N/A".to_string()
}

fn unknown_component() -> String {
    "unknown".to_string()
}

fn no_description() -> String {
    "No description".to_string()
}

macro_rules! string_or_default {
    ($($name:ident => $fallback:ident),*) => {
        $(
            fn $name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
                Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else($fallback))
            }
        )*
    };
}

string_or_default!(
    not_available_if_null => not_available,
    unknown_component_if_null => unknown_component,
    no_description_if_null => no_description
);

fn empty_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Paging block of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// 1-based page index.
    #[serde(default)]
    pub page_index: u32,
    /// Requested page size.
    #[serde(default)]
    pub page_size: u32,
    /// Total number of matching issues.
    #[serde(default)]
    pub total: usize,
}

/// One page of `issues/search`.
///
/// Issues stay as raw JSON here so that one malformed entry can be skipped
/// without losing the rest of the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    /// Issues on this page, not yet decoded.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub issues: Vec<serde_json::Value>,
    /// Paging information.
    #[serde(default)]
    pub paging: Paging,
}

/// One line returned by `sources/lines`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLine {
    /// Line number.
    #[serde(default)]
    pub line: Option<u32>,
    /// Source text, possibly with markup.
    #[serde(default)]
    pub code: Option<String>,
}

/// Response of `sources/lines`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceLines {
    /// Requested lines in order.
    #[serde(default)]
    pub sources: Vec<SourceLine>,
}

/// Rule metadata returned by `rules/show`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rule {
    /// Rule key.
    #[serde(default)]
    pub key: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `rules/show`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleResponse {
    /// The requested rule.
    #[serde(default)]
    pub rule: Option<Rule>,
}
