// Rust guideline compliant 2026-10-19

//! Sonarbrief Core Library
//!
//! This crate turns SonarCloud findings into a markdown brief for a
//! language model:
//! - Configuration from the environment
//! - A blocking HTTP transport seam and API client
//! - Paginated issue search, code context, and rule lookups
//! - Canned fix instructions and report rendering

pub mod client;
pub mod component;
pub mod config;
pub mod context;
pub mod error;
pub mod issues;
pub mod models;
pub mod prompt;
pub mod report;
pub mod rules;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::{HttpRequest, HttpResponse, SonarClient, Transport, UreqTransport};
pub use component::ComponentPath;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Issue, IssueStatus, IssueType, Severity};
pub use prompt::generate_fix_prompt;
pub use report::{render_block, NO_ISSUES_REPORT};
