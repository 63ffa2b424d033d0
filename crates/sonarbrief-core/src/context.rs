// Rust guideline compliant 2026-10-19

//! Source-code context around an issue.

use crate::client::{SonarClient, Transport};
use crate::models::{SourceLine, SourceLines};
use crate::Error;
use tracing::warn;

/// Lines shown on each side of the issue line.
pub const CONTEXT_RADIUS: u32 = 5;

/// Placeholder for an issue that does not point at a line.
pub const NO_LINE_PLACEHOLDER: &str = "(No context available: issue has no line number)";

/// Placeholder for a successful response with no lines.
pub const EMPTY_CONTEXT_PLACEHOLDER: &str = "(No context available)";

/// Returns the inclusive line range fetched around `line`.
pub fn context_window(line: u32) -> (u32, u32) {
    (
        line.saturating_sub(CONTEXT_RADIUS).max(1),
        line.saturating_add(CONTEXT_RADIUS),
    )
}

/// Renders source lines as `<line>: <code>`, one per line, trimmed.
pub fn render_context(lines: &[SourceLine]) -> String {
    lines
        .iter()
        .map(|source| {
            let number = source.line.map(|n| n.to_string()).unwrap_or_default();
            format!("{}: {}", number, source.code.as_deref().unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

impl<T: Transport> SonarClient<T> {
    /// Fetches the lines around `line` in `file_key`.
    ///
    /// Never fails: a missing line, a failed request, and an empty answer
    /// each produce their own placeholder text. Failures are logged.
    ///
    /// # Arguments
    ///
    /// * `file_key` - Component key of the file
    /// * `line` - Issue line, if known
    pub fn fetch_context(&self, file_key: &str, line: Option<u32>) -> String {
        let Some(line) = line else {
            return NO_LINE_PLACEHOLDER.to_string();
        };

        let (from, to) = context_window(line);
        let query = [
            ("key", file_key.to_string()),
            ("from", from.to_string()),
            ("to", to.to_string()),
        ];

        match self.get_json::<SourceLines>("sources/lines", &query) {
            Ok(data) => {
                let context = render_context(&data.sources);
                if context.is_empty() {
                    EMPTY_CONTEXT_PLACEHOLDER.to_string()
                } else {
                    context
                }
            }
            Err(Error::Status { status, .. }) => {
                warn!(file_key, status, "Failed to fetch context");
                format!("(Failed to fetch context: HTTP {})", status)
            }
            Err(err) => {
                warn!(file_key, "Failed to fetch context: {}", err);
                format!("(Failed to fetch context: {})", err)
            }
        }
    }
}
