// Rust guideline compliant 2026-10-19

//! Parsing of colon-delimited component keys.

/// Parts of a `project:module:path` component key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentPath<'a> {
    /// First segment, present when there are at least two segments.
    pub project: Option<&'a str>,
    /// Second segment, present only when there are at least three segments.
    ///
    /// A two-segment key such as `proj:src/app.ts` therefore has no module.
    pub module: Option<&'a str>,
    /// Last segment.
    pub file: &'a str,
}

impl<'a> ComponentPath<'a> {
    /// Splits a component key on `:`.
    pub fn parse(component: &'a str) -> Self {
        let parts: Vec<&str> = component.split(':').collect();
        Self {
            project: (parts.len() > 1).then(|| parts[0]),
            module: (parts.len() > 2).then(|| parts[1]),
            file: parts.last().copied().unwrap_or(component),
        }
    }
}
