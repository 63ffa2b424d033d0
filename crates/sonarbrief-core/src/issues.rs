// Rust guideline compliant 2026-10-19

//! Paginated retrieval of open issues.

use crate::client::{SonarClient, Transport};
use crate::models::{Issue, SearchPage};
use tracing::{debug, error, warn};

/// Issues requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Statuses included in the search.
pub const OPEN_STATUSES: &str = "OPEN,CONFIRMED";

/// Extra fields requested with each page.
pub const ADDITIONAL_FIELDS: &str = "flows,rules";

impl<T: Transport> SonarClient<T> {
    /// Collects every open or confirmed issue of the configured project.
    ///
    /// Pages are requested from 1 upwards until the number of collected
    /// issues reaches the total reported by the service. A failed page is
    /// logged and ends pagination; the issues collected so far are returned.
    /// An issue that cannot be decoded is logged and skipped, but still
    /// counts toward the total.
    pub fn fetch_issues(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen = 0usize;
        let mut page = 1u32;

        loop {
            let query = [
                ("projectKeys", self.config().project_key.clone()),
                ("statuses", OPEN_STATUSES.to_string()),
                ("ps", PAGE_SIZE.to_string()),
                ("p", page.to_string()),
                ("additionalFields", ADDITIONAL_FIELDS.to_string()),
            ];

            let data: SearchPage = match self.get_json("issues/search", &query) {
                Ok(data) => data,
                Err(err) => {
                    error!(page, "Error fetching issues: {}", err);
                    break;
                }
            };

            let received = data.issues.len();
            seen += received;
            for (index, raw) in data.issues.into_iter().enumerate() {
                match serde_json::from_value::<Issue>(raw) {
                    Ok(issue) => issues.push(issue),
                    Err(err) => warn!(page, index, "Skipping undecodable issue: {}", err),
                }
            }
            debug!(page, received, total = data.paging.total, "fetched issue page");

            if seen >= data.paging.total || received == 0 {
                break;
            }
            page += 1;
        }

        issues
    }
}
