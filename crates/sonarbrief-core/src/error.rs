// Rust guideline compliant 2026-10-19

//! Error types for the Sonarbrief core library.

use thiserror::Error;

/// Result type alias for Sonarbrief operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Sonarbrief operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is missing or empty.
    #[error("{name} environment variable is required. Set it with: export {name}='{hint}'")]
    MissingEnv {
        /// Name of the variable.
        name: &'static str,
        /// Example value shown to the operator.
        hint: &'static str,
    },

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the service.
        body: String,
    },
}
