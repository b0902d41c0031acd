use thiserror::Error;

/// Errors from fetching a single profile.
///
/// These never reach the UI: a failed profile is logged and dropped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid {endpoint} URL: {reason}")]
    Url {
        endpoint: &'static str,
        reason: String,
    },

    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} response is missing '{field}'")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },

    #[error("Fetch task failed: {0}")]
    Task(String),
}
