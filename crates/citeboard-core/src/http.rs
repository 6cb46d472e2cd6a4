//! Shared HTTP plumbing for API access.
//!
//! Uses async reqwest internally with a shared tokio runtime, but presents
//! a sync interface to the sequential pipeline.

use std::sync::LazyLock;
use std::time::Duration;

/// Total per-request timeout, connect included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Attempts per request before the last status error is returned
pub const MAX_ATTEMPTS: u32 = 4;

/// Linear backoff: 2s * attempt (2s, 4s, 6s, ...)
pub const fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2 * attempt as u64)
}

/// Error types for API requests
#[derive(Debug)]
pub enum ApiError {
    /// Non-success status, kept once the retry budget is spent
    Status { status: u16, url: String },
    /// Connection-level failure (DNS, TLS, timeout); never retried
    Transport(reqwest::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status, url } => write!(f, "HTTP {status} from {url}"),
            Self::Transport(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Status { .. } => None,
            Self::Transport(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
});

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_linear() {
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
        assert_eq!(backoff_delay(3), Duration::from_secs(6));
    }

    #[test]
    fn backoff_covers_full_budget() {
        let total: Duration = (1..MAX_ATTEMPTS).map(backoff_delay).sum();
        assert_eq!(total, Duration::from_secs(12));
    }

    #[test]
    fn display_status() {
        let err = ApiError::Status {
            status: 503,
            url: "https://api.openalex.org/authors".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "HTTP 503 from https://api.openalex.org/authors"
        );
    }
}
