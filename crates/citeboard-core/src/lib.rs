//! Citeboard Core - Common infrastructure for the dashboard pipeline
//!
//! This crate provides the pieces shared by the pipeline crate and the CLI:
//! HTTP client plumbing, logging setup, and progress reporting.

pub mod http;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use http::{ApiError, MAX_ATTEMPTS, SHARED_RUNTIME, backoff_delay, http_client};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, fmt_num};
