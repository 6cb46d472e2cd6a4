//! Citeboard OpenAlex - author metrics pipeline
//!
//! This crate resolves author identities against the OpenAlex REST API,
//! fetches profile and per-work citation data, and assembles the JSON
//! data file behind the dashboard.
//!
//! # Example
//!
//! ```no_run
//! use citeboard_core::ProgressContext;
//! use citeboard_openalex::{Config, run};
//!
//! let config = Config {
//!     roster_path: "authors.csv".into(),
//!     ..Default::default()
//! };
//!
//! let progress = ProgressContext::new();
//! let summary = run(&config, &progress).expect("Pipeline failed");
//! println!("Wrote {} author records", summary.records_written);
//! ```

pub mod api;
pub mod author;
pub mod config;
pub mod record;
pub mod resolve;
pub mod roster;
pub mod runner;
pub mod stats;
pub mod works;

// Re-exports for convenience
pub use config::Config;
pub use runner::run;
pub use stats::RunSummary;
