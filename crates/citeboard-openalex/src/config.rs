//! Dashboard pipeline configuration

use std::path::PathBuf;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openalex.org";

/// Placeholder contact address, used when OPENALEX_MAILTO is unset
pub const DEFAULT_MAILTO: &str = "YOUR_EMAIL@example.com";

/// Runtime configuration for the dashboard pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV roster of authors to process
    pub roster_path: PathBuf,
    /// Destination of the dashboard JSON artifact
    pub output_path: PathBuf,
    /// API endpoint
    pub base_url: String,
    /// Contact address sent with every request (empty string disables)
    pub mailto: String,
    /// Candidate results requested per author search
    pub search_per_page: usize,
    /// Works fetched per page during citation aggregation
    pub works_per_page: usize,
    /// Cap on works fetched per author
    pub max_works: usize,
    /// Process only the first N roster rows
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("authors.csv"),
            output_path: PathBuf::from("site/data/authors.json"),
            base_url: DEFAULT_BASE_URL.to_string(),
            mailto: mailto_from_env(),
            search_per_page: 5,
            works_per_page: 200,
            max_works: 2000,
            limit: None,
        }
    }
}

/// Contact address from OPENALEX_MAILTO, falling back to the placeholder.
///
/// A variable set to the empty string disables the contact parameter
/// entirely, it does not fall back.
pub fn mailto_from_env() -> String {
    std::env::var("OPENALEX_MAILTO").unwrap_or_else(|_| DEFAULT_MAILTO.to_string())
}
