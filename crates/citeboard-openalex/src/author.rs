//! Author profile: wire model, fetch, year-series extraction

use anyhow::Context;
use serde::Deserialize;

use crate::api::ApiClient;

/// OpenAlex author object, trimmed to the fields the dashboard uses
#[derive(Debug, Deserialize)]
pub struct AuthorProfile {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub works_count: i32,

    #[serde(default)]
    pub cited_by_count: i32,

    #[serde(default)]
    pub counts_by_year: Vec<YearCount>,

    #[serde(default)]
    pub last_known_institution: Option<InstitutionRef>,
}

#[derive(Debug, Deserialize)]
pub struct InstitutionRef {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One bucket of the per-year counts list.
///
/// The year is required; the counts default to 0 when the API omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct YearCount {
    pub year: i32,
    #[serde(default)]
    pub works_count: i32,
    #[serde(default)]
    pub cited_by_count: i32,
}

impl AuthorProfile {
    /// Display name of the last known institution, if any.
    pub fn institution(&self) -> Option<String> {
        self.last_known_institution
            .as_ref()
            .and_then(|i| i.display_name.clone())
    }
}

/// Fetch the author object for an identifier (full URL or short form).
pub fn fetch_profile(client: &ApiClient, author_id: &str) -> anyhow::Result<AuthorProfile> {
    let body = client
        .get(&format!("/authors/{author_id}"), &[])
        .with_context(|| format!("Failed to fetch author {author_id}"))?;
    serde_json::from_str(&body).with_context(|| format!("Invalid author JSON for {author_id}"))
}

/// Split `counts_by_year` into index-aligned year/papers/cites series,
/// ascending by year.
///
/// The sort is stable, so duplicate years keep their input order and are
/// not merged.
pub fn year_series(counts: &[YearCount]) -> (Vec<i32>, Vec<i32>, Vec<i32>) {
    let mut sorted: Vec<&YearCount> = counts.iter().collect();
    sorted.sort_by_key(|c| c.year);

    let years = sorted.iter().map(|c| c.year).collect();
    let papers = sorted.iter().map(|c| c.works_count).collect();
    let cites = sorted.iter().map(|c| c.cited_by_count).collect();
    (years, papers, cites)
}
