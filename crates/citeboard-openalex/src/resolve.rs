//! Author identity resolution via the search endpoint

use anyhow::Context;
use serde::Deserialize;

use crate::api::ApiClient;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// A search hit only needs its identifier; ranking is the server's.
#[derive(Debug, Deserialize)]
struct SearchHit {
    id: String,
}

/// Find the best-ranked author identifier for a name, optionally narrowed
/// by an institution hint.
///
/// Returns `Ok(None)` when the search comes back empty. No disambiguation
/// beyond the remote ranking is attempted.
pub fn resolve_author_id(
    client: &ApiClient,
    name: &str,
    institution: Option<&str>,
    per_page: usize,
) -> anyhow::Result<Option<String>> {
    let mut params: Vec<(&str, String)> = vec![
        ("search", name.to_string()),
        ("per-page", per_page.to_string()),
    ];
    if let Some(inst) = institution {
        params.push((
            "filter",
            format!("last_known_institution.display_name.search:{inst}"),
        ));
    }

    let body = client
        .get("/authors", &params)
        .with_context(|| format!("Author search failed for '{name}'"))?;
    let parsed: SearchResponse =
        serde_json::from_str(&body).with_context(|| format!("Invalid search JSON for '{name}'"))?;

    Ok(parsed.results.into_iter().next().map(|hit| hit.id))
}
