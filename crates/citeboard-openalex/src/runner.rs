//! Pipeline orchestration for the dashboard build

use std::time::Instant;

use citeboard_core::ProgressContext;

use crate::api::ApiClient;
use crate::author::{fetch_profile, year_series};
use crate::config::Config;
use crate::record::{AuthorRecord, OutputDocument, timestamp, write_dashboard};
use crate::resolve::resolve_author_id;
use crate::roster::load_roster;
use crate::stats::RunSummary;
use crate::works::{fetch_citations, h_index};

/// Run the dashboard build pipeline.
///
/// Reads the roster, resolves and fetches every author sequentially, and
/// writes the artifact once all rows are processed. An unresolvable row is
/// skipped with a warning; any other API failure aborts the run and leaves
/// the previous artifact untouched.
pub fn run(config: &Config, progress: &ProgressContext) -> anyhow::Result<RunSummary> {
    let start = Instant::now();
    let generated_at = timestamp();

    let mut hints = load_roster(&config.roster_path)?;
    if let Some(limit) = config.limit {
        hints.truncate(limit);
    }
    let roster_rows = hints.len();

    log::info!(
        "Building dashboard for {} roster rows from {}",
        roster_rows,
        config.roster_path.display()
    );

    let client = ApiClient::new(&config.base_url, &config.mailto);
    let bar = progress.roster_bar(roster_rows as u64);

    let mut records: Vec<AuthorRecord> = Vec::with_capacity(roster_rows);
    let mut unresolved = 0usize;
    let mut h_index_failures = 0usize;
    let mut works_pages = 0usize;

    for hint in &hints {
        bar.set_message(hint.name().to_string());

        let author_id = match hint.known_id() {
            Some(id) => id.to_string(),
            None => {
                let resolved = resolve_author_id(
                    &client,
                    hint.name(),
                    hint.institution(),
                    config.search_per_page,
                )?;
                match resolved {
                    Some(id) => id,
                    None => {
                        log::warn!("Could not resolve '{}', skipping", hint.name());
                        unresolved += 1;
                        bar.inc(1);
                        continue;
                    }
                }
            }
        };

        let profile = fetch_profile(&client, &author_id)?;
        let (years, papers_by_year, cites_by_year) = year_series(&profile.counts_by_year);

        let h = match fetch_citations(
            &client,
            &author_id,
            config.works_per_page,
            config.max_works,
        ) {
            Ok(fetch) => {
                works_pages += fetch.pages;
                log::debug!(
                    "{author_id}: {} works in {} pages ({:?})",
                    fetch.citations.len(),
                    fetch.pages,
                    fetch.exit
                );
                h_index(&fetch.citations)
            }
            Err(e) => {
                log::warn!("H-index unavailable for '{}': {e:#}", hint.name());
                h_index_failures += 1;
                None
            }
        };

        let name = profile
            .display_name
            .clone()
            .unwrap_or_else(|| hint.name().to_string());

        if !progress.is_tty() {
            let h_label = h.map_or_else(|| "unknown".to_string(), |v| v.to_string());
            log::info!(
                "{name}: {} works, {} citations, h-index {h_label}",
                profile.works_count,
                profile.cited_by_count
            );
        }

        records.push(AuthorRecord {
            name,
            openalex_id: author_id,
            institution: profile.institution(),
            works_count: profile.works_count,
            cited_by_count: profile.cited_by_count,
            h_index: h,
            years,
            papers_by_year,
            cites_by_year,
            updated_at: timestamp(),
        });
        bar.inc(1);
    }

    bar.finish_and_clear();

    let doc = OutputDocument {
        generated_at,
        authors: records,
    };
    write_dashboard(&doc, &config.output_path)?;
    println!(
        "Wrote {} with {} authors",
        config.output_path.display(),
        doc.authors.len()
    );

    Ok(RunSummary {
        roster_rows,
        records_written: doc.authors.len(),
        unresolved,
        h_index_failures,
        works_pages,
        output_path: config.output_path.clone(),
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn missing_roster_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            roster_path: dir.path().join("no_such.csv"),
            output_path: dir.path().join("authors.json"),
            ..Default::default()
        };

        let err = run(&config, &ProgressContext::new()).unwrap_err();
        assert!(err.to_string().contains("Cannot open roster"));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn empty_roster_writes_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = dir.path().join("authors.csv");
        let mut roster = fs::File::create(&roster_path).unwrap();
        writeln!(roster, "author_name,institution,openalex_id").unwrap();

        let config = Config {
            roster_path,
            output_path: dir.path().join("site").join("authors.json"),
            ..Default::default()
        };

        let summary = run(&config, &ProgressContext::new()).unwrap();
        assert_eq!(summary.roster_rows, 0);
        assert_eq!(summary.records_written, 0);
        assert_eq!(summary.unresolved, 0);

        let body = fs::read_to_string(&config.output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(parsed["generated_at"].is_string());
        assert_eq!(parsed["authors"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn limit_truncates_roster() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = dir.path().join("authors.csv");
        let mut roster = fs::File::create(&roster_path).unwrap();
        writeln!(roster, "author_name,institution,openalex_id").unwrap();
        writeln!(roster, "A,,").unwrap();
        writeln!(roster, "B,,").unwrap();

        let config = Config {
            roster_path,
            output_path: dir.path().join("authors.json"),
            base_url: "http://127.0.0.1:9".to_string(),
            limit: Some(0),
            ..Default::default()
        };

        // limit 0 drops every row before any request is made
        let summary = run(&config, &ProgressContext::new()).unwrap();
        assert_eq!(summary.roster_rows, 0);
        assert_eq!(summary.records_written, 0);
    }
}
