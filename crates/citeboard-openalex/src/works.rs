//! Works pagination and h-index computation

use anyhow::Context;
use serde::Deserialize;

use crate::api::ApiClient;

/// Sentinel cursor that starts a pagination sequence
const INITIAL_CURSOR: &str = "*";

#[derive(Debug, Deserialize)]
struct WorksPage {
    #[serde(default)]
    results: Vec<WorkItem>,
    #[serde(default)]
    meta: PageMeta,
}

#[derive(Debug, Default, Deserialize)]
struct PageMeta {
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorkItem {
    #[serde(default)]
    cited_by_count: i32,
}

/// Why pagination stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageExit {
    /// A page came back with zero results
    EmptyPage,
    /// `meta.next_cursor` was missing or empty
    CursorExhausted,
    /// The running fetched-count reached the per-author cap
    CapReached,
}

/// Next step after a page has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageStep {
    Continue(String),
    Stop(PageExit),
}

/// Decide whether pagination continues.
///
/// Conditions are checked in order: empty page, cursor exhaustion, cap.
/// The cap check runs between pages only, so the final page may overshoot
/// the cap; it is not clipped.
fn page_step(page_len: usize, next_cursor: Option<String>, fetched: usize, cap: usize) -> PageStep {
    if page_len == 0 {
        return PageStep::Stop(PageExit::EmptyPage);
    }
    match next_cursor.filter(|c| !c.is_empty()) {
        None => PageStep::Stop(PageExit::CursorExhausted),
        Some(_) if fetched >= cap => PageStep::Stop(PageExit::CapReached),
        Some(cursor) => PageStep::Continue(cursor),
    }
}

/// Outcome of one citation walk.
#[derive(Debug)]
pub struct CitationFetch {
    /// Per-work citation counts in fetch order
    pub citations: Vec<i32>,
    /// Pages requested, including the final short or empty page
    pub pages: usize,
    pub exit: PageExit,
}

/// Collect `cited_by_count` across an author's works via cursor pagination.
///
/// Selects only the citation-count field per work. Returns the counts in
/// fetch order together with the exit condition that ended the walk.
/// A zero cap returns an empty fetch without issuing any request.
pub fn fetch_citations(
    client: &ApiClient,
    author_id: &str,
    per_page: usize,
    cap: usize,
) -> anyhow::Result<CitationFetch> {
    if cap == 0 {
        return Ok(CitationFetch {
            citations: Vec::new(),
            pages: 0,
            exit: PageExit::CapReached,
        });
    }

    let filter = format!("author.id:{author_id}");
    let mut citations: Vec<i32> = Vec::new();
    let mut pages = 0usize;
    let mut cursor = INITIAL_CURSOR.to_string();

    loop {
        let params: Vec<(&str, String)> = vec![
            ("filter", filter.clone()),
            ("select", "cited_by_count".to_string()),
            ("per-page", per_page.to_string()),
            ("cursor", cursor),
        ];
        let body = client
            .get("/works", &params)
            .with_context(|| format!("Works fetch failed for {author_id}"))?;
        let page: WorksPage = serde_json::from_str(&body)
            .with_context(|| format!("Invalid works JSON for {author_id}"))?;
        pages += 1;

        let page_len = page.results.len();
        citations.extend(page.results.iter().map(|w| w.cited_by_count));

        match page_step(page_len, page.meta.next_cursor, citations.len(), cap) {
            PageStep::Continue(next) => cursor = next,
            PageStep::Stop(exit) => {
                return Ok(CitationFetch {
                    citations,
                    pages,
                    exit,
                });
            }
        }
    }
}

/// Largest rank i (1-based) such that the i-th most cited work has at
/// least i citations.
///
/// Returns `None` for an empty list: an author with no collected works has
/// an unknown h-index, not zero.
pub fn h_index(citations: &[i32]) -> Option<i32> {
    if citations.is_empty() {
        return None;
    }
    let mut sorted = citations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut h = 0;
    for (idx, &count) in sorted.iter().enumerate() {
        let rank = idx as i32 + 1;
        if count >= rank {
            h = rank;
        } else {
            break;
        }
    }
    Some(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_index_worked_example() {
        assert_eq!(h_index(&[10, 8, 5, 4, 3]), Some(4));
    }

    #[test]
    fn h_index_uniform_counts() {
        assert_eq!(h_index(&[5, 5, 5, 5, 5]), Some(5));
    }

    #[test]
    fn h_index_all_zero() {
        assert_eq!(h_index(&[0, 0, 0]), Some(0));
    }

    #[test]
    fn h_index_empty_is_unknown() {
        assert_eq!(h_index(&[]), None);
    }

    #[test]
    fn h_index_single_work() {
        assert_eq!(h_index(&[0]), Some(0));
        assert_eq!(h_index(&[1]), Some(1));
        assert_eq!(h_index(&[100]), Some(1));
    }

    #[test]
    fn h_index_sorts_internally() {
        assert_eq!(h_index(&[3, 10, 4, 8, 5]), Some(4));
    }

    #[test]
    fn h_index_does_not_mutate_input() {
        let citations = vec![1, 3, 2];
        let _ = h_index(&citations);
        assert_eq!(citations, vec![1, 3, 2]);
    }

    #[test]
    fn empty_page_stops_first() {
        // empty page wins even with a live cursor and room under the cap
        let step = page_step(0, Some("tok".to_string()), 0, 2000);
        assert_eq!(step, PageStep::Stop(PageExit::EmptyPage));
    }

    #[test]
    fn missing_cursor_exhausts() {
        let step = page_step(200, None, 200, 2000);
        assert_eq!(step, PageStep::Stop(PageExit::CursorExhausted));
    }

    #[test]
    fn empty_string_cursor_exhausts() {
        let step = page_step(200, Some(String::new()), 200, 2000);
        assert_eq!(step, PageStep::Stop(PageExit::CursorExhausted));
    }

    #[test]
    fn cursor_checked_before_cap() {
        // both conditions hold; exhaustion is reported, matching the
        // left-to-right continue test
        let step = page_step(200, None, 2000, 2000);
        assert_eq!(step, PageStep::Stop(PageExit::CursorExhausted));
    }

    #[test]
    fn cap_reached_between_pages() {
        let step = page_step(200, Some("tok".to_string()), 2000, 2000);
        assert_eq!(step, PageStep::Stop(PageExit::CapReached));
    }

    #[test]
    fn continues_under_cap() {
        let step = page_step(200, Some("tok".to_string()), 1800, 2000);
        assert_eq!(step, PageStep::Continue("tok".to_string()));
    }

    #[test]
    fn zero_cap_makes_no_requests() {
        // dead port: any request would fail the call with a transport error
        let client = ApiClient::new("http://127.0.0.1:9", "");
        let fetch = fetch_citations(&client, "https://openalex.org/A1", 200, 0).unwrap();
        assert!(fetch.citations.is_empty());
        assert_eq!(fetch.pages, 0);
        assert_eq!(fetch.exit, PageExit::CapReached);
    }

    #[test]
    fn parse_works_page() {
        let body = r#"{
            "results": [
                {"cited_by_count": 12},
                {"cited_by_count": 0},
                {}
            ],
            "meta": {"count": 3, "next_cursor": "IlszMF0i"}
        }"#;
        let page: WorksPage = serde_json::from_str(body).unwrap();
        let counts: Vec<i32> = page.results.iter().map(|w| w.cited_by_count).collect();
        assert_eq!(counts, vec![12, 0, 0]);
        assert_eq!(page.meta.next_cursor.as_deref(), Some("IlszMF0i"));
    }

    #[test]
    fn parse_works_page_without_meta() {
        let page: WorksPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(page.results.is_empty());
        assert!(page.meta.next_cursor.is_none());
    }

    #[test]
    fn parse_works_page_null_cursor() {
        let body = r#"{"results": [{"cited_by_count": 1}], "meta": {"next_cursor": null}}"#;
        let page: WorksPage = serde_json::from_str(body).unwrap();
        assert!(page.meta.next_cursor.is_none());
    }
}
