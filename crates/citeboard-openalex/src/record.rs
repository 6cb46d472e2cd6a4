//! Dashboard output document

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// One normalized author entry in the dashboard artifact.
///
/// Field order here is the field order in the emitted JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorRecord {
    pub name: String,
    pub openalex_id: String,
    pub institution: Option<String>,
    pub works_count: i32,
    pub cited_by_count: i32,
    pub h_index: Option<i32>,
    pub years: Vec<i32>,
    pub papers_by_year: Vec<i32>,
    pub cites_by_year: Vec<i32>,
    pub updated_at: String,
}

/// Top-level dashboard artifact.
#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
    pub generated_at: String,
    pub authors: Vec<AuthorRecord>,
}

/// Current UTC time as an RFC 3339 string with microseconds.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serialize the document pretty-printed and write it to `path`,
/// creating parent directories as needed. An existing file is replaced.
pub fn write_dashboard(doc: &OutputDocument, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create output directory {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string_pretty(doc).context("Cannot serialize dashboard")?;
    fs::write(path, body).with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AuthorRecord {
        AuthorRecord {
            name: "Ada Lovelace".to_string(),
            openalex_id: "https://openalex.org/A5023888391".to_string(),
            institution: Some("Analytical Engine Institute".to_string()),
            works_count: 42,
            cited_by_count: 1234,
            h_index: Some(17),
            years: vec![2023, 2024],
            papers_by_year: vec![20, 22],
            cites_by_year: vec![600, 634],
            updated_at: "2026-01-01T00:00:00.000000Z".to_string(),
        }
    }

    #[test]
    fn record_serializes_in_output_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let id_pos = json.find("\"openalex_id\"").unwrap();
        let h_pos = json.find("\"h_index\"").unwrap();
        let updated_pos = json.find("\"updated_at\"").unwrap();
        assert!(name_pos < id_pos);
        assert!(id_pos < h_pos);
        assert!(h_pos < updated_pos);
    }

    #[test]
    fn unknown_h_index_serializes_as_null() {
        let mut record = sample_record();
        record.h_index = None;
        record.institution = None;
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"h_index\":null"));
        assert!(json.contains("\"institution\":null"));
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let stamp = timestamp();
        assert!(stamp.ends_with('Z'));
        // date, time, and a 6-digit fractional part
        assert_eq!(stamp.len(), "2026-01-01T00:00:00.000000Z".len());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("data").join("authors.json");
        let doc = OutputDocument {
            generated_at: timestamp(),
            authors: vec![sample_record()],
        };

        write_dashboard(&doc, &path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("{\n  \"generated_at\""));
        assert!(!body.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["authors"][0]["name"], "Ada Lovelace");
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("authors.json");
        fs::write(&path, "stale").unwrap();

        let doc = OutputDocument {
            generated_at: timestamp(),
            authors: Vec::new(),
        };
        write_dashboard(&doc, &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["authors"].as_array().unwrap().len(), 0);
    }
}
