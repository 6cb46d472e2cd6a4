//! CSV roster input

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// One roster row: the operator's hints for a single author.
///
/// The name column is required. The other columns are optional and read
/// as empty strings when absent; the accessors below apply the
/// blank-is-absent convention.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorHint {
    pub author_name: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub openalex_id: String,
}

impl AuthorHint {
    /// Search name, whitespace-trimmed. May be empty.
    pub fn name(&self) -> &str {
        self.author_name.trim()
    }

    /// Institution hint for narrowing the search, `None` when blank.
    pub fn institution(&self) -> Option<&str> {
        let inst = self.institution.trim();
        (!inst.is_empty()).then_some(inst)
    }

    /// Pre-filled identifier that skips the search step, `None` when blank.
    pub fn known_id(&self) -> Option<&str> {
        let id = self.openalex_id.trim();
        (!id.is_empty()).then_some(id)
    }
}

/// Read all roster rows. An unreadable file is fatal to the run.
pub fn load_roster(path: &Path) -> anyhow::Result<Vec<AuthorHint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Cannot open roster {}", path.display()))?;

    let mut hints = Vec::new();
    for row in reader.deserialize() {
        let hint: AuthorHint =
            row.with_context(|| format!("Malformed roster row in {}", path.display()))?;
        hints.push(hint);
    }
    Ok(hints)
}
