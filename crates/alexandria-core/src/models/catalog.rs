use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The reference symptom set: mock SNOMED CT-style codes for common women's
/// health symptoms. Some codes are reused across phrases on purpose.
pub const REFERENCE_ENTRIES: &[(&str, &str)] = &[
    ("pelvic pain", "21522001"),
    ("lower back pain", "279039007"),
    ("cramps", "84387000"),
    ("dysmenorrhea", "266599000"),
    ("fatigue", "84229001"),
    ("nausea", "422587007"),
    ("migraine", "37796009"),
    ("bloating", "116289008"),
    ("headache", "25064002"),
    ("abdominal pain", "21522001"),
];

/// A single phrase → code mapping in a [`SymptomCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntry {
    /// Lowercase symptom phrase matched against narratives.
    pub phrase: String,
    /// Mock terminology code, a digit string.
    pub code: String,
}

impl CatalogEntry {
    pub fn new(phrase: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            code: code.into(),
        }
    }
}

/// Immutable lookup table from symptom phrase to code.
///
/// Entries keep their insertion order. The scan order used for matching is
/// computed once at construction: longest phrase first, ties broken by
/// insertion order. On the wire a catalog is a JSON array of
/// [`CatalogEntry`] objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct SymptomCatalog {
    entries: Vec<CatalogEntry>,
    scan_order: Vec<usize>,
}

impl SymptomCatalog {
    /// Build the fixed reference catalog.
    pub fn reference() -> Self {
        let entries = REFERENCE_ENTRIES
            .iter()
            .map(|(phrase, code)| CatalogEntry::new(*phrase, *code))
            .collect();
        Self::assemble(entries)
    }

    /// Build a catalog from arbitrary entries, validating each one.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CoreError> {
        let entries: Vec<CatalogEntry> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if entry.phrase.trim().is_empty() || entry.phrase != entry.phrase.to_lowercase() {
                return Err(CoreError::InvalidPhrase(entry.phrase.clone()));
            }
            if entry.code.is_empty() || !entry.code.chars().all(|c| c.is_ascii_digit()) {
                return Err(CoreError::InvalidCode {
                    phrase: entry.phrase.clone(),
                    code: entry.code.clone(),
                });
            }
            if !seen.insert(entry.phrase.as_str()) {
                return Err(CoreError::DuplicatePhrase(entry.phrase.clone()));
            }
        }

        Ok(Self::assemble(entries))
    }

    /// Parse a catalog from a JSON array of `{ "phrase", "code" }` objects.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        let catalog = Self::from_entries(entries)?;
        tracing::info!(entries = catalog.len(), "loaded symptom catalog");
        Ok(catalog)
    }

    fn assemble(entries: Vec<CatalogEntry>) -> Self {
        let mut scan_order: Vec<usize> = (0..entries.len()).collect();
        // `sort_by_key` is stable, so equal lengths keep insertion order.
        scan_order.sort_by_key(|&i| std::cmp::Reverse(entries[i].phrase.chars().count()));
        Self {
            entries,
            scan_order,
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries in matching order: longest phrase first.
    pub fn scan_order(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.scan_order.iter().map(|&i| &self.entries[i])
    }

    pub fn code_for(&self, phrase: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.phrase == phrase)
            .map(|e| e.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymptomCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<CatalogEntry>> for SymptomCatalog {
    type Error = CoreError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<SymptomCatalog> for Vec<CatalogEntry> {
    fn from(catalog: SymptomCatalog) -> Self {
        catalog.entries
    }
}
