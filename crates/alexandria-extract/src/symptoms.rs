use alexandria_core::models::catalog::{CatalogEntry, SymptomCatalog};

/// Return the catalog entries whose phrase occurs in `lowered`.
///
/// `lowered` must already be lowercased. Phrases are tested longest first
/// with a plain substring check: no word boundaries, no negation, so
/// "no pain" still matches and "fatigued" matches "fatigue".
pub fn match_symptoms<'c>(catalog: &'c SymptomCatalog, lowered: &str) -> Vec<&'c CatalogEntry> {
    let mut found: Vec<&CatalogEntry> = Vec::new();
    for entry in catalog.scan_order() {
        if lowered.contains(entry.phrase.as_str())
            && !found.iter().any(|f| f.phrase == entry.phrase)
        {
            found.push(entry);
        }
    }
    found
}
