use alexandria_core::error::CoreError;
use alexandria_core::models::catalog::{CatalogEntry, SymptomCatalog};

#[test]
fn reference_catalog_covers_required_categories() {
    let catalog = SymptomCatalog::reference();
    for phrase in [
        "pelvic pain",
        "lower back pain",
        "cramps",
        "dysmenorrhea",
        "fatigue",
        "nausea",
        "migraine",
        "bloating",
        "headache",
        "abdominal pain",
    ] {
        assert!(catalog.code_for(phrase).is_some(), "missing {phrase}");
    }
    assert_eq!(catalog.len(), 10);
}

#[test]
fn reference_catalog_aliases_pelvic_and_abdominal_pain() {
    let catalog = SymptomCatalog::reference();
    assert_eq!(catalog.code_for("pelvic pain"), Some("21522001"));
    assert_eq!(catalog.code_for("abdominal pain"), Some("21522001"));
}

#[test]
fn scan_order_is_longest_first_with_stable_ties() {
    let catalog = SymptomCatalog::reference();
    let order: Vec<&str> = catalog.scan_order().map(|e| e.phrase.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "lower back pain",
            "abdominal pain",
            "dysmenorrhea",
            "pelvic pain",
            "migraine",
            "bloating",
            "headache",
            "fatigue",
            "cramps",
            "nausea",
        ]
    );
}

#[test]
fn duplicate_phrase_is_rejected() {
    let err = SymptomCatalog::from_entries(vec![
        CatalogEntry::new("nausea", "1"),
        CatalogEntry::new("nausea", "2"),
    ])
    .unwrap_err();
    assert!(matches!(err, CoreError::DuplicatePhrase(p) if p == "nausea"));
}

#[test]
fn uppercase_or_empty_phrase_is_rejected() {
    let err = SymptomCatalog::from_entries(vec![CatalogEntry::new("Nausea", "1")]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidPhrase(_)));

    let err = SymptomCatalog::from_entries(vec![CatalogEntry::new("  ", "1")]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidPhrase(_)));
}

#[test]
fn non_numeric_code_is_rejected() {
    let err = SymptomCatalog::from_entries(vec![CatalogEntry::new("nausea", "42A")]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidCode { .. }));
}

#[test]
fn json_catalog_preserves_entry_order() {
    let json = r#"[
        {"phrase": "dizziness", "code": "404640003"},
        {"phrase": "chest pain", "code": "29857009"}
    ]"#;
    let catalog = SymptomCatalog::from_json(json).unwrap();
    assert_eq!(catalog.entries()[0].phrase, "dizziness");
    assert_eq!(catalog.scan_order().next().unwrap().phrase, "chest pain");
}

#[test]
fn json_catalog_validates_entries() {
    let json = r#"[{"phrase": "dizziness", "code": ""}]"#;
    assert!(matches!(
        SymptomCatalog::from_json(json),
        Err(CoreError::InvalidCode { .. })
    ));
    assert!(matches!(
        SymptomCatalog::from_json("{not json"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn catalog_serializes_as_entry_array() {
    let catalog = SymptomCatalog::reference();
    let value = serde_json::to_value(&catalog).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 10);
    assert_eq!(array[0]["phrase"], "pelvic pain");
    assert_eq!(array[0]["code"], "21522001");

    let back: SymptomCatalog = serde_json::from_value(value).unwrap();
    assert_eq!(back, catalog);
}
