use super::*;

#[test]
fn defaults_match_stock_markup() {
    let m = Markers::default();
    assert_eq!(m.area, "upload-area");
    assert_eq!(m.card, "doc-upload-card");
    assert_eq!(m.input, "input[type=\"file\"]");
    assert_eq!(m.highlight, "highlight");
    assert_eq!(m.drag_active, "drag-active");
    assert_eq!(m.uploaded, "uploaded");
    assert_eq!(m.preview, "uploaded-file-preview");
    assert!(m.validate().is_ok());
}

#[test]
fn selectors_prefix_classes() {
    let m = Markers::default();
    assert_eq!(m.area_selector(), ".upload-area");
    assert_eq!(m.card_selector(), ".doc-upload-card");
    assert_eq!(m.preview_selector(), ".uploaded-file-preview");
}

#[test]
fn placeholder_selector_joins_entries() {
    let m = Markers::default();
    assert_eq!(m.placeholder_selector().as_deref(), Some("svg, .upload-text, .upload-hint"));
}

#[test]
fn placeholder_selector_skips_blank_entries() {
    let m = Markers { placeholders: vec![" ".into(), ".hint ".into()], ..Markers::default() };
    assert_eq!(m.placeholder_selector().as_deref(), Some(".hint"));
}

#[test]
fn placeholder_selector_none_when_empty() {
    let m = Markers { placeholders: Vec::new(), ..Markers::default() };
    assert_eq!(m.placeholder_selector(), None);
}

#[test]
fn from_json_empty_object_is_default() {
    let m = Markers::from_json("{}");
    assert!(matches!(m, Ok(ref parsed) if *parsed == Markers::default()));
}

#[test]
fn from_json_overrides_some_fields() {
    let Ok(m) = Markers::from_json(r#"{"area": "drop-zone", "uploaded": "has-file"}"#) else {
        panic!("expected valid markers");
    };
    assert_eq!(m.area, "drop-zone");
    assert_eq!(m.uploaded, "has-file");
    assert_eq!(m.card, "doc-upload-card");
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(Markers::from_json("{not json"), Err(ConfigError::Json(_))));
}

#[test]
fn from_json_rejects_whitespace_in_class() {
    let result = Markers::from_json(r#"{"highlight": "is hot"}"#);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidClass { field: "highlight", .. })
    ));
}

#[test]
fn from_json_rejects_empty_class() {
    let result = Markers::from_json(r#"{"preview": ""}"#);
    assert!(matches!(result, Err(ConfigError::InvalidClass { field: "preview", .. })));
}
