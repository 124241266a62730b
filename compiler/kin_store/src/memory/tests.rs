use super::*;
use pretty_assertions::assert_eq;

#[test]
fn insert_and_lookup() {
    let mut store = MemoryStore::new();
    store.insert(RecordNode::new("INDI").with_xref("@I2@"));
    store.insert(RecordNode::new("INDI").with_xref("@I1@"));
    store.insert(RecordNode::new("HEAD"));

    assert_eq!(store.len(), 2);
    assert_eq!(store.keys(), vec!["@I1@", "@I2@"]);
    assert_eq!(store.record("@I1@").unwrap().tag(), "INDI");
    assert!(store.record("@I9@").is_none());
}

#[test]
fn from_gedcom_indexes_level_zero_records() {
    let store = MemoryStore::from_gedcom(
        "0 HEAD\n0 @I1@ INDI\n1 NAME Ann /Lee/\n0 @F1@ FAM\n1 WIFE @I1@\n0 TRLR\n",
    )
    .unwrap();
    assert_eq!(store.keys(), vec!["@F1@", "@I1@"]);
    assert_eq!(
        store.record("@F1@").unwrap().child_value("WIFE"),
        Some("@I1@")
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = MemoryStore::load(Path::new("/nonexistent/tree.ged")).unwrap_err();
    assert!(matches!(err, GedcomError::Io { .. }));
}
