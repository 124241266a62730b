use super::*;
use crate::{RecordNode, RecordRef};
use pretty_assertions::assert_eq;

#[test]
fn truthiness() {
    assert_eq!(Value::Null.truthy(), Ok(false));
    assert_eq!(Value::Bool(true).truthy(), Ok(true));
    assert_eq!(Value::Int(0).truthy(), Ok(false));
    assert_eq!(Value::Int(-3).truthy(), Ok(true));
    assert_eq!(Value::Float(0.0).truthy(), Ok(false));
    assert_eq!(Value::string("").truthy(), Ok(false));
    assert_eq!(Value::string("x").truthy(), Ok(true));
    assert_eq!(
        Value::Record(RecordRef::new(RecordNode::new("INDI"))).truthy(),
        Ok(true)
    );
}

#[test]
fn containers_cannot_be_tested() {
    for value in [Value::empty_list(), Value::table(), Value::sequence()] {
        let err = value.truthy().unwrap_err();
        assert!(matches!(err.kind, crate::EvalErrorKind::TypeMismatch { .. }));
    }
}

#[test]
fn numeric_equality_crosses_int_and_float() {
    assert_eq!(Value::Int(2), Value::Float(2.0));
    assert_ne!(Value::Int(2), Value::string("2"));
    assert_ne!(Value::Null, Value::Int(0));
    assert_eq!(Value::Null, Value::Null);
}

#[test]
fn containers_compare_by_identity() {
    let a = Value::list([Value::Int(1)]);
    let b = Value::list([Value::Int(1)]);
    assert_ne!(a, b);
    assert_eq!(a.clone(), a);
}

#[test]
fn cloned_list_aliases_the_same_storage() {
    let a = Value::empty_list();
    let b = a.clone();
    if let Value::List(items) = &a {
        items.borrow_mut().push_back(Value::Int(7));
    }
    match &b {
        Value::List(items) => assert_eq!(items.borrow().len(), 1),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn ordering() {
    assert_eq!(Value::Int(1).compare(&Value::Float(1.5)), Some(Ordering::Less));
    assert_eq!(
        Value::string("b").compare(&Value::string("a")),
        Some(Ordering::Greater)
    );
    assert_eq!(Value::Int(1).compare(&Value::string("1")), None);
}

#[test]
fn display_is_report_output() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::string("hi").to_string(), "hi");
    let indi = RecordRef::new(RecordNode::new("INDI").with_xref("@I1@"));
    assert_eq!(Value::Record(indi).to_string(), "@I1@");
    assert_eq!(Value::list([Value::Null, Value::Null]).to_string(), "<list of 2>");
}
