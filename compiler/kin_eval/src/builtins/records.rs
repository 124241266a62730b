//! Record navigation over the bound [`RecordStore`](kin_value::RecordStore).
//!
//! Every builtin here fails with missing-database when no store is bound,
//! even before looking at its arguments. A null record argument gives a
//! null result, so chains such as `name(father(indi("@I9@")))` stay quiet
//! when a link is absent.

use kin_ir::Node;
use kin_value::{EvalError, EvalResult, RecordRef, RecordStore, Value};

use super::args::{count, record, string};
use super::{Builtin, BuiltinRegistry};
use crate::Interpreter;

pub(super) fn register(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new("indi", 1, 1, indi));
    registry.register(Builtin::new("fam", 1, 1, fam));
    registry.register(Builtin::new("father", 1, 1, father));
    registry.register(Builtin::new("mother", 1, 1, mother));
    registry.register(Builtin::new("parents", 1, 1, parents));
    registry.register(Builtin::new("husband", 1, 1, husband));
    registry.register(Builtin::new("wife", 1, 1, wife));
    registry.register(Builtin::new("nfamilies", 1, 1, nfamilies));
    registry.register(Builtin::new("nchildren", 1, 1, nchildren));
    registry.register(Builtin::new("children", 1, 1, children));
    registry.register(Builtin::new("families", 1, 1, families));
    registry.register(Builtin::new("name", 1, 1, name));
    registry.register(Builtin::new("fullname", 1, 1, fullname));
    registry.register(Builtin::new("surname", 1, 1, surname));
    registry.register(Builtin::new("givens", 1, 1, givens));
    registry.register(Builtin::new("sex", 1, 1, sex));
    registry.register(Builtin::new("key", 1, 1, key));
    registry.register(Builtin::new("birth", 1, 1, birth));
    registry.register(Builtin::new("death", 1, 1, death));
    registry.register(Builtin::new("date", 1, 1, date));
    registry.register(Builtin::new("place", 1, 1, place));
    registry.register(Builtin::new("tag", 1, 1, tag));
    registry.register(Builtin::new("value", 1, 1, value));
    registry.register(Builtin::new("child", 2, 2, child));
}

// Helpers

/// The store and the record argument, or `None` for a null argument.
fn subject<'a>(
    interp: &mut Interpreter<'a>,
    name: &str,
    args: &[Node],
) -> Result<(&'a dyn RecordStore, Option<RecordRef>), EvalError> {
    let store = interp.store()?;
    Ok((store, record(interp, name, args, 0)?))
}

/// Look up a level-0 record by key, requiring `tag`.
fn keyed(store: &dyn RecordStore, key: &str, tag: &str) -> Option<RecordRef> {
    let key = if key.starts_with('@') {
        key.to_string()
    } else {
        format!("@{key}@")
    };
    store.record(&key).filter(|r| r.tag() == tag)
}

/// Follow the pointer held by the first `link` child.
fn follow(store: &dyn RecordStore, from: &RecordRef, link: &str) -> Option<RecordRef> {
    from.child_value(link).and_then(|xref| store.record(xref))
}

/// Follow every `link` child, skipping dangling pointers.
fn follow_all(store: &dyn RecordStore, from: &RecordRef, link: &str) -> Vec<Value> {
    from.children_tagged(link)
        .filter_map(|c| c.value())
        .filter_map(|xref| store.record(xref))
        .map(Value::Record)
        .collect()
}

fn opt_record(r: Option<RecordRef>) -> Value {
    r.map_or(Value::Null, Value::Record)
}

fn opt_string(s: Option<&str>) -> Value {
    s.map_or(Value::Null, Value::string)
}

/// Split a `NAME` value into given names and surname: `John /Smith/`.
fn split_name(full: &str) -> (String, Option<&str>) {
    let mut parts = full.splitn(3, '/');
    let before = parts.next().unwrap_or_default();
    let surname = parts.next();
    let after = parts.next().unwrap_or_default();
    let givens = format!("{} {}", before.trim(), after.trim());
    (givens.trim().to_string(), surname.map(str::trim))
}

// Lookup

fn lookup_keyed(interp: &mut Interpreter<'_>, name: &str, args: &[Node], tag: &str) -> EvalResult {
    let store = interp.store()?;
    let key = string(interp, name, args, 0)?;
    Ok(opt_record(keyed(store, &key, tag)))
}

fn indi(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    lookup_keyed(interp, "indi", args, "INDI")
}

fn fam(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    lookup_keyed(interp, "fam", args, "FAM")
}

// Family links

/// Spouse `role` (`HUSB` or `WIFE`) of the first family the person is a
/// child in.
fn parent(interp: &mut Interpreter<'_>, name: &str, args: &[Node], role: &str) -> EvalResult {
    let (store, person) = subject(interp, name, args)?;
    Ok(opt_record(person.and_then(|p| {
        let family = follow(store, &p, "FAMC")?;
        follow(store, &family, role)
    })))
}

fn father(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    parent(interp, "father", args, "HUSB")
}

fn mother(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    parent(interp, "mother", args, "WIFE")
}

fn parents(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (store, person) = subject(interp, "parents", args)?;
    Ok(opt_record(person.and_then(|p| follow(store, &p, "FAMC"))))
}

fn spouse(interp: &mut Interpreter<'_>, name: &str, args: &[Node], role: &str) -> EvalResult {
    let (store, family) = subject(interp, name, args)?;
    Ok(opt_record(family.and_then(|f| follow(store, &f, role))))
}

fn husband(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    spouse(interp, "husband", args, "HUSB")
}

fn wife(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    spouse(interp, "wife", args, "WIFE")
}

fn nfamilies(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, person) = subject(interp, "nfamilies", args)?;
    Ok(person.map_or(Value::Null, |p| count(p.children_tagged("FAMS").count())))
}

fn nchildren(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, family) = subject(interp, "nchildren", args)?;
    Ok(family.map_or(Value::Null, |f| count(f.children_tagged("CHIL").count())))
}

/// Children of a family as a new list, in record order.
fn children(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (store, family) = subject(interp, "children", args)?;
    Ok(family.map_or(Value::Null, |f| Value::list(follow_all(store, &f, "CHIL"))))
}

/// Families a person is a spouse in, as a new list.
fn families(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (store, person) = subject(interp, "families", args)?;
    Ok(person.map_or(Value::Null, |p| Value::list(follow_all(store, &p, "FAMS"))))
}

// Names

fn name(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, person) = subject(interp, "name", args)?;
    Ok(opt_string(person.as_ref().and_then(|p| p.child_value("NAME"))))
}

/// Name with the surname slashes removed.
fn fullname(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, person) = subject(interp, "fullname", args)?;
    Ok(person
        .as_ref()
        .and_then(|p| p.child_value("NAME"))
        .map_or(Value::Null, |full| {
            let words: Vec<&str> = full.split(['/', ' ']).filter(|w| !w.is_empty()).collect();
            Value::Str(words.join(" "))
        }))
}

fn surname(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, person) = subject(interp, "surname", args)?;
    Ok(person
        .as_ref()
        .and_then(|p| p.child_value("NAME"))
        .map_or(Value::Null, |full| {
            Value::string(split_name(full).1.unwrap_or_default())
        }))
}

fn givens(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, person) = subject(interp, "givens", args)?;
    Ok(person
        .as_ref()
        .and_then(|p| p.child_value("NAME"))
        .map_or(Value::Null, |full| Value::Str(split_name(full).0)))
}

/// `M`, `F`, or `U` when unrecorded.
fn sex(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, person) = subject(interp, "sex", args)?;
    Ok(person.map_or(Value::Null, |p| {
        Value::string(p.child_value("SEX").unwrap_or("U"))
    }))
}

fn key(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, rec) = subject(interp, "key", args)?;
    Ok(opt_string(rec.as_ref().and_then(RecordRef::xref)))
}

// Events and nodes

fn event(interp: &mut Interpreter<'_>, name: &str, args: &[Node], tag: &str) -> EvalResult {
    let (_, person) = subject(interp, name, args)?;
    Ok(opt_record(person.and_then(|p| p.child(tag).cloned())))
}

fn birth(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    event(interp, "birth", args, "BIRT")
}

fn death(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    event(interp, "death", args, "DEAT")
}

fn event_detail(interp: &mut Interpreter<'_>, name: &str, args: &[Node], tag: &str) -> EvalResult {
    let (_, node) = subject(interp, name, args)?;
    Ok(opt_string(node.as_ref().and_then(|n| n.child_value(tag))))
}

fn date(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    event_detail(interp, "date", args, "DATE")
}

fn place(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    event_detail(interp, "place", args, "PLAC")
}

fn tag(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, node) = subject(interp, "tag", args)?;
    Ok(opt_string(node.as_ref().map(RecordRef::tag)))
}

fn value(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, node) = subject(interp, "value", args)?;
    Ok(opt_string(node.as_ref().and_then(RecordRef::value)))
}

/// `child(node, tag)`: first direct child node with `tag`.
fn child(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (_, node) = subject(interp, "child", args)?;
    let wanted = string(interp, "child", args, 1)?;
    Ok(opt_record(node.and_then(|n| n.child(&wanted).cloned())))
}
