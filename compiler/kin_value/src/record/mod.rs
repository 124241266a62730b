//! Read-only record-node boundary.
//!
//! Records are trees of tagged lines: a level-0 node such as `INDI` or `FAM`
//! keyed by its cross-reference id, with nested child nodes (`NAME`, `BIRT`,
//! `DATE`, ...). The interpreter only ever reads them, through builtins.

use std::fmt;
use std::rc::Rc;

/// One node of a record tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordNode {
    /// Cross-reference id (`@I1@`), present on level-0 records.
    pub xref: Option<String>,
    pub tag: String,
    pub value: Option<String>,
    pub children: Vec<RecordRef>,
}

impl RecordNode {
    pub fn new(tag: impl Into<String>) -> Self {
        RecordNode {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_xref(mut self, xref: impl Into<String>) -> Self {
        self.xref = Some(xref.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: RecordNode) -> Self {
        self.children.push(RecordRef::new(child));
        self
    }
}

/// Cheap shared handle to a record node.
#[derive(Clone)]
pub struct RecordRef(Rc<RecordNode>);

impl RecordRef {
    pub fn new(node: RecordNode) -> Self {
        RecordRef(Rc::new(node))
    }

    pub fn xref(&self) -> Option<&str> {
        self.0.xref.as_deref()
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn value(&self) -> Option<&str> {
        self.0.value.as_deref()
    }

    pub fn children(&self) -> &[RecordRef] {
        &self.0.children
    }

    /// First direct child with `tag`.
    pub fn child(&self, tag: &str) -> Option<&RecordRef> {
        self.0.children.iter().find(|c| c.tag() == tag)
    }

    /// Every direct child with `tag`, in order.
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a RecordRef> + 'a {
        self.0.children.iter().filter(move |c| c.tag() == tag)
    }

    /// Value of the first direct child with `tag`.
    pub fn child_value(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(RecordRef::value)
    }
}

/// Keyed records compare by key, keyless nodes by identity.
impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        match (self.xref(), other.xref()) {
            (Some(a), Some(b)) => a == b,
            _ => Rc::ptr_eq(&self.0, &other.0),
        }
    }
}

impl Eq for RecordRef {}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.xref() {
            Some(key) => write!(f, "RecordRef({key} {})", self.tag()),
            None => write!(f, "RecordRef({})", self.tag()),
        }
    }
}

/// Lookup of level-0 records by key.
///
/// Bound to the interpreter for the whole run and never written through.
pub trait RecordStore {
    fn record(&self, key: &str) -> Option<RecordRef>;
}
