//! Record stores for Kin.
//!
//! [`MemoryStore`] keeps level-0 records in a hash map keyed by
//! cross-reference id. It can be filled by hand or from GEDCOM text with
//! [`parse_gedcom`], a line-structure reader that builds record trees and
//! does no validation of tags or values.

mod gedcom;
mod memory;

pub use gedcom::{parse_gedcom, GedcomError};
pub use memory::MemoryStore;
