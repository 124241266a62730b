//! Kin IR - Program Node Types
//!
//! The typed form of a loaded report program:
//! - [`Node`] trees for statements and expressions
//! - [`Routine`] definitions for procedures and functions
//! - [`Program`], the static procedure/function/global tables
//!
//! Everything here is immutable after loading and shared read-only by every
//! invocation. Nodes keep the source line they were compiled from so runtime
//! errors can point back at the script.

mod ident;
mod node;
mod program;

pub use ident::is_identifier;
pub use node::{Call, Condition, Node, NodeKind};
pub use program::{DuplicateDefinition, Program, Routine, RoutineKind};
