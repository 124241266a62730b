//! Program-node builder for Kin.
//!
//! Turns the generic tree produced by `kin_sexpr` into typed [`Node`]s and
//! sorts the top-level forms into the procedure, function and global tables
//! of a [`Program`].
//!
//! A malformed top-level form does not stop the build: the builder moves on
//! to the next form so that every load error in a program is reported in one
//! batch.

mod builder;
mod error;

pub use builder::{build, build_node};
pub use error::{LoadError, LoadErrorKind};

use kin_ir::{Node, Program};

/// Read and build a program from wire-format text.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load(source: &str) -> Result<Program, Vec<LoadError>> {
    let tree = kin_sexpr::read(source).map_err(|err| vec![LoadError::from(err)])?;
    build(&tree)
}

/// Read a single expression or statement from wire-format text.
pub fn load_node(source: &str) -> Result<Node, LoadError> {
    let tree = kin_sexpr::read(source)?;
    build_node(&tree)
}
