//! The `parse` command: read the wire format and print it back.

use kin_diagnostic::{Diagnostic, IntoDiagnostic};
use kin_parse::LoadError;
use kin_sexpr::{read, render};

use super::read_file;

/// Re-rendered S-expression tree of `source`.
pub fn parse_source(source: &str) -> Result<String, Diagnostic> {
    let tree = read(source).map_err(|e| LoadError::from(e).to_diagnostic())?;
    Ok(render(&tree))
}

/// `kin parse <program>`.
pub fn parse_file(path: &str) -> Result<String, Diagnostic> {
    let source = read_file(path)?;
    parse_source(&source)
}
