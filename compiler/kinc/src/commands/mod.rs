//! Command handlers for the `kin` CLI.
//!
//! Each command returns its diagnostics instead of exiting, so `main` owns
//! the process exit code. Shared helpers (`read_file`, load-error batching)
//! live here in the module root.

use std::path::PathBuf;

use kin_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, IntoDiagnostic};
use kin_parse::LoadError;

mod check;
mod parse;
mod run;

pub use check::{check_file, check_source, ProgramSummary};
pub use parse::{parse_file, parse_source};
pub use run::{execute, run_file};

/// Options accepted by `kin run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// GEDCOM file to bind as the record store.
    pub gedcom: Option<PathBuf>,
    /// Overrides the call-depth limit.
    pub max_depth: Option<usize>,
}

/// Parse `kin run` arguments (everything after `run`) into the program path
/// and options.
pub fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path = None;
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--gedcom" || arg == "-g" {
            let Some(file) = args.get(i + 1) else {
                return Err(format!("`{arg}` needs a file"));
            };
            options.gedcom = Some(PathBuf::from(file));
            i += 2;
            continue;
        }
        if let Some(file) = arg.strip_prefix("--gedcom=") {
            options.gedcom = Some(PathBuf::from(file));
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            match depth.parse::<usize>() {
                Ok(n) if n > 0 => options.max_depth = Some(n),
                _ => return Err(format!("invalid --max-depth value '{depth}'")),
            }
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }
    let path = path.ok_or_else(|| "missing program path".to_string())?;
    Ok((path, options))
}

/// Read a program or data file, as an io diagnostic on failure.
pub(crate) fn read_file(path: &str) -> Result<String, Diagnostic> {
    std::fs::read_to_string(path).map_err(|e| {
        let msg = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        };
        Diagnostic::error(ErrorCode::E9001).with_message(msg)
    })
}

/// Batch load errors into line-ordered diagnostics.
pub(crate) fn load_diagnostics(errors: &[LoadError]) -> Vec<Diagnostic> {
    let mut queue = DiagnosticQueue::new();
    for error in errors {
        if !queue.push(error.to_diagnostic()) {
            break;
        }
    }
    queue.into_sorted()
}

#[cfg(test)]
mod tests;
