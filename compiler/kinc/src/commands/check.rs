//! The `check` command: load a program without running it.

use kin_diagnostic::Diagnostic;
use kin_ir::Program;
use kin_parse::load;

use super::{load_diagnostics, read_file};

/// What a successfully loaded program defines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramSummary {
    pub procedures: Vec<String>,
    pub functions: Vec<String>,
    pub globals: Vec<String>,
    pub has_main: bool,
}

impl ProgramSummary {
    fn of(program: &Program) -> Self {
        ProgramSummary {
            procedures: program.procedure_names().into_iter().map(str::to_string).collect(),
            functions: program.function_names().into_iter().map(str::to_string).collect(),
            globals: program.globals().to_vec(),
            has_main: program.procedure("main").is_some(),
        }
    }
}

/// Load `source`, returning every load error as a diagnostic.
pub fn check_source(source: &str) -> Result<ProgramSummary, Vec<Diagnostic>> {
    match load(source) {
        Ok(program) => Ok(ProgramSummary::of(&program)),
        Err(errors) => Err(load_diagnostics(&errors)),
    }
}

/// `kin check <program>`.
pub fn check_file(path: &str) -> Result<ProgramSummary, Vec<Diagnostic>> {
    let source = read_file(path).map_err(|d| vec![d])?;
    check_source(&source)
}
