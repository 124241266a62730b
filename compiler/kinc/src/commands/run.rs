//! The `run` command: load a program, bind the record store, run `main`.

use kin_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use kin_eval::{stdout_handler, EvalConfig, InterpreterBuilder, RecordStore, SharedPrintHandler};
use kin_parse::load;
use kin_store::MemoryStore;
use tracing::debug;

use super::{load_diagnostics, read_file, RunOptions};

/// Load and run `source`. Load errors come back as one batch; a runtime
/// error comes back alone.
pub fn execute(
    source: &str,
    store: Option<&dyn RecordStore>,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
) -> Result<(), Vec<Diagnostic>> {
    let program = load(source).map_err(|errors| load_diagnostics(&errors))?;

    let mut builder = InterpreterBuilder::new(&program)
        .print_handler(print_handler)
        .config(config);
    if let Some(store) = store {
        builder = builder.store(store);
    }
    let mut interpreter = builder.build();

    match interpreter.run_main() {
        Ok(signal) => {
            debug!(?signal, "program completed");
            Ok(())
        }
        Err(err) => Err(vec![err.to_diagnostic()]),
    }
}

/// `kin run <program> [--gedcom <file>] [--max-depth=<n>]`.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), Vec<Diagnostic>> {
    let source = read_file(path).map_err(|d| vec![d])?;

    let store = match &options.gedcom {
        Some(gedcom) => Some(MemoryStore::load(gedcom).map_err(|err| {
            vec![Diagnostic::error(ErrorCode::E9001)
                .with_message(format!("{}: {err}", gedcom.display()))]
        })?),
        None => None,
    };

    let mut config = EvalConfig::from_env();
    if let Some(depth) = options.max_depth {
        config = config.with_max_call_depth(depth);
    }

    execute(
        &source,
        store.as_ref().map(|s| s as &dyn RecordStore),
        config,
        stdout_handler(),
    )
}
