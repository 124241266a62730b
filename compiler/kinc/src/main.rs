//! Kin CLI
//!
//! Runs and checks genealogy report programs.

use std::io::Write;
use std::process::ExitCode;

use kin_diagnostic::emitter::TerminalEmitter;
use kin_diagnostic::Diagnostic;
use kinc::commands::{check_file, parse_file, parse_run_args, run_file};
use kinc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (path, options) = match parse_run_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: kin run <program> [--gedcom <file>] [--max-depth=<n>]");
                    return ExitCode::FAILURE;
                }
            };
            report(&path, run_file(&path, &options).err())
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: kin check <program>");
                return ExitCode::FAILURE;
            };
            match check_file(path) {
                Ok(summary) => {
                    println!(
                        "{path}: {} procedure(s), {} function(s), {} global(s)",
                        summary.procedures.len(),
                        summary.functions.len(),
                        summary.globals.len()
                    );
                    if !summary.has_main {
                        println!("warning: no `main` procedure; `kin run` will fail");
                    }
                    ExitCode::SUCCESS
                }
                Err(diagnostics) => report(path, Some(diagnostics)),
            }
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: kin parse <program>");
                return ExitCode::FAILURE;
            };
            match parse_file(path) {
                Ok(rendered) => {
                    println!("{rendered}");
                    ExitCode::SUCCESS
                }
                Err(diagnostic) => report(path, Some(vec![diagnostic])),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Kin {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Emit any diagnostics to stderr; failure if there were some.
fn report(path: &str, diagnostics: Option<Vec<Diagnostic>>) -> ExitCode {
    let _ = std::io::stdout().flush();
    let Some(diagnostics) = diagnostics else {
        return ExitCode::SUCCESS;
    };
    let mut emitter = TerminalEmitter::new(std::io::stderr()).with_file_path(path);
    emitter.emit_all(&diagnostics);
    emitter.finish();
    emitter.flush();
    ExitCode::FAILURE
}

fn print_usage() {
    println!("Kin report runner");
    println!();
    println!("Usage: kin <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program>        Run procedure `main` of a report program");
    println!("  check <program>      Load a program and report every load error");
    println!("  parse <program>      Print the program's S-expression tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --gedcom <file>      Bind a GEDCOM file as the record store");
    println!("  --max-depth=<n>      Maximum routine call depth (default 1000, env KIN_MAX_DEPTH)");
    println!();
    println!("Environment:");
    println!("  KIN_LOG              Tracing filter, e.g. kin_eval=debug");
    println!("  KIN_LOG_TREE         Render spans as an indented tree");
    println!();
    println!("Examples:");
    println!("  kin run pedigree.kin --gedcom family.ged");
    println!("  kin check pedigree.kin");
}
