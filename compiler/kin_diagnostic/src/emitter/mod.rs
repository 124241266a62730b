//! Plain-text diagnostic rendering.
//!
//! ```text
//! error[E6003]: undefined symbol `spouse`
//!   --> reports/pedigree.kin:14
//!   = note: called from `main`
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

/// Writes diagnostics to any `Write` sink, one block per diagnostic.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    file_path: Option<String>,
    error_count: usize,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            file_path: None,
            error_count: 0,
        }
    }

    /// Name the program file in `-->` location lines.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Render one diagnostic. Write failures are ignored: there is nowhere
    /// left to report them.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.write_diagnostic(diagnostic);
        if diagnostic.is_error() {
            self.error_count += 1;
        }
    }

    pub fn emit_all<'d>(&mut self, diagnostics: impl IntoIterator<Item = &'d Diagnostic>) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}[{}]: {}",
            diagnostic.severity, diagnostic.code, diagnostic.message
        )?;
        match (&self.file_path, diagnostic.line) {
            (Some(path), Some(line)) => writeln!(self.writer, "  --> {path}:{line}")?,
            (Some(path), None) => writeln!(self.writer, "  --> {path}")?,
            (None, Some(line)) => writeln!(self.writer, "  --> line {line}")?,
            (None, None) => {}
        }
        for note in &diagnostic.notes {
            for (i, note_line) in note.lines().enumerate() {
                if i == 0 {
                    writeln!(self.writer, "  = note: {note_line}")?;
                } else {
                    writeln!(self.writer, "          {note_line}")?;
                }
            }
        }
        Ok(())
    }

    /// Print the trailing summary line, if any errors were emitted.
    pub fn finish(&mut self) {
        if self.error_count > 0 {
            let plural = if self.error_count == 1 { "" } else { "s" };
            let _ = writeln!(
                self.writer,
                "aborting due to {} error{plural}",
                self.error_count
            );
        }
        self.flush();
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
