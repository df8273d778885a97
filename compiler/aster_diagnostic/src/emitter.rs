//! Human-readable rendering of diagnostics against their source text.
//!
//! ```text
//! error[E2004]: undefined name `y`
//!  --> 1:5
//!   |
//! 1 | x + y
//!   |     ^ not found in this scope
//! ```

use std::io::{self, Write};

use aster_ir::SourceText;

use crate::{Diagnostic, Label};

/// Writes diagnostics as plain text with a source excerpt and carets.
pub struct TextEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TextEmitter<W> {
    pub fn new(writer: W) -> Self {
        TextEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &SourceText) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}[{}]: {}",
            diagnostic.severity, diagnostic.code, diagnostic.message
        )?;

        let span = diagnostic.span();
        let (line, column) = source.line_col(span.start);
        writeln!(self.writer, " --> {line}:{column}")?;

        let gutter = " ".repeat(line.to_string().len());
        for label in &diagnostic.labels {
            self.emit_label(label, source, &gutter)?;
        }

        for note in &diagnostic.notes {
            writeln!(self.writer, "{gutter} = note: {note}")?;
        }
        Ok(())
    }

    pub fn emit_all<'a>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
        source: &SourceText,
    ) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic, source)?;
        }
        self.writer.flush()
    }

    fn emit_label(&mut self, label: &Label, source: &SourceText, gutter: &str) -> io::Result<()> {
        let index = source.line_index(label.span.start);
        let text = source.line(index);
        let (line, column) = source.line_col(label.span.start);

        // Underline at most to the end of the first line the span touches.
        let available = text.len().saturating_sub(column - 1);
        let width = (label.span.len() as usize).min(available).max(1);
        let marker = if label.is_primary { '^' } else { '-' };

        writeln!(self.writer, "{gutter} |")?;
        writeln!(self.writer, "{line:>w$} | {text}", w = gutter.len())?;
        writeln!(
            self.writer,
            "{gutter} | {}{} {}",
            " ".repeat(column - 1),
            marker.to_string().repeat(width),
            label.message
        )
    }
}

/// Render diagnostics to a string.
pub fn render<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    source: &SourceText,
) -> String {
    let mut emitter = TextEmitter::new(Vec::new());
    // Writing into a Vec cannot fail.
    let _ = emitter.emit_all(diagnostics, source);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}
