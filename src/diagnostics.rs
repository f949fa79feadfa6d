/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::ParseError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for BL parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
pub struct DiagnosticPrinter {
    /// Full source text of the file being parsed.
    source: String,

    /// Name of the source file (e.g. `walker.bl`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic as text.
    ///
    /// # Output Example
    /// ```text
    /// error[B0006]: program "walker" must end with its own name, found "walk"
    ///   --> walker.bl:12:5
    ///    |
    ///  12 | END walk
    ///    |     ^
    ///
    /// help: write "END walker"
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; the end-of-input token may
        // sit one past the last line.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code(),
            error.message,
            self.file_name,
            line,
            column + 1
        );

        out.push_str("   |\n");
        out.push_str(&format!("{:>3} | {}\n", line, src_line));
        out.push_str(&format!("   | {}^\n", " ".repeat(column)));

        if let Some(help) = &error.help {
            out.push_str(&format!("\nhelp: {}\n", help));
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[test]
    fn renders_location_and_caret() {
        let source = "PROGRAM walker IS\nBEGIN\n  move\nEND walk\n";
        let error = parse_source(source).unwrap_err();
        let text = DiagnosticPrinter::new("walker.bl", source).render(&error);

        assert!(text.starts_with("error[B0006]: program \"walker\""), "{text}");
        assert!(text.contains("--> walker.bl:4:5"), "{text}");
        assert!(text.contains("  4 | END walk"), "{text}");
        assert!(text.contains("   |     ^"), "{text}");
        assert!(text.contains("help: write \"END walker\""), "{text}");
    }

    #[test]
    fn end_of_input_past_last_line() {
        let source = "PROGRAM p IS\nBEGIN\n";
        let error = parse_source(source).unwrap_err();
        let text = DiagnosticPrinter::new("p.bl", source).render(&error);
        assert!(text.contains("found end of input"), "{text}");
        assert!(text.contains("--> p.bl:3:1"), "{text}");
    }
}
