// Flint - A concept for a statically checked C-style mini language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error types for the Flint front end.
//!
//! This module defines all error types used throughout the front end,
//! including lexical, syntax, and semantic errors, and the two renderers
//! that turn an error into user-facing text.

use std::ops::Range;
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span from a range.
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E021)
    UnexpectedCharacter,
    UnterminatedString,
    InvalidEscapeSequence,
    NumberTooLarge,
    ByteOutOfRange,

    // Syntax errors (E100-E105)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedType,
    InvalidCallTarget,

    // Semantic errors (E200-E207)
    DuplicateDefinition,
    MissingMain,
    UndefinedVariable,
    UndefinedFunction,
    IdentifierKindMismatch,
    TypeMismatch,
    UnexpectedBreak,
    UnexpectedContinue,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::UnexpectedCharacter => "E001",
            ErrorCode::UnterminatedString => "E010",
            ErrorCode::InvalidEscapeSequence => "E011",
            ErrorCode::NumberTooLarge => "E020",
            ErrorCode::ByteOutOfRange => "E021",

            // Syntax errors
            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::UnexpectedEndOfFile => "E101",
            ErrorCode::ExpectedExpression => "E102",
            ErrorCode::ExpectedIdentifier => "E103",
            ErrorCode::ExpectedType => "E104",
            ErrorCode::InvalidCallTarget => "E105",

            // Semantic errors
            ErrorCode::DuplicateDefinition => "E200",
            ErrorCode::MissingMain => "E201",
            ErrorCode::UndefinedVariable => "E202",
            ErrorCode::UndefinedFunction => "E203",
            ErrorCode::IdentifierKindMismatch => "E204",
            ErrorCode::TypeMismatch => "E205",
            ErrorCode::UnexpectedBreak => "E206",
            ErrorCode::UnexpectedContinue => "E207",
        }
    }
}

/// A front end error with optional source location.
///
/// Every error produced while scanning, parsing, or analyzing a program
/// carries the span of the offending source text. The single exception is
/// the missing-`main` check, which is a whole-program property and has no
/// span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred, if it has one.
    pub span: Option<Span>,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new error at a source span.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span: Some(span),
            hint: None,
        }
    }

    /// Create an error with no source position.
    pub fn global(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Result type for front end operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        // Extract the line content
        let line_start = last_newline;
        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[line_start..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Render the user-facing one-line form of an error.
///
/// Errors with a span render as `line N: message`; spanless errors render
/// as the bare message. This is the diagnostic contract of the language,
/// so callers must not decorate the result further.
pub fn format_error(error: &CompileError, source: &str) -> String {
    match &error.span {
        Some(span) => {
            let loc = SourceLocation::from_offset(source, span.start);
            format!("line {}: {}", loc.line, error.message)
        }
        None => error.message.clone(),
    }
}

/// Format an error with source context.
///
/// Produces the multi-line form with the error code, the file location,
/// the offending line, and a caret underline. Used by the driver in
/// verbose mode in addition to [`format_error`].
pub fn format_error_context(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let span = match &error.span {
        Some(span) => span,
        None => return format!("error[{}]: {}\n", error.code_str(), error.message),
    };

    let loc = SourceLocation::from_offset(source, span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    // Error header
    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));

    // Location
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    // Source context
    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    // Underline the error span, measured in chars to line up with column
    let underline_start = loc.column - 1;
    let line_chars = loc.line_content.chars().count();
    let span_chars = source
        .get(span.start..span.end)
        .map(|s| s.chars().count())
        .unwrap_or(1);
    let underline_len = span_chars
        .max(1)
        .min(line_chars.saturating_sub(underline_start));
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    // Hint if available
    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_merge() {
        let span1 = Span::new(5, 10);
        let span2 = Span::new(15, 20);
        let merged = span1.merge(&span2);
        assert_eq!(merged.start, 5);
        assert_eq!(merged.end, 20);
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ErrorCode::UnexpectedCharacter.code(), "E001");
        assert_eq!(ErrorCode::UnexpectedToken.code(), "E100");
        assert_eq!(ErrorCode::DuplicateDefinition.code(), "E200");
    }

    #[test]
    fn test_compile_error() {
        let error = CompileError::new(
            ErrorCode::UndefinedVariable,
            "variable foo is not defined",
            Span::new(0, 3),
        )
        .with_hint("declare it with 'var foo: int;'");

        assert_eq!(error.code_str(), "E202");
        assert!(error.hint.is_some());
    }

    #[test]
    fn test_format_error_derives_line() {
        let source = "func main(): void {\n    broken\n}\n";
        let offset = source.find("broken").unwrap();
        let error = CompileError::new(
            ErrorCode::UndefinedVariable,
            "variable broken is not defined",
            Span::new(offset, offset + 6),
        );

        assert_eq!(
            format_error(&error, source),
            "line 2: variable broken is not defined"
        );
    }

    #[test]
    fn test_format_error_without_span() {
        let error = CompileError::global(
            ErrorCode::MissingMain,
            "Program has no 'func main(): void' function",
        );

        assert_eq!(
            format_error(&error, "func foo(): void {}"),
            "Program has no 'func main(): void' function"
        );
    }

    #[test]
    fn test_format_error_context_has_caret() {
        let source = "var\n";
        let error = CompileError::new(ErrorCode::UnexpectedToken, "unexpected 'var'", Span::new(0, 3));
        let rendered = format_error_context(&error, source, Some("demo.fl"));

        assert!(rendered.contains("error[E100]"));
        assert!(rendered.contains("demo.fl:1:1"));
        assert!(rendered.contains("^^^"));
    }

    #[test]
    fn test_format_error_context_caret_after_multibyte_text() {
        // "héllo wörld" occupies more bytes than columns; the caret must
        // still land under the offending token.
        let source = "var a: string = \"héllo wörld\" @\n";
        let at = source.find('@').unwrap();
        let error = CompileError::new(
            ErrorCode::UnexpectedCharacter,
            "Unexpected character '@'",
            Span::new(at, at + 1),
        );
        let rendered = format_error_context(&error, source, None);

        let caret_line = rendered
            .lines()
            .find(|l| l.contains('^'))
            .expect("caret line");
        let source_line = rendered
            .lines()
            .find(|l| l.contains('@'))
            .expect("source line");
        assert_eq!(
            caret_line.chars().position(|c| c == '^'),
            source_line.chars().position(|c| c == '@'),
        );
        assert_eq!(caret_line.matches('^').count(), 1);
    }

    #[test]
    fn test_format_error_context_underline_width_in_chars() {
        // One caret per char, not per byte, when the span itself holds
        // multi-byte text.
        let source = "var a: string = \"héllo wörld\";\n";
        let start = source.find('"').unwrap();
        let end = source.rfind('"').unwrap() + 1;
        let error = CompileError::new(
            ErrorCode::TypeMismatch,
            "type mismatch",
            Span::new(start, end),
        );
        let rendered = format_error_context(&error, source, None);

        let caret_line = rendered
            .lines()
            .find(|l| l.contains('^'))
            .expect("caret line");
        let span_chars = source[start..end].chars().count();
        assert_eq!(caret_line.matches('^').count(), span_chars);
    }
}
