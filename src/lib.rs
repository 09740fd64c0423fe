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

//! Flint Front End Library
//!
//! This library provides all the components needed to check Flint source
//! code: lexing, parsing and semantic analysis. There is no code
//! generation; the product of a successful run is the symbol table trace.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Parsing tokens into an AST
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`analyzer`] - Semantic analysis and symbol resolution
//! - [`output`] - Symbol table trace rendering
//! - [`runner`] - File watching for watch mode
//!
//! # Example
//!
//! ```no_run
//! use flint::{lexer, parser, analyzer};
//!
//! fn check(source: &str) -> Result<String, flint::CompileError> {
//!     // Tokenize
//!     let tokens = lexer::tokenize(source)?;
//!
//!     // Parse
//!     let ast = parser::parse(&tokens)?;
//!
//!     // Analyze
//!     let trace = analyzer::analyze(&ast)?;
//!
//!     Ok(trace.to_string())
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use analyzer::analyze;
pub use ast::{Program, Type};
pub use error::{format_error, CompileError, ErrorCode, Result, SourceLocation, Span};
pub use lexer::{tokenize, Token};
pub use output::ScopePrinter;
pub use parser::parse;

/// The version of the Flint front end.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tool.
pub const NAME: &str = "Flint";

/// Check source code and return the symbol table trace.
///
/// This is the main entry point. It performs all stages: lexing, parsing
/// and semantic analysis. The first error aborts the run.
///
/// # Example
///
/// ```
/// let source = r#"
/// func main(): void {
///     print("Hello, World!");
/// }
/// "#;
///
/// match flint::check(source) {
///     Ok(trace) => print!("{}", trace),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn check(source: &str) -> std::result::Result<String, CompileError> {
    // Tokenize
    let tokens = lexer::tokenize(source)?;

    // Parse
    let ast = parser::parse(&tokens)?;

    // Analyze
    let trace = analyzer::analyze(&ast)?;

    Ok(trace.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hello_world() {
        let source = "func main(): void { print(\"Hello, World!\"); }";
        let trace = check(source).unwrap();
        assert!(trace.starts_with("---begin global scope---\n"));
        assert!(trace.ends_with("---end global scope---\n"));
        assert!(trace.contains("main () -> void\n"));
    }

    #[test]
    fn test_check_propagates_lexer_errors() {
        let err = check("func main(): void { print(@); }").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedCharacter);
    }

    #[test]
    fn test_check_propagates_parser_errors() {
        let err = check("func main(): void { var }").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_check_propagates_analyzer_errors() {
        let err = check("func main(): void { x = 1; }").unwrap_err();
        assert_eq!(err.code, ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_version_and_name() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "Flint");
    }
}
