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

//! Abstract Syntax Tree (AST) definitions for the Flint front end.
//!
//! This module defines the data structures that represent a parsed Flint
//! program. Every parent uniquely owns its children; every node carries
//! the span of its source extent.

mod expr;
mod stmt;
mod types;

pub use expr::*;
pub use stmt::*;
pub use types::*;

use crate::error::Span;

/// A complete Flint program: an ordered sequence of function declarations.
#[derive(Debug, Clone)]
pub struct Program {
    /// Top-level function declarations, in source order.
    pub functions: Vec<FuncDecl>,
}

impl Program {
    /// Create a new empty program.
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    /// Add a function declaration to the program.
    pub fn add_function(&mut self, func: FuncDecl) {
        self.functions.push(func);
    }

    /// Find the main function in the program.
    pub fn main_function(&self) -> Option<&FuncDecl> {
        self.functions.iter().find(|f| f.name == "main")
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

/// A brace-delimited block of statements.
#[derive(Debug, Clone)]
pub struct Block {
    /// The statements in this block.
    pub statements: Vec<Statement>,
    /// The source span of this block.
    pub span: Span,
}

impl Block {
    /// Create a new block.
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Create an empty block.
    pub fn empty(span: Span) -> Self {
        Self {
            statements: Vec::new(),
            span,
        }
    }

    /// Check if this block is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, func) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", func)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        for stmt in &self.statements {
            writeln!(f, "    {}", stmt)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_creation() {
        let program = Program::new();
        assert!(program.functions.is_empty());
        assert!(program.main_function().is_none());
    }

    #[test]
    fn test_block_creation() {
        let span = Span::new(0, 10);
        let block = Block::empty(span.clone());
        assert!(block.is_empty());
        assert_eq!(block.span.start, 0);
    }

    #[test]
    fn test_program_add_function() {
        let mut program = Program::new();
        let body = Block::empty(Span::new(19, 21));
        let func = FuncDecl::new(
            "main".to_string(),
            vec![],
            Type::Void,
            body,
            Span::new(0, 21),
        );
        program.add_function(func);
        assert_eq!(program.functions.len(), 1);
        assert!(program.main_function().is_some());
    }

    #[test]
    fn test_program_main_function() {
        let mut program = Program::new();

        let body = Block::empty(Span::new(20, 22));
        let helper = FuncDecl::new(
            "helper".to_string(),
            vec![],
            Type::Void,
            body,
            Span::new(0, 22),
        );
        program.add_function(helper);
        assert!(program.main_function().is_none());

        let body = Block::empty(Span::new(42, 44));
        let main = FuncDecl::new(
            "main".to_string(),
            vec![],
            Type::Void,
            body,
            Span::new(23, 44),
        );
        program.add_function(main);
        assert!(program.main_function().is_some());
        assert_eq!(program.main_function().unwrap().name, "main");
    }

    #[test]
    fn test_block_with_statements() {
        let span = Span::new(0, 20);
        let stmt = Statement::new(StatementKind::Break, Span::new(2, 8));
        let block = Block::new(vec![stmt], span);
        assert!(!block.is_empty());
        assert_eq!(block.statements.len(), 1);
    }

    #[test]
    fn test_display_block() {
        let stmt1 = Statement::new(StatementKind::Break, Span::new(2, 8));
        let stmt2 = Statement::new(StatementKind::Continue, Span::new(10, 19));
        let block = Block::new(vec![stmt1, stmt2], Span::new(0, 21));
        assert_eq!(format!("{}", block), "{\n    break;\n    continue;\n}");
    }
}
