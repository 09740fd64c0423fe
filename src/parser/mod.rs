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

//! Parser for the Flint language.
//!
//! This module parses a token stream into an Abstract Syntax Tree (AST).
//! It uses recursive descent parsing with precedence climbing for expressions.
//!
//! # Module Structure
//!
//! - `blocks` - Function declaration and block parsing (BlockParser trait)
//! - `control_flow` - Control flow statement parsing (ControlFlowParser trait)
//! - `expressions` - Expression parsing (ExpressionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Statement parsing (StatementParser trait)
//! - `types` - Type annotation parsing (TypeParser trait)

// Submodules
pub mod blocks;
pub mod control_flow;
pub mod expressions;
pub mod helpers;
pub mod statements;
pub mod types;

// Internal imports from submodules
use blocks::BlockParser;
use helpers::ParserHelpers;

use crate::ast::Program;
use crate::error::{CompileError, Span};
use crate::lexer::Token;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [(Token, Span)],
    /// Current position in the token stream.
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program: a sequence of function declarations.
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let func = self.parse_function()?;
            program.add_function(func);
        }

        Ok(program)
    }
}

/// Parse a token stream into a program AST.
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program, CompileError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}
