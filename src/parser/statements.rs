// Flint - A concept for a statically checked C-style mini language
//
// Copyright (C) 2026 Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Statement parsing.

use super::blocks::BlockParser;
use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Assignment, Statement, StatementKind, VarDecl};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Trait for parsing statements.
pub trait StatementParser<'a> {
    /// Parse a single statement.
    fn parse_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a variable declaration: `var name: type (= expr)? ;`
    fn parse_var_decl(&mut self) -> Result<Statement, CompileError>;

    /// Parse an assignment: `name = expr ;`
    fn parse_assignment(&mut self) -> Result<Statement, CompileError>;

    /// Parse an expression statement: `expr ;`
    fn parse_expression_statement(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> StatementParser<'a> for Parser<'a> {
    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        match self.peek() {
            Some(Token::Var) => self.parse_var_decl(),
            Some(Token::If) => self.parse_if(),
            Some(Token::While) => self.parse_while(),
            Some(Token::Break) => self.parse_break(),
            Some(Token::Continue) => self.parse_continue(),
            Some(Token::Return) => self.parse_return(),
            Some(Token::LeftBrace) => {
                let block = self.parse_block()?;
                let span = block.span.clone();
                Ok(Statement::new(StatementKind::Block(block), span))
            }
            Some(Token::Identifier(_)) if matches!(self.peek_ahead(1), Some(Token::Equal)) => {
                self.parse_assignment()
            }
            Some(_) => self.parse_expression_statement(),
            None => Err(self.error(ErrorCode::UnexpectedEndOfFile, "Expected statement")),
        }
    }

    fn parse_var_decl(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::Var, "Expected 'var'")?;

        let (name_token, _) = self.expect(
            &Token::Identifier(String::new()),
            "Expected variable name after 'var'",
        )?;
        let name = match name_token {
            Token::Identifier(name) => name,
            _ => unreachable!(),
        };

        self.expect(&Token::Colon, "Expected ':' after variable name")?;
        let ty = self.parse_type()?;

        let initializer = if self.match_token(&Token::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let (_, end_span) =
            self.expect(&Token::Semicolon, "Expected ';' after variable declaration")?;
        let span = start_span.merge(&end_span);

        Ok(Statement::new(
            StatementKind::VarDecl(VarDecl {
                name,
                ty,
                initializer,
            }),
            span,
        ))
    }

    fn parse_assignment(&mut self) -> Result<Statement, CompileError> {
        let (name_token, target_span) = self
            .expect(&Token::Identifier(String::new()), "Expected assignment target")?;
        let target = match name_token {
            Token::Identifier(name) => name,
            _ => unreachable!(),
        };

        self.expect(&Token::Equal, "Expected '=' in assignment")?;
        let value = self.parse_expression()?;
        let (_, end_span) = self.expect(&Token::Semicolon, "Expected ';' after assignment")?;
        let span = target_span.merge(&end_span);

        Ok(Statement::new(
            StatementKind::Assignment(Assignment {
                target,
                target_span,
                value,
            }),
            span,
        ))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, CompileError> {
        let expr = self.parse_expression()?;
        let (_, end_span) = self.expect(&Token::Semicolon, "Expected ';' after expression")?;
        let span = expr.span.merge(&end_span);
        Ok(Statement::new(StatementKind::Expression(expr), span))
    }
}
