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

//! Control flow statement parsing: if, while, break, continue, return.
//!
//! Loop and if bodies are single statements; a brace block counts as one
//! statement, so `else if` chains need no special grammar rule.

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::ast::{IfStatement, Statement, StatementKind, WhileStatement};
use crate::error::CompileError;
use crate::lexer::Token;

/// Trait for parsing control flow statements.
pub trait ControlFlowParser<'a> {
    /// Parse an if statement with optional else arm.
    fn parse_if(&mut self) -> Result<Statement, CompileError>;

    /// Parse a while loop.
    fn parse_while(&mut self) -> Result<Statement, CompileError>;

    /// Parse a break statement.
    fn parse_break(&mut self) -> Result<Statement, CompileError>;

    /// Parse a continue statement.
    fn parse_continue(&mut self) -> Result<Statement, CompileError>;

    /// Parse a return statement with optional value.
    fn parse_return(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> ControlFlowParser<'a> for Parser<'a> {
    fn parse_if(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::If, "Expected 'if'")?;

        self.expect(&Token::LeftParen, "Expected '(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after if condition")?;

        let then_arm = self.parse_statement()?;

        let else_arm = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        let end_span = else_arm
            .as_ref()
            .map(|s| s.span.clone())
            .unwrap_or_else(|| then_arm.span.clone());
        let span = start_span.merge(&end_span);

        Ok(Statement::new(
            StatementKind::If(IfStatement {
                condition,
                then_arm: Box::new(then_arm),
                else_arm,
            }),
            span,
        ))
    }

    fn parse_while(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::While, "Expected 'while'")?;

        self.expect(&Token::LeftParen, "Expected '(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after while condition")?;

        let body = self.parse_statement()?;
        let span = start_span.merge(&body.span);

        Ok(Statement::new(
            StatementKind::While(WhileStatement {
                condition,
                body: Box::new(body),
            }),
            span,
        ))
    }

    fn parse_break(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::Break, "Expected 'break'")?;
        let (_, end_span) = self.expect(&Token::Semicolon, "Expected ';' after 'break'")?;
        Ok(Statement::new(
            StatementKind::Break,
            start_span.merge(&end_span),
        ))
    }

    fn parse_continue(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::Continue, "Expected 'continue'")?;
        let (_, end_span) = self.expect(&Token::Semicolon, "Expected ';' after 'continue'")?;
        Ok(Statement::new(
            StatementKind::Continue,
            start_span.merge(&end_span),
        ))
    }

    fn parse_return(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::Return, "Expected 'return'")?;

        let value = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        let (_, end_span) = self.expect(&Token::Semicolon, "Expected ';' after return value")?;
        let span = start_span.merge(&end_span);

        Ok(Statement::new(StatementKind::Return(value), span))
    }
}
