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

//! Expression parsing with precedence climbing.
//!
//! Precedence, loosest to tightest:
//! `||` < `&&` < comparisons < `+ -` < `* / %` < `as` < unary < call.

use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Trait for parsing expressions.
pub trait ExpressionParser<'a> {
    /// Parse a full expression.
    fn parse_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a logical OR expression.
    fn parse_or_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a logical AND expression.
    fn parse_and_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a comparison expression.
    fn parse_comparison(&mut self) -> Result<Expr, CompileError>;

    /// Parse an additive expression (+ and -).
    fn parse_additive(&mut self) -> Result<Expr, CompileError>;

    /// Parse a multiplicative expression (*, / and %).
    fn parse_multiplicative(&mut self) -> Result<Expr, CompileError>;

    /// Parse a cast expression (`expr as type`).
    fn parse_cast(&mut self) -> Result<Expr, CompileError>;

    /// Parse a unary expression (! and -).
    fn parse_unary(&mut self) -> Result<Expr, CompileError>;

    /// Parse a postfix expression (function calls).
    fn parse_postfix(&mut self) -> Result<Expr, CompileError>;

    /// Parse a primary expression (literals, identifiers, parentheses).
    fn parse_primary(&mut self) -> Result<Expr, CompileError>;
}

impl<'a> ExpressionParser<'a> for Parser<'a> {
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        self.parse_or_expression()
    }

    fn parse_or_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_and_expression()?;

        while self.check(&Token::OrOr) {
            self.advance();
            let right = self.parse_and_expression()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::BinaryOp {
                    left: Box::new(left),
                    op: BinaryOp::Or,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_and_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_comparison()?;

        while self.check(&Token::AndAnd) {
            self.advance();
            let right = self.parse_comparison()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::BinaryOp {
                    left: Box::new(left),
                    op: BinaryOp::And,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = match self.peek() {
                Some(Token::EqualEqual) => BinaryOp::Equal,
                Some(Token::BangEqual) => BinaryOp::NotEqual,
                Some(Token::Less) => BinaryOp::Less,
                Some(Token::Greater) => BinaryOp::Greater,
                Some(Token::LessEqual) => BinaryOp::LessEqual,
                Some(Token::GreaterEqual) => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::BinaryOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::BinaryOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_cast()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_cast()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::BinaryOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_cast(&mut self) -> Result<Expr, CompileError> {
        let mut expr = self.parse_unary()?;

        while self.match_token(&Token::As) {
            let target_type = self.parse_type()?;
            let span = expr.span.merge(&self.previous_span());
            expr = Expr::new(
                ExprKind::Cast {
                    expr: Box::new(expr),
                    target_type,
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, CompileError> {
        let op = match self.peek() {
            Some(Token::Bang) => UnaryOp::Not,
            Some(Token::Minus) => UnaryOp::Negate,
            _ => return self.parse_postfix(),
        };

        let (_, op_span) = self.advance().unwrap();
        let operand = self.parse_unary()?;
        let span = op_span.merge(&operand.span);
        Ok(Expr::new(
            ExprKind::UnaryOp {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_postfix(&mut self) -> Result<Expr, CompileError> {
        let expr = self.parse_primary()?;

        if self.check(&Token::LeftParen) {
            let name = match &expr.kind {
                ExprKind::Identifier(name) => name.clone(),
                _ => {
                    return Err(CompileError::new(
                        ErrorCode::InvalidCallTarget,
                        "Only named functions can be called",
                        expr.span,
                    ));
                }
            };

            self.advance(); // consume (

            let mut args = Vec::new();
            if !self.check(&Token::RightParen) {
                loop {
                    args.push(self.parse_expression()?);
                    if !self.match_token(&Token::Comma) {
                        break;
                    }
                }
            }

            let (_, close_span) = self.expect(&Token::RightParen, "Expected ')' after arguments")?;
            let span = expr.span.merge(&close_span);
            return Ok(Expr::new(ExprKind::FunctionCall { name, args }, span));
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, CompileError> {
        let (token, span) = match self.advance() {
            Some(t) => t,
            None => {
                return Err(self.error(ErrorCode::UnexpectedEndOfFile, "Expected expression"));
            }
        };

        let kind = match token {
            Token::Integer(value) => ExprKind::IntegerLiteral(value),
            Token::ByteLit(value) => ExprKind::ByteLiteral(value),
            Token::Str(value) => ExprKind::StringLiteral(value),
            Token::True => ExprKind::BoolLiteral(true),
            Token::False => ExprKind::BoolLiteral(false),
            Token::Identifier(name) => ExprKind::Identifier(name),
            Token::LeftParen => {
                let inner = self.parse_expression()?;
                let (_, close_span) =
                    self.expect(&Token::RightParen, "Expected ')' after expression")?;
                let span = span.merge(&close_span);
                return Ok(Expr::new(ExprKind::Grouped(Box::new(inner)), span));
            }
            t => {
                return Err(CompileError::new(
                    ErrorCode::ExpectedExpression,
                    format!("Expected expression, found {}", t),
                    span,
                ));
            }
        };

        Ok(Expr::new(kind, span))
    }
}
