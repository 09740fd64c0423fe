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

//! Function declaration and brace block parsing.

use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Block, FuncDecl, Param};
use crate::error::CompileError;
use crate::lexer::Token;

/// Trait for parsing function declarations and blocks.
pub trait BlockParser<'a> {
    /// Parse a function declaration: `func name(params): type { ... }`
    fn parse_function(&mut self) -> Result<FuncDecl, CompileError>;

    /// Parse a parameter list (without the surrounding parentheses).
    fn parse_params(&mut self) -> Result<Vec<Param>, CompileError>;

    /// Parse a brace-delimited statement block.
    fn parse_block(&mut self) -> Result<Block, CompileError>;
}

impl<'a> BlockParser<'a> for Parser<'a> {
    fn parse_function(&mut self) -> Result<FuncDecl, CompileError> {
        let (_, start_span) = self.expect(&Token::Func, "Expected 'func'")?;

        let (name_token, _) = self.expect(
            &Token::Identifier(String::new()),
            "Expected function name after 'func'",
        )?;
        let name = match name_token {
            Token::Identifier(name) => name,
            _ => unreachable!(),
        };

        self.expect(&Token::LeftParen, "Expected '(' after function name")?;
        let params = self.parse_params()?;
        self.expect(&Token::RightParen, "Expected ')' after parameters")?;

        self.expect(&Token::Colon, "Expected ':' before return type")?;
        let return_type = self.parse_type()?;

        let body = self.parse_block()?;
        let span = start_span.merge(&body.span);

        Ok(FuncDecl::new(name, params, return_type, body, span))
    }

    fn parse_params(&mut self) -> Result<Vec<Param>, CompileError> {
        let mut params = Vec::new();

        if self.check(&Token::RightParen) {
            return Ok(params);
        }

        loop {
            let (name_token, name_span) = self.expect(
                &Token::Identifier(String::new()),
                "Expected parameter name",
            )?;
            let name = match name_token {
                Token::Identifier(name) => name,
                _ => unreachable!(),
            };

            self.expect(&Token::Colon, "Expected ':' after parameter name")?;
            let ty = self.parse_type()?;
            let span = name_span.merge(&self.previous_span());

            params.push(Param { name, ty, span });

            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        Ok(params)
    }

    fn parse_block(&mut self) -> Result<Block, CompileError> {
        let (_, start_span) = self.expect(&Token::LeftBrace, "Expected '{'")?;

        let mut statements = Vec::new();
        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        let (_, end_span) = self.expect(&Token::RightBrace, "Expected '}' after block")?;
        let span = start_span.merge(&end_span);

        Ok(Block::new(statements, span))
    }
}
