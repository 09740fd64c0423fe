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

//! Lexer for the Flint language.
//!
//! Turns source text into a stream of tokens. It handles:
//! - Keywords and identifiers
//! - Integer literals and byte literals (`b` suffix)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments (starting with //)
//!
//! Whitespace carries no meaning beyond separating tokens.

mod tokens;

pub use tokens::Token;

use crate::error::{CompileError, ErrorCode, Span};

/// The lexer state for tokenizing source code.
pub struct Lexer<'source> {
    /// The source code being tokenized.
    source: &'source str,
    /// Current byte position in the source.
    position: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed).
    column: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the current position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the current line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Check if we've reached the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Peek at the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Advance to the next character and return it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Create a span from start position to current position.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.position)
    }

    /// Skip whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Get the next token from the source.
    pub fn next_token(&mut self) -> Result<Option<(Token, Span)>, CompileError> {
        self.skip_whitespace_and_comments();

        if self.is_at_end() {
            return Ok(None);
        }

        let c = self.peek().unwrap();

        if c == '"' {
            return self.scan_string().map(Some);
        }

        if c.is_ascii_digit() {
            return self.scan_number().map(Some);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(Some(self.scan_identifier()));
        }

        self.scan_operator_or_punctuation().map(Some)
    }

    /// Scan a string literal.
    fn scan_string(&mut self) -> Result<(Token, Span), CompileError> {
        let start = self.position;
        self.advance(); // consume opening "

        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(CompileError::new(
                        ErrorCode::UnterminatedString,
                        "Unterminated string literal",
                        self.span_from(start),
                    ));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    let escaped = match self.peek() {
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('\\') => '\\',
                        Some('"') => '"',
                        Some('0') => '\0',
                        Some(c) => {
                            return Err(CompileError::new(
                                ErrorCode::InvalidEscapeSequence,
                                format!("Invalid escape sequence '\\{}'", c),
                                self.span_from(start),
                            ));
                        }
                        None => {
                            return Err(CompileError::new(
                                ErrorCode::UnterminatedString,
                                "Unterminated string literal",
                                self.span_from(start),
                            ));
                        }
                    };
                    self.advance();
                    value.push(escaped);
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        Ok((Token::Str(value), self.span_from(start)))
    }

    /// Scan an integer or byte literal.
    ///
    /// A trailing `b` turns the literal into a byte; byte values above 255
    /// are rejected here, before the parser ever sees the token.
    fn scan_number(&mut self) -> Result<(Token, Span), CompileError> {
        let start = self.position;
        let mut value: i64 = 0;
        let mut overflowed = false;

        while let Some(c) = self.peek() {
            if let Some(digit) = c.to_digit(10) {
                self.advance();
                value = match value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit as i64))
                {
                    Some(v) => v,
                    None => {
                        overflowed = true;
                        0
                    }
                };
            } else {
                break;
            }
        }

        let digits_end = self.position;

        if self.peek() == Some('b') {
            self.advance();
            let digits = &self.source[start..digits_end];
            if overflowed || value > 255 {
                return Err(CompileError::new(
                    ErrorCode::ByteOutOfRange,
                    format!("byte value {} out of range", digits),
                    self.span_from(start),
                ));
            }
            self.check_number_boundary(start)?;
            return Ok((Token::ByteLit(value as u8), self.span_from(start)));
        }

        if overflowed {
            return Err(CompileError::new(
                ErrorCode::NumberTooLarge,
                "Integer literal too large",
                self.span_from(start),
            ));
        }

        self.check_number_boundary(start)?;
        Ok((Token::Integer(value), self.span_from(start)))
    }

    /// Reject identifier characters glued onto a number literal, e.g. `10x`.
    fn check_number_boundary(&mut self, start: usize) -> Result<(), CompileError> {
        if let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                return Err(CompileError::new(
                    ErrorCode::UnexpectedCharacter,
                    format!("Unexpected character '{}' in number literal", c),
                    self.span_from(start),
                ));
            }
        }
        Ok(())
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self) -> (Token, Span) {
        let start = self.position;

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.position];
        let token = Token::from_keyword_or_identifier(text);
        (token, self.span_from(start))
    }

    /// Scan an operator or punctuation.
    fn scan_operator_or_punctuation(&mut self) -> Result<(Token, Span), CompileError> {
        let start = self.position;
        let c = self.advance().unwrap();

        let token = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::EqualEqual
                } else {
                    Token::Equal
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::BangEqual
                } else {
                    Token::Bang
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::LessEqual
                } else {
                    Token::Less
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::GreaterEqual
                } else {
                    Token::Greater
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Token::AndAnd
                } else {
                    return Err(CompileError::new(
                        ErrorCode::UnexpectedCharacter,
                        "Unexpected character '&' (did you mean '&&'?)",
                        self.span_from(start),
                    ));
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Token::OrOr
                } else {
                    return Err(CompileError::new(
                        ErrorCode::UnexpectedCharacter,
                        "Unexpected character '|' (did you mean '||'?)",
                        self.span_from(start),
                    ));
                }
            }
            _ => {
                return Err(CompileError::new(
                    ErrorCode::UnexpectedCharacter,
                    format!("Unexpected character '{}'", c),
                    self.span_from(start),
                ));
            }
        };

        Ok((token, self.span_from(start)))
    }
}

/// Tokenize source code into a vector of tokens with spans.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token_span) = lexer.next_token()? {
        tokens.push(token_span);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    // ========================================
    // Basic Token Tests
    // ========================================

    #[test]
    fn test_arithmetic_operators() {
        let tokens = tokenize("+ - * / %").unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(matches!(tokens[0].0, Token::Plus));
        assert!(matches!(tokens[1].0, Token::Minus));
        assert!(matches!(tokens[2].0, Token::Star));
        assert!(matches!(tokens[3].0, Token::Slash));
        assert!(matches!(tokens[4].0, Token::Percent));
    }

    #[test]
    fn test_comparison_operators() {
        let tokens = tokenize("== != < > <= >=").unwrap();
        assert_eq!(tokens.len(), 6);
        assert!(matches!(tokens[0].0, Token::EqualEqual));
        assert!(matches!(tokens[1].0, Token::BangEqual));
        assert!(matches!(tokens[2].0, Token::Less));
        assert!(matches!(tokens[3].0, Token::Greater));
        assert!(matches!(tokens[4].0, Token::LessEqual));
        assert!(matches!(tokens[5].0, Token::GreaterEqual));
    }

    #[test]
    fn test_logical_operators() {
        let tokens = tokenize("&& || !").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(tokens[0].0, Token::AndAnd));
        assert!(matches!(tokens[1].0, Token::OrOr));
        assert!(matches!(tokens[2].0, Token::Bang));
    }

    #[test]
    fn test_punctuation() {
        let tokens = tokenize("( ) { } , : ;").unwrap();
        assert_eq!(tokens.len(), 7);
        assert!(matches!(tokens[0].0, Token::LeftParen));
        assert!(matches!(tokens[1].0, Token::RightParen));
        assert!(matches!(tokens[2].0, Token::LeftBrace));
        assert!(matches!(tokens[3].0, Token::RightBrace));
        assert!(matches!(tokens[4].0, Token::Comma));
        assert!(matches!(tokens[5].0, Token::Colon));
        assert!(matches!(tokens[6].0, Token::Semicolon));
    }

    #[test]
    fn test_keywords() {
        let tokens = tokenize("func var if else while break continue return as").unwrap();
        assert!(matches!(tokens[0].0, Token::Func));
        assert!(matches!(tokens[1].0, Token::Var));
        assert!(matches!(tokens[2].0, Token::If));
        assert!(matches!(tokens[3].0, Token::Else));
        assert!(matches!(tokens[4].0, Token::While));
        assert!(matches!(tokens[5].0, Token::Break));
        assert!(matches!(tokens[6].0, Token::Continue));
        assert!(matches!(tokens[7].0, Token::Return));
        assert!(matches!(tokens[8].0, Token::As));
    }

    #[test]
    fn test_type_keywords() {
        let tokens = tokenize("void int byte bool string").unwrap();
        assert!(matches!(tokens[0].0, Token::Void));
        assert!(matches!(tokens[1].0, Token::Int));
        assert!(matches!(tokens[2].0, Token::Byte));
        assert!(matches!(tokens[3].0, Token::Bool));
        assert!(matches!(tokens[4].0, Token::StringType));
    }

    #[test]
    fn test_bool_literals() {
        let tokens = tokenize("true false").unwrap();
        assert!(matches!(tokens[0].0, Token::True));
        assert!(matches!(tokens[1].0, Token::False));
    }

    // ========================================
    // Number Literal Tests
    // ========================================

    #[test]
    fn test_integer_literal() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].0, Token::Integer(42)));
    }

    #[test]
    fn test_integer_zero() {
        let tokens = tokenize("0").unwrap();
        assert!(matches!(tokens[0].0, Token::Integer(0)));
    }

    #[test]
    fn test_large_integer() {
        let tokens = tokenize("9223372036854775807").unwrap();
        assert!(matches!(tokens[0].0, Token::Integer(i64::MAX)));
    }

    #[test]
    fn test_integer_too_large() {
        let err = tokenize("9223372036854775808").unwrap_err();
        assert_eq!(err.code, ErrorCode::NumberTooLarge);
    }

    #[test]
    fn test_byte_literal() {
        let tokens = tokenize("10b").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].0, Token::ByteLit(10)));
    }

    #[test]
    fn test_byte_literal_bounds() {
        let tokens = tokenize("0b 255b").unwrap();
        assert!(matches!(tokens[0].0, Token::ByteLit(0)));
        assert!(matches!(tokens[1].0, Token::ByteLit(255)));
    }

    #[test]
    fn test_byte_out_of_range() {
        let err = tokenize("256b").unwrap_err();
        assert_eq!(err.code, ErrorCode::ByteOutOfRange);
        assert_eq!(err.message, "byte value 256 out of range");
    }

    #[test]
    fn test_byte_far_out_of_range() {
        let err = tokenize("99999b").unwrap_err();
        assert_eq!(err.code, ErrorCode::ByteOutOfRange);
        assert_eq!(err.message, "byte value 99999 out of range");
    }

    #[test]
    fn test_number_glued_to_identifier() {
        let err = tokenize("10x").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedCharacter);
    }

    // ========================================
    // String Literal Tests
    // ========================================

    #[test]
    fn test_string_literal() {
        let tokens = tokenize("\"hello\"").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Str("hello".to_string()));
    }

    #[test]
    fn test_empty_string() {
        let tokens = tokenize("\"\"").unwrap();
        assert_eq!(tokens[0].0, Token::Str(String::new()));
    }

    #[test]
    fn test_string_escapes() {
        let tokens = tokenize(r#""a\nb\tc\\d\"e\0f""#).unwrap();
        assert_eq!(tokens[0].0, Token::Str("a\nb\tc\\d\"e\0f".to_string()));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("\"hello").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnterminatedString);
    }

    #[test]
    fn test_string_with_newline() {
        let err = tokenize("\"hello\nworld\"").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnterminatedString);
    }

    #[test]
    fn test_invalid_escape() {
        let err = tokenize(r#""\q""#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEscapeSequence);
    }

    // ========================================
    // Identifier Tests
    // ========================================

    #[test]
    fn test_identifiers() {
        let tokens = tokenize("foo _bar baz123").unwrap();
        assert_eq!(tokens[0].0, Token::Identifier("foo".to_string()));
        assert_eq!(tokens[1].0, Token::Identifier("_bar".to_string()));
        assert_eq!(tokens[2].0, Token::Identifier("baz123".to_string()));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = tokenize("iffy whiles functions").unwrap();
        assert_eq!(tokens[0].0, Token::Identifier("iffy".to_string()));
        assert_eq!(tokens[1].0, Token::Identifier("whiles".to_string()));
        assert_eq!(tokens[2].0, Token::Identifier("functions".to_string()));
    }

    // ========================================
    // Comment and Whitespace Tests
    // ========================================

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("1 // a comment\n2").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(matches!(tokens[0].0, Token::Integer(1)));
        assert!(matches!(tokens[1].0, Token::Integer(2)));
    }

    #[test]
    fn test_comment_at_end_of_file() {
        let tokens = tokenize("42 // trailing").unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let a = tokenize("func main ( ) : void { }").unwrap();
        let b = tokenize("func\nmain(\t):\r\nvoid{}").unwrap();
        let a_tokens: Vec<_> = a.into_iter().map(|(t, _)| t).collect();
        let b_tokens: Vec<_> = b.into_iter().map(|(t, _)| t).collect();
        assert_eq!(a_tokens, b_tokens);
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_single_slash_is_divide() {
        let tokens = tokenize("a / b").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(tokens[1].0, Token::Slash));
    }

    // ========================================
    // Error Tests
    // ========================================

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("@").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedCharacter);
    }

    #[test]
    fn test_single_ampersand() {
        let err = tokenize("a & b").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedCharacter);
    }

    #[test]
    fn test_single_pipe() {
        let err = tokenize("a | b").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedCharacter);
    }

    // ========================================
    // Span Tests
    // ========================================

    #[test]
    fn test_spans() {
        let tokens = tokenize("var x").unwrap();
        assert_eq!(tokens[0].1, Span::new(0, 3));
        assert_eq!(tokens[1].1, Span::new(4, 5));
    }

    #[test]
    fn test_span_across_lines() {
        let tokens = tokenize("1\n22").unwrap();
        assert_eq!(tokens[0].1, Span::new(0, 1));
        assert_eq!(tokens[1].1, Span::new(2, 4));
    }

    #[test]
    fn test_full_function_tokenizes() {
        let source = r#"
func main(): void {
    var x: int = 1;
    while (true) {
        x = x + 1;
        if (x > 10) break;
    }
    printi(x);
}
"#;
        let tokens = tokenize(source).unwrap();
        assert!(matches!(tokens[0].0, Token::Func));
        assert!(tokens.len() > 30);
    }
}
