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

//! Token definitions for the Flint lexer.

/// A lexical token of the Flint language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // ===== Literals =====
    /// Integer literal, e.g. `42`
    Integer(i64),
    /// Byte literal with `b` suffix, e.g. `10b`
    ByteLit(u8),
    /// String literal, e.g. `"hello"`
    Str(String),
    /// Identifier, e.g. `counter`
    Identifier(String),

    // ===== Keywords =====
    /// `func` keyword
    Func,
    /// `var` keyword
    Var,
    /// `if` keyword
    If,
    /// `else` keyword
    Else,
    /// `while` keyword
    While,
    /// `break` keyword
    Break,
    /// `continue` keyword
    Continue,
    /// `return` keyword
    Return,
    /// `as` keyword (type cast)
    As,
    /// `true` literal
    True,
    /// `false` literal
    False,

    // ===== Type keywords =====
    /// `void` type
    Void,
    /// `int` type
    Int,
    /// `byte` type
    Byte,
    /// `bool` type
    Bool,
    /// `string` type
    StringType,

    // ===== Punctuation =====
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,

    // ===== Operators =====
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
}

impl Token {
    /// Map a scanned word to its keyword token, or an identifier.
    pub fn from_keyword_or_identifier(word: &str) -> Self {
        match word {
            "func" => Token::Func,
            "var" => Token::Var,
            "if" => Token::If,
            "else" => Token::Else,
            "while" => Token::While,
            "break" => Token::Break,
            "continue" => Token::Continue,
            "return" => Token::Return,
            "as" => Token::As,
            "true" => Token::True,
            "false" => Token::False,
            "void" => Token::Void,
            "int" => Token::Int,
            "byte" => Token::Byte,
            "bool" => Token::Bool,
            "string" => Token::StringType,
            _ => Token::Identifier(word.to_string()),
        }
    }

    /// Check if this token names a type.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Token::Void | Token::Int | Token::Byte | Token::Bool | Token::StringType
        )
    }

    /// Check if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Func
                | Token::Var
                | Token::If
                | Token::Else
                | Token::While
                | Token::Break
                | Token::Continue
                | Token::Return
                | Token::As
                | Token::True
                | Token::False
        ) || self.is_type()
    }

    /// A short human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Integer(_) => "integer literal",
            Token::ByteLit(_) => "byte literal",
            Token::Str(_) => "string literal",
            Token::Identifier(_) => "identifier",
            Token::Func => "'func'",
            Token::Var => "'var'",
            Token::If => "'if'",
            Token::Else => "'else'",
            Token::While => "'while'",
            Token::Break => "'break'",
            Token::Continue => "'continue'",
            Token::Return => "'return'",
            Token::As => "'as'",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Void => "'void'",
            Token::Int => "'int'",
            Token::Byte => "'byte'",
            Token::Bool => "'bool'",
            Token::StringType => "'string'",
            Token::LeftParen => "'('",
            Token::RightParen => "')'",
            Token::LeftBrace => "'{'",
            Token::RightBrace => "'}'",
            Token::Comma => "','",
            Token::Colon => "':'",
            Token::Semicolon => "';'",
            Token::Equal => "'='",
            Token::EqualEqual => "'=='",
            Token::BangEqual => "'!='",
            Token::Less => "'<'",
            Token::Greater => "'>'",
            Token::LessEqual => "'<='",
            Token::GreaterEqual => "'>='",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Percent => "'%'",
            Token::Bang => "'!'",
            Token::AndAnd => "'&&'",
            Token::OrOr => "'||'",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::ByteLit(n) => write!(f, "{}b", n),
            Token::Str(s) => write!(f, "\"{}\"", s),
            Token::Identifier(name) => write!(f, "{}", name),
            _ => write!(f, "{}", self.name().trim_matches('\'')),
        }
    }
}
