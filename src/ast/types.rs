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

//! Type definitions for the Flint language.

/// A type in the Flint language.
///
/// The type system is a closed set with no subtyping; two types are
/// compatible exactly when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// No value (function return type only).
    Void,
    /// Signed integer.
    Int,
    /// 8-bit unsigned integer (0-255).
    Byte,
    /// Boolean value.
    Bool,
    /// Text string.
    String,
}

impl Type {
    /// Get the keyword name for this type.
    ///
    /// This is the spelling used both in source code and in the symbol
    /// table trace.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Void => "void",
            Type::Int => "int",
            Type::Byte => "byte",
            Type::Bool => "bool",
            Type::String => "string",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
