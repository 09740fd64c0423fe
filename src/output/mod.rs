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

//! Symbol table trace output.
//!
//! The analyzer reports what it resolved through a [`ScopePrinter`]: one
//! line per registered function, and begin/end markers with variable lines
//! for every scope it opens and closes. The rendered trace is the
//! program's only output on a successful run.

use crate::ast::Type;

/// Collects the symbol table trace while the analyzer walks a program.
///
/// Function lines come first, in registration order. Scope lines follow,
/// indented two spaces per nesting depth, in the exact order the scopes
/// were opened and closed.
#[derive(Debug, Default)]
pub struct ScopePrinter {
    /// One line per registered function.
    functions: String,
    /// Scope markers and variable lines, already indented.
    scopes: String,
    /// Current scope nesting depth (0 = global).
    depth: usize,
    /// Running count of opened scopes.
    opened: usize,
    /// Running count of closed scopes.
    closed: usize,
}

impl ScopePrinter {
    /// Create a new empty printer.
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }

    /// Record a registered function: `name (t1,t2) -> ret`.
    pub fn emit_function(&mut self, name: &str, param_types: &[Type], return_type: Type) {
        let params = param_types
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(",");
        self.functions
            .push_str(&format!("{} ({}) -> {}\n", name, params, return_type.name()));
    }

    /// Record the opening of a scope.
    pub fn begin_scope(&mut self) {
        self.depth += 1;
        self.opened += 1;
        let line = format!("{}---begin scope---\n", self.indent());
        self.scopes.push_str(&line);
    }

    /// Record the closing of the innermost scope.
    pub fn end_scope(&mut self) {
        let line = format!("{}---end scope---\n", self.indent());
        self.scopes.push_str(&line);
        self.closed += 1;
        self.depth -= 1;
    }

    /// Record a variable binding: `name type offset`.
    pub fn emit_variable(&mut self, name: &str, ty: Type, offset: i32) {
        let line = format!("{}{} {} {}\n", self.indent(), name, ty.name(), offset);
        self.scopes.push_str(&line);
    }

    /// Number of scopes opened so far.
    pub fn scopes_opened(&self) -> usize {
        self.opened
    }

    /// Number of scopes closed so far.
    pub fn scopes_closed(&self) -> usize {
        self.closed
    }
}

impl std::fmt::Display for ScopePrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "---begin global scope---\n{}{}---end global scope---\n", self.functions, self.scopes)
    }
}
