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

//! Statement AST nodes.

use super::{Block, Expr, Type};
use crate::error::Span;

/// A statement in a Flint program.
#[derive(Debug, Clone)]
pub struct Statement {
    /// The kind of statement.
    pub kind: StatementKind,
    /// The source span of this statement.
    pub span: Span,
}

impl Statement {
    /// Create a new statement.
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The different kinds of statements.
#[derive(Debug, Clone)]
pub enum StatementKind {
    /// Variable declaration: `var x: int = 1;`
    VarDecl(VarDecl),
    /// Assignment: `x = 1;`
    Assignment(Assignment),
    /// Expression statement: `foo();`
    Expression(Expr),
    /// If statement with optional else arm.
    If(IfStatement),
    /// While loop.
    While(WhileStatement),
    /// Break out of the innermost loop.
    Break,
    /// Continue with the next iteration of the innermost loop.
    Continue,
    /// Return from the current function, with an optional value.
    Return(Option<Expr>),
    /// A bare brace block used as a statement.
    Block(Block),
}

/// A variable declaration: `var name: type` with an optional initializer.
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// The variable name.
    pub name: String,
    /// The declared type.
    pub ty: Type,
    /// The optional initializer expression.
    pub initializer: Option<Expr>,
}

/// An assignment to an already-declared variable.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The name of the assignment target.
    pub target: String,
    /// The span of the target name.
    pub target_span: Span,
    /// The value being assigned.
    pub value: Expr,
}

/// An if statement: condition, then-arm and optional else-arm.
///
/// Each arm is a single statement; a brace block counts as one statement,
/// so `else if` chains fall out of the grammar for free.
#[derive(Debug, Clone)]
pub struct IfStatement {
    /// The condition expression.
    pub condition: Expr,
    /// The statement executed when the condition holds.
    pub then_arm: Box<Statement>,
    /// The statement executed otherwise, if present.
    pub else_arm: Option<Box<Statement>>,
}

/// A while loop: condition and body statement.
#[derive(Debug, Clone)]
pub struct WhileStatement {
    /// The condition expression.
    pub condition: Expr,
    /// The loop body.
    pub body: Box<Statement>,
}

/// A function declaration.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    /// The function name.
    pub name: String,
    /// The parameter list, in source order.
    pub params: Vec<Param>,
    /// The declared return type.
    pub return_type: Type,
    /// The function body.
    pub body: Block,
    /// The source span of the whole declaration.
    pub span: Span,
}

impl FuncDecl {
    /// Create a new function declaration.
    pub fn new(
        name: String,
        params: Vec<Param>,
        return_type: Type,
        body: Block,
        span: Span,
    ) -> Self {
        Self {
            name,
            params,
            return_type,
            body,
            span,
        }
    }
}

/// A single function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    /// The parameter name.
    pub name: String,
    /// The declared type.
    pub ty: Type,
    /// The span of the parameter.
    pub span: Span,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StatementKind::VarDecl(decl) => match &decl.initializer {
                Some(init) => write!(f, "var {}: {} = {};", decl.name, decl.ty, init),
                None => write!(f, "var {}: {};", decl.name, decl.ty),
            },
            StatementKind::Assignment(assign) => {
                write!(f, "{} = {};", assign.target, assign.value)
            }
            StatementKind::Expression(expr) => write!(f, "{};", expr),
            StatementKind::If(stmt) => {
                write!(f, "if ({}) {}", stmt.condition, stmt.then_arm)?;
                if let Some(else_arm) = &stmt.else_arm {
                    write!(f, " else {}", else_arm)?;
                }
                Ok(())
            }
            StatementKind::While(stmt) => {
                write!(f, "while ({}) {}", stmt.condition, stmt.body)
            }
            StatementKind::Break => write!(f, "break;"),
            StatementKind::Continue => write!(f, "continue;"),
            StatementKind::Return(value) => match value {
                Some(expr) => write!(f, "return {};", expr),
                None => write!(f, "return;"),
            },
            StatementKind::Block(block) => write!(f, "{}", block),
        }
    }
}

impl std::fmt::Display for FuncDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "func {}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, "): {} {}", self.return_type, self.body)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
