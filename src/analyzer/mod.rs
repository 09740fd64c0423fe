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

//! Semantic analyzer for the Flint language.
//!
//! This module walks the AST and performs:
//! - Function registration (builtins first, then user functions)
//! - Symbol resolution with stack frame offset assignment
//! - Scope tracking (functions, loop bodies, bare blocks, if arms)
//! - Conservative type checks (conditions, return values, call targets)
//! - Error detection (duplicate symbols, undefined names, misuse of
//!   functions as variables and vice versa)
//!
//! Analysis stops at the first error. On success the full symbol table
//! trace is available through the [`ScopePrinter`].
//!
//! # Offsets
//!
//! Parameters get offsets -1, -2, ... in declaration order. Local
//! variables count up from 0. A `while` body block starts a fresh local
//! counter at 0; `if` arms and bare blocks open scopes without touching
//! the counter, so locals there continue the surrounding numbering.

use crate::ast::{
    Expr, ExprKind, FuncDecl, Program, Statement, StatementKind, Type, WhileStatement,
};
use crate::error::{CompileError, ErrorCode};
use crate::output::ScopePrinter;

/// A variable binding in the symbol table.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// The variable name.
    pub name: String,
    /// The declared type.
    pub ty: Type,
    /// The assigned stack frame offset.
    pub offset: i32,
}

/// A single lexical scope: the variables bound in it, in binding order.
#[derive(Debug, Default)]
pub struct Scope {
    symbols: Vec<Symbol>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a symbol in this scope.
    pub fn define(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Look up a symbol in this scope.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

/// The scope stack for variable bindings.
///
/// The stack is empty between functions; each function, loop body, bare
/// block and if arm pushes a scope while it is being analyzed.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// The scope stack (innermost scope last).
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Create a new empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new scope onto the stack.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope from the stack.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Bind a symbol in the innermost scope.
    pub fn define(&mut self, symbol: Symbol) {
        self.scopes
            .last_mut()
            .expect("no scope available")
            .define(symbol);
    }

    /// Check whether a name is bound in any open scope.
    ///
    /// This is the no-shadowing check: a declaration conflicts with any
    /// visible binding, not just one in the innermost scope.
    pub fn is_defined(&self, name: &str) -> bool {
        self.scopes.iter().any(|s| s.lookup(name).is_some())
    }

    /// Look up the nearest binding, searching innermost to outermost.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.lookup(name) {
                return Some(symbol);
            }
        }
        None
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// A registered function: builtin or user-declared.
#[derive(Debug, Clone)]
pub struct FunctionSignature {
    /// The function name.
    pub name: String,
    /// The registration slot (builtins first, then user functions in
    /// declaration order).
    pub slot: usize,
    /// The parameter types, in declaration order.
    pub param_types: Vec<Type>,
    /// The declared return type.
    pub return_type: Type,
}

/// Context for semantic analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    /// The current function name (for error messages).
    pub function_name: Option<String>,
    /// The declared return type of the current function.
    pub return_type: Option<Type>,
    /// Whether we're inside a loop (for break/continue validation).
    pub in_loop: bool,
}

/// The semantic analyzer.
pub struct Analyzer {
    /// The variable scope stack.
    pub symbols: SymbolTable,
    /// All registered functions, in slot order.
    functions: Vec<FunctionSignature>,
    /// Stack of local offset counters, one per counter-bearing scope.
    offsets: Vec<i32>,
    /// Analysis context.
    context: AnalysisContext,
    /// The trace sink.
    printer: ScopePrinter,
}

impl Analyzer {
    /// Create a new analyzer with the builtin functions registered.
    pub fn new() -> Self {
        let mut analyzer = Self {
            symbols: SymbolTable::new(),
            functions: Vec::new(),
            offsets: Vec::new(),
            context: AnalysisContext::default(),
            printer: ScopePrinter::new(),
        };
        analyzer.register_builtins();
        analyzer
    }

    /// Register built-in functions.
    fn register_builtins(&mut self) {
        // print(text) - write a string
        self.register_function("print", vec![Type::String], Type::Void);

        // printi(value) - write an integer
        self.register_function("printi", vec![Type::Int], Type::Void);
    }

    /// Register a function in the next free slot.
    fn register_function(&mut self, name: &str, param_types: Vec<Type>, return_type: Type) {
        self.printer.emit_function(name, &param_types, return_type);
        self.functions.push(FunctionSignature {
            name: name.to_string(),
            slot: self.functions.len(),
            param_types,
            return_type,
        });
    }

    /// Check whether a name refers to a registered function.
    fn is_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f.name == name)
    }

    /// The value of the innermost local offset counter.
    fn current_offset(&self) -> i32 {
        *self.offsets.last().expect("no offset counter available")
    }

    /// Mutable access to the innermost local offset counter.
    fn current_offset_mut(&mut self) -> &mut i32 {
        self.offsets.last_mut().expect("no offset counter available")
    }

    /// Analyze a program. Stops at the first error.
    pub fn analyze(&mut self, program: &Program) -> Result<(), CompileError> {
        // First pass: register all user functions
        self.collect_declarations(program)?;

        self.check_main(program)?;

        // Second pass: analyze all function bodies
        for func in &program.functions {
            self.analyze_function(func)?;
        }

        Ok(())
    }

    /// Consume the analyzer and return the collected trace.
    pub fn into_trace(self) -> ScopePrinter {
        self.printer
    }

    /// Register all user function declarations (first pass).
    fn collect_declarations(&mut self, program: &Program) -> Result<(), CompileError> {
        for func in &program.functions {
            if self.is_function(&func.name) {
                return Err(CompileError::new(
                    ErrorCode::DuplicateDefinition,
                    format!("symbol {} is already defined", func.name),
                    func.span.clone(),
                ));
            }
            let param_types: Vec<Type> = func.params.iter().map(|p| p.ty).collect();
            self.register_function(&func.name, param_types, func.return_type);
        }
        Ok(())
    }

    /// Check that the program has a `func main(): void` with no parameters.
    fn check_main(&self, program: &Program) -> Result<(), CompileError> {
        let main_ok = program
            .functions
            .iter()
            .any(|f| f.name == "main" && f.return_type == Type::Void && f.params.is_empty());

        if main_ok {
            Ok(())
        } else {
            Err(CompileError::global(
                ErrorCode::MissingMain,
                "Program has no 'func main(): void' function",
            ))
        }
    }

    /// Analyze a function declaration.
    ///
    /// The function body shares the scope its parameters are bound in;
    /// the local counter restarts at 0 once the parameters are placed.
    fn analyze_function(&mut self, func: &FuncDecl) -> Result<(), CompileError> {
        let old_context = self.context.clone();
        self.context.function_name = Some(func.name.clone());
        self.context.return_type = Some(func.return_type);
        self.context.in_loop = false;

        self.printer.begin_scope();
        self.symbols.push_scope();
        self.offsets.push(-1);

        let result = self.analyze_function_inner(func);

        self.offsets.pop();
        self.symbols.pop_scope();
        if result.is_ok() {
            self.printer.end_scope();
        }
        self.context = old_context;

        result
    }

    fn analyze_function_inner(&mut self, func: &FuncDecl) -> Result<(), CompileError> {
        for param in &func.params {
            if self.symbols.is_defined(&param.name) {
                return Err(CompileError::new(
                    ErrorCode::DuplicateDefinition,
                    format!("symbol {} is already defined", param.name),
                    param.span.clone(),
                ));
            }
            let offset = self.current_offset();
            self.symbols.define(Symbol {
                name: param.name.clone(),
                ty: param.ty,
                offset,
            });
            self.printer.emit_variable(&param.name, param.ty, offset);
            *self.current_offset_mut() -= 1;
        }

        // Locals count up from 0, independent of the parameter offsets
        *self.current_offset_mut() = 0;

        for stmt in &func.body.statements {
            self.analyze_statement(stmt)?;
        }

        Ok(())
    }

    /// Analyze a single statement.
    fn analyze_statement(&mut self, stmt: &Statement) -> Result<(), CompileError> {
        match &stmt.kind {
            StatementKind::VarDecl(decl) => {
                if self.symbols.is_defined(&decl.name) {
                    return Err(CompileError::new(
                        ErrorCode::DuplicateDefinition,
                        format!("symbol {} is already defined", decl.name),
                        stmt.span.clone(),
                    ));
                }

                if let Some(init) = &decl.initializer {
                    if let ExprKind::Identifier(name) = &init.kind {
                        if self.is_function(name) {
                            return Err(CompileError::new(
                                ErrorCode::IdentifierKindMismatch,
                                format!("symbol {} is a function", name),
                                init.span.clone(),
                            ));
                        }
                    }
                    self.check_calls(init)?;
                }

                let offset = self.current_offset();
                self.symbols.define(Symbol {
                    name: decl.name.clone(),
                    ty: decl.ty,
                    offset,
                });
                self.printer.emit_variable(&decl.name, decl.ty, offset);
                *self.current_offset_mut() += 1;

                Ok(())
            }

            StatementKind::Assignment(assign) => {
                if self.symbols.lookup(&assign.target).is_none() {
                    if self.is_function(&assign.target) {
                        return Err(CompileError::new(
                            ErrorCode::IdentifierKindMismatch,
                            format!("symbol {} is a function", assign.target),
                            assign.target_span.clone(),
                        ));
                    }
                    return Err(CompileError::new(
                        ErrorCode::UndefinedVariable,
                        format!("variable {} is not defined", assign.target),
                        assign.target_span.clone(),
                    ));
                }
                self.check_calls(&assign.value)
            }

            StatementKind::Expression(expr) => self.check_calls(expr),

            StatementKind::If(if_stmt) => {
                self.check_bool_condition(&if_stmt.condition)?;

                self.analyze_if_arm(&if_stmt.then_arm)?;
                if let Some(else_arm) = &if_stmt.else_arm {
                    self.analyze_if_arm(else_arm)?;
                }
                Ok(())
            }

            StatementKind::While(while_stmt) => self.analyze_while(while_stmt),

            StatementKind::Break => {
                if !self.context.in_loop {
                    return Err(CompileError::new(
                        ErrorCode::UnexpectedBreak,
                        "unexpected break statement",
                        stmt.span.clone(),
                    ));
                }
                Ok(())
            }

            StatementKind::Continue => {
                if !self.context.in_loop {
                    return Err(CompileError::new(
                        ErrorCode::UnexpectedContinue,
                        "unexpected continue statement",
                        stmt.span.clone(),
                    ));
                }
                Ok(())
            }

            StatementKind::Return(value) => self.analyze_return(stmt, value.as_ref()),

            StatementKind::Block(block) => {
                self.printer.begin_scope();
                self.symbols.push_scope();

                let result = block
                    .statements
                    .iter()
                    .try_for_each(|s| self.analyze_statement(s));

                self.symbols.pop_scope();
                if result.is_ok() {
                    self.printer.end_scope();
                }
                result
            }
        }
    }

    /// Analyze one arm of an if statement.
    ///
    /// The arm gets a scope of its own but no fresh offset counter, so a
    /// local declared here continues the surrounding numbering. A brace
    /// block arm opens its own scope on top, nested inside this one.
    fn analyze_if_arm(&mut self, arm: &Statement) -> Result<(), CompileError> {
        self.printer.begin_scope();
        self.symbols.push_scope();

        let result = self.analyze_statement(arm);

        self.symbols.pop_scope();
        if result.is_ok() {
            self.printer.end_scope();
        }
        result
    }

    /// Analyze a while loop.
    ///
    /// A brace block body gets a scope with a fresh offset counter
    /// starting at 0. Any other body statement is analyzed in place.
    fn analyze_while(&mut self, while_stmt: &WhileStatement) -> Result<(), CompileError> {
        match &while_stmt.condition.kind {
            ExprKind::BoolLiteral(_) => {}
            _ => {
                return Err(CompileError::new(
                    ErrorCode::TypeMismatch,
                    "type mismatch",
                    while_stmt.condition.span.clone(),
                ));
            }
        }

        let old_in_loop = self.context.in_loop;
        self.context.in_loop = true;

        let result = match &while_stmt.body.kind {
            StatementKind::Block(block) => {
                self.printer.begin_scope();
                self.symbols.push_scope();
                self.offsets.push(0);

                let result = block
                    .statements
                    .iter()
                    .try_for_each(|s| self.analyze_statement(s));

                self.offsets.pop();
                self.symbols.pop_scope();
                if result.is_ok() {
                    self.printer.end_scope();
                }
                result
            }
            _ => self.analyze_statement(&while_stmt.body),
        };

        self.context.in_loop = old_in_loop;
        result
    }

    /// Check an if condition: a bool literal or a bool-typed identifier.
    ///
    /// The identifier's type comes from its nearest visible binding.
    /// Anything else is rejected outright.
    fn check_bool_condition(&self, condition: &Expr) -> Result<(), CompileError> {
        let ok = match &condition.kind {
            ExprKind::BoolLiteral(_) => true,
            ExprKind::Identifier(name) => self
                .symbols
                .lookup(name)
                .is_some_and(|s| s.ty == Type::Bool),
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(CompileError::new(
                ErrorCode::TypeMismatch,
                "type mismatch",
                condition.span.clone(),
            ))
        }
    }

    /// Check a return statement against the declared return type.
    ///
    /// The returned value must be a literal node of the declared type.
    /// Computed values, variables, and parenthesized literals are all
    /// rejected; there is no expression type inference.
    fn analyze_return(
        &mut self,
        stmt: &Statement,
        value: Option<&Expr>,
    ) -> Result<(), CompileError> {
        let expected = self
            .context
            .return_type
            .expect("return statement outside of function");

        match (expected, value) {
            (Type::Void, None) => Ok(()),
            (Type::Void, Some(v)) => Err(CompileError::new(
                ErrorCode::TypeMismatch,
                "type mismatch",
                v.span.clone(),
            )),
            (_, None) => Err(CompileError::new(
                ErrorCode::TypeMismatch,
                "type mismatch",
                stmt.span.clone(),
            )),
            (_, Some(v)) => {
                if v.literal_type() == Some(expected) {
                    Ok(())
                } else {
                    Err(CompileError::new(
                        ErrorCode::TypeMismatch,
                        "type mismatch",
                        v.span.clone(),
                    ))
                }
            }
        }
    }

    /// Walk an expression tree and validate every call node in it.
    ///
    /// A callee must name a registered function. A visible variable used
    /// as a callee is a kind mismatch; anything else is undefined.
    /// Identifiers outside call position are not resolved here.
    fn check_calls(&self, expr: &Expr) -> Result<(), CompileError> {
        match &expr.kind {
            ExprKind::FunctionCall { name, args } => {
                if !self.is_function(name) {
                    if self.symbols.lookup(name).is_some() {
                        return Err(CompileError::new(
                            ErrorCode::IdentifierKindMismatch,
                            format!("symbol {} is a variable", name),
                            expr.span.clone(),
                        ));
                    }
                    return Err(CompileError::new(
                        ErrorCode::UndefinedFunction,
                        format!("function {} is not defined", name),
                        expr.span.clone(),
                    ));
                }
                args.iter().try_for_each(|a| self.check_calls(a))
            }
            ExprKind::BinaryOp { left, right, .. } => {
                self.check_calls(left)?;
                self.check_calls(right)
            }
            ExprKind::UnaryOp { operand, .. } => self.check_calls(operand),
            ExprKind::Cast { expr, .. } => self.check_calls(expr),
            ExprKind::Grouped(inner) => self.check_calls(inner),
            _ => Ok(()),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a program AST and return the symbol table trace.
pub fn analyze(program: &Program) -> Result<ScopePrinter, CompileError> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(program)?;
    Ok(analyzer.into_trace())
}
