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

//! Negative/Error tests for the Flint front end.
//!
//! These tests verify that invalid programs are rejected with the right
//! error codes and diagnostic messages.

use flint::{lexer, ErrorCode};
use test_case::test_case;

// ============================================================================
// Lexer Error Tests
// ============================================================================

/// Test that the lexer rejects unexpected characters.
#[test_case("func main(): void { @ }", ErrorCode::UnexpectedCharacter; "at_sign")]
#[test_case("func main(): void { ` }", ErrorCode::UnexpectedCharacter; "backtick")]
#[test_case("func main(): void { a & b; }", ErrorCode::UnexpectedCharacter; "single_ampersand")]
#[test_case("func main(): void { a | b; }", ErrorCode::UnexpectedCharacter; "single_pipe")]
fn test_lexer_unexpected_characters(source: &str, expected_code: ErrorCode) {
    let err = lexer::tokenize(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// Test that the lexer rejects unterminated strings.
#[test_case("func main(): void { print(\"hello\n); }", ErrorCode::UnterminatedString; "newline_in_string")]
#[test_case("func main(): void { print(\"hello", ErrorCode::UnterminatedString; "eof_in_string")]
fn test_lexer_unterminated_strings(source: &str, expected_code: ErrorCode) {
    let err = lexer::tokenize(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// Test that the lexer rejects invalid escape sequences.
#[test_case(r#"func main(): void { print("\x"); }"#, ErrorCode::InvalidEscapeSequence; "invalid_x")]
#[test_case(r#"func main(): void { print("\q"); }"#, ErrorCode::InvalidEscapeSequence; "invalid_q")]
fn test_lexer_invalid_escapes(source: &str, expected_code: ErrorCode) {
    let err = lexer::tokenize(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// Test that the lexer rejects out-of-range number literals.
#[test_case("var x: int = 99999999999999999999;", ErrorCode::NumberTooLarge; "int_overflow")]
#[test_case("var x: byte = 256b;", ErrorCode::ByteOutOfRange; "byte_256")]
#[test_case("var x: byte = 1000b;", ErrorCode::ByteOutOfRange; "byte_1000")]
fn test_lexer_invalid_numbers(source: &str, expected_code: ErrorCode) {
    let err = lexer::tokenize(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// The byte range diagnostic carries the literal's digits.
#[test]
fn test_byte_out_of_range_message() {
    let err = lexer::tokenize("var x: byte = 300b;").unwrap_err();
    assert_eq!(err.message, "byte value 300 out of range");
}

// ============================================================================
// Parser Error Tests
// ============================================================================

/// Test that the parser rejects malformed declarations.
#[test_case("func main(): void { var : int; }", ErrorCode::UnexpectedToken; "missing_var_name")]
#[test_case("func main(): void { var x int; }", ErrorCode::UnexpectedToken; "missing_colon")]
#[test_case("func main(): void { var x: int = 1 }", ErrorCode::UnexpectedToken; "missing_semicolon")]
#[test_case("func main() { }", ErrorCode::UnexpectedToken; "missing_return_type")]
#[test_case("main(): void { }", ErrorCode::UnexpectedToken; "missing_func_keyword")]
fn test_parser_malformed_declarations(source: &str, expected_code: ErrorCode) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// Test that the parser rejects malformed expressions.
#[test_case("func main(): void { x = ; }", ErrorCode::ExpectedExpression; "missing_rhs")]
#[test_case("func main(): void { printi(1 + ); }", ErrorCode::ExpectedExpression; "dangling_operator")]
#[test_case("func main(): void { var x: while = 1; }", ErrorCode::ExpectedType; "keyword_as_type")]
fn test_parser_malformed_expressions(source: &str, expected_code: ErrorCode) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// Test that the parser rejects truncated input.
#[test_case("func main(): void {", ErrorCode::UnexpectedToken; "unclosed_block")]
#[test_case("func main(): void { x = 1 +", ErrorCode::UnexpectedEndOfFile; "expression_cut_off")]
#[test_case("func", ErrorCode::UnexpectedToken; "lone_func")]
fn test_parser_truncated_input(source: &str, expected_code: ErrorCode) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, expected_code);
}

/// Only identifiers may appear in call position.
#[test]
fn test_parser_invalid_call_target() {
    let err = flint::check("func main(): void { (1 + 2)(3); }").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCallTarget);
}

// ============================================================================
// Semantic Error Tests
// ============================================================================

/// Duplicate definitions, in all the places they can happen.
#[test_case("func f(): void {}\nfunc f(): void {}\nfunc main(): void {}"; "duplicate_function")]
#[test_case("func print(x: int): void {}\nfunc main(): void {}"; "redefined_builtin")]
#[test_case("func f(x: int, x: int): void {}\nfunc main(): void {}"; "duplicate_parameter")]
#[test_case("func main(): void { var x: int; var x: int; }"; "duplicate_local")]
#[test_case("func main(): void { var x: int; { var x: bool; } }"; "shadowing_in_block")]
#[test_case("func f(x: int): void { var x: int; }\nfunc main(): void {}"; "local_shadows_param")]
fn test_duplicate_definitions(source: &str) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateDefinition);
}

/// Every program needs a parameterless `func main(): void`.
#[test_case("func helper(): void {}"; "no_main_at_all")]
#[test_case("func main(): int { return 0; }"; "main_returns_int")]
#[test_case("func main(x: int): void {}"; "main_takes_params")]
#[test_case(""; "empty_program")]
fn test_missing_main(source: &str) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingMain);
    assert_eq!(err.message, "Program has no 'func main(): void' function");
}

/// Assignment targets must be visible variables.
#[test_case("func main(): void { x = 1; }", ErrorCode::UndefinedVariable, "variable x is not defined"; "unknown_target")]
#[test_case("func main(): void { { var x: int; } x = 1; }", ErrorCode::UndefinedVariable, "variable x is not defined"; "out_of_scope_target")]
#[test_case("func main(): void { print = 1; }", ErrorCode::IdentifierKindMismatch, "symbol print is a function"; "function_target")]
fn test_invalid_assignment_targets(source: &str, expected_code: ErrorCode, expected_message: &str) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, expected_code);
    assert_eq!(err.message, expected_message);
}

/// Call targets must be registered functions.
#[test_case("func main(): void { missing(); }", ErrorCode::UndefinedFunction, "function missing is not defined"; "unknown_callee")]
#[test_case("func main(): void { var f: int; f(); }", ErrorCode::IdentifierKindMismatch, "symbol f is a variable"; "variable_callee")]
#[test_case("func main(): void { var x: int = 1 + missing(); }", ErrorCode::UndefinedFunction, "function missing is not defined"; "callee_in_subexpression")]
fn test_invalid_call_targets(source: &str, expected_code: ErrorCode, expected_message: &str) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, expected_code);
    assert_eq!(err.message, expected_message);
}

/// A bare function name is not a value.
#[test]
fn test_initializer_naming_function() {
    let err = flint::check("func main(): void { var p: int = printi; }").unwrap_err();
    assert_eq!(err.code, ErrorCode::IdentifierKindMismatch);
    assert_eq!(err.message, "symbol printi is a function");
}

/// Conditions are checked conservatively.
#[test_case("func main(): void { var x: int; if (x) {} }"; "if_int_variable")]
#[test_case("func main(): void { if (nope) {} }"; "if_unknown_identifier")]
#[test_case("func main(): void { if (1 == 1) {} }"; "if_comparison")]
#[test_case("func main(): void { var flag: bool; while (flag) {} }"; "while_variable")]
#[test_case("func main(): void { while (1) {} }"; "while_int_literal")]
fn test_condition_type_mismatch(source: &str) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::TypeMismatch);
    assert_eq!(err.message, "type mismatch");
}

/// A non-void return value must be a literal of the declared type; nothing
/// else passes, not even a variable or computation of the correct type.
#[test_case("func main(): void { return 1; }"; "value_from_void")]
#[test_case("func get(): int { return; }\nfunc main(): void {}"; "missing_value")]
#[test_case("func get(): int { return true; }\nfunc main(): void {}"; "bool_for_int")]
#[test_case("func get(): byte { return 1; }\nfunc main(): void {}"; "int_for_byte")]
#[test_case("func get(): string { return 1; }\nfunc main(): void {}"; "int_for_string")]
#[test_case("func get(): int { var x: int; return x; }\nfunc main(): void {}"; "variable_of_declared_type")]
#[test_case("func get(): int { return 1 + 2; }\nfunc main(): void {}"; "arithmetic_of_declared_type")]
#[test_case("func get(): int { return (1); }\nfunc main(): void {}"; "grouped_literal")]
fn test_return_type_mismatch(source: &str) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::TypeMismatch);
}

/// break and continue are only legal inside loops.
#[test_case("func main(): void { break; }", ErrorCode::UnexpectedBreak, "unexpected break statement"; "bare_break")]
#[test_case("func main(): void { continue; }", ErrorCode::UnexpectedContinue, "unexpected continue statement"; "bare_continue")]
#[test_case("func main(): void { if (true) break; }", ErrorCode::UnexpectedBreak, "unexpected break statement"; "break_in_if_outside_loop")]
#[test_case("func f(): void { break; }\nfunc main(): void { while (true) {} }", ErrorCode::UnexpectedBreak, "unexpected break statement"; "break_in_other_function")]
fn test_break_continue_placement(
    source: &str,
    expected_code: ErrorCode,
    expected_message: &str,
) {
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, expected_code);
    assert_eq!(err.message, expected_message);
}

// ============================================================================
// First Error Wins
// ============================================================================

/// Analysis is fatal on the first error, in program order.
#[test]
fn test_first_error_in_program_order() {
    let source = "func f(): void { var a: int; var a: int; }\nfunc main(): void { b = 1; }";
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateDefinition);
    assert_eq!(err.message, "symbol a is already defined");
}

/// Registration errors beat body errors.
#[test]
fn test_registration_before_bodies() {
    let source = "func main(): void { b = 1; }\nfunc main(): void {}";
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateDefinition);
}

/// The main check runs before any body is analyzed.
#[test]
fn test_main_check_before_bodies() {
    let source = "func f(): void { break; }";
    let err = flint::check(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingMain);
}
