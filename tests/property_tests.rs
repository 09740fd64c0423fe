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

//! Property-based tests for the Flint front end.

use proptest::prelude::*;

proptest! {
    /// The lexer must never panic, whatever the input.
    #[test]
    fn test_lexer_never_panics(source in "[ -~\\n\\t]{0,200}") {
        let _ = flint::lexer::tokenize(&source);
    }

    /// Successful token streams carry sane, ordered spans.
    #[test]
    fn test_lexer_spans_are_sane(source in "[a-zA-Z0-9_ +\\-*/%=:;(){}<>!,\\n]{0,200}") {
        if let Ok(tokens) = flint::lexer::tokenize(&source) {
            let mut previous_end = 0;
            for (_, span) in &tokens {
                prop_assert!(span.start < span.end, "empty span {}..{}", span.start, span.end);
                prop_assert!(span.end <= source.len());
                prop_assert!(span.start >= previous_end, "overlapping spans");
                previous_end = span.end;
            }
        }
    }

    /// The whole pipeline must never panic, whatever the input.
    #[test]
    fn test_check_never_panics(source in "[ -~\\n\\t]{0,200}") {
        let _ = flint::check(&source);
    }

    /// Checking the same source twice yields the same result.
    #[test]
    fn test_check_is_deterministic(source in "[a-z0-9_ +\\-*/%=:;(){}\\n]{0,120}") {
        let first = flint::check(&source);
        let second = flint::check(&source);
        prop_assert_eq!(first, second);
    }

    /// Integer literals in range survive the lexer unchanged.
    #[test]
    fn test_integer_literal_roundtrip(value in 0i64..=i64::MAX) {
        let source = format!("{}", value);
        let tokens = flint::lexer::tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].0, &flint::Token::Integer(value));
    }

    /// Byte literals up to 255 are accepted, everything above is rejected.
    #[test]
    fn test_byte_literal_bounds(value in 0u32..=4095) {
        let source = format!("{}b", value);
        let result = flint::lexer::tokenize(&source);
        if value <= 255 {
            let tokens = result.unwrap();
            prop_assert_eq!(&tokens[0].0, &flint::Token::ByteLit(value as u8));
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.code, flint::ErrorCode::ByteOutOfRange);
        }
    }

    /// Parameters are assigned offsets -1, -2, ... in declaration order.
    #[test]
    fn test_parameter_offsets(count in 1usize..=8) {
        let params: Vec<String> = (0..count).map(|i| format!("p{}: int", i)).collect();
        let source = format!(
            "func f({}): void {{}}\nfunc main(): void {{}}",
            params.join(", ")
        );
        let trace = flint::check(&source).unwrap();
        for i in 0..count {
            let line = format!("  p{} int -{}\n", i, i + 1);
            prop_assert!(trace.contains(&line), "missing {:?} in {}", line, trace);
        }
    }

    /// Every successful trace has balanced scope markers.
    #[test]
    fn test_trace_scope_markers_balanced(count in 0usize..=6) {
        let mut body = String::new();
        for i in 0..count {
            body.push_str(&format!("{{ var v{}: int; }}\n", i));
        }
        let source = format!("func main(): void {{\n{}}}", body);
        let trace = flint::check(&source).unwrap();
        let begins = trace.matches("---begin scope---").count();
        let ends = trace.matches("---end scope---").count();
        prop_assert_eq!(begins, ends);
        prop_assert_eq!(begins, count + 1);
    }
}
