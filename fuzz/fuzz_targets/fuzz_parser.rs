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

//! Fuzz target for the Flint parser.
//!
//! This fuzzer runs lexing and parsing over random input to find
//! crashes or panics in the syntax layer.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_parser

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(tokens) = flint::lexer::tokenize(source) {
            // The parser should never panic, only return Ok or Err
            let _ = flint::parser::parse(&tokens);
        }
    }
});
