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

//! Flint CLI
//!
//! Checks Flint source files and prints their symbol table trace.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use flint::error::{format_error, format_error_context};
use flint::runner::SourceWatcher;

/// Flint - a statically checked C-style mini language
#[derive(Parser, Debug)]
#[command(name = "flint")]
#[command(author = "Flint Team")]
#[command(version)]
#[command(about = "Checks Flint source files and prints their symbol table trace")]
#[command(long_about = r#"
Flint checks source files written in a small C-style language: it
tokenizes, parses and analyzes them, and prints the resulting symbol
table trace. There is no code generation; the trace is the output.

Diagnostics go to stderr as 'line N: message'; the trace goes to
stdout, or to a file with -o.

Example usage:
  flint hello.fl
  flint hello.fl -o hello.trace
  flint game.fl utils.fl

Watch mode:
  flint game.fl --watch
  flint game.fl -w
"#)]
struct Cli {
    /// Source files to check (.fl)
    #[arg(required = true)]
    source_files: Vec<PathBuf>,

    /// Write the trace to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Watch source files and re-check on changes
    #[arg(short, long)]
    watch: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("{} v{}", flint::NAME, flint::VERSION);
        eprintln!("Source files:");
        for file in &cli.source_files {
            eprintln!("  - {}", file.display());
        }
        eprintln!();
    }

    if cli.watch {
        return run_watch_loop(&cli);
    }

    let trace = match check_files(&cli) {
        Ok(trace) => trace,
        Err(code) => return code,
    };

    write_trace(&cli, &trace)
}

/// Check all source files and collect their traces.
///
/// Files are checked in order; the first failure aborts the run with the
/// matching exit code (1 for read errors, 2 for compile errors).
fn check_files(cli: &Cli) -> Result<String, ExitCode> {
    let mut trace = String::new();

    for path in &cli.source_files {
        let source = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read {}: {}", path.display(), e);
                return Err(ExitCode::from(1));
            }
        };

        if cli.verbose {
            eprintln!("Checking {}...", path.display());
        }

        match flint::check(&source) {
            Ok(file_trace) => trace.push_str(&file_trace),
            Err(e) => {
                eprintln!("{}", format_error(&e, &source));
                if cli.verbose {
                    eprint!("{}", format_error_context(&e, &source, filename_of(path)));
                }
                return Err(ExitCode::from(2));
            }
        }
    }

    Ok(trace)
}

/// Write the collected trace to stdout or to the requested output file.
fn write_trace(cli: &Cli, trace: &str) -> ExitCode {
    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, trace) {
                eprintln!("Error: Cannot write {}: {}", path.display(), e);
                return ExitCode::from(3);
            }
            if cli.verbose {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => print!("{}", trace),
    }

    ExitCode::SUCCESS
}

/// The bare filename of a path, for error headers.
fn filename_of(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

/// Run the watch loop: re-check the files on every change.
///
/// Failed checks report their diagnostic and keep the loop alive; only
/// watcher failures end the process.
fn run_watch_loop(cli: &Cli) -> ExitCode {
    let watcher = match SourceWatcher::new(&cli.source_files) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: Failed to create file watcher: {}", e);
            return ExitCode::from(4);
        }
    };

    check_and_report(cli);
    eprintln!("Watching for changes... (Press Ctrl+C to stop)");

    loop {
        if let Err(e) = watcher.wait_for_change() {
            eprintln!("Watch error: {}", e);
            return ExitCode::from(4);
        }

        eprintln!();
        if cli.verbose {
            eprintln!("Change detected, re-checking...");
        }

        check_and_report(cli);
    }
}

/// One watch mode iteration: check the files and report the outcome.
fn check_and_report(cli: &Cli) {
    match check_files(cli) {
        Ok(trace) => {
            let _ = write_trace(cli, &trace);
        }
        Err(_) => {
            eprintln!("Fix errors and save to retry.");
        }
    }
}
