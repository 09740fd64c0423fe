// Flint - A concept for a statically checked C-style mini language
//
// Copyright (C) 2026 Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Runner module for watch mode.
//!
//! Watches source files for changes so the CLI can re-check them
//! automatically while you edit.

mod watcher;

pub use watcher::SourceWatcher;

use thiserror::Error;

/// Errors that can occur during runner operations.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Error watching files.
    #[error("File watch error: {0}")]
    WatchError(String),
}
