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

//! File watching for watch mode.
//!
//! Editors save files in different ways: some truncate and rewrite in
//! place, most modern ones write a temp file and rename it over the
//! original, and a few rename the original to a backup first. Watching
//! the file itself misses the rename-based variants, so the watcher
//! registers the parent directories instead and filters events down to
//! the files it actually cares about.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::RunnerError;

/// How long the event channel must stay quiet before a change is reported.
const DEBOUNCE_DURATION: Duration = Duration::from_millis(100);

/// Watches source files for changes.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use flint::runner::SourceWatcher;
///
/// let paths = vec![PathBuf::from("main.fl"), PathBuf::from("utils.fl")];
/// let watcher = SourceWatcher::new(&paths).expect("Failed to create watcher");
///
/// println!("Watching for changes...");
/// watcher.wait_for_change().expect("Watch error");
/// println!("File changed!");
/// ```
pub struct SourceWatcher {
    /// Kept alive for the lifetime of the watcher; dropping it stops events.
    _watcher: RecommendedWatcher,
    /// Receiver for file system events.
    events: Receiver<Result<Event, notify::Error>>,
    /// Canonicalized paths being watched.
    paths: Vec<PathBuf>,
}

impl SourceWatcher {
    /// Create a new SourceWatcher for the given paths.
    ///
    /// Each path is canonicalized up front and its parent directory is
    /// registered with the file system watcher. Directories shared by
    /// several source files are registered once.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WatchError` if the watcher cannot be created
    /// or a path cannot be resolved.
    pub fn new(paths: &[PathBuf]) -> Result<Self, RunnerError> {
        let (tx, events) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(tx)
            .map_err(|e| RunnerError::WatchError(format!("Failed to create watcher: {}", e)))?;

        let canonical_paths = paths
            .iter()
            .map(|path| {
                path.canonicalize().map_err(|e| {
                    RunnerError::WatchError(format!(
                        "Cannot resolve path {}: {}",
                        path.display(),
                        e
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut registered = HashSet::new();
        for dir in canonical_paths.iter().filter_map(|p| p.parent()) {
            if registered.insert(dir.to_path_buf()) {
                watcher
                    .watch(dir, RecursiveMode::NonRecursive)
                    .map_err(|e| {
                        RunnerError::WatchError(format!(
                            "Failed to watch {}: {}",
                            dir.display(),
                            e
                        ))
                    })?;
            }
        }

        Ok(Self {
            _watcher: watcher,
            events,
            paths: canonical_paths,
        })
    }

    /// Get the watched paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Block until a watched file changes.
    ///
    /// Rapid bursts of events, as produced by editors that save in several
    /// steps, are collapsed: once a relevant event arrives, further events
    /// are consumed until the channel stays quiet for the debounce window.
    pub fn wait_for_change(&self) -> Result<(), RunnerError> {
        loop {
            let event = self
                .events
                .recv()
                .map_err(|e| RunnerError::WatchError(format!("Watch channel closed: {}", e)))?
                .map_err(|e| RunnerError::WatchError(format!("Watch error: {}", e)))?;

            if self.is_relevant(&event) {
                self.settle();
                return Ok(());
            }
        }
    }

    /// Whether an event touches one of the watched files.
    ///
    /// Creates count as well as modifications, since an atomic save shows
    /// up as a rename onto the watched path.
    fn is_relevant(&self, event: &Event) -> bool {
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return false;
        }

        event.paths.iter().any(|p| self.matches_watched(p))
    }

    /// Compare an event path against the watched set.
    fn matches_watched(&self, event_path: &Path) -> bool {
        let canonical = event_path
            .canonicalize()
            .unwrap_or_else(|_| event_path.to_path_buf());

        self.paths.iter().any(|watched| {
            if canonical == *watched {
                return true;
            }
            // During an atomic save the canonical path can briefly point at
            // the temp file, so a name match inside the same directory is
            // accepted too.
            canonical.file_name() == watched.file_name()
                && canonical.file_name().is_some()
                && canonical.parent() == watched.parent()
        })
    }

    /// Consume events until the channel has been quiet for the debounce window.
    fn settle(&self) {
        while self.events.recv_timeout(DEBOUNCE_DURATION).is_ok() {}
    }
}
