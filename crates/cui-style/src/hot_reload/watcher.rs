//! File watching for stylesheet hot-reload.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::parser::StylesheetLoader;
use crate::rules::RuleStore;
use crate::{Error, Result};

/// Event indicating a stylesheet file changed.
#[derive(Debug, Clone)]
pub struct StylesheetChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was modified.
    Modified,
    /// File was created.
    Created,
    /// File was removed.
    Removed,
}

/// Watches stylesheet files for changes.
///
/// # Example
///
/// ```no_run
/// use cui_style::hot_reload::StylesheetWatcher;
/// use cui_style::prelude::*;
/// use parking_lot::RwLock;
///
/// # fn main() -> cui_style::Result<()> {
/// let loader = StylesheetLoader::new(DrawableAtlas::new());
/// let store = RwLock::new(loader.load_file("ui/skin.json")?);
///
/// let mut watcher = StylesheetWatcher::new()?;
/// watcher.watch("ui/skin.json")?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// if !changes.is_empty() {
///     watcher.apply_changes(&loader, &store, &changes)?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct StylesheetWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched_paths: HashSet<PathBuf>,
}

impl StylesheetWatcher {
    /// Create a new stylesheet watcher.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched_paths: HashSet::new(),
        })
    }

    /// Start watching a stylesheet file.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(path.as_ref(), e))?;

        if !self.watched_paths.contains(&path) {
            self.debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            self.watched_paths.insert(path.clone());
            tracing::info!("Watching stylesheet: {}", path.display());
        }

        Ok(())
    }

    /// Poll for stylesheet changes.
    ///
    /// Returns one event per changed file. Call this in your event loop.
    pub fn poll(&mut self) -> Vec<StylesheetChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind == DebouncedEventKind::Any {
                            let kind = if event.path.exists() {
                                ChangeKind::Modified
                            } else {
                                ChangeKind::Removed
                            };

                            // Only report changes for files we're watching
                            if self.watched_paths.contains(&event.path) {
                                changes.push(StylesheetChangeEvent {
                                    path: event.path,
                                    kind,
                                });
                            }
                        }
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("File watcher error: {}", e);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("File watcher disconnected");
                    break;
                }
            }
        }

        // Same file may have multiple events
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Reload the stylesheet behind `store` if it changed.
    ///
    /// A modified file is parsed into a complete new store, which replaces
    /// the old one under the write lock. If parsing fails, or the file was
    /// removed, the previous store stays installed. Changes to files other
    /// than the store's source are skipped.
    ///
    /// Returns the number of stores installed.
    pub fn apply_changes(
        &self,
        loader: &StylesheetLoader,
        store: &RwLock<RuleStore>,
        changes: &[StylesheetChangeEvent],
    ) -> Result<usize> {
        let mut installed = 0;

        for change in changes {
            if !is_source_of(&store.read(), &change.path) {
                tracing::debug!("Ignoring change to {}", change.path.display());
                continue;
            }

            match change.kind {
                ChangeKind::Modified | ChangeKind::Created => {
                    tracing::info!("Reloading stylesheet: {}", change.path.display());

                    match loader.load_file(&change.path) {
                        Ok(reloaded) => {
                            let rules = reloaded.len();
                            *store.write() = reloaded;
                            installed += 1;
                            tracing::info!(
                                "Reloaded stylesheet: {} ({} rules)",
                                change.path.display(),
                                rules
                            );
                        }
                        Err(e) => {
                            tracing::error!(
                                "Failed to reload stylesheet {}, keeping previous rules: {}",
                                change.path.display(),
                                e
                            );
                        }
                    }
                }
                ChangeKind::Removed => {
                    tracing::warn!(
                        "Stylesheet removed, keeping previous rules: {}",
                        change.path.display()
                    );
                }
            }
        }

        Ok(installed)
    }

    /// Get the number of watched files.
    pub fn watched_count(&self) -> usize {
        self.watched_paths.len()
    }
}

/// A store without a source path accepts any file.
fn is_source_of(store: &RuleStore, path: &Path) -> bool {
    match store.source_path() {
        Some(source) => source == path || source.canonicalize().is_ok_and(|s| s == path),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AtlasRegion, DrawableAtlas};
    use std::fs;

    use tempfile::tempdir;

    fn loader() -> StylesheetLoader {
        StylesheetLoader::new(DrawableAtlas::from_regions([AtlasRegion::new("button-up")]))
    }

    fn modified(path: &Path) -> Vec<StylesheetChangeEvent> {
        vec![StylesheetChangeEvent {
            path: path.to_path_buf(),
            kind: ChangeKind::Modified,
        }]
    }

    #[test]
    fn watcher_creation() {
        let watcher = StylesheetWatcher::new();
        assert!(watcher.is_ok());
    }

    #[test]
    fn watch_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("skin.json");

        fs::write(&file_path, r#"{ "button": { "pad": 4 } }"#).unwrap();

        let mut watcher = StylesheetWatcher::new().unwrap();
        let result = watcher.watch(&file_path);
        assert!(result.is_ok());
        assert_eq!(watcher.watched_count(), 1);
    }

    #[test]
    fn watch_missing_file_fails() {
        let dir = tempdir().unwrap();
        let mut watcher = StylesheetWatcher::new().unwrap();

        let err = watcher.watch(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn modified_file_swaps_store() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("skin.json");
        fs::write(&file_path, r#"{ "button": { "pad": 4 } }"#).unwrap();

        let loader = loader();
        let store = RwLock::new(loader.load_file(&file_path).unwrap());
        let old_generation = store.read().generation();

        fs::write(
            &file_path,
            r#"{ "button": { "pad": 6 }, "button;over": { "background": "button-up" } }"#,
        )
        .unwrap();

        let watcher = StylesheetWatcher::new().unwrap();
        let installed = watcher
            .apply_changes(&loader, &store, &modified(&file_path))
            .unwrap();

        assert_eq!(installed, 1);
        let store = store.read();
        assert_eq!(store.len(), 2);
        assert_ne!(store.generation(), old_generation);
        assert_eq!(store.source_path(), Some(file_path.as_path()));
    }

    #[test]
    fn broken_file_keeps_previous_store() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("skin.json");
        fs::write(&file_path, r#"{ "button": { "pad": 4 } }"#).unwrap();

        let loader = loader();
        let store = RwLock::new(loader.load_file(&file_path).unwrap());
        let old_generation = store.read().generation();

        fs::write(&file_path, r#"{ "button": { "background": "button-down" } }"#).unwrap();

        let watcher = StylesheetWatcher::new().unwrap();
        let installed = watcher
            .apply_changes(&loader, &store, &modified(&file_path))
            .unwrap();

        assert_eq!(installed, 0);
        assert_eq!(store.read().generation(), old_generation);
        assert_eq!(store.read().len(), 1);
    }

    #[test]
    fn removed_and_unrelated_files_are_ignored() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("skin.json");
        let other_path = dir.path().join("other.json");
        fs::write(&file_path, r#"{ "button": { "pad": 4 } }"#).unwrap();
        fs::write(&other_path, r#"{ "label": {} }"#).unwrap();

        let loader = loader();
        let store = RwLock::new(loader.load_file(&file_path).unwrap());
        let old_generation = store.read().generation();
        let watcher = StylesheetWatcher::new().unwrap();

        assert_eq!(
            watcher
                .apply_changes(&loader, &store, &modified(&other_path))
                .unwrap(),
            0
        );

        fs::remove_file(&file_path).unwrap();
        let removed = vec![StylesheetChangeEvent {
            path: file_path.clone(),
            kind: ChangeKind::Removed,
        }];
        assert_eq!(watcher.apply_changes(&loader, &store, &removed).unwrap(), 0);
        assert_eq!(store.read().generation(), old_generation);
    }
}
