//! Mapping store lifecycle
//!
//! Owns the entry table and walks it through `Unloaded -> Loaded -> Freed`.
//! Nothing here raises a hard failure to a resolving caller: every failure
//! mode degrades to fewer entries or to identity fallback and is reported
//! through the log only, so hosts always get a usable name back.

use crate::descriptor;
use crate::domain::MapError;
use crate::image::ImageReader;
use crate::table::{EntryTable, ResolutionEntry};
use log::{debug, error, info, warn};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default descriptor file name, looked up next to the executable.
pub const DESCRIPTOR_FILE_NAME: &str = "mapper.txt";

/// Default binary image name, looked up next to the executable.
pub const IMAGE_FILE_NAME: &str = "UnityPlayer.dll";

/// Lifecycle state of a [`MapperStore`].
///
/// `Unloaded` and `Freed` are behaviorally identical to resolving callers
/// (identity fallback); only `Loaded` has live data. `Freed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreState {
    /// No load has succeeded yet.
    #[default]
    Unloaded,
    /// Table populated (possibly empty); lookups consult it.
    Loaded,
    /// Torn down; terminal.
    Freed,
}

/// Process-lifetime store of name resolutions.
///
/// Constructed by the host and passed wherever resolution is needed; there
/// is no process-wide instance. `load` and `cleanup` are intended to run
/// once each around the host's lifetime, `resolve` any number of times in
/// between, all on one thread. The lifecycle methods take `&mut self` and
/// `resolve` takes `&self`, so a lookup racing a teardown is unrepresentable
/// in safe same-thread code; cross-thread sharing discipline remains the
/// host's responsibility.
#[derive(Debug, Default)]
pub struct MapperStore {
    state: StoreState,
    table: Option<EntryTable>,
}

impl MapperStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Entries in descriptor file order; empty when not loaded.
    pub fn entries(&self) -> impl Iterator<Item = &ResolutionEntry> {
        self.table.iter().flat_map(EntryTable::iter)
    }

    /// Load the descriptor/image pair into the table.
    ///
    /// Outcome is observable only through the logs and through subsequent
    /// [`resolve`](Self::resolve) behavior. Calling this on a store that is
    /// already loaded, or already torn down, warns and changes nothing. A
    /// failed load leaves the store `Unloaded`; a load that accepted zero
    /// lines still transitions to `Loaded` with an empty table.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, descriptor_path: P, image_path: Q) {
        match self.state {
            StoreState::Loaded => {
                warn!("Mappings already loaded, skipping re-initialization");
                return;
            }
            StoreState::Freed => {
                warn!("Store already torn down, skipping load");
                return;
            }
            StoreState::Unloaded => {}
        }

        match load_table(descriptor_path.as_ref(), image_path.as_ref()) {
            Ok(table) => {
                if table.is_empty() {
                    warn!(
                        "Mapping load finished with no entries; \
                         every lookup will fall back to identity"
                    );
                } else {
                    info!("Loaded {} mapping entries", table.len());
                }
                for entry in table.iter() {
                    debug!(
                        "{} @ {} -> {}",
                        entry.original_name,
                        entry.read_offset,
                        entry.mapped_name.as_deref().unwrap_or("<unresolved>")
                    );
                }
                self.table = Some(table);
                self.state = StoreState::Loaded;
            }
            Err(e) => {
                error!("Mapping load failed: {e}");
            }
        }
    }

    /// Load from the default artifact names next to the executable.
    pub fn load_default(&mut self) {
        match default_paths() {
            Ok((descriptor, image)) => self.load(descriptor, image),
            Err(e) => error!("Cannot resolve default mapping paths: {e}"),
        }
    }

    /// Resolve a well-known name to its mapped counterpart.
    ///
    /// Scans entries in file order with an ASCII-case-insensitive exact
    /// match; the first match wins. Falls back to returning `query`
    /// unchanged when the store is not loaded, when no entry matches, or
    /// when the matching entry has no mapped name. Never fails; the
    /// returned view borrows from the store (or from `query`) and stays
    /// valid while the store remains loaded.
    #[must_use]
    pub fn resolve<'a>(&'a self, query: &'a str) -> &'a str {
        if self.state != StoreState::Loaded {
            warn!("No mappings loaded, returning \"{query}\" unchanged");
            return query;
        }
        let Some(table) = self.table.as_ref() else {
            return query;
        };

        match table.find(query) {
            Some(entry) => entry.mapped_name.as_deref().unwrap_or_else(|| {
                debug!("\"{query}\" matched an entry with no mapped name");
                query
            }),
            None => query,
        }
    }

    /// Release the table and every string it owns.
    ///
    /// A no-op (with a warning) unless the store is loaded; safe to call
    /// any number of times. After cleanup the store behaves like an
    /// unloaded one and cannot be reloaded.
    pub fn cleanup(&mut self) {
        if self.state != StoreState::Loaded {
            warn!("No mappings to release");
            return;
        }
        // Dropping the table frees every entry and the backing storage.
        self.table = None;
        self.state = StoreState::Freed;
        info!("Mappings released");
    }
}

/// Default descriptor/image paths, resolved relative to the executable's
/// directory.
///
/// # Errors
/// Returns an error when the executable path cannot be determined.
pub fn default_paths() -> Result<(PathBuf, PathBuf), MapError> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| MapError::ExeDirUnavailable(exe.display().to_string()))?;
    Ok((dir.join(DESCRIPTOR_FILE_NAME), dir.join(IMAGE_FILE_NAME)))
}

/// Build the table from the two artifacts.
///
/// Hard failures stop before any line is consumed: a missing file, or an
/// artifact that cannot be opened (the descriptor alone is useless without
/// the image). Once line processing starts, failures only shrink the
/// result: malformed lines are skipped silently, unreadable strings leave
/// an absent mapped name, and a mid-file read error keeps whatever loaded
/// so far.
fn load_table(descriptor_path: &Path, image_path: &Path) -> Result<EntryTable, MapError> {
    let descriptor_path = fs::canonicalize(descriptor_path)
        .map_err(|_| MapError::DescriptorMissing(descriptor_path.to_path_buf()))?;
    let image_path = fs::canonicalize(image_path)
        .map_err(|_| MapError::ImageMissing(image_path.to_path_buf()))?;

    let descriptor = File::open(&descriptor_path).map_err(|source| {
        MapError::DescriptorOpenFailed { path: descriptor_path.clone(), source }
    })?;
    let mut image = ImageReader::open(&image_path)?;

    let mut table = EntryTable::with_initial_capacity();
    for line in BufReader::new(descriptor).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Descriptor read error, stopping at {} entries: {e}", table.len());
                break;
            }
        };

        let Some(record) = descriptor::parse_line(&line) else {
            continue;
        };

        let mapped_name = image.read_string_at(record.read_offset);
        table.append(ResolutionEntry {
            original_name: record.original_name,
            read_offset: record.read_offset,
            mapped_name,
        });
    }

    table.shrink_to_fit();
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_before_load_is_identity() {
        let store = MapperStore::new();
        assert_eq!(store.resolve("anything"), "anything");
    }

    #[test]
    fn test_load_with_missing_files_stays_unloaded() {
        let mut store = MapperStore::new();
        store.load("/nonexistent/mapper.txt", "/nonexistent/UnityPlayer.dll");
        assert_eq!(store.state(), StoreState::Unloaded);
        assert_eq!(store.resolve("il2cpp_init"), "il2cpp_init");
    }

    #[test]
    fn test_cleanup_before_load_is_noop() {
        let mut store = MapperStore::new();
        store.cleanup();
        assert_eq!(store.state(), StoreState::Unloaded);
    }

    #[test]
    fn test_default_paths_use_exe_dir() {
        let (descriptor, image) = default_paths().unwrap();
        assert_eq!(descriptor.file_name().unwrap(), DESCRIPTOR_FILE_NAME);
        assert_eq!(image.file_name().unwrap(), IMAGE_FILE_NAME);
        assert_eq!(descriptor.parent(), image.parent());
    }
}
