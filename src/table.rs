//! Resolution entry table
//!
//! Owned, growable sequence of resolution records, built once during load
//! and immutable afterward. The growth policy is part of the contract, not
//! an implementation detail: the table starts at a fixed initial capacity,
//! appends with amortized doubling, and is shrunk to its exact size once
//! loading finishes, keeping load time linear in the number of descriptor
//! lines.

use crate::domain::ImageOffset;

/// Initial slot count for a freshly created table.
const INITIAL_TABLE_CAPACITY: usize = 100;

/// One name-resolution record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEntry {
    /// Well-known name callers query with; always non-empty and trimmed.
    pub original_name: String,
    /// Image offset the mapped name was read from.
    pub read_offset: ImageOffset,
    /// Obfuscated name read from the image. `None` when the string at the
    /// offset could not be read; `Some("")` is an empty-but-present string.
    pub mapped_name: Option<String>,
}

/// Append-only table of resolution entries in descriptor file order.
///
/// File order is the only precedence between duplicate names: the first
/// occurrence wins on lookup.
#[derive(Debug, Default)]
pub struct EntryTable {
    entries: Vec<ResolutionEntry>,
}

impl EntryTable {
    /// Create an empty table with the standard initial capacity.
    #[must_use]
    pub fn with_initial_capacity() -> Self {
        Self { entries: Vec::with_capacity(INITIAL_TABLE_CAPACITY) }
    }

    /// Append an entry, doubling the backing storage when full.
    pub fn append(&mut self, entry: ResolutionEntry) {
        self.entries.push(entry);
    }

    /// Trim the backing storage to exactly the populated size.
    ///
    /// Called once after the last descriptor line is consumed; the table is
    /// immutable from then on.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Find the first entry whose name matches `query`, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&ResolutionEntry> {
        self.entries.iter().find(|entry| entry.original_name.eq_ignore_ascii_case(query))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Allocated slots; at least [`len`](Self::len) at all times.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolutionEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, offset: u64, mapped: Option<&str>) -> ResolutionEntry {
        ResolutionEntry {
            original_name: name.to_string(),
            read_offset: ImageOffset(offset),
            mapped_name: mapped.map(str::to_string),
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut table = EntryTable::with_initial_capacity();
        table.append(entry("il2cpp_init", 0x1000, Some("_RQluJpGVqK")));

        let found = table.find("IL2CPP_INIT").unwrap();
        assert_eq!(found.mapped_name.as_deref(), Some("_RQluJpGVqK"));
        assert!(table.find("il2cpp_shutdown").is_none());
    }

    #[test]
    fn test_first_occurrence_wins_for_duplicates() {
        let mut table = EntryTable::with_initial_capacity();
        table.append(entry("il2cpp_init", 0x1000, Some("first")));
        table.append(entry("il2cpp_init", 0x2000, Some("second")));

        assert_eq!(table.find("il2cpp_init").unwrap().mapped_name.as_deref(), Some("first"));
    }

    #[test]
    fn test_growth_past_initial_capacity() {
        let mut table = EntryTable::with_initial_capacity();
        assert_eq!(table.capacity(), 100);

        for i in 0..300 {
            table.append(entry(&format!("name_{i}"), i, Some("m")));
        }
        assert_eq!(table.len(), 300);
        assert!(table.capacity() >= 300);
        assert!(table.find("name_299").is_some());
    }

    #[test]
    fn test_shrink_to_fit_trims_capacity() {
        let mut table = EntryTable::with_initial_capacity();
        for i in 0..3 {
            table.append(entry(&format!("name_{i}"), i, None));
        }
        table.shrink_to_fit();
        assert_eq!(table.capacity(), table.len());
    }

    #[test]
    fn test_empty_table() {
        let table = EntryTable::default();
        assert!(table.is_empty());
        assert!(table.find("anything").is_none());
    }
}
