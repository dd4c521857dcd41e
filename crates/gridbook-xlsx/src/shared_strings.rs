//! Shared string table (sharedStrings.xml contents)

use ahash::AHashMap;

/// Workbook-wide table of deduplicated string values
///
/// Indices are assigned in first-seen order and never change once assigned.
#[derive(Debug, Default, Clone)]
pub struct SharedStringTable {
    strings: Vec<String>,
    index_map: AHashMap<String, usize>,
    /// Total number of references handed out, duplicates included
    count: usize,
}

impl SharedStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or add a string, returning its index
    pub fn add_string(&mut self, text: &str) -> usize {
        self.count += 1;
        if let Some(&idx) = self.index_map.get(text) {
            return idx;
        }

        let idx = self.strings.len();
        self.strings.push(text.to_string());
        self.index_map.insert(text.to_string(), idx);
        idx
    }

    /// Get a string by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// Number of unique strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Number of references added, for the `count` attribute of `<sst>`
    pub fn count(&self) -> usize {
        self.count
    }

    /// Unique strings in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }
}
