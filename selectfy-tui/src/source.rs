//! Container entries and the item source built from them.
//!
//! The listing holds every entry shown on screen. Only entries tagged with
//! the configured `selectable` name become items; the rest are displayed
//! but ignore clicks.

use std::fs;
use std::io;
use std::path::Path;

use selectfy::MarkedItems;

/// One row of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub tags: Vec<String>,
}

impl Entry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Ordered entries plus the mapping from entry to item index.
#[derive(Debug, Clone)]
pub struct Listing {
    entries: Vec<Entry>,
    /// Item index for each entry; None for entries that are not selectable.
    slots: Vec<Option<usize>>,
    item_count: usize,
}

impl Listing {
    /// Build a listing, turning entries tagged `selectable` into items.
    pub fn new(entries: Vec<Entry>, selectable: &str) -> Self {
        let mut item_count = 0;
        let slots = entries
            .iter()
            .map(|entry| {
                entry.has_tag(selectable).then(|| {
                    item_count += 1;
                    item_count - 1
                })
            })
            .collect();
        Self {
            entries,
            slots,
            item_count,
        }
    }

    /// Item source for the selectable entries, storing each item's entry index.
    pub fn items(&self) -> MarkedItems<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(entry, slot)| slot.map(|_| entry))
            .collect()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of selectable entries.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Item index of the entry at `entry`, if it is selectable.
    pub fn item_at(&self, entry: usize) -> Option<usize> {
        self.slots.get(entry).copied().flatten()
    }

    /// Label of the entry behind item `item`.
    pub fn label_of(&self, item: usize) -> Option<&str> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(item))
            .map(|entry| self.entries[entry].label.as_str())
    }
}

/// Entries from command line arguments, all selectable.
pub fn from_args<I>(args: I, selectable: &str) -> Vec<Entry>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| Entry::new(arg).tag(selectable))
        .collect()
}

/// Entries for a directory: directories first, then files, by name.
///
/// Hidden dot-files are listed without the selectable tag.
pub fn from_dir(path: &Path, selectable: &str) -> io::Result<Vec<Entry>> {
    let mut rows: Vec<(bool, String)> = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let name = entry.file_name().to_string_lossy().to_string();
        rows.push((is_dir, name));
    }

    rows.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
    });

    Ok(rows
        .into_iter()
        .map(|(is_dir, name)| {
            let hidden = name.starts_with('.');
            let label = if is_dir { format!("{name}/") } else { name };
            let entry = Entry::new(label).tag(if is_dir { "dir" } else { "file" });
            if hidden { entry } else { entry.tag(selectable) }
        })
        .collect())
}
