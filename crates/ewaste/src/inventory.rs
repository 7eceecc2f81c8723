//! Inventory manager for ewaste.
//!
//! This module owns the ordered list of tracked items and persists it to a
//! pretty-printed JSON file. Every operation is a synchronous transformation of
//! the in-memory list; nothing is written until [`Inventory::save_data`] is called.

use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::item::{self, Item, ItemRecord};

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "ewaste_data.json";

/// Default indentation width for saved files.
pub const DEFAULT_INDENT: usize = 4;

/// Result of [`Inventory::load_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and this many items replaced the current list.
    Loaded(usize),
    /// The file does not exist; the current list was left untouched.
    NotFound,
}

/// Fields consumed when rebuilding an item from disk.
///
/// Derived fields in the stored record are ignored and recomputed.
#[derive(Debug, Deserialize)]
struct StoredItem {
    name: String,
    purchase_date: String,
    expected_lifetime: i64,
}

/// Ordered collection of tracked items.
///
/// Insertion order is preserved and names are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Construct an item and append it.
    ///
    /// # Errors
    ///
    /// Returns an error if the purchase date is malformed or the lifetime is
    /// out of range. The inventory is unchanged on error.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        purchase_date: &str,
        expected_lifetime: i64,
    ) -> Result<&Item> {
        let item = Item::new(name, purchase_date, expected_lifetime)?;
        info!("Item '{}' added successfully", item.name());
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Items currently due for replacement, in insertion order.
    #[must_use]
    pub fn monitor_items(&self) -> Vec<&Item> {
        self.monitor_items_at(item::now())
    }

    /// Items due at the given local time, in insertion order.
    #[must_use]
    pub fn monitor_items_at(&self, now: NaiveDateTime) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_due_at(now)).collect()
    }

    /// Items not yet due whose replacement falls within `within_days` of `now`.
    #[must_use]
    pub fn upcoming(&self, within_days: u32, now: NaiveDateTime) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| !item.is_due_at(now) && item.days_until_at(now) <= i64::from(within_days))
            .collect()
    }

    /// Remove every item whose name matches exactly.
    ///
    /// Returns the number of items removed. Remaining items keep their order.
    pub fn recycle_item(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name() != name);
        let removed = before - self.items.len();
        debug!("Removed {} item(s) named '{}'", removed, name);
        info!("Item '{}' recycled successfully", name);
        removed
    }

    /// Flatten every item, evaluating due flags at the given local time.
    #[must_use]
    pub fn to_records(&self, now: NaiveDateTime) -> Vec<ItemRecord> {
        self.items.iter().map(|item| item.to_record_at(now)).collect()
    }

    /// Write all items to `path` with the default indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save_data(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_data_with_indent(path, DEFAULT_INDENT)
    }

    /// Write all items to `path` as a JSON array, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save_data_with_indent(&self, path: impl AsRef<Path>, indent: usize) -> Result<()> {
        let path = path.as_ref();
        let records = self.to_records(item::now());
        let bytes = to_pretty_json(&records, indent)?;

        debug!("Writing {} item(s) to {}", records.len(), path.display());
        std::fs::write(path, bytes).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Data saved to {}", path.display());
        Ok(())
    }

    /// Replace the current items with those stored at `path`.
    ///
    /// A missing file is not an error: the current items are kept and
    /// [`LoadOutcome::NotFound`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array, or
    /// holds a record that cannot be rebuilt into an item.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("File {} not found, starting with an empty system", path.display());
                return Ok(LoadOutcome::NotFound);
            }
            Err(source) => {
                return Err(Error::FileRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        self.items = decode_items(&text)?;
        info!("Data loaded from {}", path.display());
        debug!("Loaded {} item(s)", self.items.len());
        Ok(LoadOutcome::Loaded(self.items.len()))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Decode a stored JSON array into items, record by record.
fn decode_items(text: &str) -> Result<Vec<Item>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let stored = StoredItem::deserialize(value)
                .map_err(|source| Error::MalformedRecord { index, source })?;
            Item::new(stored.name, &stored.purchase_date, stored.expected_lifetime)
        })
        .collect()
}

/// Serialize `value` as pretty JSON indented by `indent` spaces.
fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
