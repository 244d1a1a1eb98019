use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered mapping from crate name to the pre-rendered HTML descriptor
/// fragments for that crate's implementors.
///
/// Keys are unique; entry order is the order the generator emitted and is
/// preserved through (de)serialization, which is why this is not a plain
/// `HashMap`. Descriptor strings are opaque and passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplementorMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ImplementorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a crate entry. A duplicate key replaces the existing entry
    /// in place, keeping its original position.
    pub fn insert(&mut self, crate_name: impl Into<String>, descriptors: Vec<String>) {
        let crate_name = crate_name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == crate_name) {
            slot.1 = descriptors;
        } else {
            self.entries.push((crate_name, descriptors));
        }
    }

    pub fn get(&self, crate_name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == crate_name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains(&self, crate_name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == crate_name)
    }

    /// Number of crate entries (including ones with no implementors).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total descriptor strings across all entries.
    pub fn implementor_count(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn crate_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for ImplementorMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for ImplementorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct ImplementorMapVisitor;

impl<'de> Visitor<'de> for ImplementorMapVisitor {
    type Value = ImplementorMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of crate names to arrays of descriptor strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ImplementorMap::new();
        // Duplicate keys take the last occurrence, like a JS object literal.
        while let Some((key, value)) = access.next_entry::<String, Vec<String>>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ImplementorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ImplementorMapVisitor)
    }
}

/// One implementors file as read from the store, before parsing.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub contents: String,
}

/// One implementors file after the mapping has been extracted.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: String,
    pub map: ImplementorMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub file: String,
    pub crate_name: String,
    pub implementor_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub generated_at: DateTime<Utc>,
    pub files: usize,
    pub crates: usize,
    pub implementors: usize,
    pub rows: Vec<SummaryRow>,
}
