use indexmap::IndexMap;

use crate::common::types::{CaseMapping, CodePoint, HexField, UnicodeRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    to: CodePoint,
    from_text: String,
    to_text: String,
}

/// Code point to code point map that iterates in insertion order and keeps
/// each side's source spelling for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTable {
    entries: IndexMap<CodePoint, Entry>,
}

impl CaseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts with canonical spelling (uppercase, at least 4 digits).
    /// Returns the previous target if `mapping.from` was already present.
    pub fn insert(&mut self, mapping: CaseMapping) -> Option<CodePoint> {
        self.insert_entry(
            mapping.from,
            Entry {
                to: mapping.to,
                from_text: format!("{:04X}", mapping.from),
                to_text: format!("{:04X}", mapping.to),
            },
        )
    }

    /// Inserts keeping the hex text exactly as the input wrote it.
    pub fn insert_fields(&mut self, from: &HexField, to: &HexField) -> Option<CodePoint> {
        self.insert_entry(
            from.value,
            Entry {
                to: to.value,
                from_text: from.text.clone(),
                to_text: to.text.clone(),
            },
        )
    }

    fn insert_entry(&mut self, from: CodePoint, entry: Entry) -> Option<CodePoint> {
        self.entries.insert(from, entry).map(|previous| previous.to)
    }

    pub fn get(&self, from: CodePoint) -> Option<CodePoint> {
        self.entries.get(&from).map(|entry| entry.to)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CaseMapping> + '_ {
        self.entries
            .iter()
            .map(|(&from, entry)| CaseMapping { from, to: entry.to })
    }

    /// `(from, to)` hex text without `0x`, in insertion order.
    pub fn spelled(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .values()
            .map(|entry| (entry.from_text.as_str(), entry.to_text.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTables {
    pub lower_to_upper: CaseTable,
    pub upper_to_lower: CaseTable,
}

impl CaseTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds whatever mappings `record` carries. Callers reject duplicate code
    /// points before getting here, so each table gains at most one entry.
    pub fn add(&mut self, record: &UnicodeRecord) {
        if let Some((from, to)) = record.uppercase_mapping() {
            self.lower_to_upper.insert_fields(from, to);
        }
        if let Some((from, to)) = record.lowercase_mapping() {
            self.upper_to_lower.insert_fields(from, to);
        }
    }
}
