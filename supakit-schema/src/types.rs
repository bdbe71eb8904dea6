//! Extraction results.

use indexmap::IndexMap;
use serde::Serialize;

/// One declared foreign-key relation attached to a source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipInfo {
    /// The table or view the relation points to.
    pub target_table: String,
    /// True for one-to-many relations (the foreign key is not unique).
    pub is_array: bool,
    /// Constraint name. Only used to tell relations apart.
    pub foreign_key: String,
}

impl RelationshipInfo {
    pub fn new(target_table: impl Into<String>, is_array: bool, foreign_key: impl Into<String>) -> Self {
        Self {
            target_table: target_table.into(),
            is_array,
            foreign_key: foreign_key.into(),
        }
    }

    fn same_link(&self, other: &RelationshipInfo) -> bool {
        self.target_table == other.target_table && self.foreign_key == other.foreign_key
    }
}

/// Relation name to "is a view", in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaMap(IndexMap<String, bool>);

impl SchemaMap {
    /// Record a relation. A name seen again keeps its position and takes the new flag.
    pub(crate) fn insert(&mut self, name: impl Into<String>, is_view: bool) {
        self.0.insert(name.into(), is_view);
    }

    /// Whether `name` is a view, or `None` if it was never declared.
    pub fn is_view(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All relations with their view flag, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, is_view)| (name.as_str(), *is_view))
    }

    /// Names declared under `Tables` (and not overridden by `Views`).
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, is_view)| !is_view).map(|(name, _)| name)
    }

    /// Names declared under `Views`.
    pub fn views(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, is_view)| *is_view).map(|(name, _)| name)
    }
}

/// Table name to its relationships, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelationshipMap(IndexMap<String, Vec<RelationshipInfo>>);

impl RelationshipMap {
    /// Start (or restart) the relationship list of a table.
    pub(crate) fn open_table(&mut self, table: &str) {
        self.0.insert(table.to_string(), Vec::new());
    }

    /// Append a relationship unless the same (target, foreign key) link is already listed.
    pub(crate) fn push_unique(&mut self, table: &str, relationship: RelationshipInfo) {
        let list = self.0.entry(table.to_string()).or_default();
        if !list.iter().any(|existing| existing.same_link(&relationship)) {
            list.push(relationship);
        }
    }

    /// Relationships of `table`; empty when the table declared none or is unknown.
    pub fn get(&self, table: &str) -> &[RelationshipInfo] {
        self.0.get(table).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_table(&self, table: &str) -> bool {
        self.0.contains_key(table)
    }

    /// Number of tables with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of relationships across all tables.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RelationshipInfo])> {
        self.0.iter().map(|(table, list)| (table.as_str(), list.as_slice()))
    }
}

/// Both maps recovered from one types file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub schema: SchemaMap,
    pub relationships: RelationshipMap,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty() && self.relationships.is_empty()
    }
}

/// Knobs for locating the blocks to scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Only look for `Tables`/`Views` inside this schema's `name: {` block.
    ///
    /// A block the schema does not declare is reported missing rather than
    /// taken from a later schema.
    ///
    /// `None` scans from the start of the text, using the first block found.
    pub schema: Option<String>,
}

impl ExtractOptions {
    /// Restrict scanning to the named schema (e.g. `public`).
    pub fn schema(name: impl Into<String>) -> Self {
        Self {
            schema: Some(name.into()),
        }
    }
}
