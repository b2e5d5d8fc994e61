//! Table specs and the sink-facing table collection.
//!
//! Builders produce typed rows (`Vec<Employee>`, `Vec<Store>`, ...). Sinks
//! only need the row cells in canonical field order, so every row type
//! implements [`TableRow`] and is flattened into a [`TableResult`] before it
//! reaches a sink.

use rust_decimal::Decimal;
use std::fmt;

/// Static description of one table: its name, canonical field order and
/// optional primary-key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub primary_key: Option<&'static str>,
}

/// A record that maps onto one row of a storefront table.
pub trait TableRow {
    const TABLE: TableSpec;

    /// Value of the primary-key field, if the table has one.
    fn key(&self) -> Option<i64>;

    /// Cell values in `TABLE.fields` order.
    fn values(&self) -> Vec<FieldValue>;
}

/// A single cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Decimal(Decimal),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            // Decimal's Display keeps the value's scale and never switches to
            // exponent notation.
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Bool(v) => f.write_str(if *v { "true" } else { "false" }),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// One assembled table, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResult {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub rows: Vec<Vec<FieldValue>>,
    pub primary_key: Option<&'static str>,
    /// Highest primary-key value among `rows`. `None` when the table has no
    /// primary key or no rows.
    pub max_key: Option<i64>,
}

impl TableResult {
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        let spec = R::TABLE;
        let max_key = spec
            .primary_key
            .and_then(|_| rows.iter().filter_map(TableRow::key).max());

        Self {
            name: spec.name,
            fields: spec.fields,
            rows: rows.iter().map(TableRow::values).collect(),
            primary_key: spec.primary_key,
            max_key,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `(primary_key, max_key)` pair when a sequence reset applies.
    pub fn sequence_reset(&self) -> Option<(&'static str, i64)> {
        self.primary_key.zip(self.max_key)
    }

    /// Index of `field` in the canonical field order.
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

/// Ordered, name-addressable collection of assembled tables.
///
/// Insertion order is the order tables were built in, which is also a valid
/// foreign-key insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedTables {
    tables: Vec<TableResult>,
}

impl GeneratedTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table, replacing any earlier table with the same name in
    /// place.
    pub fn push(&mut self, table: TableResult) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TableResult> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableResult> {
        self.tables.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.iter().map(|t| t.name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(TableResult::len).sum()
    }
}

impl<'a> IntoIterator for &'a GeneratedTables {
    type Item = &'a TableResult;
    type IntoIter = std::slice::Iter<'a, TableResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
