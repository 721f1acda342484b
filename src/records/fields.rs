//! Typed field access for filterable and sortable records.
//!
//! Every record type declares a closed field enum. Each field has a fixed
//! semantic kind, and the record maps it to a [`FieldValue`] through an
//! exhaustive match, so filters and comparators can never key into an
//! unknown field.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};

/// Semantic type of a field. Selects the comparator in the sort stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Set,
}

/// A field value read from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(DateTime<Utc>),
    Set(Vec<&'a str>),
    Missing,
}

impl FieldValue<'_> {
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldValue::Text(_) => Some(FieldKind::Text),
            FieldValue::Number(_) => Some(FieldKind::Number),
            FieldValue::Date(_) => Some(FieldKind::Date),
            FieldValue::Set(_) => Some(FieldKind::Set),
            FieldValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

/// A closed enumeration of the fields of one record type.
pub trait RecordField: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    fn kind(self) -> FieldKind;

    /// Stable lowercase name, used in logs.
    fn name(self) -> &'static str;

    fn all() -> &'static [Self];
}

/// A record that flows through the listing pipeline.
pub trait Record {
    type Field: RecordField;

    fn id(&self) -> &str;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Strings the free-text search is matched against.
    fn search_fields(&self) -> Vec<&str>;
}
