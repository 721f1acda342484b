//! Predicate filter stage.
//!
//! Narrows a collection to the records satisfying every configured
//! constraint (AND across fields, OR within a multi-select field), plus
//! a case-insensitive free-text search over each record's searchable
//! fields.

use std::collections::{BTreeSet, HashMap};

use crate::error::QueryError;
use crate::records::fields::{FieldValue, Record, RecordField};

/// Inclusive numeric range. An absent bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Result<Self, QueryError> {
        // Also rejects NaN bounds.
        if !(min <= max) {
            return Err(QueryError::InvertedRange { min, max });
        }
        Ok(Self {
            min: Some(min),
            max: Some(max),
        })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }
}

/// Constraint on a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value equals the selection, case-sensitive.
    Exact(String),
    /// Value (or any member of a set value) is one of the selections.
    AnyOf(BTreeSet<String>),
    Range(NumericRange),
}

impl Constraint {
    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constraint::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// Empty selection, empty set or open range.
    pub fn is_unrestricted(&self) -> bool {
        match self {
            Constraint::Exact(value) => value.is_empty(),
            Constraint::AnyOf(values) => values.is_empty(),
            Constraint::Range(range) => range.is_unbounded(),
        }
    }

    /// Test a field value. Missing or mismatched values never match.
    pub fn matches(&self, value: &FieldValue<'_>) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        match (self, value) {
            (Constraint::Exact(selected), FieldValue::Text(text)) => selected == text,
            (Constraint::Exact(selected), FieldValue::Set(members)) => {
                members.iter().any(|m| m == selected)
            }
            (Constraint::AnyOf(selected), FieldValue::Text(text)) => selected.contains(*text),
            (Constraint::AnyOf(selected), FieldValue::Set(members)) => {
                members.iter().any(|m| selected.contains(*m))
            }
            (Constraint::Range(range), FieldValue::Number(n)) => range.contains(*n),
            _ => false,
        }
    }
}

/// The user's current combination of field constraints and search text.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilterSet<F: RecordField> {
    constraints: HashMap<F, Constraint>,
    query: String,
}

impl<F: RecordField> Default for ActiveFilterSet<F> {
    fn default() -> Self {
        Self {
            constraints: HashMap::new(),
            query: String::new(),
        }
    }
}

impl<F: RecordField> ActiveFilterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, Constraint::Exact(value.into()));
        self
    }

    pub fn with_any_of<I, S>(mut self, field: F, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(field, Constraint::any_of(values));
        self
    }

    pub fn with_range(mut self, field: F, min: f64, max: f64) -> Result<Self, QueryError> {
        self.set(field, Constraint::Range(NumericRange::new(min, max)?));
        Ok(self)
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Replace the constraint on `field`.
    pub fn set(&mut self, field: F, constraint: Constraint) {
        self.constraints.insert(field, constraint);
    }

    pub fn clear(&mut self, field: F) {
        self.constraints.remove(&field);
    }

    pub fn reset(&mut self) {
        self.constraints.clear();
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn constraint(&self, field: F) -> Option<&Constraint> {
        self.constraints.get(&field)
    }

    /// Constraints that actually restrict the collection.
    pub fn active_constraints(&self) -> impl Iterator<Item = (F, &Constraint)> {
        self.constraints
            .iter()
            .filter(|(_, c)| !c.is_unrestricted())
            .map(|(f, c)| (*f, c))
    }

    pub fn active_count(&self) -> usize {
        self.active_constraints().count() + usize::from(!self.normalized_query().is_empty())
    }

    /// True when nothing restricts the collection.
    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        let needle = self.normalized_query();
        self.matches_with_needle(record, &needle)
    }

    fn matches_with_needle<R>(&self, record: &R, needle: &str) -> bool
    where
        R: Record<Field = F>,
    {
        if !needle.is_empty()
            && !record
                .search_fields()
                .iter()
                .any(|hay| hay.to_lowercase().contains(needle))
        {
            return false;
        }
        self.active_constraints()
            .all(|(field, constraint)| constraint.matches(&record.value(field)))
    }
}

/// Apply the filter set, keeping input order.
pub fn apply_filters<'a, R>(records: &'a [R], filters: &ActiveFilterSet<R::Field>) -> Vec<&'a R>
where
    R: Record,
{
    if filters.is_default() {
        return records.iter().collect();
    }
    let needle = filters.normalized_query();
    records
        .iter()
        .filter(|r| filters.matches_with_needle(*r, &needle))
        .collect()
}
