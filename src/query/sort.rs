//! Sort stage.
//!
//! The comparator is picked by the field's declared kind. Sorting is
//! stable, so ties keep their input order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::records::fields::{FieldKind, FieldValue, Record, RecordField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The selected sort key and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F: RecordField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: RecordField> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Header click: the active field flips direction, any other field
    /// becomes active in ascending order.
    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Compare two values of a field of the given kind.
///
/// Values that are missing or do not match `kind` are equal to each other
/// and order after every well-typed value, keeping the comparison total.
pub fn compare_values(kind: FieldKind, a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (typed_key(kind, a), typed_key(kind, b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
    Date(DateTime<Utc>),
}

impl SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            // typed_key only yields one variant per kind
            _ => Ordering::Equal,
        }
    }
}

fn typed_key<'a>(kind: FieldKind, value: &FieldValue<'a>) -> Option<SortKey<'a>> {
    match (kind, value) {
        (FieldKind::Text, FieldValue::Text(t)) => Some(SortKey::Text(*t)),
        (FieldKind::Number, FieldValue::Number(n)) => Some(SortKey::Number(*n)),
        (FieldKind::Date, FieldValue::Date(d)) => Some(SortKey::Date(*d)),
        (FieldKind::Set, FieldValue::Set(members)) => members.first().map(|m| SortKey::Text(*m)),
        _ => None,
    }
}

/// Case-folded comparison with a byte-order tie-break.
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Sort references to records in place.
pub fn sort_records<R: Record>(records: &mut [&R], sort: &SortState<R::Field>) {
    let kind = sort.field.kind();
    records.sort_by(|a, b| {
        let ordering = compare_values(kind, &a.value(sort.field), &b.value(sort.field));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::catalog::{sample_stories, sample_treks, sample_users};
    use crate::records::story::StoryField;
    use crate::records::trek::TrekField;
    use crate::records::user::UserField;

    #[test]
    fn test_toggle_convention() {
        let mut state = SortState::ascending(TrekField::Name);
        state.toggle(TrekField::Name);
        assert_eq!(state, SortState::descending(TrekField::Name));
        state.toggle(TrekField::Name);
        assert_eq!(state.direction, SortDirection::Ascending);

        let mut state = SortState::descending(TrekField::Name);
        state.toggle(TrekField::Price);
        assert_eq!(state, SortState::ascending(TrekField::Price));
    }

    #[test]
    fn test_numeric_sort() {
        let treks = sample_treks();
        let mut refs: Vec<&_> = treks.iter().collect();
        sort_records(&mut refs, &SortState::ascending(TrekField::Price));
        let prices: Vec<f64> = refs.iter().map(|t| t.price_usd).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(refs[0].name, "Poon Hill");
    }

    #[test]
    fn test_text_sort_ignores_case() {
        assert_eq!(compare_text("annapurna", "Everest"), Ordering::Less);
        assert_eq!(compare_text("Abc", "abc"), Ordering::Less);
        assert_eq!(compare_text("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_story_date_sort_descending() {
        let stories = sample_stories();
        let mut refs: Vec<&_> = stories.iter().collect();
        sort_records(&mut refs, &SortState::descending(StoryField::PublishedAt));
        let ids: Vec<&str> = refs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s5", "s2", "s1", "s4"]);
    }

    #[test]
    fn test_missing_dates_sort_last() {
        let users = sample_users();
        let mut refs: Vec<&_> = users.iter().collect();
        sort_records(&mut refs, &SortState::ascending(UserField::LastActive));
        assert_eq!(refs.last().map(|u| u.id.as_str()), Some("u3"));

        sort_records(&mut refs, &SortState::descending(UserField::LastActive));
        assert_eq!(refs.first().map(|u| u.id.as_str()), Some("u3"));
    }

    #[test]
    fn test_mismatched_kinds_compare_equal() {
        assert_eq!(
            compare_values(FieldKind::Number, &FieldValue::Text("a"), &FieldValue::Missing),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(FieldKind::Number, &FieldValue::Number(f64::NAN), &FieldValue::Number(1.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let treks = sample_treks();
        let mut refs: Vec<&_> = treks.iter().collect();
        sort_records(&mut refs, &SortState::ascending(TrekField::Difficulty));
        let moderate: Vec<&str> = refs
            .iter()
            .filter(|t| t.difficulty.as_str() == "Moderate")
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(
            moderate,
            vec!["Annapurna Circuit", "Langtang Valley", "Upper Mustang", "Gokyo Lakes"]
        );
    }
}
