//! Trek listing records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::{FieldKind, FieldValue, Record, RecordField};

/// Trek difficulty grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Strenuous,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Challenging,
        Difficulty::Strenuous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
            Difficulty::Strenuous => "Strenuous",
        }
    }

    /// Parse the stored enumeration value. Case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Monsoon,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A named point on the route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Checkpoint {
    pub name: String,
    pub altitude_m: u32,
    pub note: String,
}

/// One day of a trek itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub distance_km: f64,
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trek {
    pub id: String,
    pub name: String,
    pub region: String,
    pub location: String,
    pub difficulty: Difficulty,
    pub duration_days: u32,
    pub max_altitude_m: u32,
    pub price_usd: f64,
    pub best_seasons: BTreeSet<Season>,
    pub tags: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

impl Trek {
    /// Rating weighted by the log of the review count.
    pub fn popularity(&self) -> f64 {
        self.rating.max(0.0) * (self.review_count as f64).ln_1p()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrekField {
    Name,
    Region,
    Difficulty,
    Duration,
    MaxAltitude,
    Price,
    BestSeason,
    Tags,
    Rating,
    Popularity,
}

impl RecordField for TrekField {
    fn kind(self) -> FieldKind {
        match self {
            TrekField::Name | TrekField::Region | TrekField::Difficulty => FieldKind::Text,
            TrekField::Duration
            | TrekField::MaxAltitude
            | TrekField::Price
            | TrekField::Rating
            | TrekField::Popularity => FieldKind::Number,
            TrekField::BestSeason | TrekField::Tags => FieldKind::Set,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TrekField::Name => "name",
            TrekField::Region => "region",
            TrekField::Difficulty => "difficulty",
            TrekField::Duration => "duration",
            TrekField::MaxAltitude => "max_altitude",
            TrekField::Price => "price",
            TrekField::BestSeason => "best_season",
            TrekField::Tags => "tags",
            TrekField::Rating => "rating",
            TrekField::Popularity => "popularity",
        }
    }

    fn all() -> &'static [Self] {
        &[
            TrekField::Name,
            TrekField::Region,
            TrekField::Difficulty,
            TrekField::Duration,
            TrekField::MaxAltitude,
            TrekField::Price,
            TrekField::BestSeason,
            TrekField::Tags,
            TrekField::Rating,
            TrekField::Popularity,
        ]
    }
}

impl Record for Trek {
    type Field = TrekField;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: TrekField) -> FieldValue<'_> {
        match field {
            TrekField::Name => FieldValue::Text(&self.name),
            TrekField::Region => FieldValue::Text(&self.region),
            TrekField::Difficulty => FieldValue::Text(self.difficulty.as_str()),
            TrekField::Duration => FieldValue::Number(self.duration_days as f64),
            TrekField::MaxAltitude => FieldValue::Number(self.max_altitude_m as f64),
            TrekField::Price => FieldValue::Number(self.price_usd),
            TrekField::BestSeason => {
                FieldValue::Set(self.best_seasons.iter().map(|s| s.as_str()).collect())
            }
            TrekField::Tags => FieldValue::Set(self.tags.iter().map(String::as_str).collect()),
            TrekField::Rating => FieldValue::Number(self.rating),
            TrekField::Popularity => FieldValue::Number(self.popularity()),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.location.as_str(), self.region.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trek {
        Trek {
            id: "t1".to_string(),
            name: "Poon Hill".to_string(),
            region: "Annapurna".to_string(),
            location: "Ghorepani".to_string(),
            difficulty: Difficulty::Easy,
            duration_days: 5,
            max_altitude_m: 3210,
            price_usd: 450.0,
            best_seasons: BTreeSet::from([Season::Spring, Season::Autumn]),
            tags: vec!["sunrise".to_string()],
            rating: 4.5,
            review_count: 0,
            itinerary: Vec::new(),
        }
    }

    #[test]
    fn test_difficulty_parse_is_case_sensitive() {
        assert_eq!(Difficulty::parse("Moderate"), Some(Difficulty::Moderate));
        assert_eq!(Difficulty::parse("moderate"), None);
    }

    #[test]
    fn test_popularity_non_negative() {
        let mut trek = sample();
        assert_eq!(trek.popularity(), 0.0);
        trek.review_count = 100;
        assert!(trek.popularity() > 0.0);
        trek.rating = -1.0;
        assert_eq!(trek.popularity(), 0.0);
    }

    #[test]
    fn test_field_values_match_declared_kind() {
        let trek = sample();
        for field in TrekField::all() {
            assert_eq!(trek.value(*field).kind(), Some(field.kind()), "{:?}", field);
        }
    }

    #[test]
    fn test_search_fields_include_tags() {
        let trek = sample();
        assert!(trek.search_fields().contains(&"sunrise"));
        assert!(trek.search_fields().contains(&"Ghorepani"));
    }
}
