//! Community story records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::{FieldKind, FieldValue, Record, RecordField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryStatus {
    Published,
    Pending,
    Hidden,
}

impl StoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryStatus::Published => "Published",
            StoryStatus::Pending => "Pending",
            StoryStatus::Hidden => "Hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub author: String,
    pub location: String,
    pub tags: Vec<String>,
    pub status: StoryStatus,
    pub published_at: DateTime<Utc>,
    pub likes: u32,
    pub reports: u32,
    #[serde(default)]
    pub liked_by_viewer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryField {
    Title,
    Author,
    Location,
    Status,
    PublishedAt,
    Likes,
    Reports,
    Tags,
}

impl RecordField for StoryField {
    fn kind(self) -> FieldKind {
        match self {
            StoryField::Title | StoryField::Author | StoryField::Location | StoryField::Status => {
                FieldKind::Text
            }
            StoryField::PublishedAt => FieldKind::Date,
            StoryField::Likes | StoryField::Reports => FieldKind::Number,
            StoryField::Tags => FieldKind::Set,
        }
    }

    fn name(self) -> &'static str {
        match self {
            StoryField::Title => "title",
            StoryField::Author => "author",
            StoryField::Location => "location",
            StoryField::Status => "status",
            StoryField::PublishedAt => "published_at",
            StoryField::Likes => "likes",
            StoryField::Reports => "reports",
            StoryField::Tags => "tags",
        }
    }

    fn all() -> &'static [Self] {
        &[
            StoryField::Title,
            StoryField::Author,
            StoryField::Location,
            StoryField::Status,
            StoryField::PublishedAt,
            StoryField::Likes,
            StoryField::Reports,
            StoryField::Tags,
        ]
    }
}

impl Record for Story {
    type Field = StoryField;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: StoryField) -> FieldValue<'_> {
        match field {
            StoryField::Title => FieldValue::Text(&self.title),
            StoryField::Author => FieldValue::Text(&self.author),
            StoryField::Location => FieldValue::Text(&self.location),
            StoryField::Status => FieldValue::Text(self.status.as_str()),
            StoryField::PublishedAt => FieldValue::Date(self.published_at),
            StoryField::Likes => FieldValue::Number(self.likes as f64),
            StoryField::Reports => FieldValue::Number(self.reports as f64),
            StoryField::Tags => FieldValue::Set(self.tags.iter().map(String::as_str).collect()),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.author.as_str(), self.location.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
