//! Accounts shown in the user-management console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::{FieldKind, FieldValue, Record, RecordField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Suspended,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Suspended => "Suspended",
            UserStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Trekker,
    Guide,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Trekker => "Trekker",
            Role::Guide => "Guide",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub role: Role,
    pub status: UserStatus,
    pub joined_at: DateTime<Utc>,
    /// `None` for accounts that never signed in.
    pub last_active_at: Option<DateTime<Utc>>,
    pub treks_completed: u32,
    pub reports: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Location,
    Role,
    Status,
    JoinedAt,
    LastActive,
    TreksCompleted,
    Reports,
}

impl RecordField for UserField {
    fn kind(self) -> FieldKind {
        match self {
            UserField::Name
            | UserField::Email
            | UserField::Location
            | UserField::Role
            | UserField::Status => FieldKind::Text,
            UserField::JoinedAt | UserField::LastActive => FieldKind::Date,
            UserField::TreksCompleted | UserField::Reports => FieldKind::Number,
        }
    }

    fn name(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Location => "location",
            UserField::Role => "role",
            UserField::Status => "status",
            UserField::JoinedAt => "joined_at",
            UserField::LastActive => "last_active",
            UserField::TreksCompleted => "treks_completed",
            UserField::Reports => "reports",
        }
    }

    fn all() -> &'static [Self] {
        &[
            UserField::Name,
            UserField::Email,
            UserField::Location,
            UserField::Role,
            UserField::Status,
            UserField::JoinedAt,
            UserField::LastActive,
            UserField::TreksCompleted,
            UserField::Reports,
        ]
    }
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Location => FieldValue::Text(&self.location),
            UserField::Role => FieldValue::Text(self.role.as_str()),
            UserField::Status => FieldValue::Text(self.status.as_str()),
            UserField::JoinedAt => FieldValue::Date(self.joined_at),
            UserField::LastActive => match self.last_active_at {
                Some(at) => FieldValue::Date(at),
                None => FieldValue::Missing,
            },
            UserField::TreksCompleted => FieldValue::Number(self.treks_completed as f64),
            UserField::Reports => FieldValue::Number(self.reports as f64),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.location.as_str()]
    }
}
