//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user currently owns the given email
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }

    /// Apply the fields present in a patch.
    ///
    /// `id` and `created_at` are never touched. Email uniqueness is not
    /// checked here.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// User creation data (not yet persisted, no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Partial user update. `None` means the field was not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl UserPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 6))]
    pub id: i64,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Ivan Petrov"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "ivan.petrov@mail.ru"))]
    pub email: String,
    /// User age
    #[cfg_attr(feature = "openapi", schema(example = 18))]
    pub age: i32,
    /// Creation timestamp, formatted as `yyyy-MM-dd HH:mm:ss`
    #[serde(with = "created_at_format")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2023-10-11 23:10:05")
    )]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
        }
    }
}

mod created_at_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::constants::CREATED_AT_FORMAT;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(CREATED_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, CREATED_AT_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(de::Error::custom)
    }
}
