use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod board;
pub mod category;
pub mod date;
pub mod fallback;
pub mod protocol;

pub use board::{CommentBoard, CommentDraft, DraftError};
pub use category::{Category, CategorizedComments};
pub use fallback::{DataSource, NeighborhoodProfile, Sourced};
pub use protocol::{
    AddCommentRequest, ApiRequest, HttpMethod, ListCitiesRequest, ListCommentsRequest,
    ListNeighborhoodsRequest,
};

// =========================================================
// Domain Models
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: i64,
    pub name: String,
    pub city_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl CommentUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    /// Name shown next to a comment; anonymous authors render as "User".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "User" } else { &self.name }
    }

    /// Single-letter avatar placeholder.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('U')
    }
}

/// A comment as exchanged with the backend.
///
/// `category` stays a raw label: the backend may send labels outside the
/// ten known ones, and grouping decides what to do with those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: CommentUser,
}

/// Accepts ids sent either as JSON strings or integers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
