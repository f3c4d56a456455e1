use crate::domain::{board::ColumnId, RawId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a card
///
/// Board payloads coming from the widget use either strings or bare numbers
/// as card ids; both deserialize, and the id always serializes as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CardId(String);

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
    }
}

impl CardId {
    /// Creates a fresh random card ID (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::BoardError::InvalidId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single draggable item on the board.
///
/// `column_id` is the back-reference to the owning column and must always
/// match the column whose card sequence currently holds the card. Any other
/// fields the host attaches (descriptions, colours, assignees, ...) live in
/// `extra` and are carried through every operation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column_id: ColumnId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Creates a new card owned by the given column
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_id: column_id.into(),
            extra: Map::new(),
        }
    }

    /// Attaches an opaque field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Reads an opaque field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn belongs_to(&self, column_id: &ColumnId) -> bool {
        &self.column_id == column_id
    }
}
