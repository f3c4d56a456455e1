pub mod board;
pub mod card;
pub mod reorder;

pub use board::{Board, Column, ColumnId};
pub use card::{Card, CardId};
pub use reorder::{reorder, transfer, Transfer};

use serde::Deserialize;

/// Identifier as it appears in widget payloads: a string or a bare number
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}
