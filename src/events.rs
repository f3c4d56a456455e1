//! Drag-end input and the payloads published to observers.

use crate::domain::ColumnId;
use serde::{Deserialize, Deserializer, Serialize};

/// A position on the board as reported by the drag library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    /// Column position. The drag library names this `droppableId` and sends
    /// it as a numeric string.
    #[serde(alias = "droppableId", deserialize_with = "index_from_number_or_string")]
    pub list_index: usize,
    /// Card rank within the column
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(list_index: usize, index: usize) -> Self {
        Self { list_index, index }
    }
}

/// A completed drag gesture. `destination` is `None` when the card was
/// dropped outside any list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DragEndEvent {
    pub fn new(source: DraggableLocation, destination: Option<DraggableLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// A drop onto a list at `(list_index, index)`
    pub fn moved(from: (usize, usize), to: (usize, usize)) -> Self {
        Self::new(
            DraggableLocation::new(from.0, from.1),
            Some(DraggableLocation::new(to.0, to.1)),
        )
    }

    /// A drop outside any list
    pub fn cancelled(from: (usize, usize)) -> Self {
        Self::new(DraggableLocation::new(from.0, from.1), None)
    }
}

fn index_from_number_or_string<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIndex {
        Number(usize),
        Text(String),
    }

    match RawIndex::deserialize(deserializer)? {
        RawIndex::Number(n) => Ok(n),
        RawIndex::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Details of the card captured before it moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub title: String,
}

/// Published after every resolved drag.
///
/// `origin_card_index` and `destination_card_index` hold the origin and
/// destination *column* positions; observers written against the widget
/// read them under these names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMovement {
    pub origin_column_id: ColumnId,
    pub destination_column_id: ColumnId,
    pub origin_card_index: usize,
    pub destination_card_index: usize,
    pub card_details: CardDetails,
}

/// Published when the user asks to add a card to a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCardRequest {
    pub column_index: usize,
    pub column_id: ColumnId,
}
