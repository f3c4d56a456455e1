use crate::domain::card::{Card, CardId};
use crate::domain::RawId;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a board column (list)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ColumnId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered container of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Replaces the cards, pointing each one's back-reference at this column
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards.clear();
        for card in cards {
            self.append_card(card);
        }
        self
    }

    /// Appends a card to the end of the column
    pub fn append_card(&mut self, mut card: Card) {
        card.column_id = self.id.clone();
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Rank of a card within this column
    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }
}

/// Kanban board state: the ordered set of columns.
///
/// Serialized as a bare JSON array, matching the widget's board payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Gets a column by position
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(BoardError::ColumnIndexOutOfRange {
                index,
                len: self.columns.len(),
            })
    }

    /// Finds a column and its position by ID
    pub fn column_by_id(&self, id: &ColumnId) -> Option<(usize, &Column)> {
        self.columns.iter().enumerate().find(|(_, col)| &col.id == id)
    }

    /// Gets a card by column and card position
    pub fn card(&self, column_index: usize, card_index: usize) -> Result<&Card> {
        let column = self.column(column_index)?;
        column
            .cards
            .get(card_index)
            .ok_or(BoardError::IndexOutOfRange {
                index: card_index,
                len: column.len(),
            })
    }

    /// Finds a card anywhere on the board, returning its column and card positions
    pub fn locate_card(&self, card_id: &CardId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, col)| col.position_of(card_id).map(|pi| (ci, pi)))
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Appends a new card with a generated ID to the column at `column_index`.
    ///
    /// Returns the new board and the new card's ID; `self` is left as is.
    pub fn add_card(&self, column_index: usize, title: impl Into<String>) -> Result<(Board, CardId)> {
        let column_id = self.column(column_index)?.id.clone();
        let card = Card::new(CardId::generate(), title, column_id);
        let id = card.id.clone();

        let mut board = self.clone();
        board.columns[column_index].append_card(card);
        Ok((board, id))
    }

    /// Checks the structural invariants: unique column IDs, unique card IDs,
    /// and every card's back-reference naming the column that holds it
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::InvariantViolation(format!(
                    "duplicate column id {}",
                    column.id
                )));
            }
            for card in &column.cards {
                if !card_ids.insert(&card.id) {
                    return Err(BoardError::InvariantViolation(format!(
                        "duplicate card id {}",
                        card.id
                    )));
                }
                if !card.belongs_to(&column.id) {
                    return Err(BoardError::InvariantViolation(format!(
                        "card {} is in column {} but references column {}",
                        card.id, column.id, card.column_id
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_board() -> Board {
        Board::new(vec![
            Column::new("A", "To do").with_cards(vec![
                Card::new("1", "x", "A"),
                Card::new("2", "y", "A"),
            ]),
            Column::new("B", "Done"),
        ])
    }

    #[test]
    fn test_board_lookup() {
        let board = sample_board();

        assert_eq!(board.column(1).unwrap().id.as_str(), "B");
        assert!(matches!(
            board.column(2),
            Err(BoardError::ColumnIndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(board.card(0, 1).unwrap().title, "y");
        assert!(board.card(1, 0).is_err());
        assert_eq!(board.column_by_id(&ColumnId::from("B")).map(|(i, _)| i), Some(1));
        assert_eq!(board.locate_card(&CardId::from("2")), Some((0, 1)));
        assert_eq!(board.card_count(), 2);
    }

    #[test]
    fn test_with_cards_tags_back_reference() {
        let column = Column::new("B", "Done").with_cards(vec![Card::new("1", "x", "A")]);
        assert_eq!(column.cards[0].column_id.as_str(), "B");
    }

    #[test]
    fn test_add_card_is_non_mutating() {
        let board = sample_board();
        let (updated, id) = board.add_card(1, "new card").unwrap();

        assert_eq!(board.column(1).unwrap().len(), 0);
        let column = updated.column(1).unwrap();
        assert_eq!(column.len(), 1);
        assert_eq!(column.cards[0].id, id);
        assert_eq!(column.cards[0].column_id.as_str(), "B");
        assert!(updated.validate().is_ok());

        assert!(board.add_card(5, "nowhere").is_err());
    }

    #[test]
    fn test_validate_detects_stale_back_reference() {
        let mut board = sample_board();
        board.columns[0].cards[0].column_id = ColumnId::from("B");
        assert!(matches!(
            board.validate(),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_detects_duplicates() {
        let mut board = sample_board();
        board.columns[1].append_card(Card::new("1", "dup", "B"));
        assert!(board.validate().is_err());

        let board = Board::new(vec![Column::new("A", ""), Column::new("A", "")]);
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_board_deserializes_widget_payload() {
        let board: Board = serde_json::from_value(json!([
            { "id": "A", "title": "To do", "cards": [
                { "id": 1, "title": "x", "columnId": "A" }
            ]},
            { "id": "B", "title": "Done", "cards": [] }
        ]))
        .unwrap();

        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.card(0, 0).unwrap().id.as_str(), "1");
        assert!(board.validate().is_ok());
    }
}
