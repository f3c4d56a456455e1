//! Pure list operations behind drag-and-drop.
//!
//! Both functions borrow their inputs and return freshly built sequences, so
//! callers can compare old and new board values to detect what changed.
//! Neither touches any card field; fixing up a moved card's column
//! back-reference is the board coordinator's job.

use crate::domain::card::Card;
use crate::error::{BoardError, Result};

/// Result of moving a card from one list into another
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub source: Vec<Card>,
    pub dest: Vec<Card>,
}

impl Transfer {
    /// The card that landed at `dest_index` of the destination sequence
    pub fn moved(&self, dest_index: usize) -> Option<&Card> {
        self.dest.get(dest_index)
    }
}

/// Moves the card at `from_index` to `to_index` within a single list.
///
/// `to_index` is a rank in the list with the card already removed, so it must
/// be less than `list.len()`.
///
/// # Examples
/// ```
/// use kanban_board_core::domain::{reorder, Card};
///
/// let list = vec![
///     Card::new("1", "a", "A"),
///     Card::new("2", "b", "A"),
///     Card::new("3", "c", "A"),
/// ];
///
/// let reordered = reorder(&list, 0, 2).unwrap();
/// let ids: Vec<&str> = reordered.iter().map(|c| c.id.as_str()).collect();
/// assert_eq!(ids, ["2", "3", "1"]);
/// ```
pub fn reorder(list: &[Card], from_index: usize, to_index: usize) -> Result<Vec<Card>> {
    let len = list.len();
    if from_index >= len {
        return Err(BoardError::IndexOutOfRange {
            index: from_index,
            len,
        });
    }
    if to_index >= len {
        return Err(BoardError::IndexOutOfRange {
            index: to_index,
            len,
        });
    }

    let mut result = list.to_vec();
    let card = result.remove(from_index);
    result.insert(to_index, card);
    Ok(result)
}

/// Moves the card at `source_index` of `source` into `dest` at `dest_index`.
///
/// `dest_index` may equal `dest.len()` to append. Passing the same slice as
/// both source and destination is rejected with
/// [`BoardError::SameListTransfer`]; same-list moves go through [`reorder`].
pub fn transfer(
    source: &[Card],
    dest: &[Card],
    source_index: usize,
    dest_index: usize,
) -> Result<Transfer> {
    if source_index >= source.len() {
        return Err(BoardError::IndexOutOfRange {
            index: source_index,
            len: source.len(),
        });
    }
    if dest_index > dest.len() {
        return Err(BoardError::IndexOutOfRange {
            index: dest_index,
            len: dest.len(),
        });
    }
    // After the bounds checks: distinct empty slices can compare pointer-equal.
    if std::ptr::eq(source, dest) {
        return Err(BoardError::SameListTransfer);
    }

    let mut new_source = source.to_vec();
    let card = new_source.remove(source_index);

    let mut new_dest = Vec::with_capacity(dest.len() + 1);
    new_dest.extend_from_slice(&dest[..dest_index]);
    new_dest.push(card);
    new_dest.extend_from_slice(&dest[dest_index..]);

    Ok(Transfer {
        source: new_source,
        dest: new_dest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cards(column: &str, ids: &[&str]) -> Vec<Card> {
        ids.iter()
            .map(|id| Card::new(*id, format!("card {}", id), column))
            .collect()
    }

    fn ids(list: &[Card]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_forward() {
        let list = cards("A", &["1", "2", "3"]);
        let result = reorder(&list, 0, 2).unwrap();
        assert_eq!(ids(&result), ["2", "3", "1"]);
    }

    #[test]
    fn test_reorder_backward() {
        let list = cards("A", &["1", "2", "3", "4"]);
        let result = reorder(&list, 3, 1).unwrap();
        assert_eq!(ids(&result), ["1", "4", "2", "3"]);
    }

    #[test]
    fn test_reorder_leaves_input_untouched() {
        let list = cards("A", &["1", "2", "3"]);
        let snapshot = list.clone();
        let _ = reorder(&list, 2, 0).unwrap();
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let list = cards("A", &["1", "2"]);

        assert!(matches!(
            reorder(&list, 2, 0),
            Err(BoardError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            reorder(&list, 0, 2),
            Err(BoardError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(reorder(&[], 0, 0).is_err());
    }

    #[test]
    fn test_transfer_into_empty_list() {
        let source = cards("A", &["1", "2"]);
        let dest: Vec<Card> = Vec::new();

        let result = transfer(&source, &dest, 0, 0).unwrap();
        assert_eq!(ids(&result.source), ["2"]);
        assert_eq!(ids(&result.dest), ["1"]);
    }

    #[test]
    fn test_transfer_does_not_touch_back_reference() {
        let source = cards("A", &["1"]);
        let dest = cards("B", &["9"]);

        let result = transfer(&source, &dest, 0, 1).unwrap();
        let moved = result.moved(1).unwrap();
        assert_eq!(moved.id.as_str(), "1");
        assert_eq!(moved.column_id.as_str(), "A");
    }

    #[test]
    fn test_transfer_append_and_middle() {
        let source = cards("A", &["1", "2", "3"]);
        let dest = cards("B", &["7", "8"]);

        let appended = transfer(&source, &dest, 1, 2).unwrap();
        assert_eq!(ids(&appended.source), ["1", "3"]);
        assert_eq!(ids(&appended.dest), ["7", "8", "2"]);

        let middle = transfer(&source, &dest, 2, 1).unwrap();
        assert_eq!(ids(&middle.dest), ["7", "3", "8"]);
    }

    #[test]
    fn test_transfer_out_of_range() {
        let source = cards("A", &["1"]);
        let dest = cards("B", &["7"]);

        assert!(matches!(
            transfer(&source, &dest, 1, 0),
            Err(BoardError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            transfer(&source, &dest, 0, 2),
            Err(BoardError::IndexOutOfRange { index: 2, len: 1 })
        ));
    }

    #[test]
    fn test_transfer_between_empty_lists() {
        let source: Vec<Card> = Vec::new();
        let dest: Vec<Card> = Vec::new();

        assert!(matches!(
            transfer(&source, &dest, 0, 0),
            Err(BoardError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_transfer_same_list_rejected() {
        let list = cards("A", &["1", "2"]);
        assert!(matches!(
            transfer(&list, &list, 0, 1),
            Err(BoardError::SameListTransfer)
        ));
    }

    fn list_strategy() -> impl Strategy<Value = Vec<Card>> {
        (1usize..12).prop_map(|n| {
            (0..n)
                .map(|i| Card::new(i.to_string(), format!("t{}", i), "A"))
                .collect()
        })
    }

    fn sorted_ids(list: &[Card]) -> Vec<String> {
        let mut v: Vec<String> = list.iter().map(|c| c.id.to_string()).collect();
        v.sort();
        v
    }

    proptest! {
        #[test]
        fn prop_reorder_is_permutation(
            (list, from, to) in list_strategy().prop_flat_map(|l| {
                let n = l.len();
                (Just(l), 0..n, 0..n)
            })
        ) {
            let result = reorder(&list, from, to).unwrap();
            prop_assert_eq!(result.len(), list.len());
            prop_assert_eq!(sorted_ids(&result), sorted_ids(&list));
            prop_assert_eq!(&result[to].id, &list[from].id);
        }

        #[test]
        fn prop_reorder_identity(
            (list, i) in list_strategy().prop_flat_map(|l| {
                let n = l.len();
                (Just(l), 0..n)
            })
        ) {
            prop_assert_eq!(reorder(&list, i, i).unwrap(), list);
        }

        #[test]
        fn prop_reorder_is_invertible(
            (list, i, j) in list_strategy().prop_flat_map(|l| {
                let n = l.len();
                (Just(l), 0..n, 0..n)
            })
        ) {
            let there = reorder(&list, i, j).unwrap();
            let back = reorder(&there, j, i).unwrap();
            prop_assert_eq!(back, list);
        }

        #[test]
        fn prop_transfer_conserves_cards(
            (source, dest, si, di) in (list_strategy(), 0usize..8).prop_flat_map(|(s, m)| {
                let dest: Vec<Card> = (0..m)
                    .map(|i| Card::new(format!("d{}", i), "dest", "B"))
                    .collect();
                let n = s.len();
                (Just(s), Just(dest), 0..n, 0..=m)
            })
        ) {
            let moved_id = source[si].id.clone();
            let result = transfer(&source, &dest, si, di).unwrap();

            prop_assert_eq!(
                result.source.len() + result.dest.len(),
                source.len() + dest.len()
            );
            prop_assert_eq!(&result.dest[di].id, &moved_id);
            prop_assert!(result.source.iter().all(|c| c.id != moved_id));
        }
    }
}
