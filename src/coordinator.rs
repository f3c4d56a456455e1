//! Turns drag-end events into board updates and observer notifications.

use crate::{
    config::CoordinatorConfig,
    domain::{reorder, transfer, Board},
    error::Result,
    events::{AddCardRequest, CardDetails, CardMovement, DragEndEvent},
    notify::{publish_then_fire, NotificationSink},
    storage::BoardStore,
};
use std::sync::Arc;

/// Computes the board that results from a drag-end event.
///
/// Returns `None` when the card was dropped outside any list. `board` itself
/// is never modified; columns other than the source and destination are
/// carried over unchanged.
pub fn apply_drag(board: &Board, event: &DragEndEvent) -> Result<Option<(Board, CardMovement)>> {
    let Some(destination) = event.destination else {
        return Ok(None);
    };
    let source = event.source;
    let s_ind = source.list_index;
    let d_ind = destination.list_index;

    let origin = board.column(s_ind)?;
    let target = board.column(d_ind)?;
    let card_details = CardDetails {
        title: board.card(s_ind, source.index)?.title.clone(),
    };

    let mut next = board.clone();
    if s_ind == d_ind {
        next.columns[s_ind].cards = reorder(&origin.cards, source.index, destination.index)?;
    } else {
        let moved = transfer(&origin.cards, &target.cards, source.index, destination.index)?;
        next.columns[s_ind].cards = moved.source;
        next.columns[d_ind].cards = moved.dest;

        let dest_column = &mut next.columns[d_ind];
        dest_column.cards[destination.index].column_id = dest_column.id.clone();
    }

    let movement = CardMovement {
        origin_column_id: origin.id.clone(),
        destination_column_id: target.id.clone(),
        origin_card_index: s_ind,
        destination_card_index: d_ind,
        card_details,
    };
    Ok(Some((next, movement)))
}

/// Board coordinator.
///
/// Each drag resolution runs to completion before the next one starts;
/// `on_drag_end` takes `&mut self` so the borrow checker enforces that.
pub struct BoardCoordinator {
    store: Arc<dyn BoardStore>,
    sink: Arc<dyn NotificationSink>,
    config: CoordinatorConfig,
}

impl BoardCoordinator {
    pub fn new(store: Arc<dyn BoardStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            store,
            sink,
            config: CoordinatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CoordinatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Current board value
    pub async fn board(&self) -> Result<Arc<Board>> {
        self.store.load_board().await
    }

    /// Resolves a drag-end event.
    ///
    /// Replaces the board through the store, then publishes the movement and
    /// fires the card-moved event. Returns the published movement, or `None`
    /// for a drop outside any list (no state change, nothing published).
    pub async fn on_drag_end(&mut self, event: DragEndEvent) -> Result<Option<CardMovement>> {
        let board = self.store.load_board().await?;

        let (next, movement) = match apply_drag(&board, &event) {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                tracing::debug!(source = ?event.source, "card dropped outside any list");
                return Ok(None);
            }
            Err(err) => {
                tracing::warn!(?event, error = %err, "rejected drag-end event");
                return Err(err);
            }
        };

        self.store.set_state(Arc::new(next)).await?;
        tracing::info!(
            origin = %movement.origin_column_id,
            destination = %movement.destination_column_id,
            title = %movement.card_details.title,
            "card moved"
        );

        publish_then_fire(
            &*self.sink,
            &self.config.card_moved_variable,
            &movement,
            &self.config.card_moved_event,
        )
        .await?;

        Ok(Some(movement))
    }

    /// Publishes which column the user wants to add a card to, then fires
    /// the add-card event.
    pub async fn request_add_card(&self, column_index: usize) -> Result<AddCardRequest> {
        let board = self.store.load_board().await?;
        let request = AddCardRequest {
            column_index,
            column_id: board.column(column_index)?.id.clone(),
        };

        tracing::debug!(column = %request.column_id, column_index, "add card requested");
        publish_then_fire(
            &*self.sink,
            &self.config.add_card_variable,
            &request,
            &self.config.add_card_event,
        )
        .await?;

        Ok(request)
    }
}
