//! # Kanban Board Core
//!
//! Drag-and-drop engine for kanban board widgets.
//!
//! Reordering a card within a column and moving it between columns are pure
//! functions over card sequences ([`domain::reorder`], [`domain::transfer`]).
//! The [`BoardCoordinator`] resolves drag-end events from the UI into a new
//! board value, hands it to a [`BoardStore`], and tells observers what moved
//! through a [`NotificationSink`], always writing the exposed variable before
//! firing the event that announces it.

pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod events;
pub mod notify;
pub mod storage;

// Re-export commonly used types
pub use config::CoordinatorConfig;
pub use coordinator::{apply_drag, BoardCoordinator};
pub use domain::{
    board::{Board, Column, ColumnId},
    card::{Card, CardId},
    reorder::{reorder, transfer, Transfer},
};
pub use error::{BoardError, Result};
pub use events::{AddCardRequest, CardDetails, CardMovement, DragEndEvent, DraggableLocation};
pub use notify::{ExposedState, NotificationSink, RecordingSink};
pub use storage::{BoardStore, MemoryStorage};
