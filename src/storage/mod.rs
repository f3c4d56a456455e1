use crate::{domain::Board, error::Result};
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

/// Holder of the current board value.
///
/// `set_state` replaces the whole board at once: a reader sees either the
/// previous `Arc<Board>` or the new one, and can tell them apart with
/// [`Arc::ptr_eq`].
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Loads the current board
    async fn load_board(&self) -> Result<Arc<Board>>;

    /// Replaces the current board
    async fn set_state(&self, board: Arc<Board>) -> Result<()>;
}
