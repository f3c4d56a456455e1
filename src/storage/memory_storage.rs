use crate::{domain::Board, error::Result, storage::BoardStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Board state kept in memory
#[derive(Default)]
pub struct MemoryStorage {
    board: RwLock<Arc<Board>>,
}

impl MemoryStorage {
    pub fn new(board: Board) -> Self {
        Self {
            board: RwLock::new(Arc::new(board)),
        }
    }
}

#[async_trait]
impl BoardStore for MemoryStorage {
    async fn load_board(&self) -> Result<Arc<Board>> {
        Ok(Arc::clone(&*self.board.read().await))
    }

    async fn set_state(&self, board: Arc<Board>) -> Result<()> {
        *self.board.write().await = board;
        Ok(())
    }
}
