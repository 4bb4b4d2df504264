use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::{BlockHash, BlockHeader, TicketFeeInfo};

/// Errors reported by a chain query service
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format")]
    InvalidResponse,

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl ChainError {
    /// Creates an Rpc error.
    pub fn rpc(code: i32, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }
}

/// Queries the estimators need from a chain daemon
#[async_trait]
pub trait ChainQuery: Send + Sync {
    /// Fee statistics for recent blocks and difficulty windows.
    ///
    /// `blocks` and `windows` are the number of most recent blocks and
    /// windows to report on; `None` omits that section of the result.
    async fn ticket_fee_info(
        &self,
        blocks: Option<u32>,
        windows: Option<u32>,
    ) -> Result<TicketFeeInfo, ChainError>;

    /// Hash of the main chain block at `height`.
    async fn get_block_hash(&self, height: i64) -> Result<BlockHash, ChainError>;

    /// Header of the block with the given hash.
    async fn get_block_header(&self, hash: &BlockHash) -> Result<BlockHeader, ChainError>;
}

#[async_trait]
impl<T: ChainQuery + ?Sized> ChainQuery for Arc<T> {
    async fn ticket_fee_info(
        &self,
        blocks: Option<u32>,
        windows: Option<u32>,
    ) -> Result<TicketFeeInfo, ChainError> {
        (**self).ticket_fee_info(blocks, windows).await
    }

    async fn get_block_hash(&self, height: i64) -> Result<BlockHash, ChainError> {
        (**self).get_block_hash(height).await
    }

    async fn get_block_header(&self, hash: &BlockHash) -> Result<BlockHeader, ChainError> {
        (**self).get_block_header(hash).await
    }
}
