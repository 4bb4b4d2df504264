use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::{
    BlockHash, BlockHeader, ChainError, ChainQuery, FeeBlockStat, FeeWindowStat, TicketFeeInfo,
};

/// Error code the mock uses for every injected or lookup failure.
const MOCK_ERROR_CODE: i32 = -5;

/// A call made against a [`MockChainClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainCall {
    TicketFeeInfo {
        blocks: Option<u32>,
        windows: Option<u32>,
    },
    GetBlockHash(i64),
    GetBlockHeader(BlockHash),
}

/// In-memory chain query service for tests
///
/// Serves fixed fee statistics and a height to stake difficulty table.
/// Fee-info queries return the first `n` entries of each configured list,
/// mirroring a daemon that reports the most recent entries first.
#[derive(Clone, Default)]
pub struct MockChainClient {
    blocks: Vec<FeeBlockStat>,
    windows: Vec<FeeWindowStat>,
    hashes: HashMap<i64, BlockHash>,
    headers: HashMap<BlockHash, BlockHeader>,
    fail_fee_info: Option<String>,
    fail_hash_at: HashSet<i64>,
    fail_header_at: HashSet<i64>,
    calls: Arc<Mutex<Vec<ChainCall>>>,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-block fee statistics to serve, most recent first.
    pub fn with_block_stats(mut self, blocks: Vec<FeeBlockStat>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Per-window fee statistics to serve, most recent first.
    pub fn with_window_stats(mut self, windows: Vec<FeeWindowStat>) -> Self {
        self.windows = windows;
        self
    }

    /// Registers a main chain block at `height` with the given stake difficulty.
    pub fn with_block(mut self, height: i64, sbits: i64) -> Self {
        let hash = Self::hash_for_height(height);
        self.headers.insert(
            hash.clone(),
            BlockHeader {
                hash: hash.clone(),
                height: u32::try_from(height).unwrap_or_default(),
                sbits,
                time: 0,
            },
        );
        self.hashes.insert(height, hash);
        self
    }

    /// Makes every fee-info query fail with `message`.
    pub fn fail_fee_info(mut self, message: impl Into<String>) -> Self {
        self.fail_fee_info = Some(message.into());
        self
    }

    /// Makes the block hash lookup at `height` fail.
    pub fn fail_block_hash_at(mut self, height: i64) -> Self {
        self.fail_hash_at.insert(height);
        self
    }

    /// Makes the header lookup for the block at `height` fail.
    pub fn fail_block_header_at(mut self, height: i64) -> Self {
        self.fail_header_at.insert(height);
        self
    }

    /// The hash the mock assigns to the block at `height`.
    pub fn hash_for_height(height: i64) -> BlockHash {
        BlockHash::new(format!("{:064x}", height))
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<ChainCall> {
        self.lock_calls().clone()
    }

    fn record(&self, call: ChainCall) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<ChainCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn take_recent<T: Clone>(items: &[T], count: Option<u32>) -> Vec<T> {
    match count {
        Some(n) => items.iter().take(n as usize).cloned().collect(),
        None => Vec::new(),
    }
}

#[async_trait]
impl ChainQuery for MockChainClient {
    async fn ticket_fee_info(
        &self,
        blocks: Option<u32>,
        windows: Option<u32>,
    ) -> Result<TicketFeeInfo, ChainError> {
        self.record(ChainCall::TicketFeeInfo { blocks, windows });

        if let Some(message) = &self.fail_fee_info {
            return Err(ChainError::rpc(MOCK_ERROR_CODE, message.clone()));
        }

        Ok(TicketFeeInfo {
            fee_info_blocks: take_recent(&self.blocks, blocks),
            fee_info_windows: take_recent(&self.windows, windows),
        })
    }

    async fn get_block_hash(&self, height: i64) -> Result<BlockHash, ChainError> {
        self.record(ChainCall::GetBlockHash(height));

        if self.fail_hash_at.contains(&height) {
            return Err(ChainError::rpc(
                MOCK_ERROR_CODE,
                format!("block hash lookup failed at height {}", height),
            ));
        }

        self.hashes.get(&height).cloned().ok_or_else(|| {
            ChainError::rpc(MOCK_ERROR_CODE, format!("no block at height {}", height))
        })
    }

    async fn get_block_header(&self, hash: &BlockHash) -> Result<BlockHeader, ChainError> {
        self.record(ChainCall::GetBlockHeader(hash.clone()));

        let header = self.headers.get(hash).cloned().ok_or_else(|| {
            ChainError::rpc(MOCK_ERROR_CODE, format!("block {} not found", hash))
        })?;

        if self.fail_header_at.contains(&i64::from(header.height)) {
            return Err(ChainError::rpc(
                MOCK_ERROR_CODE,
                format!("block header lookup failed for {}", hash),
            ));
        }

        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fee_info_sections_follow_requested_counts() {
        let client = MockChainClient::new()
            .with_block_stats(vec![FeeBlockStat::new(0.01, 0.01); 4])
            .with_window_stats(vec![FeeWindowStat::new(0, 144, 0.02, 0.02); 3]);

        let info = client.ticket_fee_info(Some(2), None).await.unwrap();
        assert_eq!(info.fee_info_blocks.len(), 2);
        assert!(info.fee_info_windows.is_empty());

        let info = client.ticket_fee_info(None, Some(20)).await.unwrap();
        assert!(info.fee_info_blocks.is_empty());
        assert_eq!(info.fee_info_windows.len(), 3);
    }

    #[tokio::test]
    async fn test_block_lookup_round_trip() {
        let client = MockChainClient::new().with_block(144, 2_000_000_000);

        let hash = client.get_block_hash(144).await.unwrap();
        assert_eq!(hash, MockChainClient::hash_for_height(144));

        let header = client.get_block_header(&hash).await.unwrap();
        assert_eq!(header.sbits, 2_000_000_000);
        assert_eq!(header.height, 144);

        assert_eq!(
            client.calls(),
            vec![ChainCall::GetBlockHash(144), ChainCall::GetBlockHeader(hash)]
        );
    }

    #[tokio::test]
    async fn test_unknown_height_is_an_rpc_error() {
        let client = MockChainClient::new();
        let err = client.get_block_hash(7).await.unwrap_err();
        assert!(matches!(err, ChainError::Rpc { code: MOCK_ERROR_CODE, .. }));
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let client = MockChainClient::new()
            .with_block(10, 1)
            .with_block(20, 2)
            .fail_block_hash_at(10)
            .fail_block_header_at(20);

        assert!(client.get_block_hash(10).await.is_err());
        let hash = client.get_block_hash(20).await.unwrap();
        assert!(client.get_block_header(&hash).await.is_err());

        let client = client.fail_fee_info("daemon offline");
        let err = client.ticket_fee_info(Some(1), None).await.unwrap_err();
        assert!(err.to_string().contains("daemon offline"));
    }
}
