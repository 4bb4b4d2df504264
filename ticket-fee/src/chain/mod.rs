//! Chain daemon query interface consumed by the estimators

mod mock_client;
mod traits;
mod types;

pub use mock_client::{ChainCall, MockChainClient};
pub use traits::{ChainError, ChainQuery};
pub use types::{BlockHash, BlockHeader, FeeBlockStat, FeeWindowStat, TicketFeeInfo};
