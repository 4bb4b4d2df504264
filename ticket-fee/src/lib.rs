//! Ticket fee estimation for automated stake ticket purchasing
//!
//! This library picks a fee to attach to a ticket purchase from the ticket
//! fee statistics a chain daemon keeps for recent blocks and for past stake
//! difficulty windows.
//!
//! # Strategies
//! - [`RecentBlockFeeEstimator`] averages the mean (or median) ticket fee of
//!   the most recent blocks.
//! - [`WindowFeeEstimator`] takes the fee of the past difficulty window whose
//!   stake difficulty is closest to a target difficulty.
//! - [`TicketFeeEstimator`] uses the recent average and falls back to the
//!   window search when recent blocks carried no ticket fees.
//!
//! The daemon is reached through the [`ChainQuery`] trait. The library ships
//! an in-memory [`MockChainClient`] but no RPC transport.
//!
//! # Example
//! ```no_run
//! use ticket_fee::{Amount, FeeBlockStat, MockChainClient, RecentBlockFeeEstimator};
//!
//! # async fn run() -> ticket_fee::Result<()> {
//! let client = MockChainClient::new().with_block_stats(vec![
//!     FeeBlockStat::new(0.0001, 0.0001),
//!     FeeBlockStat::new(0.0002, 0.0002),
//!     FeeBlockStat::new(0.0003, 0.0003),
//! ]);
//!
//! let estimator = RecentBlockFeeEstimator::new(client);
//! let fee = estimator.estimate(3, false).await?;
//! assert_eq!(fee, Amount::from_atoms(20_000));
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod chain;
pub mod config;
pub mod error;

// Data structures
mod amount;
mod fee_estimate;
mod params;

// Estimators
mod block_estimator;
mod ticket_fee_estimator;
mod window_estimator;

// Internal implementation modules
pub(crate) mod internal;

// Public exports
pub use amount::{Amount, ATOMS_PER_COIN};
pub use block_estimator::RecentBlockFeeEstimator;
pub use chain::{
    BlockHash, BlockHeader, ChainError, ChainQuery, FeeBlockStat, FeeWindowStat, MockChainClient,
    TicketFeeInfo,
};
pub use crate::config::{EstimatorConfig, FeeSource, TicketFeeConfig};
pub use error::{Result, TicketFeeError};
pub use fee_estimate::FeeEstimate;
pub use params::NetParams;
pub use ticket_fee_estimator::TicketFeeEstimator;
pub use window_estimator::{WindowFeeEstimator, DEFAULT_WINDOWS_TO_CONSIDER};
