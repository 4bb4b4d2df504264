use std::sync::Arc;
use tracing::debug;

use crate::{
    block_estimator::RecentBlockFeeEstimator,
    chain::ChainQuery,
    config::{EstimatorConfig, FeeSource, TicketFeeConfig},
    error::{Result, TicketFeeError},
    params::NetParams,
    window_estimator::WindowFeeEstimator,
    Amount, FeeEstimate,
};

/// Picks the fee for the next ticket purchase.
///
/// The average fee over the most recent blocks is preferred. When that
/// average is zero, meaning no tickets were bought recently, the fee is
/// taken from the past difficulty window whose stake difficulty best
/// matches the upcoming one.
///
/// # Example
/// ```no_run
/// use ticket_fee::{Amount, MockChainClient, TicketFeeConfig, TicketFeeEstimator};
///
/// # async fn run(client: MockChainClient) -> ticket_fee::Result<()> {
/// let config = TicketFeeConfig::load()?;
/// let estimator = TicketFeeEstimator::from_config(client, &config)?;
///
/// let fee = estimator
///     .estimate(Amount::from_coins(12.5)?)
///     .await?
///     .unwrap_or(Amount::from_coins(0.01)?);
/// # Ok(())
/// # }
/// ```
pub struct TicketFeeEstimator<C> {
    blocks: RecentBlockFeeEstimator<Arc<C>>,
    windows: WindowFeeEstimator<Arc<C>>,
    blocks_to_avg: u32,
    fee_source: FeeSource,
}

impl<C: ChainQuery> TicketFeeEstimator<C> {
    /// Creates an estimator for the given network and settings.
    pub fn new(chain: C, params: &NetParams, settings: &EstimatorConfig) -> Result<Self> {
        if settings.blocks_to_avg == 0 {
            return Err(TicketFeeError::invalid_config(
                "blocks_to_avg must be at least 1",
            ));
        }

        let chain = Arc::new(chain);
        Ok(Self {
            blocks: RecentBlockFeeEstimator::new(Arc::clone(&chain)),
            windows: WindowFeeEstimator::with_windows_to_consider(
                chain,
                params,
                settings.windows_to_consider,
            )?,
            blocks_to_avg: settings.blocks_to_avg,
            fee_source: settings.fee_source,
        })
    }

    /// Creates an estimator from loaded configuration.
    pub fn from_config(chain: C, config: &TicketFeeConfig) -> Result<Self> {
        Self::new(chain, &config.net_params()?, &config.estimator)
    }

    pub fn fee_source(&self) -> FeeSource {
        self.fee_source
    }

    pub fn chain(&self) -> &C {
        self.blocks.chain().as_ref()
    }

    /// Estimates the fee for a ticket bought at `next_stake_difficulty`.
    ///
    /// # Returns
    /// The recent block average when it is non-zero, otherwise the result of
    /// the difficulty window search, which may be `FeeEstimate::NoSignal`.
    pub async fn estimate(&self, next_stake_difficulty: Amount) -> Result<FeeEstimate> {
        let use_median = self.fee_source.use_median();

        let recent = self.blocks.estimate(self.blocks_to_avg, use_median).await?;
        if !recent.is_zero() {
            return Ok(FeeEstimate::Fee(recent));
        }

        debug!(
            "No ticket fees in the last {} blocks, searching difficulty windows",
            self.blocks_to_avg
        );
        self.windows.estimate(next_stake_difficulty, use_median).await
    }
}
