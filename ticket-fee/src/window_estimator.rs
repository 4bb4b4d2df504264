use tracing::{debug, info, warn};

use crate::{
    chain::ChainQuery,
    error::{Result, TicketFeeError},
    internal::WindowRanking,
    params::NetParams,
    Amount, FeeEstimate,
};

/// Number of difficulty windows considered by default.
pub const DEFAULT_WINDOWS_TO_CONSIDER: u32 = 20;

/// Estimates a ticket fee from past stake difficulty windows.
///
/// Used when recent blocks do not carry enough fee information. The estimator
/// looks at the most recent difficulty windows and takes the fee of the one
/// whose stake difficulty is closest to the target difficulty.
///
/// # Example
/// ```no_run
/// use ticket_fee::{Amount, MockChainClient, NetParams, WindowFeeEstimator};
///
/// # async fn run(client: MockChainClient) -> ticket_fee::Result<()> {
/// let estimator = WindowFeeEstimator::new(client, &NetParams::MAINNET);
///
/// let next_stake_diff = Amount::from_coins(12.5)?;
/// let estimate = estimator.estimate(next_stake_diff, false).await?;
/// let fee = estimate.unwrap_or(Amount::from_coins(0.01)?);
/// # Ok(())
/// # }
/// ```
pub struct WindowFeeEstimator<C> {
    chain: C,
    stake_diff_window_size: i64,
    windows_to_consider: u32,
}

impl<C: ChainQuery> WindowFeeEstimator<C> {
    /// Creates an estimator looking at the default number of windows.
    pub fn new(chain: C, params: &NetParams) -> Self {
        Self {
            chain,
            stake_diff_window_size: params.stake_diff_window_size,
            windows_to_consider: DEFAULT_WINDOWS_TO_CONSIDER,
        }
    }

    /// Creates an estimator looking at `windows_to_consider` windows.
    pub fn with_windows_to_consider(
        chain: C,
        params: &NetParams,
        windows_to_consider: u32,
    ) -> Result<Self> {
        if windows_to_consider == 0 {
            return Err(TicketFeeError::invalid_config(
                "windows_to_consider must be at least 1",
            ));
        }

        Ok(Self {
            windows_to_consider,
            ..Self::new(chain, params)
        })
    }

    pub fn windows_to_consider(&self) -> u32 {
        self.windows_to_consider
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Finds the fee of the window whose difficulty is closest to `target`.
    ///
    /// Windows are skipped when they are the first (most recent) window and
    /// not yet complete, or when their selected fee is zero because no
    /// tickets were bought in them. Among the remaining windows the smallest
    /// absolute difficulty difference wins; ties go to the window reported
    /// first.
    ///
    /// # Arguments
    /// * `target` - Stake difficulty to match
    /// * `use_median` - Use each window's median fee instead of its mean
    ///
    /// # Returns
    /// `FeeEstimate::NoSignal` when every window was skipped.
    ///
    /// # Errors
    /// `InsufficientData` when the chain reports no windows at all. Any chain
    /// query failure or malformed fee value aborts the estimation.
    pub async fn estimate(&self, target: Amount, use_median: bool) -> Result<FeeEstimate> {
        let info = self
            .chain
            .ticket_fee_info(None, Some(self.windows_to_consider))
            .await?;

        if info.fee_info_windows.is_empty() {
            return Err(TicketFeeError::insufficient_data(
                "not enough windows to find mean fee available",
            ));
        }

        let mut ranking = WindowRanking::with_capacity(target, info.fee_info_windows.len());

        for (i, window) in info.fee_info_windows.iter().enumerate() {
            if i == 0 && i64::from(window.span()) < self.stake_diff_window_size {
                debug!(
                    "Skipping partial window {}-{} ({} of {} blocks)",
                    window.start_height,
                    window.end_height,
                    window.span(),
                    self.stake_diff_window_size
                );
                continue;
            }

            let hash = self
                .chain
                .get_block_hash(i64::from(window.start_height))
                .await?;
            let header = self.chain.get_block_header(&hash).await?;
            let difficulty = header.stake_difficulty();

            let fee = window.selected_fee(use_median)?;
            if fee.is_zero() {
                debug!(
                    "Skipping window {}-{} with no ticket fee data",
                    window.start_height, window.end_height
                );
                continue;
            }

            let ranked = ranking.push(difficulty, fee);
            debug!(
                "Window {}-{}: difficulty {}, difference {} atoms, fee {}",
                window.start_height, window.end_height, ranked.difficulty, ranked.difference, fee
            );
        }

        let candidates = ranking.len();
        match ranking.closest() {
            Some(best) => {
                info!(
                    "Closest of {} windows has difficulty {} (target {}), fee {}",
                    candidates, best.difficulty, target, best.fee
                );
                Ok(FeeEstimate::Fee(best.fee))
            }
            None => {
                warn!(
                    "No usable fee data in {} difficulty windows",
                    info.fee_info_windows.len()
                );
                Ok(FeeEstimate::NoSignal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainCall, FeeWindowStat, MockChainClient};

    #[tokio::test]
    async fn test_queries_only_the_window_section() {
        let client = MockChainClient::new()
            .with_window_stats(vec![FeeWindowStat::new(144, 288, 0.01, 0.01)])
            .with_block(144, 1_000);
        let estimator = WindowFeeEstimator::new(client, &NetParams::MAINNET);

        estimator.estimate(Amount::from_atoms(1_000), false).await.unwrap();

        assert_eq!(
            estimator.chain().calls()[0],
            ChainCall::TicketFeeInfo {
                blocks: None,
                windows: Some(DEFAULT_WINDOWS_TO_CONSIDER),
            }
        );
    }

    #[tokio::test]
    async fn test_partial_first_window_is_not_looked_up() {
        let client = MockChainClient::new()
            .with_window_stats(vec![
                FeeWindowStat::new(288, 300, 0.05, 0.05),
                FeeWindowStat::new(144, 288, 0.01, 0.01),
            ])
            .with_block(144, 1_000);
        let estimator = WindowFeeEstimator::new(client, &NetParams::MAINNET);

        let estimate = estimator.estimate(Amount::from_atoms(1_000), false).await.unwrap();
        assert_eq!(estimate, FeeEstimate::Fee(Amount::from_atoms(1_000_000)));
        assert!(!estimator
            .chain()
            .calls()
            .contains(&ChainCall::GetBlockHash(288)));
    }

    #[test]
    fn test_zero_windows_to_consider_is_rejected() {
        let result =
            WindowFeeEstimator::with_windows_to_consider(MockChainClient::new(), &NetParams::MAINNET, 0);
        assert!(matches!(result, Err(TicketFeeError::InvalidConfig(_))));
    }
}
