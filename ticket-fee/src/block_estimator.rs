use tracing::{debug, warn};

use crate::{
    chain::ChainQuery,
    error::{Result, TicketFeeError},
    Amount,
};

/// Averages ticket fees over the most recent blocks.
pub struct RecentBlockFeeEstimator<C> {
    chain: C,
}

impl<C: ChainQuery> RecentBlockFeeEstimator<C> {
    pub fn new(chain: C) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Average of the per-block mean (or median) ticket fee over the last
    /// `blocks_to_average` blocks.
    ///
    /// The sum is divided by `blocks_to_average`, not by the number of blocks
    /// the chain returned, so a short answer lowers the average instead of
    /// failing. Division truncates to whole atoms.
    ///
    /// # Errors
    /// `InvalidConfig` for a zero block count. Any chain query failure or
    /// malformed fee value aborts the estimation.
    pub async fn estimate(&self, blocks_to_average: u32, use_median: bool) -> Result<Amount> {
        if blocks_to_average == 0 {
            return Err(TicketFeeError::invalid_config(
                "blocks_to_average must be at least 1",
            ));
        }

        let info = self
            .chain
            .ticket_fee_info(Some(blocks_to_average), None)
            .await?;

        if info.fee_info_blocks.len() < blocks_to_average as usize {
            warn!(
                "Asked for {} blocks of fee info, got {}",
                blocks_to_average,
                info.fee_info_blocks.len()
            );
        }

        let mut sum = Amount::ZERO;
        for block in &info.fee_info_blocks {
            let fee = block.selected_fee(use_median)?;
            sum = sum.checked_add(fee).ok_or_else(|| {
                TicketFeeError::invalid_amount("ticket fee sum overflows")
            })?;
        }

        let average = sum
            .checked_div(blocks_to_average)
            .ok_or_else(|| TicketFeeError::invalid_config("blocks_to_average must be at least 1"))?;

        debug!(
            "Average ticket fee over {} blocks: {} ({})",
            blocks_to_average,
            average,
            if use_median { "median" } else { "mean" }
        );

        Ok(average)
    }
}
