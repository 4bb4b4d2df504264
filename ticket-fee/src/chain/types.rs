use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::Result, Amount};

/// Result of a `ticketfeeinfo` query.
///
/// Only the sections that were asked for are populated; the other is left
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketFeeInfo {
    /// Per-block statistics, most recent block first
    #[serde(rename = "feeinfoblocks", default)]
    pub fee_info_blocks: Vec<FeeBlockStat>,

    /// Per-window statistics, most recent window first
    #[serde(rename = "feeinfowindows", default)]
    pub fee_info_windows: Vec<FeeWindowStat>,
}

/// Ticket fee statistics for one block. Fees are in coins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeBlockStat {
    #[serde(default)]
    pub height: u32,
    /// Number of ticket purchases in the block
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(rename = "mean")]
    pub mean_fee: f64,
    #[serde(rename = "median")]
    pub median_fee: f64,
    #[serde(default)]
    pub stddev: f64,
}

impl FeeBlockStat {
    /// Creates block statistics carrying only the mean and median fee.
    pub fn new(mean_fee: f64, median_fee: f64) -> Self {
        Self {
            mean_fee,
            median_fee,
            ..Self::default()
        }
    }

    /// The mean or median fee of the block, in atoms.
    pub fn selected_fee(&self, use_median: bool) -> Result<Amount> {
        select_fee(self.mean_fee, self.median_fee, use_median)
    }
}

/// Ticket fee statistics for one stake difficulty window. Fees are in coins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeWindowStat {
    #[serde(rename = "startheight")]
    pub start_height: u32,
    #[serde(rename = "endheight")]
    pub end_height: u32,
    /// Number of ticket purchases in the window
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(rename = "mean")]
    pub mean_fee: f64,
    #[serde(rename = "median")]
    pub median_fee: f64,
    #[serde(default)]
    pub stddev: f64,
}

impl FeeWindowStat {
    /// Creates window statistics carrying only heights and the mean and median fee.
    pub fn new(start_height: u32, end_height: u32, mean_fee: f64, median_fee: f64) -> Self {
        Self {
            start_height,
            end_height,
            mean_fee,
            median_fee,
            ..Self::default()
        }
    }

    /// Number of blocks between the start and end height.
    pub fn span(&self) -> u32 {
        self.end_height.saturating_sub(self.start_height)
    }

    /// The mean or median fee of the window, in atoms.
    pub fn selected_fee(&self, use_median: bool) -> Result<Amount> {
        select_fee(self.mean_fee, self.median_fee, use_median)
    }
}

fn select_fee(mean_fee: f64, median_fee: f64, use_median: bool) -> Result<Amount> {
    if use_median {
        Amount::fee_from_coins(median_fee)
    } else {
        Amount::fee_from_coins(mean_fee)
    }
}

/// Hex encoded block hash as returned by the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(String);

impl BlockHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockHash {
    fn from(hash: &str) -> Self {
        Self::new(hash)
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of a block header the estimators read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub hash: BlockHash,
    pub height: u32,
    /// Stake difficulty (ticket price) in atoms
    pub sbits: i64,
    #[serde(default)]
    pub time: i64,
}

impl BlockHeader {
    /// Stake difficulty in effect for this block.
    pub fn stake_difficulty(&self) -> Amount {
        Amount::from_atoms(self.sbits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_ticket_fee_info_response() {
        let value = json!({
            "feeinfomempool": {"number": 0, "min": 0.0, "max": 0.0, "mean": 0.0, "median": 0.0, "stddev": 0.0},
            "feeinfowindows": [
                {"startheight": 4320, "endheight": 4353, "number": 12, "min": 0.01, "max": 0.05, "mean": 0.02, "median": 0.015, "stddev": 0.004},
                {"startheight": 4176, "endheight": 4320, "number": 80, "min": 0.01, "max": 0.1, "mean": 0.03, "median": 0.025, "stddev": 0.01}
            ]
        });

        let info: TicketFeeInfo = serde_json::from_value(value).unwrap();
        assert!(info.fee_info_blocks.is_empty());
        assert_eq!(info.fee_info_windows.len(), 2);
        assert_eq!(info.fee_info_windows[0].span(), 33);
        assert_eq!(info.fee_info_windows[1].number, 80);
        assert_eq!(
            info.fee_info_windows[1].selected_fee(true).unwrap(),
            Amount::from_atoms(2_500_000)
        );
    }

    #[test]
    fn test_selected_fee_picks_mean_or_median() {
        let stat = FeeBlockStat::new(0.02, 0.01);
        assert_eq!(stat.selected_fee(false).unwrap().atoms(), 2_000_000);
        assert_eq!(stat.selected_fee(true).unwrap().atoms(), 1_000_000);
    }

    #[test]
    fn test_selected_fee_rejects_malformed_value() {
        let stat = FeeWindowStat::new(0, 144, f64::NAN, 0.01);
        assert!(stat.selected_fee(false).is_err());
        assert!(stat.selected_fee(true).is_ok());
    }

    #[test]
    fn test_span_never_underflows() {
        assert_eq!(FeeWindowStat::new(100, 50, 0.0, 0.0).span(), 0);
    }

    #[test]
    fn test_parse_block_header() {
        let header: BlockHeader = serde_json::from_value(json!({
            "hash": "00000000000000a1",
            "height": 4176,
            "sbits": 1_250_000_000i64,
            "confirmations": 10
        }))
        .unwrap();
        assert_eq!(header.stake_difficulty(), Amount::from_atoms(1_250_000_000));
        assert_eq!(header.time, 0);
    }
}
