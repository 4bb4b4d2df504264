use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Amount;

/// Outcome of a ticket fee estimation.
///
/// `NoSignal` means the chain had data but none of it carried a usable fee,
/// e.g. every difficulty window was either incomplete or had no ticket
/// purchases. Callers should fall back to a default fee in that case.
///
/// # Example
/// ```
/// use ticket_fee::{Amount, FeeEstimate};
///
/// let default_fee = Amount::from_atoms(1_000_000);
///
/// assert_eq!(FeeEstimate::NoSignal.unwrap_or(default_fee), default_fee);
/// assert_eq!(
///     FeeEstimate::Fee(Amount::from_atoms(250_000)).unwrap_or(default_fee),
///     Amount::from_atoms(250_000)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum FeeEstimate {
    /// No usable fee data was found
    NoSignal,
    /// Estimated fee
    Fee(Amount),
}

impl FeeEstimate {
    /// The estimated fee, with `NoSignal` reported as zero.
    pub fn amount(&self) -> Amount {
        match self {
            FeeEstimate::NoSignal => Amount::ZERO,
            FeeEstimate::Fee(amount) => *amount,
        }
    }

    /// The estimated fee, if there is one.
    pub fn fee(&self) -> Option<Amount> {
        match self {
            FeeEstimate::NoSignal => None,
            FeeEstimate::Fee(amount) => Some(*amount),
        }
    }

    pub fn is_no_signal(&self) -> bool {
        matches!(self, FeeEstimate::NoSignal)
    }

    /// The estimated fee, or `fallback` when there is no signal.
    pub fn unwrap_or(&self, fallback: Amount) -> Amount {
        self.fee().unwrap_or(fallback)
    }
}

impl From<Option<Amount>> for FeeEstimate {
    fn from(fee: Option<Amount>) -> Self {
        fee.map_or(FeeEstimate::NoSignal, FeeEstimate::Fee)
    }
}

impl fmt::Display for FeeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeEstimate::NoSignal => f.write_str("no signal"),
            FeeEstimate::Fee(amount) => write!(f, "{}", amount),
        }
    }
}
