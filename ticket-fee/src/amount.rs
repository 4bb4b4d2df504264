use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TicketFeeError};

/// Number of atoms in one coin.
pub const ATOMS_PER_COIN: i64 = 100_000_000;

/// A monetary value in atoms, the smallest unit of the currency.
///
/// Both ticket fees and stake difficulty (the ticket price) are carried as
/// amounts. The chain's RPC interface reports fee statistics as floating point
/// coin values; [`Amount::from_coins`] converts them the same way the chain's
/// own amount type does.
///
/// # Example
/// ```
/// use ticket_fee::Amount;
///
/// let fee = Amount::from_coins(0.0015).unwrap();
/// assert_eq!(fee.atoms(), 150_000);
/// assert_eq!(fee.to_string(), "0.0015 HC");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount. As a fee it means "no fee data".
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from a number of atoms.
    pub const fn from_atoms(atoms: i64) -> Self {
        Self(atoms)
    }

    /// Converts a coin value into atoms, rounding half away from zero.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN, infinite values and values that do
    /// not fit in 64 bits of atoms.
    pub fn from_coins(coins: f64) -> Result<Self> {
        if coins.is_nan() {
            return Err(TicketFeeError::invalid_amount("coin value is NaN"));
        }
        if coins.is_infinite() {
            return Err(TicketFeeError::invalid_amount(format!(
                "coin value is {}",
                coins
            )));
        }

        let atoms = (coins * ATOMS_PER_COIN as f64).round();
        if atoms >= i64::MAX as f64 || atoms < i64::MIN as f64 {
            return Err(TicketFeeError::invalid_amount(format!(
                "{} coins is out of range",
                coins
            )));
        }

        Ok(Self(atoms as i64))
    }

    /// Converts a coin value reported as a fee into atoms.
    ///
    /// Same as [`Amount::from_coins`], but a negative value is malformed
    /// since fees are never negative.
    pub fn fee_from_coins(coins: f64) -> Result<Self> {
        let amount = Self::from_coins(coins)?;
        if amount.0 < 0 {
            return Err(TicketFeeError::invalid_amount(format!(
                "negative fee of {} coins",
                coins
            )));
        }
        Ok(amount)
    }

    /// Returns the number of atoms.
    pub const fn atoms(self) -> i64 {
        self.0
    }

    /// Returns the value in coins.
    pub fn to_coins(self) -> f64 {
        self.0 as f64 / ATOMS_PER_COIN as f64
    }

    /// Returns true if the amount is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Absolute distance between two amounts, in atoms.
    pub const fn abs_diff(self, other: Amount) -> u64 {
        self.0.abs_diff(other.0)
    }

    /// Checked addition, `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked division by a count, `None` when `divisor` is zero.
    pub fn checked_div(self, divisor: u32) -> Option<Amount> {
        self.0.checked_div(i64::from(divisor)).map(Amount)
    }
}

impl From<i64> for Amount {
    fn from(atoms: i64) -> Self {
        Self(atoms)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HC", self.to_coins())
    }
}
