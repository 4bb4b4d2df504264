use thiserror::Error;

use crate::chain::ChainError;

/// Main error type for the ticket-fee library.
#[derive(Error, Debug)]
pub enum TicketFeeError {
    /// A call to the chain query service failed.
    #[error("Chain query failed: {0}")]
    Query(#[from] ChainError),

    /// The chain returned no data to estimate from.
    #[error("Insufficient data for estimation: {0}")]
    InsufficientData(String),

    /// A fee value could not be converted into an amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid estimator parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Type alias for Results in this library.
pub type Result<T> = std::result::Result<T, TicketFeeError>;

impl TicketFeeError {
    /// Creates an InsufficientData error.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }

    /// Creates an InvalidAmount error.
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Creates an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true for failures that came out of talking to the chain,
    /// including fee values the chain handed back in a malformed state.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::Query(_) | Self::InvalidAmount(_))
    }
}
