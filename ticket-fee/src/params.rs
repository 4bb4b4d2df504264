use crate::error::{Result, TicketFeeError};

/// Network parameters the estimators depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetParams {
    /// Network name as used in configuration
    pub name: &'static str,

    /// Number of blocks in one stake difficulty adjustment window
    pub stake_diff_window_size: i64,
}

impl NetParams {
    /// Main network.
    pub const MAINNET: NetParams = NetParams {
        name: "mainnet",
        stake_diff_window_size: 144,
    };

    /// Public test network.
    pub const TESTNET: NetParams = NetParams {
        name: "testnet",
        stake_diff_window_size: 144,
    };

    /// Private simulation network.
    pub const SIMNET: NetParams = NetParams {
        name: "simnet",
        stake_diff_window_size: 8,
    };

    /// Looks up the parameters of a network by name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::MAINNET),
            "testnet" => Ok(Self::TESTNET),
            "simnet" => Ok(Self::SIMNET),
            other => Err(TicketFeeError::invalid_config(format!(
                "unknown network '{}'",
                other
            ))),
        }
    }
}

impl Default for NetParams {
    fn default() -> Self {
        Self::MAINNET
    }
}
