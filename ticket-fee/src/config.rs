//! Estimator configuration

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    error::{Result, TicketFeeError},
    params::NetParams,
    window_estimator::DEFAULT_WINDOWS_TO_CONSIDER,
};

/// Which per-block and per-window fee statistic to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeSource {
    #[default]
    Mean,
    Median,
}

impl FeeSource {
    pub fn use_median(self) -> bool {
        matches!(self, FeeSource::Median)
    }
}

/// Top-level configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TicketFeeConfig {
    /// Network name: mainnet, testnet or simnet (default: mainnet)
    pub network: String,
    pub estimator: EstimatorConfig,
}

impl Default for TicketFeeConfig {
    fn default() -> Self {
        Self {
            network: "mainnet".to_string(),
            estimator: EstimatorConfig::default(),
        }
    }
}

/// Fee estimator settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Number of recent blocks to average fees over (default: 11)
    pub blocks_to_avg: u32,
    /// Number of difficulty windows to search when recent blocks have no fee data (default: 20)
    pub windows_to_consider: u32,
    /// Fee statistic to use (default: mean)
    pub fee_source: FeeSource,
}

impl EstimatorConfig {
    pub const DEFAULT_BLOCKS_TO_AVG: u32 = 11;
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            blocks_to_avg: Self::DEFAULT_BLOCKS_TO_AVG,
            windows_to_consider: DEFAULT_WINDOWS_TO_CONSIDER,
            fee_source: FeeSource::Mean,
        }
    }
}

impl TicketFeeConfig {
    /// Load configuration from file and environment variables
    ///
    /// The file is taken from `TICKETFEE_CONFIG_FILE` if set, otherwise
    /// `config/default` and `config/ticketfee` are tried. Environment
    /// variables prefixed with `TICKETFEE_` override file values, with `__`
    /// separating nested keys (`TICKETFEE_ESTIMATOR__BLOCKS_TO_AVG`).
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder_with_defaults()?;

        if let Ok(config_file) = std::env::var("TICKETFEE_CONFIG_FILE") {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        } else {
            builder = builder
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/ticketfee").required(false));
        }

        builder = builder.add_source(Self::environment());

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Self::builder_with_defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the estimators cannot work with
    pub fn validate(&self) -> Result<()> {
        NetParams::from_name(&self.network)?;

        if self.estimator.blocks_to_avg == 0 {
            return Err(TicketFeeError::invalid_config(
                "estimator.blocks_to_avg must be at least 1",
            ));
        }
        if self.estimator.windows_to_consider == 0 {
            return Err(TicketFeeError::invalid_config(
                "estimator.windows_to_consider must be at least 1",
            ));
        }

        Ok(())
    }

    /// Parameters of the configured network
    pub fn net_params(&self) -> Result<NetParams> {
        NetParams::from_name(&self.network)
    }

    fn builder_with_defaults(
    ) -> std::result::Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        let defaults = EstimatorConfig::default();
        Config::builder()
            .set_default("network", "mainnet")?
            .set_default("estimator.blocks_to_avg", i64::from(defaults.blocks_to_avg))?
            .set_default(
                "estimator.windows_to_consider",
                i64::from(defaults.windows_to_consider),
            )?
            .set_default("estimator.fee_source", "mean")
    }

    fn environment() -> Environment {
        Environment::with_prefix("TICKETFEE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}
