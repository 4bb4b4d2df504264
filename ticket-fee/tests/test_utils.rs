#![allow(dead_code)]

use ticket_fee::{FeeBlockStat, FeeWindowStat, MockChainClient, NetParams};

/// Window size of the network the tests run against
pub const WINDOW_SIZE: u32 = NetParams::MAINNET.stake_diff_window_size as u32;

/// Height at which the most recent full window in fixtures starts
pub const LATEST_WINDOW_START: u32 = 100 * WINDOW_SIZE;

/// Shared fixture builders for estimator tests
pub struct TestUtils;

impl TestUtils {
    /// Converts atoms to the coin value the daemon would report
    pub fn coins(atoms: i64) -> f64 {
        atoms as f64 / 100_000_000.0
    }

    /// Block fee statistics with fees given in atoms
    pub fn block_stat(mean_atoms: i64, median_atoms: i64) -> FeeBlockStat {
        FeeBlockStat::new(Self::coins(mean_atoms), Self::coins(median_atoms))
    }

    /// Start height of the `index`-th full window counting back from the most recent
    pub fn window_start(index: usize) -> u32 {
        LATEST_WINDOW_START - index as u32 * WINDOW_SIZE
    }

    /// A full window with fees given in atoms
    pub fn full_window(index: usize, mean_atoms: i64, median_atoms: i64) -> FeeWindowStat {
        let start = Self::window_start(index);
        FeeWindowStat::new(
            start,
            start + WINDOW_SIZE,
            Self::coins(mean_atoms),
            Self::coins(median_atoms),
        )
    }

    /// The still open window after the most recent full one
    pub fn partial_window(blocks: u32, mean_atoms: i64) -> FeeWindowStat {
        let start = LATEST_WINDOW_START + WINDOW_SIZE;
        FeeWindowStat::new(
            start,
            start + blocks,
            Self::coins(mean_atoms),
            Self::coins(mean_atoms),
        )
    }

    /// A mock serving full windows, most recent first, described as
    /// `(stake difficulty, mean fee)` pairs in atoms. Median fees are
    /// twice the mean so tests can tell them apart.
    pub fn client_with_windows(windows: &[(i64, i64)]) -> MockChainClient {
        let mut stats = Vec::with_capacity(windows.len());
        let mut client = MockChainClient::new();

        for (index, &(difficulty, mean)) in windows.iter().enumerate() {
            stats.push(Self::full_window(index, mean, mean * 2));
            client = client.with_block(i64::from(Self::window_start(index)), difficulty);
        }

        client.with_window_stats(stats)
    }

    /// Installs a tracing subscriber writing to the test output
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ticket_fee=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}
