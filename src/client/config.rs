//! Fetcher configuration.

use std::time::Duration;

/// Configuration for a [`Fetcher`](crate::client::Fetcher).
///
/// The defaults give four attempts in total (one initial request plus three
/// retries) separated by a fixed 500 ms pause, with no per-request timeout.
///
/// # Examples
///
/// ```
/// use fetchkit::client::FetcherConfig;
///
/// let config = FetcherConfig {
///     retry_delay_ms: 50,
///     ..Default::default()
/// };
/// assert_eq!(config.max_attempts(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Fixed pause between attempts, in milliseconds
    pub retry_delay_ms: u64,
    /// Optional timeout for each attempt, in milliseconds
    pub request_timeout_ms: Option<u64>,
    /// Log a warning for every retry
    pub enable_logging: bool,
}

impl FetcherConfig {
    /// Total number of attempts, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Pause between attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 500,
            request_timeout_ms: None,
            enable_logging: true,
        }
    }
}
