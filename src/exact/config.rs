//! Brute-force search configuration and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_CHECK_INTERVAL: u64 = 1024;

/// Settings for [`brute_force`](super::brute_force).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::exact::BruteForceConfig;
///
/// let config = BruteForceConfig::default()
///     .with_time_limit(Duration::from_secs(5))
///     .with_parallel(true);
/// assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
/// assert!(config.parallel());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BruteForceConfig {
    time_limit: Option<Duration>,
    parallel: bool,
    check_interval: u64,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            parallel: false,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

impl BruteForceConfig {
    /// Stops the search once this much wall time has elapsed.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Spreads the search over the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets how many permutations run between clock reads (minimum 1).
    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Wall-time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Whether the search runs in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Permutations evaluated between clock reads.
    pub fn check_interval(&self) -> u64 {
        self.check_interval.max(1)
    }
}

/// Cooperative cancellation flag shared between a search and its caller.
///
/// Clones share the same flag. The search polls it after every
/// permutation.
///
/// # Examples
///
/// ```
/// use u_tour::exact::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
