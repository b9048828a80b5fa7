//! Explicit waits.
//!
//! All waiting in the suite is explicit polling with a deadline; the
//! driver-level implicit wait only covers raw element lookup. Conditions are
//! async closures so they can query the driver between polls.

use std::future::Future;
use std::time::{Duration, Instant};

/// Default deadline for explicit waits.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default pause between condition polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Timeout and poll cadence for one wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Give up once this much time has elapsed.
    pub timeout: Duration,
    /// Pause between condition checks.
    pub poll_interval: Duration,
}

impl WaitPolicy {
    /// Policy with explicit timeout and poll interval.
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Policy with the given timeout and the default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Poll `condition` until it returns `true` or the policy's deadline passes.
///
/// The condition is always evaluated at least once, so a zero timeout still
/// observes the current state. Returns whether the condition was met; the
/// caller decides whether a timeout is an error.
pub async fn poll_until<F, Fut>(mut condition: F, policy: WaitPolicy) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = Instant::now();
    loop {
        if condition().await {
            return true;
        }
        if start.elapsed() >= policy.timeout {
            return false;
        }
        tokio::time::sleep(policy.poll_interval).await;
    }
}
