//! Poll pacing configuration
//!
//! The defaults poll at a fixed small interval with no bound on attempts or
//! elapsed time: the condition alone decides when the wait ends. Attempt
//! budgets, deadlines, backoff, and jitter are all opt-in.

use std::time::Duration;

/// Interval between unsuccessful attempts when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);

/// Default cap on the per-attempt delay once a backoff multiplier is set.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// Configuration for the poll loop
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between unsuccessful attempts (zero means immediate re-check)
    pub delay: Duration,
    /// Multiplier applied to the delay per attempt (1.0 keeps it fixed)
    pub backoff_multiplier: f64,
    /// Cap on the per-attempt delay; never clips the base delay itself
    pub max_delay: Duration,
    /// Optional jitter factor (0.0 to 1.0) to add randomness
    pub jitter: f64,
    /// Optional bound on total attempts (None polls until the condition holds)
    pub max_attempts: Option<u32>,
    /// Optional bound on total elapsed wait time
    pub deadline: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            backoff_multiplier: 1.0,
            max_delay: DEFAULT_MAX_DELAY,
            jitter: 0.0,
            max_attempts: None,
            deadline: None,
        }
    }
}

impl PollConfig {
    /// Create a config polling at a fixed interval
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Set the delay between unsuccessful attempts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the per-attempt delay multiplier (e.g., 2.0 doubles it each time)
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Set the cap on the per-attempt delay
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Set jitter factor (0.0 to 1.0)
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Bound the wait to at most `attempts` condition checks
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Bound the wait to at most `deadline` of total elapsed time
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
