//! Condition polling loop
//!
//! Releases control back to the caller only once a user-defined condition
//! becomes true, checking on an interval rather than busy-spinning.
//!
//! # Algorithm
//!
//! - The first check runs immediately, with no initial delay
//! - A check that signals completion resolves the wait with no extra delay
//! - Unsuccessful checks are separated by the configured delay; the sleep is
//!   cut short by a deferred [`Resolver`], a cancellation, or the deadline
//! - A predicate error aborts the wait and propagates
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use recheck::{PollConfig, Poller};
//!
//! // Zero-argument form: poll a flag with the defaults.
//! recheck::wait_until(|| queue.is_empty()).await;
//!
//! // Full form: attempt index plus an explicit resolve signal.
//! let poller = Poller::new(PollConfig::new(Duration::from_millis(20)));
//! poller
//!     .wait(|attempt| {
//!         if attempt.index() > 4 {
//!             attempt.resolve();
//!         }
//!         false
//!     })
//!     .await?;
//! ```

use std::convert::Infallible;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{instrument, trace};

use crate::config::PollConfig;
use crate::error::{BoxError, PollError, Result};
use crate::resolve::{Attempt, Resolver};

/// Polls a caller-supplied condition until it holds.
///
/// Reusable: every `wait` call gets its own attempt counter and resolver.
#[derive(Debug, Clone)]
pub struct Poller {
    config: PollConfig,
    cancel: Option<CancellationToken>,
}

impl Poller {
    /// Create a new poller with the given configuration
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Create a poller with default configuration
    pub fn with_defaults() -> Self {
        Self::new(PollConfig::default())
    }

    /// Attach a cancellation token.
    ///
    /// A fired token fails the wait with [`PollError::Cancelled`] instead of
    /// leaving it hanging; a token already cancelled on entry fails it before
    /// the first check.
    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Get the poll configuration
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Delay scheduled after a given attempt (0-indexed).
    ///
    /// Base delay times the backoff multiplier, capped, with optional
    /// jitter. The cap never clips the configured base delay itself.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let config = &self.config;
        let base = config.delay.as_millis() as f64
            * config.backoff_multiplier.powi(attempt as i32);

        let cap = config.max_delay.max(config.delay).as_millis() as f64;
        let capped = base.min(cap);

        let jittered = if config.jitter > 0.0 {
            let jitter_range = capped * config.jitter;
            let jitter_offset = rand::random::<f64>() * jitter_range * 2.0 - jitter_range;
            (capped + jitter_offset).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(jittered as u64)
    }

    /// Wait until `condition` signals completion.
    ///
    /// The condition signals completion by returning true or by calling
    /// [`Attempt::resolve`] (directly, or later through a cloned
    /// [`Resolver`]). With the default configuration the wait is unbounded:
    /// ending it is entirely the condition's responsibility.
    pub async fn wait<F>(&self, mut condition: F) -> Result<()>
    where
        F: FnMut(&Attempt<'_>) -> bool,
    {
        self.try_wait(move |attempt| Ok::<bool, Infallible>(condition(attempt)))
            .await
    }

    /// Wait until `condition` signals completion, aborting on its first error.
    ///
    /// There is no retry-on-error: an `Err` from the condition ends the wait
    /// immediately with [`PollError::Condition`] wrapping the source.
    #[instrument(skip(self, condition), fields(delay = ?self.config.delay))]
    pub async fn try_wait<F, E>(&self, mut condition: F) -> Result<()>
    where
        F: FnMut(&Attempt<'_>) -> std::result::Result<bool, E>,
        E: Into<BoxError>,
    {
        let resolver = Resolver::new();
        let started = Instant::now();
        let deadline = self.config.deadline.map(|total| (total, started + total));
        let mut index: u32 = 0;

        loop {
            if let Some(token) = &self.cancel {
                if token.is_cancelled() {
                    return Err(PollError::Cancelled { attempts: index });
                }
            }

            let attempt = Attempt::new(index, &resolver);
            let holds = condition(&attempt).map_err(|source| PollError::Condition {
                attempt: index,
                source: source.into(),
            })?;

            if holds || resolver.is_resolved() {
                trace!(attempt = index, elapsed = ?started.elapsed(), "condition holds");
                return Ok(());
            }

            let attempts = index + 1;
            if let Some(max) = self.config.max_attempts {
                // Don't sleep after the last attempt
                if attempts >= max {
                    return Err(PollError::AttemptsExhausted { attempts });
                }
            }

            let delay = self.delay_for(index);
            trace!(attempt = index, delay = ?delay, "condition not yet true");

            tokio::select! {
                biased;

                () = resolver.resolved() => return Ok(()),
                () = cancelled(self.cancel.as_ref()) => {
                    return Err(PollError::Cancelled { attempts });
                }
                total = deadline_passed(deadline) => {
                    return Err(PollError::DeadlineExceeded {
                        deadline_ms: total.as_millis() as u64,
                        attempts,
                    });
                }
                () = tokio::time::sleep(delay) => {}
            }

            index += 1;
        }
    }
}

/// Poll `condition` with the default configuration until it returns true.
///
/// Shim for conditions that do not care about the attempt index or the
/// resolve handle: the boolean return is forwarded as the completion signal.
/// The first check runs immediately; unsuccessful checks repeat every
/// [`DEFAULT_DELAY`](crate::config::DEFAULT_DELAY) with no upper bound.
pub async fn wait_until<F>(mut condition: F)
where
    F: FnMut() -> bool,
{
    let outcome = Poller::with_defaults().wait(move |_| condition()).await;
    if let Err(err) = outcome {
        unreachable!("default configuration sets no attempt, deadline, or cancel bound: {err}");
    }
}

async fn cancelled(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

async fn deadline_passed(deadline: Option<(Duration, Instant)>) -> Duration {
    match deadline {
        Some((total, at)) => {
            tokio::time::sleep_until(at).await;
            total
        }
        None => std::future::pending().await,
    }
}
