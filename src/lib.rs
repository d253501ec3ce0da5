//! recheck - poll a condition on an interval until it holds
//!
//! A suspension point that hands control back only once a caller-supplied
//! condition becomes true. The condition is checked on a configurable
//! interval rather than busy-spun; the first check runs immediately, and a
//! successful check resolves the wait with no extra delay. By default the
//! wait is unbounded — ending it is the condition's responsibility — with
//! opt-in attempt budgets, deadlines, and cancellation.
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | Pacing: delay, backoff, jitter, optional bounds |
//! | [`poller`] | The poll loop and the zero-argument `wait_until` shim |
//! | [`resolve`] | Per-attempt view and deferred completion handle |
//! | [`error`] | Typed failures for the opt-in bounds and condition errors |
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use recheck::{PollConfig, Poller};
//!
//! // Simple form: poll a flag every 10ms until it flips.
//! recheck::wait_until(|| migrations_applied()).await;
//!
//! // Full form: pacing config, attempt index, typed failure on deadline.
//! let poller = Poller::new(
//!     PollConfig::new(Duration::from_millis(20)).with_deadline(Duration::from_secs(5)),
//! );
//! poller.wait(|attempt| attempt.index() > 4).await?;
//! ```

pub mod config;
pub mod error;
pub mod poller;
pub mod resolve;

// Config types
pub use config::{PollConfig, DEFAULT_DELAY, DEFAULT_MAX_DELAY};

// Error types
pub use error::{BoxError, PollError, Result};

// Poll loop
pub use poller::{wait_until, Poller};

// Attempt view and completion handle
pub use resolve::{Attempt, Resolver};
