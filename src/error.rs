//! Poll loop error types
//!
//! A predicate error always aborts the wait and propagates verbatim; there
//! is no retry-on-error, only retry-on-not-yet-true. The remaining variants
//! come from the opt-in bounds (attempt budget, deadline, cancellation) —
//! without them a wait that never resolves simply keeps polling.

use thiserror::Error;

/// Boxed error produced by a fallible predicate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, PollError>;

/// All error variants are part of the public API.
#[derive(Error, Debug)]
pub enum PollError {
    /// The attached cancellation token fired before the condition held.
    #[error("wait cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },

    /// Total elapsed time passed the configured deadline.
    #[error("deadline of {deadline_ms}ms exceeded after {attempts} attempts")]
    DeadlineExceeded { deadline_ms: u64, attempts: u32 },

    /// The attempt budget ran out before the condition held.
    #[error("condition still not true after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    /// The predicate itself failed. The source error propagates unchanged.
    #[error("condition check failed on attempt {attempt}: {source}")]
    Condition {
        attempt: u32,
        #[source]
        source: BoxError,
    },
}

impl PollError {
    /// Number of attempts that ran before the wait ended.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Cancelled { attempts }
            | Self::DeadlineExceeded { attempts, .. }
            | Self::AttemptsExhausted { attempts } => *attempts,
            Self::Condition { attempt, .. } => attempt + 1,
        }
    }
}
