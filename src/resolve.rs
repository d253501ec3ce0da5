//! Completion signalling for poll attempts
//!
//! Each wait owns one [`Resolver`], a one-shot latch. The predicate sees it
//! through the [`Attempt`] view: it can flip it synchronously inside a check,
//! or clone a handle and flip it later from another task — which is how a
//! caller synchronizes the poll loop with externally-driven asynchronous
//! work. Flipping the latch mid-sleep wakes the loop immediately.

use tokio_util::sync::CancellationToken;

/// Cloneable completion handle for a single wait.
///
/// `resolve` is idempotent; the first call wins and every later call is a
/// no-op. Handles stay valid after the wait has finished.
#[derive(Debug, Clone)]
pub struct Resolver {
    // One-shot latch. The cancellation primitive already provides the
    // edge-triggered wakeup the loop needs to cut a sleep short.
    latch: CancellationToken,
}

impl Resolver {
    pub(crate) fn new() -> Self {
        Self {
            latch: CancellationToken::new(),
        }
    }

    /// Signal that the awaited condition now holds.
    pub fn resolve(&self) {
        self.latch.cancel();
    }

    /// Whether completion has been signalled.
    pub fn is_resolved(&self) -> bool {
        self.latch.is_cancelled()
    }

    /// Completes once `resolve` has been called.
    pub(crate) async fn resolved(&self) {
        self.latch.cancelled().await;
    }
}

/// View of one poll attempt, handed to the predicate on every check.
#[derive(Debug)]
pub struct Attempt<'a> {
    index: u32,
    resolver: &'a Resolver,
}

impl Attempt<'_> {
    pub(crate) fn new(index: u32, resolver: &Resolver) -> Attempt<'_> {
        Attempt { index, resolver }
    }

    /// Zero-based index of this attempt.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Signal completion; alternative to returning true from the predicate.
    pub fn resolve(&self) {
        self.resolver.resolve();
    }

    /// Whether completion has already been signalled.
    pub fn is_resolved(&self) -> bool {
        self.resolver.is_resolved()
    }

    /// Handle that outlives this attempt, for deferred resolution.
    pub fn resolver(&self) -> Resolver {
        self.resolver.clone()
    }
}
