//! Copy-to-clipboard with timed "copied" feedback.
//!
//! [`CopyFeedbackController`] owns the only mutable state of the card: which
//! social entry (if any) was just copied. A successful copy makes its key
//! active and schedules a deferred clear; a newer successful copy replaces the
//! active key and restarts the timer; failures change nothing.
//!
//! ```text
//!            copy ok(k)                 copy ok(k2)
//!   Idle ───────────────▶ Showing(k) ───────────────▶ Showing(k2)
//!     ▲                       │
//!     └──── clear elapsed ────┘   (only if still the same copy)
//! ```
//!
//! Clipboard writes and the deferred clear run as tokio tasks. Their results
//! come back as [`CopyEvent`]s over a channel owned by the controller and are
//! applied on the UI loop, in the order they resolve.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};
use crate::constants::COPY_FEEDBACK_DURATION;

// ============================================================================
// Diagnostics
// ============================================================================

/// Receives reports about copies that failed.
pub trait DiagnosticSink: Send + Sync {
    /// Records a failed copy attempt for `key`.
    fn copy_failed(&self, key: &str, error: &ClipboardError);
}

/// Default sink: a `tracing` warning per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn copy_failed(&self, key: &str, error: &ClipboardError) {
        tracing::warn!(key, %error, "Failed to copy handle");
    }
}

// ============================================================================
// Events and Outcomes
// ============================================================================

/// Completions delivered back to the controller from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
    /// A spawned clipboard write resolved.
    WriteCompleted {
        key: String,
        result: ClipboardResult<()>,
    },
    /// The deferred clear scheduled for `generation` fired.
    ClearElapsed { key: String, generation: u64 },
}

/// Result of a single copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard and the key is now active.
    Copied,
    /// The write failed; feedback state is unchanged.
    Failed(ClipboardError),
    /// The controller was torn down before the write resolved.
    Discarded,
}

/// Observable effect of applying a [`CopyEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackChange {
    /// `key` became the active key.
    Copied(String),
    /// A copy of `key` failed.
    Failed(String),
    /// The feedback for `key` expired.
    Cleared(String),
    /// Nothing observable changed (stale timer, late result after teardown).
    Unchanged,
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveCopy {
    key: String,
    generation: u64,
}

/// Manages the "just copied" feedback for a set of keyed items.
pub struct CopyFeedbackController<C> {
    clipboard: C,
    diagnostics: Box<dyn DiagnosticSink>,
    feedback_duration: Duration,
    active: Option<ActiveCopy>,
    generation: u64,
    pending_clear: Option<JoinHandle<()>>,
    events_tx: mpsc::UnboundedSender<CopyEvent>,
    events_rx: mpsc::UnboundedReceiver<CopyEvent>,
    torn_down: bool,
}

impl<C> fmt::Debug for CopyFeedbackController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyFeedbackController")
            .field("active", &self.active)
            .field("generation", &self.generation)
            .field("feedback_duration", &self.feedback_duration)
            .field("clear_pending", &self.pending_clear.is_some())
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<C: ClipboardWriter> CopyFeedbackController<C> {
    /// Creates an idle controller that reports failures through `tracing`.
    #[must_use]
    pub fn new(clipboard: C) -> Self {
        Self::with_diagnostics(clipboard, Box::new(TracingDiagnostics))
    }

    /// Creates an idle controller with a custom diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(clipboard: C, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            clipboard,
            diagnostics,
            feedback_duration: COPY_FEEDBACK_DURATION,
            active: None,
            generation: 0,
            pending_clear: None,
            events_tx,
            events_rx,
            torn_down: false,
        }
    }

    /// Copies `text` and waits for the write to resolve.
    ///
    /// Must be called from within a tokio runtime: a successful copy spawns
    /// the deferred clear.
    pub async fn request_copy(&mut self, text: &str, key: &str) -> CopyOutcome {
        let result = match Self::check_request(text, key) {
            Ok(()) => self.clipboard.write(text.to_owned()).await,
            Err(e) => Err(e),
        };
        self.complete_write(key, result)
    }

    /// Starts a copy without waiting for it.
    ///
    /// The outcome is applied later by [`Self::handle_event`], once the write
    /// resolves and the event is drained from the channel.
    pub fn spawn_copy(&self, text: &str, key: &str) {
        if self.torn_down {
            return;
        }

        let key = key.to_owned();
        let tx = self.events_tx.clone();

        if let Err(e) = Self::check_request(text, &key) {
            // Receiver lives as long as the controller
            let _ = tx.send(CopyEvent::WriteCompleted { key, result: Err(e) });
            return;
        }

        let write = self.clipboard.write(text.to_owned());
        tokio::spawn(async move {
            let result = write.await;
            // Receiver is gone after teardown; the result is discarded
            let _ = tx.send(CopyEvent::WriteCompleted { key, result });
        });
    }

    /// Returns `true` iff `key` is the active key.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active.key == key)
    }

    /// The key currently showing copy feedback, if any.
    #[must_use]
    pub fn current_active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.key.as_str())
    }

    /// Applies one event from a background task.
    pub fn handle_event(&mut self, event: CopyEvent) -> FeedbackChange {
        if self.torn_down {
            return FeedbackChange::Unchanged;
        }

        match event {
            CopyEvent::WriteCompleted { key, result } => {
                match self.complete_write(&key, result) {
                    CopyOutcome::Copied => FeedbackChange::Copied(key),
                    CopyOutcome::Failed(_) => FeedbackChange::Failed(key),
                    CopyOutcome::Discarded => FeedbackChange::Unchanged,
                }
            }
            CopyEvent::ClearElapsed { key, generation } => {
                let scheduled = ActiveCopy { key, generation };
                if self.active.as_ref() == Some(&scheduled) {
                    self.active = None;
                    self.pending_clear = None;
                    tracing::debug!(key = %scheduled.key, "Copy feedback expired");
                    FeedbackChange::Cleared(scheduled.key)
                } else {
                    FeedbackChange::Unchanged
                }
            }
        }
    }

    /// Applies every event that has already been delivered, without waiting.
    ///
    /// Returns the observable changes in the order they were applied.
    pub fn process_pending_events(&mut self) -> Vec<FeedbackChange> {
        let mut changes = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            let change = self.handle_event(event);
            if change != FeedbackChange::Unchanged {
                changes.push(change);
            }
        }
        changes
    }

    /// Waits for the next event from a background task.
    ///
    /// Returns `None` once the controller has been torn down.
    #[cfg(test)]
    pub(crate) async fn next_event(&mut self) -> Option<CopyEvent> {
        if self.torn_down {
            return None;
        }
        self.events_rx.recv().await
    }

    /// Cancels the pending clear and stops applying background results.
    ///
    /// Writes already in flight still finish, but their results are dropped.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.cancel_pending_clear();
        self.events_rx.close();
        tracing::debug!("Copy feedback controller torn down");
    }

    #[cfg(test)]
    pub(crate) const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[cfg(test)]
    pub(crate) const fn feedback_duration(&self) -> Duration {
        self.feedback_duration
    }

    fn check_request(text: &str, key: &str) -> ClipboardResult<()> {
        if text.is_empty() || key.is_empty() {
            Err(ClipboardError::EmptyText)
        } else {
            Ok(())
        }
    }

    fn complete_write(&mut self, key: &str, result: ClipboardResult<()>) -> CopyOutcome {
        if self.torn_down {
            return CopyOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                self.generation = self.generation.wrapping_add(1);
                self.active = Some(ActiveCopy {
                    key: key.to_owned(),
                    generation: self.generation,
                });
                self.schedule_clear(key, self.generation);
                tracing::info!(key, "Copied handle");
                CopyOutcome::Copied
            }
            Err(error) => {
                self.diagnostics.copy_failed(key, &error);
                CopyOutcome::Failed(error)
            }
        }
    }

    fn schedule_clear(&mut self, key: &str, generation: u64) {
        self.cancel_pending_clear();

        let tx = self.events_tx.clone();
        let key = key.to_owned();
        // Deadline is fixed now, not when the task is first polled
        let deadline = tokio::time::Instant::now() + self.feedback_duration;
        self.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(CopyEvent::ClearElapsed { key, generation });
        }));
    }

    fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

impl<C> Drop for CopyFeedbackController<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
