//! Shared test doubles for the clipboard and diagnostics collaborators.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};
use crate::feedback::DiagnosticSink;

// ============================================================================
// Fake Clipboard
// ============================================================================

/// In-memory clipboard that records writes.
///
/// Writes resolve immediately unless a delay was set for their text with
/// [`FakeClipboard::delay_writes_of`].
///
/// Clones share state, so a test can keep one handle and give another to the
/// code under test.
#[derive(Debug, Clone, Default)]
pub struct FakeClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
}

impl FakeClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        let clipboard = Self::new();
        clipboard.fail_with(error);
        clipboard
    }

    pub fn fail_with(&self, error: ClipboardError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Makes writes of `text` resolve `delay` after they are requested.
    pub fn delay_writes_of(&self, text: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(text.to_owned(), delay);
    }

    /// Texts successfully written, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write(&self, text: String) -> impl Future<Output = ClipboardResult<()>> + Send + 'static {
        let deadline = self
            .delays
            .lock()
            .unwrap()
            .get(&text)
            .map(|delay| tokio::time::Instant::now() + *delay);
        let result = match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => {
                self.writes.lock().unwrap().push(text);
                Ok(())
            }
        };
        async move {
            if let Some(deadline) = deadline {
                tokio::time::sleep_until(deadline).await;
            }
            result
        }
    }
}

// ============================================================================
// Recording Diagnostics
// ============================================================================

/// Diagnostic sink that remembers the key of every reported failure.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    keys: Arc<Mutex<Vec<String>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn copy_failed(&self, key: &str, _error: &ClipboardError) {
        self.keys.lock().unwrap().push(key.to_owned());
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Flattens a ratatui buffer into lines of text.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.height {
            result.push('\n');
        }
    }
    result
}
