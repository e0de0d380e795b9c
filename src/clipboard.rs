//! Cross-platform clipboard access.
//!
//! The card only ever writes to the clipboard, so the capability is modelled
//! as a single asynchronous [`ClipboardWriter::write`] operation that either
//! succeeds or reports a [`ClipboardError`].
//!
//! # Platform-Specific Behavior
//!
//! ## Linux
//!
//! [`SystemClipboard`] tries the external tools first, in order:
//! 1. `wl-copy` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//! 4. Falls back to the `arboard` crate
//!
//! External tools keep the clipboard content alive after the card exits.
//!
//! ## macOS and Windows
//!
//! Uses the `arboard` crate directly.

use std::future::Future;

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The host refused or failed the write.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
    /// Nothing to copy.
    #[error("Nothing to copy")]
    EmptyText,
    /// The background task performing the write did not finish.
    #[error("Clipboard task failed: {0}")]
    TaskFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Capability
// ============================================================================

/// The host's clipboard write capability.
///
/// The returned future owns everything it needs, so callers can spawn it and
/// keep the UI responsive while the write is in flight.
pub trait ClipboardWriter {
    /// Writes `text` to the system clipboard.
    fn write(&self, text: String) -> impl Future<Output = ClipboardResult<()>> + Send + 'static;
}

// ============================================================================
// System Clipboard
// ============================================================================

/// Clipboard writer backed by the operating system.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    /// Whether to prefer external tools on Linux.
    prefer_external_tools: bool,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    /// Creates a clipboard writer that prefers external tools on Linux.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Creates a clipboard writer that only uses the arboard crate.
    #[must_use]
    pub const fn arboard_only() -> Self {
        Self {
            prefer_external_tools: false,
        }
    }

    /// Builds the writer from the `prefer_external_clipboard` config flag.
    #[must_use]
    pub const fn from_preference(prefer_external_tools: bool) -> Self {
        if prefer_external_tools {
            Self::new()
        } else {
            Self::arboard_only()
        }
    }

    /// Copies text to the clipboard, blocking the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty, the clipboard is not available
    /// or the copy fails.
    pub fn copy_text_blocking(&self, text: &str) -> ClipboardResult<()> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }

        #[cfg(target_os = "linux")]
        if self.prefer_external_tools
            && let Ok(()) = Self::copy_with_external_tool(text)
        {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        if TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            Ok(())
        } else {
            Err(ClipboardError::NotAvailable)
        }
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = child else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: String) -> impl Future<Output = ClipboardResult<()>> + Send + 'static {
        let clipboard = *self;
        async move {
            tokio::task::spawn_blocking(move || clipboard.copy_text_blocking(&text))
                .await
                .map_err(|e| ClipboardError::TaskFailed(e.to_string()))?
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
