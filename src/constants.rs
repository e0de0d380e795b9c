//! Application constants for the linkcard TUI.
//!
//! Timing values and layout dimensions shared by the event loop and the
//! renderers.

use std::time::Duration;

// ============================================================================
// Timing Constants
// ============================================================================

/// How long a successful copy keeps its "copied" feedback.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Redraw and event-drain interval of the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Ticks a status line message stays visible (3 seconds at [`TICK_RATE`]).
pub const STATUS_TICKS: u8 = 30;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Maximum width of the card, centered in wider terminals.
pub const CARD_WIDTH: u16 = 56;

/// Height of the avatar badge (in rows).
pub const AVATAR_HEIGHT: u16 = 3;

/// Height of each social row including its border (in rows).
pub const SOCIAL_ROW_HEIGHT: u16 = 3;

/// Height of the "Powered by" footer (in rows).
pub const FOOTER_HEIGHT: u16 = 3;

/// Height of the key hint line (in rows).
pub const HINT_HEIGHT: u16 = 1;
