//! Palette and shared styles for the card.
//!
//! Dark neutral background with a purple/blue accent, matching the web card
//! the layout is modelled on.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Accent used for the avatar ring and the selected row border.
pub const PRIMARY_COLOR: Color = Color::Rgb(168, 85, 247);

/// Success indicator color ("copied" check mark, toast text).
pub const SUCCESS_COLOR: Color = Color::Green;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color (bio, handles, hints).
pub const MUTED_COLOR: Color = Color::Gray;

/// Card background.
pub const BG_COLOR: Color = Color::Rgb(23, 23, 23);

// ============================================================================
// Style Constants
// ============================================================================

/// Border style for unselected rows and the footer pill.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for the selected row.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Username style.
pub const TITLE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Platform name style inside a row.
pub const PLATFORM_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Secondary text style.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);
