//! Shared block and rectangle helpers.

use ratatui::{
    layout::Rect,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE};

/// Rounded bordered block, highlighted when `focused`.
#[must_use]
pub fn create_border_block(focused: bool) -> Block<'static> {
    let border_style = if focused {
        FOCUSED_BORDER_STYLE
    } else {
        BORDER_STYLE
    };

    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style)
}

/// A `width` x `height` rectangle centered horizontally in `area`,
/// starting at `area`'s top. Clamped to `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        height,
    )
}
