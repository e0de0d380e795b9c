//! Copy confirmation toast.
//!
//! A non-blocking overlay in the bottom-right corner, drawn on top of the card
//! while the feedback controller has an active key. The text color follows
//! the message prefix: `[+]` success, `[x]` error, anything else plain.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications (one text line plus borders).
const TOAST_HEIGHT: u16 = 3;

/// Gap between the toast and the right/bottom edges.
const TOAST_MARGIN: u16 = 2;

/// Borders plus one cell of padding on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Toast text confirming that `key`'s handle was copied.
#[must_use]
pub fn copied_message(key: &str) -> String {
    format!("[+] Copied {key} handle!")
}

/// Draws `message` as a toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_rect(area, message);
    if toast_area.width < 3 || toast_area.height < TOAST_HEIGHT {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(
            Style::default()
                .fg(text_color(message))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Position of the toast: sized to the message, at most half of `area`
/// wide, anchored bottom-right with [`TOAST_MARGIN`].
fn toast_rect(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + TOAST_MARGIN);
    let y = area.y + area.height.saturating_sub(height + TOAST_MARGIN);
    Rect::new(x, y, width, height)
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}
