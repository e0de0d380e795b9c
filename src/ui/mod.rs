//! UI rendering for the linkcard TUI.
//!
//! # Module Structure
//!
//! - `layout` - Card layout calculations
//! - `header` - Avatar badge, username and bio
//! - `socials` - One row per social entry
//! - `footer` - "Powered by" attribution and key hints
//! - `components` - Overlays (copy toast)
//! - `icons` - Icon id to badge resolution
//! - `helpers` - Shared block helpers

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod icons;
pub mod layout;
pub mod socials;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::profile::ProfileData;
use crate::theme::BG_COLOR;

use layout::CardLayout;
use socials::RowState;

/// Everything a frame needs, borrowed from the app.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub profile: &'a ProfileData,
    /// Index of the highlighted row.
    pub selected: usize,
    /// Key currently showing copy feedback.
    pub active_key: Option<&'a str>,
    /// Transient status message for the hint line.
    pub status: Option<&'a str>,
}

/// Main render function.
///
/// Draws the card, then the copy toast on top while a key is active.
pub fn render(view: &CardView<'_>, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_COLOR)), area);

    let layout = CardLayout::new(area, view.profile.socials.len());

    header::render(frame, &layout, view.profile);

    for (index, (entry, row_area)) in view
        .profile
        .socials
        .iter()
        .zip(layout.rows.iter().copied())
        .enumerate()
    {
        if row_area.height == 0 {
            continue;
        }
        let state = RowState {
            position: index + 1,
            selected: index == view.selected,
            copied: view.active_key == Some(entry.key()),
        };
        socials::render_row(frame, row_area, entry, state);
    }

    footer::render_attribution(frame, layout.footer, &view.profile.project_name);
    footer::render_hint_line(frame, layout.hint, view.status);

    if let Some(key) = view.active_key {
        components::render_toast(frame, area, &components::copied_message(key));
    }
}
