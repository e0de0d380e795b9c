//! Profile header: avatar badge, username and bio.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::profile::ProfileData;
use crate::theme::{MUTED_STYLE, PRIMARY_COLOR, TITLE_STYLE};

use super::helpers::centered_rect;
use super::layout::CardLayout;

/// Width of the avatar badge, borders included.
const AVATAR_WIDTH: u16 = 8;

/// Renders the avatar badge, username and bio into their layout areas.
pub fn render(frame: &mut Frame, layout: &CardLayout, profile: &ProfileData) {
    render_avatar(frame, layout.avatar, profile);

    let username = Paragraph::new(profile.username.as_str())
        .style(TITLE_STYLE)
        .alignment(Alignment::Center);
    frame.render_widget(username, layout.username);

    let bio = Paragraph::new(profile.description.as_str())
        .style(MUTED_STYLE)
        .alignment(Alignment::Center);
    frame.render_widget(bio, layout.bio);
}

/// Initials inside a rounded ring standing in for the avatar image.
fn render_avatar(frame: &mut Frame, area: Rect, profile: &ProfileData) {
    if area.height < 3 {
        return;
    }

    let badge_area = centered_rect(area, AVATAR_WIDTH, 3);
    let ring = super::helpers::create_border_block(true)
        .border_style(Style::default().fg(PRIMARY_COLOR));
    let inner = ring.inner(badge_area);
    frame.render_widget(ring, badge_area);

    let initials = Paragraph::new(profile.initials())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(initials, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(width: u16, height: u16, profile: &ProfileData) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let layout = CardLayout::new(frame.area(), profile.socials.len());
                render(frame, &layout, profile);
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_header_shows_identity() {
        let content = draw(70, 30, &ProfileData::default());

        assert!(content.contains("beeman"));
        assert!(content.contains("Developer and Open Source Evangelist"));
        assert!(content.contains("╭──────╮"));
    }

    #[test]
    fn test_avatar_shows_initials() {
        let profile = ProfileData {
            username: "bram borggreve".to_string(),
            ..ProfileData::default()
        };
        let content = draw(70, 30, &profile);
        assert!(content.contains("BB"));
    }

    #[test]
    fn test_short_terminal_does_not_panic() {
        draw(20, 2, &ProfileData::default());
    }
}
