//! Footer: "Powered by" attribution and the key hint line.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{ERROR_COLOR, MUTED_COLOR, MUTED_STYLE, PLATFORM_STYLE};

use super::helpers::{centered_rect, create_border_block};

/// Key hints shown when there is no status message.
pub const KEY_HINTS: &str = "↑↓ select  c copy  o open  1-9 quick copy  q quit";

/// Renders the attribution pill for `project_name`.
pub fn render_attribution(frame: &mut Frame, area: Rect, project_name: &str) {
    if area.height < 3 {
        return;
    }

    let text = Line::from(vec![
        Span::styled("Powered by ", MUTED_STYLE),
        Span::styled(project_name, PLATFORM_STYLE),
    ]);
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX).saturating_add(4);

    let pill_area = centered_rect(area, width, 3);
    let pill = create_border_block(false);
    let inner = pill.inner(pill_area);
    frame.render_widget(pill, pill_area);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Renders the status message if there is one, else the key hints.
pub fn render_hint_line(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let (text, color) = match status {
        Some(message) if message.starts_with("[x]") => (message, ERROR_COLOR),
        Some(message) => (message, MUTED_COLOR),
        None => (KEY_HINTS, MUTED_COLOR),
    };

    let hint = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_attribution_pill() {
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        terminal
            .draw(|frame| render_attribution(frame, frame.area(), "PubKey Protocol"))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Powered by PubKey Protocol"));
        assert!(content.starts_with(' '));
    }

    #[test]
    fn test_hint_line_shows_shortcuts() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| render_hint_line(frame, frame.area(), None))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        for shortcut in ["c copy", "o open", "q quit"] {
            assert!(content.contains(shortcut), "missing '{shortcut}' in {content}");
        }
    }

    #[test]
    fn test_status_replaces_hints() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| render_hint_line(frame, frame.area(), Some("[+] Opened GitHub")))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[+] Opened GitHub"));
        assert!(!content.contains("q quit"));
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| {
                render_attribution(frame, Rect::new(0, 0, 40, 0), "PubKey");
                render_hint_line(frame, Rect::new(0, 0, 40, 0), None);
            })
            .unwrap();
    }
}
