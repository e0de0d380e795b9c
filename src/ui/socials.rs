//! Social link rows.
//!
//! Each row is a single bordered line: icon badge, platform and handle on the
//! left, the copy/open affordances on the right. The copy affordance turns into a check
//! mark while the row's key is the active copy.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::profile::SocialEntry;
use crate::theme::{MUTED_COLOR, MUTED_STYLE, PLATFORM_STYLE, SUCCESS_COLOR};

use super::helpers::create_border_block;
use super::icons;

/// Copy affordance while idle.
pub const COPY_SYMBOL: &str = "⧉";

/// Copy affordance while the row's handle was just copied.
pub const COPIED_SYMBOL: &str = "✓";

/// Open-link affordance.
pub const OPEN_SYMBOL: &str = "↗";

/// Width the platform name is padded to, so handles line up.
const PLATFORM_COLUMN: usize = 10;

/// Per-row render state.
#[derive(Debug, Clone, Copy)]
pub struct RowState {
    /// 1-based position, shown as the quick-copy digit.
    pub position: usize,
    pub selected: bool,
    pub copied: bool,
}

/// Renders one social entry into `area`.
pub fn render_row(frame: &mut Frame, area: Rect, entry: &SocialEntry, state: RowState) {
    let block = create_border_block(state.selected);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut title = vec![
        icons::resolve(&entry.icon).span(),
        Span::raw("  "),
        Span::styled(
            format!("{:<PLATFORM_COLUMN$}", entry.platform),
            PLATFORM_STYLE,
        ),
        Span::styled(entry.handle.as_str(), MUTED_STYLE),
    ];
    if state.position <= 9 {
        title.insert(0, Span::styled(format!("{} ", state.position), MUTED_STYLE));
    }

    let line_area = Rect { height: 1, ..inner };
    frame.render_widget(Paragraph::new(Line::from(title)), line_area);
    frame.render_widget(
        Paragraph::new(affordances(state.copied)).alignment(Alignment::Right),
        line_area,
    );
}

/// Copy and open indicators, right-aligned in the row title line.
fn affordances(copied: bool) -> Line<'static> {
    let copy = if copied {
        Span::styled(
            COPIED_SYMBOL,
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(COPY_SYMBOL, Style::default().fg(MUTED_COLOR))
    };

    Line::from(vec![
        copy,
        Span::raw("  "),
        Span::styled(OPEN_SYMBOL, Style::default().fg(MUTED_COLOR)),
        Span::raw(" "),
    ])
}
