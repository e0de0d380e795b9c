//! Layout calculations for the card.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

use crate::constants::{
    AVATAR_HEIGHT, CARD_WIDTH, FOOTER_HEIGHT, HINT_HEIGHT, SOCIAL_ROW_HEIGHT,
};

/// Areas of every card section, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub avatar: Rect,
    pub username: Rect,
    pub bio: Rect,
    /// One area per social entry, in display order.
    pub rows: Vec<Rect>,
    pub footer: Rect,
    pub hint: Rect,
}

impl CardLayout {
    /// Splits `area` into a centered card column with `row_count` social rows.
    ///
    /// Social rows keep their full height as long as possible: on short
    /// terminals the spacing lines go first, then the avatar badge.
    #[must_use]
    pub fn new(area: Rect, row_count: usize) -> Self {
        let card = centered_column(area, CARD_WIDTH);
        let rows_height =
            SOCIAL_ROW_HEIGHT.saturating_mul(u16::try_from(row_count).unwrap_or(u16::MAX));

        let compact = rows_height
            .saturating_add(AVATAR_HEIGHT + 2 + FOOTER_HEIGHT + HINT_HEIGHT);
        let spacing = if card.height >= compact.saturating_add(2) { 1 } else { 0 };
        let avatar_height = if card.height >= compact { AVATAR_HEIGHT } else { 0 };

        let [
            _top,
            avatar,
            username,
            bio,
            _gap,
            socials,
            _filler,
            footer,
            hint,
        ] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(spacing),
                Constraint::Length(avatar_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(spacing),
                Constraint::Length(rows_height),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
                Constraint::Length(HINT_HEIGHT),
            ])
            .areas(card);

        let rows = if row_count == 0 {
            Vec::new()
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(SOCIAL_ROW_HEIGHT); row_count])
                .split(socials)
                .to_vec()
        };

        Self {
            avatar,
            username,
            bio,
            rows,
            footer,
            hint,
        }
    }
}

/// A column of at most `width` cells, horizontally centered in `area`.
#[must_use]
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    column
}
