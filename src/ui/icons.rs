//! Icon resolution for social entries.
//!
//! Terminals have no brand artwork, so each known icon id maps to a short
//! badge label in the brand's color. Unknown ids get a neutral badge.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// A resolved icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Two-cell label.
    pub symbol: &'static str,
    pub color: Color,
}

impl Glyph {
    /// Badge used for icon ids with no known mapping.
    pub const FALLBACK: Self = Self {
        symbol: "@ ",
        color: Color::Gray,
    };

    /// Styled span for rendering.
    #[must_use]
    pub fn span(self) -> Span<'static> {
        Span::styled(
            self.symbol,
            Style::default()
                .fg(self.color)
                .add_modifier(Modifier::BOLD),
        )
    }
}

/// Resolves an icon id (case-insensitive) to its badge.
#[must_use]
pub fn resolve(icon: &str) -> Glyph {
    let (symbol, color) = match icon.to_ascii_lowercase().as_str() {
        "github" => ("GH", Color::White),
        "x" | "twitter" => ("X ", Color::White),
        "linkedin" => ("in", Color::Rgb(10, 102, 194)),
        "telegram" => ("TG", Color::Rgb(38, 165, 228)),
        "discord" => ("DC", Color::Rgb(88, 101, 242)),
        "mastodon" => ("MA", Color::Rgb(99, 100, 255)),
        "youtube" => ("YT", Color::Rgb(255, 0, 0)),
        _ => return Glyph::FALLBACK,
    };
    Glyph { symbol, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("github", "GH")]
    #[case("GitHub", "GH")]
    #[case("x", "X ")]
    #[case("linkedin", "in")]
    #[case("telegram", "TG")]
    #[case("discord", "DC")]
    fn test_known_icons(#[case] icon: &str, #[case] symbol: &str) {
        assert_eq!(resolve(icon).symbol, symbol);
    }

    #[test]
    fn test_unknown_icon_degrades_to_fallback() {
        assert_eq!(resolve("friendster"), Glyph::FALLBACK);
        assert_eq!(resolve(""), Glyph::FALLBACK);
    }

    #[test]
    fn test_every_symbol_is_two_cells() {
        for icon in ["github", "x", "linkedin", "telegram", "discord", "mastodon", "youtube", "?"] {
            assert_eq!(resolve(icon).symbol.chars().count(), 2, "{icon}");
        }
    }
}
