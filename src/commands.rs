//! Key bindings for the card.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], so the
//! bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// App Commands
// ============================================================================

/// Everything the user can ask the card to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Move the selection to the previous row (wraps).
    MoveUp,
    /// Move the selection to the next row (wraps).
    MoveDown,
    /// Jump to the first row.
    MoveFirst,
    /// Jump to the last row.
    MoveLast,
    /// Copy the selected row's handle.
    CopySelected,
    /// Copy the handle of the n-th row (zero-based).
    CopyIndex(usize),
    /// Open the selected row's link in the browser.
    OpenSelected,
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command. Pure, no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => AppCommand::Quit,
                _ => AppCommand::Noop,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => AppCommand::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::MoveFirst,
            KeyCode::End | KeyCode::Char('G') => AppCommand::MoveLast,
            KeyCode::Enter | KeyCode::Char('c' | 'y') => AppCommand::CopySelected,
            KeyCode::Char('o') => AppCommand::OpenSelected,
            KeyCode::Char(digit @ '1'..='9') => {
                AppCommand::CopyIndex(digit as usize - '1' as usize)
            }
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case::q(KeyCode::Char('q'), AppCommand::Quit)]
    #[case::esc(KeyCode::Esc, AppCommand::Quit)]
    #[case::up(KeyCode::Up, AppCommand::MoveUp)]
    #[case::k(KeyCode::Char('k'), AppCommand::MoveUp)]
    #[case::down(KeyCode::Down, AppCommand::MoveDown)]
    #[case::j(KeyCode::Char('j'), AppCommand::MoveDown)]
    #[case::tab(KeyCode::Tab, AppCommand::MoveDown)]
    #[case::home(KeyCode::Home, AppCommand::MoveFirst)]
    #[case::end(KeyCode::Char('G'), AppCommand::MoveLast)]
    #[case::enter(KeyCode::Enter, AppCommand::CopySelected)]
    #[case::c(KeyCode::Char('c'), AppCommand::CopySelected)]
    #[case::o(KeyCode::Char('o'), AppCommand::OpenSelected)]
    #[case::one(KeyCode::Char('1'), AppCommand::CopyIndex(0))]
    #[case::five(KeyCode::Char('5'), AppCommand::CopyIndex(4))]
    #[case::zero(KeyCode::Char('0'), AppCommand::Noop)]
    #[case::other(KeyCode::Char('z'), AppCommand::Noop)]
    fn test_map_key(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(KeyMapper::map_key(key(code)), expected);
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_copying() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(event), AppCommand::Quit);
    }
}
