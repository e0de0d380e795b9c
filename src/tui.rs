//! Terminal setup and teardown.
//!
//! The card runs on the alternate screen with the cursor hidden and the
//! window titled after the profile. [`restore`] undoes all of it and is also
//! run from the panic hook.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::{Hide, Show},
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
            enable_raw_mode,
        },
    },
};

use crate::config::APP_NAME;
use crate::profile::ProfileData;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Window title while the card is shown.
#[must_use]
pub fn window_title(profile: &ProfileData) -> String {
    format!("{APP_NAME} · {}", profile.username)
}

/// Enters raw mode on the alternate screen and titles the window.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched.
pub fn init(profile: &ProfileData) -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        Hide,
        SetTitle(window_title(profile))
    )?;

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));

    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Shows the cursor again and leaves the alternate screen and raw mode.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched back.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title_names_profile() {
        assert_eq!(window_title(&ProfileData::default()), "linkcard · beeman");
    }
}
