//! Application state and the main event loop.
//!
//! The [`App`] owns the profile, the row selection and the
//! [`CopyFeedbackController`]. Copies are started without blocking the loop;
//! their results and the feedback expiry are drained on every tick.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardWriter;
use crate::commands::{AppCommand, KeyMapper};
use crate::constants::{STATUS_TICKS, TICK_RATE};
use crate::feedback::{CopyFeedbackController, FeedbackChange};
use crate::links;
use crate::profile::ProfileData;
use crate::tui::Tui;
use crate::ui::{self, CardView};

// ============================================================================
// Status Line
// ============================================================================

/// A short message in the hint line that disappears after a number of ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<(String, u8)>,
}

impl StatusLine {
    /// Shows `message` for `ticks` ticks, replacing any current message.
    pub fn show(&mut self, message: impl Into<String>, ticks: u8) {
        self.message = Some((message.into(), ticks));
    }

    /// Counts one tick down. Returns `true` if the message was removed.
    pub fn tick(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.message {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.message = None;
                return true;
            }
        }
        false
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(message, _)| message.as_str())
    }
}

// ============================================================================
// App
// ============================================================================

/// The link card application.
#[derive(Debug)]
pub struct App<C> {
    profile: ProfileData,
    selected: usize,
    feedback: CopyFeedbackController<C>,
    status: StatusLine,
    /// Whether the application should exit.
    pub exit: bool,
}

impl<C: ClipboardWriter> App<C> {
    /// Creates the app with the first row selected.
    #[must_use]
    pub fn new(profile: ProfileData, clipboard: C) -> Self {
        Self::with_controller(profile, CopyFeedbackController::new(clipboard))
    }

    /// Creates the app around an existing controller.
    #[must_use]
    pub fn with_controller(profile: ProfileData, feedback: CopyFeedbackController<C>) -> Self {
        Self {
            profile,
            selected: 0,
            feedback,
            status: StatusLine::default(),
            exit: false,
        }
    }

    /// Borrowed view of the current state for rendering.
    #[must_use]
    pub fn view(&self) -> CardView<'_> {
        CardView {
            profile: &self.profile,
            selected: self.selected,
            active_key: self.feedback.current_active_key(),
            status: self.status.message(),
        }
    }

    /// Runs the main loop until the user quits, then tears the controller
    /// down.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!(entries = self.profile.socials.len(), "Card started");
        let result = self.event_loop(terminal).await;
        self.shutdown();
        result
    }

    async fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(&self.view(), frame))?;

        while !self.exit {
            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.execute(KeyMapper::map_key(key));
                        self.apply_feedback_events();
                        terminal.draw(|frame| ui::render(&self.view(), frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(&self.view(), frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.tick();
                terminal.draw(|frame| ui::render(&self.view(), frame))?;
                last_tick = Instant::now();
            }

            // Let spawned clipboard and timer tasks make progress
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// One tick: apply finished copies and expiries, age the status line.
    pub fn tick(&mut self) {
        self.apply_feedback_events();
        self.status.tick();
    }

    /// Applies a command from the key mapper.
    pub fn execute(&mut self, command: AppCommand) {
        tracing::debug!(?command, "Executing command");
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::MoveUp => self.move_selection(-1),
            AppCommand::MoveDown => self.move_selection(1),
            AppCommand::MoveFirst => self.selected = 0,
            AppCommand::MoveLast => {
                self.selected = self.profile.socials.len().saturating_sub(1);
            }
            AppCommand::CopySelected => self.copy_entry(self.selected),
            AppCommand::CopyIndex(index) => {
                if index < self.profile.socials.len() {
                    self.selected = index;
                    self.copy_entry(index);
                }
            }
            AppCommand::OpenSelected => self.open_selected(),
            AppCommand::Noop => {}
        }
    }

    /// Cancels pending feedback; late clipboard results are dropped.
    pub fn shutdown(&mut self) {
        self.feedback.teardown();
        tracing::info!("Card closed");
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.profile.socials.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn copy_entry(&mut self, index: usize) {
        let Some(entry) = self.profile.socials.get(index) else {
            return;
        };
        self.feedback.spawn_copy(&entry.handle, entry.key());
    }

    fn open_selected(&mut self) {
        let Some(entry) = self.profile.socials.get(self.selected) else {
            return;
        };

        match links::open_in_browser(&entry.url) {
            Ok(()) => {
                self.status
                    .show(format!("[+] Opened {} in browser", entry.platform), STATUS_TICKS);
            }
            Err(e) => {
                tracing::warn!(platform = %entry.platform, error = %e, "Failed to open link");
                self.status.show(format!("[x] {e}"), STATUS_TICKS);
            }
        }
    }

    fn apply_feedback_events(&mut self) {
        for change in self.feedback.process_pending_events() {
            match change {
                FeedbackChange::Copied(key) => tracing::debug!(key, "Showing copy feedback"),
                FeedbackChange::Cleared(key) => tracing::debug!(key, "Copy feedback cleared"),
                // Failures stay silent on screen; the diagnostic sink has them
                FeedbackChange::Failed(key) => tracing::debug!(key, "Copy failed"),
                FeedbackChange::Unchanged => {}
            }
        }
    }
}

#[cfg(test)]
impl<C: ClipboardWriter> App<C> {
    const fn selected(&self) -> usize {
        self.selected
    }

    const fn feedback(&self) -> &CopyFeedbackController<C> {
        &self.feedback
    }

    fn status(&self) -> Option<&str> {
        self.status.message()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::test_utils::FakeClipboard;

    fn create_test_app() -> (App<FakeClipboard>, FakeClipboard) {
        let clipboard = FakeClipboard::new();
        let app = App::new(ProfileData::default(), clipboard.clone());
        (app, clipboard)
    }

    async fn settle(app: &mut App<FakeClipboard>) {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        app.tick();
    }

    #[test]
    fn test_status_line_lifecycle() {
        let mut status = StatusLine::default();
        assert_eq!(status.message(), None);

        status.show("Hello", 2);
        assert_eq!(status.message(), Some("Hello"));

        assert!(!status.tick()); // 2 -> 1
        assert!(status.tick()); // 1 -> removed
        assert_eq!(status.message(), None);
        assert!(!status.tick());
    }

    #[tokio::test]
    async fn test_selection_wraps() {
        let (mut app, _) = create_test_app();
        assert_eq!(app.selected(), 0);

        app.execute(AppCommand::MoveUp);
        assert_eq!(app.selected(), 4);

        app.execute(AppCommand::MoveDown);
        assert_eq!(app.selected(), 0);

        app.execute(AppCommand::MoveLast);
        assert_eq!(app.selected(), 4);
        app.execute(AppCommand::MoveFirst);
        assert_eq!(app.selected(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_selected_copies_handle() {
        let (mut app, clipboard) = create_test_app();

        app.execute(AppCommand::MoveDown);
        app.execute(AppCommand::CopySelected);
        settle(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["@beeman_nl".to_string()]);
        assert!(app.feedback().is_active("X"));
        assert_eq!(app.view().active_key, Some("X"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_copy_selects_row() {
        let (mut app, clipboard) = create_test_app();

        app.execute(AppCommand::CopyIndex(3));
        settle(&mut app).await;

        assert_eq!(app.selected(), 3);
        assert_eq!(clipboard.writes(), vec!["@beemandev".to_string()]);
        assert!(app.feedback().is_active("Telegram"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_copy_out_of_range_is_ignored() {
        let (mut app, clipboard) = create_test_app();

        app.execute(AppCommand::CopyIndex(8));
        settle(&mut app).await;

        assert_eq!(app.selected(), 0);
        assert!(clipboard.writes().is_empty());
        assert_eq!(app.feedback().current_active_key(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_feedback_expires_through_ticks() {
        let (mut app, _) = create_test_app();

        app.execute(AppCommand::CopySelected);
        settle(&mut app).await;
        assert!(app.feedback().is_active("GitHub"));

        tokio::time::advance(Duration::from_millis(2000)).await;
        settle(&mut app).await;
        assert_eq!(app.feedback().current_active_key(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_shows_nothing() {
        let clipboard = FakeClipboard::failing(ClipboardError::NotAvailable);
        let mut app = App::new(ProfileData::default(), clipboard);

        app.execute(AppCommand::CopySelected);
        settle(&mut app).await;

        assert_eq!(app.view().active_key, None);
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_open_rejected_link_reports_status() {
        let mut profile = ProfileData::default();
        profile.socials[0].url = "javascript:alert(1)".to_string();
        let mut app = App::new(profile, FakeClipboard::new());

        app.execute(AppCommand::OpenSelected);

        let status = app.status().unwrap();
        assert!(status.starts_with("[x]"), "{status}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_discards_pending_feedback() {
        let (mut app, _) = create_test_app();

        app.execute(AppCommand::CopySelected);
        app.execute(AppCommand::Quit);
        app.shutdown();
        settle(&mut app).await;

        assert!(app.exit);
        assert!(app.feedback().is_torn_down());
        assert_eq!(app.feedback().current_active_key(), None);
    }

    #[tokio::test]
    async fn test_empty_profile_is_safe() {
        let profile = ProfileData {
            socials: Vec::new(),
            ..ProfileData::default()
        };
        let mut app = App::new(profile, FakeClipboard::new());

        app.execute(AppCommand::MoveDown);
        app.execute(AppCommand::CopySelected);
        app.execute(AppCommand::OpenSelected);
        app.execute(AppCommand::MoveLast);

        assert_eq!(app.selected(), 0);
    }
}
