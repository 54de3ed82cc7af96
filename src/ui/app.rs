use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, style::Color, Terminal};
use tracing::debug;

use super::script::end_message;
use crate::error::MoveError;
use crate::game::{Dimensions, GameSession};

/// Everything the terminal front end needs to start (and restart) a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub dimensions: Dimensions,
    pub colors: (Color, Color),
    pub announce_delay: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            dimensions: Dimensions::default(),
            colors: (Color::Red, Color::Yellow),
            announce_delay: Duration::from_millis(500),
        }
    }
}

pub struct App {
    settings: AppSettings,
    session: GameSession<Color>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    // End-of-game message waiting for its delay to pass
    announcement: Option<(Instant, String)>,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        App {
            settings,
            session: new_session(&settings),
            selected_column: settings.dimensions.width() / 2, // Start in middle
            should_quit: false,
            message: None,
            announcement: None,
        }
    }

    pub fn session(&self) -> &GameSession<Color> {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Promote a pending end-of-game announcement once its time has come.
    pub fn tick(&mut self, now: Instant) {
        if self
            .announcement
            .as_ref()
            .is_some_and(|(due, _)| now >= *due)
        {
            self.message = self.announcement.take().map(|(_, text)| text);
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Keep the announcement up once it has been shown
        if self.announcement.is_none() && !self.session.is_terminal() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.settings.dimensions.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Rematch: a finished session is never reused
                self.session = new_session(&self.settings);
                self.selected_column = self.settings.dimensions.width() / 2;
                self.announcement = None;
                self.message = Some("New game started!".to_string());
                debug!("rematch");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.try_apply_move(self.selected_column) {
            Ok(result) => {
                if result.ends_game() {
                    if let Some(text) = end_message(self.session.status()) {
                        let due = Instant::now() + self.settings.announce_delay;
                        self.announcement = Some((due, text));
                    }
                }
            }
            Err(MoveError::SessionTerminated) => {
                if self.message.is_none() && self.announcement.is_none() {
                    self.message = Some("Game over! Press 'r' for a rematch.".to_string());
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::ColumnOutOfRange { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

fn new_session(settings: &AppSettings) -> GameSession<Color> {
    let (first, second) = settings.colors;
    GameSession::with_dimensions(first, second, settings.dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, PlayerId};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn drop_in(app: &mut App, column: usize) {
        while app.selected_column() > column {
            press(app, KeyCode::Left);
        }
        while app.selected_column() < column {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Enter);
    }

    fn instant_settings() -> AppSettings {
        AppSettings {
            announce_delay: Duration::ZERO,
            ..AppSettings::default()
        }
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::default();
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(instant_settings());
        for _ in 0..6 {
            drop_in(&mut app, 3);
        }
        drop_in(&mut app, 3);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.session().move_count(), 6);
    }

    #[test]
    fn test_win_is_announced_after_delay() {
        let mut app = App::new(AppSettings {
            announce_delay: Duration::from_secs(3600),
            ..AppSettings::default()
        });
        for column in [0, 1, 0, 1, 0, 1, 0] {
            drop_in(&mut app, column);
        }
        assert_eq!(app.session().status(), GameStatus::Won(PlayerId::One));
        app.tick(Instant::now());
        assert_eq!(app.message(), None);

        app.tick(Instant::now() + Duration::from_secs(7200));
        assert_eq!(app.message(), Some("Player 1 won!"));
    }

    #[test]
    fn test_input_refused_after_game_over() {
        let mut app = App::new(instant_settings());
        for column in [0, 1, 0, 1, 0, 1, 0] {
            drop_in(&mut app, column);
        }
        app.tick(Instant::now());
        let board = app.session().board().clone();

        drop_in(&mut app, 4);
        assert_eq!(app.session().board(), &board);
        assert_eq!(app.message(), Some("Player 1 won!"));
    }

    #[test]
    fn test_rematch_starts_fresh_session() {
        let mut app = App::new(instant_settings());
        for column in [0, 1, 0, 1, 0, 1, 0] {
            drop_in(&mut app, column);
        }
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.session().is_terminal());
        assert_eq!(app.session().move_count(), 0);
        assert_eq!(
            *app.session().active_player().unwrap().attribute(),
            Color::Red
        );
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
