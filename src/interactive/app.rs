//! TUI application state and logic

use crate::game::{GameManager, GameUiState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::watch;

/// Longest guess the input field accepts
const MAX_GUESS_LEN: usize = 32;

/// Application state
///
/// The app never mutates game state itself: it forwards key presses to the
/// manager and renders the last snapshot it received.
pub struct App {
    pub game: GameManager,
    state_rx: watch::Receiver<GameUiState>,
    /// Last snapshot observed from the manager
    pub ui_state: GameUiState,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics across games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub words_solved: usize,
    pub words_skipped: usize,
}

impl App {
    #[must_use]
    pub fn new(game: GameManager) -> Self {
        let mut state_rx = game.subscribe();
        let ui_state = state_rx.borrow_and_update().clone();

        Self {
            game,
            state_rx,
            ui_state,
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess and press Enter. TAB skips the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Text currently in the guess field
    #[must_use]
    pub fn guess(&self) -> &str {
        self.game.user_guess()
    }

    pub fn type_char(&mut self, c: char) {
        if self.guess().len() < MAX_GUESS_LEN && c.is_alphabetic() {
            let mut guess = self.guess().to_string();
            guess.push(c);
            self.game.update_user_guess(guess);
        }
    }

    pub fn backspace(&mut self) {
        let mut guess = self.guess().to_string();
        guess.pop();
        self.game.update_user_guess(guess);
    }

    pub fn submit_guess(&mut self) {
        if self.guess().is_empty() {
            self.add_message("Type a guess first!", MessageStyle::Error);
            return;
        }
        let guess = self.guess().to_uppercase();
        self.game.check_user_guess();

        let previous = self.sync_state();
        if self.ui_state.is_guessed_word_wrong {
            self.add_message(&format!("{guess} is not it. Try again!"), MessageStyle::Error);
        } else if advanced(&previous, &self.ui_state) {
            self.stats.words_solved += 1;
            self.add_message(
                &format!(
                    "✅ {guess} is correct! +{}",
                    self.ui_state.score.saturating_sub(previous.score)
                ),
                MessageStyle::Success,
            );
        }
        self.check_game_over();
    }

    pub fn skip_word(&mut self) {
        self.game.skip_word();
        self.sync_state();
        self.stats.words_skipped += 1;
        self.add_message("Word skipped", MessageStyle::Info);
        self.check_game_over();
    }

    pub fn new_game(&mut self) {
        self.game.reset_game();
        self.sync_state();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Pull the latest snapshot if one was published, returning the previous one
    fn sync_state(&mut self) -> GameUiState {
        let previous = self.ui_state.clone();
        if self.state_rx.has_changed().unwrap_or(false) {
            self.ui_state = self.state_rx.borrow_and_update().clone();
        }
        previous
    }

    fn check_game_over(&mut self) {
        if self.ui_state.is_game_over && self.input_mode != InputMode::GameOver {
            self.input_mode = InputMode::GameOver;
            self.stats.games_played += 1;
            self.stats.best_score = self.stats.best_score.max(self.ui_state.score);

            self.add_message(
                &format!("🎉 Game over! You scored {}", self.ui_state.score),
                MessageStyle::Success,
            );
            self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys on the final score screen
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.skip_word();
                    }
                    KeyCode::Char(c) => {
                        app.type_char(c);
                    }
                    KeyCode::Backspace => {
                        app.backspace();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// A round ended between two snapshots: either the next word is up or the
/// game just finished
fn advanced(previous: &GameUiState, current: &GameUiState) -> bool {
    current.current_word_count > previous.current_word_count
        || (current.is_game_over && !previous.is_game_over)
}
