//! TUI application state and event loop

use crate::game::{Action, Effect, Game, MessageToken};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long to wait for input when no clear is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a key press means to the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    NewGame,
    Quit,
}

/// Map a crossterm key event to a command; unknown keys map to `None`
#[must_use]
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('n') => Some(Command::NewGame),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::Play(Action::Submit)),
        KeyCode::Backspace => Some(Command::Play(Action::Delete)),
        KeyCode::Char(c) => Action::letter(c).map(Command::Play),
        _ => None,
    }
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub rng: StdRng,
    pub should_quit: bool,
    pending_clears: Vec<(Instant, MessageToken)>,
}

impl<'a> App<'a> {
    #[must_use]
    pub const fn new(game: Game<'a>, rng: StdRng) -> Self {
        Self {
            game,
            rng,
            should_quit: false,
            pending_clears: Vec::new(),
        }
    }

    /// Handle one key press received at `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match command_for(key) {
            Some(Command::Play(action)) => self.play(action, now),
            Some(Command::NewGame) => self.new_game(),
            Some(Command::Quit) => self.should_quit = true,
            None => {}
        }
    }

    fn play(&mut self, action: Action, now: Instant) {
        let step = self.game.apply(action);
        for effect in step.effects {
            if let Effect::ScheduleClear { token, after } = effect {
                self.pending_clears.push((now + after, token));
            }
        }
    }

    pub fn new_game(&mut self) {
        let target = self.game.dictionary().random_answer(&mut self.rng).clone();
        self.game.restart(target);
    }

    /// Fire every scheduled clear that is due by `now`
    ///
    /// Each clear only removes the message it was scheduled for.
    pub fn tick(&mut self, now: Instant) {
        let game = &mut self.game;
        self.pending_clears.retain(|&(due, token)| {
            if due > now {
                return true;
            }
            if game.clear_message(token) {
                debug!(?token, "message cleared");
            }
            false
        });
    }

    /// Time until the next scheduled clear, capped at the idle poll
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.pending_clears
            .iter()
            .map(|&(due, _)| due.saturating_duration_since(now))
            .min()
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL))
    }

    #[must_use]
    pub fn pending_clear_count(&self) -> usize {
        self.pending_clears.len()
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
