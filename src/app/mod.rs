//! Application state and event handling

pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::quiz::{Phase, QuizController};
use crate::ui;
use command::{Command, ParseResult, parse_command};
use input::{Action, key_with_modifier_to_action, normal_key_to_action};
use state::{AppState, Focus, Screen};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// UI state
    state: AppState,

    /// Quiz engine
    quiz: QuizController,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, quiz: QuizController) -> Result<Self> {
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, state: AppState::default(), quiz, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let theme = self.config.active_theme();
        self.quiz.start();

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, self.quiz.session(), &theme);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match handle_key(&mut self.state, &mut self.quiz, key.code, key.modifiers)
                        {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                                self.state.command_line.set_error(e.to_string());
                            }
                        }
                    }
                }
            }

            // Lookups and timers that finished since the last frame
            self.quiz.pump();
        }

        self.restore_terminal()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Handle a key press, returns true if should exit
pub fn handle_key(
    state: &mut AppState,
    quiz: &mut QuizController,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Result<bool> {
    if let Some(action) = key_with_modifier_to_action(key, modifiers) {
        return perform(state, quiz, action);
    }

    if state.screen == Screen::Help {
        // Any key closes help
        state.screen = Screen::Quiz;
        return Ok(false);
    }

    match state.focus {
        Focus::Answer => {
            match key {
                KeyCode::Enter => submit_answer(state, quiz),
                KeyCode::Esc => state.focus = Focus::Normal,
                KeyCode::Backspace => state.answer.delete_char(),
                KeyCode::Delete => state.answer.delete_char_forward(),
                KeyCode::Left => state.answer.move_left(),
                KeyCode::Right => state.answer.move_right(),
                KeyCode::Home => state.answer.move_start(),
                KeyCode::End => state.answer.move_end(),
                KeyCode::Char(c) => state.answer.insert_char(c),
                _ => {}
            }
            Ok(false)
        }
        Focus::Normal => match normal_key_to_action(key) {
            Some(action) => perform(state, quiz, action),
            None => Ok(false),
        },
        Focus::Command => {
            match key {
                KeyCode::Enter => {
                    let line = state.command_line.input.text.clone();
                    state.command_line.add_to_history(line.trim().to_string());
                    state.command_line.exit();
                    state.focus = Focus::Answer;
                    return run_command(state, quiz, &line);
                }
                KeyCode::Esc => {
                    state.command_line.exit();
                    state.focus = Focus::Normal;
                }
                KeyCode::Backspace => {
                    if state.command_line.input.text.is_empty() {
                        state.command_line.exit();
                        state.focus = Focus::Normal;
                    } else {
                        state.command_line.input.delete_char();
                    }
                }
                KeyCode::Delete => state.command_line.input.delete_char_forward(),
                KeyCode::Left => state.command_line.input.move_left(),
                KeyCode::Right => state.command_line.input.move_right(),
                KeyCode::Home => state.command_line.input.move_start(),
                KeyCode::End => state.command_line.input.move_end(),
                KeyCode::Up => state.command_line.history_up(),
                KeyCode::Down => state.command_line.history_down(),
                KeyCode::Char(c) => state.command_line.input.insert_char(c),
                _ => {}
            }
            Ok(false)
        }
    }
}

fn perform(state: &mut AppState, quiz: &mut QuizController, action: Action) -> Result<bool> {
    match action {
        Action::Answer => state.focus = Focus::Answer,
        Action::Command => {
            state.command_line.enter("");
            state.focus = Focus::Command;
        }
        Action::AddWord => {
            state.command_line.enter("add ");
            state.focus = Focus::Command;
        }
        Action::DeleteCurrent => return run(state, quiz, Command::Delete(None)),
        Action::Reveal => return run(state, quiz, Command::Reveal),
        Action::CycleMode => {
            let next = quiz.session().mode().next();
            return run(state, quiz, Command::Mode(next));
        }
        Action::ScrollUp => state.word_list.scroll_up(),
        Action::ScrollDown => state.word_list.scroll_down(quiz.session().words().len()),
        Action::Help => state.screen = Screen::Help,
        Action::Quit => return Ok(true),
    }
    Ok(false)
}

fn submit_answer(state: &mut AppState, quiz: &mut QuizController) {
    // Typing ahead while a lookup runs keeps the text for later
    if quiz.session().phase() != Phase::AwaitingAnswer {
        return;
    }
    let answer = state.answer.take();
    quiz.submit(&answer);
}

/// Parse and execute a command line, returns true if should exit
pub fn run_command(state: &mut AppState, quiz: &mut QuizController, line: &str) -> Result<bool> {
    match parse_command(line) {
        ParseResult::Ok(command) => run(state, quiz, command),
        ParseResult::UnknownCommand(cmd) => {
            state.command_line.set_error(format!("Unknown command: {}", cmd));
            Ok(false)
        }
        ParseResult::MissingArgument(cmd) => {
            state.command_line.set_error(format!(":{} needs an argument", cmd));
            Ok(false)
        }
        ParseResult::InvalidArgument(arg) => {
            state
                .command_line
                .set_error(format!("Unknown mode: {} (random, sequential, alphabetical)", arg));
            Ok(false)
        }
    }
}

fn run(state: &mut AppState, quiz: &mut QuizController, command: Command) -> Result<bool> {
    match command {
        Command::Add(word) => {
            if let Err(e) = quiz.add_word(&word) {
                tracing::debug!("Rejected word {:?}: {}", word, e);
            }
            state.command_line.clear_message();
        }
        Command::Delete(Some(word)) => {
            quiz.delete_word(&word);
            state.command_line.clear_message();
        }
        Command::Delete(None) => match quiz.session().current_word().map(str::to_string) {
            Some(word) => {
                quiz.delete_current();
                state.command_line.set_message(format!("Deleted \"{}\"", word));
            }
            None => state.command_line.set_error("No word to delete"),
        },
        Command::Mode(mode) => {
            quiz.set_mode(mode);
            state.answer.clear();
            state.command_line.set_message(format!("Mode: {}", mode.display_name()));
        }
        Command::Reveal => {
            if !quiz.reveal() {
                state.command_line.set_error("Nothing to reveal yet");
            }
        }
        Command::Help => state.screen = Screen::Help,
        Command::Quit => return Ok(true),
        Command::Nop => state.command_line.clear_message(),
    }

    if let Some(word) = quiz.session().current_word() {
        if let Some(index) = quiz.session().words().iter().position(|w| w == word) {
            state.word_list.ensure_visible(index);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::quiz::{QuizSession, Selector};
    use crate::translate::{Fetch, FetchError, Translations};
    use crate::words::{IterationMode, MemoryWordStore};

    /// Translates every word to its upper-case form
    struct Upper;

    #[async_trait]
    impl Fetch for Upper {
        async fn fetch(&self, word: &str) -> Result<Translations, FetchError> {
            Ok(Translations { authoritative: word.to_uppercase(), ..Default::default() })
        }
    }

    fn quiz(words: &[&str]) -> QuizController {
        let mut store = MemoryWordStore::with_words(words.iter().copied());
        store.mode = IterationMode::Sequential;
        let session = QuizSession::open(Box::new(store), Selector::default()).unwrap();
        let mut quiz = QuizController::new(session, Arc::new(Upper), Duration::from_secs(60));
        quiz.start();
        quiz
    }

    fn type_text(state: &mut AppState, quiz: &mut QuizController, text: &str) {
        for c in text.chars() {
            handle_key(state, quiz, KeyCode::Char(c), KeyModifiers::NONE).unwrap();
        }
    }

    fn press(state: &mut AppState, quiz: &mut QuizController, key: KeyCode) -> bool {
        handle_key(state, quiz, key, KeyModifiers::NONE).unwrap()
    }

    #[tokio::test]
    async fn typing_and_enter_submits_answer() {
        let mut state = AppState::default();
        let mut quiz = quiz(&["cat"]);
        quiz.next_event().await;

        type_text(&mut state, &mut quiz, "cat");
        press(&mut state, &mut quiz, KeyCode::Enter);

        assert_eq!(quiz.session().phase(), Phase::Judged);
        assert!(state.answer.text.is_empty());
    }

    #[tokio::test]
    async fn enter_while_loading_keeps_text() {
        let mut state = AppState::default();
        let mut quiz = quiz(&["cat"]);

        type_text(&mut state, &mut quiz, "ca");
        press(&mut state, &mut quiz, KeyCode::Enter);

        assert_eq!(quiz.session().phase(), Phase::Fetching);
        assert_eq!(state.answer.text, "ca");
    }

    #[tokio::test]
    async fn add_command_from_normal_mode() {
        let mut state = AppState::default();
        let mut quiz = quiz(&[]);

        press(&mut state, &mut quiz, KeyCode::Esc);
        press(&mut state, &mut quiz, KeyCode::Char('a'));
        assert_eq!(state.focus, Focus::Command);
        type_text(&mut state, &mut quiz, "hello");
        press(&mut state, &mut quiz, KeyCode::Enter);

        assert_eq!(quiz.session().words(), ["hello".to_string()]);
        assert_eq!(quiz.session().current_word(), Some("hello"));
        assert_eq!(state.focus, Focus::Answer);
        assert_eq!(state.command_line.history, vec!["add hello".to_string()]);
    }

    #[tokio::test]
    async fn cycle_mode_key() {
        let mut state = AppState::default();
        let mut quiz = quiz(&["b", "a"]);

        press(&mut state, &mut quiz, KeyCode::Esc);
        press(&mut state, &mut quiz, KeyCode::Char('m'));

        assert_eq!(quiz.session().mode(), IterationMode::Alphabetical);
        assert_eq!(quiz.session().current_word(), Some("a"));
    }

    #[tokio::test]
    async fn reveal_before_lookup_reports_error() {
        let mut state = AppState::default();
        let mut quiz = quiz(&["cat"]);

        handle_key(&mut state, &mut quiz, KeyCode::Char('r'), KeyModifiers::CONTROL).unwrap();
        assert!(state.command_line.is_error);

        quiz.next_event().await;
        handle_key(&mut state, &mut quiz, KeyCode::Char('r'), KeyModifiers::CONTROL).unwrap();
        assert!(quiz.session().round().unwrap().revealed);
    }

    #[tokio::test]
    async fn unknown_command_sets_error() {
        let mut state = AppState::default();
        let mut quiz = quiz(&[]);

        assert!(!run_command(&mut state, &mut quiz, "bogus").unwrap());
        assert!(state.command_line.is_error);
        assert!(!run_command(&mut state, &mut quiz, "mode sideways").unwrap());
        assert!(state.command_line.message.as_deref().unwrap().contains("sideways"));
    }

    #[tokio::test]
    async fn blank_add_is_silent() {
        let mut state = AppState::default();
        let mut quiz = quiz(&[]);

        assert!(!run_command(&mut state, &mut quiz, "add    ").unwrap());
        assert!(state.command_line.message.is_none());
        assert!(quiz.session().words().is_empty());
        assert_eq!(quiz.session().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn delete_without_words_reports_error() {
        let mut state = AppState::default();
        let mut quiz = quiz(&[]);

        run_command(&mut state, &mut quiz, "delete").unwrap();
        assert!(state.command_line.is_error);
    }

    #[tokio::test]
    async fn quit_command_and_ctrl_c() {
        let mut state = AppState::default();
        let mut quiz = quiz(&[]);

        assert!(run_command(&mut state, &mut quiz, "q").unwrap());
        assert!(
            handle_key(&mut state, &mut quiz, KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap()
        );
    }

    #[tokio::test]
    async fn help_closes_on_any_key() {
        let mut state = AppState::default();
        let mut quiz = quiz(&[]);

        press(&mut state, &mut quiz, KeyCode::Esc);
        press(&mut state, &mut quiz, KeyCode::Char('?'));
        assert_eq!(state.screen, Screen::Help);
        press(&mut state, &mut quiz, KeyCode::Char('x'));
        assert_eq!(state.screen, Screen::Quiz);
    }
}
