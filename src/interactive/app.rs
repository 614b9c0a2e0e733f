//! TUI application state and logic

use crate::core::{ValidatedWord, validate};
use crate::solver::{GeneratorConfig, Solution, generate};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [String],
    pub solution: Solution,
    pub selected: usize,
    pub revealed: bool,
    pub messages: Vec<Message>,
    pub puzzles_played: usize,
    pub should_quit: bool,
    rng: StdRng,
    generator: GeneratorConfig,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app around an already-solved puzzle
    #[must_use]
    pub fn new(
        dictionary: &'a [String],
        solution: Solution,
        rng: StdRng,
        generator: GeneratorConfig,
    ) -> Self {
        let mut app = Self {
            dictionary,
            solution,
            selected: 0,
            revealed: false,
            messages: Vec::new(),
            puzzles_played: 1,
            should_quit: false,
            rng,
            generator,
        };
        app.add_message(
            "Find two words that use all 12 letters. Press 'r' to reveal solutions.",
            MessageStyle::Info,
        );
        app
    }

    pub fn new_puzzle(&mut self) {
        match generate(&mut self.rng, self.dictionary, self.generator) {
            Ok(solution) => {
                self.solution = solution;
                self.selected = 0;
                self.revealed = false;
                self.puzzles_played += 1;
                self.add_message(
                    &format!("New puzzle: {}", self.solution.board.letters().to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
        if self.revealed {
            self.add_message(
                &format!("{} solutions", self.solution.pairs.len()),
                MessageStyle::Info,
            );
        }
    }

    pub fn select_next(&mut self) {
        if self.revealed && self.selected + 1 < self.solution.pairs.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.revealed {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// The two words of the highlighted solution, re-validated for scoring
    #[must_use]
    pub fn selected_words(&self) -> Vec<ValidatedWord> {
        let Some(pair) = self.solution.pairs.get(self.selected) else {
            return Vec::new();
        };
        pair.split(' ')
            .filter_map(|word| validate(&self.solution.board, word))
            .collect()
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

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_puzzle(),
                KeyCode::Char('r') => app.toggle_reveal(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::solver::solve;
    use rand::SeedableRng;

    fn app(dictionary: &[String]) -> App<'_> {
        let board = Board::from_letters("abcdefghijkl").unwrap();
        let solution = solve(board, dictionary);
        App::new(
            dictionary,
            solution,
            StdRng::seed_from_u64(5),
            GeneratorConfig { max_attempts: 2 },
        )
    }

    fn dictionary() -> Vec<String> {
        ["adgjbehkci", "ifl", "iflif", "adgjbehkcfil", "lad"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn selection_requires_reveal() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        app.select_next();
        assert_eq!(app.selected, 0);

        app.toggle_reveal();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, app.solution.pairs.len() - 1);

        app.select_previous();
        assert_eq!(app.selected, app.solution.pairs.len() - 2);
    }

    #[test]
    fn selected_words_are_scored() {
        let dictionary = dictionary();
        let app = app(&dictionary);

        let words = app.selected_words();
        let texts: Vec<_> = words.iter().map(ValidatedWord::text).collect();
        assert_eq!(texts, vec!["adgjbehkci", "ifl"]);
    }

    #[test]
    fn failed_generation_keeps_current_puzzle() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        // This dictionary only solves the fixed board, not random ones
        app.new_puzzle();
        assert_eq!(app.solution.board.letters(), "abcdefghijkl");
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn messages_are_capped() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
