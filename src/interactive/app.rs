//! TUI application state and logic

use crate::config::OpenerChoice;
use crate::core::Vocabulary;
use crate::matrix::ScoreMatrix;
use crate::solver::deviation::{group_sizes, std_dev};
use crate::solver::{Gamer, PartitionSolver, SolverError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// State snapshot for undo functionality
#[derive(Clone)]
pub struct StateSnapshot<'a> {
    pub solver: PartitionSolver<'a>,
    pub history: Vec<HistoryEntry>,
}

/// Application state
pub struct App<'a> {
    pub solver: PartitionSolver<'a>,
    pub vocabulary: &'a Vocabulary,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
    pub undo_stack: Vec<StateSnapshot<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Score,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: String,
    pub score: u8,
    pub deviation: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: String,
    pub length: usize,
    /// Deviation of the split this guess makes among the current candidates
    pub deviation: f64,
    pub groups: usize,
    pub largest_group: usize,
    /// Whether the solver picked this word (as opposed to the player)
    pub suggested: bool,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Guess count -> games won with that many guesses
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            return 0.0;
        }
        let total: usize = self.guess_distribution.iter().map(|(g, n)| g * n).sum();
        total as f64 / self.games_won as f64
    }
}

impl<'a> App<'a> {
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the solver cannot be built for this vocabulary and matrix.
    pub fn new(
        vocabulary: &'a Vocabulary,
        matrix: &'a ScoreMatrix,
        opener: &OpenerChoice,
    ) -> Result<Self, SolverError> {
        let mut solver = PartitionSolver::from_choice(vocabulary, matrix, opener)?;
        solver.prepare_for_new_game();

        Ok(Self {
            solver,
            vocabulary,
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Think of one of the {} words in the list.", vocabulary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the score of each guess (letters shared, with repeats)".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Score,
            manual_word: String::new(),
            undo_stack: Vec::new(),
        })
    }

    pub fn compute_suggestion(&mut self) {
        match self.solver.guess_word() {
            Ok(word) => self.current_guess = self.describe(word.text(), true),
            Err(e) => {
                self.current_guess = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Partition metrics for a current candidate
    fn describe(&self, word: &str, suggested: bool) -> Option<GuessInfo> {
        let position = self
            .solver
            .candidates()
            .iter()
            .position(|w| w.text() == word)?;
        let sizes = group_sizes(self.solver.scores().row(position));

        Some(GuessInfo {
            word: word.to_string(),
            length: self.solver.candidates()[position].len(),
            deviation: std_dev(&sizes),
            groups: sizes.len(),
            largest_group: sizes.last().copied().unwrap_or(0),
            suggested,
        })
    }

    pub fn handle_score(&mut self, input: &str) {
        let Some(guess) = self.current_guess.clone() else {
            return;
        };
        let Ok(score) = input.trim().parse::<u8>() else {
            self.add_message("Invalid score! Type a number", MessageStyle::Error);
            return;
        };
        if usize::from(score) > guess.length {
            self.add_message(
                &format!("A score cannot exceed {} for this guess", guess.length),
                MessageStyle::Error,
            );
            return;
        }

        let snapshot = StateSnapshot {
            solver: self.solver.clone(),
            history: self.history.clone(),
        };
        let candidates_before = self.solver.candidate_count();

        match self.solver.result_of_guess(&guess.word, score) {
            Ok(()) => {
                self.undo_stack.push(snapshot);
                let candidates_after = self.solver.candidate_count();
                self.history.push(HistoryEntry {
                    guess: guess.word,
                    score,
                    deviation: guess.deviation,
                    candidates_before,
                    candidates_after,
                });
                self.compute_suggestion();
                self.add_message(
                    &format!("{candidates_after} candidates remaining"),
                    MessageStyle::Info,
                );
            }
            Err(SolverError::Exhausted { .. }) => {
                self.solver = snapshot.solver;
                self.add_message(
                    "No word in the list gives that score - check it and try again",
                    MessageStyle::Error,
                );
            }
            Err(e) => {
                self.solver = snapshot.solver;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
        self.input_buffer.clear();
    }

    pub fn handle_win(&mut self) {
        let Some(guess) = self.current_guess.clone() else {
            return;
        };

        let candidates = self.solver.candidate_count();
        self.history.push(HistoryEntry {
            guess: guess.word,
            score: u8::try_from(guess.length).unwrap_or(u8::MAX),
            deviation: guess.deviation,
            candidates_before: candidates,
            candidates_after: 1,
        });

        let guess_count = self.history.len();
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        *self.stats.guess_distribution.entry(guess_count).or_insert(0) += 1;

        self.input_mode = InputMode::WinCelebration;
        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Straight from the opener! 🌟".to_string(),
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
            3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
            n => format!("🎊 SOLVED in {n} guesses! 🎊"),
        };
        self.add_message(&celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        // A game abandoned midway counts as played, not won
        if !self.history.is_empty() && self.input_mode != InputMode::WinCelebration {
            self.stats.total_games += 1;
        }

        self.solver.prepare_for_new_game();
        self.history.clear();
        self.undo_stack.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Score;
        self.add_message(
            "New game started! I'll open with the best splitting word.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.solver = snapshot.solver;
            self.history = snapshot.history;
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
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

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.solver.candidate_count()
    }

    /// Current candidates with their deviations, best first, at most `limit`
    #[must_use]
    pub fn top_candidates(&self, limit: usize) -> Vec<(String, Option<f64>)> {
        let deviations = self.solver.deviations();
        let mut ranked: Vec<(String, Option<f64>)> = self
            .solver
            .candidates()
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), deviations.get(i).copied()))
            .collect();
        ranked.sort_by(|a, b| match (a.1, b.1) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => std::cmp::Ordering::Equal,
        });
        ranked.truncate(limit);
        ranked
    }

    pub fn use_manual_word(&mut self) {
        let word = self.manual_word.to_lowercase();

        if !self.vocabulary.contains(&word) {
            self.add_message(
                &format!("Word '{}' not in word list!", word.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let Some(info) = self.describe(&word, false) else {
            self.add_message(
                &format!("'{}' is already ruled out", word.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        };

        // Compare with suggested word if available
        if let Some(ref suggested) = self.current_guess
            && suggested.suggested
            && info.deviation > suggested.deviation
        {
            self.add_message(
                &format!(
                    "Note: suggested word splits more evenly ({:.2} vs {:.2})",
                    suggested.deviation, info.deviation
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (deviation {:.2}, {} groups)",
                word.to_uppercase(),
                info.deviation,
                info.groups
            ),
            MessageStyle::Success,
        );
        self.current_guess = Some(info);

        // Switch back to score mode
        self.input_mode = InputMode::Score;
        self.manual_word.clear();
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
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Compute initial suggestion
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Score => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    KeyCode::Char('w') => {
                        app.handle_win();
                    }
                    KeyCode::Tab => {
                        if app.get_candidates_count() > 0 {
                            app.input_mode = InputMode::ManualWord;
                            app.add_message("Enter a remaining word to try", MessageStyle::Info);
                        }
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_score(&input);
                    }
                    _ => {}
                },
                InputMode::ManualWord => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Score;
                        app.manual_word.clear();
                        app.add_message("Cancelled manual word entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Score;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_word.len() < app.vocabulary.max_word_len()
                            && c.is_ascii_alphabetic()
                        {
                            app.manual_word.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => {
                        app.use_manual_word();
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
