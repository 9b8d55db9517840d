//! TUI rendering with ratatui
//!
//! Visualizations for the overlap solver interface.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed individually at or below this count
const LIST_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 OVERLAP SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current guess info
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref guess) = app.current_guess else {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let label = if guess.suggested { "Suggested: " } else { "Trying:    " };
    let content = vec![
        Line::from(vec![
            Span::raw(label),
            Span::styled(
                guess.word.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Deviation: {:.3}", guess.deviation)),
        Line::from(format!("Groups:    {} possible scores", guess.groups)),
        Line::from(format!("Worst:     {} candidates", guess.largest_group)),
        Line::from(format!("Scores:    0 to {}", guess.length)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates_count = app.get_candidates_count();

    let content = if candidates_count == 0 {
        vec![Line::from("No candidates left")]
    } else if candidates_count <= LIST_LIMIT {
        let mut lines = vec![Line::from("Remaining (deviation):")];
        for (word, deviation) in app.top_candidates(LIST_LIMIT) {
            let deviation = deviation.map_or_else(|| "-".to_string(), |d| format!("{d:.2}"));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<14}", word.to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(deviation, Style::default().fg(Color::Cyan)),
            ]));
        }
        lines
    } else {
        let mut lines = vec![Line::from(format!("{candidates_count} candidates remaining"))];
        let best: Vec<String> = app
            .top_candidates(3)
            .into_iter()
            .filter(|(_, d)| d.is_some())
            .map(|(w, d)| format!("{} {:.2}", w.to_uppercase(), d.unwrap_or_default()))
            .collect();
        if !best.is_empty() {
            lines.push(Line::from(format!("Best splits: {}", best.join(", "))));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}: {} scored {} [{:.2}] {} → {}",
                app.history.len() - i,
                entry.guess.to_uppercase(),
                entry.score,
                entry.deviation,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Elimination gauge
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_elimination(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_elimination(f: &mut Frame, app: &App, area: Rect) {
    let total = app.vocabulary.len();
    let current = app.get_candidates_count();
    let eliminated = total.saturating_sub(current);
    let progress_pct = if total == 0 {
        0
    } else {
        (eliminated * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{eliminated}/{total} ruled out | {current} candidates remain"
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Score => (
            " Enter Score (letters in common) | w: it's my word | TAB for manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter a Remaining Word to Try | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Turn {}", app.history.len() + 1);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Avg: {:.2}",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.average_guesses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.get_candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.input_mode == InputMode::WinCelebration {
        "q: Quit | n: New Game"
    } else {
        "q: Quit | n: New | u: Undo | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
