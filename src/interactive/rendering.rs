//! TUI rendering with ratatui
//!
//! Layout and widgets for the scramble game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{score_verdict, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

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

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
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
    if app.input_mode == InputMode::GameOver {
        render_final_score(f, app, area);
    } else {
        render_scrambled_word(f, app, area);
    }
}

fn render_scrambled_word(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.ui_state;
    let letters_style = if state.is_guessed_word_wrong {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_letters(&state.current_scrambled_word),
            letters_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Unscramble the word using all the letters.",
            Style::default().fg(Color::Gray),
        )),
    ];

    if state.is_guessed_word_wrong {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Wrong guess!",
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word {} ", state.current_word_count))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_final_score(f: &mut Frame, app: &App, area: Rect) {
    let config = app.game.config();
    let best = config.best_score();
    let score = app.ui_state.score;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Congratulations!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(score_verdict(score, best)),
        Line::from(vec![
            Span::raw("You scored: "),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" / {best}")),
        ]),
        Line::from(""),
        Line::from("Press 'n' to play again or 'q' to exit"),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Round gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_round_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let max_rounds = app.game.config().max_rounds();
    let round = app.ui_state.current_word_count;
    let progress_pct = (u64::from(round) * 100 / u64::from(max_rounds.max(1))).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{round}/{max_rounds} words | score {}",
            app.ui_state.score
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
        InputMode::GameOver => (
            " 🎉 GAME OVER! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing if app.ui_state.is_guessed_word_wrong => (
            " Wrong guess! Try again | Enter: Submit | TAB: Skip ",
            app.guess().to_uppercase(),
            Color::Red,
        ),
        InputMode::Guessing => (
            " Enter your word | Enter: Submit | TAB: Skip ",
            app.guess().to_uppercase(),
            Color::Yellow,
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

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!(
        "Solved: {} | Skipped: {}",
        app.stats.words_solved, app.stats.words_skipped
    );
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | TAB: Skip",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
