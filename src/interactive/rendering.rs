//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, notices and status bar.

use super::app::{App, MessageStyle};
use crate::core::LetterVerdict;
use crate::game::{GameStatus, PuzzleKind};
use crate::output::formatters::keyboard_layout;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let rows = u16::try_from(app.session.state().max_attempts()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Length(rows.saturating_add(2)), // Board
            Constraint::Length(5),                     // Keyboard
            Constraint::Min(3),                        // Messages
            Constraint::Length(1),                     // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = match app.session.puzzle_number() {
        Some(number) => format!("WORDLE DAILY #{number} · {}", app.session.locale()),
        None => format!("WORDLE PRACTICE · {}", app.session.locale()),
    };

    let header = Paragraph::new(title)
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

const fn verdict_style(verdict: LetterVerdict) -> Style {
    let bg = match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = app.session.state();
    let word_length = state.word_length();
    let blank = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(state.max_attempts());

    for (row, record) in state.history().iter().enumerate() {
        let visible = app.visible_tiles(row);
        let dancing = app.dancing_tile(row);
        let spans = record
            .guess
            .letters()
            .iter()
            .zip(record.feedback.verdicts())
            .enumerate()
            .flat_map(|(i, (&letter, &verdict))| {
                let style = if dancing == Some(i) {
                    verdict_style(verdict).add_modifier(Modifier::REVERSED)
                } else if i < visible {
                    verdict_style(verdict)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                tile(letter, style)
            });
        lines.push(Line::from(spans.collect::<Vec<_>>()));
    }

    if !state.is_over() {
        let style = if app.shake_until.is_some() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let pending = app.session.pending();
        let spans = (0..word_length).flat_map(|i| match pending.get(i) {
            Some(&letter) => tile(letter, style),
            None => tile('·', blank),
        });
        lines.push(Line::from(spans.collect::<Vec<_>>()));
    }

    while lines.len() < state.max_attempts() {
        let spans = (0..word_length).flat_map(|_| tile('·', blank));
        lines.push(Line::from(spans.collect::<Vec<_>>()));
    }

    let border = if app.shake_until.is_some() {
        Color::Red
    } else {
        Color::Cyan
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border)),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hints = app
        .session
        .state()
        .letter_hints_until(|row| app.visible_tiles(row));

    let lines: Vec<Line> = keyboard_layout(app.session.locale())
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let style = hints.get(&key).map_or_else(
                        || Style::default().fg(Color::White),
                        |&verdict| verdict_style(verdict),
                    );
                    [
                        Span::styled(key.to_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = app.session.state();
    let status_text = match (state.status(), app.session.kind()) {
        (GameStatus::InProgress, PuzzleKind::Daily) => format!("Daily · {}", app.session.date()),
        (GameStatus::InProgress, PuzzleKind::Practice) => "Practice".to_string(),
        (GameStatus::Won, _) => "Solved".to_string(),
        (GameStatus::Lost, _) => "Out of guesses".to_string(),
    };
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let attempts = format!("{}/{}", state.attempts_used(), state.max_attempts());
    f.render_widget(Paragraph::new(attempts).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Language | Ctrl-N: Practice")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
