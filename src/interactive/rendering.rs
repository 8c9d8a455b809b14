//! TUI rendering with ratatui
//!
//! Board, status message, keyboard and session statistics.

use super::app::App;
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{Board, GameStatus, MessageKind, ROWS};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(1),               // Message
            Constraint::Length(ROWS as u16 + 2), // Board
            Constraint::Length(5),               // Keyboard
            Constraint::Min(0),                  // Spacer
            Constraint::Length(3),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_message(f, app, chunks[1]);
    render_board(f, app.game.board(), chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[5]);
}

const fn tile_style(feedback: Option<Feedback>) -> Style {
    match feedback {
        Some(Feedback::Correct) => Style::new().fg(Color::Black).bg(Color::Green),
        Some(Feedback::Present) => Style::new().fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => Style::new().fg(Color::White).bg(Color::DarkGray),
        None => Style::new().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.game.message() else {
        return;
    };
    let color = match message.kind {
        MessageKind::Notice => Color::Red,
        MessageKind::Win => Color::Green,
        MessageKind::Loss => Color::Yellow,
    };
    let paragraph = Paragraph::new(message.text.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, board: &Board, area: Rect) {
    let lines: Vec<Line> = (0..ROWS)
        .map(|row| {
            let spans: Vec<Span> = (0..WORD_LENGTH)
                .flat_map(|col| {
                    let letter = board.letter(row, col).unwrap_or('·');
                    let mut style = tile_style(board.colors()[row][col]);
                    if (row, col) == board.cursor() {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    [
                        Span::styled(format!(" {letter} "), style.add_modifier(Modifier::BOLD)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let colors = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    [
                        Span::styled(format!(" {} ", char::from(b)), tile_style(colors.get(b))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats = app.game.statistics();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let board = app.game.board();
    let progress = format!("Guess {}/{ROWS}", (board.row() + 1).min(ROWS));
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.game.status() {
        GameStatus::InProgress => "Type letters | Enter: Submit | ⌫: Delete | Esc: Quit",
        GameStatus::Won | GameStatus::Lost => "Ctrl-N: New Game | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
