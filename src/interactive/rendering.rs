//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::output::formatters::{efficiency_bar, render_board};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_solutions(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("LETTER BOXED SOLVER")
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

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Board box
            Constraint::Length(6), // Selected pair
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_board_box(f, app, chunks[0]);
    render_selected(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_board_box(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = render_board(&app.solution.board)
        .lines()
        .map(|line| Line::from(line.to_uppercase()))
        .collect();

    let board = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_selected(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.revealed {
        app.selected_words()
            .iter()
            .map(|word| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<14}", word.text().to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(format!("[{}] ", efficiency_bar(word.efficiency(), 12))),
                    Span::styled(
                        format!("{:5.1}", word.efficiency()),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    } else {
        vec![Line::from("Press 'r' to reveal")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Efficiency ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Solutions ({}) | {} valid words ",
        app.solution.pairs.len(),
        app.solution.valid_words
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if !app.revealed {
        let hidden = Paragraph::new("Hidden").block(block);
        f.render_widget(hidden, area);
        return;
    }

    let items: Vec<ListItem> = app
        .solution
        .pairs
        .iter()
        .map(|pair| ListItem::new(format!("{pair:<30} {:>3}", pair.len() - 1)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let played = Paragraph::new(format!("Puzzles: {}", app.puzzles_played))
        .alignment(Alignment::Center);
    f.render_widget(played, chunks[0]);

    let help = Paragraph::new("q: Quit | n: New Puzzle | r: Reveal | ↑/↓: Select")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
