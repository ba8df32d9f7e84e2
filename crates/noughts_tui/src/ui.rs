//! Stateless UI rendering.

use noughts_core::{Board, MoveOrder, Player, Position, Square, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Focus};

/// Renders the whole screen: title, board, status, move list, key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(12),    // Board and move list
            Constraint::Length(1),  // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    // Status is derived once per frame; the winner check inside
    // status() runs before the draw check.
    let status = app.game().status();

    draw_board(frame, panes[0], app, &status);
    draw_info(frame, panes[1], app);

    let help = Paragraph::new("arrows move | Enter/1-9 play | Tab move list | o order | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, status: &Status) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row) in [0usize, 1, 2].into_iter().enumerate() {
        if i > 0 {
            draw_separator(frame, rows[2 * i - 1]);
        }
        draw_row(frame, rows[2 * i], app, status, row);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, status: &Status, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if col > 0 {
            draw_vertical_separator(frame, cols[2 * col - 1]);
        }
        let pos = Position::from_index(row * 3 + col).expect("row and col are on the grid");
        draw_cell(frame, cols[2 * col], app, status, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, status: &Status, pos: Position) {
    let board: &Board = app.game().current();

    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Winning cells shade green; on a draw the whole board shades yellow.
    match status {
        Status::Won(win) if win.contains(pos) => {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        Status::Draw => {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        _ => {}
    }

    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let status_text = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[0]);

    draw_move_list(frame, chunks[1], app);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();

    let mut items: Vec<ListItem> = game
        .snapshots()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| {
            let desc = match snapshot.played() {
                Some(pos) => format!("Go to Move #{}: ({})", step, pos.coord_label()),
                None => "Go to Game Start".to_string(),
            };

            let mut style = Style::default();
            // Bold only while the jumped-to entry is still current.
            if game.selected() == Some(step) && game.step() == step {
                style = style.add_modifier(Modifier::BOLD);
            }
            if app.focus() == Focus::History && app.list_cursor() == step {
                style = style.bg(Color::DarkGray);
            }

            ListItem::new(Line::from(Span::styled(desc, style)))
        })
        .collect();

    if game.order() == MoveOrder::Descending {
        items.reverse();
    }

    let title = format!("Moves ({})", game.order());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
