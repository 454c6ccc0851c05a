//! Screen layout: board on the left, status and move list on the right.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{Board, Player, Square, Status};

const HELP: &str = "1-9/arrows+Enter: move  Tab: history  n: new game  q: quit";

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let [main, help] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());
    let [board_area, side_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(main);
    let [status_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(side_area);

    render_board(f, board_area, app);
    render_status(f, status_area, app);
    render_move_list(f, list_area, app);

    let help_line = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help_line, help);
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::bordered().title(title).border_style(style)
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.engine().current_board();
    let highlight = (app.focus() == Focus::Board).then_some(app.selected_cell());
    let width = board.cells().to_string().len();

    let mut lines = Vec::new();
    for row in 0..board.side() {
        if row > 0 {
            lines.push(
                Line::from(separator(board, width)).style(Style::default().fg(Color::DarkGray)),
            );
        }
        let mut spans = Vec::new();
        for col in 0..board.side() {
            if col > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let pos = row * board.side() + col;
            spans.push(square_span(board, pos, width, highlight == Some(pos)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(pane("Board", app.focus() == Focus::Board));
    f.render_widget(paragraph, area);
}

fn separator(board: &Board, width: usize) -> String {
    vec!["─".repeat(width); board.side()].join("─┼─")
}

fn square_span(board: &Board, pos: usize, width: usize, selected: bool) -> Span<'static> {
    let (text, style) = match board.squares()[pos] {
        Square::Empty => (
            format!("{:>width$}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!("{:>width$}", player.to_string()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };
    let style = if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Span::styled(text, style)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = app.engine().status();
    let style = match status {
        Status::Winner(player) => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default(),
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(style)
        .block(Block::bordered().title("Status"));
    f.render_widget(paragraph, area);
}

fn render_move_list(f: &mut Frame, area: Rect, app: &App) {
    let cursor = app.engine().cursor();
    let items: Vec<ListItem> = app
        .engine()
        .move_list()
        .into_iter()
        .map(|entry| {
            let style = if *entry.step() == cursor {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", entry.step() + 1, entry.label())).style(style)
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(pane("Moves", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(focused.then_some(app.selected_step()));
    f.render_stateful_widget(list, area, &mut state);
}
