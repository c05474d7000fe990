//! Stateless rendering of the game view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameView, Mark, Position};

use super::app::App;
use crate::config::Settings;

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 5;

/// Renders the board, the status line and the key help.
pub fn draw(frame: &mut Frame, app: &App, settings: &Settings) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + turn
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let turn = Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(settings.symbol(view.turn()).to_string(), mark_style(view.turn())),
    ]);
    let header = Paragraph::new(vec![
        Line::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        turn,
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_board(frame, chunks[1], &view, app.cursor(), settings);

    let status = Paragraph::new(view.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = if view.replay_visible() {
        "Game over - r: replay  q: quit"
    } else {
        "arrows: move  enter/space: place  1-9: place  r: restart  q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, settings: &Settings) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for row in 0..3 {
        if row > 0 {
            let rule = "─".repeat(CELL_WIDTH as usize);
            lines.push(Line::styled(
                format!("{rule}┼{rule}┼{rule}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::from_row_col(row, col) {
                spans.push(cell_span(view, pos, cursor, settings));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(view: &GameView, pos: Position, cursor: Position, settings: &Settings) -> Span<'static> {
    let (symbol, mut style) = match view.mark_at(pos) {
        Some(mark) => (settings.symbol(mark), mark_style(mark)),
        None => (' ', Style::default()),
    };

    if view.is_highlighted(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor && !view.replay_visible() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let width = CELL_WIDTH as usize;
    Span::styled(format!("{symbol:^width$}"), style)
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::Cross => Color::Blue,
        Mark::Circle => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, app, &Settings::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_game_shows_playing_status() {
        let screen = render(&App::new());
        assert!(screen.contains("Playing"));
        assert!(screen.contains("Turn: X"));
        assert!(!screen.contains("replay"));
    }

    #[test]
    fn test_finished_game_offers_replay() {
        let mut app = App::new();
        for key in ['1', '2', '4', '5', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("X wins"));
        assert!(screen.contains("r: replay"));
    }
}
