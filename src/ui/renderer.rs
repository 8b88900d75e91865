use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::{Cell, Game, GameState};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    // Board rows plus borders; two characters per cell plus borders.
    let board_height = BOARD_HEIGHT as u16 + 2;
    let board_width = BOARD_WIDTH as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];

    render_board(f, game, board_area);

    if game.state == GameState::GameOver {
        render_game_over_overlay(f, board_area);
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let piece_blocks = game.piece.blocks();

    let mut board_lines = Vec::new();

    for y in 0..BOARD_HEIGHT {
        let mut line_spans = Vec::new();
        for x in 0..BOARD_WIDTH {
            // The active piece draws over whatever the grid holds.
            let cell = if piece_blocks.contains(&(x as i32, y as i32)) {
                Cell::Filled(game.piece.kind)
            } else {
                game.board.cell(x, y)
            };

            match cell {
                Cell::Filled(kind) => {
                    line_spans.push(Span::styled("██", Style::default().fg(kind.color())));
                }
                Cell::Empty => {
                    // Checkerboard pattern for the empty field
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("blockfall"),
    );

    f.render_widget(board_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 30, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press any key to exit")]),
    ];

    let overlay_widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(overlay_widget, popup_area);
}
