use super::state::{Cell, Snapshot};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Each grid cell is two terminal columns wide so it looks square
const CELL_WIDTH: u16 = 2;

#[derive(Debug)]
pub struct SnakeRenderer;

impl SnakeRenderer {
    pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
        let board = Rect::new(
            0,
            0,
            snapshot.grid_width.saturating_mul(CELL_WIDTH).saturating_add(2),
            snapshot.grid_height.saturating_add(2),
        )
        .intersection(frame.area());

        let title = format!(" Snake | Score: {} ", snapshot.score);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(Paragraph::new(Self::grid_lines(snapshot)).block(block), board);

        if snapshot.over {
            Self::render_game_over(frame, board, snapshot.score);
        } else {
            let help = Paragraph::new("[WASD/Arrows] Steer  [Q/Esc] Quit")
                .style(Style::default().fg(Color::Gray));
            let help_area = Rect::new(board.x, board.bottom(), board.width, 1).intersection(frame.area());
            frame.render_widget(help, help_area);
        }
    }

    fn grid_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
        let head = snapshot.body.first().copied();
        (0..i32::from(snapshot.grid_height))
            .map(|row| {
                let spans: Vec<Span> = (0..i32::from(snapshot.grid_width))
                    .map(|col| {
                        let cell = Cell::new(col, row);
                        if Some(cell) == head {
                            Span::styled("██", Style::default().fg(Color::LightGreen))
                        } else if snapshot.body.contains(&cell) {
                            Span::styled("██", Style::default().fg(Color::Green))
                        } else if cell == snapshot.food {
                            Span::styled("██", Style::default().fg(Color::Red))
                        } else {
                            Span::raw("  ")
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_game_over(frame: &mut Frame, board: Rect, score: u32) {
        let width = 24.min(board.width);
        let height = 4.min(board.height);
        let popup = Rect::new(
            board.x + (board.width - width) / 2,
            board.y + (board.height - height) / 2,
            width,
            height,
        );

        let text = vec![
            Line::from("Game Over!").style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Line::from(format!("Score: {score}")),
        ];
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::state::Direction;
    use ratatui::backend::TestBackend;

    fn snapshot(over: bool) -> Snapshot {
        Snapshot {
            grid_width: 10,
            grid_height: 8,
            body: vec![Cell::new(3, 2), Cell::new(2, 2)],
            food: Cell::new(7, 5),
            direction: Direction::Right,
            score: 4,
            over,
        }
    }

    fn draw(snapshot: &Snapshot) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal.draw(|f| SnakeRenderer::render(f, snapshot)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_title_shows_score() {
        let buffer = draw(&snapshot(false));
        assert!(row_text(&buffer, 0).contains("Score: 4"));
    }

    #[test]
    fn test_cells_are_drawn_in_colors() {
        let buffer = draw(&snapshot(false));
        // border offset of 1, two columns per cell
        let head = &buffer[(1 + 3 * CELL_WIDTH, 1 + 2)];
        assert_eq!(head.symbol(), "█");
        assert_eq!(head.fg, Color::LightGreen);

        let body = &buffer[(1 + 2 * CELL_WIDTH, 1 + 2)];
        assert_eq!(body.fg, Color::Green);

        let food = &buffer[(1 + 7 * CELL_WIDTH, 1 + 5)];
        assert_eq!(food.symbol(), "█");
        assert_eq!(food.fg, Color::Red);

        assert_eq!(buffer[(1, 1)].symbol(), " ");
    }

    #[test]
    fn test_game_over_banner() {
        let playing = draw(&snapshot(false));
        let all: String = (0..14).map(|y| row_text(&playing, y)).collect();
        assert!(!all.contains("Game Over!"));

        let over = draw(&snapshot(true));
        let all: String = (0..14).map(|y| row_text(&over, y)).collect();
        assert!(all.contains("Game Over!"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(5, 3)).unwrap();
        terminal
            .draw(|f| SnakeRenderer::render(f, &snapshot(true)))
            .unwrap();
    }
}
