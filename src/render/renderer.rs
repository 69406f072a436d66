use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, GameStatus, Position};
use crate::metrics::GameMetrics;

/// What a single board cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Head,
    Body,
    Food,
}

/// Classify a board cell. The head marker wins over body and food.
pub fn cell_at(state: &GameState, pos: Position) -> Cell {
    if state.snake.head() == Some(pos) {
        Cell::Head
    } else if state.snake.contains(pos) {
        Cell::Body
    } else if state.food == Some(pos) {
        Cell::Food
    } else {
        Cell::Empty
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.status() {
            GameStatus::Running | GameStatus::Paused => {
                frame.render_widget(self.render_grid(state), game_area);
            }
            GameStatus::Lost | GameStatus::Won => {
                // Keep the final board visible above the result panel
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(5)])
                    .split(game_area);
                frame.render_widget(self.render_grid(state), parts[0]);
                frame.render_widget(self.render_game_over(state), parts[1]);
            }
        }

        frame.render_widget(self.render_controls(state), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..state.height as i32)
            .map(|y| {
                let spans: Vec<Span> = (0..state.width as i32)
                    .map(|x| match cell_at(state, Position::new(x, y)) {
                        Cell::Head => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                        Cell::Food => Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let border_color = if state.paused {
            Color::Yellow
        } else {
            Color::White
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(format!(" Snake - {} ", state.status_text())),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Wins: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.games_won.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let (headline, color) = if state.won {
            ("YOU WIN", Color::Green)
        } else {
            ("GAME OVER", Color::Red)
        };

        let text = vec![
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {} | ", state.pause_label())),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedRandom, GameConfig, create_initial_state, step_state, toggle_pause};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_cell_classification() {
        let state = create_initial_state(&GameConfig::new(6, 6), &mut FixedRandom(0.0)).unwrap();

        assert_eq!(cell_at(&state, Position::new(3, 3)), Cell::Head);
        assert_eq!(cell_at(&state, Position::new(2, 3)), Cell::Body);
        assert_eq!(cell_at(&state, Position::new(1, 3)), Cell::Body);
        assert_eq!(cell_at(&state, Position::new(0, 0)), Cell::Food);
        assert_eq!(cell_at(&state, Position::new(5, 5)), Cell::Empty);
    }

    fn rendered_text(state: &GameState) -> String {
        rendered_text_with(state, &GameMetrics::new())
    }

    fn rendered_text_with(state: &GameState, metrics: &GameMetrics) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = Renderer::new();
        terminal
            .draw(|frame| renderer.render(frame, state, metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_status_and_pause_label() {
        let state = create_initial_state(&GameConfig::new(6, 6), &mut FixedRandom(0.0)).unwrap();
        let text = rendered_text(&state);
        assert!(text.contains("Running"));
        assert!(text.contains("Pause"));

        let paused = toggle_pause(&state);
        let text = rendered_text(&paused);
        assert!(text.contains("Paused"));
        assert!(text.contains("Resume"));
    }

    #[test]
    fn test_render_game_over_screens() {
        let state = create_initial_state(&GameConfig::new(6, 6), &mut FixedRandom(0.0)).unwrap();

        let lost = GameState {
            game_over: true,
            ..state.clone()
        };
        assert!(rendered_text(&lost).contains("GAME OVER"));

        let won = GameState {
            game_over: true,
            won: true,
            ..state
        };
        assert!(rendered_text(&won).contains("YOU WIN"));
    }

    #[test]
    fn test_lost_game_keeps_board_visible() {
        let mut random = FixedRandom(0.0);
        let mut state = create_initial_state(&GameConfig::new(6, 6), &mut random).unwrap();
        // Head starts at (3, 3) heading right; the third tick hits the wall
        for _ in 0..3 {
            state = step_state(&state, &mut random);
        }
        assert!(state.game_over);

        let text = rendered_text(&state);
        assert!(text.contains("Game over! Press restart."));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("■"));
        assert!(text.contains("□"));
        assert!(text.contains("Final Score:"));
    }

    #[test]
    fn test_stats_show_wins() {
        let state = create_initial_state(&GameConfig::new(6, 6), &mut FixedRandom(0.0)).unwrap();
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(12, true);
        metrics.on_game_over(3, false);

        let text = rendered_text_with(&state, &metrics);
        assert!(text.contains("Wins: 1"));
        assert!(text.contains("Best: 12"));
    }
}
