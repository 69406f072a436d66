use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEvent, GameSession, RandomSource};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode<R: RandomSource> {
    session: GameSession<R>,
    tick_interval: Duration,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<R: RandomSource> HumanMode<R> {
    pub fn new(config: GameConfig, random: R) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        let session = GameSession::new(&config, random).context("Invalid game configuration")?;
        info!(
            "starting {}x{} game, tick every {}ms",
            config.width, config.height, config.tick_interval_ms
        );

        Ok(Self {
            session,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session ended after {} games, high score {}",
            self.metrics.games_played, self.metrics.high_score
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.dispatch(GameEvent::Tick);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(game_event) => self.dispatch(game_event),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Feed one event to the session and keep the metrics in sync with it
    fn dispatch(&mut self, event: GameEvent) {
        let was_terminal = self.session.state().is_terminal();
        let info = self.session.apply(event);
        let state = self.session.state();

        match event {
            GameEvent::Restart => {
                info!("game restarted");
                self.metrics.on_game_start();
            }
            GameEvent::TogglePause if !was_terminal => self.metrics.set_paused(state.paused),
            GameEvent::TogglePause => {}
            GameEvent::Tick | GameEvent::Turn(_) => {}
        }

        if !was_terminal && state.is_terminal() {
            let won = info.is_some_and(|i| i.won);
            info!("game finished: {}, score {}", state.status_text(), state.score);
            self.metrics.on_game_over(state.score, won);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, FixedRandom, Position};

    fn mode(width: usize, height: usize) -> HumanMode<FixedRandom> {
        HumanMode::new(GameConfig::new(width, height), FixedRandom(0.0)).unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode(20, 20);
        let state = mode.session.state();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(mode.tick_interval, Duration::from_millis(140));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(HumanMode::new(GameConfig::new(2, 2), FixedRandom(0.0)).is_err());
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::new(10, 10)
        };
        assert!(HumanMode::new(config, FixedRandom(0.0)).is_err());
    }

    #[test]
    fn test_dispatch_turn_and_tick() {
        let mut mode = mode(10, 10);
        mode.dispatch(GameEvent::Turn(Direction::Up));
        mode.dispatch(GameEvent::Tick);
        assert_eq!(mode.session.state().snake.head(), Some(Position::new(5, 4)));
    }

    #[test]
    fn test_game_over_updates_metrics_once() {
        let mut mode = mode(4, 4);
        // Head at (2, 2): the second tick right leaves the board
        mode.dispatch(GameEvent::Tick);
        mode.dispatch(GameEvent::Tick);
        mode.dispatch(GameEvent::Tick);
        assert!(mode.session.state().game_over);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.games_won, 0);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = mode(4, 4);
        mode.dispatch(GameEvent::Tick);
        mode.dispatch(GameEvent::Tick);
        mode.dispatch(GameEvent::Restart);

        let state = mode.session.state();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Some(Position::new(2, 2)));
    }
}
