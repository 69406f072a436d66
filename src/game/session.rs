use super::{
    action::GameEvent,
    config::{ConfigError, GameConfig},
    engine::{StepInfo, apply_event, create_initial_state},
    random::RandomSource,
    state::GameState,
};

/// Owns the current state of one play session and its random source.
///
/// All events go through [`GameSession::apply`], which keeps transitions on a
/// single sequence.
pub struct GameSession<R: RandomSource> {
    state: GameState,
    random: R,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: &GameConfig, mut random: R) -> Result<Self, ConfigError> {
        let state = create_initial_state(config, &mut random)?;
        Ok(Self { state, random })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one event and replace the current state. Returns step info for ticks.
    pub fn apply(&mut self, event: GameEvent) -> Option<StepInfo> {
        let (next, info) = apply_event(&self.state, event, &mut self.random);
        self.state = next;
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, FixedRandom, Position};

    #[test]
    fn test_session_threads_state() {
        let mut session = GameSession::new(&GameConfig::new(10, 10), FixedRandom(0.0)).unwrap();
        assert_eq!(session.state().snake.head(), Some(Position::new(5, 5)));

        assert!(session.apply(GameEvent::Turn(Direction::Down)).is_none());
        let info = session.apply(GameEvent::Tick).unwrap();
        assert!(info.collision.is_none());
        assert_eq!(session.state().snake.head(), Some(Position::new(5, 6)));
        assert_eq!(session.state().direction, Direction::Down);
    }

    #[test]
    fn test_session_rejects_bad_config() {
        assert!(GameSession::new(&GameConfig::new(1, 1), FixedRandom(0.0)).is_err());
    }

    #[test]
    fn test_session_restart_after_game_over() {
        let mut session = GameSession::new(&GameConfig::new(4, 4), FixedRandom(0.0)).unwrap();
        // Head starts at (2, 2); two ticks right hits the wall
        session.apply(GameEvent::Tick);
        let info = session.apply(GameEvent::Tick).unwrap();
        assert!(info.collision.is_some());
        assert!(session.state().game_over);

        session.apply(GameEvent::Restart);
        assert!(!session.state().game_over);
        assert_eq!(session.state().snake.head(), Some(Position::new(2, 2)));
    }
}
