//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Transitions are pure functions over [`GameState`]; [`GameSession`] holds the
//! current state for a driving loop.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod random;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, GameEvent, ParseDirectionError};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    StepInfo, apply_event, create_initial_state, restart_state, set_direction, set_direction_str,
    step_state, step_state_with_info, toggle_pause,
};
pub use food::{empty_cells, place_food};
pub use random::{FixedRandom, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use session::GameSession;
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
