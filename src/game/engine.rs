//! State transitions
//!
//! Every entry point borrows the current [`GameState`] and returns the next
//! one. A rejected input hands back an identical copy.

use log::{debug, trace};

use super::{
    action::{Direction, GameEvent},
    config::{ConfigError, GameConfig},
    food::place_food,
    random::RandomSource,
    state::{CollisionType, GameState, Position, Snake},
};

/// Length of the snake at the start of every game
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether this step filled the board
    pub won: bool,
}

/// Build the opening state. Only the board dimensions are checked.
pub fn create_initial_state<R: RandomSource + ?Sized>(
    config: &GameConfig,
    random: &mut R,
) -> Result<GameState, ConfigError> {
    config.validate_board()?;
    Ok(initial_state(config.width, config.height, random))
}

fn initial_state<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    random: &mut R,
) -> GameState {
    let head = Position::new((width / 2) as i32, (height / 2) as i32);
    let snake = Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH);
    let food = place_food(width, height, &snake, random);

    GameState {
        width,
        height,
        snake,
        direction: Direction::Right,
        next_direction: Direction::Right,
        food,
        score: 0,
        paused: false,
        game_over: false,
        won: false,
    }
}

/// Queue a turn for the next tick.
///
/// Rejected when the game has ended, when a turn is already queued, or when
/// `direction` reverses the committed direction.
pub fn set_direction(state: &GameState, direction: Direction) -> GameState {
    if state.is_terminal() {
        return state.clone();
    }

    if state.has_pending_turn() {
        trace!("turn {direction} ignored, {} already queued", state.next_direction);
        return state.clone();
    }

    if state.direction.is_opposite(direction) {
        trace!("turn {direction} ignored, reverses {}", state.direction);
        return state.clone();
    }

    GameState {
        next_direction: direction,
        ..state.clone()
    }
}

/// Like [`set_direction`] for a textual symbol; unknown symbols are ignored
pub fn set_direction_str(state: &GameState, symbol: &str) -> GameState {
    match symbol.parse::<Direction>() {
        Ok(direction) => set_direction(state, direction),
        Err(err) => {
            trace!("{err}");
            state.clone()
        }
    }
}

/// Flip the pause flag unless the game has ended
pub fn toggle_pause(state: &GameState) -> GameState {
    if state.is_terminal() {
        return state.clone();
    }

    GameState {
        paused: !state.paused,
        ..state.clone()
    }
}

/// Start a fresh game on the same board
pub fn restart_state<R: RandomSource + ?Sized>(state: &GameState, random: &mut R) -> GameState {
    initial_state(state.width, state.height, random)
}

/// Advance the game by one tick
pub fn step_state<R: RandomSource + ?Sized>(state: &GameState, random: &mut R) -> GameState {
    step_state_with_info(state, random).0
}

/// Advance the game by one tick and report what happened
pub fn step_state_with_info<R: RandomSource + ?Sized>(
    state: &GameState,
    random: &mut R,
) -> (GameState, StepInfo) {
    if state.is_terminal() || state.paused {
        return (state.clone(), StepInfo::default());
    }

    let direction = state.next_direction;
    let Some(head) = state.snake.head() else {
        return (state.clone(), StepInfo::default());
    };
    let new_head = head.moved_in_direction(direction);

    if !state.is_in_bounds(new_head) {
        debug!("wall collision at ({}, {})", new_head.x, new_head.y);
        return collided(state, direction, CollisionType::Wall);
    }

    let ate_food = state.food == Some(new_head);
    let snake = state.snake.advanced(new_head, ate_food);

    // The stored snake stays at its last safe position
    if snake.has_overlap() {
        debug!("self collision at ({}, {})", new_head.x, new_head.y);
        return collided(state, direction, CollisionType::SelfCollision);
    }

    let mut next = GameState {
        snake,
        direction,
        next_direction: direction,
        ..state.clone()
    };
    let mut info = StepInfo {
        ate_food,
        ..StepInfo::default()
    };

    if ate_food {
        next.score += 1;
        next.food = place_food(next.width, next.height, &next.snake, random);
        debug!("food eaten, score {}", next.score);

        if next.food.is_none() {
            debug!("board filled with score {}", next.score);
            next.won = true;
            next.game_over = true;
            info.won = true;
        }
    }

    (next, info)
}

fn collided(
    state: &GameState,
    direction: Direction,
    collision: CollisionType,
) -> (GameState, StepInfo) {
    let next = GameState {
        direction,
        next_direction: direction,
        game_over: true,
        ..state.clone()
    };
    let info = StepInfo {
        collision: Some(collision),
        ..StepInfo::default()
    };

    (next, info)
}

/// Route an input event to its transition. Only ticks produce step info.
pub fn apply_event<R: RandomSource + ?Sized>(
    state: &GameState,
    event: GameEvent,
    random: &mut R,
) -> (GameState, Option<StepInfo>) {
    match event {
        GameEvent::Turn(direction) => (set_direction(state, direction), None),
        GameEvent::Tick => {
            let (next, info) = step_state_with_info(state, random);
            (next, Some(info))
        }
        GameEvent::TogglePause => (toggle_pause(state), None),
        GameEvent::Restart => (restart_state(state, random), None),
    }
}
