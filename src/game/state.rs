use std::collections::HashSet;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    pub fn from_segments(body: Vec<Position>) -> Self {
        Self { body }
    }

    /// Create a straight snake of `length` segments trailing behind `head`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (back_dx, back_dy) = direction.opposite().delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(back_dx * i, back_dy * i))
            .collect();

        Self { body }
    }

    /// Get the head position. `None` only for an empty snake.
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// A copy with `new_head` prepended, keeping the tail only when growing
    pub fn advanced(&self, new_head: Position, grow: bool) -> Self {
        let keep = if grow {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        let mut body = Vec::with_capacity(keep + 1);
        body.push(new_head);
        body.extend_from_slice(&self.body[..keep]);

        Self { body }
    }

    /// True when two segments share a cell
    pub fn has_overlap(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        self.body.iter().any(|segment| !seen.insert(*segment))
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Coarse phase of a game, derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Lost,
    Won,
}

/// Complete game state
///
/// Values are never mutated by the engine; each transition hands back a new
/// state and the caller keeps the one it considers current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    pub snake: Snake,
    /// Direction applied on the most recent tick
    pub direction: Direction,
    /// Direction that the next tick will apply
    pub next_direction: Direction,
    /// `None` once the board is full
    pub food: Option<Position>,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub won: bool,
}

impl GameState {
    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// True when gameplay transitions are locked until a restart
    pub fn is_terminal(&self) -> bool {
        self.game_over || self.won
    }

    pub fn has_pending_turn(&self) -> bool {
        self.next_direction != self.direction
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.game_over {
            GameStatus::Lost
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self.status() {
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::Lost => "Game over! Press restart.",
            GameStatus::Won => "You win! Press restart.",
        }
    }

    /// Label for a pause/resume control
    pub fn pause_label(&self) -> &'static str {
        if self.paused { "Resume" } else { "Pause" }
    }
}
