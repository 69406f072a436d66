use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest width that fits the three-segment starting snake
pub const MIN_WIDTH: usize = 4;

/// Largest number of cells a board may have
pub const MAX_CELLS: usize = 1 << 20;

/// Errors raised while building or loading a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board width must be at least {min}, got {0}", min = MIN_WIDTH)]
    WidthTooSmall(usize),
    #[error("board height must be at least 1, got {0}")]
    HeightTooSmall(usize),
    #[error("board dimension {0} does not fit a signed 32-bit coordinate")]
    DimensionOverflow(usize),
    #[error("board {width}x{height} exceeds {max} cells", max = MAX_CELLS)]
    BoardTooLarge { width: usize, height: usize },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub width: usize,
    /// Height of the game grid
    pub height: usize,
    /// Milliseconds between ticks when driven by a timer
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tick_interval_ms: 140,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that the board can hold the starting snake and that every cell
    /// has an `i32` coordinate
    pub fn validate_board(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        if self.height == 0 {
            return Err(ConfigError::HeightTooSmall(self.height));
        }
        for dimension in [self.width, self.height] {
            if i32::try_from(dimension).is_err() {
                return Err(ConfigError::DimensionOverflow(dimension));
            }
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Board checks plus the timer settings used by a driving loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_board()?;
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
