//! Grid Snake - a deterministic Snake engine with a terminal front end
//!
//! This library provides:
//! - Pure state-transition engine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Play statistics (metrics module)
//! - Interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
