//! Build-time tuning for the game
use crate::grid::{Bound, Coordinate, Direction};
use std::time::Duration;

/// The playable area, inclusive on every edge
pub const GAME_BOUNDS: Bound = Bound {
    x_min: 0,
    x_max: 35,
    y_min: 0,
    y_max: 63,
};

/// Time between movements of the snake
pub const MOVE_INTERVAL: Duration = Duration::from_millis(50);

/// Points awarded per food eaten
pub const SCORE_INCREMENT: u32 = 10;

/// Per-axis distance at which the head counts as having reached the food
pub const FOOD_TOLERANCE: u32 = 2;

pub const SNAKE_INITIAL_HEAD: Coordinate = Coordinate::new(5, 5);

pub const FOOD_INITIAL_POSITION: Coordinate = Coordinate::new(5, 20);

pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Log file written next to wherever the game was launched
pub const LOG_FILE: &str = "swipesnek.log";

/// Setting this variable (to anything) turns on debug logging
pub const DEBUG_ENV_VAR: &str = "SWIPESNEK_DEBUG";
