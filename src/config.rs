use crate::consts;
use crate::grid::{Bound, Coordinate, Direction};
use std::time::Duration;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bounds: Bound,
    pub move_interval: Duration,
    pub score_increment: u32,
    pub food_tolerance: u32,
    pub initial_head: Coordinate,
    pub initial_food: Coordinate,
    pub initial_direction: Direction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: consts::GAME_BOUNDS,
            move_interval: consts::MOVE_INTERVAL,
            score_increment: consts::SCORE_INCREMENT,
            food_tolerance: consts::FOOD_TOLERANCE,
            initial_head: consts::SNAKE_INITIAL_HEAD,
            initial_food: consts::FOOD_INITIAL_POSITION,
            initial_direction: consts::INITIAL_DIRECTION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid width in cells
    pub fn columns(&self) -> u16 {
        self.bounds.width()
    }

    /// Grid height in cells
    pub fn rows(&self) -> u16 {
        self.bounds.height()
    }
}
