pub mod app;
pub mod config;
pub mod consts;
pub mod game;
pub mod gesture;
pub mod grid;
pub mod input;
pub mod rules;
pub mod ticker;
pub mod ui;

pub use config::Config;
pub use game::{Game, GameState, Status, TickOutcome};
pub use gesture::Gesture;
pub use grid::{Bound, Coordinate, Direction, Snake};
