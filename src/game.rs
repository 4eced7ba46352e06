use crate::config::Config;
use crate::gesture::Gesture;
use crate::grid::{Coordinate, Direction, Snake};
use crate::rules::{has_eaten_food, is_out_of_bounds, random_food_position};
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// What a single tick did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed
    Idle,
    Moved,
    Ate,
    /// The head was found outside the bounds and the game ended
    GameOver,
}

/// Everything the screen needs to draw one frame
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Coordinate,
    pub score: u32,
    pub status: Status,
}

impl GameState {
    pub fn initial(config: &Config) -> Self {
        GameState {
            snake: Snake::new(config.initial_head),
            direction: config.initial_direction,
            food: config.initial_food,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }
}

/// Owns the game state and the randomness used to place food.  All changes
/// go through `tick`, `set_direction`/`handle_gesture`, `pause` and `reload`.
#[derive(Clone, Debug)]
pub struct Game<R = ThreadRng> {
    config: Config,
    rng: R,
    state: GameState,
}

impl Game<ThreadRng> {
    pub fn new(config: Config) -> Self {
        Game::new_with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(config: Config, rng: R) -> Game<R> {
        let state = GameState::initial(&config);
        Game { config, rng, state }
    }

    /// Resume from an arbitrary state, e.g. a mid-game position
    pub fn from_state(config: Config, rng: R, state: GameState) -> Game<R> {
        Game { config, rng, state }
    }

    /// Advance the snake by one cell.
    ///
    /// The boundary test looks at the head as it stands *before* this move,
    /// so leaving the grid is only noticed on the tick after the head has
    /// crossed the edge.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != Status::Running {
            return TickOutcome::Idle;
        }

        let head = self.state.snake.head();
        if is_out_of_bounds(head, &self.config.bounds) {
            self.state.status = Status::GameOver;
            info!(
                "Game over at ({}, {}) with score {}",
                head.x, head.y, self.state.score
            );
            return TickOutcome::GameOver;
        }

        let new_head = head.step(self.state.direction);
        if has_eaten_food(new_head, self.state.food, self.config.food_tolerance) {
            self.state.snake.advance(new_head, true);
            self.state.food = random_food_position(
                &mut self.rng,
                self.config.bounds.x_max,
                self.config.bounds.y_max,
            );
            self.state.score += self.config.score_increment;
            debug!(
                "Ate food, score {} length {}, next food at ({}, {})",
                self.state.score,
                self.state.snake.len(),
                self.state.food.x,
                self.state.food.y
            );
            TickOutcome::Ate
        } else {
            self.state.snake.advance(new_head, false);
            TickOutcome::Moved
        }
    }
}

impl<R> Game<R> {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Change heading.  Reversing straight back over the body is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.state.direction {
            debug!("Direction {:?} -> {:?}", self.state.direction, direction);
            self.state.direction = direction;
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture) {
        self.set_direction(gesture.direction());
    }

    /// Toggle between running and paused.  Does nothing once the game is over.
    pub fn pause(&mut self) {
        self.state.status = match self.state.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver => return,
        };
        info!("Paused: {}", self.state.is_paused());
    }

    /// Start over from the initial state, whatever the current one is
    pub fn reload(&mut self) {
        info!("Reloading game (score was {})", self.state.score);
        self.state = GameState::initial(&self.config);
    }
}
