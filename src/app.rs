use crate::config::Config;
use crate::game::{Game, TickOutcome};
use crate::gesture::PanTracker;
use crate::input::Command;
use crate::ticker::Ticker;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;

/// Puts the terminal into game mode and restores it when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )
        .context("failed to prepare terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen) {
            error!("failed to restore terminal screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {err}");
        }
    }
}

/// Play until the player quits.  Returns the score on screen at that point.
pub fn run(config: Config) -> Result<u32> {
    let mut game = Game::new(config);
    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    event_loop(&mut stdout, &mut game)?;
    Ok(game.state().score)
}

/// What the loop should do after a command
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Redraw,
    Unchanged,
    Quit,
}

fn event_loop<W: Write, R: Rng>(out: &mut W, game: &mut Game<R>) -> Result<()> {
    let mut ticker = Ticker::new(game.config().move_interval, Instant::now());
    let mut pan = PanTracker::new(ui::ROWS_PER_LINE);
    let mut dirty = true;

    loop {
        if dirty {
            ui::draw(out, game.state(), game.config()).context("failed to draw game")?;
            dirty = false;
        }

        if event::poll(ticker.timeout(Instant::now())).context("failed to poll input")? {
            let event = event::read().context("failed to read input")?;
            if let Event::Resize(..) = event {
                dirty = true;
            } else if let Some(command) = Command::from_event(&event) {
                match apply(game, &mut ticker, &mut pan, command, Instant::now()) {
                    Flow::Quit => {
                        info!("Quit with score {}", game.state().score);
                        return Ok(());
                    }
                    Flow::Redraw => dirty = true,
                    Flow::Unchanged => {}
                }
            }
        }

        if on_tick(game, &mut ticker, Instant::now()) {
            dirty = true;
        }
    }
}

fn apply<R>(
    game: &mut Game<R>,
    ticker: &mut Ticker,
    pan: &mut PanTracker,
    command: Command,
    now: Instant,
) -> Flow {
    match command {
        Command::Quit => return Flow::Quit,
        Command::Turn(direction) => game.set_direction(direction),
        Command::Pause => {
            game.pause();
            return Flow::Redraw;
        }
        Command::Reload => {
            game.reload();
            ticker.rearm(now);
            return Flow::Redraw;
        }
        Command::PanStart { column, row } => pan.press(column, row),
        Command::PanMove { column, row } => {
            if let Some(gesture) = pan.drag(column, row) {
                game.handle_gesture(gesture);
            }
        }
        Command::PanEnd => pan.release(),
    }
    Flow::Unchanged
}

/// Runs the tick if one is due.  Returns whether anything on screen changed.
fn on_tick<R: Rng>(game: &mut Game<R>, ticker: &mut Ticker, now: Instant) -> bool {
    if !ticker.fire(now) {
        return false;
    }
    match game.tick() {
        TickOutcome::Idle => false,
        TickOutcome::GameOver => {
            ticker.cancel();
            true
        }
        TickOutcome::Moved | TickOutcome::Ate => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Status};
    use crate::grid::{Coordinate, Direction, Snake};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const RNG_SEED: u64 = 7;

    fn game_at(head: Coordinate, direction: Direction) -> Game<ChaCha8Rng> {
        Game::from_state(
            Config::default(),
            ChaCha8Rng::seed_from_u64(RNG_SEED),
            GameState {
                snake: Snake::new(head),
                direction,
                food: Coordinate::new(20, 20),
                score: 0,
                status: Status::Running,
            },
        )
    }

    #[test]
    fn game_over_cancels_ticker() {
        let start = Instant::now();
        let mut game = game_at(Coordinate::new(-1, 5), Direction::Left);
        let mut ticker = Ticker::new(game.config().move_interval, start);

        assert!(!on_tick(&mut game, &mut ticker, start));
        assert!(ticker.is_armed());

        let due = start + game.config().move_interval;
        assert!(on_tick(&mut game, &mut ticker, due));
        assert_eq!(game.status(), Status::GameOver);
        assert!(!ticker.is_armed());
    }

    #[test]
    fn reload_rearms_ticker() {
        let start = Instant::now();
        let interval = Config::default().move_interval;
        let mut game = game_at(Coordinate::new(-1, 5), Direction::Left);
        let mut ticker = Ticker::new(interval, start);
        let mut pan = PanTracker::new(ui::ROWS_PER_LINE);
        on_tick(&mut game, &mut ticker, start + interval);
        assert!(!ticker.is_armed());

        let later = start + interval * 4;
        let flow = apply(&mut game, &mut ticker, &mut pan, Command::Reload, later);
        assert_eq!(flow, Flow::Redraw);
        assert!(ticker.is_armed());
        assert_eq!(game.status(), Status::Running);

        assert!(on_tick(&mut game, &mut ticker, later + interval));
        assert_eq!(game.state().snake.head(), Coordinate::new(6, 5));
    }

    #[test]
    fn paused_tick_does_not_redraw() {
        let start = Instant::now();
        let interval = Config::default().move_interval;
        let mut game = game_at(Coordinate::new(5, 5), Direction::Right);
        let mut ticker = Ticker::new(interval, start);
        let mut pan = PanTracker::new(ui::ROWS_PER_LINE);

        let flow = apply(&mut game, &mut ticker, &mut pan, Command::Pause, start);
        assert_eq!(flow, Flow::Redraw);
        assert!(!on_tick(&mut game, &mut ticker, start + interval));
        assert!(ticker.is_armed());
    }

    #[test]
    fn drag_steers_without_redraw() {
        let start = Instant::now();
        let mut game = game_at(Coordinate::new(5, 5), Direction::Right);
        let mut ticker = Ticker::new(Config::default().move_interval, start);
        let mut pan = PanTracker::new(ui::ROWS_PER_LINE);

        let commands = [
            Command::PanStart { column: 10, row: 10 },
            Command::PanMove { column: 11, row: 14 },
            Command::PanEnd,
        ];
        for command in commands {
            assert_eq!(
                apply(&mut game, &mut ticker, &mut pan, command, start),
                Flow::Unchanged
            );
        }
        assert_eq!(game.state().direction, Direction::Down);
    }

    #[test]
    fn quit_stops_the_loop() {
        let start = Instant::now();
        let mut game = game_at(Coordinate::new(5, 5), Direction::Right);
        let mut ticker = Ticker::new(Config::default().move_interval, start);
        let mut pan = PanTracker::new(ui::ROWS_PER_LINE);
        assert_eq!(
            apply(&mut game, &mut ticker, &mut pan, Command::Quit, start),
            Flow::Quit
        );
    }
}
