//! Terminal drawing.  Each text line holds two grid rows using half-block
//! glyphs, which keeps cells roughly square.
use crate::config::Config;
use crate::game::GameState;
use crate::grid::Coordinate;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::collections::HashSet;
use std::io::{self, Write};

/// Grid rows packed into one terminal line
pub const ROWS_PER_LINE: u16 = 2;

/// Terminal line of the top border; the grid starts on the line below
const BOARD_TOP: u16 = 2;

const HALF_BLOCK: char = '▀';
const HEAD_COLOR: Color = Color::Green;
const BODY_COLOR: Color = Color::DarkGreen;
const FOOD_COLOR: Color = Color::Red;
const BACKGROUND_COLOR: Color = Color::Black;
const BORDER_COLOR: Color = Color::DarkYellow;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cell {
    Empty,
    Head,
    Body,
    Food,
}

impl Cell {
    fn color(self) -> Color {
        match self {
            Cell::Empty => BACKGROUND_COLOR,
            Cell::Head => HEAD_COLOR,
            Cell::Body => BODY_COLOR,
            Cell::Food => FOOD_COLOR,
        }
    }
}

struct Board<'a> {
    state: &'a GameState,
    body: HashSet<Coordinate>,
}

impl<'a> Board<'a> {
    fn new(state: &'a GameState) -> Self {
        Board {
            state,
            body: state.snake.iter().skip(1).collect(),
        }
    }

    fn cell(&self, c: Coordinate) -> Cell {
        // head drawn over anything it overlaps
        if c == self.state.snake.head() {
            Cell::Head
        } else if self.body.contains(&c) {
            Cell::Body
        } else if c == self.state.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }
}

/// The header text: score on the left, controls on the right
pub fn header(state: &GameState) -> String {
    let pause_label = if state.is_paused() { "resume" } else { "pause" };
    format!(
        " Score: {:<6} [p] {:<6}  [r] reload  [q] quit",
        state.score, pause_label
    )
}

/// Banner under the header, if any
pub fn banner(state: &GameState) -> Option<&'static str> {
    if state.is_game_over() {
        Some(" GAME OVER - press r to play again")
    } else if state.is_paused() {
        Some(" PAUSED")
    } else {
        None
    }
}

pub fn draw<W: Write>(out: &mut W, state: &GameState, config: &Config) -> io::Result<()> {
    queue!(
        out,
        ResetColor,
        MoveTo(0, 0),
        Print(header(state)),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, 1),
        Print(banner(state).unwrap_or("")),
        Clear(ClearType::UntilNewLine),
    )?;

    let bounds = &config.bounds;
    let width = usize::from(config.columns());
    let lines = config.rows().div_ceil(ROWS_PER_LINE);
    let edge = "─".repeat(width);

    queue!(
        out,
        SetForegroundColor(BORDER_COLOR),
        MoveTo(0, BOARD_TOP),
        Print(format!("┌{edge}┐")),
        MoveTo(0, BOARD_TOP + lines + 1),
        Print(format!("└{edge}┘")),
    )?;

    let board = Board::new(state);
    for line in 0..lines {
        let top_y = bounds.y_min + i32::from(line * ROWS_PER_LINE);
        let bottom_y = top_y + 1;
        queue!(
            out,
            SetForegroundColor(BORDER_COLOR),
            SetBackgroundColor(Color::Reset),
            MoveTo(0, BOARD_TOP + 1 + line),
            Print('│'),
        )?;
        for x in bounds.x_min..=bounds.x_max {
            let top = board.cell(Coordinate::new(x, top_y));
            let bottom = if bottom_y <= bounds.y_max {
                board.cell(Coordinate::new(x, bottom_y))
            } else {
                Cell::Empty
            };
            queue!(
                out,
                SetForegroundColor(top.color()),
                SetBackgroundColor(bottom.color()),
                Print(HALF_BLOCK),
            )?;
        }
        queue!(
            out,
            SetForegroundColor(BORDER_COLOR),
            SetBackgroundColor(Color::Reset),
            Print('│'),
        )?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}
