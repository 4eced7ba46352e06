use std::collections::VecDeque;

/// A cell on the game grid.  Cells can sit outside the bounds for one tick
/// after the snake leaves the playable area, so both axes are signed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// The neighbouring cell one step in the given direction
    pub fn step(self, direction: Direction) -> Coordinate {
        match direction {
            Direction::Up => Coordinate::new(self.x, self.y - 1),
            Direction::Down => Coordinate::new(self.x, self.y + 1),
            Direction::Left => Coordinate::new(self.x - 1, self.y),
            Direction::Right => Coordinate::new(self.x + 1, self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Rectangle of playable cells; all four limits are inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bound {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Bound {
    pub fn width(&self) -> u16 {
        u16::try_from(self.x_max - self.x_min + 1).unwrap_or(0)
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.y_max - self.y_min + 1).unwrap_or(0)
    }
}

/// The snake's body, head first.  Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    pub fn new(head: Coordinate) -> Self {
        Snake {
            body: VecDeque::from([head]),
        }
    }

    pub fn head(&self) -> Coordinate {
        // `body` always holds at least the head
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    /// Put `new_head` in front.  Unless `grow` is set the tail is dropped so
    /// the length stays the same.
    pub fn advance(&mut self, new_head: Coordinate, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
impl From<Vec<Coordinate>> for Snake {
    /// Segments listed head first
    fn from(segments: Vec<Coordinate>) -> Self {
        assert!(!segments.is_empty(), "a snake needs a head");
        Snake {
            body: segments.into(),
        }
    }
}
