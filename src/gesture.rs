//! Swipe handling
use crate::grid::Direction;

/// One sample of a pan gesture: how far the pointer has travelled since the
/// gesture began.  Positive `translation_y` points down the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
    pub translation_x: f32,
    pub translation_y: f32,
}

impl Gesture {
    pub fn new(translation_x: f32, translation_y: f32) -> Self {
        Gesture {
            translation_x,
            translation_y,
        }
    }

    /// The dominant axis picks the direction and its sign picks which way.
    /// Ties go to the vertical axis.
    pub fn direction(&self) -> Direction {
        if self.translation_x.abs() > self.translation_y.abs() {
            if self.translation_x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if self.translation_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Turns a stream of pointer positions (press, drags, release) into
/// [`Gesture`] samples measured from the press point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PanTracker {
    origin: Option<(u16, u16)>,
    /// How many grid rows one terminal row stands for
    row_scale: u16,
}

impl PanTracker {
    pub fn new(row_scale: u16) -> Self {
        PanTracker {
            origin: None,
            row_scale,
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
    }

    /// The gesture so far, or `None` if no press is in progress
    pub fn drag(&self, column: u16, row: u16) -> Option<Gesture> {
        let (x0, y0) = self.origin?;
        let dx = f32::from(column) - f32::from(x0);
        let dy = (f32::from(row) - f32::from(y0)) * f32::from(self.row_scale);
        Some(Gesture::new(dx, dy))
    }

    pub fn release(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(Gesture::new(10.0, 2.0).direction(), Direction::Right);
        assert_eq!(Gesture::new(-10.0, 2.0).direction(), Direction::Left);
        assert_eq!(Gesture::new(2.0, 10.0).direction(), Direction::Down);
        assert_eq!(Gesture::new(2.0, -10.0).direction(), Direction::Up);
    }

    #[test]
    fn ties_go_vertical() {
        assert_eq!(Gesture::new(5.0, 5.0).direction(), Direction::Down);
        assert_eq!(Gesture::new(-5.0, -5.0).direction(), Direction::Up);
        assert_eq!(Gesture::default().direction(), Direction::Up);
    }

    #[test]
    fn tracker_measures_from_press() {
        let mut pan = PanTracker::new(2);
        assert_eq!(pan.drag(10, 10), None);
        pan.press(10, 10);
        assert_eq!(pan.drag(14, 11), Some(Gesture::new(4.0, 2.0)));
        assert_eq!(pan.drag(14, 11).map(|g| g.direction()), Some(Direction::Right));
        assert_eq!(pan.drag(11, 7).map(|g| g.direction()), Some(Direction::Up));
        pan.release();
        assert_eq!(pan.drag(20, 10), None);
    }
}
