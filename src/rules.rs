//! The pure checks the tick is built from
use crate::grid::{Bound, Coordinate};
use rand::Rng;

/// Whether `head` lies outside `bound` on either axis
pub fn is_out_of_bounds(head: Coordinate, bound: &Bound) -> bool {
    head.x > bound.x_max || head.x < bound.x_min || head.y > bound.y_max || head.y < bound.y_min
}

/// Whether `head` is close enough to `food` to eat it.  Both axes must be
/// strictly nearer than `tolerance`.
pub fn has_eaten_food(head: Coordinate, food: Coordinate, tolerance: u32) -> bool {
    head.x.abs_diff(food.x) < tolerance && head.y.abs_diff(food.y) < tolerance
}

/// A uniformly random cell in `[0, max_x) × [0, max_y)`.  The snake's body is
/// not avoided.  An axis whose max is zero or negative always yields 0.
pub fn random_food_position<R: Rng>(rng: &mut R, max_x: i32, max_y: i32) -> Coordinate {
    Coordinate {
        x: rng.gen_range(0..max_x.max(1)),
        y: rng.gen_range(0..max_y.max(1)),
    }
}
