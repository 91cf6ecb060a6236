use rand::Rng;

use crate::border::Border;
use crate::utils::Point;

/// Initial apple cell, restored on every game reset.
pub const APPLE_START: Point = Point { x: 3, y: 3 };

#[derive(Debug)]
pub struct Apple {
    pub position: Point,
}

impl Apple {
    pub fn new() -> Self {
        Self {
            position: APPLE_START,
        }
    }

    /// Move to a uniformly random cell. Every cell is a candidate, including
    /// ones currently covered by the snake; an overlapped apple is simply
    /// eaten again once the covering segment moves off it.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, border: &Border) {
        self.position = Point::new(
            rng.gen_range(0..border.width as i32),
            rng.gen_range(0..border.height as i32),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn relocate_stays_inside_the_border() {
        let border = Border::new(25, 20);
        let mut rng = StdRng::seed_from_u64(7);
        let mut apple = Apple::new();
        for _ in 0..1000 {
            apple.relocate(&mut rng, &border);
            assert!(border.is_inside(apple.position));
        }
    }

    #[test]
    fn new_apple_sits_at_the_initial_cell() {
        assert_eq!(Apple::new().position, APPLE_START);
    }
}
