use crate::utils::Point;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Coordinate offset (dx, dy) for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Placeholder coordinate for a freshly grown segment. It sits off-grid for
/// one tick and is snapped onto the tail by the next walk.
const PLACEHOLDER: Point = Point { x: -1, y: -1 };

pub struct Snake {
    pub body: Vec<Point>, // body[0] is the head
    pub direction: Direction,
}

impl Snake {
    pub fn new(head: Point, direction: Direction) -> Snake {
        Snake {
            body: vec![head],
            direction,
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance one cell: every segment takes its predecessor's position
    /// (tail-to-head, so nothing is overwritten early), then the head steps
    /// in the facing direction.
    pub fn walk(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        let (dx, dy) = self.direction.delta();
        self.body[0].x += dx;
        self.body[0].y += dy;
    }

    /// Append one segment. It starts at an off-grid placeholder and takes a
    /// real position on the next walk.
    pub fn grow(&mut self) {
        self.body.push(PLACEHOLDER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_moves_head_one_cell() {
        let mut snake = Snake::new(Point::new(1, 1), Direction::Down);
        snake.walk();
        assert_eq!(snake.head(), Point::new(1, 2));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn walk_shifts_trailing_segments_by_one_index() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right);
        snake.body = vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)];
        let before = snake.body.clone();
        snake.walk();
        assert_eq!(snake.head(), Point::new(6, 5));
        assert_eq!(snake.body[1], before[0]);
        assert_eq!(snake.body[2], before[1]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn grow_appends_placeholder_corrected_by_next_walk() {
        let mut snake = Snake::new(Point::new(2, 2), Direction::Left);
        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body[1], Point::new(-1, -1));
        snake.walk();
        // the new tail now occupies the head's previous cell
        assert_eq!(snake.body[1], Point::new(2, 2));
        assert_eq!(snake.head(), Point::new(1, 2));
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}
