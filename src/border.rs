use crate::utils::Point;

/// Playfield bounds in grid cells.
#[derive(Debug, Copy, Clone)]
pub struct Border {
    pub width: u32,
    pub height: u32,
}

impl Border {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_inside(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inside_corners_of_range_only() {
        let border = Border::new(25, 20);
        assert!(border.is_inside(Point::new(0, 0)));
        assert!(border.is_inside(Point::new(24, 19)));
        assert!(!border.is_inside(Point::new(25, 19)));
        assert!(!border.is_inside(Point::new(24, 20)));
        assert!(!border.is_inside(Point::new(-1, 0)));
        assert!(!border.is_inside(Point::new(0, -1)));
    }
}
