/// A grid-cell coordinate. Units are cells, not pixels; the renderer scales
/// by the configured cell size. Signed so the head can step off the playfield
/// and be caught by the bounds check.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
