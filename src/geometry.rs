/// Playfield grid and the grid → pixel mapping.
///
/// Pixel coordinates are always derived from `(row, column)`; nothing in the
/// crate stores both.

pub const NUM_ROWS: i32 = 6;
pub const NUM_COLS: i32 = 5;

/// Width of one grid cell (and of an enemy lane step), in pixels.
pub const SECTION_WIDTH: f32 = 101.0;
/// Height of one grid cell, in pixels.
pub const SECTION_HEIGHT: f32 = 83.0;

pub const PLAYER_START: GridPosition = GridPosition { row: 5, column: 2 };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: i32,
    pub column: i32,
}

impl GridPosition {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn pixel_x(&self) -> f32 {
        column_to_x(self.column)
    }

    pub fn pixel_y(&self) -> f32 {
        row_to_y(self.row)
    }

    pub fn in_bounds(&self) -> bool {
        (0..NUM_ROWS).contains(&self.row) && (0..NUM_COLS).contains(&self.column)
    }
}

pub fn column_to_x(column: i32) -> f32 {
    column as f32 * SECTION_WIDTH
}

/// Sprites sit half a cell above their row line.
pub fn row_to_y(row: i32) -> f32 {
    (row as f32 - 0.5) * SECTION_HEIGHT
}
