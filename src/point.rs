/// Maximum board size supported by the engine.
/// Fixed so that per-board tables and sets can be allocated with a static capacity.
pub const MAX_BOARD_SIZE: u8 = 19;
pub const MAX_POINTS: u16 = MAX_BOARD_SIZE as u16 * MAX_BOARD_SIZE as u16;

/// The color of a stone (or a player).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub const BOTH: [Stone; 2] = [Stone::Black, Stone::White];

    pub fn other(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Stone::Black => 0,
            Stone::White => 1,
        }
    }
}

/// A board coordinate. `row` 0 is the bottom row, `col` 0 is the left column.
///
/// The canonical text form is a column letter followed by the 1-based row number,
/// eg. `"Q16"`. See the `Display` and `FromStr` impls.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Point {
    row: u8,
    col: u8,
}

impl Point {
    pub fn new(row: u8, col: u8) -> Point {
        assert!(
            row < MAX_BOARD_SIZE && col < MAX_BOARD_SIZE,
            "coordinates ({}, {}) too large, max board size is {}",
            row,
            col,
            MAX_BOARD_SIZE,
        );
        Point { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Index into the fixed `MAX_POINTS` coordinate universe,
    /// independent of the dimensions of any particular board.
    pub(crate) fn universe_index(self) -> u16 {
        self.row as u16 * MAX_BOARD_SIZE as u16 + self.col as u16
    }

    pub(crate) fn from_universe_index(index: u16) -> Point {
        debug_assert!(index < MAX_POINTS);
        Point {
            row: (index / MAX_BOARD_SIZE as u16) as u8,
            col: (index % MAX_BOARD_SIZE as u16) as u8,
        }
    }

    /// All points of a `rows x cols` board in row-major ascending order.
    pub fn all(rows: u8, cols: u8) -> impl Iterator<Item = Point> {
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Point::new(row, col)))
    }
}
