use std::collections::HashMap;
use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::point::{Point, MAX_BOARD_SIZE};

/// Precomputed orthogonal adjacency for every point of a `rows x cols` board.
///
/// Tables are memoized per dimension pair for the process lifetime, see [neighbor_table].
#[derive(Debug)]
pub struct NeighborTable {
    rows: u8,
    cols: u8,
    neighbors: Vec<NeighborList>,
}

/// Up to 4 neighbors, stored inline.
#[derive(Debug, Copy, Clone)]
struct NeighborList {
    points: [Point; 4],
    len: u8,
}

impl NeighborList {
    fn new() -> NeighborList {
        NeighborList {
            points: [Point::new(0, 0); 4],
            len: 0,
        }
    }

    fn push(&mut self, point: Point) {
        self.points[self.len as usize] = point;
        self.len += 1;
    }

    fn as_slice(&self) -> &[Point] {
        &self.points[..self.len as usize]
    }
}

impl NeighborTable {
    fn new(rows: u8, cols: u8) -> NeighborTable {
        assert!(
            0 < rows && rows <= MAX_BOARD_SIZE && 0 < cols && cols <= MAX_BOARD_SIZE,
            "dimensions {}x{} outside supported range 1..={}",
            rows,
            cols,
            MAX_BOARD_SIZE,
        );

        let mut neighbors = Vec::with_capacity(rows as usize * cols as usize);
        for point in Point::all(rows, cols) {
            let mut list = NeighborList::new();
            if point.row() > 0 {
                list.push(Point::new(point.row() - 1, point.col()));
            }
            if point.row() + 1 < rows {
                list.push(Point::new(point.row() + 1, point.col()));
            }
            if point.col() > 0 {
                list.push(Point::new(point.row(), point.col() - 1));
            }
            if point.col() + 1 < cols {
                list.push(Point::new(point.row(), point.col() + 1));
            }
            neighbors.push(list);
        }

        NeighborTable { rows, cols, neighbors }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn get(&self, point: Point) -> &[Point] {
        let index = point.row() as usize * self.cols as usize + point.col() as usize;
        self.neighbors[index].as_slice()
    }
}

lazy_static! {
    static ref TABLES: Mutex<HashMap<(u8, u8), &'static NeighborTable>> = Mutex::new(HashMap::new());
}

/// The shared neighbor table for the given dimensions.
/// Construction cost is paid once per distinct dimension pair and amortized
/// across every board of that size for the rest of the process.
pub fn neighbor_table(rows: u8, cols: u8) -> &'static NeighborTable {
    let mut tables = TABLES.lock().unwrap();
    *tables
        .entry((rows, cols))
        .or_insert_with(|| Box::leak(Box::new(NeighborTable::new(rows, cols))))
}
