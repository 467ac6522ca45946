use crate::point::{Point, Stone};
use crate::pointset::PointSet;

/// A string of connected same-colored stones together with its liberties.
///
/// Invariants, maintained by [Board](crate::board::Board):
/// * `stones` is non-empty and forms one maximal connected component,
/// * every liberty is a currently-empty board point,
/// * no member point is a liberty of its own group.
///
/// Groups are only ever updated through the exclusively-owned slot of the
/// board's group pool, an update is a new logical value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Group {
    color: Stone,
    stones: PointSet,
    liberties: PointSet,
}

impl Group {
    /// A fresh single-stone group. `liberties` are the empty neighbors of `point`.
    pub(crate) fn single(color: Stone, point: Point, liberties: PointSet) -> Group {
        let mut stones = PointSet::new();
        stones.add(point);
        debug_assert!(!liberties.contains(point));
        Group { color, stones, liberties }
    }

    /// Merge another group of the same color into this one.
    /// Stones are unioned, liberties are unioned and then cleared of member stones.
    pub(crate) fn absorb(&mut self, other: Group) {
        debug_assert_eq!(self.color, other.color);
        self.stones.add_set(&other.stones);
        self.liberties.add_set(&other.liberties);
        self.liberties.remove_set(&self.stones);
    }

    pub(crate) fn add_liberty(&mut self, point: Point) {
        debug_assert!(!self.stones.contains(point));
        self.liberties.add(point);
    }

    pub(crate) fn remove_liberty(&mut self, point: Point) {
        self.liberties.remove(point);
    }

    pub fn color(&self) -> Stone {
        self.color
    }

    pub fn stones(&self) -> &PointSet {
        &self.stones
    }

    pub fn liberties(&self) -> &PointSet {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }
}
