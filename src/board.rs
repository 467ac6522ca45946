use std::hash::{Hash, Hasher};

use crate::group::Group;
use crate::neighbor::{neighbor_table, NeighborTable};
use crate::point::{Point, Stone};
use crate::pointset::PointSet;
use crate::zobrist::Zobrist;

/// Handle of a live group in the board's group pool.
///
/// Two occupied points belong to the same group iff their handles are equal,
/// so "same group" checks are O(1). Handles are only meaningful within the
/// board that produced them, and only until the group is merged or captured.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GroupId(u16);

/// A Go board: a grid mapping each point to its owning group, with
/// incremental liberty maintenance and a running Zobrist hash.
///
/// `place` enforces its precondition (the point must be empty) with a panic:
/// legality is the responsibility of [GameState](crate::game::GameState),
/// which can always ask [Board::will_capture] and [Board::will_have_no_liberties]
/// beforehand.
#[derive(Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    neighbors: &'static NeighborTable,
    grid: Vec<Option<GroupId>>,
    pool: GroupPool,
    hash: Zobrist,
}

#[derive(Debug, Clone)]
struct GroupPool {
    slots: Vec<Option<Group>>,
    free: Vec<GroupId>,
    capacity: usize,
}

impl GroupPool {
    fn new(capacity: usize) -> GroupPool {
        GroupPool {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            capacity,
        }
    }

    fn alloc(&mut self, group: Group) -> GroupId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0 as usize] = Some(group);
                id
            }
            None => {
                assert!(self.slots.len() < self.capacity, "group pool exhausted");
                let id = GroupId(self.slots.len() as u16);
                self.slots.push(Some(group));
                id
            }
        }
    }

    /// Remove the group from its slot and recycle the slot.
    fn take(&mut self, id: GroupId) -> Group {
        let group = self.slots[id.0 as usize].take().expect("stale group handle");
        self.free.push(id);
        group
    }

    fn get(&self, id: GroupId) -> &Group {
        self.slots[id.0 as usize].as_ref().expect("stale group handle")
    }

    fn get_mut(&mut self, id: GroupId) -> &mut Group {
        self.slots[id.0 as usize].as_mut().expect("stale group handle")
    }

    fn iter(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|group| (GroupId(i as u16), group)))
    }
}

/// The distinct groups adjacent to a single point, at most 4.
#[derive(Debug, Copy, Clone)]
struct AdjacentGroups {
    ids: [GroupId; 4],
    len: u8,
}

impl AdjacentGroups {
    fn new() -> AdjacentGroups {
        AdjacentGroups {
            ids: [GroupId(0); 4],
            len: 0,
        }
    }

    fn insert(&mut self, id: GroupId) {
        if !self.iter().any(|other| other == id) {
            self.ids[self.len as usize] = id;
            self.len += 1;
        }
    }

    fn iter(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.ids[..self.len as usize].iter().copied()
    }
}

impl Board {
    pub fn new(rows: u8, cols: u8) -> Board {
        let neighbors = neighbor_table(rows, cols);
        let area = rows as usize * cols as usize;

        // the empty board hash is the XOR of every point's empty code
        let mut hash = Zobrist::default();
        for point in Point::all(rows, cols) {
            hash ^= Zobrist::for_empty(point);
        }

        Board {
            rows,
            cols,
            neighbors,
            grid: vec![None; area],
            // the maximum number of simultaneously-alive groups
            pool: GroupPool::new(area / 2 + 1),
            hash,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row() < self.rows && point.col() < self.cols
    }

    fn index(&self, point: Point) -> usize {
        debug_assert!(self.contains(point));
        point.row() as usize * self.cols as usize + point.col() as usize
    }

    pub fn is_empty(&self, point: Point) -> bool {
        self.grid[self.index(point)].is_none()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.group_at(point).map(|group| group.color())
    }

    pub fn group_id_at(&self, point: Point) -> Option<GroupId> {
        self.grid[self.index(point)]
    }

    pub fn group_at(&self, point: Point) -> Option<&Group> {
        self.grid[self.index(point)].map(|id| self.pool.get(id))
    }

    pub fn group(&self, id: GroupId) -> &Group {
        self.pool.get(id)
    }

    /// All currently-alive groups. Handles are not necessarily contiguous.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.pool.iter()
    }

    pub fn neighbors(&self, point: Point) -> &[Point] {
        self.neighbors.get(point)
    }

    /// All points of the board in row-major ascending order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        Point::all(self.rows, self.cols)
    }

    pub fn hash(&self) -> Zobrist {
        self.hash
    }

    /// Place a stone on an empty point, merging and capturing as required.
    ///
    /// Panics if the point is occupied or outside the board, that is a
    /// programming error and not a legality question.
    pub fn place(&mut self, point: Point, stone: Stone) {
        assert!(
            self.contains(point),
            "point {} outside {}x{} board",
            point,
            self.rows,
            self.cols
        );
        assert!(self.is_empty(point), "point {} is already occupied", point);

        // scan the neighborhood
        let mut adjacent_same = AdjacentGroups::new();
        let mut adjacent_other = AdjacentGroups::new();

        for &neighbor in self.neighbors.get(point) {
            if let Some(id) = self.grid[self.index(neighbor)] {
                if self.pool.get(id).color() == stone {
                    adjacent_same.insert(id);
                } else {
                    adjacent_other.insert(id);
                }
            }
        }

        // opposite-colored neighbors lose this liberty, capturing them if it
        // was their last; captures run first so their recycled slots are
        // available when the new group needs one
        for id in adjacent_other.iter() {
            self.pool.get_mut(id).remove_liberty(point);
            if self.pool.get(id).num_liberties() == 0 {
                self.remove_group(id);
            }
        }

        // the empty neighbors, including any points the captures just cleared
        let mut liberties = PointSet::new();
        for &neighbor in self.neighbors.get(point) {
            if self.grid[self.index(neighbor)].is_none() {
                liberties.add(neighbor);
            }
        }

        // build the new group, absorbing same-colored neighbors and recycling their slots
        let mut new_group = Group::single(stone, point, liberties);
        for id in adjacent_same.iter() {
            new_group.absorb(self.pool.take(id));
        }
        let new_id = self.pool.alloc(new_group);

        let stones = self.pool.get(new_id).stones().clone();
        for member in stones.iter() {
            let index = self.index(member);
            self.grid[index] = Some(new_id);
        }

        self.hash ^= Zobrist::for_empty(point);
        self.hash ^= Zobrist::for_stone(stone, point);
    }

    /// Clear a captured group from the grid. Each cleared point becomes a
    /// liberty of every other group still adjacent to it, never of the
    /// captured group itself or through other captured points.
    fn remove_group(&mut self, id: GroupId) {
        let group = self.pool.take(id);

        for point in group.stones().iter() {
            let mut to_update = AdjacentGroups::new();
            for &neighbor in self.neighbors.get(point) {
                match self.grid[self.index(neighbor)] {
                    Some(neighbor_id) if neighbor_id != id => to_update.insert(neighbor_id),
                    _ => {}
                }
            }
            for neighbor_id in to_update.iter() {
                self.pool.get_mut(neighbor_id).add_liberty(point);
            }

            self.hash ^= Zobrist::for_stone(group.color(), point);
            self.hash ^= Zobrist::for_empty(point);

            let index = self.index(point);
            self.grid[index] = None;
        }
    }

    /// Would placing here capture at least one opposing group?
    pub fn will_capture(&self, point: Point, stone: Stone) -> bool {
        self.neighbors.get(point).iter().any(|&neighbor| match self.group_at(neighbor) {
            Some(group) => group.color() != stone && group.num_liberties() == 1,
            None => false,
        })
    }

    /// Would the placed stone's group end up with zero liberties,
    /// assuming no capture occurs?
    ///
    /// Captures create liberties this check deliberately ignores,
    /// so callers must consult [Board::will_capture] first.
    pub fn will_have_no_liberties(&self, point: Point, stone: Stone) -> bool {
        for &neighbor in self.neighbors.get(point) {
            match self.group_at(neighbor) {
                // this point will be a liberty
                None => return false,
                Some(group) => {
                    if group.color() == stone && group.num_liberties() > 1 {
                        // the merged group keeps at least one other liberty
                        return false;
                    }
                }
            }
        }
        true
    }

    /// The hash that [Board::place] would produce for the same inputs,
    /// computed without mutating anything.
    pub fn hash_after(&self, point: Point, stone: Stone) -> Zobrist {
        let mut hash = self.hash;
        hash ^= Zobrist::for_empty(point);
        hash ^= Zobrist::for_stone(stone, point);

        // a group in atari may touch the point on more than one side,
        // it must still be toggled out only once
        let mut captured = AdjacentGroups::new();
        for &neighbor in self.neighbors.get(point) {
            if let Some(id) = self.grid[self.index(neighbor)] {
                let group = self.pool.get(id);
                if group.color() != stone && group.num_liberties() == 1 {
                    captured.insert(id);
                }
            }
        }

        for id in captured.iter() {
            let group = self.pool.get(id);
            for member in group.stones().iter() {
                hash ^= Zobrist::for_stone(group.color(), member);
                hash ^= Zobrist::for_empty(member);
            }
        }

        hash
    }

    /// Full consistency check, O(board size). Debug and testing only.
    pub fn validate(&self) {
        for (id, group) in self.pool.iter() {
            assert!(!group.stones().is_empty(), "group {:?} has no stones", id);

            // every member maps back to the group on the grid
            for point in group.stones().iter() {
                assert_eq!(self.grid[self.index(point)], Some(id));
            }

            // liberties are exactly the empty points adjacent to any member
            let mut expected = PointSet::new();
            for point in group.stones().iter() {
                for &neighbor in self.neighbors.get(point) {
                    if self.is_empty(neighbor) {
                        expected.add(neighbor);
                    }
                }
            }
            assert_eq!(group.liberties(), &expected, "liberties of group {:?} out of sync", id);
        }

        // groups are maximal: adjacent same-colored points share a handle
        for point in self.points() {
            if let Some(id) = self.grid[self.index(point)] {
                let color = self.pool.get(id).color();
                for &neighbor in self.neighbors.get(point) {
                    if let Some(neighbor_id) = self.grid[self.index(neighbor)] {
                        if self.pool.get(neighbor_id).color() == color {
                            assert_eq!(id, neighbor_id, "split group at {}", point);
                        }
                    }
                }
            }
        }

        // the running hash matches a from-scratch recomputation
        let mut expected_hash = Zobrist::default();
        for point in self.points() {
            expected_hash ^= match self.stone_at(point) {
                Some(stone) => Zobrist::for_stone(stone, point),
                None => Zobrist::for_empty(point),
            };
        }
        assert_eq!(self.hash, expected_hash, "invalid running hash");
    }
}

impl Eq for Board {}

/// Boards are equal iff they have the same dimensions and the same occupant
/// (or emptiness) per point. Group partition identity is irrelevant.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.points().all(|point| self.stone_at(point) == other.stone_at(point))
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}
