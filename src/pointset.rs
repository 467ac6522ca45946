use std::fmt::{Debug, Formatter};

use itertools::Itertools;

use crate::point::{Point, MAX_POINTS};

const WORDS: usize = (MAX_POINTS as usize + 63) / 64;

/// A set of [Point]s over the fixed `MAX_POINTS` coordinate universe,
/// backed by a bitset.
///
/// The tracked `min`/`max` occupied indices only bound iteration scans.
/// They widen on insertion but are not tightened on removal, so after removals
/// iteration may scan some extra words. This is deliberate slack:
/// membership and iteration always agree, removal just stays O(1).
#[derive(Clone)]
pub struct PointSet {
    words: [u64; WORDS],
    min: u16,
    max: u16,
}

/// Equality is by membership, the iteration bounds are allowed to differ.
impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for PointSet {}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet {
            words: [0; WORDS],
            min: MAX_POINTS - 1,
            max: 0,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        let index = point.universe_index();
        self.words[index as usize / 64] & (1 << (index % 64)) != 0
    }

    pub fn add(&mut self, point: Point) {
        let index = point.universe_index();
        self.words[index as usize / 64] |= 1 << (index % 64);
        self.min = self.min.min(index);
        self.max = self.max.max(index);
    }

    pub fn remove(&mut self, point: Point) {
        let index = point.universe_index();
        self.words[index as usize / 64] &= !(1 << (index % 64));
    }

    pub fn add_set(&mut self, other: &PointSet) {
        for (word, &other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn remove_set(&mut self, other: &PointSet) {
        for (word, &other_word) in self.words.iter_mut().zip(&other.words) {
            *word &= !other_word;
        }
    }

    #[must_use]
    pub fn union(&self, other: &PointSet) -> PointSet {
        let mut result = self.clone();
        result.add_set(other);
        result
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Lazy ascending iteration over the member points.
    pub fn iter(&self) -> Points {
        let (word, last_word) = if self.min <= self.max {
            (self.min as usize / 64, self.max as usize / 64)
        } else {
            // never written to, bounds still at their empty-set sentinels
            (1, 0)
        };

        Points {
            words: &self.words,
            current: if word <= last_word { self.words[word] } else { 0 },
            word,
            last_word,
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for PointSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PointSet({{{}}})", self.iter().map(|p| p.to_string()).join(", "))
    }
}

/// Ascending iterator over the points of a [PointSet].
#[derive(Debug, Clone)]
pub struct Points<'a> {
    words: &'a [u64; WORDS],
    current: u64,
    word: usize,
    last_word: usize,
}

impl<'a> Iterator for Points<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros();
                self.current &= self.current - 1;
                let index = self.word as u16 * 64 + bit as u16;
                return Some(Point::from_universe_index(index));
            }

            if self.word >= self.last_word {
                return None;
            }
            self.word += 1;
            self.current = self.words[self.word];
        }
    }
}

#[cfg(test)]
mod test {
    use crate::point::Point;
    use crate::pointset::PointSet;

    #[test]
    fn add_remove_contains() {
        let mut set = PointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        let c = Point::new(18, 18);

        set.add(a);
        set.add(b);
        set.add(c);
        assert_eq!(set.len(), 3);
        assert!(set.contains(a) && set.contains(b) && set.contains(c));
        assert!(!set.contains(Point::new(3, 5)));

        set.remove(b);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(b));
    }

    #[test]
    fn iteration_ascending() {
        let mut set = PointSet::new();
        let points = [Point::new(18, 18), Point::new(0, 1), Point::new(7, 3), Point::new(0, 0)];
        for &p in &points {
            set.add(p);
        }

        let collected: Vec<Point> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(7, 3), Point::new(18, 18)]
        );

        // iteration is restartable
        assert_eq!(set.iter().count(), 4);
    }

    #[test]
    fn iteration_after_removal() {
        // bounds are not tightened by removal, iteration must still be correct
        let mut set = PointSet::new();
        set.add(Point::new(0, 0));
        set.add(Point::new(18, 18));
        set.remove(Point::new(0, 0));
        set.remove(Point::new(18, 18));
        set.add(Point::new(9, 9));

        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Point::new(9, 9)]);
    }

    #[test]
    fn empty_iteration() {
        let set = PointSet::new();
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn set_operations() {
        let mut a = PointSet::new();
        a.add(Point::new(1, 1));
        a.add(Point::new(2, 2));

        let mut b = PointSet::new();
        b.add(Point::new(2, 2));
        b.add(Point::new(3, 3));

        let union = a.union(&b);
        assert_eq!(union.len(), 3);

        a.remove_set(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![Point::new(1, 1)]);

        a.add_set(&b);
        assert_eq!(a.len(), 3);
    }
}
