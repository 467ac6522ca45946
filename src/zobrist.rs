use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use lazy_static::lazy_static;
use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

use crate::point::{Point, Stone, MAX_POINTS};

type Inner = u64;

/// An incrementally maintainable position fingerprint.
///
/// The hash of a position is the XOR of the code for every point's current
/// occupant (stone code or empty code), optionally combined with the
/// to-move code, see [GameState::situation_hash](crate::game::GameState::situation_hash).
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Zobrist(Inner);

struct ZobristData {
    stones: [Vec<Zobrist>; 2],
    empty: Vec<Zobrist>,
    turn: [Zobrist; 2],
}

// initialized once from a fixed seed, read-only afterwards
lazy_static! {
    static ref ZOBRIST_DATA: ZobristData = ZobristData::new();
}

/// Deterministically seeded rng, so the generated codes (and hence all
/// position hashes) are reproducible between runs.
fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}

impl ZobristData {
    #[inline(never)]
    fn new() -> ZobristData {
        let mut rng = consistent_rng();
        ZobristData {
            stones: [
                gen_vec(MAX_POINTS as usize, &mut rng),
                gen_vec(MAX_POINTS as usize, &mut rng),
            ],
            empty: gen_vec(MAX_POINTS as usize, &mut rng),
            turn: [rng.gen(), rng.gen()],
        }
    }
}

fn gen_vec(len: usize, rng: &mut impl Rng) -> Vec<Zobrist> {
    Standard.sample_iter(rng).take(len).collect()
}

impl Distribution<Zobrist> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Zobrist {
        Zobrist(rng.gen())
    }
}

impl Zobrist {
    pub fn for_stone(stone: Stone, point: Point) -> Zobrist {
        ZOBRIST_DATA.stones[stone.index()][point.universe_index() as usize]
    }

    pub fn for_empty(point: Point) -> Zobrist {
        ZOBRIST_DATA.empty[point.universe_index() as usize]
    }

    pub fn for_turn(stone: Stone) -> Zobrist {
        ZOBRIST_DATA.turn[stone.index()]
    }
}

impl Debug for Zobrist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print hex, full-width with leading 0x
        write!(f, "Zobrist({:#0width$x})", self.0, width = (Inner::BITS / 4 + 2) as usize)
    }
}

impl std::ops::BitXor for Zobrist {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Zobrist(self.0 ^ rhs.0)
    }
}

impl std::ops::BitXorAssign for Zobrist {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl nohash_hasher::IsEnabled for Zobrist {}

impl Hash for Zobrist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0);
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::point::{Point, Stone, MAX_BOARD_SIZE};
    use crate::zobrist::Zobrist;

    #[test]
    fn unique() {
        let mut set = HashSet::new();

        for stone in Stone::BOTH {
            assert!(set.insert(Zobrist::for_turn(stone)));
        }

        for point in Point::all(MAX_BOARD_SIZE, MAX_BOARD_SIZE) {
            assert!(set.insert(Zobrist::for_empty(point)));
            for stone in Stone::BOTH {
                assert!(set.insert(Zobrist::for_stone(stone, point)));
            }
        }
    }

    #[test]
    fn reproducible() {
        let point = Point::new(3, 15);
        assert_eq!(Zobrist::for_stone(Stone::Black, point), Zobrist::for_stone(Stone::Black, point));
        assert_ne!(Zobrist::for_stone(Stone::Black, point), Zobrist::for_stone(Stone::White, point));
    }
}
