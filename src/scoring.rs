use std::sync::Arc;

use crate::agent::Agent;
use crate::board::Board;
use crate::game::GameState;
use crate::point::{Point, Stone};
use crate::pointset::PointSet;

/// Who a point counts for under area scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointStatus {
    Black,
    White,
    /// Dame: bordering both colors, counted for no one.
    Neutral,
}

/// Per-point ownership of a final position.
#[derive(Debug, Clone)]
pub struct TerritoryMap {
    rows: u8,
    cols: u8,
    status: Vec<PointStatus>,
}

impl TerritoryMap {
    fn new(rows: u8, cols: u8) -> TerritoryMap {
        TerritoryMap {
            rows,
            cols,
            status: vec![PointStatus::Neutral; rows as usize * cols as usize],
        }
    }

    fn index(&self, point: Point) -> usize {
        point.row() as usize * self.cols as usize + point.col() as usize
    }

    pub fn at(&self, point: Point) -> PointStatus {
        self.status[self.index(point)]
    }

    fn set(&mut self, point: Point, status: PointStatus) {
        let index = self.index(point);
        self.status[index] = status;
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        Point::all(self.rows, self.cols)
    }
}

#[derive(Debug, Default, Copy, Clone)]
struct Boundary {
    includes_black: bool,
    includes_white: bool,
}

impl Boundary {
    fn only(self) -> PointStatus {
        match (self.includes_black, self.includes_white) {
            (true, false) => PointStatus::Black,
            (false, true) => PointStatus::White,
            _ => PointStatus::Neutral,
        }
    }
}

/// The colors of all stones bordering the empty region containing `origin`.
fn collect_boundary(board: &Board, origin: Point) -> Boundary {
    debug_assert!(board.is_empty(origin));

    let mut boundary = Boundary::default();
    let mut visited = PointSet::new();
    let mut stack = vec![origin];

    while let Some(point) = stack.pop() {
        if visited.contains(point) {
            continue;
        }
        visited.add(point);

        match board.stone_at(point) {
            Some(Stone::Black) => boundary.includes_black = true,
            Some(Stone::White) => boundary.includes_white = true,
            None => {
                for &neighbor in board.neighbors(point) {
                    if !visited.contains(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }
    }

    boundary
}

/// Area (Chinese) counting: stones count for their color, empty regions for
/// the color that exclusively surrounds them, the rest is dame.
pub fn evaluate_territory(board: &Board) -> TerritoryMap {
    let mut map = TerritoryMap::new(board.rows(), board.cols());

    for point in board.points() {
        let status = match board.stone_at(point) {
            Some(Stone::Black) => PointStatus::Black,
            Some(Stone::White) => PointStatus::White,
            None => collect_boundary(board, point).only(),
        };
        map.set(point, status);
    }

    map
}

/// An area score, komi in half points.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Score {
    pub black: u32,
    pub white: u32,
    pub komi_2: i16,
}

impl Score {
    /// The winning color, or `None` for a drawn game.
    pub fn winner(&self) -> Option<Stone> {
        let black_2 = 2 * self.black as i64;
        let white_2 = 2 * self.white as i64 + self.komi_2 as i64;
        match black_2.cmp(&white_2) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Score a (finished) game's current board with the game's komi.
pub fn score_game(state: &GameState) -> Score {
    score_board(state.board(), state.komi_2())
}

pub fn score_board(board: &Board, komi_2: i16) -> Score {
    let map = evaluate_territory(board);

    let mut black = 0;
    let mut white = 0;
    for point in map.points() {
        match map.at(point) {
            PointStatus::Black => black += 1,
            PointStatus::White => white += 1,
            PointStatus::Neutral => {}
        }
    }

    Score { black, white, komi_2 }
}

/// Play the game out to the end with the given policy.
pub fn complete_game(start: &Arc<GameState>, agent: &mut impl Agent) -> Arc<GameState> {
    let mut game = start.clone();
    while !game.is_over() {
        let mv = agent.select_move(&game);
        game = game.apply_move(mv);
    }
    game
}

/// A stone is considered dead once the opponent owns its point in at least
/// this fraction of random continuations.
pub const DEAD_THRESHOLD: f64 = 0.75;

/// Estimate dead stones by playing `rounds` continuations of `game` with the
/// given policy and voting on the ownership of every point. Returns a copy of
/// the board with the dead stones removed.
pub fn remove_dead_stones(game: &Arc<GameState>, agent: &mut impl Agent, rounds: u32) -> Board {
    assert!(rounds > 0, "at least one playout round required");

    let orig_board = game.board();
    let rows = orig_board.rows();
    let cols = orig_board.cols();

    let mut black_owned = BoardCounter::new(rows, cols);
    let mut white_owned = BoardCounter::new(rows, cols);

    for _ in 0..rounds {
        let final_state = complete_game(game, agent);
        let map = evaluate_territory(final_state.board());
        for point in map.points() {
            match map.at(point) {
                PointStatus::Black => black_owned.increment(point),
                PointStatus::White => white_owned.increment(point),
                PointStatus::Neutral => {}
            }
        }
    }

    let mut cleaned = Board::new(rows, cols);
    for point in orig_board.points() {
        let stone = match orig_board.stone_at(point) {
            None => continue,
            Some(stone) => stone,
        };
        let opponent_owned = match stone {
            Stone::Black => &white_owned,
            Stone::White => &black_owned,
        };
        let p_opponent = opponent_owned.get(point) as f64 / rounds as f64;
        if p_opponent < DEAD_THRESHOLD {
            cleaned.place(point, stone);
        }
    }
    cleaned
}

/// Per-point playout vote counts.
#[derive(Debug, Clone)]
struct BoardCounter {
    cols: u8,
    counts: Vec<u32>,
}

impl BoardCounter {
    fn new(rows: u8, cols: u8) -> BoardCounter {
        BoardCounter {
            cols,
            counts: vec![0; rows as usize * cols as usize],
        }
    }

    fn increment(&mut self, point: Point) {
        self.counts[point.row() as usize * self.cols as usize + point.col() as usize] += 1;
    }

    fn get(&self, point: Point) -> u32 {
        self.counts[point.row() as usize * self.cols as usize + point.col() as usize]
    }
}

#[cfg(test)]
mod test {
    use crate::board::Board;
    use crate::point::{Point, Stone};
    use crate::scoring::{evaluate_territory, score_board, PointStatus, Score};

    #[test]
    fn territory_small() {
        // o o .
        // x o .
        // . x .
        let mut board = Board::new(3, 3);
        board.place(Point::new(0, 1), Stone::Black);
        board.place(Point::new(1, 0), Stone::Black);
        board.place(Point::new(1, 1), Stone::White);
        board.place(Point::new(2, 0), Stone::White);
        board.place(Point::new(2, 1), Stone::White);

        let map = evaluate_territory(&board);
        // the corner below black is black territory
        assert_eq!(map.at(Point::new(0, 0)), PointStatus::Black);
        // the right column touches both colors: dame
        assert_eq!(map.at(Point::new(0, 2)), PointStatus::Neutral);
        assert_eq!(map.at(Point::new(2, 2)), PointStatus::Neutral);
        // stones count for their color
        assert_eq!(map.at(Point::new(1, 1)), PointStatus::White);
        assert_eq!(map.at(Point::new(0, 1)), PointStatus::Black);
    }

    #[test]
    fn score_with_komi() {
        // black owns the left column, white the right, the middle is dame
        let mut board = Board::new(3, 3);
        board.place(Point::new(0, 0), Stone::Black);
        board.place(Point::new(1, 0), Stone::Black);
        board.place(Point::new(2, 0), Stone::Black);
        board.place(Point::new(0, 2), Stone::White);
        board.place(Point::new(1, 2), Stone::White);
        board.place(Point::new(2, 2), Stone::White);

        // middle column is dame, 3 stones each
        let score = score_board(&board, 0);
        assert_eq!(score, Score { black: 3, white: 3, komi_2: 0 });
        assert_eq!(score.winner(), None);

        let score = score_board(&board, 1);
        assert_eq!(score.winner(), Some(Stone::White));
    }
}
