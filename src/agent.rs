use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::game::{GameState, Move};
use crate::point::{Point, Stone};

/// A move-selection policy. Any pure function from a state to a legal move
/// satisfies the contract; the engine assumes nothing about the policy.
pub trait Agent {
    fn select_move(&mut self, state: &GameState) -> Move;
}

/// Plays a uniformly random legal point, except for filling its own eyes,
/// and passes once nothing else is left.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> Agent for RandomBot<R> {
    fn select_move(&mut self, state: &GameState) -> Move {
        let board = state.board();
        let player = state.next_player();

        let candidates: Vec<Point> = board
            .points()
            .filter(|&point| {
                state.is_move_legal(Move::Play(point)) && !is_point_an_eye(board, point, player)
            })
            .collect();

        match candidates.choose(&mut self.rng) {
            Some(&point) => Move::Play(point),
            None => Move::Pass,
        }
    }
}

/// A conservative single-point eye check: an empty point whose orthogonal
/// neighbors are all friendly and whose diagonals are friendly-controlled
/// (3 of 4 in the middle, all of them on the edge).
pub fn is_point_an_eye(board: &Board, point: Point, stone: Stone) -> bool {
    if !board.is_empty(point) {
        return false;
    }

    for &neighbor in board.neighbors(point) {
        if board.stone_at(neighbor) != Some(stone) {
            return false;
        }
    }

    let mut friendly_corners = 0;
    let mut off_board_corners = 0;
    for row_offset in [-1i16, 1] {
        for col_offset in [-1i16, 1] {
            let row = point.row() as i16 + row_offset;
            let col = point.col() as i16 + col_offset;
            if row < 0 || row >= board.rows() as i16 || col < 0 || col >= board.cols() as i16 {
                off_board_corners += 1;
                continue;
            }
            if board.stone_at(Point::new(row as u8, col as u8)) == Some(stone) {
                friendly_corners += 1;
            }
        }
    }

    if off_board_corners > 0 {
        off_board_corners + friendly_corners == 4
    } else {
        friendly_corners >= 3
    }
}
