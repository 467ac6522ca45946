use std::hash::{Hash, Hasher};
use std::sync::Arc;

use nohash_hasher::IntSet;

use crate::board::Board;
use crate::point::{Point, Stone};
use crate::zobrist::Zobrist;

/// One of the three things a player can do on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

/// An immutable node in a persistent game history chain.
///
/// A state is created once per applied move and never mutated afterwards,
/// so it is safe to share across threads. All mutation during
/// [GameState::apply_move] happens on an exclusively-owned board copy before
/// the child state is published.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    next_player: Stone,
    last_move: Option<Move>,
    parent: Option<Arc<GameState>>,
    /// The situation hash of every ancestor: the parent's set plus the
    /// parent's own hash. Used for the superko repetition check.
    previous: IntSet<Zobrist>,
    komi_2: i16,
}

impl GameState {
    /// A fresh game on a square `board_size` board, black to move, no komi.
    pub fn new_game(board_size: u8) -> Arc<GameState> {
        Self::new_game_with_komi(board_size, 0)
    }

    /// A fresh game with komi, counted in half points (`13` means komi 6.5).
    pub fn new_game_with_komi(board_size: u8, komi_2: i16) -> Arc<GameState> {
        Arc::new(GameState {
            board: Board::new(board_size, board_size),
            next_player: Stone::Black,
            last_move: None,
            parent: None,
            previous: IntSet::default(),
            komi_2,
        })
    }

    fn child(parent: Arc<GameState>, board: Board, mv: Move) -> Arc<GameState> {
        let mut previous = parent.previous.clone();
        previous.insert(parent.situation_hash());

        let next_player = parent.next_player.other();
        let komi_2 = parent.komi_2;
        Arc::new(GameState {
            board,
            next_player,
            last_move: Some(mv),
            parent: Some(parent),
            previous,
            komi_2,
        })
    }

    /// Apply a move, yielding the child state. The current state is unchanged,
    /// clone the [Arc] to keep using it.
    ///
    /// `Play` panics on an occupied point; use [GameState::is_move_legal] first.
    /// `Pass` and `Resign` keep the board and only toggle the player.
    pub fn apply_move(self: Arc<Self>, mv: Move) -> Arc<GameState> {
        match mv {
            Move::Play(point) => {
                let mut board = self.board.clone();
                board.place(point, self.next_player);
                Self::child(self, board, mv)
            }
            Move::Pass | Move::Resign => {
                let board = self.board.clone();
                Self::child(self, board, mv)
            }
        }
    }

    /// Whether a prospective move is legal in this state, without applying it.
    /// Total over every move variant: passing and resigning are always legal.
    pub fn is_move_legal(&self, mv: Move) -> bool {
        let point = match mv {
            Move::Pass | Move::Resign => return true,
            Move::Play(point) => point,
        };

        if !self.board.contains(point) || !self.board.is_empty(point) {
            return false;
        }

        let player = self.next_player;
        if self.board.will_capture(point, player) {
            // superko: reject recreating any ancestor situation
            // (whole-board position plus player to move)
            let hash = self.board.hash_after(point, player) ^ Zobrist::for_turn(player.other());
            !self.previous.contains(&hash)
        } else {
            !self.board.will_have_no_liberties(point, player)
        }
    }

    /// The game is over once someone resigns or both players pass in a row.
    /// Callers are expected to stop applying moves to a finished state.
    pub fn is_over(&self) -> bool {
        match self.last_move {
            None | Some(Move::Play(_)) => false,
            Some(Move::Resign) => true,
            Some(Move::Pass) => {
                matches!(
                    self.parent.as_ref().and_then(|parent| parent.last_move),
                    Some(Move::Pass)
                )
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Stone {
        self.next_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The state this one was derived from, if any. Walking parents yields
    /// the whole game history back to the empty board.
    pub fn parent(&self) -> Option<&Arc<GameState>> {
        self.parent.as_ref()
    }

    /// Komi in half points.
    pub fn komi_2(&self) -> i16 {
        self.komi_2
    }

    /// The board hash combined with the player to move.
    pub fn situation_hash(&self) -> Zobrist {
        self.board.hash() ^ Zobrist::for_turn(self.next_player)
    }
}

/// States are equal iff they agree on the board position and the player to
/// move. History and last move are irrelevant.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.next_player == other.next_player && self.board == other.board
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.situation_hash().hash(state);
    }
}
