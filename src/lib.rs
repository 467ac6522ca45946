#![warn(missing_debug_implementations)]
#![allow(clippy::derived_hash_with_manual_eq)]
#![allow(clippy::new_without_default)]

//! A rules engine for [Go/Baduk/Weiqi](https://en.wikipedia.org/wiki/Go_(game)).
//!
//! The engine maintains board state with incremental group and liberty
//! tracking, enforces legal-move semantics (suicide, situational superko) and
//! exposes an immutable, hashable history of game states:
//!
//! * [Board] places stones, merges and captures groups, and keeps a running
//!   [Zobrist] position hash.
//! * [GameState] is a persistent history chain with legality checks
//!   ([GameState::is_move_legal]) and move application
//!   ([GameState::apply_move]).
//! * [Agent] is the seam for move-selection policies, with [RandomBot] as the
//!   built-in baseline, used by the playout-based [scoring] helpers.
//!
//! # Example
//!
//! ```
//! use baduk::{GameState, Move};
//!
//! let game = GameState::new_game(19);
//! let mv: Move = "Q16".parse().unwrap();
//! assert!(game.is_move_legal(mv));
//!
//! let game = game.apply_move(mv);
//! println!("{}", game.board());
//! ```

use static_assertions::const_assert;

pub use agent::*;
pub use board::*;
pub use game::*;
pub use group::*;
pub use io::*;
pub use neighbor::*;
pub use point::*;
pub use pointset::*;
pub use zobrist::*;

// group handles are u16 with room for sentinels, and the column letters
// must cover every column
const_assert!(MAX_POINTS < u16::MAX - 8);
const_assert!(MAX_BOARD_SIZE <= 25);

mod agent;
mod board;
mod game;
mod group;
mod io;
mod neighbor;
mod point;
mod pointset;
pub mod scoring;
mod zobrist;
