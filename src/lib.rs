//! A rules engine for 8x8 checkers (draughts).
//!
//! The engine answers the questions a turn controller asks while a game is played:
//!
//! * which piece must move, because it is the first with a capture ([`mandatory_capture_origin`]),
//! * where a piece may go ([`valid_moves`]),
//! * what a step does to the board, and whether the piece can keep jumping
//!   ([`Board::apply_move`]),
//! * whether the game is over ([`Board::status`]).
//!
//! Everything works on `Copy` snapshots, so a `Board` is never changed in place.  [`Game`] wraps
//! the rules in a ready-made turn controller with history and undo.
//!
//! ```
//! use draughts::{Board, Color, GameStatus, Square, valid_moves, mandatory_capture_origin};
//!
//! let board = Board::initial();
//! assert_eq!(mandatory_capture_origin(&board, Color::Red), None);
//!
//! let from = Square::make_square(5, 2);
//! let to = valid_moves(&board, from, false)[0];
//! let outcome = board.apply_move(from, to);
//! assert_eq!(outcome.board.status(), GameStatus::InProgress);
//! ```

mod bitboard;
pub use crate::bitboard::{BitBoard, DARK_SQUARES, EMPTY};

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::BoardBuilder;

mod color;
pub use crate::color::*;

mod draughts_move;
pub use crate::draughts_move::*;

mod error;
pub use crate::error::Error;

mod game;
pub use crate::game::{Game, TurnState};

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;
