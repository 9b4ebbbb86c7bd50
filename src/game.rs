use crate::bitboard::{BitBoard, EMPTY};
use crate::board::{Board, GameStatus};
use crate::color::Color;
use crate::draughts_move::Move;
use crate::error::Error;
use crate::movegen::{mandatory_capture_origin, valid_moves, MoveList};
use crate::square::Square;

use log::debug;

/// What happens after a step has been accepted?
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TurnState {
    /// The piece that just jumped can jump again, and must.  The same side stays on move and
    /// only this piece may be moved.
    ContinueCapture(Square),
    /// The turn passed to the other side.  The game may have ended.
    TurnEnded(GameStatus),
}

/// For UI front ends, store a game object which tracks whose turn it is, capture chains, the
/// move history, and the result.
///
/// This drives the rules the way an interactive board does: a player picks up a piece, is shown
/// its destinations, and drops it on one of them.  When a capture is available, only the first
/// obligated piece (in scan order) may be picked up.
#[derive(Clone, Debug)]
pub struct Game {
    start_pos: Board,
    start_side: Color,
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    chain: Option<Square>,
    status: GameStatus,
}

impl Game {
    /// Create a new `Game` with the initial position.  Red moves first.
    ///
    /// ```
    /// use draughts::{Game, Board, Color, GameStatus};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), Board::initial());
    /// assert_eq!(game.side_to_move(), Color::Red);
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn new() -> Game {
        Game::new_with_board(Board::initial(), Color::Red)
    }

    /// Create a new `Game` with a specific starting position and side to move.
    pub fn new_with_board(board: Board, side_to_move: Color) -> Game {
        Game {
            start_pos: board,
            start_side: side_to_move,
            board,
            side_to_move,
            history: vec![],
            chain: None,
            status: board.status(),
        }
    }

    /// Get the current position on the board.
    pub fn current_position(&self) -> Board {
        self.board
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// What is the status of this game?
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Every step made so far, in order.  A multi-jump turn shows up as several steps by the
    /// same side.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// If a capture chain is under way, the square of the piece that has to keep jumping.
    pub fn capture_in_progress(&self) -> Option<Square> {
        self.chain
    }

    /// The piece the side to move is obliged to move, if any: the piece in the middle of a
    /// capture chain, or else the first piece that has a capture.
    pub fn forced_piece(&self) -> Option<Square> {
        self.chain
            .or_else(|| mandatory_capture_origin(&self.board, self.side_to_move))
    }

    /// The squares the side to move may pick a piece up from.
    ///
    /// ```
    /// use draughts::{Game, Color};
    ///
    /// let game = Game::new();
    /// let pieces = game.selectable_pieces();
    /// assert_eq!(pieces, game.current_position().color_combined(Color::Red));
    /// ```
    pub fn selectable_pieces(&self) -> BitBoard {
        if self.status.is_over() {
            return EMPTY;
        }
        match self.forced_piece() {
            Some(sq) => BitBoard::from_square(sq),
            None => self.board.color_combined(self.side_to_move),
        }
    }

    /// The destinations for the piece on `square`, or nothing if that piece may not be picked
    /// up right now.
    pub fn legal_destinations(&self, square: Square) -> MoveList {
        if self.status.is_over() || self.board.color_on(square) != Some(self.side_to_move) {
            return MoveList::new();
        }
        if let Some(chain) = self.chain {
            return if chain == square {
                valid_moves(&self.board, square, true)
            } else {
                MoveList::new()
            };
        }
        match mandatory_capture_origin(&self.board, self.side_to_move) {
            Some(origin) if origin != square => MoveList::new(),
            origin => valid_moves(&self.board, square, origin.is_some()),
        }
    }

    /// Make a step on the board.
    ///
    /// If the step is a jump and the same piece can jump again, the turn does not pass and
    /// `TurnState::ContinueCapture` is returned.  Otherwise the turn passes, the position is
    /// evaluated, and the new status is returned.
    ///
    /// ```
    /// use draughts::{Game, GameStatus, Square, TurnState, Color};
    ///
    /// let mut game = Game::new();
    /// let state = game.make_move(Square::make_square(5, 0), Square::make_square(4, 1));
    ///
    /// assert_eq!(state, Ok(TurnState::TurnEnded(GameStatus::InProgress)));
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// ```
    pub fn make_move(&mut self, source: Square, dest: Square) -> Result<TurnState, Error> {
        if self.status.is_over() {
            return Err(Error::GameOver);
        }
        if !self.legal_destinations(source).contains(&dest) {
            return Err(Error::IllegalMove { source, dest });
        }

        let (outcome, m) = self
            .board
            .make_move(source, dest)
            .ok_or(Error::IllegalMove { source, dest })?;
        self.board = outcome.board;
        self.history.push(m);

        if m.is_capture() && outcome.has_more_captures {
            debug!("{} continues capturing from {}", self.side_to_move, dest);
            self.chain = Some(dest);
            return Ok(TurnState::ContinueCapture(dest));
        }

        self.chain = None;
        self.side_to_move = !self.side_to_move;
        self.status = self.board.status();
        debug!(
            "{} played {}, {} to move, status: {}",
            !self.side_to_move, m, self.side_to_move, self.status
        );
        Ok(TurnState::TurnEnded(self.status))
    }

    /// Take back the last step.  Captured pieces come back with the rank they had, and a
    /// partly played capture chain is resumed where it was.  Returns `false` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let m = match self.history.pop() {
            Some(m) => m,
            None => return false,
        };

        self.board = self.board.unmake_move(&m);
        self.side_to_move = m.get_piece().color();
        self.chain = match self.history.last() {
            Some(prev) if prev.get_piece().color() == self.side_to_move && prev.is_capture() => {
                Some(prev.get_dest())
            }
            _ => None,
        };
        self.status = GameStatus::InProgress;
        debug!("took back {}, {} to move", m, self.side_to_move);
        true
    }

    /// Go back to the starting position and forget the history.
    pub fn reset(&mut self) {
        *self = Game::new_with_board(self.start_pos, self.start_side);
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::square::sq;
    use std::str::FromStr;

    fn game(position: &str, side: Color) -> Game {
        Game::new_with_board(Board::from_str(position).expect("valid position"), side)
    }

    #[test]
    fn turns_alternate() {
        let mut g = Game::new();
        assert_eq!(
            g.make_move(sq("a3"), sq("b4")),
            Ok(TurnState::TurnEnded(GameStatus::InProgress))
        );
        assert_eq!(g.side_to_move(), Color::Black);

        // red may not move twice
        assert_eq!(
            g.make_move(sq("c3"), sq("d4")),
            Err(Error::IllegalMove {
                source: sq("c3"),
                dest: sq("d4")
            })
        );
        assert_eq!(
            g.make_move(sq("b6"), sq("c5")),
            Ok(TurnState::TurnEnded(GameStatus::InProgress))
        );
        assert_eq!(g.history().len(), 2);
    }

    #[test]
    fn only_the_first_obligated_piece_is_selectable() {
        let g = game("8/8/8/8/3b1b2/2r3r1/8/8", Color::Red);
        assert_eq!(g.forced_piece(), Some(sq("c3")));
        assert_eq!(g.selectable_pieces(), BitBoard::from_square(sq("c3")));
        assert_eq!(g.legal_destinations(sq("c3")).as_slice(), &[sq("e5")]);
        assert!(g.legal_destinations(sq("g3")).is_empty());
    }

    #[test]
    fn illegal_destinations_are_rejected() {
        let mut g = game("8/8/8/8/3b1b2/2r3r1/8/8", Color::Red);
        // a simple move while a capture is pending
        assert!(g.make_move(sq("c3"), sq("b4")).is_err());
        // the other capturing piece
        assert!(g.make_move(sq("g3"), sq("e5")).is_err());
        assert_eq!(
            g.current_position(),
            Board::from_str("8/8/8/8/3b1b2/2r3r1/8/8").unwrap()
        );
        assert!(g.history().is_empty());
    }

    #[test]
    fn capture_chain_keeps_the_turn() {
        let mut g = game("8/8/8/8/3b4/8/1b6/r7", Color::Red);
        assert_eq!(
            g.make_move(sq("a1"), sq("c3")),
            Ok(TurnState::ContinueCapture(sq("c3")))
        );
        assert_eq!(g.side_to_move(), Color::Red);
        assert_eq!(g.capture_in_progress(), Some(sq("c3")));
        assert_eq!(g.legal_destinations(sq("c3")).as_slice(), &[sq("e5")]);

        assert_eq!(
            g.make_move(sq("c3"), sq("e5")),
            Ok(TurnState::TurnEnded(GameStatus::RedWins))
        );
        assert_eq!(g.capture_in_progress(), None);
        assert_eq!(g.selectable_pieces(), EMPTY);
        assert_eq!(g.make_move(sq("e5"), sq("d6")), Err(Error::GameOver));
    }

    #[test]
    fn undo_resumes_a_chain_and_restores_pieces() {
        let start = Board::from_str("8/8/8/8/3b4/8/1b6/r7").unwrap();
        let mut g = Game::new_with_board(start, Color::Red);
        g.make_move(sq("a1"), sq("c3")).unwrap();
        g.make_move(sq("c3"), sq("e5")).unwrap();

        assert!(g.undo());
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.side_to_move(), Color::Red);
        assert_eq!(g.capture_in_progress(), Some(sq("c3")));
        assert_eq!(
            g.current_position().piece_on(sq("d4")),
            Some(Piece::regular(Color::Black))
        );

        assert!(g.undo());
        assert_eq!(g.capture_in_progress(), None);
        assert_eq!(g.current_position(), start);
        assert!(!g.undo());
    }

    #[test]
    fn undo_brings_back_a_captured_king() {
        let mut g = game("8/8/8/8/3B4/2r5/8/6b1", Color::Red);
        assert_eq!(
            g.make_move(sq("c3"), sq("e5")),
            Ok(TurnState::TurnEnded(GameStatus::RedWins))
        );
        assert!(g.undo());
        assert_eq!(
            g.current_position().piece_on(sq("d4")),
            Some(Piece::king(Color::Black))
        );
        assert_eq!(g.side_to_move(), Color::Red);
    }

    #[test]
    fn reset_returns_to_the_start() {
        let mut g = Game::new();
        g.make_move(sq("a3"), sq("b4")).unwrap();
        g.reset();
        assert_eq!(g.current_position(), Board::initial());
        assert_eq!(g.side_to_move(), Color::Red);
        assert!(g.history().is_empty());
    }
}
