//! Game state owned by the state machine.

use super::action::{Placement, Rejection};
use super::phases::{Lock, Phase};
use super::rules::check_winner;
use super::{Board, Mark, Position, Turn};
use crate::animation::{Point, Size};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board, turn counter and phase of one game.
///
/// Only the state machine mutates this; everyone else gets copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// Committed marks.
    board: Board,
    /// Turn counter, 1-based.
    turn: Turn,
    /// Current phase.
    phase: Phase,
}

impl GameState {
    /// A fresh game: empty board, turn 1, preparing the board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::FIRST,
            phase: Phase::Initializing,
        }
    }

    /// Assembles a state from parts. No consistency checks are made.
    pub fn from_parts(board: Board, turn: Turn, phase: Phase) -> Self {
        Self { board, turn, phase }
    }

    /// The mark whose turn it is.
    pub fn active_mark(&self) -> Mark {
        self.turn.active_mark()
    }

    /// The winner, if the game has been won.
    pub fn winner(&self) -> Option<Mark> {
        self.phase.winner()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Status line shown to the players.
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::Won(mark) => format!("Winner: Player {}", mark),
            Phase::Draw => "It's a Draw!".to_string(),
            Phase::Initializing => "Preparing board...".to_string(),
            Phase::AwaitingInput | Phase::Animating { .. } => {
                format!("Turn {}: Player {}", self.turn, self.active_mark())
            }
        }
    }

    /// Validates a click at `point` on a surface of `size`.
    ///
    /// Checks game over and the locks before looking at the board, so a
    /// locked or finished game rejects every click the same way.
    #[instrument(level = "debug", skip(self), fields(phase = ?self.phase))]
    pub fn validate_click(&self, point: Point, size: Size) -> Result<Position, Rejection> {
        if self.phase.is_over() || self.turn.board_full() {
            return Err(Rejection::GameOver);
        }
        if let Some(lock) = self.phase.lock() {
            return Err(Rejection::Locked(lock));
        }
        let position = Position::at_point(point, size).ok_or(Rejection::OutsideBoard {
            x: point.x,
            y: point.y,
        })?;
        if !self.board.is_empty(position) {
            return Err(Rejection::CellOccupied(position));
        }
        Ok(position)
    }

    /// Enters [`Phase::Animating`] for the active mark at `position`.
    pub(crate) fn begin_placement(&mut self, position: Position) -> Placement {
        let placement = Placement::new(self.active_mark(), position);
        self.phase = Phase::Animating {
            position,
            mark: placement.mark,
        };
        placement
    }

    /// Leaves an animation without committing it.
    pub(crate) fn abandon_placement(&mut self, placement: Placement) {
        if self.phase
            == (Phase::Animating {
                position: placement.position,
                mark: placement.mark,
            })
        {
            self.phase = Phase::AwaitingInput;
        }
    }

    /// Locks input while the board is prepared.
    ///
    /// A finished game stays finished. A move in flight refuses the lock,
    /// since its commit would otherwise reopen input mid-preparation.
    pub(crate) fn enter_initializing(&mut self) -> Result<(), Rejection> {
        match self.phase {
            Phase::Animating { .. } => Err(Rejection::Locked(Lock::Animating)),
            Phase::Won(_) | Phase::Draw => Ok(()),
            Phase::Initializing | Phase::AwaitingInput => {
                self.phase = Phase::Initializing;
                Ok(())
            }
        }
    }

    /// Unlocks input once the board is prepared.
    pub(crate) fn finish_initializing(&mut self) {
        if self.phase == Phase::Initializing {
            self.phase = Phase::AwaitingInput;
        }
    }

    /// The state after committing `placement`: new board, winner check,
    /// turn advanced by one, and the matching phase.
    #[instrument(level = "debug", skip(self))]
    pub fn committed(&self, placement: Placement) -> GameState {
        let board = self.board.with_mark(placement.position, placement.mark);
        let turn = self.turn.next();
        let phase = match check_winner(&board) {
            Some(mark) => Phase::Won(mark),
            None if turn.board_full() => Phase::Draw,
            None => Phase::AwaitingInput,
        };
        GameState { board, turn, phase }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 300.0,
        height: 300.0,
    };

    fn ready() -> GameState {
        GameState::from_parts(Board::new(), Turn::FIRST, Phase::AwaitingInput)
    }

    fn cell(position: Position) -> Point {
        Point::new(position.col() as f64 * 100.0 + 50.0, position.row() as f64 * 100.0 + 50.0)
    }

    #[test]
    fn test_new_game_is_initializing() {
        let state = GameState::new();
        assert_eq!(*state.phase(), Phase::Initializing);
        assert_eq!(*state.turn(), Turn::FIRST);
        assert_eq!(state.status_text(), "Preparing board...");
        assert_eq!(
            state.validate_click(cell(Position::Center), SIZE),
            Err(Rejection::Locked(Lock::Initializing))
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(ready().status_text(), "Turn 1: Player X");

        let after = ready().committed(Placement::new(Mark::X, Position::Center));
        assert_eq!(after.status_text(), "Turn 2: Player O");

        let won = GameState::from_parts(Board::new(), Turn::new(6), Phase::Won(Mark::X));
        assert_eq!(won.status_text(), "Winner: Player X");

        let draw = GameState::from_parts(Board::new(), Turn::new(10), Phase::Draw);
        assert_eq!(draw.status_text(), "It's a Draw!");
    }

    #[test]
    fn test_status_text_while_animating_shows_mover() {
        let mut state = ready();
        state.begin_placement(Position::Center);
        assert_eq!(state.status_text(), "Turn 1: Player X");
    }

    #[test]
    fn test_validate_click() {
        let state = ready().committed(Placement::new(Mark::X, Position::Center));
        assert_eq!(
            state.validate_click(cell(Position::TopLeft), SIZE),
            Ok(Position::TopLeft)
        );
        assert_eq!(
            state.validate_click(cell(Position::Center), SIZE),
            Err(Rejection::CellOccupied(Position::Center))
        );
        assert!(matches!(
            state.validate_click(Point::new(310.0, 5.0), SIZE),
            Err(Rejection::OutsideBoard { .. })
        ));
    }

    #[test]
    fn test_begin_placement_locks_without_touching_board() {
        let mut state = ready();
        let placement = state.begin_placement(Position::TopRight);
        assert_eq!(placement, Placement::new(Mark::X, Position::TopRight));
        assert_eq!(*state.board(), Board::new());
        assert_eq!(
            state.validate_click(cell(Position::Center), SIZE),
            Err(Rejection::Locked(Lock::Animating))
        );

        state.abandon_placement(placement);
        assert_eq!(*state.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn test_commit_detects_win_and_draw() {
        let line = [
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::MiddleLeft),
            (Mark::X, Position::TopCenter),
            (Mark::O, Position::Center),
            (Mark::X, Position::TopRight),
        ];
        let won = line
            .into_iter()
            .fold(ready(), |s, (mark, pos)| s.committed(Placement::new(mark, pos)));
        assert_eq!(*won.phase(), Phase::Won(Mark::X));
        assert_eq!(*won.turn(), Turn::new(6));
        assert_eq!(
            won.validate_click(cell(Position::BottomRight), SIZE),
            Err(Rejection::GameOver)
        );

        let order = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ];
        let drawn = order.into_iter().fold(ready(), |s, pos| {
            let mark = s.active_mark();
            s.committed(Placement::new(mark, pos))
        });
        assert_eq!(*drawn.phase(), Phase::Draw);
        assert_eq!(*drawn.turn(), Turn::new(10));
    }

    #[test]
    fn test_enter_initializing_keeps_outcome() {
        for phase in [Phase::Won(Mark::O), Phase::Draw] {
            let mut state = GameState::from_parts(Board::new(), Turn::new(8), phase);
            assert_eq!(state.enter_initializing(), Ok(()));
            assert_eq!(*state.phase(), phase);
            state.finish_initializing();
            assert_eq!(*state.phase(), phase);
        }
    }

    #[test]
    fn test_enter_initializing_refused_while_animating() {
        let mut state = ready();
        let placement = state.begin_placement(Position::Center);
        assert_eq!(
            state.enter_initializing(),
            Err(Rejection::Locked(Lock::Animating))
        );
        assert_eq!(
            *state.phase(),
            Phase::Animating {
                position: placement.position,
                mark: placement.mark
            }
        );
    }
}
