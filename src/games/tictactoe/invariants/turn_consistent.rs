//! Turn counter invariant: one turn per committed mark.

use super::super::GameState;
use super::Invariant;

/// Invariant: the number of marks on the board is `turn - 1`.
///
/// The turn only advances when a mark is committed, and a reset clears
/// both together.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().filled() + 1 == usize::from(state.turn().value())
    }

    fn description() -> &'static str {
        "Turn counter equals placed marks plus one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Mark, Phase, Position, Turn};

    #[test]
    fn test_fresh_game_holds() {
        assert!(TurnConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_skipped_turn_violates() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        let state = GameState::from_parts(board, Turn::new(3), Phase::AwaitingInput);
        assert!(!TurnConsistentInvariant::holds(&state));
    }
}
