//! Outcome invariant: the phase agrees with the board.

use super::super::rules::{check_winner, is_draw};
use super::super::{GameState, Phase};
use super::Invariant;

/// Invariant: exactly one of "in progress", "won" and "drawn" holds, and it
/// is the one the board shows.
///
/// - `Won(m)` iff the board has a line of `m`
/// - `Draw` iff the board is full without a line
/// - any other phase: no line and the board is not full
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let winner = check_winner(state.board());
        match state.phase() {
            Phase::Won(mark) => winner == Some(*mark),
            Phase::Draw => is_draw(state.board()) && state.turn().board_full(),
            _ => winner.is_none() && !state.turn().board_full(),
        }
    }

    fn description() -> &'static str {
        "Phase matches the outcome shown on the board"
    }
}
