//! Contract for committing a placement.
//!
//! Formalizes the commit as `{P} commit {Q}`: the precondition is what
//! [`GameState::validate_click`] already enforces at click time, the
//! postcondition relates the state before and after the commit.

use super::action::Placement;
use super::invariants::{InvariantSet, InvariantViolation, MonotonicBoard, TicTacToeInvariants};
use super::{GameState, Square};
use tracing::{instrument, warn};

/// Postcondition checks for a commit.
pub struct CommitContract;

impl CommitContract {
    /// Checks that `after` is a legal successor of `before` for `placement`.
    ///
    /// - the board grew by exactly `placement`, nothing else changed
    /// - the turn advanced by exactly one
    /// - every single-state invariant holds afterwards
    #[instrument(skip(before, after))]
    pub fn post(
        before: &GameState,
        after: &GameState,
        placement: Placement,
    ) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if let Err(violation) = MonotonicBoard::check(before.board(), after.board()) {
            violations.push(violation);
        }
        if after.board().get(placement.position) != Square::Occupied(placement.mark) {
            violations.push(InvariantViolation::new(
                "Committed square holds the placed mark",
            ));
        }
        if *after.turn() != before.turn().next() {
            violations.push(InvariantViolation::new("Turn advances by exactly one"));
        }
        if let Err(mut more) = TicTacToeInvariants::check_all(after) {
            violations.append(&mut more);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Commit postcondition violated");
            Err(violations)
        }
    }
}
