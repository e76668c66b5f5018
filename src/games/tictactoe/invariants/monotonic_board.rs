//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Square};
use super::InvariantViolation;

/// Invariant over a transition: the board only ever gains marks.
///
/// Every square occupied before a commit holds the same mark afterwards,
/// and a commit adds exactly one mark. Unlike the single-state invariants
/// this compares two boards, so it is checked pairwise.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Checks that `after` extends `before` by exactly one mark.
    pub fn check(before: &Board, after: &Board) -> Result<(), InvariantViolation> {
        let kept = before
            .squares()
            .iter()
            .zip(after.squares())
            .all(|(b, a)| *b == Square::Empty || b == a);
        if !kept {
            return Err(InvariantViolation::new(
                "Occupied squares never change before a reset",
            ));
        }
        if after.filled() != before.filled() + 1 {
            return Err(InvariantViolation::new("A commit places exactly one mark"));
        }
        Ok(())
    }
}
