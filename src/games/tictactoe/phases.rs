//! Phases of the animation-gated state machine.
//!
//! The two input locks of the game (a move is animating, the board is being
//! prepared) and the two game-over conditions are folded into one enum, so
//! combinations like "won while preparing" cannot be represented.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Where the game currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Grid is being drawn, or the settle delay after it has not elapsed.
    Initializing,
    /// Ready for a click.
    AwaitingInput,
    /// A mark is being drawn; the board is written once it finishes.
    Animating {
        /// Cell being drawn into.
        position: Position,
        /// Mark being drawn.
        mark: Mark,
    },
    /// A player completed a line.
    Won(Mark),
    /// All nine squares are filled without a line.
    Draw,
}

impl Phase {
    /// The lock currently rejecting input, if any.
    pub fn lock(&self) -> Option<Lock> {
        match self {
            Phase::Initializing => Some(Lock::Initializing),
            Phase::Animating { .. } => Some(Lock::Animating),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }

    /// The winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Phase::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Reason input is temporarily refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Lock {
    /// A move's drawing animation is in flight.
    #[display("a move is animating")]
    Animating,
    /// The grid is being (re)drawn.
    #[display("the board is initializing")]
    Initializing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locks() {
        assert_eq!(Phase::Initializing.lock(), Some(Lock::Initializing));
        assert_eq!(
            Phase::Animating {
                position: Position::Center,
                mark: Mark::X
            }
            .lock(),
            Some(Lock::Animating)
        );
        assert_eq!(Phase::AwaitingInput.lock(), None);
        assert_eq!(Phase::Draw.lock(), None);
    }

    #[test]
    fn test_game_over() {
        assert!(Phase::Won(Mark::O).is_over());
        assert!(Phase::Draw.is_over());
        assert!(!Phase::AwaitingInput.is_over());
        assert_eq!(Phase::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Phase::Draw.winner(), None);
    }
}
