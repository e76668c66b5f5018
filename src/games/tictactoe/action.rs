//! Placements and rejected input.
//!
//! A placement is the domain event committed once its animation finishes.
//! Every way an input can fail is a [`Rejection`]: the state is left as it
//! was and nothing is shown to the player beyond the status line.

use super::phases::Lock;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// An input the state machine refused.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum Rejection {
    /// The game has been won or drawn; only a reset is accepted.
    #[display("Game is already over")]
    GameOver,

    /// Input is locked.
    #[display("Input ignored while {}", _0)]
    Locked(Lock),

    /// The pointer is outside the drawing surface.
    #[display("Point ({}, {}) is outside the board", x, y)]
    OutsideBoard {
        /// Pointer x.
        x: f64,
        /// Pointer y.
        y: f64,
    },

    /// The square under the pointer already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// No drawing surface has been attached yet.
    #[display("No drawing surface attached")]
    MissingSurface,
}

impl std::error::Error for Rejection {}
