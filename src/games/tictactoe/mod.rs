//! Tic-tac-toe: rules, state, and the animation-gated state machine.

mod action;
mod contracts;
pub mod invariants;
mod machine;
mod phases;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Placement, Rejection};
pub use contracts::CommitContract;
pub use machine::{CommitOutcome, GameStateMachine, PendingMove, SETTLE_DELAY};
pub use phases::{Lock, Phase};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Mark, Square, Turn};
