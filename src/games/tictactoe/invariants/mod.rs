//! Properties every reachable game state satisfies.
//!
//! Single-state invariants implement [`Invariant`] and compose into an
//! [`InvariantSet`] through tuples. [`MonotonicBoard`] relates two states and
//! is checked by the commit contract. All of them run on every commit in
//! debug builds.

/// A property of a single state.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property says, used in violation reports.
    fn description() -> &'static str;

    /// [`holds`](Self::holds) as a `Result`.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// A property that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {}", description)]
pub struct InvariantViolation {
    /// The violated property.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation of the property described by `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together; every violation is reported, not just the first.
pub trait InvariantSet<S> {
    /// Checks each member invariant against `state`.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$($member::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();
                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }
    };
}

impl_invariant_set!(A, B);

pub mod monotonic_board;
pub mod outcome_consistent;
pub mod turn_consistent;

pub use monotonic_board::MonotonicBoard;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// All single-state tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (TurnConsistentInvariant, OutcomeConsistentInvariant);
