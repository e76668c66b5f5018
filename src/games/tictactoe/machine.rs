//! Animation-gated game state machine.
//!
//! The machine owns the [`GameState`] and sequences animations around it:
//!
//! - `Initializing -> AwaitingInput` once the grid is drawn and settled
//! - `AwaitingInput -> Animating` on an accepted click
//! - `Animating -> AwaitingInput | Won | Draw` when the mark is committed
//! - any phase `-> Initializing` on reset
//!
//! State sits behind one mutex. Every transition happens inside a single
//! lock acquisition and the guard is never held across an `.await`, so a
//! click's check-and-lock cannot interleave with a commit. Board writes only
//! happen after the mark's animation has resolved.
//!
//! Resets do not cancel animations already running. Two counters order
//! completions instead: a reset starts a new game epoch, and a move from an
//! older game epoch is dropped without touching state. Every board
//! preparation (reset or ready) starts a new board epoch, and only the latest
//! preparation may unlock input.

use super::action::{Placement, Rejection};
#[cfg(debug_assertions)]
use super::contracts::CommitContract;
use super::phases::Phase;
use super::state::GameState;
use crate::animation::{AnimationEngine, Point, Size, SurfaceHandle};
use crate::render::{GridRenderer, MarkRenderer};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Pause after the grid is drawn before input is accepted.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Result of finishing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The placement was written to the board.
    Committed {
        /// What was placed.
        placement: Placement,
        /// Phase after the commit.
        phase: Phase,
    },
    /// A reset happened while the mark was drawing; nothing was written.
    Superseded,
}

#[derive(Debug)]
struct Shared {
    state: GameState,
    game_epoch: u64,
    board_epoch: u64,
    surface: Option<SurfaceHandle>,
}

/// Cloneable handle to one game.
///
/// All clones drive the same state.
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    shared: Arc<Mutex<Shared>>,
    grid: GridRenderer,
    marks: MarkRenderer,
}

impl GameStateMachine {
    /// Creates a machine in the initial state: empty board, turn 1,
    /// preparing the board, no surface yet.
    #[instrument]
    pub fn new(engine: AnimationEngine) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: GameState::new(),
                game_epoch: 0,
                board_epoch: 0,
                surface: None,
            })),
            grid: GridRenderer::new(engine),
            marks: MarkRenderer::new(engine),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.lock().state
    }

    /// Status line for the current state.
    pub fn status_text(&self) -> String {
        self.lock().state.status_text()
    }

    /// Attaches the drawing surface and prepares the board on it.
    ///
    /// Locks input, draws the grid, waits [`SETTLE_DELAY`], then unlocks.
    /// Board and turn are left as they are, and a finished game stays
    /// finished. While a mark is drawing this is refused with
    /// [`Rejection::Locked`] and the current surface is kept.
    #[instrument(skip(self, surface))]
    pub async fn on_ready(&self, surface: SurfaceHandle) -> Result<(), Rejection> {
        let epoch = {
            let mut shared = self.lock();
            shared.state.enter_initializing()?;
            shared.surface = Some(surface.clone());
            shared.board_epoch += 1;
            shared.board_epoch
        };
        info!(epoch, "Surface attached");
        self.prepare_board(surface, epoch).await;
        Ok(())
    }

    /// Starts a new game on the attached surface.
    ///
    /// Clears board, turn and winner, then prepares the board exactly like
    /// [`on_ready`](Self::on_ready). Before a surface is attached this is a
    /// no-op returning [`Rejection::MissingSurface`].
    #[instrument(skip(self))]
    pub async fn on_reset(&self) -> Result<(), Rejection> {
        let (surface, epoch) = {
            let mut shared = self.lock();
            let surface = shared.surface.clone().ok_or(Rejection::MissingSurface)?;
            shared.game_epoch += 1;
            shared.board_epoch += 1;
            shared.state = GameState::new();
            (surface, shared.board_epoch)
        };
        info!(epoch, "Game reset");
        self.prepare_board(surface, epoch).await;
        Ok(())
    }

    async fn prepare_board(&self, surface: SurfaceHandle, epoch: u64) {
        surface.draw(|s| s.clear());
        self.grid.draw_grid(&surface).await;
        tokio::time::sleep(SETTLE_DELAY).await;

        let mut shared = self.lock();
        if shared.board_epoch == epoch {
            shared.state.finish_initializing();
            info!(epoch, phase = ?shared.state.phase(), "Board prepared");
        } else {
            debug!(epoch, current = shared.board_epoch, "Board preparation superseded");
        }
    }

    /// Validates a click and, if accepted, locks input for its animation.
    ///
    /// `point` is relative to the surface's top-left corner and `size` is
    /// the surface's pixel size. On success the phase is already
    /// [`Phase::Animating`]; drive the returned [`PendingMove`] to draw and
    /// commit the mark.
    #[instrument(skip(self))]
    pub fn begin_move(&self, point: Point, size: Size) -> Result<PendingMove, Rejection> {
        let mut shared = self.lock();
        let position = shared.state.validate_click(point, size)?;
        let surface = shared.surface.clone().ok_or(Rejection::MissingSurface)?;
        let placement = shared.state.begin_placement(position);
        debug!(%placement, "Click accepted");

        Ok(PendingMove {
            machine: self.clone(),
            placement,
            cell_size: size.width / 3.0,
            epoch: shared.game_epoch,
            surface,
            finished: false,
        })
    }

    /// Handles a click end to end: validate, animate, commit.
    #[instrument(skip(self))]
    pub async fn on_click(&self, point: Point, size: Size) -> Result<CommitOutcome, Rejection> {
        let pending = self.begin_move(point, size)?;
        Ok(pending.finish().await)
    }

    fn commit(&self, placement: Placement, epoch: u64) -> CommitOutcome {
        let mut shared = self.lock();
        if shared.game_epoch != epoch {
            info!(%placement, epoch, current = shared.game_epoch, "Move superseded by reset");
            return CommitOutcome::Superseded;
        }

        let before = shared.state;
        let after = before.committed(placement);
        #[cfg(debug_assertions)]
        {
            let checked = CommitContract::post(&before, &after, placement);
            if let Err(violations) = &checked {
                tracing::error!(?violations, "Commit broke game invariants");
            }
            debug_assert!(checked.is_ok(), "commit broke game invariants");
        }
        shared.state = after;

        let phase = *after.phase();
        match phase {
            Phase::Won(mark) => info!(%mark, "Game won"),
            Phase::Draw => info!("Game drawn"),
            _ => debug!(turn = %after.turn(), "Move committed"),
        }
        CommitOutcome::Committed { placement, phase }
    }

    fn abandon(&self, placement: Placement, epoch: u64) {
        let mut shared = self.lock();
        if shared.game_epoch == epoch {
            shared.state.abandon_placement(placement);
        }
    }
}

/// An accepted click whose mark has not been drawn and committed yet.
///
/// Dropping it unfinished releases the animation lock without writing the
/// board.
#[derive(Debug)]
#[must_use = "the move only commits once `finish` is awaited"]
pub struct PendingMove {
    machine: GameStateMachine,
    placement: Placement,
    cell_size: f64,
    epoch: u64,
    surface: SurfaceHandle,
    finished: bool,
}

impl PendingMove {
    /// The mark and position being drawn.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Draws the mark, then commits it.
    #[instrument(skip(self), fields(placement = %self.placement))]
    pub async fn finish(mut self) -> CommitOutcome {
        self.machine
            .marks
            .draw_mark(
                &self.surface,
                self.placement.mark,
                self.placement.position,
                self.cell_size,
            )
            .await;
        self.finished = true;
        self.machine.commit(self.placement, self.epoch)
    }
}

impl Drop for PendingMove {
    fn drop(&mut self) {
        if !self.finished {
            warn!(placement = %self.placement, "Move dropped before its animation finished");
            self.machine.abandon(self.placement, self.epoch);
        }
    }
}
