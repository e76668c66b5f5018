//! Strictly Sketch - animated tic-tac-toe
//!
//! Two players alternate placing X and O marks. Every mark is drawn as a
//! short timed animation, and the game state machine refuses input while the
//! board is being prepared or a mark is still drawing.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the animation-gated [`GameStateMachine`]
//! - **Animation**: frame-ticked [`AnimationEngine`] over a [`Surface`]
//! - **Render**: the grid and mark artwork
//! - **TUI**: terminal front end (braille canvas, mouse input)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use strictly_sketch::{
//!     AnimationEngine, GameStateMachine, Point, RecordingSurface, SURFACE_SIZE, SurfaceHandle,
//! };
//!
//! # async fn example() {
//! let machine = GameStateMachine::new(AnimationEngine::default());
//! let surface = SurfaceHandle::new(Arc::new(Mutex::new(RecordingSurface::new(SURFACE_SIZE))));
//! machine.on_ready(surface).await.expect("no move in flight");
//!
//! let outcome = machine.on_click(Point::new(150.0, 150.0), SURFACE_SIZE).await;
//! println!("{:?} - {}", outcome, machine.status_text());
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod animation;
mod cli;
mod config;
pub mod games;
pub mod render;
pub mod tui;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Animation
pub use animation::{
    AnimationEngine, AnimationJob, DrawCommand, Point, Raster, RecordingSurface, Rgb, Size,
    Surface, SurfaceHandle,
};

// Crate-level exports - Rendering
pub use render::{GridRenderer, MarkRenderer, SURFACE_SIZE};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CommitOutcome, GameState, GameStateMachine, Lock, Mark, PendingMove, Phase, Placement,
    Position, Rejection, SETTLE_DELAY, Square, Turn,
};
