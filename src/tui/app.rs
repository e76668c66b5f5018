//! Application state and logic.

use super::input::{Command, cell_to_surface};
use crate::animation::{AnimationEngine, Raster, Rgb, SurfaceHandle};
use crate::games::tictactoe::GameStateMachine;
use crate::render::SURFACE_SIZE;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, instrument};

/// Painted pixels of one colour, in canvas coordinates (y up).
pub type Layer = (Rgb, Vec<(f64, f64)>);

/// Main application state.
#[derive(Debug)]
pub struct App {
    machine: GameStateMachine,
    raster: Arc<Mutex<Raster>>,
    surface: SurfaceHandle,
    canvas_area: Rect,
    should_quit: bool,
    tasks: JoinSet<()>,
}

impl App {
    /// Creates the application with a blank surface. Nothing is drawn until
    /// [`start`](Self::start).
    pub fn new(engine: AnimationEngine) -> Self {
        let raster = Arc::new(Mutex::new(Raster::new(SURFACE_SIZE)));
        let surface = SurfaceHandle::new(raster.clone());
        Self {
            machine: GameStateMachine::new(engine),
            raster,
            surface,
            canvas_area: Rect::default(),
            should_quit: false,
            tasks: JoinSet::new(),
        }
    }

    /// The game being played.
    pub fn machine(&self) -> &GameStateMachine {
        &self.machine
    }

    /// Attaches the surface and draws the opening board in the background.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        let machine = self.machine.clone();
        let surface = self.surface.clone();
        self.tasks.spawn(async move {
            if let Err(rejection) = machine.on_ready(surface).await {
                debug!(%rejection, "Ready ignored");
            }
        });
    }

    /// Collects background tasks that have finished, logging any that
    /// panicked. Returns how many were collected.
    pub fn reap_finished(&mut self) -> usize {
        let mut reaped = 0;
        while let Some(result) = self.tasks.try_join_next() {
            log_task_result(result);
            reaped += 1;
        }
        reaped
    }

    /// Number of background tasks still running or not yet collected.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Current status line.
    pub fn status_text(&self) -> String {
        self.machine.status_text()
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the surface was last drawn on screen.
    pub fn set_canvas_area(&mut self, area: Rect) {
        self.canvas_area = area;
    }

    /// Snapshot of the surface grouped by colour, with y flipped for the
    /// canvas and each pixel at its centre.
    pub fn layers(&self) -> Vec<Layer> {
        let raster = self.raster.lock().unwrap_or_else(PoisonError::into_inner);
        let mut layers: HashMap<Rgb, Vec<(f64, f64)>> = HashMap::new();
        for (x, y, color) in raster.lit() {
            layers
                .entry(color)
                .or_default()
                .push((x as f64 + 0.5, SURFACE_SIZE.height - (y as f64 + 0.5)));
        }
        layers.into_iter().collect()
    }

    /// Applies a player command.
    ///
    /// Clicks and resets run as background tasks collected by
    /// [`reap_finished`](Self::reap_finished). Returns whether a task was
    /// started; rejected clicks are logged and dropped.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
                false
            }
            Command::Reset => {
                let machine = self.machine.clone();
                self.tasks.spawn(async move {
                    if let Err(rejection) = machine.on_reset().await {
                        debug!(%rejection, "Reset ignored");
                    }
                });
                true
            }
            Command::Click { column, row } => {
                let point = cell_to_surface(column, row, self.canvas_area, SURFACE_SIZE);
                match self.machine.begin_move(point, SURFACE_SIZE) {
                    Ok(pending) => {
                        self.tasks.spawn(async move {
                            let outcome = pending.finish().await;
                            debug!(?outcome, "Move finished");
                        });
                        true
                    }
                    Err(rejection) => {
                        debug!(%rejection, "Click rejected");
                        false
                    }
                }
            }
        }
    }
}

fn log_task_result(result: Result<(), JoinError>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_panic() => error!(error = %e, "Background task panicked"),
        Err(e) => debug!(error = %e, "Background task cancelled"),
    }
}
