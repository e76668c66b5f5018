//! Player mark animations.
//!
//! X is two diagonal strokes drawn one after the other with a short pause
//! before the second. O is a single dash-reveal circle.

use super::{
    MARK_COLOR, MARK_PADDING, MARK_WIDTH, O_REVEAL_DURATION, X_STROKE_DURATION, X_STROKE_PAUSE,
};
use crate::animation::{
    AnimationEngine, AnimationJob, DashRevealArc, InterpolatedStroke, Point, StrokeStyle,
    SurfaceHandle,
};
use crate::games::tictactoe::{Mark, Position};
use tracing::{debug, instrument};

/// Turns a mark placement into an animation.
#[derive(Debug, Clone, Copy)]
pub struct MarkRenderer {
    engine: AnimationEngine,
}

impl MarkRenderer {
    /// Creates a mark renderer driven by `engine`.
    pub fn new(engine: AnimationEngine) -> Self {
        Self { engine }
    }

    /// Animation jobs that draw `mark` in the cell at `position`.
    pub fn jobs(mark: Mark, position: Position, cell_size: f64) -> Vec<AnimationJob> {
        let style = StrokeStyle::new(MARK_COLOR, MARK_WIDTH);
        let origin = position.origin(cell_size);
        let near = MARK_PADDING;
        let far = cell_size - MARK_PADDING;
        let at = |dx: f64, dy: f64| Point::new(origin.x + dx, origin.y + dy);

        match mark {
            Mark::X => vec![
                AnimationJob::Line {
                    stroke: InterpolatedStroke::new(at(near, near), at(far, far), style),
                    duration: X_STROKE_DURATION,
                },
                AnimationJob::Pause(X_STROKE_PAUSE),
                AnimationJob::Line {
                    stroke: InterpolatedStroke::new(at(far, near), at(near, far), style),
                    duration: X_STROKE_DURATION,
                },
            ],
            Mark::O => {
                let half = cell_size / 2.0;
                let radius = (half - MARK_PADDING).max(0.0);
                vec![AnimationJob::Arc {
                    arc: DashRevealArc::new(at(half, half), radius, style),
                    duration: O_REVEAL_DURATION,
                }]
            }
        }
    }

    /// Animates `mark` at `position`; resolves once every stroke is complete.
    #[instrument(skip(self, surface))]
    pub async fn draw_mark(
        &self,
        surface: &SurfaceHandle,
        mark: Mark,
        position: Position,
        cell_size: f64,
    ) {
        let jobs = Self::jobs(mark, position, cell_size);
        self.engine.run_sequence(surface, &jobs).await;
        debug!(%mark, %position, "Mark drawn");
    }
}
