//! Grid line animation.

use super::{GRID_COLOR, GRID_LINE_DURATION, GRID_WIDTH};
use crate::animation::{
    AnimationEngine, AnimationJob, InterpolatedStroke, Point, Size, StrokeStyle, SurfaceHandle,
};
use tracing::{info, instrument};

/// Draws the four lines separating the nine cells.
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    engine: AnimationEngine,
}

impl GridRenderer {
    /// Creates a grid renderer driven by `engine`.
    pub fn new(engine: AnimationEngine) -> Self {
        Self { engine }
    }

    /// Grid jobs for a surface of `size`: two vertical lines, then two horizontal.
    pub fn jobs(size: Size) -> [AnimationJob; 4] {
        let style = StrokeStyle::new(GRID_COLOR, GRID_WIDTH);
        let third_w = size.width / 3.0;
        let third_h = size.height / 3.0;
        let line = |from: Point, to: Point| AnimationJob::Line {
            stroke: InterpolatedStroke::new(from, to, style),
            duration: GRID_LINE_DURATION,
        };

        [
            line(Point::new(third_w, 0.0), Point::new(third_w, size.height)),
            line(Point::new(2.0 * third_w, 0.0), Point::new(2.0 * third_w, size.height)),
            line(Point::new(0.0, third_h), Point::new(size.width, third_h)),
            line(Point::new(0.0, 2.0 * third_h), Point::new(size.width, 2.0 * third_h)),
        ]
    }

    /// Animates the grid; resolves after the last line is complete.
    #[instrument(skip(self, surface))]
    pub async fn draw_grid(&self, surface: &SurfaceHandle) {
        let jobs = Self::jobs(surface.size());
        self.engine.run_sequence(surface, &jobs).await;
        info!("Grid drawn");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_vertical_then_horizontal() {
        let jobs = GridRenderer::jobs(Size::new(300.0, 300.0));
        let segments: Vec<(Point, Point)> = jobs
            .iter()
            .map(|job| match job {
                AnimationJob::Line { stroke, duration } => {
                    assert_eq!(*duration, GRID_LINE_DURATION);
                    (stroke.from, stroke.to)
                }
                other => panic!("unexpected job {:?}", other),
            })
            .collect();

        assert_eq!(
            segments,
            vec![
                (Point::new(100.0, 0.0), Point::new(100.0, 300.0)),
                (Point::new(200.0, 0.0), Point::new(200.0, 300.0)),
                (Point::new(0.0, 100.0), Point::new(300.0, 100.0)),
                (Point::new(0.0, 200.0), Point::new(300.0, 200.0)),
            ]
        );
    }
}
