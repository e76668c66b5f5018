//! Frame-ticked animation engine.
//!
//! An animation samples elapsed time on every frame tick, converts it into a
//! progress value in `[0, 1]` and hands that to a [`DrawStep`]. The returned
//! future resolves exactly once, right after the frame drawn at progress 1.
//! Jobs in a sequence run strictly one after another.

use super::strokes::{DashRevealArc, DrawStep, InterpolatedStroke};
use super::surface::SurfaceHandle;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval, sleep};
use tracing::{debug, instrument, trace};

/// Progress of an animation of length `duration` after `elapsed`, clamped to 1.
///
/// A zero-length animation is complete immediately.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// One unit of work in an animation sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationJob {
    /// Grow a straight segment.
    Line {
        /// The segment to draw.
        stroke: InterpolatedStroke,
        /// Time from first to last frame.
        duration: Duration,
    },
    /// Reveal a circle through its dash offset.
    Arc {
        /// The circle to draw.
        arc: DashRevealArc,
        /// Time from first to last frame.
        duration: Duration,
    },
    /// Wait without drawing.
    Pause(Duration),
}

impl AnimationJob {
    /// Nominal run time of this job.
    pub fn duration(&self) -> Duration {
        match self {
            AnimationJob::Line { duration, .. } | AnimationJob::Arc { duration, .. } => *duration,
            AnimationJob::Pause(duration) => *duration,
        }
    }
}

/// Drives draw steps on a surface, one frame tick at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEngine {
    frame: Duration,
}

impl AnimationEngine {
    /// Frame rate used when none is configured.
    pub const DEFAULT_FRAME_RATE: u32 = 60;

    /// Creates an engine ticking every `frame` (at least one millisecond).
    pub fn new(frame: Duration) -> Self {
        Self {
            frame: frame.max(Duration::from_millis(1)),
        }
    }

    /// Creates an engine ticking `hz` times per second.
    pub fn with_frame_rate(hz: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(hz.max(1))))
    }

    /// Time between frame ticks.
    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Runs `step` from progress 0 to 1 over `duration`.
    ///
    /// Returns the number of frames drawn. The last frame is always drawn at
    /// progress 1 and is followed by [`DrawStep::finish`].
    #[instrument(skip(self, surface, step), fields(duration_ms = duration.as_millis() as u64))]
    pub async fn animate(
        &self,
        surface: &SurfaceHandle,
        duration: Duration,
        step: &dyn DrawStep,
    ) -> u32 {
        let start = Instant::now();
        let mut ticker = interval(self.frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = 0;
        loop {
            ticker.tick().await;
            let progress = progress(start.elapsed(), duration);
            surface.draw(|s| step.draw(s, progress));
            frames += 1;
            trace!(frames, progress, "Frame drawn");

            if progress >= 1.0 {
                surface.draw(|s| step.finish(s));
                debug!(frames, "Animation complete");
                return frames;
            }
        }
    }

    /// Runs a single job to completion.
    #[instrument(skip(self, surface))]
    pub async fn run(&self, surface: &SurfaceHandle, job: &AnimationJob) {
        match job {
            AnimationJob::Line { stroke, duration } => {
                self.animate(surface, *duration, stroke).await;
            }
            AnimationJob::Arc { arc, duration } => {
                self.animate(surface, *duration, arc).await;
            }
            AnimationJob::Pause(duration) => sleep(*duration).await,
        }
    }

    /// Runs `jobs` strictly in order; each starts only after the previous one resolved.
    #[instrument(skip(self, surface, jobs), fields(jobs = jobs.len()))]
    pub async fn run_sequence(&self, surface: &SurfaceHandle, jobs: &[AnimationJob]) {
        for (index, job) in jobs.iter().enumerate() {
            debug!(index, "Starting job");
            self.run(surface, job).await;
        }
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::with_frame_rate(Self::DEFAULT_FRAME_RATE)
    }
}
