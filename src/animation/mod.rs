//! Time-driven drawing on a 2D vector surface.
//!
//! - [`surface`]: the [`Surface`] drawing contract and its shared handle
//! - [`strokes`]: the two draw-step strategies (interpolated stroke, dash-reveal arc)
//! - [`engine`]: the frame-ticked [`AnimationEngine`] and its job queue
//! - [`raster`]: a pixel surface used by the terminal front end
//! - [`recording`]: a surface that records commands, for tests and diagnostics

pub mod engine;
pub mod raster;
pub mod recording;
pub mod strokes;
pub mod surface;

pub use engine::{AnimationEngine, AnimationJob, progress};
pub use raster::Raster;
pub use recording::{DrawCommand, RecordingSurface};
pub use strokes::{DashRevealArc, DrawStep, InterpolatedStroke};
pub use surface::{Dash, Point, Rgb, Size, StrokeStyle, Surface, SurfaceHandle};
