//! Board artwork: the grid and the two player marks.
//!
//! Renderers only build animation jobs and run them through the engine;
//! they never look at game state.

mod grid;
mod marks;

pub use grid::GridRenderer;
pub use marks::MarkRenderer;

use crate::animation::{Rgb, Size};
use std::time::Duration;

/// Side length of the square drawing surface, in pixels.
pub const SURFACE_SIDE: f64 = 300.0;

/// Dimensions of the drawing surface.
pub const SURFACE_SIZE: Size = Size {
    width: SURFACE_SIDE,
    height: SURFACE_SIDE,
};

/// Inset between a cell's edge and its mark.
pub const MARK_PADDING: f64 = 20.0;

/// Stroke width shared by both marks.
pub const MARK_WIDTH: f64 = 5.0;

/// Colour shared by both marks.
pub const MARK_COLOR: Rgb = Rgb(0xF2, 0x6B, 0x5B);

/// Stroke width of grid lines.
pub const GRID_WIDTH: f64 = 2.0;

/// Colour of grid lines.
pub const GRID_COLOR: Rgb = Rgb(0xB0, 0xB8, 0xC4);

/// Time to draw one grid line.
pub const GRID_LINE_DURATION: Duration = Duration::from_millis(300);

/// Time to draw each stroke of an X.
pub const X_STROKE_DURATION: Duration = Duration::from_millis(180);

/// Pause before the second stroke of an X starts.
pub const X_STROKE_PAUSE: Duration = Duration::from_millis(40);

/// Time to reveal an O.
pub const O_REVEAL_DURATION: Duration = Duration::from_millis(360);
