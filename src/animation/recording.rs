//! Surface that records drawing commands instead of drawing them.

use super::surface::{Dash, Point, Size, StrokeStyle, Surface};

/// A drawing command issued to a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Surface cleared.
    Clear,
    /// Straight segment stroked.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke style.
        style: StrokeStyle,
    },
    /// Circle stroked.
    Circle {
        /// Circle centre.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Stroke style.
        style: StrokeStyle,
        /// Dash pattern, `None` for a solid stroke.
        dash: Option<Dash>,
    },
}

/// Records every command it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording of a surface with the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Commands received so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands.push(DrawCommand::Line { from, to, style });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle, dash: Option<Dash>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style,
            dash,
        });
    }
}
