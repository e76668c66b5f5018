//! Draw-step strategies driven by the animation engine.

use super::surface::{Dash, Point, StrokeStyle, Surface};
use derive_new::new;
use std::f64::consts::PI;

/// One frame of an animation at a given progress in `[0, 1]`.
pub trait DrawStep: Send + Sync {
    /// Draws the state of the animation at `progress`.
    fn draw(&self, surface: &mut dyn Surface, progress: f64);

    /// Called once after the final frame has been drawn.
    fn finish(&self, _surface: &mut dyn Surface) {}
}

/// Straight segment growing from `from` towards `to`.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct InterpolatedStroke {
    /// Fixed start of the segment.
    pub from: Point,
    /// End reached at progress 1.
    pub to: Point,
    /// Stroke style.
    pub style: StrokeStyle,
}

impl DrawStep for InterpolatedStroke {
    fn draw(&self, surface: &mut dyn Surface, progress: f64) {
        surface.stroke_line(self.from, self.from.lerp(self.to, progress), self.style);
    }
}

/// Circle revealed by shrinking the dash offset of a single full-length dash.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct DashRevealArc {
    /// Circle centre.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Stroke style.
    pub style: StrokeStyle,
}

impl DashRevealArc {
    /// Length of the full circle.
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Dash pattern for `progress`: one circumference-long dash offset by
    /// `circumference * (1 - progress)`.
    pub fn dash_at(&self, progress: f64) -> Dash {
        let circumference = self.circumference();
        Dash::new(circumference, circumference * (1.0 - progress))
    }
}

impl DrawStep for DashRevealArc {
    fn draw(&self, surface: &mut dyn Surface, progress: f64) {
        surface.stroke_circle(self.center, self.radius, self.style, Some(self.dash_at(progress)));
    }

    fn finish(&self, surface: &mut dyn Surface) {
        // Back to a solid, fully drawn circle.
        surface.stroke_circle(self.center, self.radius, self.style, None);
    }
}
