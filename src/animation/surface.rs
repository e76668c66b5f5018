//! Drawing surface contract.
//!
//! All drawing goes through the [`Surface`] trait. Animations only ever see a
//! [`SurfaceHandle`]; the game state machine hands it out but never draws.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// A location on the surface, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct Point {
    /// Horizontal offset, growing rightwards.
    pub x: f64,
    /// Vertical offset, growing downwards.
    pub y: f64,
}

impl Point {
    /// Linear interpolation from `self` towards `to`; `t = 0` is `self`, `t = 1` is `to`.
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Pixel dimensions of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// 24-bit stroke colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// How a path is stroked.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct StrokeStyle {
    /// Stroke colour.
    pub color: Rgb,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Dash pattern of equal dash and gap `length`, shifted by `offset`.
///
/// A point at path distance `s` is drawn when `(s + offset) mod 2*length`
/// falls inside the dash. With `length` equal to the path length, the
/// visible stroke is the prefix `[0, length - offset)`.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Dash {
    /// Length of each dash and each gap.
    pub length: f64,
    /// Distance the pattern is shifted along the path.
    pub offset: f64,
}

impl Dash {
    /// Whether the point at path distance `s` is covered by a dash.
    pub fn covers(&self, s: f64) -> bool {
        if self.length <= 0.0 {
            return false;
        }
        (s + self.offset).rem_euclid(2.0 * self.length) < self.length
    }
}

/// A 2D vector drawing surface.
pub trait Surface: Send {
    /// Pixel dimensions of the surface.
    fn size(&self) -> Size;

    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Strokes a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle);

    /// Strokes a full circle, optionally dashed.
    fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle, dash: Option<Dash>);
}

/// Shared, lockable handle to a surface.
///
/// Cloning the handle shares the same surface. Each draw call holds the lock
/// only for its own duration, never across an await point.
#[derive(Clone)]
pub struct SurfaceHandle {
    inner: Arc<Mutex<dyn Surface>>,
}

impl SurfaceHandle {
    /// Wraps a shared surface. The caller may keep its own typed `Arc` to read it back.
    pub fn new<S: Surface + 'static>(surface: Arc<Mutex<S>>) -> Self {
        Self { inner: surface }
    }

    /// Runs `f` with exclusive access to the surface.
    pub fn draw<R>(&self, f: impl FnOnce(&mut dyn Surface) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// Pixel dimensions of the underlying surface.
    pub fn size(&self) -> Size {
        self.draw(|surface| surface.size())
    }
}

impl std::fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(20.0, 30.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_dash_prefix_grows_as_offset_shrinks() {
        let length = 100.0;
        let hidden = Dash::new(length, length);
        assert!(!hidden.covers(0.0));
        assert!(!hidden.covers(99.0));

        let half = Dash::new(length, length * 0.5);
        assert!(half.covers(0.0));
        assert!(half.covers(49.0));
        assert!(!half.covers(51.0));

        let full = Dash::new(length, 0.0);
        assert!(full.covers(0.0));
        assert!(full.covers(99.9));
    }
}
