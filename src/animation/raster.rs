//! Pixel surface.
//!
//! Strokes are rasterized by stamping discs of the stroke width along the
//! path. Drawing the same stroke twice is idempotent, so the per-frame
//! redraws of an animation simply overpaint earlier frames.

use super::surface::{Dash, Point, Rgb, Size, StrokeStyle, Surface};
use std::f64::consts::PI;

/// Distance between stamps along a path, in pixels.
const STAMP_SPACING: f64 = 0.5;

/// A fixed-size grid of optionally coloured pixels.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Raster {
    /// Creates a blank raster covering `size` (rounded up to whole pixels).
    pub fn new(size: Size) -> Self {
        let width = size.width.max(0.0).ceil() as usize;
        let height = size.height.max(0.0).ceil() as usize;
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    /// Colour of the pixel at `(x, y)`, if it has been painted.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }

    /// Painted pixels with their colours, row by row.
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.pixels.iter().enumerate().filter_map(move |(i, px)| {
            px.map(|color| (i % self.width, i / self.width, color))
        })
    }

    /// Number of painted pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|px| px.is_some()).count()
    }

    fn stamp(&mut self, center: Point, style: StrokeStyle) {
        let radius = (style.width / 2.0).max(0.5);
        let min_x = (center.x - radius).floor().max(0.0) as usize;
        let min_y = (center.y - radius).floor().max(0.0) as usize;
        let max_x = ((center.x + radius).ceil().max(0.0) as usize).min(self.width);
        let max_y = ((center.y + radius).ceil().max(0.0) as usize).min(self.height);
        for y in min_y..max_y {
            for x in min_x..max_x {
                let pixel_center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if pixel_center.distance(center) <= radius {
                    self.pixels[y * self.width + x] = Some(style.color);
                }
            }
        }
    }
}

impl Surface for Raster {
    fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    fn clear(&mut self) {
        self.pixels.fill(None);
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        let steps = (from.distance(to) / STAMP_SPACING).ceil().max(1.0) as usize;
        for i in 0..=steps {
            self.stamp(from.lerp(to, i as f64 / steps as f64), style);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle, dash: Option<Dash>) {
        let circumference = 2.0 * PI * radius;
        let steps = (circumference / STAMP_SPACING).ceil().max(1.0) as usize;
        for i in 0..steps {
            let s = circumference * i as f64 / steps as f64;
            if dash.is_some_and(|dash| !dash.covers(s)) {
                continue;
            }
            // Path starts at angle 0 and runs clockwise on screen (y grows downwards).
            let angle = s / radius.max(f64::EPSILON);
            let point = Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
            self.stamp(point, style);
        }
    }
}
