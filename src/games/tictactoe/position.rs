//! Named cells of the tic-tac-toe board.

use crate::animation::{Point, Size};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
///
/// Index `i` is row `i / 3`, column `i % 3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates position from a row and column, both 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Maps a pointer location on a surface of `size` to the cell under it.
    ///
    /// Each cell spans a third of the surface in each direction. Points
    /// outside the surface (or on a degenerate surface) map to `None`.
    #[instrument(level = "trace")]
    pub fn at_point(point: Point, size: Size) -> Option<Self> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return None;
        }
        if !(0.0..size.width).contains(&point.x) || !(0.0..size.height).contains(&point.y) {
            return None;
        }
        let col = (point.x / (size.width / 3.0)).floor() as usize;
        let row = (point.y / (size.height / 3.0)).floor() as usize;
        Self::from_row_col(row, col)
    }

    /// Top-left corner of this cell on a surface with square cells of `cell_size`.
    pub fn origin(self, cell_size: f64) -> Point {
        Point::new(self.col() as f64 * cell_size, self.row() as f64 * cell_size)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_at_point() {
        let size = Size::new(300.0, 300.0);
        assert_eq!(
            Position::at_point(Point::new(50.0, 50.0), size),
            Some(Position::TopLeft)
        );
        assert_eq!(
            Position::at_point(Point::new(150.0, 150.0), size),
            Some(Position::Center)
        );
        assert_eq!(
            Position::at_point(Point::new(299.9, 200.0), size),
            Some(Position::BottomRight)
        );
        assert_eq!(
            Position::at_point(Point::new(100.0, 0.0), size),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_at_point_outside_surface() {
        let size = Size::new(300.0, 300.0);
        assert_eq!(Position::at_point(Point::new(-1.0, 10.0), size), None);
        assert_eq!(Position::at_point(Point::new(10.0, 300.0), size), None);
        assert_eq!(Position::at_point(Point::new(10.0, 10.0), Size::new(0.0, 0.0)), None);
    }
}
