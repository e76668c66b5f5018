//! Tests for tic-tac-toe positions and click mapping.

use strictly_sketch::{Point, Position, SURFACE_SIZE, Size};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_every_cell_reachable_by_click() {
    for row in 0..3 {
        for col in 0..3 {
            let point = Point::new(col as f64 * 100.0 + 1.0, row as f64 * 100.0 + 99.0);
            let expected = Position::from_row_col(row, col);
            assert_eq!(Position::at_point(point, SURFACE_SIZE), expected);
        }
    }
}

#[test]
fn test_cell_boundaries_belong_to_next_cell() {
    assert_eq!(
        Position::at_point(Point::new(100.0, 200.0), SURFACE_SIZE),
        Some(Position::BottomCenter)
    );
    assert_eq!(
        Position::at_point(Point::new(0.0, 0.0), SURFACE_SIZE),
        Some(Position::TopLeft)
    );
}

#[test]
fn test_non_square_surface() {
    let size = Size::new(600.0, 300.0);
    assert_eq!(
        Position::at_point(Point::new(450.0, 150.0), size),
        Some(Position::Center)
    );
    assert_eq!(
        Position::at_point(Point::new(450.0, 250.0), size),
        Some(Position::BottomCenter)
    );
}

#[test]
fn test_cell_origin() {
    assert_eq!(Position::TopLeft.origin(100.0), Point::new(0.0, 0.0));
    assert_eq!(Position::MiddleRight.origin(100.0), Point::new(200.0, 100.0));
}
