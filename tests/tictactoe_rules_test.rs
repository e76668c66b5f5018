//! Tests for win and draw detection and click validation.

use strictly_sketch::games::tictactoe::rules::{check_winner, is_draw, is_full};
use strictly_sketch::{
    Board, GameState, Lock, Mark, Phase, Placement, Point, Position, Rejection, SURFACE_SIZE,
    Turn,
};

fn board(marks: &[(Position, Mark)]) -> Board {
    marks
        .iter()
        .fold(Board::new(), |board, (pos, mark)| board.with_mark(*pos, *mark))
}

fn center_of(position: Position) -> Point {
    Point::new(
        position.col() as f64 * 100.0 + 50.0,
        position.row() as f64 * 100.0 + 50.0,
    )
}

#[test]
fn test_every_line_wins() {
    let lines = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for line in lines {
        let marks: Vec<_> = line
            .iter()
            .filter_map(|&i| Position::from_index(i))
            .map(|pos| (pos, Mark::O))
            .collect();
        assert_eq!(check_winner(&board(&marks)), Some(Mark::O), "line {line:?}");
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    let b = board(&[
        (Position::TopLeft, Mark::X),
        (Position::TopCenter, Mark::O),
        (Position::TopRight, Mark::X),
    ]);
    assert_eq!(check_winner(&b), None);
}

#[test]
fn test_full_board_without_line_is_draw() {
    use Position::*;
    let b = board(&[
        (TopLeft, Mark::X),
        (TopCenter, Mark::O),
        (TopRight, Mark::X),
        (MiddleLeft, Mark::X),
        (Center, Mark::O),
        (MiddleRight, Mark::O),
        (BottomLeft, Mark::O),
        (BottomCenter, Mark::X),
        (BottomRight, Mark::X),
    ]);
    assert!(is_full(&b));
    assert_eq!(check_winner(&b), None);
    assert!(is_draw(&b));
}

#[test]
fn test_win_on_last_square_is_not_draw() {
    use Position::*;
    let b = board(&[
        (TopLeft, Mark::X),
        (TopCenter, Mark::O),
        (TopRight, Mark::X),
        (MiddleLeft, Mark::O),
        (Center, Mark::X),
        (MiddleRight, Mark::O),
        (BottomLeft, Mark::O),
        (BottomCenter, Mark::X),
        (BottomRight, Mark::X),
    ]);
    assert_eq!(check_winner(&b), Some(Mark::X));
    assert!(!is_draw(&b));
}

#[test]
fn test_commit_detects_win() {
    let before = GameState::from_parts(
        board(&[
            (Position::TopLeft, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::TopCenter, Mark::X),
            (Position::Center, Mark::O),
        ]),
        Turn::new(5),
        Phase::Animating {
            position: Position::TopRight,
            mark: Mark::X,
        },
    );
    let after = before.committed(Placement::new(Mark::X, Position::TopRight));
    assert_eq!(*after.phase(), Phase::Won(Mark::X));
    assert_eq!(*after.turn(), Turn::new(6));
    assert_eq!(after.status_text(), "Winner: Player X");
}

#[test]
fn test_validate_click_order() {
    let occupied = board(&[(Position::Center, Mark::X)]);

    // Locks are checked before the board
    let animating = GameState::from_parts(
        occupied,
        Turn::new(2),
        Phase::Animating {
            position: Position::TopLeft,
            mark: Mark::O,
        },
    );
    assert_eq!(
        animating.validate_click(center_of(Position::Center), SURFACE_SIZE),
        Err(Rejection::Locked(Lock::Animating))
    );

    let ready = GameState::from_parts(occupied, Turn::new(2), Phase::AwaitingInput);
    assert_eq!(
        ready.validate_click(center_of(Position::Center), SURFACE_SIZE),
        Err(Rejection::CellOccupied(Position::Center))
    );
    assert!(matches!(
        ready.validate_click(Point::new(320.0, 10.0), SURFACE_SIZE),
        Err(Rejection::OutsideBoard { .. })
    ));
    assert_eq!(
        ready.validate_click(center_of(Position::BottomLeft), SURFACE_SIZE),
        Ok(Position::BottomLeft)
    );
}

#[test]
fn test_finished_game_rejects_clicks() {
    let won = GameState::from_parts(Board::new(), Turn::new(6), Phase::Won(Mark::X));
    assert_eq!(
        won.validate_click(center_of(Position::Center), SURFACE_SIZE),
        Err(Rejection::GameOver)
    );
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        Rejection::Locked(Lock::Initializing).to_string(),
        "Input ignored while the board is initializing"
    );
    assert_eq!(
        Rejection::CellOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
}
