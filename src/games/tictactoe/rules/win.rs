//! Line detection.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

use Position::{
    BottomCenter as BC, BottomLeft as BL, BottomRight as BR, Center as C, MiddleLeft as ML,
    MiddleRight as MR, TopCenter as TC, TopLeft as TL, TopRight as TR,
};

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [TL, TC, TR],
    [ML, C, MR],
    [BL, BC, BR],
    [TL, ML, BL],
    [TC, C, BC],
    [TR, MR, BR],
    [TL, C, BR],
    [TR, C, BL],
];

/// The mark holding all three squares of some line, if any.
#[instrument(level = "debug", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let [first, rest @ ..] = line.map(|pos| board.get(pos));
        match first {
            Square::Occupied(mark) if rest.iter().all(|sq| *sq == first) => Some(mark),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_each_line_wins_for_either_mark() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = line
                    .iter()
                    .fold(Board::new(), |board, pos| board.with_mark(*pos, mark));
                assert_eq!(check_winner(&board), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::new().with_mark(TL, Mark::X).with_mark(TC, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_full_board_has_no_winner() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        let squares = [X, O, X, X, O, O, O, X, X].map(Square::Occupied);
        assert_eq!(check_winner(&Board::from_squares(squares)), None);
    }
}
