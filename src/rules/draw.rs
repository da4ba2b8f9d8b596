//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new()
            .apply(Move::new(Player::X, Position::Center))
            .expect("legal move");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full board, no line
        let mut board = Board::new();
        let moves = [
            (Player::X, Position::TopLeft),
            (Player::O, Position::TopCenter),
            (Player::X, Position::TopRight),
            (Player::O, Position::MiddleLeft),
            (Player::X, Position::Center),
            (Player::O, Position::BottomLeft),
            (Player::X, Position::MiddleRight),
            (Player::O, Position::BottomRight),
            (Player::X, Position::BottomCenter),
        ];
        for (player, pos) in moves {
            board = board.apply(Move::new(player, pos)).expect("legal move");
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        let moves = [
            (Player::X, Position::TopLeft),
            (Player::O, Position::MiddleLeft),
            (Player::X, Position::TopCenter),
            (Player::O, Position::Center),
            (Player::X, Position::TopRight), // X wins top row
        ];
        for (player, pos) in moves {
            board = board.apply(Move::new(player, pos)).expect("legal move");
        }

        assert!(!is_draw(&board));
    }
}
