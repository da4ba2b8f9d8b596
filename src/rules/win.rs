//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Check order is irrelevant on boards reachable by
/// legal play, where at most one player can hold a completed line.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Checks whether the given player has a completed line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&pos| board.get(pos) == Square::Occupied(player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    fn replayed(moves: &[(Player, Position)]) -> Board {
        let mut board = Board::new();
        for &(player, pos) in moves {
            board = board.apply(Move::new(player, pos)).expect("legal move");
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = replayed(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::MiddleLeft),
            (Player::X, Position::TopCenter),
            (Player::O, Position::Center),
            (Player::X, Position::TopRight),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_column() {
        let board = replayed(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::TopCenter),
            (Player::X, Position::BottomRight),
            (Player::O, Position::Center),
            (Player::X, Position::TopRight),
            (Player::O, Position::BottomCenter), // O wins middle column
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = replayed(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::TopCenter),
            (Player::X, Position::Center),
            (Player::O, Position::TopRight),
            (Player::X, Position::BottomRight), // X wins main diagonal
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = replayed(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::X, Position::TopCenter),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
