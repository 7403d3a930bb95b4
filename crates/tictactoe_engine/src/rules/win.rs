//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};

/// Three board indices forming a row, column or diagonal.
pub type WinLine = [usize; 3];

/// The 8 winning lines, in scan order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line in scan order, if any.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    let squares = board.squares();
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.squares()[a].player())
}

/// Checks whether `player` holds any complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.squares()[i] == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X.O.OXO..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut squares = [Square::Empty; 9];
            for i in line {
                squares[i] = Square::Occupied(Player::O);
            }
            let board = Board::from_squares(squares);
            assert_eq!(winning_line(&board), Some(line));
            assert!(has_line(&board, Player::O));
            assert!(!has_line(&board, Player::X));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
