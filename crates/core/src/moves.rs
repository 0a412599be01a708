//! Move application and game-over detection
//!
//! All four directions reduce to the leftward line primitive wrapped in
//! transpose and/or row-reversal:
//!
//! | Direction | Pipeline                                                  |
//! |-----------|-----------------------------------------------------------|
//! | Left      | reduce rows                                               |
//! | Right     | reverse rows, reduce, reverse rows                        |
//! | Up        | transpose, reduce rows, transpose                         |
//! | Down      | transpose, reverse rows, reduce, reverse rows, transpose  |

use crate::board::Board;
use crate::line::reduce_left;
use crate::types::Direction;

/// Result of applying a move to a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after the move
    pub board: Board,
    /// True iff the resulting board differs from the input in any cell
    pub changed: bool,
    /// Sum of merged values produced by this move
    pub score: u32,
    /// True when some merge produced the win value
    pub reached_win: bool,
}

/// Apply one directional move, returning a fresh board.
///
/// `changed` comes from a full structural comparison of the grids, never a
/// short-circuit heuristic. It is the sole signal for "a tile may spawn" and
/// "the move counts as valid".
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let (reduced, score, reached_win) = match direction {
        Direction::Left => reduce_rows(board),
        Direction::Right => {
            let (b, score, win) = reduce_rows(&board.reverse_rows());
            (b.reverse_rows(), score, win)
        }
        Direction::Up => {
            let (b, score, win) = reduce_rows(&board.transpose());
            (b.transpose(), score, win)
        }
        Direction::Down => {
            let (b, score, win) = reduce_rows(&board.transpose().reverse_rows());
            (b.reverse_rows().transpose(), score, win)
        }
    };

    let changed = reduced != *board;
    MoveResult {
        board: reduced,
        changed,
        score,
        reached_win,
    }
}

/// Reduce every row leftward, accumulating score and the win signal.
fn reduce_rows(board: &Board) -> (Board, u32, bool) {
    let mut out = Board::new(board.size());
    let mut score = 0u32;
    let mut reached_win = false;

    for (r, row) in board.rows().enumerate() {
        let result = reduce_left(row);
        out.set_row(r, &result.row);
        score += result.score;
        reached_win |= result.reached_win;
    }

    (out, score, reached_win)
}

/// True when no move can change the board: every cell is occupied and no
/// horizontally or vertically adjacent pair shares a value.
///
/// Direction-independent: any remaining adjacent equal pair implies at least
/// one direction has a valid move, and any empty cell lets tiles shift.
pub fn is_over(board: &Board) -> bool {
    board.is_full() && !board.has_adjacent_pair()
}
