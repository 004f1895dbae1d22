use crate::common::Mark;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
pub const NUM_LINES: usize = 8;

/// Every winning line as `(row, col)` triples: rows, then columns, then the
/// two diagonals.
pub const LINES: [[(usize, usize); BOARD_SIZE]; NUM_LINES] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Player A, who always opens a round.
pub const HUMAN_MARK: Mark = Mark::X;
/// Player B, driven by the search.
pub const COMPUTER_MARK: Mark = Mark::O;

pub const WIN_SCORE: i8 = 1;
pub const LOSS_SCORE: i8 = -1;
pub const DRAW_SCORE: i8 = 0;
