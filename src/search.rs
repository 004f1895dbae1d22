//! Full-depth minimax search for the computer's move.
//!
//! The search walks every continuation down to a terminal position. Moves
//! are simulated in place on the caller's board and rolled back before the
//! next candidate, so the board is unchanged once a call returns. There is
//! no pruning and no transposition table: on a 3×3 grid the whole tree is
//! small enough to enumerate.

use crate::board::Board;
use crate::common::{GameError, GameStatus, Mark, Precondition};
use crate::config::{BOARD_SIZE, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

/// Outcome of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Chosen `(row, col)`.
    pub best: (usize, usize),
    /// Minimax value of the chosen move from the computer's side.
    pub score: i8,
    /// Positions visited, root candidates included.
    pub nodes: u64,
    /// Value of every root candidate; `None` for occupied cells.
    pub scores: [[Option<i8>; BOARD_SIZE]; BOARD_SIZE],
}

/// Score a position if it is terminal: computer line, human line, full board.
pub fn terminal_score(board: &Board, computer: Mark, human: Mark) -> Option<i8> {
    if board.winner(computer) {
        Some(WIN_SCORE)
    } else if board.winner(human) {
        Some(LOSS_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Value of `board` for the computer, with `maximizing` set when the
/// computer is the side to move.
pub fn minimax(
    board: &mut Board,
    computer: Mark,
    human: Mark,
    maximizing: bool,
) -> Result<i8, GameError> {
    let mut nodes = 0;
    search(board, computer, human, maximizing, &mut nodes)
}

fn search(
    board: &mut Board,
    computer: Mark,
    human: Mark,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<i8, GameError> {
    *nodes += 1;
    if let Some(score) = terminal_score(board, computer, human) {
        return Ok(score);
    }

    let (mover, mut best) = if maximizing {
        (computer, i8::MIN)
    } else {
        (human, i8::MAX)
    };
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if !board.get(r, c).is_empty() {
                continue;
            }
            board.place_mark(r, c, mover)?;
            let score = search(board, computer, human, !maximizing, nodes);
            board.clear(r, c)?;
            let score = score?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }
    Ok(best)
}

fn check_preconditions(board: &Board, computer: Mark, human: Mark) -> Result<(), GameError> {
    if computer == human {
        return Err(GameError::PreconditionViolated(Precondition::SameMarks(
            computer,
        )));
    }
    match board.status() {
        GameStatus::InProgress => Ok(()),
        status => Err(GameError::PreconditionViolated(Precondition::GameOver(
            status,
        ))),
    }
}

/// Best move for `computer` against an optimal `human`, with search
/// statistics. Candidates are tried row-major and the first one with the
/// strictly greatest score is kept.
pub fn best_move_with_stats(
    board: &mut Board,
    computer: Mark,
    human: Mark,
) -> Result<SearchReport, GameError> {
    if let Err(err) = check_preconditions(board, computer, human) {
        log::error!("search refused: {}", err);
        return Err(err);
    }

    let mut nodes = 0;
    let mut scores = [[None; BOARD_SIZE]; BOARD_SIZE];
    let mut best: Option<((usize, usize), i8)> = None;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if !board.get(r, c).is_empty() {
                continue;
            }
            board.place_mark(r, c, computer)?;
            let score = search(board, computer, human, false, &mut nodes);
            board.clear(r, c)?;
            let score = score?;
            scores[r][c] = Some(score);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some(((r, c), score));
            }
        }
    }

    // Unreachable while the in-progress check holds: a non-full board has a
    // candidate.
    let (best, score) = best.ok_or(GameError::PreconditionViolated(
        Precondition::GameOver(GameStatus::Draw),
    ))?;
    log::debug!(
        "search for {}: best {:?} score {} after {} positions",
        computer,
        best,
        score,
        nodes
    );
    Ok(SearchReport {
        best,
        score,
        nodes,
        scores,
    })
}

/// Optimal `(row, col)` for `computer`. The board is restored before
/// returning.
pub fn best_move(
    board: &mut Board,
    computer: Mark,
    human: Mark,
) -> Result<(usize, usize), GameError> {
    best_move_with_stats(board, computer, human).map(|report| report.best)
}
