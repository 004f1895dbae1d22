use proptest::prelude::*;
use tictactoe::{Board, Cell, GameStatus, Mark, BOARD_SIZE};

/// Play alternating moves from an empty board, picking the `choice % open`th
/// empty cell each ply, and stop at the first terminal position.
fn play_legal(choices: &[usize]) -> Vec<Board> {
    let mut board = Board::new();
    let mut seen = vec![board];
    for &choice in choices {
        if board.status().is_over() {
            break;
        }
        let open: Vec<_> = board.empty_cells().collect();
        let (r, c) = open[choice % open.len()];
        let mark = board.whose_turn();
        board.place_mark(r, c, mark).unwrap();
        board.pass_turn();
        seen.push(board);
    }
    seen
}

fn all_cells_filled(board: &Board) -> bool {
    (0..BOARD_SIZE).all(|r| (0..BOARD_SIZE).all(|c| !board.get(r, c).is_empty()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reachable_boards_never_have_two_winners(choices in proptest::collection::vec(any::<usize>(), 9)) {
        for board in play_legal(&choices) {
            prop_assert!(!(board.winner(Mark::X) && board.winner(Mark::O)));
        }
    }

    #[test]
    fn mark_counts_stay_balanced(choices in proptest::collection::vec(any::<usize>(), 9)) {
        for board in play_legal(&choices) {
            let diff = board.count(Cell::X) as isize - board.count(Cell::O) as isize;
            prop_assert!(diff == 0 || diff == 1, "diff {} on\n{}", diff, board);
        }
    }

    #[test]
    fn is_full_matches_cell_reads(choices in proptest::collection::vec(any::<usize>(), 9)) {
        for board in play_legal(&choices) {
            prop_assert_eq!(board.is_full(), all_cells_filled(&board));
        }
    }

    #[test]
    fn status_agrees_with_queries(choices in proptest::collection::vec(any::<usize>(), 9)) {
        for board in play_legal(&choices) {
            let expected = if board.winner(Mark::X) {
                GameStatus::Won(Mark::X)
            } else if board.winner(Mark::O) {
                GameStatus::Won(Mark::O)
            } else if board.is_full() {
                GameStatus::Draw
            } else {
                GameStatus::InProgress
            };
            prop_assert_eq!(board.status(), expected);
        }
    }

    #[test]
    fn reset_always_returns_initial_state(choices in proptest::collection::vec(any::<usize>(), 9)) {
        let mut board = *play_legal(&choices).last().unwrap();
        board.reset();
        prop_assert!(!board.is_full());
        prop_assert_eq!(board.empty_cells().count(), BOARD_SIZE * BOARD_SIZE);
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn place_then_clear_is_identity(
        choices in proptest::collection::vec(any::<usize>(), 0..8),
        pick in any::<usize>(),
    ) {
        let before = *play_legal(&choices).last().unwrap();
        prop_assume!(!before.is_full());
        let open: Vec<_> = before.empty_cells().collect();
        let (r, c) = open[pick % open.len()];
        let mut board = before;
        board.place_mark(r, c, Mark::O).unwrap();
        board.clear(r, c).unwrap();
        prop_assert_eq!(board, before);
    }
}
