use tictactoe::{Cell, Game, GameError, GameStatus, Mark, Precondition, Scoreboard};

#[test]
fn test_default_game_has_human_as_x() {
    let game = Game::default();
    assert_eq!(game.human(), Mark::X);
    assert_eq!(game.computer(), Mark::O);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().whose_turn(), Mark::X);
    assert_eq!(game.scoreboard(), Scoreboard::default());
}

#[test]
fn test_human_then_computer_alternate() {
    let mut game = Game::default();
    assert_eq!(game.human_move(1, 1), Ok(GameStatus::InProgress));
    assert_eq!(game.board().whose_turn(), Mark::O);

    let ((r, c), status) = game.computer_move().unwrap();
    assert_eq!((r, c), (0, 0));
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.board().get(0, 0), Cell::O);
    assert_eq!(game.board().whose_turn(), Mark::X);
}

#[test]
fn test_out_of_turn_moves_are_rejected() {
    let mut game = Game::default();
    assert_eq!(
        game.computer_move().unwrap_err(),
        GameError::OutOfTurn {
            expected: Mark::X,
            got: Mark::O
        }
    );

    game.human_move(0, 0).unwrap();
    let before = *game.board();
    assert_eq!(
        game.human_move(0, 1).unwrap_err(),
        GameError::OutOfTurn {
            expected: Mark::O,
            got: Mark::X
        }
    );
    assert_eq!(*game.board(), before);
}

#[test]
fn test_rejected_human_move_keeps_turn() {
    let mut game = Game::default();
    assert_eq!(
        game.human_move(4, 0).unwrap_err(),
        GameError::InvalidCoordinate { row: 4, col: 0 }
    );
    game.human_move(2, 2).unwrap();
    game.computer_move().unwrap();
    assert_eq!(
        game.human_move(2, 2).unwrap_err(),
        GameError::CellOccupied { row: 2, col: 2 }
    );
    assert_eq!(game.board().whose_turn(), Mark::X);
}

#[test]
fn test_winning_move_ends_round_before_search() {
    let mut game = Game::default();
    game.play_turn(Mark::X, 0, 0).unwrap();
    game.play_turn(Mark::O, 1, 0).unwrap();
    game.play_turn(Mark::X, 0, 1).unwrap();
    game.play_turn(Mark::O, 1, 1).unwrap();

    assert_eq!(game.human_move(0, 2), Ok(GameStatus::Won(Mark::X)));
    assert!(game.board().winner(Mark::X));

    let before = *game.board();
    assert_eq!(
        game.computer_move().unwrap_err(),
        GameError::PreconditionViolated(Precondition::GameOver(GameStatus::Won(Mark::X)))
    );
    assert_eq!(*game.board(), before);
}

#[test]
fn test_no_moves_after_round_is_decided() {
    let mut game = Game::default();
    game.play_turn(Mark::X, 0, 0).unwrap();
    game.play_turn(Mark::O, 1, 0).unwrap();
    game.play_turn(Mark::X, 0, 1).unwrap();
    game.play_turn(Mark::O, 1, 1).unwrap();
    game.play_turn(Mark::X, 0, 2).unwrap();
    assert_eq!(
        game.play_turn(Mark::O, 1, 2).unwrap_err(),
        GameError::PreconditionViolated(Precondition::GameOver(GameStatus::Won(Mark::X)))
    );
}

#[test]
fn test_draw_round_is_recorded_and_reset() {
    let mut game = Game::default();
    // X O X / X O O / O X X
    let moves = [
        (Mark::X, 0, 0),
        (Mark::O, 0, 1),
        (Mark::X, 0, 2),
        (Mark::O, 1, 1),
        (Mark::X, 1, 0),
        (Mark::O, 1, 2),
        (Mark::X, 2, 1),
        (Mark::O, 2, 0),
        (Mark::X, 2, 2),
    ];
    for (mark, r, c) in moves {
        game.play_turn(mark, r, c).unwrap();
    }
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Draw);

    assert_eq!(game.finish_round(), Ok(GameStatus::Draw));
    assert_eq!(
        game.scoreboard(),
        Scoreboard {
            human_wins: 0,
            computer_wins: 0,
            draws: 1
        }
    );
    assert_eq!(game.board().empty_cells().count(), 9);
    assert_eq!(game.board().whose_turn(), Mark::X);
}

#[test]
fn test_finish_round_requires_decided_round() {
    let mut game = Game::default();
    game.human_move(1, 1).unwrap();
    assert_eq!(
        game.finish_round().unwrap_err(),
        GameError::PreconditionViolated(Precondition::RoundInProgress)
    );
    assert_eq!(game.board().get(1, 1), Cell::X);
}

#[test]
fn test_finished_round_is_tallied() {
    let mut game = Game::default();
    // human always takes the last open cell
    game.human_move(0, 1).unwrap();
    game.computer_move().unwrap();
    let mut status = GameStatus::InProgress;
    while !status.is_over() {
        let (r, c) = game.board().empty_cells().last().unwrap();
        status = game.human_move(r, c).unwrap();
        if !status.is_over() {
            status = game.computer_move().unwrap().1;
        }
    }
    assert_ne!(status, GameStatus::Won(Mark::X));
    game.finish_round().unwrap();
    let score = game.scoreboard();
    assert_eq!(score.human_wins, 0);
    assert_eq!(score.rounds(), 1);
}

#[test]
fn test_reset_mid_round() {
    let mut game = Game::default();
    game.human_move(0, 0).unwrap();
    game.computer_move().unwrap();
    game.reset();
    assert_eq!(game.board().empty_cells().count(), 9);
    assert_eq!(game.board().whose_turn(), Mark::X);
    assert_eq!(game.scoreboard().rounds(), 0);
}

#[test]
fn test_new_rejects_shared_mark() {
    for mark in [Mark::X, Mark::O] {
        assert_eq!(
            Game::new(mark, mark).unwrap_err(),
            GameError::PreconditionViolated(Precondition::SameMarks(mark))
        );
    }
    let game = Game::new(Mark::O, Mark::X).unwrap();
    assert_eq!(game.human(), Mark::O);
    assert_eq!(game.computer(), Mark::X);
    assert_eq!(game.board().whose_turn(), Mark::X);
}
