use connect_four::error::MoveError;
use connect_four::game::{Cell, Dimensions, GameSession, GameStatus, MoveResult, PlayerId};

fn new_game() -> GameSession<&'static str> {
    GameSession::new("A", "B")
}

#[test]
fn landing_row_climbs_then_column_refuses() {
    for column in 0..7 {
        let mut session = new_game();
        let mut previous = None;
        while let Some(row) = session.find_landing_row(column) {
            if let Some(prev) = previous {
                assert!(row < prev, "landing row must move up");
            }
            previous = Some(row);
            assert_eq!(
                session.apply_move(column).position(),
                Some((row, column))
            );
        }
        assert_eq!(previous, Some(0));
        assert_eq!(session.apply_move(column), MoveResult::Ignored);
    }
}

#[test]
fn vertical_four_wins_for_first_player() {
    let mut session = new_game();
    let moves = [0, 1, 0, 1, 0, 1];
    for &column in &moves {
        assert!(matches!(session.apply_move(column), MoveResult::Placed { .. }));
    }

    let result = session.apply_move(0);
    assert_eq!(
        result,
        MoveResult::Won {
            row: 2,
            column: 0,
            player: PlayerId::One
        }
    );
    let winner = session.active_player().unwrap();
    assert_eq!(*winner.attribute(), "A");
    assert_eq!(winner.number(), 1);
}

#[test]
fn out_of_range_column_changes_nothing() {
    let mut session = new_game();
    let before = session.board().clone();

    assert_eq!(session.apply_move(7), MoveResult::Ignored);
    assert_eq!(session.board(), &before);
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.active_player().unwrap().id(), PlayerId::One);
}

#[test]
fn seventh_piece_in_a_column_is_ignored() {
    let mut session = new_game();
    for _ in 0..6 {
        assert!(!session.apply_move(3).is_ignored());
    }
    assert_eq!(session.find_landing_row(3), None);
    assert_eq!(session.apply_move(3), MoveResult::Ignored);
    assert_eq!(session.find_landing_row(3), None);
    assert_eq!(session.cell_at(0, 3), Cell::Occupied(PlayerId::Two));
}

#[test]
fn turn_toggles_only_on_placed() {
    let mut session = new_game();
    let moves = [3, 3, 4, 4, 5, 5, 6];
    for &column in &moves {
        let before = session.active_player().unwrap().id();
        match session.apply_move(column) {
            MoveResult::Placed { .. } => {
                assert_eq!(session.active_player().unwrap().id(), before.other())
            }
            MoveResult::Won { player, .. } => {
                assert_eq!(player, before);
                assert_eq!(session.active_player().unwrap().id(), before);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(session.status(), GameStatus::Won(PlayerId::One));
}

#[test]
fn terminal_session_refuses_every_column() {
    let mut session = new_game();
    for column in [0, 1, 0, 1, 0, 1, 0] {
        session.apply_move(column);
    }
    let board = session.board().clone();
    for column in 0..9 {
        assert_eq!(session.apply_move(column), MoveResult::Ignored);
        assert_eq!(
            session.try_apply_move(column),
            Err(MoveError::SessionTerminated)
        );
    }
    assert_eq!(session.board(), &board);
    assert_eq!(session.status(), GameStatus::Won(PlayerId::One));
}

#[test]
fn full_scan_agrees_with_last_move_check() {
    // Alternate "random-looking" play on a wide board and compare the two
    // win checks after every move.
    let dims = Dimensions::new(5, 9).unwrap();
    let mut session = GameSession::with_dimensions((), (), dims);
    let mut column = 0usize;
    while !session.is_terminal() {
        column = (column * 7 + 3) % dims.width();
        let result = session.apply_move(column);
        if result.is_ignored() {
            column += 1;
            continue;
        }
        assert_eq!(
            session.check_for_win(),
            matches!(result, MoveResult::Won { .. }),
            "disagreement after {result:?}"
        );
    }
}

#[test]
fn custom_dimensions_are_respected() {
    let dims = Dimensions::new(4, 5).unwrap();
    let mut session = GameSession::with_dimensions("x", "o", dims);
    assert_eq!(session.board().height(), 4);
    assert_eq!(session.board().width(), 5);
    assert_eq!(session.apply_move(4), MoveResult::Placed { row: 3, column: 4 });
    assert_eq!(session.apply_move(5), MoveResult::Ignored);
}
