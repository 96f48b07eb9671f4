//! End-to-end game scenarios for the snapshot history.

use rewind_tictactoe::{
    Board, Cell, GameHistory, GameStatus, HistoryErrorKind, InvalidInput, Player, StatusLine,
    StatusView,
};

fn play(history: &mut GameHistory, moves: &[usize]) {
    for &index in moves {
        assert!(
            history.apply_move(index).expect("index in range"),
            "move at {index} should be accepted"
        );
    }
}

#[test]
fn test_top_row_win() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4, 2]);

    let board = history.current_board();
    let marks: Vec<_> = [0, 3, 1, 4, 2].iter().map(|&i| board.get(i)).collect();
    assert_eq!(
        marks,
        vec![
            Some(Cell::X),
            Some(Cell::O),
            Some(Cell::X),
            Some(Cell::O),
            Some(Cell::X)
        ]
    );
    assert_eq!(history.status(), GameStatus::Won(Player::X));
    assert_eq!(StatusView::describe(&history), StatusLine::Winner(Player::X));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4, 2]);
    let before = history.clone();

    for index in [5, 6, 7, 8] {
        assert!(!history.apply_move(index).unwrap());
    }
    assert_eq!(history, before);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut history = GameHistory::new();
    assert!(history.apply_move(0).unwrap());
    let board = *history.current_board();

    assert!(!history.apply_move(0).unwrap());
    assert_eq!(history.current_board(), &board);
    assert_eq!(history.current_step(), 1);
    assert_eq!(history.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_branch_after_time_travel() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 1, 2, 3]);
    let old_future: Vec<Board> = history.snapshots()[2..].to_vec();

    history.jump_to(1).unwrap();
    assert!(history.apply_move(4).unwrap());

    let steps: Vec<_> = history.move_list().iter().map(|d| d.step).collect();
    assert_eq!(steps, vec![0, 1, 2]);
    for old in &old_future {
        assert!(!history.snapshots().contains(old));
    }
    assert!(history.jump_to(3).is_err());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut history = GameHistory::new();
    // X O X / X O O / O X X
    play(&mut history, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(history.current_board().is_full());
    assert_eq!(history.status(), GameStatus::Draw);
    assert_eq!(history.status().winner(), None);
    assert_eq!(StatusView::describe(&history), StatusLine::Draw);
    assert_eq!(history.step_count(), 10);
}

#[test]
fn test_jump_back_from_won_game_reopens_play() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4, 2]);

    history.jump_to(4).unwrap();
    assert_eq!(history.status(), GameStatus::InProgress(Player::X));
    // The recorded win is still reachable until a move overwrites it.
    history.jump_to(5).unwrap();
    assert_eq!(history.status(), GameStatus::Won(Player::X));

    history.jump_to(4).unwrap();
    assert!(history.apply_move(8).unwrap());
    assert_eq!(history.step_count(), 6);
    assert_eq!(history.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_contract_violations_are_reported() {
    let mut history = GameHistory::new();
    let err = history.apply_move(42).unwrap_err();
    assert_eq!(
        err.kind(),
        HistoryErrorKind::InvalidInput(InvalidInput::CellOutOfRange { index: 42 })
    );
    assert!(err.to_string().contains("cell index 42"));

    let err = history.jump_to(1).unwrap_err();
    assert_eq!(
        err.kind(),
        HistoryErrorKind::InvalidInput(InvalidInput::StepOutOfRange { step: 1, len: 1 })
    );
    assert_eq!(history, GameHistory::new());
}

#[test]
fn test_labels_follow_steps() {
    let mut history = GameHistory::new();
    play(&mut history, &[4, 0]);
    let labels: Vec<_> = history.move_list().into_iter().map(|d| d.label).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2"]
    );
}
