//! Property tests over arbitrary move and jump sequences.

use proptest::prelude::*;
use rewind_tictactoe::{GameHistory, GameStatus, rules::player_to_move};

#[derive(Debug, Clone)]
enum Command {
    Move(usize),
    Jump(usize),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => (0usize..11).prop_map(Command::Move),
        1 => (0usize..11).prop_map(Command::Jump),
    ]
}

proptest! {
    #[test]
    fn prop_filled_cells_match_current_step(commands in prop::collection::vec(command(), 0..40)) {
        let mut history = GameHistory::new();
        for command in commands {
            match command {
                Command::Move(index) => { let _ = history.apply_move(index); }
                Command::Jump(step) => { let _ = history.jump_to(step); }
            }
            prop_assert_eq!(history.current_board().filled_count(), history.current_step());
            prop_assert!(history.current_step() < history.step_count());
        }
    }

    #[test]
    fn prop_rejected_moves_change_nothing(commands in prop::collection::vec(command(), 0..40)) {
        let mut history = GameHistory::new();
        for command in commands {
            let before = history.clone();
            match command {
                Command::Move(index) => match history.apply_move(index) {
                    Ok(true) => {
                        prop_assert!(before.status().is_in_progress());
                        prop_assert_eq!(history.current_step(), before.current_step() + 1);
                        prop_assert_eq!(history.step_count(), before.current_step() + 2);
                        prop_assert_eq!(
                            history.current_board().get(index),
                            Some(player_to_move(before.current_step()).mark())
                        );
                    }
                    Ok(false) | Err(_) => prop_assert_eq!(&history, &before),
                },
                Command::Jump(step) => {
                    let _ = history.jump_to(step);
                    prop_assert_eq!(history.snapshots(), before.snapshots());
                }
            }
        }
    }

    #[test]
    fn prop_won_board_is_frozen(commands in prop::collection::vec(0usize..9, 0..30)) {
        let mut history = GameHistory::new();
        for index in commands {
            let before = history.clone();
            let accepted = history.apply_move(index).unwrap();
            if matches!(before.status(), GameStatus::Won(_) | GameStatus::Draw) {
                prop_assert!(!accepted);
                prop_assert_eq!(history.current_board(), before.current_board());
            }
        }
    }

    #[test]
    fn prop_jump_restores_recorded_snapshot(
        moves in prop::collection::vec(0usize..9, 0..12),
        jumps in prop::collection::vec(0usize..12, 1..8),
    ) {
        let mut history = GameHistory::new();
        for index in moves {
            let _ = history.apply_move(index);
        }
        let recorded = history.snapshots().to_vec();
        for step in jumps {
            if step < recorded.len() {
                history.jump_to(step).unwrap();
                prop_assert_eq!(history.current_board(), &recorded[step]);
            } else {
                prop_assert!(history.jump_to(step).is_err());
            }
        }
    }
}
