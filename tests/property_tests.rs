//! Property tests for turn resolution and turn order.

use proptest::prelude::*;

use dice_race::board::Board;
use dice_race::core::{GameConfig, PlayerId, TurnQueue};
use dice_race::dice::ScriptedDie;
use dice_race::game::GameLoop;
use dice_race::observer::NullObserver;
use dice_race::rules::{TurnEngine, TurnOutcome};

proptest! {
    #[test]
    fn overshoot_leaves_position(position in 95u8..100, roll in 1u8..=6) {
        prop_assume!(position + roll > 100);

        let board = Board::standard();
        let result = TurnEngine::new(&board).resolve(position, roll);

        prop_assert_eq!(result.outcome, TurnOutcome::Overshoot);
        prop_assert_eq!(result.position, position);
    }

    #[test]
    fn exact_landing_wins(roll in 1u8..=6) {
        let position = 100 - roll;

        let board = Board::standard();
        let result = TurnEngine::new(&board).resolve(position, roll);

        prop_assert_eq!(result.outcome, TurnOutcome::Win);
        prop_assert_eq!(result.position, 100);
    }

    #[test]
    fn plain_square_moves(position in 0u8..100, roll in 1u8..=6) {
        let board = Board::standard();
        let candidate = position + roll;
        prop_assume!(candidate < 100 && board.special(candidate).is_none());

        let result = TurnEngine::new(&board).resolve(position, roll);

        prop_assert_eq!(result.outcome, TurnOutcome::Moved(candidate));
        prop_assert_eq!(result.position, candidate);
    }

    #[test]
    fn special_square_applies_once(index in 0usize..16, roll in 1u8..=6) {
        let board = Board::standard();
        let specials: Vec<_> = board.boosts().into_iter().chain(board.setbacks()).collect();
        let candidate = specials[index].trigger();
        prop_assume!(candidate >= roll);

        let position = candidate - roll;
        let destination = board.resolve(candidate);
        let result = TurnEngine::new(&board).resolve(position, roll);

        prop_assert_eq!(result.position, destination);
        if destination > candidate {
            prop_assert_eq!(
                result.outcome,
                TurnOutcome::BoostApplied { from: candidate, to: destination }
            );
        } else {
            prop_assert_eq!(
                result.outcome,
                TurnOutcome::SetbackApplied { from: candidate, to: destination }
            );
        }
    }

    #[test]
    fn result_always_on_board(position in 0u8..100, roll in 1u8..=6) {
        let board = Board::standard();
        let result = TurnEngine::new(&board).resolve(position, roll);

        prop_assert!(result.position <= 100);
        prop_assert_eq!(result.from, position);
        prop_assert_eq!(result.roll, roll);
    }

    #[test]
    fn queue_cycle_returns_to_start(count in 1usize..=4, cycles in 1usize..5) {
        let mut queue = TurnQueue::new(count);
        let start = queue.front();

        for _ in 0..count * cycles {
            queue.rotate();
        }

        prop_assert_eq!(queue.front(), start);
    }

    #[test]
    fn game_rotation_ignores_outcomes(
        count in 2usize..=4,
        rolls in prop::collection::vec(1u8..=6, 4..=4),
    ) {
        // One cycle of turns from the start can never reach 100
        let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
        let config = GameConfig::new(names.iter().cloned());
        let mut game = GameLoop::new(&config, ScriptedDie::new(rolls), NullObserver).unwrap();

        for _ in 0..count {
            game.play_turn().unwrap();
        }

        prop_assert_eq!(game.current_player(), PlayerId::new(0));
    }
}
