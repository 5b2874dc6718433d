//! Property tests over arbitrary answer sequences and delays.

use proptest::prelude::*;
use std::time::Duration;

use quiz_engine::{
    OptionDef, PhaseKind, QuizDefinition, QuizError, QuizSession, StageDef, StageId, Timings,
};

const TOTAL_COINS: u32 = 10;
const TOTAL_XP: u32 = 20;

fn quiz_with_stages(count: usize) -> QuizDefinition {
    let mut quiz = QuizDefinition::new("prop", "Property Fixture").with_rewards(TOTAL_COINS, TOTAL_XP);
    for i in 0..count {
        quiz = quiz.with_stage(
            StageDef::new(StageId::new(i as u32), format!("Prompt {i}"), 2)
                .with_option(OptionDef::correct("a", "Right", "Yes."))
                .with_option(OptionDef::incorrect("b", "Wrong", "No."))
                .with_option(OptionDef::incorrect("c", "Wrong", "No."))
                .with_option(OptionDef::incorrect("d", "Wrong", "No.")),
        );
    }
    quiz
}

/// Drive one full run with zero delays, answering per the pattern.
fn run_pattern(pattern: &[bool]) -> QuizSession {
    let mut session =
        QuizSession::new(quiz_with_stages(pattern.len()), Timings::immediate()).unwrap();
    let now = Duration::ZERO;

    for &correct in pattern {
        let id = if correct { "a" } else { "b" };
        session.submit_answer(id, now).unwrap();
        session.advance(now).unwrap();
    }
    session.tick(now).expect("completion fires at the deadline");
    session
}

proptest! {
    /// Passed iff every answer was correct; payout is all-or-nothing.
    #[test]
    fn prop_pass_iff_all_correct(pattern in prop::collection::vec(any::<bool>(), 1..8)) {
        let session = run_pattern(&pattern);
        let outcome = session.outcome().unwrap();

        let all_correct = pattern.iter().all(|&c| c);
        prop_assert_eq!(outcome.passed, all_correct);
        prop_assert_eq!(outcome.correct_count as usize, pattern.iter().filter(|&&c| c).count());

        // Never an intermediate payout.
        if all_correct {
            prop_assert_eq!(outcome.coins, TOTAL_COINS);
            prop_assert_eq!(outcome.xp, TOTAL_XP);
        } else {
            prop_assert_eq!(outcome.coins, 0);
            prop_assert_eq!(outcome.xp, 0);
        }
        prop_assert_eq!(session.coins_earned(), outcome.coins);

        // One attempt record per stage, in stage order.
        prop_assert_eq!(session.attempt().len(), pattern.len());
        for (record, &correct) in session.attempt().iter().zip(&pattern) {
            prop_assert_eq!(record.correct, correct);
        }
    }

    /// Retry after any failed run restores a pristine session.
    #[test]
    fn prop_retry_resets_everything(
        mut pattern in prop::collection::vec(any::<bool>(), 1..8),
        wrong_at in any::<prop::sample::Index>(),
    ) {
        // Force at least one incorrect answer so the run fails.
        let idx = wrong_at.index(pattern.len());
        pattern[idx] = false;

        let mut session = run_pattern(&pattern);
        prop_assert!(!session.outcome().unwrap().passed);

        session.retry().unwrap();

        prop_assert_eq!(session.phase().kind(), PhaseKind::Answering);
        prop_assert_eq!(session.stage_index(), 0);
        prop_assert!(session.attempt().is_empty());
        prop_assert_eq!(session.coins_earned(), 0);
        prop_assert!(session.outcome().is_none());
    }

    /// The advance gate holds for the whole reveal delay, whatever its length.
    #[test]
    fn prop_advance_gated_by_reveal_delay(
        reveal_ms in 1u64..10_000,
        submitted_ms in 0u64..100_000,
        early_fraction in 0.0f64..1.0,
    ) {
        let timings = Timings::default().with_reveal_delay(Duration::from_millis(reveal_ms));
        let mut session = QuizSession::new(quiz_with_stages(2), timings).unwrap();

        let submitted = Duration::from_millis(submitted_ms);
        session.submit_answer("a", submitted).unwrap();

        let early = submitted + Duration::from_millis((reveal_ms as f64 * early_fraction) as u64);
        if early < submitted + timings.reveal_delay {
            prop_assert!(!session.can_advance(early));
            let gated = matches!(
                session.advance(early),
                Err(QuizError::InvalidTransition { action: "advance", .. })
            );
            prop_assert!(gated);
        }

        let unlock = submitted + timings.reveal_delay;
        prop_assert!(session.can_advance(unlock));
        prop_assert!(session.advance(unlock).is_ok());
    }
}
