//! The quiz progression engine.
//!
//! Drives a player through a fixed ordered sequence of stages, collects
//! one attempt record per stage, and computes an all-or-nothing outcome.
//!
//! ## State machine
//!
//! ```text
//! Answering --submit_answer--> Revealing --advance--> Answering (next stage)
//!                                  |   \--advance (last stage)--> Finalizing
//!                                  \--tick (last stage, deadline)------\
//! Finalizing --tick (deadline)--> Complete --retry (failed only)--> Answering (stage 0)
//! ```
//!
//! Every invalid call is rejected with a typed error and leaves the
//! session unchanged. The completion deadline is anchored at the final
//! answer's submission, so `tick` fires it whether or not the player
//! acknowledged the last reflection.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::content::{OptionDef, QuizDefinition, StageDef};
use crate::error::{DefinitionError, QuizError};
use crate::ledger::RewardLedger;

use super::attempt::Attempt;
use super::phase::Phase;
use super::timing::Timings;
use super::view::SessionView;

/// Result of a completed run.
///
/// Payout is strictly binary: full `total_coins`/`total_xp` on an
/// all-correct run, zero otherwise. Per-stage reward values never
/// contribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether every stage was answered correctly.
    pub passed: bool,

    /// Number of correctly answered stages.
    pub correct_count: u32,

    /// Coins paid: the quiz's `total_coins` if passed, else 0.
    pub coins: u32,

    /// XP paid: the quiz's `total_xp` if passed, else 0.
    pub xp: u32,
}

/// One player's live run through one quiz.
///
/// Owns all mutable session state; nothing is persisted. The host feeds
/// it player actions plus the current session-relative time, and calls
/// [`tick`](QuizSession::tick) at (or after) the deadlines reported by
/// [`next_deadline`](QuizSession::next_deadline).
#[derive(Clone, Debug)]
pub struct QuizSession {
    definition: QuizDefinition,
    timings: Timings,
    phase: Phase,
    stage_index: usize,
    selected: Option<String>,
    attempt: Attempt,
    /// Running display counter: +1 per correct answer while playing,
    /// overwritten with the real payout at completion.
    coins_earned: u32,
    outcome: Option<Outcome>,
    settled: bool,
}

impl QuizSession {
    /// Start a session at stage 0.
    ///
    /// Rejects definitions that fail [`QuizDefinition::validate`].
    pub fn new(definition: QuizDefinition, timings: Timings) -> Result<Self, DefinitionError> {
        definition.validate()?;

        Ok(Self {
            definition,
            timings,
            phase: Phase::Answering,
            stage_index: 0,
            selected: None,
            attempt: Attempt::new(),
            coins_earned: 0,
            outcome: None,
            settled: false,
        })
    }

    // === Accessors ===

    /// The quiz being played.
    #[must_use]
    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// The delay configuration.
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based index of the current stage.
    #[must_use]
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    /// The stage currently being answered or revealed. `None` once the
    /// run has moved past its last stage.
    #[must_use]
    pub fn current_stage(&self) -> Option<&StageDef> {
        match self.phase {
            Phase::Answering | Phase::Revealing { .. } => self.definition.stage(self.stage_index),
            Phase::Finalizing { .. } | Phase::Complete { .. } => None,
        }
    }

    /// The option chosen for the current stage, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&OptionDef> {
        let id = self.selected.as_deref()?;
        self.definition.stage(self.stage_index)?.option(id)
    }

    /// The attempt log for this run.
    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// Running coin counter. Display only until completion, at which
    /// point it is overwritten with the payout.
    #[must_use]
    pub fn coins_earned(&self) -> u32 {
        self.coins_earned
    }

    /// The computed outcome, once complete.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Check if the run has completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }

    // === Deadlines ===

    /// When the advance control unlocks, if a reveal delay is running.
    #[must_use]
    pub fn advance_unlock_at(&self) -> Option<Duration> {
        match self.phase {
            Phase::Revealing { answered_at } => Some(answered_at + self.timings.reveal_delay),
            _ => None,
        }
    }

    /// When the outcome will be computed, if the final answer is in.
    #[must_use]
    pub fn completion_at(&self) -> Option<Duration> {
        match self.phase {
            Phase::Revealing { answered_at } if self.on_last_stage() => {
                Some(answered_at + self.timings.completion_delay)
            }
            Phase::Finalizing { answered_at } => {
                Some(answered_at + self.timings.completion_delay)
            }
            _ => None,
        }
    }

    /// The earliest pending deadline, or `None` when nothing is
    /// scheduled. The host should call [`tick`](QuizSession::tick) and
    /// re-render once this instant passes.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.advance_unlock_at(), self.completion_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Check whether the advance control is unlocked.
    #[must_use]
    pub fn can_advance(&self, now: Duration) -> bool {
        matches!(
            self.phase,
            Phase::Revealing { answered_at } if now >= answered_at + self.timings.reveal_delay
        )
    }

    // === Player actions ===

    /// Submit an answer for the current stage.
    ///
    /// Valid only while answering; a second submission without an
    /// intervening advance is rejected. Returns the chosen option so the
    /// host can render its reflection text.
    pub fn submit_answer(
        &mut self,
        option_id: &str,
        now: Duration,
    ) -> Result<&OptionDef, QuizError> {
        if !matches!(self.phase, Phase::Answering) {
            return Err(QuizError::InvalidTransition {
                action: "submit_answer",
                phase: self.phase.kind(),
            });
        }

        let stage_index = self.stage_index;
        let stage = match self.definition.stage(stage_index) {
            Some(stage) => stage,
            None => return Err(QuizError::StageIndexExhausted),
        };
        let stage_id = stage.id;

        let option_index = match stage.options.iter().position(|o| o.id == option_id) {
            Some(index) => index,
            None => {
                return Err(QuizError::UnknownOption {
                    stage: stage_id,
                    option: option_id.to_string(),
                })
            }
        };
        let correct = stage.options[option_index].correct;

        self.attempt.record(stage_id, correct);
        if correct {
            self.coins_earned += 1;
        }
        self.selected = Some(option_id.to_string());
        self.phase = Phase::Revealing { answered_at: now };

        debug!(
            "quiz {}: {} answered '{}' ({})",
            self.definition.id,
            stage_id,
            option_id,
            if correct { "correct" } else { "incorrect" },
        );

        Ok(&self.definition.stages[stage_index].options[option_index])
    }

    /// Acknowledge the reflection and move on.
    ///
    /// Valid only while revealing and after the reveal delay has elapsed.
    /// On a non-final stage this starts the next stage; on the final
    /// stage it enters the finalizing window.
    pub fn advance(&mut self, now: Duration) -> Result<(), QuizError> {
        let answered_at = match self.phase {
            Phase::Revealing { answered_at } => answered_at,
            Phase::Finalizing { .. } | Phase::Complete { .. } => {
                return Err(QuizError::StageIndexExhausted)
            }
            Phase::Answering => {
                return Err(QuizError::InvalidTransition {
                    action: "advance",
                    phase: self.phase.kind(),
                })
            }
        };

        if now < answered_at + self.timings.reveal_delay {
            return Err(QuizError::InvalidTransition {
                action: "advance",
                phase: self.phase.kind(),
            });
        }

        if self.on_last_stage() {
            // Completion stays anchored at the final answer.
            self.phase = Phase::Finalizing { answered_at };
            debug!("quiz {}: final stage acknowledged", self.definition.id);
        } else {
            self.stage_index += 1;
            self.selected = None;
            self.phase = Phase::Answering;
            debug!(
                "quiz {}: advanced to stage index {}",
                self.definition.id, self.stage_index,
            );
        }

        Ok(())
    }

    /// Fire any deadline that has passed.
    ///
    /// Once the completion deadline elapses this computes the outcome,
    /// enters `Complete`, and returns the outcome. All other calls return
    /// `None` and change nothing. The completion fires from the final
    /// reveal even if the player never acknowledged it.
    pub fn tick(&mut self, now: Duration) -> Option<Outcome> {
        let deadline = self.completion_at()?;
        if now < deadline {
            return None;
        }

        let correct_count = self.attempt.correct_count() as u32;
        let passed = correct_count as usize == self.definition.stage_count();
        let outcome = Outcome {
            passed,
            correct_count,
            coins: if passed { self.definition.total_coins } else { 0 },
            xp: if passed { self.definition.total_xp } else { 0 },
        };

        // The payout replaces the running display counter.
        self.coins_earned = outcome.coins;
        self.outcome = Some(outcome);
        self.phase = Phase::Complete { passed };

        debug!(
            "quiz {}: complete, {}/{} correct, {}",
            self.definition.id,
            correct_count,
            self.definition.stage_count(),
            if passed { "passed" } else { "failed" },
        );

        Some(outcome)
    }

    /// Start the quiz over after a failed run.
    ///
    /// Valid only in `Complete` with `passed == false`. Discards the
    /// attempt log and all accumulated state.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        match self.phase {
            Phase::Complete { passed: false } => {}
            _ => {
                return Err(QuizError::InvalidTransition {
                    action: "retry",
                    phase: self.phase.kind(),
                })
            }
        }

        self.attempt.clear();
        self.stage_index = 0;
        self.selected = None;
        self.coins_earned = 0;
        self.outcome = None;
        self.settled = false;
        self.phase = Phase::Answering;

        debug!("quiz {}: retry", self.definition.id);
        Ok(())
    }

    /// Hand the outcome to a reward ledger.
    ///
    /// Valid only once complete; pays at most once per run (a repeat call
    /// is an accepted no-op). The engine itself never persists anything.
    pub fn settle(&mut self, ledger: &mut dyn RewardLedger) -> Result<(), QuizError> {
        if !self.phase.is_complete() {
            return Err(QuizError::InvalidTransition {
                action: "settle",
                phase: self.phase.kind(),
            });
        }
        if self.settled {
            return Ok(());
        }

        if let Some(outcome) = self.outcome {
            ledger.grant(&self.definition.id, &outcome);
        }
        self.settled = true;
        Ok(())
    }

    // === Presentation ===

    /// Build a serializable snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self, now: Duration) -> SessionView {
        SessionView::of(self, now)
    }

    fn on_last_stage(&self) -> bool {
        self.stage_index + 1 == self.definition.stage_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{OptionDef, StageDef, StageId};

    fn two_stage_quiz() -> QuizDefinition {
        let mut quiz = QuizDefinition::new("test", "Test").with_rewards(10, 20);
        for i in 1..=2 {
            quiz = quiz.with_stage(
                StageDef::new(StageId::new(i), format!("Prompt {i}"), 2)
                    .with_option(OptionDef::correct("a", "Right", "Yes."))
                    .with_option(OptionDef::incorrect("b", "Wrong", "No."))
                    .with_option(OptionDef::incorrect("c", "Wrong", "No."))
                    .with_option(OptionDef::incorrect("d", "Wrong", "No.")),
            );
        }
        quiz
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_new_validates() {
        let invalid = QuizDefinition::new("empty", "Empty");
        assert!(QuizSession::new(invalid, Timings::default()).is_err());

        let session = QuizSession::new(two_stage_quiz(), Timings::default()).unwrap();
        assert_eq!(session.phase().kind(), crate::session::PhaseKind::Answering);
        assert_eq!(session.stage_index(), 0);
    }

    #[test]
    fn test_submit_returns_chosen_option() {
        let mut session = QuizSession::new(two_stage_quiz(), Timings::default()).unwrap();

        let option = session.submit_answer("b", ms(0)).unwrap();
        assert_eq!(option.id, "b");
        assert!(!option.correct);
        assert_eq!(option.reflection, "No.");
    }

    #[test]
    fn test_running_counter_increments_on_correct_only() {
        let mut session = QuizSession::new(two_stage_quiz(), Timings::immediate()).unwrap();

        session.submit_answer("a", ms(0)).unwrap();
        assert_eq!(session.coins_earned(), 1);

        session.advance(ms(0)).unwrap();
        session.submit_answer("b", ms(0)).unwrap();
        assert_eq!(session.coins_earned(), 1);
    }

    #[test]
    fn test_deadlines() {
        let mut session = QuizSession::new(two_stage_quiz(), Timings::default()).unwrap();
        assert_eq!(session.next_deadline(), None);

        session.submit_answer("a", ms(100)).unwrap();
        assert_eq!(session.advance_unlock_at(), Some(ms(1600)));
        assert_eq!(session.completion_at(), None);
        assert_eq!(session.next_deadline(), Some(ms(1600)));

        session.advance(ms(1600)).unwrap();
        session.submit_answer("a", ms(2000)).unwrap();

        // Final stage: both the unlock and the completion are pending.
        assert_eq!(session.advance_unlock_at(), Some(ms(3500)));
        assert_eq!(session.completion_at(), Some(ms(4500)));
        assert_eq!(session.next_deadline(), Some(ms(3500)));
    }

    #[test]
    fn test_completion_fires_without_final_advance() {
        let mut session = QuizSession::new(two_stage_quiz(), Timings::default()).unwrap();

        session.submit_answer("a", ms(0)).unwrap();
        session.advance(ms(1500)).unwrap();
        session.submit_answer("a", ms(2000)).unwrap();

        // Player never acknowledges the last reflection.
        assert_eq!(session.tick(ms(4000)), None);
        let outcome = session.tick(ms(4500)).unwrap();

        assert!(outcome.passed);
        assert!(session.is_complete());
    }

    #[test]
    fn test_current_stage_visibility() {
        let mut session = QuizSession::new(two_stage_quiz(), Timings::immediate()).unwrap();
        assert_eq!(session.current_stage().unwrap().id, StageId::new(1));

        session.submit_answer("a", ms(0)).unwrap();
        assert_eq!(session.current_stage().unwrap().id, StageId::new(1));
        assert_eq!(session.selected_option().unwrap().id, "a");

        session.advance(ms(0)).unwrap();
        assert_eq!(session.current_stage().unwrap().id, StageId::new(2));
        assert!(session.selected_option().is_none());

        session.submit_answer("a", ms(0)).unwrap();
        session.advance(ms(0)).unwrap();
        assert!(session.current_stage().is_none());
    }
}
