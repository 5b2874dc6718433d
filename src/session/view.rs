//! Presentation snapshots.
//!
//! The presentation layer never touches session internals; it renders a
//! `SessionView` and sends player actions back. Views are owned and
//! serializable so hosts can ship them across whatever boundary they
//! render over. Reflection text and correctness flags are withheld until
//! the stage has been answered.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::content::{QuizId, StageId};

use super::engine::{Outcome, QuizSession};
use super::phase::{Phase, PhaseKind};

/// One option as the player may currently see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub id: String,
    pub label: String,

    /// Present only while revealing, and only on the selected option.
    pub reflection: Option<String>,

    /// Present only while revealing, on every option, so the correct
    /// answer can be highlighted.
    pub correct: Option<bool>,
}

/// The current stage as the player may see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageView {
    pub id: StageId,
    pub prompt: String,

    /// Display-only per-stage coin value.
    pub reward: u32,

    pub options: Vec<OptionView>,
}

/// Full snapshot of a session for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub quiz: QuizId,
    pub title: String,
    pub phase: PhaseKind,

    /// Zero-based index of the current stage.
    pub stage_index: usize,
    pub stage_count: usize,

    /// The stage being answered or revealed; absent once past the last
    /// stage.
    pub stage: Option<StageView>,

    /// Id of the option selected for the current stage, if any.
    pub selected: Option<String>,

    /// Whether reflection text is currently showing.
    pub reveal_visible: bool,

    /// Whether the advance control is unlocked.
    pub can_advance: bool,

    /// Running coin counter; becomes the payout at completion.
    pub coins_earned: u32,

    pub outcome: Option<Outcome>,

    /// Populated once the run completes.
    pub reflection_prompts: Vec<String>,
}

impl SessionView {
    pub(crate) fn of(session: &QuizSession, now: Duration) -> Self {
        let definition = session.definition();
        let revealing = matches!(session.phase(), Phase::Revealing { .. });
        let selected = session.selected_option().map(|o| o.id.clone());

        let stage = session.current_stage().map(|stage| StageView {
            id: stage.id,
            prompt: stage.prompt.clone(),
            reward: stage.reward,
            options: stage
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id.clone(),
                    label: option.label.clone(),
                    reflection: (revealing && selected.as_deref() == Some(option.id.as_str()))
                        .then(|| option.reflection.clone()),
                    correct: revealing.then_some(option.correct),
                })
                .collect(),
        });

        let complete = session.is_complete();
        Self {
            quiz: definition.id.clone(),
            title: definition.title.clone(),
            phase: session.phase().kind(),
            stage_index: session.stage_index(),
            stage_count: definition.stage_count(),
            stage,
            selected,
            reveal_visible: revealing,
            can_advance: session.can_advance(now),
            coins_earned: session.coins_earned(),
            outcome: session.outcome(),
            reflection_prompts: if complete {
                definition.reflection_prompts.clone()
            } else {
                Vec::new()
            },
        }
    }
}
