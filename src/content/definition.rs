//! Quiz, stage, and option definitions.
//!
//! Built with chainable constructors and checked by `validate()` before a
//! session will accept them. The invariants are structural: every stage
//! carries exactly four options, exactly one of which is correct, with
//! unique ids at both levels.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::DefinitionError;

/// Number of options every stage must carry.
pub const OPTIONS_PER_STAGE: usize = 4;

/// Quiz identifier: an author-assigned slug, unique within a registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizId(String);

impl QuizId {
    /// Create a quiz id from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuizId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for QuizId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

impl std::borrow::Borrow<str> for QuizId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuizId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stage identifier, unique within a quiz.
///
/// Identity only; play order is the stage's position in the definition's
/// stage list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageId(pub u32);

impl StageId {
    /// Create a new stage ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage({})", self.0)
    }
}

/// One selectable answer choice within a stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Short id, unique within the stage's option list.
    pub id: String,

    /// Display text.
    pub label: String,

    /// Explanatory text shown after selection, correct or not.
    pub reflection: String,

    /// Whether choosing this option counts as a correct answer.
    pub correct: bool,
}

impl OptionDef {
    /// Create an option.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        reflection: impl Into<String>,
        correct: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            reflection: reflection.into(),
            correct,
        }
    }

    /// Create the correct option for a stage.
    pub fn correct(
        id: impl Into<String>,
        label: impl Into<String>,
        reflection: impl Into<String>,
    ) -> Self {
        Self::new(id, label, reflection, true)
    }

    /// Create an incorrect option.
    pub fn incorrect(
        id: impl Into<String>,
        label: impl Into<String>,
        reflection: impl Into<String>,
    ) -> Self {
        Self::new(id, label, reflection, false)
    }
}

/// One question unit within a quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDef {
    /// Unique identifier within the quiz.
    pub id: StageId,

    /// Question text.
    pub prompt: String,

    /// Display-only coin value for this stage.
    ///
    /// Payout is decided all-or-nothing at quiz completion; these values
    /// are never summed into it.
    pub reward: u32,

    /// Ordered option list. SmallVec keeps the four options inline.
    pub options: SmallVec<[OptionDef; 4]>,
}

impl StageDef {
    /// Create a stage with no options yet.
    pub fn new(id: StageId, prompt: impl Into<String>, reward: u32) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            reward,
            options: SmallVec::new(),
        }
    }

    /// Add an option.
    #[must_use]
    pub fn with_option(mut self, option: OptionDef) -> Self {
        self.options.push(option);
        self
    }

    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Get the stage's correct option, if the stage is well-formed.
    #[must_use]
    pub fn correct_option(&self) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.correct)
    }
}

/// Complete quiz definition.
///
/// ## Example
///
/// ```
/// use quiz_engine::content::{OptionDef, QuizDefinition, StageDef, StageId};
///
/// let quiz = QuizDefinition::new("emergency-fund", "Emergency Fund Basics")
///     .with_rewards(10, 20)
///     .with_stage(
///         StageDef::new(StageId::new(1), "An unexpected bill arrives. What covers it best?", 2)
///             .with_option(OptionDef::correct("a", "An emergency fund", "Savings set aside for surprises keep you out of debt."))
///             .with_option(OptionDef::incorrect("b", "A payday loan", "Payday loans charge very high interest."))
///             .with_option(OptionDef::incorrect("c", "Skipping rent", "Missed rent creates bigger problems later."))
///             .with_option(OptionDef::incorrect("d", "A new credit card", "New credit is borrowed money, not savings.")),
///     );
///
/// assert!(quiz.validate().is_ok());
/// assert_eq!(quiz.stage_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    /// Registry key.
    pub id: QuizId,

    /// Display title.
    pub title: String,

    /// Stages in play order.
    pub stages: Vec<StageDef>,

    /// Coins paid on a fully-correct run. Anything less pays zero.
    pub total_coins: u32,

    /// XP paid on a fully-correct run. Anything less pays zero.
    pub total_xp: u32,

    /// Post-quiz discussion prompts shown with the result.
    pub reflection_prompts: Vec<String>,
}

impl QuizDefinition {
    /// Create an empty definition.
    pub fn new(id: impl Into<QuizId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            stages: Vec::new(),
            total_coins: 0,
            total_xp: 0,
            reflection_prompts: Vec::new(),
        }
    }

    /// Append a stage.
    #[must_use]
    pub fn with_stage(mut self, stage: StageDef) -> Self {
        self.stages.push(stage);
        self
    }

    /// Set the completion payout.
    #[must_use]
    pub fn with_rewards(mut self, coins: u32, xp: u32) -> Self {
        self.total_coins = coins;
        self.total_xp = xp;
        self
    }

    /// Append a post-quiz reflection prompt.
    #[must_use]
    pub fn with_reflection_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.reflection_prompts.push(prompt.into());
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Get a stage by play-order index.
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&StageDef> {
        self.stages.get(index)
    }

    /// Check the structural invariants.
    ///
    /// Sessions call this at construction, so an invalid definition never
    /// starts a run.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.stages.is_empty() {
            return Err(DefinitionError::NoStages);
        }

        let mut stage_ids = FxHashSet::default();
        for stage in &self.stages {
            if !stage_ids.insert(stage.id) {
                return Err(DefinitionError::DuplicateStageId(stage.id));
            }

            if stage.options.len() != OPTIONS_PER_STAGE {
                return Err(DefinitionError::WrongOptionCount {
                    stage: stage.id,
                    count: stage.options.len(),
                });
            }

            let mut option_ids = FxHashSet::default();
            for option in &stage.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(DefinitionError::DuplicateOptionId {
                        stage: stage.id,
                        option: option.id.clone(),
                    });
                }
            }

            match stage.options.iter().filter(|o| o.correct).count() {
                0 => return Err(DefinitionError::NoCorrectOption(stage.id)),
                1 => {}
                _ => return Err(DefinitionError::MultipleCorrectOptions(stage.id)),
            }
        }

        Ok(())
    }
}
