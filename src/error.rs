//! Error types for content validation and session transitions.
//!
//! Every session error is locally recoverable: a rejected action leaves
//! the session unchanged. Content errors are raised at construction time
//! so a malformed definition never reaches a live session.

use crate::content::StageId;
use crate::session::PhaseKind;

/// A rejected session action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizError {
    /// Action attempted in a phase that does not permit it.
    InvalidTransition {
        /// Name of the rejected action.
        action: &'static str,
        /// Phase the session was in when the action arrived.
        phase: PhaseKind,
    },

    /// Submitted option id is not in the current stage's option set.
    UnknownOption {
        /// Stage the submission targeted.
        stage: StageId,
        /// The unrecognized option id.
        option: String,
    },

    /// Advance requested past the final stage.
    StageIndexExhausted,
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::InvalidTransition { action, phase } => {
                write!(f, "{action} is not valid while {phase}")
            }
            QuizError::UnknownOption { stage, option } => {
                write!(f, "option '{option}' is not part of {stage}")
            }
            QuizError::StageIndexExhausted => {
                write!(f, "advance requested past the final stage")
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// A malformed quiz definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefinitionError {
    /// The definition has no stages.
    NoStages,
    /// Two stages share an id.
    DuplicateStageId(StageId),
    /// A stage does not carry exactly four options.
    WrongOptionCount {
        /// The offending stage.
        stage: StageId,
        /// How many options it actually carries.
        count: usize,
    },
    /// Two options within one stage share an id.
    DuplicateOptionId {
        /// The offending stage.
        stage: StageId,
        /// The duplicated option id.
        option: String,
    },
    /// A stage has no correct option.
    NoCorrectOption(StageId),
    /// A stage has more than one correct option.
    MultipleCorrectOptions(StageId),
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionError::NoStages => write!(f, "quiz has no stages"),
            DefinitionError::DuplicateStageId(stage) => {
                write!(f, "duplicate {stage}")
            }
            DefinitionError::WrongOptionCount { stage, count } => {
                write!(f, "{stage} has {count} options, expected 4")
            }
            DefinitionError::DuplicateOptionId { stage, option } => {
                write!(f, "{stage} has duplicate option id '{option}'")
            }
            DefinitionError::NoCorrectOption(stage) => {
                write!(f, "{stage} has no correct option")
            }
            DefinitionError::MultipleCorrectOptions(stage) => {
                write!(f, "{stage} has more than one correct option")
            }
        }
    }
}

impl std::error::Error for DefinitionError {}
