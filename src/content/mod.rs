//! Quiz content: definitions and the registry.
//!
//! Content is data, not code. A quiz is a `QuizDefinition` (title, stages,
//! rewards, reflection prompts); topics differ only in the definition they
//! supply, never in engine logic. Definitions are serializable so hosts
//! can load them from content storage.

pub mod definition;
pub mod registry;

pub use definition::{
    OptionDef, QuizDefinition, QuizId, StageDef, StageId, OPTIONS_PER_STAGE,
};
pub use registry::QuizRegistry;
