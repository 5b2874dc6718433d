//! Quiz registry for definition lookup.
//!
//! The `QuizRegistry` stores all quiz definitions a host offers.
//! It provides fast lookup by slug and supports iteration.

use rustc_hash::FxHashMap;

use super::definition::{QuizDefinition, QuizId};

/// Registry of quiz definitions.
///
/// ## Example
///
/// ```
/// use quiz_engine::content::{OptionDef, QuizDefinition, QuizRegistry, StageDef, StageId};
///
/// let mut registry = QuizRegistry::new();
///
/// let quiz = QuizDefinition::new("otp-safety", "OTP Safety")
///     .with_rewards(10, 20)
///     .with_stage(
///         StageDef::new(StageId::new(1), "A caller asks for your OTP. What do you do?", 2)
///             .with_option(OptionDef::correct("a", "Refuse and hang up", "No legitimate caller needs your OTP."))
///             .with_option(OptionDef::incorrect("b", "Read it out", "Sharing an OTP hands over your account."))
///             .with_option(OptionDef::incorrect("c", "Text it instead", "Any channel is still sharing it."))
///             .with_option(OptionDef::incorrect("d", "Ask them to wait", "Stalling still keeps the scam alive.")),
///     );
///
/// registry.register(quiz);
///
/// let found = registry.get("otp-safety").unwrap();
/// assert_eq!(found.title, "OTP Safety");
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuizRegistry {
    quizzes: FxHashMap<QuizId, QuizDefinition>,
}

impl QuizRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quiz definition.
    ///
    /// Panics if a quiz with the same id already exists.
    pub fn register(&mut self, quiz: QuizDefinition) {
        if self.quizzes.contains_key(&quiz.id) {
            panic!("Quiz with id '{}' already registered", quiz.id);
        }
        self.quizzes.insert(quiz.id.clone(), quiz);
    }

    /// Get a quiz definition by slug.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QuizDefinition> {
        self.quizzes.get(id)
    }

    /// Check if a quiz id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.quizzes.contains_key(id)
    }

    /// Get the number of registered quizzes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Iterate over all quiz definitions.
    pub fn iter(&self) -> impl Iterator<Item = &QuizDefinition> {
        self.quizzes.values()
    }

    /// Find quizzes matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &QuizDefinition>
    where
        F: Fn(&QuizDefinition) -> bool,
    {
        self.quizzes.values().filter(move |q| predicate(q))
    }
}
