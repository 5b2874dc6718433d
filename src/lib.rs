//! # quiz-engine
//!
//! A data-driven stage-based quiz progression engine for scenario
//! mini-games.
//!
//! ## Design Principles
//!
//! 1. **Topic-Agnostic**: No hardcoded questions, delays, or rewards.
//!    Quizzes are `QuizDefinition` data supplied at session start.
//!
//! 2. **Rejected, Not Guarded**: Illegal actions (double submission,
//!    early advance, retry after a pass) return typed errors and leave
//!    state unchanged. Hosts disable controls for UX, never for safety.
//!
//! 3. **Sans-IO Time**: The engine schedules nothing. Hosts pass `now`
//!    into time-sensitive calls and poll `tick` at the deadlines the
//!    session reports. Dropping a session cancels everything.
//!
//! ## Semantics
//!
//! - One attempt record per stage, append-only, discarded on retry.
//! - Pass requires every stage correct; payout is full `total_coins` /
//!   `total_xp` or zero, never partial.
//! - The mid-run coin counter is display-only and is overwritten by the
//!   payout at completion.
//!
//! ## Modules
//!
//! - `content`: Quiz, stage, and option definitions plus the registry
//! - `session`: The progression state machine, timing, and views
//! - `ledger`: Reward ledger seam for host-side persistence
//! - `catalog`: Bundled financial-literacy quizzes
//! - `error`: Session and content error types

pub mod catalog;
pub mod content;
pub mod error;
pub mod ledger;
pub mod session;

// Re-export commonly used types
pub use crate::content::{
    OptionDef, QuizDefinition, QuizId, QuizRegistry, StageDef, StageId, OPTIONS_PER_STAGE,
};

pub use crate::session::{
    Attempt, AttemptRecord, OptionView, Outcome, Phase, PhaseKind, QuizSession, SessionView,
    StageView, Timings,
};

pub use crate::error::{DefinitionError, QuizError};

pub use crate::ledger::{GrantRecord, MemoryLedger, RewardLedger};
