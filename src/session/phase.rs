//! Session phases.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a session currently sits in the play sequence.
///
/// Timing-sensitive phases carry the session-relative instant they were
/// entered, so delay checks need no bookkeeping outside the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for an answer to the current stage.
    Answering,

    /// Answer recorded, reflection visible, reveal delay running.
    Revealing {
        /// When the answer was submitted.
        answered_at: Duration,
    },

    /// Final answer recorded and acknowledged; completion delay running.
    Finalizing {
        /// When the final answer was submitted. The completion deadline
        /// is anchored here, not at the advance.
        answered_at: Duration,
    },

    /// Outcome computed. Terminal except for retry after a fail.
    Complete {
        /// Whether every stage was answered correctly.
        passed: bool,
    },
}

impl Phase {
    /// Get the phase discriminant.
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Answering => PhaseKind::Answering,
            Phase::Revealing { .. } => PhaseKind::Revealing,
            Phase::Finalizing { .. } => PhaseKind::Finalizing,
            Phase::Complete { .. } => PhaseKind::Complete,
        }
    }

    /// Check if the session has reached its terminal phase.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Phase::Complete { .. })
    }
}

/// Phase discriminant, used in errors and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseKind {
    Answering,
    Revealing,
    Finalizing,
    Complete,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseKind::Answering => "answering",
            PhaseKind::Revealing => "revealing",
            PhaseKind::Finalizing => "finalizing",
            PhaseKind::Complete => "complete",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Phase::Answering.kind(), PhaseKind::Answering);
        assert_eq!(
            Phase::Revealing { answered_at: Duration::ZERO }.kind(),
            PhaseKind::Revealing
        );
        assert_eq!(
            Phase::Complete { passed: true }.kind(),
            PhaseKind::Complete
        );
    }

    #[test]
    fn test_is_complete() {
        assert!(!Phase::Answering.is_complete());
        assert!(Phase::Complete { passed: false }.is_complete());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PhaseKind::Revealing), "revealing");
    }
}
