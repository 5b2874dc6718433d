//! Reward ledger seam.
//!
//! The engine computes outcomes; durable crediting belongs to the host.
//! Hosts implement `RewardLedger` against their own persistence and pass
//! it to [`QuizSession::settle`](crate::session::QuizSession::settle),
//! which pays at most once per run.

use serde::{Deserialize, Serialize};

use crate::content::QuizId;
use crate::session::Outcome;

/// External collaborator that receives completed outcomes.
pub trait RewardLedger {
    /// Credit the outcome of a completed run.
    ///
    /// Called at most once per run; a failed run is still reported (with
    /// zero coins and xp) so hosts can track completions.
    fn grant(&mut self, quiz: &QuizId, outcome: &Outcome);
}

/// A grant captured by [`MemoryLedger`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    pub quiz: QuizId,
    pub outcome: Outcome,
}

/// In-memory ledger for tests and single-process hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    grants: Vec<GrantRecord>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All grants in settlement order.
    #[must_use]
    pub fn grants(&self) -> &[GrantRecord] {
        &self.grants
    }

    /// Total coins credited.
    #[must_use]
    pub fn total_coins(&self) -> u64 {
        self.grants.iter().map(|g| u64::from(g.outcome.coins)).sum()
    }

    /// Total XP credited.
    #[must_use]
    pub fn total_xp(&self) -> u64 {
        self.grants.iter().map(|g| u64::from(g.outcome.xp)).sum()
    }
}

impl RewardLedger for MemoryLedger {
    fn grant(&mut self, quiz: &QuizId, outcome: &Outcome) {
        self.grants.push(GrantRecord {
            quiz: quiz.clone(),
            outcome: *outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_ledger_accumulates() {
        let mut ledger = MemoryLedger::new();
        assert_eq!(ledger.total_coins(), 0);

        let passed = Outcome {
            passed: true,
            correct_count: 5,
            coins: 10,
            xp: 20,
        };
        let failed = Outcome {
            passed: false,
            correct_count: 3,
            coins: 0,
            xp: 0,
        };

        ledger.grant(&QuizId::new("budget"), &passed);
        ledger.grant(&QuizId::new("emi"), &failed);

        assert_eq!(ledger.grants().len(), 2);
        assert_eq!(ledger.total_coins(), 10);
        assert_eq!(ledger.total_xp(), 20);
        assert_eq!(ledger.grants()[1].quiz, QuizId::new("emi"));
    }
}
