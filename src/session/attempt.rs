//! Append-only attempt log.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::content::StageId;

/// One answer record: which stage, and whether the chosen option was
/// correct. Never mutated after append.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// The answered stage.
    pub stage: StageId,

    /// Whether the chosen option was the correct one.
    pub correct: bool,
}

/// The record of a player's answers across one playthrough.
///
/// One record is appended per answered stage; the log is cleared only by
/// retry. Backed by a persistent vector so cloning a session for a
/// presentation snapshot is O(1).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Attempt {
    records: Vector<AttemptRecord>,
}

impl Attempt {
    /// Create an empty attempt log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one answer record.
    pub(crate) fn record(&mut self, stage: StageId, correct: bool) {
        self.records.push_back(AttemptRecord { stage, correct });
    }

    /// Discard all records. Only retry does this.
    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of answered stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been answered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of correctly answered stages.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|r| r.correct).count()
    }

    /// Check whether every recorded answer was correct.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.records.iter().all(|r| r.correct)
    }

    /// Iterate over records in answer order.
    pub fn iter(&self) -> impl Iterator<Item = &AttemptRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut attempt = Attempt::new();
        assert!(attempt.is_empty());

        attempt.record(StageId::new(1), true);
        attempt.record(StageId::new(2), false);
        attempt.record(StageId::new(3), true);

        assert_eq!(attempt.len(), 3);
        assert_eq!(attempt.correct_count(), 2);
        assert!(!attempt.all_correct());
    }

    #[test]
    fn test_all_correct() {
        let mut attempt = Attempt::new();
        attempt.record(StageId::new(1), true);
        attempt.record(StageId::new(2), true);

        assert!(attempt.all_correct());
    }

    #[test]
    fn test_order_preserved() {
        let mut attempt = Attempt::new();
        attempt.record(StageId::new(3), true);
        attempt.record(StageId::new(1), false);

        let stages: Vec<_> = attempt.iter().map(|r| r.stage).collect();
        assert_eq!(stages, vec![StageId::new(3), StageId::new(1)]);
    }

    #[test]
    fn test_clear() {
        let mut attempt = Attempt::new();
        attempt.record(StageId::new(1), true);
        attempt.clear();

        assert!(attempt.is_empty());
        assert_eq!(attempt.correct_count(), 0);
    }

    #[test]
    fn test_cheap_clone() {
        let mut attempt = Attempt::new();
        for i in 0..100 {
            attempt.record(StageId::new(i), i % 2 == 0);
        }

        let snapshot = attempt.clone();
        attempt.record(StageId::new(100), true);

        assert_eq!(snapshot.len(), 100);
        assert_eq!(attempt.len(), 101);
    }
}
