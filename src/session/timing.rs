//! Delay configuration.
//!
//! Both delays live in one place, passed at session construction, instead
//! of magic numbers scattered per quiz.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session delay configuration.
///
/// Defaults mirror the production UI: a 1.5 s reveal delay and a 2.5 s
/// completion delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Wait after an answer before the advance control unlocks.
    pub reveal_delay: Duration,

    /// Wait after the final answer before the outcome is computed.
    pub completion_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(1500),
            completion_delay: Duration::from_millis(2500),
        }
    }
}

impl Timings {
    /// Zero delays: every gate opens immediately. Useful for tests and
    /// headless hosts.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            reveal_delay: Duration::ZERO,
            completion_delay: Duration::ZERO,
        }
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the completion delay.
    #[must_use]
    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let timings = Timings::default();
        assert_eq!(timings.reveal_delay, Duration::from_millis(1500));
        assert_eq!(timings.completion_delay, Duration::from_millis(2500));
    }

    #[test]
    fn test_builder() {
        let timings = Timings::default()
            .with_reveal_delay(Duration::from_millis(500))
            .with_completion_delay(Duration::from_millis(5500));

        assert_eq!(timings.reveal_delay, Duration::from_millis(500));
        assert_eq!(timings.completion_delay, Duration::from_millis(5500));
    }

    #[test]
    fn test_immediate() {
        let timings = Timings::immediate();
        assert_eq!(timings.reveal_delay, Duration::ZERO);
        assert_eq!(timings.completion_delay, Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let timings = Timings::default();
        let json = serde_json::to_string(&timings).unwrap();
        let deserialized: Timings = serde_json::from_str(&json).unwrap();
        assert_eq!(timings, deserialized);
    }
}
