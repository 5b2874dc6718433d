//! Session state machine: one player driving one quiz.
//!
//! A `QuizSession` owns all mutable run state. Time is host-supplied:
//! every time-sensitive method takes `now` (elapsed monotonic time since
//! the host's chosen epoch) and the session exposes its pending deadlines
//! instead of scheduling callbacks. Dropping the session cancels
//! everything.

pub mod attempt;
pub mod engine;
pub mod phase;
pub mod timing;
pub mod view;

pub use attempt::{Attempt, AttemptRecord};
pub use engine::{Outcome, QuizSession};
pub use phase::{Phase, PhaseKind};
pub use timing::Timings;
pub use view::{OptionView, SessionView, StageView};
