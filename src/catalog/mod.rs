//! Bundled quiz catalog.
//!
//! Representative financial-literacy definitions, usable as instantiation
//! examples and test fixtures. Hosts with their own content storage can
//! ignore this module entirely.

pub mod finlit;

pub use finlit::{budgeting, builtin_registry, emi_basics, otp_safety};
