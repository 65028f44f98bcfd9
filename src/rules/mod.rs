//! Draft rules: the state machine that moves cards between zones.
//!
//! `DraftEngine` implements the skip/take transitions, turn alternation,
//! reveals and the completion check. Automated seats are driven through
//! an internal work queue so chains of automated turns never recurse.

pub mod engine;
mod queue;

pub use engine::DraftEngine;
