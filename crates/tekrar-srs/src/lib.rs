//! SRS (Spaced Repetition System) library for Tekrar
//!
//! This crate provides the core review-scheduling algorithm and the
//! per-learner review queue it operates on. The scheduler is a simplified
//! SM-2 variant: a successful review grows the interval geometrically via a
//! per-item ease factor, a failed review resets the interval to one day.
//!
//! Everything here is pure and synchronous. Callers pass the current time
//! into every operation, so grading is deterministic and testable without a
//! clock.

pub mod error;
pub mod item;
pub mod queue;
pub mod scheduler;

pub use error::SrsError;
pub use item::{Difficulty, ReviewItem, Subject};
pub use queue::ReviewQueue;
pub use scheduler::{Quality, grade};
