use thiserror::Error;
use uuid::Uuid;

/// Errors returned by the scheduler.
///
/// Both variants are local validation failures surfaced to the caller;
/// neither is retried and neither is fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SrsError {
    /// The grade is outside the 0-5 SM-2 scale. Rejected rather than
    /// clamped so a caller passing a bad value hears about it.
    #[error("quality {quality} is outside the 0-5 scale")]
    InvalidQuality { quality: u8 },

    /// No review item with this id exists in the queue.
    #[error("review item {id} not found")]
    ItemNotFound { id: Uuid },
}
