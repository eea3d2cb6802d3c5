use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Payload for grading a review.
///
/// `quality` is the raw 0-5 grade; it is validated by the scheduler, not
/// here, so out-of-range values surface as `invalid_quality` rather than a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub item_id: Uuid,
    pub quality: u8,
}

/// Optional time override for due-list queries, RFC 3339.
///
/// Defaults to the server clock. Lets clients (and tests) ask "what will
/// be due tomorrow morning?" without waiting for tomorrow morning.
#[derive(Debug, Default, Deserialize)]
pub struct TimeQuery {
    pub now: Option<DateTime<Utc>>,
}
