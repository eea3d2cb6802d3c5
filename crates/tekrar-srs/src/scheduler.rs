//! The grading step of the simplified SM-2 scheduler.
//!
//! A review is graded on the standard 0-5 SM-2 scale. Quality 3 and above
//! counts as "remembered" and grows the interval; below 3 counts as
//! "forgot" and resets it to one day. The product UI only ever submits 1
//! ("Zor Geldi") and 3 ("Kolay Geldi"), so that subrange gets the heaviest
//! test coverage, but the full scale is accepted.

use chrono::{DateTime, Duration, Utc};

use crate::error::SrsError;
use crate::item::{MIN_EASE_FACTOR, ReviewItem};

/// Highest accepted quality value.
pub const MAX_QUALITY: u8 = 5;

/// Lowest quality that counts as a successful recall.
pub const PASS_THRESHOLD: u8 = 3;

/// Interval after the first successful review, in days.
const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval after the second successful review, in days.
const SECOND_INTERVAL_DAYS: u32 = 6;

/// A validated review grade on the 0-5 SM-2 scale.
///
/// Construction is the only validation point: out-of-range input is
/// rejected with [`SrsError::InvalidQuality`] instead of being clamped, so
/// caller bugs are not silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    /// Validate a raw grade.
    pub const fn new(quality: u8) -> Result<Self, SrsError> {
        if quality > MAX_QUALITY {
            return Err(SrsError::InvalidQuality { quality });
        }
        Ok(Self(quality))
    }

    /// The raw 0-5 value.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Whether this grade counts as a successful recall.
    pub const fn is_pass(&self) -> bool {
        self.0 >= PASS_THRESHOLD
    }
}

/// Grade a review and compute the item's next scheduling state.
///
/// Returns a new record; the caller decides where it lives (see
/// [`crate::ReviewQueue::grade`]). Passing `now` explicitly keeps grading
/// deterministic: the same item, grade and timestamp always produce the
/// same output.
///
/// The interval step:
/// * success, first review: 1 day
/// * success, second review: 6 days
/// * success afterwards: `round(interval_days * ease_factor)`, using the
///   ease factor from before this review
/// * failure: back to 1 day regardless of review count
///
/// The ease factor then moves by
/// `0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)` and is floored at 1.3.
pub fn grade(item: &ReviewItem, quality: Quality, now: DateTime<Utc>) -> ReviewItem {
    let new_interval = if quality.is_pass() {
        match item.review_count {
            0 => FIRST_INTERVAL_DAYS,
            1 => SECOND_INTERVAL_DAYS,
            _ => (f64::from(item.interval_days) * item.ease_factor).round() as u32,
        }
    } else {
        FIRST_INTERVAL_DAYS
    };

    let q = f64::from(quality.value());
    let new_ease =
        (item.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02))).max(MIN_EASE_FACTOR);

    ReviewItem {
        last_reviewed_at: Some(now),
        next_due_at: now + Duration::days(i64::from(new_interval)),
        interval_days: new_interval,
        ease_factor: new_ease,
        review_count: item.review_count + 1,
        ..item.clone()
    }
}
