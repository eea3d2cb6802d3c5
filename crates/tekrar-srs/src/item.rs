use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ease factor assigned to newly created items.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Lower bound for the ease factor. The SM-2 update never takes an item
/// below this, no matter how often it is failed.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// LGS subject of a review item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Matematik")]
    Matematik,
    #[serde(rename = "Türkçe")]
    Turkce,
    #[serde(rename = "Fen Bilimleri")]
    FenBilimleri,
    #[serde(rename = "Sosyal Bilgiler")]
    SosyalBilgiler,
}

impl Subject {
    /// The label shown to learners (and used on the wire).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Matematik => "Matematik",
            Self::Turkce => "Türkçe",
            Self::FenBilimleri => "Fen Bilimleri",
            Self::SosyalBilgiler => "Sosyal Bilgiler",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rough difficulty label attached to an item when it is authored.
///
/// Informational only: the scheduler adapts through the ease factor, not
/// through this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single piece of reviewable content and its scheduling state.
///
/// Scheduling fields are mutated only by [`crate::scheduler::grade`] (via
/// [`crate::ReviewQueue::grade`]); items are never deleted. Invariants held
/// across every grade: `ease_factor >= 1.3`, `interval_days >= 1`, and
/// `next_due_at = last_reviewed_at + interval_days` in whole days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    /// Unique item id.
    pub id: Uuid,
    /// Question shown to the learner.
    pub prompt: String,
    /// Coach explanation revealed together with the answer.
    pub explanation: Option<String>,
    /// Subject label.
    pub subject: Subject,
    /// Authored difficulty label.
    pub difficulty: Difficulty,
    /// Creation time. New items are due immediately, so this is also the
    /// initial `next_due_at`.
    pub created_at: DateTime<Utc>,
    /// Last time the item was graded, `None` until the first review.
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// When the item becomes eligible for review again.
    pub next_due_at: DateTime<Utc>,
    /// Days until the next due date.
    pub interval_days: u32,
    /// Multiplier controlling interval growth on success.
    pub ease_factor: f64,
    /// Number of completed reviews.
    pub review_count: u32,
}

impl ReviewItem {
    /// Create a fresh item, due immediately.
    pub fn new(
        prompt: impl Into<String>,
        subject: Subject,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            explanation: None,
            subject,
            difficulty,
            created_at: now,
            last_reviewed_at: None,
            next_due_at: now,
            interval_days: 1,
            ease_factor: INITIAL_EASE_FACTOR,
            review_count: 0,
        }
    }

    /// Attach a coach explanation.
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Whether the item is eligible for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due_at <= now
    }
}
