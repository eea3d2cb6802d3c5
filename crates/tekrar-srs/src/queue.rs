//! Per-learner review queue.
//!
//! The queue is the explicit store the scheduler operates on: a mapping
//! from item id to [`ReviewItem`], owned by whoever drives the reviews and
//! passed in by reference. One queue per learner; queues are fully
//! independent of each other.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::SrsError;
use crate::item::ReviewItem;
use crate::scheduler::{Quality, grade};

/// All review state for a single learner.
///
/// Due items are served oldest-due first: ordered by `next_due_at`
/// ascending, with ties broken by `created_at` and then id so the order is
/// deterministic. Grading re-sorts the queue implicitly by moving the
/// graded item's due date into the future.
#[derive(Debug, Default, Clone)]
pub struct ReviewQueue {
    items: HashMap<Uuid, ReviewItem>,
    /// Reviews completed on `last_review_day`; lazily reset on day change.
    reviews_today: u32,
    last_review_day: Option<NaiveDate>,
}

impl ReviewQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning its id.
    pub fn insert(&mut self, item: ReviewItem) -> Uuid {
        let id = item.id;
        self.items.insert(id, item);
        id
    }

    /// Look up an item by id.
    pub fn get(&self, id: Uuid) -> Option<&ReviewItem> {
        self.items.get(&id)
    }

    /// All items, oldest first.
    pub fn items(&self) -> Vec<&ReviewItem> {
        let mut items: Vec<&ReviewItem> = self.items.values().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        items
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items eligible for review at `now`, oldest due date first.
    pub fn due_items(&self, now: DateTime<Utc>) -> Vec<&ReviewItem> {
        let mut due: Vec<&ReviewItem> =
            self.items.values().filter(|item| item.is_due(now)).collect();
        due.sort_by(|a, b| {
            a.next_due_at
                .cmp(&b.next_due_at)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        due
    }

    /// The next item to present, or `None` when nothing is due ("all
    /// done"). FIFO over the due ordering: grading the returned item pushes
    /// its due date forward, so the following call yields the next one.
    pub fn pick_next(&self, now: DateTime<Utc>) -> Option<&ReviewItem> {
        self.due_items(now).into_iter().next()
    }

    /// Grade an item and store its new scheduling state.
    ///
    /// Returns the updated item, or [`SrsError::ItemNotFound`] for an
    /// unknown id. The update is applied in one step, so no caller ever
    /// observes a half-graded item.
    pub fn grade(
        &mut self,
        id: Uuid,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> Result<ReviewItem, SrsError> {
        let item = self.items.get(&id).ok_or(SrsError::ItemNotFound { id })?;
        let graded = grade(item, quality, now);
        self.items.insert(id, graded.clone());
        self.record_review(now);
        Ok(graded)
    }

    /// Reviews completed during the UTC day of `now`.
    pub fn reviews_completed_today(&self, now: DateTime<Utc>) -> u32 {
        if self.last_review_day == Some(now.date_naive()) {
            self.reviews_today
        } else {
            0
        }
    }

    fn record_review(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();
        if self.last_review_day == Some(today) {
            self.reviews_today += 1;
        } else {
            self.last_review_day = Some(today);
            self.reviews_today = 1;
        }
    }
}
