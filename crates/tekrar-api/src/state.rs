use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tekrar_srs::ReviewQueue;

use crate::{config::ApiConfig, error::ApiError, item::model::sample_items};

/// Learner id seeded with sample items in development mode.
pub const DEMO_LEARNER: &str = "demo";

/// Shared application state: one independent [`ReviewQueue`] per learner.
///
/// Queues are created lazily on first write. Grading on one learner's queue
/// never observes or blocks on another's beyond the brief map lock; there
/// is no cross-learner coordination.
#[derive(Clone, Debug)]
pub struct ApiState {
    queues: Arc<RwLock<HashMap<String, ReviewQueue>>>,
    pub daily_review_target: u32,
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> Self {
        let state = Self {
            queues: Arc::new(RwLock::new(HashMap::new())),
            daily_review_target: config.daily_review_target,
        };

        if config.env.is_development() {
            state.seed_demo_learner();
        }

        state
    }

    /// Run `f` against a learner's queue read-only. An unknown learner is
    /// handed `None` (an absent queue and an empty one look the same to
    /// readers).
    pub fn read_queue<R>(
        &self,
        learner_id: &str,
        f: impl FnOnce(Option<&ReviewQueue>) -> R,
    ) -> Result<R, ApiError> {
        let queues = self
            .queues
            .read()
            .map_err(|_| ApiError::Internal("state lock poisoned".to_string()))?;
        Ok(f(queues.get(learner_id)))
    }

    /// Run `f` against a learner's queue with write access, creating the
    /// queue if this is the learner's first interaction.
    pub fn write_queue<R>(
        &self,
        learner_id: &str,
        f: impl FnOnce(&mut ReviewQueue) -> R,
    ) -> Result<R, ApiError> {
        let mut queues = self
            .queues
            .write()
            .map_err(|_| ApiError::Internal("state lock poisoned".to_string()))?;
        Ok(f(queues.entry(learner_id.to_string()).or_default()))
    }

    fn seed_demo_learner(&self) {
        let items = sample_items(Utc::now());
        let count = items.len();

        let seeded = self.write_queue(DEMO_LEARNER, |queue| {
            for item in items {
                queue.insert(item);
            }
        });

        match seeded {
            Ok(()) => tracing::info!("Seeded '{DEMO_LEARNER}' learner with {count} sample items"),
            Err(e) => tracing::error!("Failed to seed demo learner: {e}"),
        }
    }
}
