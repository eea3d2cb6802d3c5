use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::Utc;
use serde::Serialize;

use crate::{ApiState, error::ApiError, review::model::TimeQuery, validation::validate_learner_id};

/// Create the stats routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/learners/{learner_id}/stats", get(learner_stats))
}

/// Daily progress snapshot for a learner.
#[derive(Debug, Serialize)]
struct LearnerStats {
    total_items: usize,
    due_now: usize,
    completed_today: u32,
    daily_target: u32,
    completion_percent: f64,
}

/// Today's review progress against the daily target
async fn learner_stats(
    State(state): State<ApiState>,
    Path(learner_id): Path<String>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<LearnerStats>, ApiError> {
    validate_learner_id(&learner_id)?;
    let now = query.now.unwrap_or_else(Utc::now);
    let daily_target = state.daily_review_target;

    let stats = state.read_queue(&learner_id, |queue| match queue {
        Some(q) => {
            let completed_today = q.reviews_completed_today(now);
            LearnerStats {
                total_items: q.len(),
                due_now: q.due_items(now).len(),
                completed_today,
                daily_target,
                completion_percent: completion_percent(completed_today, daily_target),
            }
        }
        None => LearnerStats {
            total_items: 0,
            due_now: 0,
            completed_today: 0,
            daily_target,
            completion_percent: 0.0,
        },
    })?;

    Ok(Json(stats))
}

/// Progress towards the daily target, capped at 100.
fn completion_percent(completed: u32, target: u32) -> f64 {
    if target == 0 {
        return 100.0;
    }
    (f64::from(completed) / f64::from(target) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_percent() {
        assert_eq!(completion_percent(0, 20), 0.0);
        assert_eq!(completion_percent(5, 20), 25.0);
        assert_eq!(completion_percent(20, 20), 100.0);
        // More reviews than the target still reads 100%.
        assert_eq!(completion_percent(33, 20), 100.0);
        // A zero target means there is nothing left to ask for.
        assert_eq!(completion_percent(0, 0), 100.0);
    }
}
