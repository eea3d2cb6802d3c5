use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tekrar_srs::{Quality, ReviewItem};

use crate::{
    ApiState,
    error::ApiError,
    metrics,
    review::model::{GradeRequest, TimeQuery},
    validation::validate_learner_id,
};

/// Create the review routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/learners/{learner_id}/reviews", post(grade_review))
        .route("/learners/{learner_id}/reviews/due", get(due_reviews))
        .route("/learners/{learner_id}/reviews/next", get(next_review))
}

/// Grade a review and reschedule the item
async fn grade_review(
    State(state): State<ApiState>,
    Path(learner_id): Path<String>,
    Json(payload): Json<GradeRequest>,
) -> Result<Json<ReviewItem>, ApiError> {
    validate_learner_id(&learner_id)?;
    let quality = Quality::new(payload.quality)?;

    let now = Utc::now();
    let graded = state.write_queue(&learner_id, |queue| {
        queue.grade(payload.item_id, quality, now)
    })??;

    metrics::record_review(graded.subject.label(), quality.is_pass());
    tracing::debug!(
        learner_id = %learner_id,
        item_id = %graded.id,
        quality = quality.value(),
        interval_days = graded.interval_days,
        "Graded review"
    );

    Ok(Json(graded))
}

/// List the items due for review, oldest due date first
async fn due_reviews(
    State(state): State<ApiState>,
    Path(learner_id): Path<String>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<Vec<ReviewItem>>, ApiError> {
    validate_learner_id(&learner_id)?;
    let now = query.now.unwrap_or_else(Utc::now);

    let due = state.read_queue(&learner_id, |queue| {
        queue.map_or_else(Vec::new, |q| {
            q.due_items(now).into_iter().cloned().collect()
        })
    })?;

    Ok(Json(due))
}

/// The next item to present, or 204 when the learner is all done
async fn next_review(
    State(state): State<ApiState>,
    Path(learner_id): Path<String>,
    Query(query): Query<TimeQuery>,
) -> Result<Response, ApiError> {
    validate_learner_id(&learner_id)?;
    let now = query.now.unwrap_or_else(Utc::now);

    let next = state.read_queue(&learner_id, |queue| {
        queue.and_then(|q| q.pick_next(now).cloned())
    })?;

    Ok(match next {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
