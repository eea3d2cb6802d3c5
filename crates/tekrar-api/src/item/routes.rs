use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::Utc;
use tekrar_srs::ReviewItem;
use uuid::Uuid;

use crate::{
    ApiState, error::ApiError, item::model::CreateItemRequest, validation::validate_learner_id,
};

/// Create the item routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/learners/{learner_id}/items",
            get(list_items).post(create_item),
        )
        .route("/learners/{learner_id}/items/{item_id}", get(get_item))
}

/// Create a review item for a learner
async fn create_item(
    State(state): State<ApiState>,
    Path(learner_id): Path<String>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ReviewItem>), ApiError> {
    validate_learner_id(&learner_id)?;
    payload.validate()?;

    let item = payload.into_item(Utc::now());
    let stored = state.write_queue(&learner_id, |queue| {
        queue.insert(item.clone());
        item
    })?;

    tracing::debug!(
        learner_id = %learner_id,
        item_id = %stored.id,
        subject = %stored.subject,
        "Created review item"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Get all of a learner's items, oldest first
async fn list_items(
    State(state): State<ApiState>,
    Path(learner_id): Path<String>,
) -> Result<Json<Vec<ReviewItem>>, ApiError> {
    validate_learner_id(&learner_id)?;

    let items = state.read_queue(&learner_id, |queue| {
        queue.map_or_else(Vec::new, |q| q.items().into_iter().cloned().collect())
    })?;

    Ok(Json(items))
}

/// Get a single item by id
async fn get_item(
    State(state): State<ApiState>,
    Path((learner_id, item_id)): Path<(String, Uuid)>,
) -> Result<Json<ReviewItem>, ApiError> {
    validate_learner_id(&learner_id)?;

    let item = state.read_queue(&learner_id, |queue| {
        queue.and_then(|q| q.get(item_id).cloned())
    })?;

    item.map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("review item {item_id}")))
}
