mod common;

use axum::http::StatusCode;
use common::{TestClient, test_client};
use serde_json::json;

async fn create_item(client: &TestClient, learner: &str, prompt: &str) -> serde_json::Value {
    let response = client
        .post_json(
            &format!("/learners/{learner}/items"),
            &json!({
                "prompt": prompt,
                "subject": "Matematik",
                "difficulty": "easy",
            }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn create_item_returns_a_fresh_item() {
    let client = test_client();

    let response = client
        .post_json(
            "/learners/ayse/items",
            &json!({
                "prompt": "Bir üçgenin iç açıları toplamı kaçtır?",
                "subject": "Matematik",
                "difficulty": "easy",
                "explanation": "Her üçgen için 180 derecedir.",
            }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);

    let item: serde_json::Value = response.json();
    assert_eq!(item["review_count"], 0);
    assert_eq!(item["interval_days"], 1);
    assert_eq!(item["ease_factor"], 2.5);
    assert_eq!(item["subject"], "Matematik");
    assert_eq!(item["difficulty"], "easy");
    assert!(item["last_reviewed_at"].is_null());
    // A new item is due immediately.
    assert_eq!(item["next_due_at"], item["created_at"]);
}

#[tokio::test]
async fn created_items_are_listed_oldest_first() {
    let client = test_client();
    let first = create_item(&client, "ayse", "Soru 1").await;
    let second = create_item(&client, "ayse", "Soru 2").await;

    let response = client.get("/learners/ayse/items").await;
    response.assert_status(StatusCode::OK);

    let items: Vec<serde_json::Value> = response.json();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], first["id"]);
    assert_eq!(items[1]["id"], second["id"]);
}

#[tokio::test]
async fn get_item_by_id() {
    let client = test_client();
    let item = create_item(&client, "ayse", "Soru").await;
    let id = item["id"].as_str().unwrap();

    let response = client.get(&format!("/learners/ayse/items/{id}")).await;
    response.assert_status(StatusCode::OK);

    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["prompt"], "Soru");
}

#[tokio::test]
async fn unknown_item_is_404() {
    let client = test_client();
    create_item(&client, "ayse", "Soru").await;

    let response = client
        .get("/learners/ayse/items/550e8400-e29b-41d4-a716-446655440000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn list_for_unknown_learner_is_empty() {
    let client = test_client();

    let response = client.get("/learners/nobody/items").await;
    response.assert_status(StatusCode::OK);

    let items: Vec<serde_json::Value> = response.json();
    assert!(items.is_empty());
}

#[tokio::test]
async fn invalid_learner_id_is_rejected() {
    let client = test_client();

    let response = client
        .post_json(
            "/learners/has%20space/items",
            &json!({
                "prompt": "Soru",
                "subject": "Türkçe",
                "difficulty": "medium",
            }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn blank_prompt_is_rejected() {
    let client = test_client();

    let response = client
        .post_json(
            "/learners/ayse/items",
            &json!({
                "prompt": "   ",
                "subject": "Fen Bilimleri",
                "difficulty": "hard",
            }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation_error");
}
