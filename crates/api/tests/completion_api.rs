//! HTTP integration tests for `POST /api/v1/player-levels/{id}/complete`.

mod common;

use axum::http::StatusCode;
use bonuses_core::clock::FixedClock;
use bonuses_core::types::CalendarDate;
use common::{body_json, create_id, get, post_empty, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

struct Seed {
    player_level: i64,
    binding: i64,
}

async fn seed(app: &axum::Router, external_id: &str, with_prize: bool) -> Seed {
    let player = create_id(app, "/api/v1/players", json!({"external_id": external_id})).await;
    let level = create_id(app, "/api/v1/levels", json!({"title": "Уровень 1", "sort_order": 1})).await;
    let binding = if with_prize {
        let prize = create_id(app, "/api/v1/prizes", json!({"title": "Золотая монета"})).await;
        create_id(app, "/api/v1/level-prizes", json!({"level_id": level, "prize_id": prize})).await
    } else {
        0
    };
    let player_level = create_id(
        app,
        "/api/v1/player-levels",
        json!({"player_id": player, "level_id": level}),
    )
    .await;
    Seed {
        player_level,
        binding,
    }
}

async fn binding(app: &axum::Router, id: i64) -> Value {
    body_json(get(app.clone(), &format!("/api/v1/level-prizes/{id}")).await).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_level_stamps_prize(pool: PgPool) {
    let app = common::build_test_app(pool);
    let seed = seed(&app, "user_001", true).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/player-levels/{}/complete", seed.player_level),
        json!({"score": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["player_level"]["is_completed"], true);
    assert_eq!(data["player_level"]["score"], 100);
    assert_eq!(data["player_level"]["completed"], "2024-06-01");
    assert_eq!(data["prizes_stamped"], 1);
    assert_eq!(data["was_completed"], false);

    assert_eq!(binding(&app, seed.binding).await["received"], "2024-06-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completion_without_body_defaults_score_to_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let seed = seed(&app, "user_001", false).await;

    let response = post_empty(
        app,
        &format!("/api/v1/player-levels/{}/complete", seed.player_level),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["player_level"]["score"], 0);
    assert_eq!(json["data"]["prizes_stamped"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completion_uses_injected_clock(pool: PgPool) {
    let today = CalendarDate::from_ymd_opt(2025, 1, 31).unwrap();
    let app = common::build_test_app_with(pool, Default::default(), FixedClock(today));
    let seed = seed(&app, "user_001", true).await;

    post_json(
        app.clone(),
        &format!("/api/v1/player-levels/{}/complete", seed.player_level),
        json!({}),
    )
    .await;

    assert_eq!(binding(&app, seed.binding).await["received"], "2025-01-31");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_missing_player_level_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/player-levels/999999/complete",
        json!({"score": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_score_rejected_without_changes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let seed = seed(&app, "user_001", true).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/player-levels/{}/complete", seed.player_level),
        json!({"score": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let row = body_json(
        get(
            app.clone(),
            &format!("/api/v1/player-levels/{}", seed.player_level),
        )
        .await,
    )
    .await;
    assert_eq!(row["data"]["is_completed"], false);
    assert!(binding(&app, seed.binding).await["received"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn recompletion_overwrites_score(pool: PgPool) {
    let app = common::build_test_app(pool);
    let seed = seed(&app, "user_001", true).await;
    let uri = format!("/api/v1/player-levels/{}/complete", seed.player_level);

    post_json(app.clone(), &uri, json!({"score": 100})).await;
    let response = post_json(app, &uri, json!({"score": 30})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["was_completed"], true);
    assert_eq!(json["data"]["player_level"]["score"], 30);
}
