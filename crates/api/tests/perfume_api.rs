//! Integration tests for the perfume catalog endpoints: list, search,
//! detail, CRUD, and input validation at the HTTP boundary.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, send_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_brand(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO brands (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn create_perfume(app: &axum::Router, body: serde_json::Value) -> serde_json::Value {
    let response = send_json(app.clone(), Method::POST, "/api/v1/perfumes", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_catalog_lists_as_empty_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/perfumes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_count_does_not_change_with_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    for i in 0..5 {
        create_perfume(&app, json!({ "name": format!("Perfume {i}") })).await;
    }

    let first = body_json(get(app.clone(), "/api/v1/perfumes?page=1&size=2").await).await;
    let last = body_json(get(app.clone(), "/api/v1/perfumes?page=3&size=2").await).await;

    assert_eq!(first["count"], 5);
    assert_eq!(last["count"], 5);
    assert_eq!(first["data"].as_array().unwrap().len(), 2);
    assert_eq!(last["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sentinel_filter_is_ignored_and_concrete_filter_applies(pool: PgPool) {
    let brand_id = seed_brand(&pool, "Chanel").await;
    let other_id = seed_brand(&pool, "Dior").await;
    let app = common::build_test_app(pool);

    create_perfume(&app, json!({ "name": "No. 5", "brand_id": brand_id })).await;
    create_perfume(&app, json!({ "name": "Sauvage", "brand_id": other_id })).await;

    let uri = format!("/api/v1/perfumes?gender=all&brand_id={brand_id}");
    let json = body_json(get(app.clone(), &uri).await).await;

    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["name"], "No. 5");
    assert_eq!(json["data"][0]["brand_name"], "Chanel");
}

// ---------------------------------------------------------------------------
// Validation at the HTTP boundary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_zero_is_rejected_before_any_query(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/perfumes?page=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn absurdly_large_page_number_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/perfumes?page={}&size=100", i64::MAX);
    let response = get(app, &uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_page_size_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/perfumes?size=10000").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_brand_filter_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/perfumes?brand_id=chanel").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unrecognized_filter_key_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/perfumes?bran_id=3").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_name_substring(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_perfume(&app, json!({ "name": "Rose Elixir" })).await;
    create_perfume(&app, json!({ "name": "Oud Royale" })).await;

    let json = body_json(get(app.clone(), "/api/v1/perfumes/search?q=rose").await).await;

    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["name"], "Rose Elixir");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_with_blank_query_equals_plain_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    for i in 0..3 {
        create_perfume(&app, json!({ "name": format!("Perfume {i}") })).await;
    }

    let searched = body_json(get(app.clone(), "/api/v1/perfumes/search?q=%20%20").await).await;
    let listed = body_json(get(app.clone(), "/api/v1/perfumes").await).await;

    assert_eq!(searched, listed);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_returns_denormalized_object(pool: PgPool) {
    let brand_id = seed_brand(&pool, "Chanel").await;
    let app = common::build_test_app(pool);

    let created = create_perfume(
        &app,
        json!({
            "name": "No. 5",
            "brand_id": brand_id,
            "gender": "female",
            "season": ["winter"],
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/perfumes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "No. 5");
    assert_eq!(json["data"]["brand"]["name"], "Chanel");
    assert_eq!(json["data"]["season"], json!(["winter"]));
    assert_eq!(json["data"]["notes"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_of_missing_id_is_not_found_not_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/perfumes/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_blank_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/perfumes",
        json!({ "name": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_within_brand_conflicts(pool: PgPool) {
    let brand_id = seed_brand(&pool, "Chanel").await;
    let app = common::build_test_app(pool);

    create_perfume(&app, json!({ "name": "No. 5", "brand_id": brand_id })).await;
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/perfumes",
        json!({ "name": "No. 5", "brand_id": brand_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let created = create_perfume(&app, json!({ "name": "Original" })).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let updated = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/perfumes/{id}"),
        json!({ "name": "Renamed" }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(body_json(updated).await["data"]["name"], "Renamed");

    let deleted = delete(app.clone(), &format!("/api/v1/perfumes/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = delete(app.clone(), &format!("/api/v1/perfumes/{id}")).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
