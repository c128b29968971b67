//! End-to-end tests against PostgreSQL. Each test gets a fresh database from
//! `#[sqlx::test]`, which reads the server address from `DATABASE_URL`.

mod common;

use adv_service::{ensure_schema, AdvService, AppError, CreateAdv, UnitOfWork};
use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

async fn create_bike(pool: &PgPool) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/adv/",
        json!({"title": "Bike", "author": "Ann"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn count_rows(pool: &PgPool) -> i64 {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM advertisements")
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[sqlx::test]
async fn full_lifecycle(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let before = chrono::Utc::now().timestamp();

    let response = post_json(
        build_test_app(pool.clone()),
        "/adv/",
        json!({"title": "Bike", "author": "Ann"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({"id": 1}));

    let response = get(build_test_app(pool.clone()), "/adv/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let adv = body_json(response).await;
    assert_eq!(adv["id"], 1);
    assert_eq!(adv["title"], "Bike");
    assert_eq!(adv["description"], json!(null));
    assert_eq!(adv["author"], "Ann");
    let created_at = adv["created_at"].as_i64().expect("integer epoch seconds");
    assert!(created_at >= before - 5, "created_at {created_at} before request {before}");

    let response = patch_json(build_test_app(pool.clone()), "/adv/1", json!({"description": "Red"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1}));

    let adv = body_json(get(build_test_app(pool.clone()), "/adv/1").await).await;
    assert_eq!(adv["description"], "Red");
    assert_eq!(adv["title"], "Bike");

    let response = delete(build_test_app(pool.clone()), "/adv/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1}));

    let response = get(build_test_app(pool), "/adv/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn missing_ids_are_404_for_every_operation(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let app = || build_test_app(pool.clone());

    assert_eq!(get(app(), "/adv/999").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        patch_json(app(), "/adv/999", json!({"title": "X"})).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete(app(), "/adv/999").await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn ids_are_fresh(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let first = create_bike(&pool).await;
    let second = create_bike(&pool).await;
    assert_ne!(first, second);
}

#[sqlx::test]
async fn repeated_patch_is_idempotent(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let id = create_bike(&pool).await;
    let uri = format!("/adv/{id}");

    patch_json(build_test_app(pool.clone()), &uri, json!({"title": "X"})).await;
    let once = body_json(get(build_test_app(pool.clone()), &uri).await).await;
    patch_json(build_test_app(pool.clone()), &uri, json!({"title": "X"})).await;
    let twice = body_json(get(build_test_app(pool), &uri).await).await;

    assert_eq!(once, twice);
    assert_eq!(twice["title"], "X");
}

#[sqlx::test]
async fn patch_ignores_id_and_created_at(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let id = create_bike(&pool).await;
    let uri = format!("/adv/{id}");
    let before = body_json(get(build_test_app(pool.clone()), &uri).await).await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"id": 777, "created_at": 0, "author": "Bob"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": id}));

    let after = body_json(get(build_test_app(pool.clone()), &uri).await).await;
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["created_at"], before["created_at"]);
    assert_eq!(after["author"], "Bob");
    assert_eq!(
        get(build_test_app(pool), "/adv/777").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test]
async fn delete_is_one_shot(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let id = create_bike(&pool).await;
    let uri = format!("/adv/{id}");

    assert_eq!(delete(build_test_app(pool.clone()), &uri).await.status(), StatusCode::OK);
    assert_eq!(delete(build_test_app(pool.clone()), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        patch_json(build_test_app(pool.clone()), &uri, json!({"title": "X"})).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(get(build_test_app(pool), &uri).await.status(), StatusCode::NOT_FOUND);
}

/// One pooled connection, so the second unit of work runs on the connection
/// the dropped one used. Had the drop not rolled back, the insert would still
/// be visible there (or the connection would be stuck mid-transaction).
#[sqlx::test]
async fn uncommitted_unit_of_work_rolls_back(pool_opts: PgPoolOptions, conn_opts: PgConnectOptions) {
    let pool = pool_opts
        .max_connections(1)
        .connect_with(conn_opts)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    let input = CreateAdv {
        title: "Draft".into(),
        description: None,
        author: None,
    };

    let mut uow = UnitOfWork::new(pool.clone());
    let draft = AdvService::create(uow.conn().await.unwrap(), &input)
        .await
        .unwrap();
    assert!(uow.is_active());
    drop(uow);

    let mut uow = UnitOfWork::new(pool.clone());
    let conn = uow.conn().await.unwrap();
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM advertisements")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(n, 0);
    assert!(matches!(
        AdvService::get(&mut *conn, draft.id).await,
        Err(AppError::NotFound("adv"))
    ));
    uow.commit().await.unwrap();

    let mut uow = UnitOfWork::new(pool.clone());
    AdvService::create(uow.conn().await.unwrap(), &input)
        .await
        .unwrap();
    uow.commit().await.unwrap();
    assert_eq!(count_rows(&pool).await, 1);
}

#[sqlx::test]
async fn ensure_schema_is_idempotent(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    create_bike(&pool).await;
    ensure_schema(&pool).await.unwrap();
    assert_eq!(count_rows(&pool).await, 1);
}
