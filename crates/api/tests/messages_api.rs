//! Integration tests for conversation threads: grouping, unread counts,
//! mark-read batches, and replies.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use kreatif_db::models::message::CreateMessage;
use kreatif_db::models::profile::CreateProfile;
use kreatif_db::repositories::{MessageRepo, ProfileRepo};

async fn create_client(pool: &PgPool, name: &str, email: &str) -> i64 {
    ProfileRepo::create(
        pool,
        &CreateProfile {
            name: name.to_string(),
            email: email.to_string(),
            role: None,
            company: None,
            phone: None,
            country: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn send(pool: &PgPool, user_id: i64, from_admin: bool, content: &str) {
    MessageRepo::create(
        pool,
        &CreateMessage {
            subject: None,
            content: content.to_string(),
            from_admin,
            user_id,
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn threads_group_by_user_and_count_inbound_unread(pool: PgPool) {
    let alice = create_client(&pool, "Alice", "alice@example.test").await;
    let bob = create_client(&pool, "Bob", "bob@example.test").await;

    send(&pool, alice, false, "Hi, question about my project").await;
    send(&pool, alice, true, "Sure, go ahead").await;
    send(&pool, alice, false, "When is the review?").await;
    send(&pool, bob, false, "Invoice question").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get(app, "/api/v1/messages/threads").await, StatusCode::OK).await;

    let threads = json["data"].as_array().unwrap();
    assert_eq!(threads.len(), 2);

    // Bob's thread has the most recent message, so it sorts first.
    assert_eq!(threads[0]["user_name"], "Bob");
    assert_eq!(threads[0]["unread_count"], 1);

    let alice_thread = &threads[1];
    assert_eq!(alice_thread["user_name"], "Alice");
    assert_eq!(alice_thread["unread_count"], 2);
    assert_eq!(alice_thread["messages"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn opening_a_thread_marks_all_inbound_read(pool: PgPool) {
    let alice = create_client(&pool, "Alice", "alice@example.test").await;
    send(&pool, alice, false, "One").await;
    send(&pool, alice, false, "Two").await;
    send(&pool, alice, true, "Admin note").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json(
            app,
            &format!("/api/v1/messages/threads/{alice}/read"),
            json!({}),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"]["updated"], 2);

    // Unread count is now zero and every inbound message reads as read.
    let app = common::build_test_app(pool.clone());
    let threads = expect_json(get(app, "/api/v1/messages/threads").await, StatusCode::OK).await;
    let thread = &threads["data"].as_array().unwrap()[0];
    assert_eq!(thread["unread_count"], 0);
    for message in thread["messages"].as_array().unwrap() {
        if message["from_admin"] == false {
            assert_eq!(message["read"], true);
        }
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mark_read_is_idempotent(pool: PgPool) {
    let alice = create_client(&pool, "Alice", "alice@example.test").await;
    send(&pool, alice, false, "One").await;

    let app = common::build_test_app(pool.clone());
    let first = expect_json(
        post_json(
            app,
            &format!("/api/v1/messages/threads/{alice}/read"),
            json!({}),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(first["data"]["updated"], 1);

    let app = common::build_test_app(pool.clone());
    let second = expect_json(
        post_json(
            app,
            &format!("/api/v1/messages/threads/{alice}/read"),
            json!({}),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(second["data"]["updated"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reply_appends_unread_admin_message(pool: PgPool) {
    let alice = create_client(&pool, "Alice", "alice@example.test").await;
    send(&pool, alice, false, "Hello?").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json(
            app,
            &format!("/api/v1/messages/threads/{alice}/reply"),
            json!({ "content": "  On it!  " }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(json["from_admin"], true);
    assert_eq!(json["read"], false);
    assert_eq!(json["content"], "On it!");

    // A refetch re-derives the grouping with the reply included.
    let app = common::build_test_app(pool.clone());
    let threads = expect_json(get(app, "/api/v1/messages/threads").await, StatusCode::OK).await;
    let thread = &threads["data"].as_array().unwrap()[0];
    assert_eq!(thread["messages"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_reply_is_rejected(pool: PgPool) {
    let alice = create_client(&pool, "Alice", "alice@example.test").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/messages/threads/{alice}/reply"),
        json!({ "content": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
