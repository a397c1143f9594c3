//! Handlers for the `/messages` resource (conversation threads).
//!
//! Messages are stored flat and grouped into one thread per user at
//! read time. Sending a reply only appends; consumers refetch the
//! thread list to re-derive grouping with the new message included.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use kreatif_core::error::CoreError;
use kreatif_core::threads;
use kreatif_core::types::{DbId, Timestamp};
use kreatif_db::models::message::{CreateMessage, Message, MessageWithProfile};
use kreatif_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One conversation thread as served to the console.
#[derive(Debug, Serialize)]
pub struct ThreadView {
    pub user_id: DbId,
    pub user_name: String,
    pub user_email: String,
    pub unread_count: usize,
    pub last_activity: Option<Timestamp>,
    pub messages: Vec<MessageWithProfile>,
}

/// Body for `POST /messages/threads/{user_id}/reply`.
#[derive(Debug, Deserialize)]
pub struct ReplyInput {
    pub content: String,
    pub subject: Option<String>,
}

/// Result of a mark-read batch update.
#[derive(Debug, Serialize)]
pub struct MarkReadResult {
    /// Number of messages flipped to read.
    pub updated: u64,
}

/// GET /api/v1/messages/threads
///
/// Every message (with its owner's profile) fetched oldest-first and
/// grouped in memory into per-user threads, most recently active first.
pub async fn list_threads(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ThreadView>>>> {
    let messages = MessageRepo::list_with_profiles(&state.pool).await?;

    let views: Vec<ThreadView> = threads::group_by_user(messages)
        .into_iter()
        .map(|thread| {
            let (user_name, user_email) = thread
                .messages
                .first()
                .map(|m| (m.user_name.clone(), m.user_email.clone()))
                .unwrap_or_default();
            ThreadView {
                user_id: thread.user_id,
                user_name,
                user_email,
                unread_count: thread.unread_count,
                last_activity: thread.last_activity(),
                messages: thread.messages,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: views }))
}

/// POST /api/v1/messages/threads/{user_id}/read
///
/// Marks every inbound unread message in the thread as read in one
/// batch update; after this the thread's unread count is zero.
pub async fn mark_thread_read(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<MarkReadResult>>> {
    let updated = MessageRepo::mark_thread_read(&state.pool, user_id).await?;
    Ok(Json(DataResponse {
        data: MarkReadResult { updated },
    }))
}

/// POST /api/v1/messages/threads/{user_id}/reply
///
/// Appends an admin reply (unread by the client) to the thread.
pub async fn reply(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<ReplyInput>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(CoreError::Validation("Reply content must not be empty".into()).into());
    }

    let message = MessageRepo::create(
        &state.pool,
        &CreateMessage {
            subject: input.subject,
            content: content.to_string(),
            from_admin: true,
            user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
