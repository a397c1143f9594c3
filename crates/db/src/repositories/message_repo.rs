//! Repository for the `messages` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::message::{CreateMessage, Message, MessageWithProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject, content, from_admin, read, user_id, created_at";

/// Provides operations for messages and their per-user threads.
pub struct MessageRepo;

impl MessageRepo {
    /// Append a message to a user's thread, returning the created row.
    /// New messages always start unread.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (subject, content, from_admin, read, user_id)
             VALUES ($1, $2, $3, FALSE, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.subject)
            .bind(&input.content)
            .bind(input.from_admin)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// All messages joined with their owner, oldest first.
    ///
    /// The console groups this flat list into per-user threads in memory.
    pub async fn list_with_profiles(
        pool: &PgPool,
    ) -> Result<Vec<MessageWithProfile>, sqlx::Error> {
        sqlx::query_as::<_, MessageWithProfile>(
            "SELECT m.id, m.subject, m.content, m.from_admin, m.read, m.user_id,
                    p.name AS user_name, p.email AS user_email, m.created_at
             FROM messages m
             JOIN profiles p ON p.id = m.user_id
             ORDER BY m.created_at ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// One user's messages, oldest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages WHERE user_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark every inbound unread message in a user's thread as read.
    ///
    /// Returns the number of messages updated.
    pub async fn mark_thread_read(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE messages SET read = TRUE
             WHERE user_id = $1 AND from_admin = FALSE AND read = FALSE",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Number of unread messages in one user's thread (any direction).
    /// Powers the client dashboard badge.
    pub async fn unread_count_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE user_id = $1 AND read = FALSE",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Number of inbound unread messages across all threads.
    /// Powers the admin overview badge.
    pub async fn count_unread_inbound(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE from_admin = FALSE AND read = FALSE",
        )
        .fetch_one(pool)
        .await
    }
}
